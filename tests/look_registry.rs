//! Widget look registry: loading, lookup and unloading.

mod common;

use common::{FRAME_LOOK, LIST_LOOK, SAMPLE_LOOKNFEEL, sample_looks};
use falagard::error::ObjectKind;
use falagard::falagard::{
    ComponentArea, ImageryComponent, LayerSpecification, NamedArea, StateImagery, UnloadPolicy, WidgetLook,
};
use falagard::render::Rect;
use falagard::widget::{FrameWindow, ListView, LookWidget, VecItemModel, WindowRegistry};
use falagard::{Error, WidgetLookManager};

const EXTRA_LOOK: &str = r#"
<Falagard>
    <WidgetLook name="Sample/Button">
        <StateImagery name="Normal"/>
    </WidgetLook>
</Falagard>
"#;

#[test]
fn sample_looks_are_registered() {
    let looks = sample_looks();
    assert_eq!(looks.widget_look_names(), [FRAME_LOOK, LIST_LOOK]);
    assert!(looks.is_widget_look_available(FRAME_LOOK));
    assert!(!looks.is_widget_look_available("Sample/Button"));

    let frame = looks.get_widget_look(FRAME_LOOK).unwrap();
    assert_eq!(frame.state_names(), ["Active", "Disabled", "Inactive"]);
    assert_eq!(frame.named_area_names(), ["ClientArea", "Full", "Titlebar"]);
    assert_eq!(frame.child_components().len(), 2);
}

#[test]
fn unknown_look_is_not_found() {
    let looks = sample_looks();
    let err = looks.get_widget_look("Nope").unwrap_err();
    assert!(matches!(err, Error::NotFound { kind: ObjectKind::WidgetLook, ref name } if name == "Nope"));
}

#[test]
fn reloading_same_source_fails_atomically() {
    let mut looks = sample_looks();
    let err = looks.parse_look_source(SAMPLE_LOOKNFEEL).unwrap_err();
    assert!(matches!(err, Error::DuplicateName { kind: ObjectKind::WidgetLook, .. }));
    assert_eq!(looks.len(), 2);
}

#[test]
fn batch_with_duplicate_registers_nothing() {
    let mut looks = WidgetLookManager::new();
    let xml = format!(
        "<Falagard>{0}{0}<WidgetLook name=\"Other\"/></Falagard>",
        "<WidgetLook name=\"Twice\"/>"
    );
    assert!(looks.parse_look_source(&xml).is_err());
    assert!(looks.is_empty());
}

#[test]
fn invalid_reference_registers_nothing() {
    let mut looks = WidgetLookManager::new();
    let bad = WidgetLook::new("Bad").with_state_imagery(
        StateImagery::new("Normal")
            .with_layer(LayerSpecification::new(0).with_image(ImageryComponent::in_named_area("x", "Missing"))),
    );
    let good = WidgetLook::new("Good");
    let err = looks.load_from_source(&vec![good, bad]).unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
    assert!(!looks.is_widget_look_available("Good"));
}

#[test]
fn add_widget_look_programmatically() {
    let mut looks = WidgetLookManager::new();
    looks
        .add_widget_look(WidgetLook::new("Code/Panel").with_named_area(NamedArea::new("Inner", ComponentArea::inset(2.0))))
        .unwrap();
    assert!(looks.get_widget_look("Code/Panel").unwrap().is_named_area_defined("Inner"));
}

#[test]
fn unload_allows_dangling_handles_by_default() {
    let mut looks = sample_looks();
    let handle = looks.get_widget_look(FRAME_LOOK).unwrap();
    looks.unload(FRAME_LOOK).unwrap();
    assert!(!looks.is_widget_look_available(FRAME_LOOK));
    // The handle stays usable on its own.
    assert_eq!(handle.name(), FRAME_LOOK);
    assert!(matches!(looks.unload(FRAME_LOOK), Err(Error::NotFound { .. })));
}

#[test]
fn refuse_in_use_policy_blocks_unload() {
    let mut looks = WidgetLookManager::with_policy(UnloadPolicy::RefuseInUse);
    looks.parse_look_source(SAMPLE_LOOKNFEEL).unwrap();

    let handle = looks.get_widget_look(LIST_LOOK).unwrap();
    let err = looks.unload(LIST_LOOK).unwrap_err();
    assert!(matches!(err, Error::InUse { holders: 1, .. }));

    drop(handle);
    looks.unload(LIST_LOOK).unwrap();
    assert_eq!(looks.len(), 1);
}

#[test]
fn initialised_frame_blocks_unload() {
    let mut looks = WidgetLookManager::with_policy(UnloadPolicy::RefuseInUse);
    looks.parse_look_source(SAMPLE_LOOKNFEEL).unwrap();
    let mut windows = WindowRegistry::new();

    let mut frame = FrameWindow::new("Frame", FRAME_LOOK);
    frame.window_mut().set_area(Rect::new(0.0, 0.0, 200.0, 100.0));
    frame.initialise_components(&looks, &mut windows).unwrap();

    let err = looks.unload(FRAME_LOOK).unwrap_err();
    assert!(matches!(err, Error::InUse { holders: 1, ref name } if name == FRAME_LOOK));
    assert!(looks.is_widget_look_available(FRAME_LOOK));

    drop(frame);
    looks.unload(FRAME_LOOK).unwrap();
    assert!(!looks.is_widget_look_available(FRAME_LOOK));
}

#[test]
fn initialised_list_view_blocks_unload() {
    let mut looks = WidgetLookManager::with_policy(UnloadPolicy::RefuseInUse);
    looks.parse_look_source(SAMPLE_LOOKNFEEL).unwrap();

    let mut view = ListView::new("List", LIST_LOOK, VecItemModel::from_texts(["a"]));
    view.initialise(&looks).unwrap();
    assert_eq!(view.window().properties.get("SortMode").map(String::as_str), Some("None"));
    assert!(matches!(looks.unload(LIST_LOOK), Err(Error::InUse { holders: 1, .. })));

    drop(view);
    looks.unload(LIST_LOOK).unwrap();
}

#[test]
fn load_directory_tree() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.looknfeel"), SAMPLE_LOOKNFEEL).unwrap();
    std::fs::create_dir(dir.path().join("nested")).unwrap();
    std::fs::write(dir.path().join("nested").join("b.xml"), EXTRA_LOOK).unwrap();
    std::fs::write(dir.path().join("notes.txt"), "not a look").unwrap();

    let mut looks = WidgetLookManager::new();
    let loaded = looks.load_path(dir.path()).unwrap();
    assert_eq!(loaded, [FRAME_LOOK, LIST_LOOK, "Sample/Button"]);
    assert_eq!(looks.len(), 3);
}

#[test]
fn broken_file_in_directory_loads_nothing() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.looknfeel"), SAMPLE_LOOKNFEEL).unwrap();
    std::fs::write(dir.path().join("b.looknfeel"), "<Falagard><WidgetLook").unwrap();

    let mut looks = WidgetLookManager::new();
    assert!(looks.load_path(dir.path()).is_err());
    assert!(looks.is_empty());
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut looks = WidgetLookManager::new();
    let err = looks.load_path(&dir.path().join("absent.looknfeel")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}
