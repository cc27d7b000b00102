//! Frame window behavior driven by the sample look.

mod common;

use common::{FRAME_LOOK, frame_setup, sample_looks};
use falagard::render::{Color, Rect, RenderCache};
use falagard::widget::{
    CLOSE_BUTTON_SUFFIX, FrameWindow, LookWidget, PropertyEffect, TITLEBAR_SUFFIX, WindowManager, WindowRegistry,
};
use falagard::Error;
use falagard::error::ObjectKind;

fn image_names(cache: &RenderCache) -> Vec<&str> {
    cache.images().map(|p| p.image.as_str()).collect()
}

// ============================================================================
// Inner rect
// ============================================================================

#[test]
fn inner_rect_is_client_area() {
    let (looks, _windows, frame) = frame_setup();
    assert_eq!(frame.unclipped_inner_rect(&looks), Rect::new(4.0, 4.0, 192.0, 92.0));
}

#[test]
fn inner_rect_follows_frame_position() {
    let (looks, _windows, mut frame) = frame_setup();
    frame.window_mut().set_area(Rect::new(10.0, 20.0, 200.0, 100.0));
    assert_eq!(frame.unclipped_inner_rect(&looks), Rect::new(14.0, 24.0, 192.0, 92.0));
}

#[test]
fn rolled_up_inner_rect_is_zero() {
    let (looks, _windows, mut frame) = frame_setup();
    assert!(frame.toggle_roll_up());
    assert!(frame.is_rolled_up());
    assert_eq!(frame.unclipped_inner_rect(&looks), Rect::ZERO);
}

#[test]
fn tiny_frame_clamps_inner_rect() {
    let (looks, _windows, mut frame) = frame_setup();
    frame.window_mut().set_area(Rect::new(0.0, 0.0, 6.0, 6.0));
    let inner = frame.unclipped_inner_rect(&looks);
    assert_eq!(inner.width, 0.0);
    assert_eq!(inner.height, 0.0);
}

#[test]
fn missing_look_inner_rect_falls_back_to_full_rect() {
    let looks = sample_looks();
    let mut frame = FrameWindow::new("Orphan", "No/Such/Look");
    frame.window_mut().set_area(Rect::new(5.0, 5.0, 50.0, 40.0));

    assert!(matches!(
        frame.try_unclipped_inner_rect(&looks),
        Err(Error::NotFound { kind: ObjectKind::WidgetLook, .. })
    ));
    assert_eq!(frame.unclipped_inner_rect(&looks), Rect::new(5.0, 5.0, 50.0, 40.0));
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn active_state_draws_layers_in_priority_order() {
    let (looks, windows, mut frame) = frame_setup();
    assert_eq!(frame.state_name(&windows), "Active");

    let mut cache = RenderCache::new();
    frame.populate_render_cache(&looks, &windows, &mut cache);
    assert_eq!(image_names(&cache), ["Frame/Border", "Frame/ActiveTitle", "Frame/Client"]);

    let dests: Vec<Rect> = cache.iter().map(|p| p.dest()).collect();
    assert_eq!(dests[0], Rect::new(0.0, 0.0, 200.0, 100.0));
    assert_eq!(dests[1], Rect::new(0.0, 0.0, 200.0, 20.0));
    assert_eq!(dests[2], Rect::new(4.0, 4.0, 192.0, 92.0));

    // Clipped state imagery clips to the frame rect.
    assert!(cache.images().all(|p| p.clip == Some(Rect::new(0.0, 0.0, 200.0, 100.0))));
}

#[test]
fn false_condition_hides_image() {
    let (looks, windows, mut frame) = frame_setup();
    frame.window_mut().set_property("TitlebarEnabled", "false");

    let mut cache = RenderCache::new();
    frame.populate_render_cache(&looks, &windows, &mut cache);
    assert_eq!(image_names(&cache), ["Frame/Border", "Frame/Client"]);
}

#[test]
fn inactive_parent_selects_inactive_state() {
    let (looks, mut windows, mut frame) = frame_setup();
    windows.get_window_mut("Root").unwrap().active = false;
    assert_eq!(frame.state_name(&windows), "Inactive");

    let mut cache = RenderCache::new();
    frame.populate_render_cache(&looks, &windows, &mut cache);
    assert_eq!(image_names(&cache), ["Frame/Border", "Frame/InactiveTitle"]);
    let border = cache.images().next().unwrap();
    assert_eq!(border.color, Color::from_argb_hex("FF808080").unwrap());
}

#[test]
fn disabled_state_is_unclipped() {
    let (looks, windows, mut frame) = frame_setup();
    frame.window_mut().set_property("Disabled", "true");
    assert_eq!(frame.state_name(&windows), "Disabled");

    let mut cache = RenderCache::new();
    frame.populate_render_cache(&looks, &windows, &mut cache);
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.images().next().unwrap().clip, None);
}

#[test]
fn rolled_up_frame_renders_nothing() {
    let (looks, windows, mut frame) = frame_setup();
    frame.toggle_roll_up();

    let mut cache = RenderCache::new();
    frame.populate_render_cache(&looks, &windows, &mut cache);
    assert!(cache.is_empty());

    frame.toggle_roll_up();
    frame.populate_render_cache(&looks, &windows, &mut cache);
    assert_eq!(cache.len(), 3);
}

#[test]
fn roll_up_can_be_disabled() {
    let (_looks, _windows, mut frame) = frame_setup();
    frame.window_mut().set_property("RollUpEnabled", "false");
    assert!(!frame.toggle_roll_up());
    assert!(!frame.is_rolled_up());
}

#[test]
fn missing_look_renders_empty_cache() {
    let looks = sample_looks();
    let windows = WindowRegistry::new();
    let mut frame = FrameWindow::new("Orphan", "No/Such/Look");

    let mut cache = RenderCache::new();
    frame.populate_render_cache(&looks, &windows, &mut cache);
    assert!(cache.is_empty());
}

// ============================================================================
// Child widgets
// ============================================================================

#[test]
fn components_are_created_and_laid_out() {
    let (_looks, windows, frame) = frame_setup();

    let titlebar = frame.titlebar(&windows).unwrap();
    assert_eq!(titlebar.name, format!("Frame{TITLEBAR_SUFFIX}"));
    assert_eq!(titlebar.parent.as_deref(), Some("Frame"));
    assert!(titlebar.auto_generated);
    assert_eq!(titlebar.properties.get("Text").map(String::as_str), Some("Caption"));
    assert_eq!(titlebar.area(), Rect::new(0.0, 0.0, 200.0, 20.0));

    let close = frame.close_button(&windows).unwrap();
    assert_eq!(close.name, format!("Frame{CLOSE_BUTTON_SUFFIX}"));
    assert_eq!(close.look_name, "Sample/Button");
    assert_eq!(close.area(), Rect::new(180.0, 2.0, 16.0, 16.0));

    assert_eq!(
        frame.window().children,
        [format!("Frame{TITLEBAR_SUFFIX}"), format!("Frame{CLOSE_BUTTON_SUFFIX}")]
    );
}

#[test]
fn children_are_recorded_once() {
    let (looks, mut windows, mut frame) = frame_setup();
    // A second pass collides with the existing children and adds nothing.
    let err = frame.initialise_components(&looks, &mut windows).unwrap_err();
    assert!(matches!(err, Error::DuplicateName { .. }));
    assert_eq!(frame.window().children.len(), 2);
    assert!(frame.titlebar(&windows).is_some());
}

#[test]
fn layout_is_idempotent_and_tracks_resize() {
    let (looks, mut windows, mut frame) = frame_setup();
    frame.layout_component_widgets(&looks, &mut windows);
    frame.layout_component_widgets(&looks, &mut windows);
    assert_eq!(frame.close_button(&windows).unwrap().area(), Rect::new(180.0, 2.0, 16.0, 16.0));

    frame.window_mut().set_area(Rect::new(50.0, 50.0, 300.0, 100.0));
    frame.layout_component_widgets(&looks, &mut windows);
    // Children are placed in the frame's own space.
    assert_eq!(frame.close_button(&windows).unwrap().area(), Rect::new(280.0, 2.0, 16.0, 16.0));
    assert_eq!(frame.titlebar(&windows).unwrap().area(), Rect::new(0.0, 0.0, 300.0, 20.0));
}

#[test]
fn layout_skips_destroyed_children() {
    let (looks, mut windows, frame) = frame_setup();
    windows.destroy_window(&format!("Frame{TITLEBAR_SUFFIX}")).unwrap();
    frame.layout_component_widgets(&looks, &mut windows);
    assert!(frame.titlebar(&windows).is_none());
    assert!(frame.close_button(&windows).is_some());
}

#[test]
fn duplicate_child_name_rolls_back() {
    let looks = sample_looks();
    let mut windows = WindowRegistry::new();
    windows.create_window("Generic", &format!("Frame{CLOSE_BUTTON_SUFFIX}")).unwrap();

    let mut frame = FrameWindow::new("Frame", FRAME_LOOK);
    let err = frame.initialise_components(&looks, &mut windows).unwrap_err();
    assert!(matches!(err, Error::DuplicateName { kind: ObjectKind::Window, .. }));
    // The title bar created before the collision is gone again.
    assert!(!windows.is_window_present(&format!("Frame{TITLEBAR_SUFFIX}")));
    assert!(frame.window().children.is_empty());
}

#[test]
fn initialise_applies_look_properties() {
    let (_looks, _windows, frame) = frame_setup();
    let props = &frame.window().properties;
    assert_eq!(props.get("TitlebarEnabled").map(String::as_str), Some("true"));
    assert_eq!(props.get("RollUpEnabled").map(String::as_str), Some("true"));
}

// ============================================================================
// Property writes
// ============================================================================

#[test]
fn layout_property_write_moves_children() {
    let (looks, mut windows, mut frame) = frame_setup();
    let effect = frame.set_property("CloseButtonOffset", "40", &looks, &mut windows);
    assert!(effect.layout);
    assert!(!effect.redraw);
    assert_eq!(frame.close_button(&windows).unwrap().area(), Rect::new(160.0, 2.0, 16.0, 16.0));
}

#[test]
fn redraw_property_write_skips_layout() {
    let (looks, mut windows, mut frame) = frame_setup();
    // Move the close button by hand; only a layout pass would put it back.
    windows.get_window_mut(&format!("Frame{CLOSE_BUTTON_SUFFIX}")).unwrap().set_area(Rect::new(0.0, 0.0, 1.0, 1.0));

    let effect = frame.set_property("TitlebarEnabled", "false", &looks, &mut windows);
    assert_eq!(effect, PropertyEffect { redraw: true, layout: false });
    assert_eq!(frame.window().properties.get("TitlebarEnabled").map(String::as_str), Some("false"));
    assert_eq!(frame.close_button(&windows).unwrap().area(), Rect::new(0.0, 0.0, 1.0, 1.0));
}

#[test]
fn undefined_property_write_has_no_effect() {
    let (looks, mut windows, mut frame) = frame_setup();
    let effect = frame.set_property("Caption", "Hello", &looks, &mut windows);
    assert_eq!(effect, PropertyEffect::default());
    assert_eq!(frame.window().properties.get("Caption").map(String::as_str), Some("Hello"));
}
