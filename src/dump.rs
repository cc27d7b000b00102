//! Human-readable outlines of looks and render caches for diagnostics.

use std::fmt::Write;

use crate::falagard::{
    AreaRef, AreaSource, ComponentArea, Condition, Dimension, ImageryComponent, LayerEntry, WidgetLook,
};
use crate::render::{DrawPrimitive, Rect, RenderCache};
use crate::widget::Window;

/// Outline of a look: properties, named areas, sections, states and children.
pub fn describe_look(look: &WidgetLook) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "WidgetLook {}", look.name());

    for def in look.property_definitions() {
        let mut line = format!("  PropertyDefinition {} = {:?}", def.name, def.initial_value);
        if def.redraw_on_write {
            line.push_str(" redraw");
        }
        if def.layout_on_write {
            line.push_str(" layout");
        }
        let _ = writeln!(out, "{line}");
    }
    for init in look.property_initialisers() {
        let _ = writeln!(out, "  Property {} = {:?}", init.name, init.value);
    }

    for name in look.named_area_names() {
        if let Some(area) = look.named_area(name) {
            let _ = writeln!(out, "  NamedArea {name}: {}", describe_area(&area.area));
        }
    }

    for name in look.imagery_section_names() {
        let Some(section) = look.imagery_section(name) else { continue };
        let _ = writeln!(out, "  ImagerySection {name}");
        for image in &section.images {
            let _ = writeln!(out, "    {}", describe_image(image));
        }
    }

    for name in look.state_names() {
        let Some(state) = look.state_imagery(name) else { continue };
        let clipped = if state.is_clipped() { "" } else { " (unclipped)" };
        let _ = writeln!(out, "  StateImagery {name}{clipped}");
        for layer in state.layers() {
            let _ = writeln!(out, "    Layer priority={}", layer.priority);
            for entry in &layer.entries {
                match entry {
                    LayerEntry::Image(image) => {
                        let _ = writeln!(out, "      {}", describe_image(image));
                    }
                    LayerEntry::Section(spec) => {
                        let mut line = format!("      Section {}", spec.section);
                        if let Some(color) = spec.color {
                            let _ = write!(line, " colour={:?}", color.to_array());
                        }
                        if let Some(cond) = &spec.condition {
                            let _ = write!(line, " if {}", describe_condition(cond));
                        }
                        let _ = writeln!(out, "{line}");
                    }
                }
            }
        }
    }

    for child in look.child_components() {
        let look_name = child.look.as_deref().unwrap_or("-");
        let _ = writeln!(
            out,
            "  Child {} {} look={look_name}: {}",
            child.widget_type,
            child.name_suffix,
            describe_area(&child.area)
        );
    }
    out
}

/// One line per primitive, in draw order.
pub fn describe_render_cache(cache: &RenderCache) -> String {
    let mut out = String::new();
    for (i, primitive) in cache.iter().enumerate() {
        let clip = |c: Option<Rect>| c.map(|r| format!(" clip={}", describe_rect(r))).unwrap_or_default();
        let _ = match primitive {
            DrawPrimitive::Image(p) => writeln!(out, "{i:3} image {} at {}{}", p.image, describe_rect(p.dest), clip(p.clip)),
            DrawPrimitive::Text(p) => writeln!(out, "{i:3} text {:?} at {}{}", p.text, describe_rect(p.dest), clip(p.clip)),
        };
    }
    out
}

/// A window's rect followed by every property, builtins included, sorted by name.
pub fn describe_window(window: &Window) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} [{}]: {}", window.name, window.widget_type, describe_rect(window.area()));
    for (name, value) in window.property_snapshot() {
        let _ = writeln!(out, "  {name} = {value:?}");
    }
    out
}

pub fn describe_rect(r: Rect) -> String {
    format!("({}, {}) {}x{}", r.x, r.y, r.width, r.height)
}

fn describe_image(image: &ImageryComponent) -> String {
    let area = match &image.area {
        AreaRef::Named(name) => format!("area {name}"),
        AreaRef::Inline(area) => describe_area(area),
    };
    let mut line = format!("Image {} in {area}", image.image);
    if let Some(cond) = &image.condition {
        let _ = write!(line, " if {}", describe_condition(cond));
    }
    line
}

fn describe_area(area: &ComponentArea) -> String {
    match &area.source {
        AreaSource::Dims { left, top, right_or_width, bottom_or_height } => [left, top, right_or_width, bottom_or_height]
            .iter()
            .map(|d| format!("{}={}", d.kind.as_str(), describe_dimension(&d.value)))
            .collect::<Vec<_>>()
            .join(" "),
        AreaSource::Property(name) => format!("property {name}"),
    }
}

fn describe_dimension(dim: &Dimension) -> String {
    match dim {
        Dimension::Absolute(v) => v.to_string(),
        Dimension::Unified { scale, offset } => format!("{{{scale},{offset}}}"),
        Dimension::Property(name) => format!("${name}"),
        Dimension::Operation { op, lhs, rhs } => {
            format!("({} {} {})", describe_dimension(lhs), op.as_str(), describe_dimension(rhs))
        }
    }
}

fn describe_condition(cond: &Condition) -> String {
    let join = |conds: &[Condition], sep: &str| {
        conds.iter().map(describe_condition).collect::<Vec<_>>().join(sep)
    };
    match cond {
        Condition::IsTrue(p) => p.clone(),
        Condition::Equals { property, value } => format!("{property}=={value:?}"),
        Condition::NotEquals { property, value } => format!("{property}!={value:?}"),
        Condition::Not(inner) => format!("!{}", describe_condition(inner)),
        Condition::AllOf(conds) => format!("({})", join(conds, " && ")),
        Condition::AnyOf(conds) => format!("({})", join(conds, " || ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::falagard::{
        DimOp, ImagerySection, LayerSpecification, NamedArea, PropertyDefinition, SectionSpecification, StateImagery,
        WidgetComponent,
    };

    fn sample_look() -> WidgetLook {
        WidgetLook::new("Test/Frame")
            .with_named_area(NamedArea::new("ClientArea", ComponentArea::inset(4.0)))
            .with_imagery_section(
                ImagerySection::new("Frame").with_image(ImageryComponent::in_named_area("Border", "ClientArea")),
            )
            .with_state_imagery(
                StateImagery::new("Enabled").with_layer(
                    LayerSpecification::new(0)
                        .with_section(SectionSpecification::new("Frame"))
                        .with_image(
                            ImageryComponent::in_named_area("Glow", "ClientArea")
                                .with_condition(Condition::is_true("Highlighted")),
                        ),
                ),
            )
            .with_child(WidgetComponent::new("Falagard/Button", "__close__", ComponentArea::fixed(0.0, 0.0, 16.0, 16.0)))
    }

    #[test]
    fn test_describe_look_lists_every_part() {
        let text = describe_look(&sample_look());
        assert!(text.starts_with("WidgetLook Test/Frame\n"));
        assert!(text.contains("NamedArea ClientArea: LeftEdge=4 TopEdge=4 RightEdge={1,-4} BottomEdge={1,-4}"));
        assert!(text.contains("ImagerySection Frame"));
        assert!(text.contains("StateImagery Enabled"));
        assert!(text.contains("Section Frame"));
        assert!(text.contains("Image Glow in area ClientArea if Highlighted"));
        assert!(text.contains("Child Falagard/Button __close__ look=-"));
    }

    #[test]
    fn test_describe_operation_dimension() {
        let dim = Dimension::operation(DimOp::Subtract, Dimension::unified(1.0, 0.0), Dimension::absolute(8.0));
        assert_eq!(describe_dimension(&dim), "({1,0} Subtract 8)");
    }

    #[test]
    fn test_describe_render_cache() {
        let mut cache = RenderCache::new();
        cache.push_image("Border", Rect::new(0.0, 0.0, 10.0, 10.0), Default::default(), None);
        cache.push_text("Hi", Rect::new(1.0, 2.0, 14.0, 16.0), Default::default(), Some(Rect::new(0.0, 0.0, 5.0, 5.0)));
        let text = describe_render_cache(&cache);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "  0 image Border at (0, 0) 10x10");
        assert_eq!(lines[1], "  1 text \"Hi\" at (1, 2) 14x16 clip=(0, 0) 5x5");
    }

    #[test]
    fn test_describe_look_marks_write_effects() {
        let look = WidgetLook::new("Test/Frame")
            .with_property_definition(PropertyDefinition::new("TitlebarEnabled", "true").redraw_on_write())
            .with_property_definition(PropertyDefinition::new("Offset", "20").layout_on_write())
            .with_property_definition(PropertyDefinition::new("Caption", ""));
        let text = describe_look(&look);
        assert!(text.contains("PropertyDefinition TitlebarEnabled = \"true\" redraw\n"));
        assert!(text.contains("PropertyDefinition Offset = \"20\" layout\n"));
        assert!(text.contains("PropertyDefinition Caption = \"\"\n"));
    }

    #[test]
    fn test_describe_window_lists_builtin_and_stored_properties() {
        let mut window = Window::new("Falagard/FrameWindow", "Frame")
            .with_look("Test/Frame")
            .with_area(Rect::new(10.0, 20.0, 200.0, 100.0));
        window.set_property("TitlebarEnabled", "false");
        let text = describe_window(&window);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Frame [Falagard/FrameWindow]: (10, 20) 200x100");
        assert!(lines.contains(&"  LookNFeel = \"Test/Frame\""));
        assert!(lines.contains(&"  Disabled = \"false\""));
        assert!(lines.contains(&"  TitlebarEnabled = \"false\""));
        // sorted by name
        let names: Vec<&str> = lines[1..].iter().map(|l| l.trim().split(' ').next().unwrap_or("")).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }
}
