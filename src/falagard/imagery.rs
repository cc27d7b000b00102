//! State imagery: layered image draw operations for one visual state.

use super::area::ComponentArea;
use super::condition::Condition;
use super::look::WidgetLook;
use super::LookTarget;
use crate::render::{Color, Rect, RenderCache};

/// Destination of an image: a named area of the look or an inline area.
#[derive(Debug, Clone, PartialEq)]
pub enum AreaRef {
    Named(String),
    Inline(ComponentArea),
}

/// One image draw operation.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageryComponent {
    pub image: String,
    pub area: AreaRef,
    pub color: Color,
    pub condition: Option<Condition>,
}

impl ImageryComponent {
    pub fn new(image: impl Into<String>, area: AreaRef) -> Self {
        Self {
            image: image.into(),
            area,
            color: Color::WHITE,
            condition: None,
        }
    }

    pub fn in_named_area(image: impl Into<String>, area: impl Into<String>) -> Self {
        Self::new(image, AreaRef::Named(area.into()))
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn is_visible(&self, target: &dyn LookTarget) -> bool {
        self.condition.as_ref().is_none_or(|c| c.evaluate(target))
    }

    fn render(&self, ctx: &RenderPass<'_>, tint: Option<&Color>, cache: &mut RenderCache) {
        if !self.is_visible(ctx.target) {
            return;
        }
        let dest = match &self.area {
            AreaRef::Inline(area) => area.resolve(ctx.target, ctx.base),
            AreaRef::Named(name) => match ctx.look.named_area(name) {
                Some(named) => named.resolve(ctx.target, ctx.base),
                None => {
                    tracing::warn!(
                        "look {} has no named area {name}; skipping image {}",
                        ctx.look.name(),
                        self.image
                    );
                    return;
                }
            },
        };
        let color = tint.map_or(self.color, |t| self.color.modulate(t));
        cache.push_image(self.image.clone(), dest, color, ctx.clip);
    }
}

/// A reusable, named group of images within a look.
#[derive(Debug, Clone, PartialEq)]
pub struct ImagerySection {
    pub name: String,
    pub images: Vec<ImageryComponent>,
}

impl ImagerySection {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), images: Vec::new() }
    }

    pub fn with_image(mut self, image: ImageryComponent) -> Self {
        self.images.push(image);
        self
    }
}

/// Reference from a layer to an imagery section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpecification {
    pub section: String,
    /// Tint multiplied into every image of the section.
    pub color: Option<Color>,
    /// Gates the whole section.
    pub condition: Option<Condition>,
}

impl SectionSpecification {
    pub fn new(section: impl Into<String>) -> Self {
        Self { section: section.into(), color: None, condition: None }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayerEntry {
    Image(ImageryComponent),
    Section(SectionSpecification),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerSpecification {
    pub priority: i32,
    pub entries: Vec<LayerEntry>,
}

impl LayerSpecification {
    pub fn new(priority: i32) -> Self {
        Self { priority, entries: Vec::new() }
    }

    pub fn with_image(mut self, image: ImageryComponent) -> Self {
        self.entries.push(LayerEntry::Image(image));
        self
    }

    pub fn with_section(mut self, section: SectionSpecification) -> Self {
        self.entries.push(LayerEntry::Section(section));
        self
    }
}

/// Imagery for one named state of a look. Layers are kept in render order.
#[derive(Debug, Clone, PartialEq)]
pub struct StateImagery {
    name: String,
    clipped: bool,
    layers: Vec<LayerSpecification>,
}

/// Per-call inputs shared by every image of one population pass.
struct RenderPass<'a> {
    look: &'a WidgetLook,
    target: &'a dyn LookTarget,
    base: Rect,
    clip: Option<Rect>,
}

impl StateImagery {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), clipped: true, layers: Vec::new() }
    }

    pub fn with_clipped(mut self, clipped: bool) -> Self {
        self.clipped = clipped;
        self
    }

    /// Insert a layer after every existing layer of equal or lower priority.
    pub fn with_layer(mut self, layer: LayerSpecification) -> Self {
        let pos = self.layers.partition_point(|l| l.priority <= layer.priority);
        self.layers.insert(pos, layer);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_clipped(&self) -> bool {
        self.clipped
    }

    pub fn layers(&self) -> &[LayerSpecification] {
        &self.layers
    }

    /// Append the visible images of every layer, in order, to `cache`.
    ///
    /// Destinations resolve against the target's pixel rect. Missing named
    /// areas or sections skip the affected images only.
    pub fn populate_render_cache(&self, look: &WidgetLook, target: &dyn LookTarget, cache: &mut RenderCache) {
        let base = target.pixel_rect();
        let ctx = RenderPass {
            look,
            target,
            base,
            clip: self.clipped.then_some(base),
        };

        for layer in &self.layers {
            for entry in &layer.entries {
                match entry {
                    LayerEntry::Image(image) => image.render(&ctx, None, cache),
                    LayerEntry::Section(spec) => {
                        if spec.condition.as_ref().is_some_and(|c| !c.evaluate(target)) {
                            continue;
                        }
                        let Some(section) = look.imagery_section(&spec.section) else {
                            tracing::warn!("look {} has no imagery section {}", look.name(), spec.section);
                            continue;
                        };
                        for image in &section.images {
                            image.render(&ctx, spec.color.as_ref(), cache);
                        }
                    }
                }
            }
        }
    }
}
