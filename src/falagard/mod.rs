//! The look-and-feel engine: named areas, state imagery, widget looks and
//! the registry that holds them.

pub mod area;
pub mod component;
pub mod condition;
pub mod dimension;
pub mod imagery;
pub mod look;
pub mod manager;

pub use area::{AreaSource, ComponentArea, Dim, NamedArea};
pub use component::{PropertyDefinition, PropertyInitialiser, WidgetComponent};
pub use condition::Condition;
pub use dimension::{DimOp, Dimension, DimensionType};
pub use imagery::{
    AreaRef, ImageryComponent, ImagerySection, LayerEntry, LayerSpecification, SectionSpecification, StateImagery,
};
pub use look::WidgetLook;
pub use manager::{LookSource, UnloadPolicy, WidgetLookManager};

use crate::render::Rect;

/// What the engine reads from a widget: its identity, its current pixel
/// rect and a snapshot of its property values.
pub trait LookTarget {
    fn name(&self) -> &str;
    /// Current rect in the coordinate space the widget is drawn in.
    fn pixel_rect(&self) -> Rect;
    fn property(&self, name: &str) -> Option<String>;
}
