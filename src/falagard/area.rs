//! Component areas and named areas.
//!
//! An area is four dimensions: a left edge, a top edge, and either a right
//! edge or a width (likewise bottom edge or height). Resolution evaluates them
//! against a base rect and never yields a negative extent.

use super::LookTarget;
use super::dimension::{Dimension, DimensionType, parse_unified};
use crate::render::Rect;

/// One dimension of an area, tagged with the edge or extent it defines.
#[derive(Debug, Clone, PartialEq)]
pub struct Dim {
    pub kind: DimensionType,
    pub value: Dimension,
}

impl Dim {
    pub fn new(kind: DimensionType, value: Dimension) -> Self {
        Self { kind, value }
    }
}

/// Where an area's geometry comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum AreaSource {
    Dims {
        left: Dim,
        top: Dim,
        right_or_width: Dim,
        bottom_or_height: Dim,
    },
    /// A unified rect `{{sx,ox},{sy,oy},{sx,ox},{sy,oy}}` held in a widget property.
    Property(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComponentArea {
    pub source: AreaSource,
}

impl ComponentArea {
    pub fn from_dims(left: Dim, top: Dim, right_or_width: Dim, bottom_or_height: Dim) -> Self {
        Self {
            source: AreaSource::Dims { left, top, right_or_width, bottom_or_height },
        }
    }

    pub fn from_property(name: impl Into<String>) -> Self {
        Self { source: AreaSource::Property(name.into()) }
    }

    /// The whole base rect.
    pub fn full() -> Self {
        Self::inset(0.0)
    }

    /// The base rect shrunk by `px` on every side.
    pub fn inset(px: f32) -> Self {
        Self::from_dims(
            Dim::new(DimensionType::LeftEdge, Dimension::absolute(px)),
            Dim::new(DimensionType::TopEdge, Dimension::absolute(px)),
            Dim::new(DimensionType::RightEdge, Dimension::unified(1.0, -px)),
            Dim::new(DimensionType::BottomEdge, Dimension::unified(1.0, -px)),
        )
    }

    /// A fixed-size box at an absolute offset from the base origin.
    pub fn fixed(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::from_dims(
            Dim::new(DimensionType::LeftEdge, Dimension::absolute(x)),
            Dim::new(DimensionType::TopEdge, Dimension::absolute(y)),
            Dim::new(DimensionType::Width, Dimension::absolute(width)),
            Dim::new(DimensionType::Height, Dimension::absolute(height)),
        )
    }

    /// Resolve to pixels against `base`. The result is offset by `base`'s
    /// origin and its width/height are clamped at zero.
    pub fn resolve(&self, target: &dyn LookTarget, base: Rect) -> Rect {
        let (left, top, right, bottom) = match &self.source {
            AreaSource::Dims { left, top, right_or_width, bottom_or_height } => {
                let left_px = left.value.evaluate(base.width, target);
                let top_px = top.value.evaluate(base.height, target);
                let right_px = far_edge(right_or_width, left_px, base.width, target);
                let bottom_px = far_edge(bottom_or_height, top_px, base.height, target);
                (left_px, top_px, right_px, bottom_px)
            }
            AreaSource::Property(name) => {
                let Some(urect) = target.property(name).and_then(|v| parse_unified_rect(&v)) else {
                    tracing::debug!("area property {name} unset or malformed on {}", target.name());
                    return Rect::new(base.x, base.y, 0.0, 0.0);
                };
                let [l, t, r, b] = urect;
                (
                    l.0 * base.width + l.1,
                    t.0 * base.height + t.1,
                    r.0 * base.width + r.1,
                    b.0 * base.height + b.1,
                )
            }
        };

        Rect::from_edges(left, top, right, bottom).offset(base.x, base.y)
    }
}

/// Far edge of an axis: a right/bottom edge is used as-is, a width/height is added to the near edge.
fn far_edge(dim: &Dim, near: f32, base: f32, target: &dyn LookTarget) -> f32 {
    let value = dim.value.evaluate(base, target);
    match dim.kind {
        DimensionType::Width | DimensionType::Height => near + value,
        _ => value,
    }
}

/// Parse `{{sx,ox},{sy,oy},{sx,ox},{sy,oy}}` into left, top, right, bottom.
pub fn parse_unified_rect(s: &str) -> Option<[(f32, f32); 4]> {
    let inner = s.trim().strip_prefix('{')?.strip_suffix('}')?;
    let mut parts = Vec::with_capacity(4);
    let mut rest = inner.trim();
    while !rest.is_empty() {
        let end = rest.find('}')?;
        parts.push(parse_unified(&rest[..=end])?);
        rest = rest[end + 1..].trim_start_matches(|c: char| c == ',' || c.is_whitespace());
    }
    parts.try_into().ok()
}

/// An area with a name, referenced from imagery and by widget behaviors.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedArea {
    pub name: String,
    pub area: ComponentArea,
}

impl NamedArea {
    pub fn new(name: impl Into<String>, area: ComponentArea) -> Self {
        Self { name: name.into(), area }
    }

    pub fn resolve(&self, target: &dyn LookTarget, base: Rect) -> Rect {
        self.area.resolve(target, base)
    }
}
