//! Dimensions: the scalar formulas an area is built from.

use super::LookTarget;

/// Which edge or extent of an area a dimension defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionType {
    LeftEdge,
    XPosition,
    TopEdge,
    YPosition,
    RightEdge,
    BottomEdge,
    Width,
    Height,
}

impl DimensionType {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "LeftEdge" => Some(Self::LeftEdge),
            "XPosition" => Some(Self::XPosition),
            "TopEdge" => Some(Self::TopEdge),
            "YPosition" => Some(Self::YPosition),
            "RightEdge" => Some(Self::RightEdge),
            "BottomEdge" => Some(Self::BottomEdge),
            "Width" => Some(Self::Width),
            "Height" => Some(Self::Height),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LeftEdge => "LeftEdge",
            Self::XPosition => "XPosition",
            Self::TopEdge => "TopEdge",
            Self::YPosition => "YPosition",
            Self::RightEdge => "RightEdge",
            Self::BottomEdge => "BottomEdge",
            Self::Width => "Width",
            Self::Height => "Height",
        }
    }

    /// Horizontal dimensions scale against the base width, vertical ones against the height.
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Self::LeftEdge | Self::XPosition | Self::RightEdge | Self::Width)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl DimOp {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Add" => Some(Self::Add),
            "Subtract" => Some(Self::Subtract),
            "Multiply" => Some(Self::Multiply),
            "Divide" => Some(Self::Divide),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Subtract => "Subtract",
            Self::Multiply => "Multiply",
            Self::Divide => "Divide",
        }
    }

    fn apply(&self, lhs: f32, rhs: f32) -> f32 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            // Division by zero collapses to 0 rather than producing inf/NaN.
            Self::Divide if rhs == 0.0 => 0.0,
            Self::Divide => lhs / rhs,
        }
    }
}

/// A scalar formula evaluated against a base extent and a widget.
#[derive(Debug, Clone, PartialEq)]
pub enum Dimension {
    /// Fixed pixels.
    Absolute(f32),
    /// `scale * base + offset`, base being the width or height of the reference rect.
    Unified { scale: f32, offset: f32 },
    /// Value read from a widget property, either a plain number or `{scale,offset}`.
    Property(String),
    Operation {
        op: DimOp,
        lhs: Box<Dimension>,
        rhs: Box<Dimension>,
    },
}

impl Dimension {
    pub fn absolute(value: f32) -> Self {
        Self::Absolute(value)
    }

    pub fn unified(scale: f32, offset: f32) -> Self {
        Self::Unified { scale, offset }
    }

    pub fn operation(op: DimOp, lhs: Dimension, rhs: Dimension) -> Self {
        Self::Operation { op, lhs: Box::new(lhs), rhs: Box::new(rhs) }
    }

    /// Evaluate to pixels. `base` is the reference extent along this dimension's axis.
    pub fn evaluate(&self, base: f32, target: &dyn LookTarget) -> f32 {
        match self {
            Self::Absolute(v) => *v,
            Self::Unified { scale, offset } => scale * base + offset,
            Self::Property(name) => target
                .property(name)
                .and_then(|v| parse_unified(&v))
                .map(|(scale, offset)| scale * base + offset)
                .unwrap_or_else(|| {
                    tracing::trace!("property dim {name} unset on {}, using 0", target.name());
                    0.0
                }),
            Self::Operation { op, lhs, rhs } => {
                op.apply(lhs.evaluate(base, target), rhs.evaluate(base, target))
            }
        }
    }
}

/// Parse `"12.5"` as `(0, 12.5)` or `"{0.5,-4}"` as `(0.5, -4)`.
pub fn parse_unified(s: &str) -> Option<(f32, f32)> {
    let s = s.trim();
    if let Some(inner) = s.strip_prefix('{').and_then(|r| r.strip_suffix('}')) {
        let (scale, offset) = inner.split_once(',')?;
        Some((scale.trim().parse().ok()?, offset.trim().parse().ok()?))
    } else {
        Some((0.0, s.parse().ok()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::falagard::tests::StubTarget;

    #[test]
    fn test_unified_dimension() {
        let target = StubTarget::default();
        assert_eq!(Dimension::unified(0.5, 4.0).evaluate(200.0, &target), 104.0);
        assert_eq!(Dimension::unified(1.0, -4.0).evaluate(0.0, &target), -4.0);
    }

    #[test]
    fn test_property_dimension_reads_both_forms() {
        let target = StubTarget::default()
            .with_property("Plain", "7")
            .with_property("Unified", "{0.25, 2}");
        assert_eq!(Dimension::Property("Plain".into()).evaluate(100.0, &target), 7.0);
        assert_eq!(Dimension::Property("Unified".into()).evaluate(100.0, &target), 27.0);
        assert_eq!(Dimension::Property("Missing".into()).evaluate(100.0, &target), 0.0);
    }

    #[test]
    fn test_operator_divide_by_zero_is_zero() {
        let target = StubTarget::default();
        let dim = Dimension::operation(DimOp::Divide, Dimension::absolute(10.0), Dimension::unified(1.0, 0.0));
        assert_eq!(dim.evaluate(0.0, &target), 0.0);
        assert_eq!(dim.evaluate(5.0, &target), 2.0);
    }

    #[test]
    fn test_parse_unified_rejects_garbage() {
        assert_eq!(parse_unified("{1,2,3}"), None);
        assert_eq!(parse_unified("abc"), None);
        assert_eq!(parse_unified(" { 1 , -2 } "), Some((1.0, -2.0)));
    }
}
