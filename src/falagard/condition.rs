//! Visibility conditions on imagery, evaluated against widget properties.

use super::LookTarget;

#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Property parses as boolean true (`"true"`, `"True"`, `"1"`).
    IsTrue(String),
    /// Property equals the value. An unset property compares as the empty string.
    Equals { property: String, value: String },
    NotEquals { property: String, value: String },
    Not(Box<Condition>),
    /// True when every inner condition is true (vacuously true when empty).
    AllOf(Vec<Condition>),
    /// True when at least one inner condition is true.
    AnyOf(Vec<Condition>),
}

impl Condition {
    pub fn is_true(property: impl Into<String>) -> Self {
        Self::IsTrue(property.into())
    }

    pub fn equals(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Equals { property: property.into(), value: value.into() }
    }

    pub fn not_equals(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self::NotEquals { property: property.into(), value: value.into() }
    }

    pub fn negate(inner: Condition) -> Self {
        Self::Not(Box::new(inner))
    }

    pub fn evaluate(&self, target: &dyn LookTarget) -> bool {
        match self {
            Self::IsTrue(property) => target.property(property).is_some_and(|v| parse_bool(&v)),
            Self::Equals { property, value } => target.property(property).unwrap_or_default() == *value,
            Self::NotEquals { property, value } => target.property(property).unwrap_or_default() != *value,
            Self::Not(inner) => !inner.evaluate(target),
            Self::AllOf(all) => all.iter().all(|c| c.evaluate(target)),
            Self::AnyOf(any) => any.iter().any(|c| c.evaluate(target)),
        }
    }
}

pub fn parse_bool(s: &str) -> bool {
    matches!(s.trim(), "true" | "True" | "TRUE" | "1")
}
