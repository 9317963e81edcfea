//! Literal values carried by expressions.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A literal scalar value.
///
/// Expressions are tree nodes, so literals must be hashable and support
/// total equality. Floats compare and hash by bit pattern, which keeps
/// `NaN == NaN` inside the tree framework without touching numeric
/// semantics at evaluation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Value {
    /// Absent value.
    Null,
    /// Boolean.
    Bool(bool),
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// UTF-8 string.
    String(String),
}

impl Value {
    /// Whether this is the null value.
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Extract a boolean, if this is one.
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int64(a), Self::Int64(b)) => a == b,
            (Self::Float64(a), Self::Float64(b)) => a.to_bits() == b.to_bits(),
            (Self::String(a), Self::String(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Null => {}
            Self::Bool(b) => b.hash(state),
            Self::Int64(i) => i.hash(state),
            Self::Float64(f) => f.to_bits().hash(state),
            Self::String(s) => s.hash(state),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int64(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float64(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Int64(i) => write!(f, "{}", i),
            Self::Float64(v) => write!(f, "{}", v),
            Self::String(s) => write!(f, "\"{}\"", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(value: &Value) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_float_equality_by_bits() {
        assert_eq!(Value::Float64(f64::NAN), Value::Float64(f64::NAN));
        assert_ne!(Value::Float64(0.0), Value::Float64(-0.0));
        assert_eq!(hash_of(&Value::Float64(1.5)), hash_of(&Value::Float64(1.5)));
    }

    #[test]
    fn test_cross_variant_inequality() {
        assert_ne!(Value::Int64(1), Value::Float64(1.0));
        assert_ne!(Value::Null, Value::Bool(false));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Int64(42).to_string(), "42");
        assert_eq!(Value::String("a".into()).to_string(), "\"a\"");
        assert_eq!(Value::Null.to_string(), "null");
    }
}
