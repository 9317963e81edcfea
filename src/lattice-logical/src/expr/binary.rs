//! Binary operators for expressions.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::Value;

/// Binary operators for expressions.
///
/// All operators are deterministic; `apply` gives their constant-folding
/// semantics over literal operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    // Arithmetic operators
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,

    // Comparison operators
    /// Equality (=)
    Eq,
    /// Inequality (<>)
    NotEq,
    /// Less than (<)
    Lt,
    /// Less than or equal (<=)
    LtEq,
    /// Greater than (>)
    Gt,
    /// Greater than or equal (>=)
    GtEq,

    // Logical operators
    /// Logical AND
    And,
    /// Logical OR
    Or,
}

impl BinaryOp {
    /// Check if this is an arithmetic operator.
    pub const fn is_arithmetic(&self) -> bool {
        matches!(self, Self::Add | Self::Subtract | Self::Multiply | Self::Divide)
    }

    /// Check if this is a comparison operator.
    pub const fn is_comparison(&self) -> bool {
        matches!(
            self,
            Self::Eq | Self::NotEq | Self::Lt | Self::LtEq | Self::Gt | Self::GtEq
        )
    }

    /// Check if this is a logical operator.
    pub const fn is_logical(&self) -> bool {
        matches!(self, Self::And | Self::Or)
    }

    /// Evaluate this operator over two literal operands.
    ///
    /// Returns `None` when the operand types do not fit the operator or
    /// the result is undefined (integer overflow, division by zero,
    /// ordering against NaN). Folding passes leave such expressions
    /// untouched rather than guessing.
    pub fn apply(&self, left: &Value, right: &Value) -> Option<Value> {
        use Value::{Bool, Float64, Int64};

        match (self, left, right) {
            (Self::And, Bool(a), Bool(b)) => Some(Bool(*a && *b)),
            (Self::Or, Bool(a), Bool(b)) => Some(Bool(*a || *b)),

            (Self::Add, Int64(a), Int64(b)) => a.checked_add(*b).map(Int64),
            (Self::Subtract, Int64(a), Int64(b)) => a.checked_sub(*b).map(Int64),
            (Self::Multiply, Int64(a), Int64(b)) => a.checked_mul(*b).map(Int64),
            (Self::Divide, Int64(a), Int64(b)) => a.checked_div(*b).map(Int64),

            (Self::Add, Float64(a), Float64(b)) => Some(Float64(a + b)),
            (Self::Subtract, Float64(a), Float64(b)) => Some(Float64(a - b)),
            (Self::Multiply, Float64(a), Float64(b)) => Some(Float64(a * b)),
            (Self::Divide, Float64(a), Float64(b)) => Some(Float64(a / b)),

            (op, left, right) if op.is_comparison() => {
                let ordering = compare(left, right)?;
                let result = match op {
                    Self::Eq => ordering == Ordering::Equal,
                    Self::NotEq => ordering != Ordering::Equal,
                    Self::Lt => ordering == Ordering::Less,
                    Self::LtEq => ordering != Ordering::Greater,
                    Self::Gt => ordering == Ordering::Greater,
                    Self::GtEq => ordering != Ordering::Less,
                    _ => return None,
                };
                Some(Bool(result))
            }

            _ => None,
        }
    }

    /// Get the operator symbol for display.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Eq => "=",
            Self::NotEq => "<>",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

fn compare(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        (Value::Int64(a), Value::Int64(b)) => Some(a.cmp(b)),
        (Value::Float64(a), Value::Float64(b)) => a.partial_cmp(b),
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

impl std::fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_classification() {
        assert!(BinaryOp::Add.is_arithmetic());
        assert!(!BinaryOp::Add.is_comparison());

        assert!(BinaryOp::Eq.is_comparison());
        assert!(!BinaryOp::Eq.is_arithmetic());

        assert!(BinaryOp::And.is_logical());
        assert!(!BinaryOp::And.is_arithmetic());
    }

    #[test]
    fn test_apply_arithmetic() {
        assert_eq!(
            BinaryOp::Add.apply(&Value::Int64(2), &Value::Int64(3)),
            Some(Value::Int64(5))
        );
        assert_eq!(
            BinaryOp::Divide.apply(&Value::Int64(1), &Value::Int64(0)),
            None
        );
        assert_eq!(
            BinaryOp::Add.apply(&Value::Int64(i64::MAX), &Value::Int64(1)),
            None
        );
        assert_eq!(
            BinaryOp::Multiply.apply(&Value::Float64(1.5), &Value::Float64(2.0)),
            Some(Value::Float64(3.0))
        );
    }

    #[test]
    fn test_apply_comparison() {
        assert_eq!(
            BinaryOp::Lt.apply(&Value::Int64(1), &Value::Int64(2)),
            Some(Value::Bool(true))
        );
        assert_eq!(
            BinaryOp::Eq.apply(&Value::String("a".into()), &Value::String("a".into())),
            Some(Value::Bool(true))
        );
        // NaN has no ordering; folding must decline.
        assert_eq!(
            BinaryOp::Lt.apply(&Value::Float64(f64::NAN), &Value::Float64(1.0)),
            None
        );
    }

    #[test]
    fn test_apply_mismatched_types() {
        assert_eq!(BinaryOp::Add.apply(&Value::Int64(1), &Value::Float64(1.0)), None);
        assert_eq!(BinaryOp::And.apply(&Value::Int64(1), &Value::Bool(true)), None);
    }
}
