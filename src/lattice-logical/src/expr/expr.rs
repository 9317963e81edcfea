//! Expression tree.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use common_error::{LatticeError, LatticeResult};
use lattice_trees::{NodeField, NodeMemo, SeqItem, TreeNode};

use super::{BinaryOp, ColumnRef, Value};

/// Unary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOp {
    /// Logical NOT.
    Not,
    /// Numeric negation.
    Neg,
    /// Is null check.
    IsNull,
    /// Is not null check.
    IsNotNull,
}

impl UnaryOp {
    /// Evaluate this operator over a literal operand, for constant
    /// folding. `None` when the operand type does not fit.
    pub fn apply(&self, value: &Value) -> Option<Value> {
        match (self, value) {
            (Self::Not, Value::Bool(b)) => Some(Value::Bool(!b)),
            (Self::Neg, Value::Int64(i)) => i.checked_neg().map(Value::Int64),
            (Self::Neg, Value::Float64(f)) => Some(Value::Float64(-f)),
            (Self::IsNull, v) => Some(Value::Bool(v.is_null())),
            (Self::IsNotNull, v) => Some(Value::Bool(!v.is_null())),
            _ => None,
        }
    }
}

impl std::fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Not => write!(f, "NOT"),
            Self::Neg => write!(f, "-"),
            Self::IsNull => write!(f, "IS NULL"),
            Self::IsNotNull => write!(f, "IS NOT NULL"),
        }
    }
}

/// The shape of an expression node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExprKind {
    /// Column reference.
    Column(ColumnRef),
    /// Literal value.
    Literal(Value),
    /// Binary operation.
    Binary {
        left: Arc<Expr>,
        op: BinaryOp,
        right: Arc<Expr>,
    },
    /// Unary operation.
    Unary { op: UnaryOp, expr: Arc<Expr> },
    /// Function call.
    Func { name: String, args: Vec<Arc<Expr>> },
}

/// Non-child constructor argument of an expression node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExprArg {
    /// Column reference payload of a leaf.
    Column(ColumnRef),
    /// Literal payload of a leaf.
    Literal(Value),
    /// Operator of a binary node.
    Binary(BinaryOp),
    /// Operator of a unary node.
    Unary(UnaryOp),
    /// Function name.
    Name(String),
}

/// Expression in a query plan.
///
/// Expressions are immutable trees; rewrites go through the tree
/// framework, so unchanged subexpressions are shared between the old and
/// new tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Expr {
    kind: ExprKind,
    #[serde(skip)]
    memo: NodeMemo<Expr>,
}

impl Expr {
    fn from_kind(kind: ExprKind) -> Self {
        Self {
            kind,
            memo: NodeMemo::new(),
        }
    }

    /// The shape of this node.
    pub const fn kind(&self) -> &ExprKind {
        &self.kind
    }

    /// Create a column reference expression; `"Entity.column"` parses as
    /// qualified.
    pub fn column(name: impl Into<String>) -> Self {
        Self::from_kind(ExprKind::Column(ColumnRef::parse(&name.into())))
    }

    /// Create a column reference expression from an existing reference.
    pub fn column_ref(column: ColumnRef) -> Self {
        Self::from_kind(ExprKind::Column(column))
    }

    /// Create a literal expression.
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::from_kind(ExprKind::Literal(value.into()))
    }

    /// Create a binary expression.
    pub fn binary(left: Expr, op: BinaryOp, right: Expr) -> Self {
        Self::from_kind(ExprKind::Binary {
            left: Arc::new(left),
            op,
            right: Arc::new(right),
        })
    }

    /// Create a unary expression.
    pub fn unary(op: UnaryOp, expr: Expr) -> Self {
        Self::from_kind(ExprKind::Unary {
            op,
            expr: Arc::new(expr),
        })
    }

    /// Create a function call expression.
    pub fn func(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Self::from_kind(ExprKind::Func {
            name: name.into(),
            args: args.into_iter().map(Arc::new).collect(),
        })
    }

    // Comparison operators

    /// Equality comparison.
    pub fn eq(self, other: Expr) -> Self {
        Self::binary(self, BinaryOp::Eq, other)
    }

    /// Inequality comparison.
    pub fn neq(self, other: Expr) -> Self {
        Self::binary(self, BinaryOp::NotEq, other)
    }

    /// Greater than comparison.
    pub fn gt(self, other: Expr) -> Self {
        Self::binary(self, BinaryOp::Gt, other)
    }

    /// Greater than or equal comparison.
    pub fn gte(self, other: Expr) -> Self {
        Self::binary(self, BinaryOp::GtEq, other)
    }

    /// Less than comparison.
    pub fn lt(self, other: Expr) -> Self {
        Self::binary(self, BinaryOp::Lt, other)
    }

    /// Less than or equal comparison.
    pub fn lte(self, other: Expr) -> Self {
        Self::binary(self, BinaryOp::LtEq, other)
    }

    // Logical operators

    /// Logical AND.
    pub fn and(self, other: Expr) -> Self {
        Self::binary(self, BinaryOp::And, other)
    }

    /// Logical OR.
    pub fn or(self, other: Expr) -> Self {
        Self::binary(self, BinaryOp::Or, other)
    }

    /// Logical NOT.
    pub fn not(self) -> Self {
        Self::unary(UnaryOp::Not, self)
    }

    // Null checks

    /// Is null check.
    pub fn is_null(self) -> Self {
        Self::unary(UnaryOp::IsNull, self)
    }

    /// Is not null check.
    pub fn is_not_null(self) -> Self {
        Self::unary(UnaryOp::IsNotNull, self)
    }

    // Arithmetic operators

    /// Addition.
    pub fn add(self, other: Expr) -> Self {
        Self::binary(self, BinaryOp::Add, other)
    }

    /// Subtraction.
    pub fn sub(self, other: Expr) -> Self {
        Self::binary(self, BinaryOp::Subtract, other)
    }

    /// Multiplication.
    pub fn mul(self, other: Expr) -> Self {
        Self::binary(self, BinaryOp::Multiply, other)
    }

    /// Division.
    pub fn div(self, other: Expr) -> Self {
        Self::binary(self, BinaryOp::Divide, other)
    }

    /// The literal value, if this is a literal expression.
    pub const fn as_literal(&self) -> Option<&Value> {
        match &self.kind {
            ExprKind::Literal(value) => Some(value),
            _ => None,
        }
    }

    /// Every column reference mentioned anywhere in this expression.
    pub fn column_refs(&self) -> LatticeResult<HashSet<ColumnRef>> {
        let mut refs = HashSet::new();
        self.for_each(&mut |expr| {
            if let ExprKind::Column(column) = &expr.kind {
                refs.insert(column.clone());
            }
        })?;
        Ok(refs)
    }
}

/// Shorthand for [`Expr::column`].
pub fn col(name: impl Into<String>) -> Expr {
    Expr::column(name)
}

/// Shorthand for [`Expr::literal`].
pub fn lit(value: impl Into<Value>) -> Expr {
    Expr::literal(value)
}

impl TreeNode for Expr {
    type Arg = ExprArg;

    fn node_name(&self) -> &str {
        match &self.kind {
            ExprKind::Column(_) => "Column",
            ExprKind::Literal(_) => "Literal",
            ExprKind::Binary { .. } => "Binary",
            ExprKind::Unary { .. } => "Unary",
            ExprKind::Func { .. } => "Func",
        }
    }

    fn node_fields(&self) -> Vec<NodeField<Self>> {
        match &self.kind {
            ExprKind::Column(column) => {
                vec![NodeField::Value(ExprArg::Column(column.clone()))]
            }
            ExprKind::Literal(value) => {
                vec![NodeField::Value(ExprArg::Literal(value.clone()))]
            }
            ExprKind::Binary { left, op, right } => vec![
                NodeField::Child(Arc::clone(left)),
                NodeField::Value(ExprArg::Binary(*op)),
                NodeField::Child(Arc::clone(right)),
            ],
            ExprKind::Unary { op, expr } => vec![
                NodeField::Value(ExprArg::Unary(*op)),
                NodeField::Child(Arc::clone(expr)),
            ],
            ExprKind::Func { name, args } => vec![
                NodeField::Value(ExprArg::Name(name.clone())),
                NodeField::Seq(args.iter().map(|arg| SeqItem::Child(Arc::clone(arg))).collect()),
            ],
        }
    }

    fn from_node_fields(&self, fields: Vec<NodeField<Self>>) -> LatticeResult<Self> {
        match (&self.kind, fields.as_slice()) {
            (ExprKind::Column(_), [NodeField::Value(ExprArg::Column(column))]) => {
                Ok(Self::column_ref(column.clone()))
            }
            (ExprKind::Literal(_), [NodeField::Value(ExprArg::Literal(value))]) => {
                Ok(Self::literal(value.clone()))
            }
            (
                ExprKind::Binary { .. },
                [NodeField::Child(left), NodeField::Value(ExprArg::Binary(op)), NodeField::Child(right)],
            ) => Ok(Self::from_kind(ExprKind::Binary {
                left: Arc::clone(left),
                op: *op,
                right: Arc::clone(right),
            })),
            (
                ExprKind::Unary { .. },
                [NodeField::Value(ExprArg::Unary(op)), NodeField::Child(expr)],
            ) => Ok(Self::from_kind(ExprKind::Unary {
                op: *op,
                expr: Arc::clone(expr),
            })),
            (
                ExprKind::Func { .. },
                [NodeField::Value(ExprArg::Name(name)), seq @ NodeField::Seq(_)],
            ) => {
                let args = seq.clone().into_children().ok_or_else(|| {
                    LatticeError::reconstruction(format!(
                        "function '{name}': argument sequence mixes children and values"
                    ))
                })?;
                Ok(Self::from_kind(ExprKind::Func {
                    name: name.clone(),
                    args,
                }))
            }
            (_, other) => Err(LatticeError::reconstruction(format!(
                "{} expression cannot be rebuilt from fields {other:?}",
                self.node_name()
            ))),
        }
    }

    fn memo(&self) -> &NodeMemo<Self> {
        &self.memo
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ExprKind::Column(column) => write!(f, "{}", column),
            ExprKind::Literal(value) => write!(f, "{}", value),
            ExprKind::Binary { left, op, right } => write!(f, "({} {} {})", left, op, right),
            ExprKind::Unary { op: UnaryOp::Neg, expr } => write!(f, "-{}", expr),
            ExprKind::Unary { op: UnaryOp::Not, expr } => write!(f, "NOT {}", expr),
            ExprKind::Unary { op, expr } => write!(f, "{} {}", expr, op),
            ExprKind::Func { name, args } => {
                let rendered: Vec<String> = args.iter().map(|a| a.to_string()).collect();
                write!(f, "{}({})", name, rendered.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expression_building() {
        let expr = col("year").gte(lit(2022i64));
        assert!(matches!(
            expr.kind(),
            ExprKind::Binary {
                op: BinaryOp::GtEq,
                ..
            }
        ));
    }

    #[test]
    fn test_children_follow_field_order() {
        let expr = col("a").add(col("b"));
        let children = expr.children().unwrap();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].to_string(), "a");
        assert_eq!(children[1].to_string(), "b");
    }

    #[test]
    fn test_func_children_are_the_argument_list() {
        let expr = Expr::func("coalesce", vec![col("a"), lit(0i64)]);
        assert_eq!(expr.children().unwrap().len(), 2);
        assert_eq!(expr.size().unwrap(), 3);
    }

    #[test]
    fn test_rebuild_preserves_operator() {
        let expr = col("a").lt(lit(10i64));
        let replacements = vec![
            std::sync::Arc::new(col("b")),
            std::sync::Arc::new(lit(20i64)),
        ];
        let rebuilt = expr.with_new_children(replacements).unwrap();
        assert_eq!(rebuilt.to_string(), "(b < 20)");
    }

    #[test]
    fn test_column_refs_collects_all() {
        let expr = col("a").add(col("Person.b")).eq(col("a"));
        let refs = expr.column_refs().unwrap();
        assert_eq!(refs.len(), 2);
        assert!(refs.contains(&ColumnRef::new("a")));
        assert!(refs.contains(&ColumnRef::qualified("Person", "b")));
    }

    #[test]
    fn test_display() {
        let expr = col("age").gte(lit(18i64)).and(col("name").is_not_null());
        assert_eq!(expr.to_string(), "((age >= 18) AND name IS NOT NULL)");
    }
}
