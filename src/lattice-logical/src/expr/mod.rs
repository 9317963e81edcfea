//! Expression trees.

mod binary;
mod column;
#[allow(clippy::module_inception)]
mod expr;
mod value;

pub use binary::BinaryOp;
pub use column::ColumnRef;
pub use expr::{col, lit, Expr, ExprArg, ExprKind, UnaryOp};
pub use value::Value;
