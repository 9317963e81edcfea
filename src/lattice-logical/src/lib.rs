//! Logical planning layer for Lattice.
//!
//! `lattice-logical` provides the expression system and logical operator
//! set for graph queries. Both families implement the tree contract from
//! `lattice-trees`, so the generic traversal and rewrite machinery works
//! over plans and predicates alike.
//!
//! # Overview
//!
//! - **Expression System**: column references, literals, and operator
//!   trees for predicates and projections
//! - **Logical Operators**: Scan, Expand, Filter, Project, Limit, Union
//! - **Logical Plan**: an immutable operator tree with structural sharing
//! - **Plan Building**: fluent API for constructing plans programmatically
//!
//! # Example
//!
//! ```rust
//! use lattice_logical::{PlanBuilder, ScanOp};
//! use lattice_logical::expr::{col, lit};
//!
//! // Scan(Person) -> Filter(age > 18) -> Project(name, city) -> Limit(10)
//! let plan = PlanBuilder::scan(ScanOp::nodes("Person"))
//!     .filter(col("age").gt(lit(18i64)))
//!     .project_columns(["name", "city"])
//!     .limit(10)
//!     .build();
//!
//! println!("{}", plan.explain());
//! ```

pub mod expr;
pub mod ops;
mod plan;

// Re-export commonly used types
pub use plan::{LogicalPlan, PlanBuilder};

// Re-export operator types at crate root for convenience
pub use ops::{
    Direction, ExpandOp, FilterOp, LimitOp, LogicalOp, PlanArg, ProjectOp, Projection, ScanKind,
    ScanOp, UnionOp,
};

// Re-export expression types at crate root for convenience
pub use expr::{col, lit, BinaryOp, ColumnRef, Expr, ExprArg, ExprKind, UnaryOp, Value};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_plan() {
        let plan = PlanBuilder::scan(ScanOp::nodes("Person"))
            .filter(col("age").gte(lit(21i64)))
            .project_columns(["name", "email"])
            .build();

        let explain = plan.explain();
        assert!(explain.contains("Scan"));
        assert!(explain.contains("Filter"));
        assert!(explain.contains("Project"));
    }

    #[test]
    fn test_expand_plan() {
        let plan = PlanBuilder::scan(ScanOp::nodes("Person"))
            .expand("KNOWS", Direction::Outgoing)
            .filter(col("friend.age").gt(lit(18i64)))
            .project_columns(["name", "friend.name"])
            .build();

        assert!(matches!(plan.root(), LogicalOp::Project(_)));
        assert_eq!(plan.operator_count().unwrap(), 4);
    }
}
