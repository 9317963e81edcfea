//! Lattice: a graph dataframe query compiler built on a structural tree
//! rewriting core.
//!
//! The workspace is layered:
//!
//! - [`trees`]: the generic tree contract, traversal, and rewrite engine
//! - [`logical`]: expressions, logical operators, and plan building
//! - [`optimizer`]: rule-based fixed-point optimization
//! - [`physical`]: `*Exec` operators and lowering
//!
//! # Example
//!
//! ```rust
//! use lattice::logical::{PlanBuilder, ScanOp};
//! use lattice::logical::expr::{col, lit};
//!
//! let plan = PlanBuilder::scan(ScanOp::nodes("Person"))
//!     .filter(col("age").gt(lit(18i64)))
//!     .project_columns(["name"])
//!     .build();
//!
//! let physical = lattice::compile(plan).unwrap();
//! println!("{}", physical.explain());
//! ```

pub use common_error as error;
pub use lattice_logical as logical;
pub use lattice_optimizer as optimizer;
pub use lattice_physical as physical;
pub use lattice_trees as trees;

use common_error::LatticeResult;
use lattice_logical::LogicalPlan;
use lattice_physical::{LocalPhysicalPlanner, PhysicalPlan, PhysicalPlanner};

/// Optimize a logical plan with the default rule set and lower it to a
/// physical plan.
pub fn compile(plan: LogicalPlan) -> LatticeResult<PhysicalPlan> {
    let optimized = lattice_optimizer::optimize(plan)?;
    LocalPhysicalPlanner::new().plan(&optimized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lattice_logical::expr::{col, lit};
    use lattice_logical::{PlanBuilder, ScanOp};
    use lattice_physical::PhysicalOp;

    #[test]
    fn test_compile_pipeline() {
        let plan = PlanBuilder::scan(ScanOp::nodes("Person"))
            .filter(lit(true).eq(lit(true)))
            .filter(col("age").gt(lit(18i64)))
            .project_columns(["name", "age"])
            .build();

        let physical = compile(plan).unwrap();

        // The tautological filter folded away; one real filter remains.
        assert_eq!(physical.operator_count().unwrap(), 3);
        assert!(matches!(physical.root(), PhysicalOp::Project(_)));

        let explain = physical.explain();
        assert!(explain.contains("ProjectExec"));
        assert!(explain.contains("FilterExec"));
        assert!(explain.contains("NodeScanExec(label=Person)"));
    }
}
