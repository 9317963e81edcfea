//! Logical plan structure.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use common_error::LatticeResult;
use lattice_trees::TreeNode;

use crate::expr::Expr;
use crate::ops::{
    Direction, ExpandOp, FilterOp, LimitOp, LogicalOp, ProjectOp, Projection, ScanOp, UnionOp,
};

/// A logical plan: an immutable tree of logical operators.
///
/// The root is held behind [`Arc`], so an optimizer pass that changes
/// nothing hands back the same allocation and a fixed point is
/// detectable by pointer identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogicalPlan {
    root: Arc<LogicalOp>,
}

impl LogicalPlan {
    /// Create a plan with the given root operator.
    pub fn new(root: LogicalOp) -> Self {
        Self {
            root: Arc::new(root),
        }
    }

    /// Create a plan from an already shared root.
    pub fn from_root(root: Arc<LogicalOp>) -> Self {
        Self { root }
    }

    /// The root operator.
    pub fn root(&self) -> &LogicalOp {
        &self.root
    }

    /// The shared root, for handing to rewrites.
    pub fn root_arc(&self) -> &Arc<LogicalOp> {
        &self.root
    }

    /// Number of operators in the plan.
    pub fn operator_count(&self) -> LatticeResult<usize> {
        self.root.size()
    }

    /// Maximum depth of the plan tree.
    pub fn depth(&self) -> LatticeResult<usize> {
        self.root.height()
    }

    /// Generate a tree-formatted explanation of the plan.
    pub fn explain(&self) -> String {
        let mut output = String::new();
        output.push_str("Logical Plan:\n");
        output.push_str(&self.root.explain(1));
        output
    }
}

impl std::fmt::Display for LogicalPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.explain())
    }
}

impl From<LogicalOp> for LogicalPlan {
    fn from(op: LogicalOp) -> Self {
        Self::new(op)
    }
}

/// Builder for constructing logical plans fluently.
#[derive(Debug, Clone)]
pub struct PlanBuilder {
    op: Arc<LogicalOp>,
}

impl PlanBuilder {
    /// Start building from a scan.
    pub fn scan(scan: ScanOp) -> Self {
        Self {
            op: Arc::new(LogicalOp::Scan(scan)),
        }
    }

    /// Add a filter.
    #[must_use]
    pub fn filter(self, predicate: Expr) -> Self {
        Self {
            op: Arc::new(LogicalOp::Filter(FilterOp::new(self.op, predicate))),
        }
    }

    /// Add an expand along a relationship type.
    #[must_use]
    pub fn expand(self, rel_type: impl Into<String>, direction: Direction) -> Self {
        Self {
            op: Arc::new(LogicalOp::Expand(ExpandOp::typed(
                self.op,
                rel_type,
                direction,
            ))),
        }
    }

    /// Add a projection.
    #[must_use]
    pub fn project(self, projections: Vec<Projection>) -> Self {
        Self {
            op: Arc::new(LogicalOp::Project(ProjectOp::new(self.op, projections))),
        }
    }

    /// Add a projection of plain columns by name.
    #[must_use]
    pub fn project_columns<S: Into<String>>(self, names: impl IntoIterator<Item = S>) -> Self {
        Self {
            op: Arc::new(LogicalOp::Project(ProjectOp::columns(self.op, names))),
        }
    }

    /// Add a limit.
    #[must_use]
    pub fn limit(self, limit: usize) -> Self {
        Self {
            op: Arc::new(LogicalOp::Limit(LimitOp::new(self.op, limit))),
        }
    }

    /// Union several builders into one branch list.
    pub fn union(branches: Vec<PlanBuilder>, distinct: bool) -> Self {
        let inputs = branches.into_iter().map(|b| b.op).collect();
        let union = if distinct {
            UnionOp::distinct(inputs)
        } else {
            UnionOp::all(inputs)
        };
        Self {
            op: Arc::new(LogicalOp::Union(union)),
        }
    }

    /// Build the final plan.
    pub fn build(self) -> LogicalPlan {
        LogicalPlan::from_root(self.op)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{col, lit};

    #[test]
    fn test_plan_creation() {
        let plan = LogicalPlan::new(LogicalOp::Scan(ScanOp::nodes("Person")));
        assert_eq!(plan.operator_count().unwrap(), 1);
        assert_eq!(plan.depth().unwrap(), 1);
    }

    #[test]
    fn test_plan_builder() {
        let plan = PlanBuilder::scan(ScanOp::nodes("Person"))
            .filter(col("age").gt(lit(18i64)))
            .project_columns(["name", "city"])
            .limit(10)
            .build();

        assert_eq!(plan.operator_count().unwrap(), 4);
        assert_eq!(plan.depth().unwrap(), 4);
    }

    #[test]
    fn test_plan_explain() {
        let plan = PlanBuilder::scan(ScanOp::nodes("Person"))
            .filter(col("active").eq(lit(true)))
            .build();

        let explain = plan.explain();
        assert!(explain.contains("Logical Plan"));
        assert!(explain.contains("Filter"));
        assert!(explain.contains("Scan"));
    }

    #[test]
    fn test_union_builder() {
        let plan = PlanBuilder::union(
            vec![
                PlanBuilder::scan(ScanOp::nodes("Person")),
                PlanBuilder::scan(ScanOp::nodes("Company")),
            ],
            false,
        )
        .build();

        assert_eq!(plan.operator_count().unwrap(), 3);
        assert_eq!(plan.depth().unwrap(), 2);
    }
}
