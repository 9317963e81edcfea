//! Lowering from logical to physical plans.

use std::sync::Arc;

use common_error::{LatticeError, LatticeResult};
use lattice_logical::{LogicalOp, LogicalPlan, ScanKind};
use lattice_trees::map_tree;

use crate::operators::{
    EmptyExec, ExpandExec, FilterExec, IndexScanExec, LimitExec, NodeScanExec, PhysicalOp,
    ProjectExec, UnionExec,
};
use crate::plan::PhysicalPlan;

/// Physical planner trait.
///
/// Responsible for converting logical plans to physical plans.
pub trait PhysicalPlanner: Send + Sync {
    /// Plan a logical plan into a physical plan.
    fn plan(&self, logical: &LogicalPlan) -> LatticeResult<PhysicalPlan>;
}

/// Local physical planner for single-node execution.
///
/// Lowering is a structure-preserving map over the logical tree: each
/// operator is translated with [`EmptyExec`] placeholder inputs, and the
/// framework's rebuild substitutes the already lowered children. The
/// planner never wires subtrees by hand.
#[derive(Debug, Default)]
pub struct LocalPhysicalPlanner;

impl LocalPhysicalPlanner {
    /// Create a new local physical planner.
    pub fn new() -> Self {
        Self
    }

    /// Translate a single logical operator, ignoring its inputs.
    fn plan_operator(&self, op: &LogicalOp) -> LatticeResult<PhysicalOp> {
        match op {
            LogicalOp::Scan(scan) => match scan.kind {
                ScanKind::Label => Ok(PhysicalOp::NodeScan(NodeScanExec::new(scan.label.clone()))),
                ScanKind::Index => {
                    let label = scan.label.clone().ok_or_else(|| {
                        LatticeError::plan("index scan requires a label to index on")
                    })?;
                    Ok(PhysicalOp::IndexScan(IndexScanExec::new(label)))
                }
            },
            LogicalOp::Expand(expand) => Ok(PhysicalOp::Expand(ExpandExec::new(
                placeholder(),
                expand.rel_type.clone(),
                expand.direction,
            ))),
            LogicalOp::Filter(filter) => Ok(PhysicalOp::Filter(FilterExec::new(
                placeholder(),
                filter.predicate.clone(),
            ))),
            LogicalOp::Project(project) => Ok(PhysicalOp::Project(ProjectExec::new(
                placeholder(),
                project.projections.clone(),
            ))),
            LogicalOp::Limit(limit) => Ok(PhysicalOp::Limit(LimitExec::new(
                placeholder(),
                limit.limit,
            ))),
            // UnionExec takes `all: bool`, the opposite of `distinct`.
            LogicalOp::Union(union) => Ok(PhysicalOp::Union(UnionExec::new(
                union.inputs.iter().map(|_| placeholder()).collect(),
                !union.distinct,
            ))),
        }
    }
}

fn placeholder() -> Arc<PhysicalOp> {
    Arc::new(PhysicalOp::Empty(EmptyExec::new()))
}

impl PhysicalPlanner for LocalPhysicalPlanner {
    fn plan(&self, logical: &LogicalPlan) -> LatticeResult<PhysicalPlan> {
        let root = map_tree(logical.root_arc(), &mut |op| self.plan_operator(op))?;
        Ok(PhysicalPlan::from_root(root))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lattice_logical::expr::{col, lit};
    use lattice_logical::{Direction, PlanBuilder, ScanOp};

    fn lower(plan: &LogicalPlan) -> PhysicalPlan {
        LocalPhysicalPlanner::new().plan(plan).unwrap()
    }

    #[test]
    fn test_lowering_preserves_shape() {
        let plan = PlanBuilder::scan(ScanOp::nodes("Person"))
            .expand("KNOWS", Direction::Outgoing)
            .filter(col("friend.age").gt(lit(18i64)))
            .project_columns(["name"])
            .limit(5)
            .build();

        let physical = lower(&plan);
        assert_eq!(
            physical.operator_count().unwrap(),
            plan.operator_count().unwrap()
        );
        assert_eq!(physical.depth().unwrap(), plan.depth().unwrap());

        let explain = physical.explain();
        assert!(explain.contains("LimitExec(5)"));
        assert!(explain.contains("ProjectExec(name)"));
        assert!(explain.contains("FilterExec"));
        assert!(explain.contains("ExpandExec(rel=KNOWS"));
        assert!(explain.contains("NodeScanExec(label=Person)"));
    }

    #[test]
    fn test_index_scan_lowering() {
        let plan = PlanBuilder::scan(ScanOp::indexed("Person")).build();
        let physical = lower(&plan);
        assert!(matches!(physical.root(), PhysicalOp::IndexScan(_)));
    }

    #[test]
    fn test_index_scan_without_label_is_rejected() {
        let plan = PlanBuilder::scan(ScanOp::all().with_kind(ScanKind::Index)).build();
        let err = LocalPhysicalPlanner::new().plan(&plan).unwrap_err();
        assert!(matches!(err, LatticeError::PlanError(_)));
    }

    #[test]
    fn test_union_lowering_wires_every_branch() {
        let plan = PlanBuilder::union(
            vec![
                PlanBuilder::scan(ScanOp::nodes("A")),
                PlanBuilder::scan(ScanOp::nodes("B")),
                PlanBuilder::scan(ScanOp::nodes("C")),
            ],
            true,
        )
        .build();

        let physical = lower(&plan);
        let PhysicalOp::Union(union) = physical.root() else {
            panic!("expected a union at the root");
        };
        assert!(!union.all);
        assert_eq!(union.inputs.len(), 3);
        for input in &union.inputs {
            assert!(matches!(input.as_ref(), PhysicalOp::NodeScan(_)));
        }
    }

    #[test]
    fn test_no_placeholders_survive_lowering() {
        let plan = PlanBuilder::scan(ScanOp::nodes("Person"))
            .filter(col("age").gt(lit(18i64)))
            .limit(3)
            .build();

        let physical = lower(&plan);
        let mut placeholders = 0;
        use lattice_trees::TreeNode;
        physical
            .root()
            .for_each(&mut |op| {
                if matches!(op, PhysicalOp::Empty(_)) {
                    placeholders += 1;
                }
            })
            .unwrap();
        assert_eq!(placeholders, 0);
    }
}
