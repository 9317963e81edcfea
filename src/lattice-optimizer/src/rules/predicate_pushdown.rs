//! Predicate pushdown optimization rule.
//!
//! Move filters closer to the data they select from.

use std::collections::HashMap;
use std::sync::Arc;

use common_error::LatticeResult;
use lattice_logical::expr::{Expr, ExprKind};
use lattice_logical::{FilterOp, LogicalOp, LogicalPlan, ProjectOp, UnionOp};
use lattice_trees::transform_up;

use super::rule::{OptimizationRule, Transformed};

/// Predicate pushdown rule.
///
/// Two rewrites:
///
/// - `Filter` over `Project` swaps with the projection, rewriting the
///   predicate's column references through the projection's alias map.
///   Blocked when the predicate mentions a computed column, since
///   substituting the computation below the projection would duplicate
///   it.
/// - `Filter` over `Union` is cloned into every branch, where later
///   rules can push it further down independently.
pub struct PredicatePushdown;

impl OptimizationRule for PredicatePushdown {
    fn name(&self) -> &'static str {
        "PredicatePushdown"
    }

    fn description(&self) -> &'static str {
        "Move filters closer to data sources"
    }

    fn apply(&self, plan: LogicalPlan) -> LatticeResult<Transformed> {
        let root = plan.root_arc();
        let new_root = transform_up(root, &mut |op: &LogicalOp| match op {
            LogicalOp::Filter(filter) => match filter.input.as_ref() {
                LogicalOp::Project(project) => push_through_project(filter, project),
                LogicalOp::Union(union) => Ok(Some(push_into_union(filter, union))),
                _ => Ok(None),
            },
            _ => Ok(None),
        })?;

        if Arc::ptr_eq(&new_root, root) {
            Ok(Transformed::no(plan))
        } else {
            Ok(Transformed::yes(LogicalPlan::from_root(new_root)))
        }
    }
}

/// Swap `Filter(Project(input))` into `Project(Filter(input))`.
///
/// Every column the predicate mentions must be an output of the
/// projection that passes a plain column through (possibly renamed);
/// otherwise the filter stays put.
fn push_through_project(
    filter: &FilterOp,
    project: &ProjectOp,
) -> LatticeResult<Option<LogicalOp>> {
    let mut alias_map = HashMap::new();
    for projection in &project.projections {
        if let ExprKind::Column(column) = projection.expr.kind() {
            alias_map.insert(projection.output_name(), column.clone());
        }
    }

    for column in filter.predicate.column_refs()? {
        if !alias_map.contains_key(&column.display_name()) {
            return Ok(None);
        }
    }

    let predicate = Arc::new(filter.predicate.clone());
    let rewritten = transform_up(&predicate, &mut |expr: &Expr| match expr.kind() {
        ExprKind::Column(column) => match alias_map.get(&column.display_name()) {
            Some(target) if target != column => Ok(Some(Expr::column_ref(target.clone()))),
            _ => Ok(None),
        },
        _ => Ok(None),
    })?;

    let pushed = LogicalOp::Filter(FilterOp::new(
        Arc::clone(&project.input),
        rewritten.as_ref().clone(),
    ));
    Ok(Some(LogicalOp::Project(ProjectOp::new(
        Arc::new(pushed),
        project.projections.clone(),
    ))))
}

/// Clone `Filter(Union(branches))` into every branch.
fn push_into_union(filter: &FilterOp, union: &UnionOp) -> LogicalOp {
    let branches: Vec<Arc<LogicalOp>> = union
        .inputs
        .iter()
        .map(|branch| {
            Arc::new(LogicalOp::Filter(FilterOp::new(
                Arc::clone(branch),
                filter.predicate.clone(),
            )))
        })
        .collect();

    let union = if union.distinct {
        UnionOp::distinct(branches)
    } else {
        UnionOp::all(branches)
    };
    LogicalOp::Union(union)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lattice_logical::expr::{col, lit};
    use lattice_logical::{PlanBuilder, Projection, ScanOp};

    #[test]
    fn test_pushes_through_passthrough_project() {
        let plan = PlanBuilder::scan(ScanOp::nodes("Person"))
            .project_columns(["name", "age"])
            .filter(col("age").gt(lit(18i64)))
            .build();

        let result = PredicatePushdown.apply(plan).unwrap();
        assert!(result.changed);

        let LogicalOp::Project(project) = result.plan.root() else {
            panic!("expected the projection on top after pushdown");
        };
        assert!(matches!(project.input.as_ref(), LogicalOp::Filter(_)));
    }

    #[test]
    fn test_rewrites_predicate_through_alias() {
        let plan = PlanBuilder::scan(ScanOp::nodes("Person"))
            .project(vec![Projection::aliased(col("age"), "years")])
            .filter(col("years").gt(lit(18i64)))
            .build();

        let result = PredicatePushdown.apply(plan).unwrap();
        assert!(result.changed);

        let LogicalOp::Project(project) = result.plan.root() else {
            panic!("expected the projection on top after pushdown");
        };
        let LogicalOp::Filter(filter) = project.input.as_ref() else {
            panic!("expected the filter below the projection");
        };
        assert_eq!(filter.predicate, col("age").gt(lit(18i64)));
    }

    #[test]
    fn test_blocked_by_computed_column() {
        let plan = PlanBuilder::scan(ScanOp::nodes("Order"))
            .project(vec![Projection::aliased(
                col("price").mul(col("quantity")),
                "total",
            )])
            .filter(col("total").gt(lit(100i64)))
            .build();

        let result = PredicatePushdown.apply(plan).unwrap();
        assert!(!result.changed);
        assert!(matches!(result.plan.root(), LogicalOp::Filter(_)));
    }

    #[test]
    fn test_pushes_into_union_branches() {
        let union = PlanBuilder::union(
            vec![
                PlanBuilder::scan(ScanOp::nodes("Person")),
                PlanBuilder::scan(ScanOp::nodes("Company")),
            ],
            false,
        )
        .filter(col("name").is_not_null())
        .build();

        let result = PredicatePushdown.apply(union).unwrap();
        assert!(result.changed);

        let LogicalOp::Union(union) = result.plan.root() else {
            panic!("expected the union on top after pushdown");
        };
        assert_eq!(union.inputs.len(), 2);
        for branch in &union.inputs {
            assert!(matches!(branch.as_ref(), LogicalOp::Filter(_)));
        }
    }

    #[test]
    fn test_filter_over_limit_stays_put() {
        // Reordering a filter across a limit changes which rows survive.
        let plan = PlanBuilder::scan(ScanOp::nodes("Person"))
            .limit(10)
            .filter(col("age").gt(lit(18i64)))
            .build();

        let result = PredicatePushdown.apply(plan).unwrap();
        assert!(!result.changed);
        assert_eq!(result.plan.depth().unwrap(), 3);
    }
}
