//! Filter fusion optimization rule.

use std::sync::Arc;

use common_error::LatticeResult;
use lattice_logical::{FilterOp, LogicalOp, LogicalPlan};
use lattice_trees::transform_up;

use super::rule::{OptimizationRule, Transformed};

/// Fuses adjacent filters into one.
///
/// `Filter(p1, Filter(p2, input))` becomes `Filter(p2 AND p1, input)`,
/// with the inner predicate first so evaluation order is preserved.
/// Chains longer than two collapse over successive optimizer iterations.
pub struct FilterFusion;

impl OptimizationRule for FilterFusion {
    fn name(&self) -> &'static str {
        "FilterFusion"
    }

    fn description(&self) -> &'static str {
        "Fuse adjacent filters into a single conjunction"
    }

    fn apply(&self, plan: LogicalPlan) -> LatticeResult<Transformed> {
        let root = plan.root_arc();
        let new_root = transform_up(root, &mut |op: &LogicalOp| match op {
            LogicalOp::Filter(outer) => match outer.input.as_ref() {
                LogicalOp::Filter(inner) => Ok(Some(LogicalOp::Filter(FilterOp::new(
                    Arc::clone(&inner.input),
                    inner.predicate.clone().and(outer.predicate.clone()),
                )))),
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

#[cfg(test)]
mod tests {
    use super::*;
    use lattice_logical::expr::{col, lit};
    use lattice_logical::{PlanBuilder, ScanOp};

    #[test]
    fn test_fuses_adjacent_filters() {
        let plan = PlanBuilder::scan(ScanOp::nodes("Person"))
            .filter(col("age").gt(lit(18i64)))
            .filter(col("active").eq(lit(true)))
            .build();

        let result = FilterFusion.apply(plan).unwrap();
        assert!(result.changed);
        assert_eq!(result.plan.operator_count().unwrap(), 2);

        let LogicalOp::Filter(filter) = result.plan.root() else {
            panic!("expected a fused filter at the root");
        };
        // Inner predicate evaluates first.
        assert_eq!(
            filter.predicate,
            col("age").gt(lit(18i64)).and(col("active").eq(lit(true)))
        );
    }

    #[test]
    fn test_single_filter_untouched() {
        let plan = PlanBuilder::scan(ScanOp::nodes("Person"))
            .filter(col("age").gt(lit(18i64)))
            .build();

        let result = FilterFusion.apply(plan).unwrap();
        assert!(!result.changed);
    }

    #[test]
    fn test_triple_chain_collapses_in_one_pass() {
        // Bottom-up application means every ancestor sees its already
        // fused child, so a whole chain collapses in a single pass.
        let plan = PlanBuilder::scan(ScanOp::nodes("Person"))
            .filter(col("a").gt(lit(1i64)))
            .filter(col("b").gt(lit(2i64)))
            .filter(col("c").gt(lit(3i64)))
            .build();

        let once = FilterFusion.apply(plan).unwrap();
        assert!(once.changed);
        assert_eq!(once.plan.operator_count().unwrap(), 2);

        let settled = FilterFusion.apply(once.plan).unwrap();
        assert!(!settled.changed);
    }
}
