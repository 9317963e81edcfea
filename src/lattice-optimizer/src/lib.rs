//! Query optimizer for Lattice logical plans.
//!
//! Provides rule-based optimization over immutable plan trees.

mod rules;

pub use rules::{
    ConstantFolding, FilterFusion, OptimizationRule, OptimizedPlan, Optimizer, OptimizerConfig,
    PredicatePushdown, RuleTrace, Transformed,
};

use common_error::LatticeResult;
use lattice_logical::LogicalPlan;

/// Optimize a logical plan using the default rule set.
pub fn optimize(plan: LogicalPlan) -> LatticeResult<LogicalPlan> {
    let optimizer = Optimizer::default();
    Ok(optimizer.optimize(plan)?.plan)
}
