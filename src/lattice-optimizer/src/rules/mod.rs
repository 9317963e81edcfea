//! Optimization rules for Lattice query plans.
//!
//! Every rule rewrites an immutable plan tree through the generic
//! transform machinery and reports whether anything changed, which is
//! what the fixed-point driver keys off. A rewrite is legal only when
//! it preserves the rows, columns, and determinism of the plan it
//! replaces.

mod constant_folding;
mod filter_fusion;
mod optimizer;
mod predicate_pushdown;
mod rule;

pub use constant_folding::ConstantFolding;
pub use filter_fusion::FilterFusion;
pub use optimizer::{Optimizer, OptimizerConfig};
pub use predicate_pushdown::PredicatePushdown;
pub use rule::{OptimizationRule, OptimizedPlan, RuleTrace, Transformed};
