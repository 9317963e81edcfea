//! The main optimizer that applies rules to logical plans.
//!
//! The optimizer applies rules in a fixed-point iteration until no more
//! changes occur or a maximum number of iterations is reached. Plans are
//! immutable trees with shared subtrees, so a rule that changes nothing
//! hands back the same root allocation and the fixed point is cheap to
//! detect.

use common_error::LatticeResult;
use lattice_logical::LogicalPlan;
use log::debug;

use super::rule::{OptimizationRule, OptimizedPlan, RuleTrace};

/// Configuration for the optimizer.
#[derive(Debug, Clone)]
pub struct OptimizerConfig {
    /// Maximum number of iterations before stopping.
    pub max_iterations: usize,
    /// Whether to enable detailed tracing.
    pub enable_trace: bool,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            enable_trace: false,
        }
    }
}

impl OptimizerConfig {
    /// Create a new config with the given max iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = max;
        self
    }

    /// Enable or disable tracing.
    #[must_use]
    pub fn with_trace(mut self, enable: bool) -> Self {
        self.enable_trace = enable;
        self
    }
}

/// The main optimizer that applies rules to logical plans.
///
/// Rules are applied in registration order, repeatedly, until an entire
/// iteration changes nothing or the iteration cap is hit.
pub struct Optimizer {
    /// The rules to apply (in order).
    rules: Vec<Box<dyn OptimizationRule>>,
    /// Configuration.
    config: OptimizerConfig,
}

impl Optimizer {
    /// Create a new optimizer with the given rules.
    pub fn new(rules: Vec<Box<dyn OptimizationRule>>) -> Self {
        Self {
            rules,
            config: OptimizerConfig::default(),
        }
    }

    /// Create a new optimizer with custom config.
    pub fn with_config(rules: Vec<Box<dyn OptimizationRule>>, config: OptimizerConfig) -> Self {
        Self { rules, config }
    }

    /// Add a rule to the optimizer.
    pub fn add_rule<R: OptimizationRule + 'static>(&mut self, rule: R) {
        self.rules.push(Box::new(rule));
    }

    /// Optimize a logical plan.
    ///
    /// Applies rules in fixed-point iteration until no changes occur.
    pub fn optimize(&self, plan: LogicalPlan) -> LatticeResult<OptimizedPlan> {
        let mut current_plan = plan;
        let mut iterations = 0;
        let mut total_rules_applied = 0;
        let mut trace = Vec::new();

        loop {
            if iterations >= self.config.max_iterations {
                debug!(
                    "optimizer reached max iterations ({}), stopping",
                    self.config.max_iterations
                );
                break;
            }

            iterations += 1;
            let mut changed_this_iteration = false;

            for rule in &self.rules {
                let before = if self.config.enable_trace {
                    Some(current_plan.explain())
                } else {
                    None
                };

                let result = rule.apply(current_plan)?;

                if result.changed {
                    changed_this_iteration = true;
                    total_rules_applied += 1;

                    debug!("rule '{}' applied in iteration {}", rule.name(), iterations);

                    if self.config.enable_trace {
                        trace.push(RuleTrace::new(
                            rule.name(),
                            before.unwrap_or_default(),
                            result.plan.explain(),
                            true,
                        ));
                    }
                }

                current_plan = result.plan;
            }

            if !changed_this_iteration {
                debug!("no changes in iteration {}, reached fixpoint", iterations);
                break;
            }
        }

        Ok(OptimizedPlan {
            plan: current_plan,
            iterations,
            rules_applied: total_rules_applied,
            trace,
        })
    }

    /// Optimize with a single pass (no fixpoint iteration).
    pub fn optimize_once(&self, plan: LogicalPlan) -> LatticeResult<OptimizedPlan> {
        let mut current_plan = plan;
        let mut rules_applied = 0;
        let mut trace = Vec::new();

        for rule in &self.rules {
            let before = if self.config.enable_trace {
                Some(current_plan.explain())
            } else {
                None
            };

            let result = rule.apply(current_plan)?;

            if result.changed {
                rules_applied += 1;

                if self.config.enable_trace {
                    trace.push(RuleTrace::new(
                        rule.name(),
                        before.unwrap_or_default(),
                        result.plan.explain(),
                        true,
                    ));
                }
            }

            current_plan = result.plan;
        }

        Ok(OptimizedPlan {
            plan: current_plan,
            iterations: 1,
            rules_applied,
            trace,
        })
    }
}

impl Default for Optimizer {
    fn default() -> Self {
        use super::{ConstantFolding, FilterFusion, PredicatePushdown};

        Self::new(vec![
            Box::new(ConstantFolding),
            Box::new(FilterFusion),
            Box::new(PredicatePushdown),
        ])
    }
}
