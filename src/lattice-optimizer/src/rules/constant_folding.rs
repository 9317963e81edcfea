//! Constant folding optimization rule.
//!
//! Evaluate constant expressions at plan time.

use std::sync::Arc;

use common_error::LatticeResult;
use lattice_logical::expr::{Expr, ExprKind, Value};
use lattice_logical::{FilterOp, LogicalOp, LogicalPlan, ProjectOp, Projection};
use lattice_trees::transform_up;

use super::rule::{OptimizationRule, Transformed};

/// Constant folding rule.
///
/// Folds literal-only subexpressions inside predicates and projections,
/// and removes filters whose predicate folds to `true`. Expressions
/// whose evaluation is undefined (overflow, division by zero) are left
/// untouched.
pub struct ConstantFolding;

impl OptimizationRule for ConstantFolding {
    fn name(&self) -> &'static str {
        "ConstantFolding"
    }

    fn description(&self) -> &'static str {
        "Evaluate constant expressions at plan time"
    }

    fn apply(&self, plan: LogicalPlan) -> LatticeResult<Transformed> {
        let root = plan.root_arc();
        let new_root = transform_up(root, &mut |op: &LogicalOp| match op {
            LogicalOp::Filter(filter) => {
                let predicate = Arc::new(filter.predicate.clone());
                let folded = fold_expr(&predicate)?;

                // A tautological filter contributes nothing.
                if folded.as_literal() == Some(&Value::Bool(true)) {
                    return Ok(Some(filter.input.as_ref().clone()));
                }

                if Arc::ptr_eq(&folded, &predicate) {
                    Ok(None)
                } else {
                    Ok(Some(LogicalOp::Filter(FilterOp::new(
                        Arc::clone(&filter.input),
                        folded.as_ref().clone(),
                    ))))
                }
            }
            LogicalOp::Project(project) => {
                let mut changed = false;
                let mut folded_projections = Vec::with_capacity(project.projections.len());
                for projection in &project.projections {
                    let expr = Arc::new(projection.expr.clone());
                    let folded = fold_expr(&expr)?;
                    if !Arc::ptr_eq(&folded, &expr) {
                        changed = true;
                    }
                    folded_projections.push(Projection {
                        expr: folded.as_ref().clone(),
                        alias: projection.alias.clone(),
                    });
                }
                if changed {
                    Ok(Some(LogicalOp::Project(ProjectOp::new(
                        Arc::clone(&project.input),
                        folded_projections,
                    ))))
                } else {
                    Ok(None)
                }
            }
            _ => Ok(None),
        })?;

        if Arc::ptr_eq(&new_root, root) {
            Ok(Transformed::no(plan))
        } else {
            Ok(Transformed::yes(LogicalPlan::from_root(new_root)))
        }
    }
}

/// Fold every literal-only subexpression, bottom-up.
fn fold_expr(expr: &Arc<Expr>) -> LatticeResult<Arc<Expr>> {
    transform_up(expr, &mut |e: &Expr| match e.kind() {
        ExprKind::Binary { left, op, right } => {
            match (left.as_literal(), right.as_literal()) {
                (Some(l), Some(r)) => Ok(op.apply(l, r).map(Expr::literal)),
                _ => Ok(None),
            }
        }
        ExprKind::Unary { op, expr } => match expr.as_literal() {
            Some(v) => Ok(op.apply(v).map(Expr::literal)),
            None => Ok(None),
        },
        _ => Ok(None),
    })
}
