//! Physical operators.
//!
//! The physical family implements the same tree contract as the logical
//! one, with the logical value vocabulary reused for its ordinary
//! fields. That keeps the lowering a pure structure-preserving map.

mod empty;
mod expand;
mod filter;
mod limit;
mod project;
mod scan;
mod union;

pub use empty::EmptyExec;
pub use expand::ExpandExec;
pub use filter::FilterExec;
pub use limit::LimitExec;
pub use project::ProjectExec;
pub use scan::{IndexScanExec, NodeScanExec};
pub use union::UnionExec;

use std::sync::Arc;

use common_error::{LatticeError, LatticeResult};
use lattice_logical::{PlanArg, Projection};
use lattice_trees::{NodeField, NodeMemo, SeqItem, TreeNode};

/// Physical operator in an executable plan.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PhysicalOp {
    /// Full scan over labeled elements.
    NodeScan(NodeScanExec),
    /// Index-backed scan.
    IndexScan(IndexScanExec),
    /// Adjacency expansion.
    Expand(ExpandExec),
    /// Row filter.
    Filter(FilterExec),
    /// Column projection.
    Project(ProjectExec),
    /// Row truncation.
    Limit(LimitExec),
    /// Branch concatenation.
    Union(UnionExec),
    /// Produces no rows.
    Empty(EmptyExec),
}

impl PhysicalOp {
    /// Get the name of this operator.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NodeScan(_) => "NodeScanExec",
            Self::IndexScan(_) => "IndexScanExec",
            Self::Expand(_) => "ExpandExec",
            Self::Filter(_) => "FilterExec",
            Self::Project(_) => "ProjectExec",
            Self::Limit(_) => "LimitExec",
            Self::Union(_) => "UnionExec",
            Self::Empty(_) => "EmptyExec",
        }
    }

    /// Explain this operator and its inputs as an indented tree.
    pub fn explain(&self, indent: usize) -> String {
        let prefix = "  ".repeat(indent);
        let mut result = format!("{}{}", prefix, self.explain_self());
        if let Ok(children) = self.children() {
            for child in children.iter() {
                result.push('\n');
                result.push_str(&child.explain(indent + 1));
            }
        }
        result
    }

    fn explain_self(&self) -> String {
        match self {
            Self::NodeScan(op) => {
                let label = op.label.as_deref().unwrap_or("*");
                format!("NodeScanExec(label={})", label)
            }
            Self::IndexScan(op) => format!("IndexScanExec(label={})", op.label),
            Self::Expand(op) => {
                let rel = op.rel_type.as_deref().unwrap_or("*");
                format!("ExpandExec(rel={}, dir={})", rel, op.direction)
            }
            Self::Filter(op) => format!("FilterExec({})", op.predicate),
            Self::Project(op) => {
                let names: Vec<String> =
                    op.projections.iter().map(Projection::output_name).collect();
                format!("ProjectExec({})", names.join(", "))
            }
            Self::Limit(op) => format!("LimitExec({})", op.limit),
            Self::Union(op) => {
                if op.all {
                    "UnionExec(ALL)".to_string()
                } else {
                    "UnionExec(DISTINCT)".to_string()
                }
            }
            Self::Empty(_) => "EmptyExec".to_string(),
        }
    }
}

impl TreeNode for PhysicalOp {
    type Arg = PlanArg;

    fn node_name(&self) -> &str {
        self.name()
    }

    fn node_fields(&self) -> Vec<NodeField<Self>> {
        match self {
            Self::NodeScan(op) => vec![NodeField::Value(PlanArg::Label(op.label.clone()))],
            Self::IndexScan(op) => {
                vec![NodeField::Value(PlanArg::Label(Some(op.label.clone())))]
            }
            Self::Expand(op) => vec![
                NodeField::Child(Arc::clone(&op.input)),
                NodeField::Value(PlanArg::RelType(op.rel_type.clone())),
                NodeField::Value(PlanArg::Direction(op.direction)),
            ],
            Self::Filter(op) => vec![
                NodeField::Child(Arc::clone(&op.input)),
                NodeField::Value(PlanArg::Expr(op.predicate.clone())),
            ],
            Self::Project(op) => vec![
                NodeField::Child(Arc::clone(&op.input)),
                NodeField::Value(PlanArg::Projections(op.projections.clone())),
            ],
            Self::Limit(op) => vec![
                NodeField::Child(Arc::clone(&op.input)),
                NodeField::Value(PlanArg::Count(op.limit)),
            ],
            Self::Union(op) => vec![
                NodeField::Seq(
                    op.inputs
                        .iter()
                        .map(|input| SeqItem::Child(Arc::clone(input)))
                        .collect(),
                ),
                NodeField::Value(PlanArg::Flag(op.all)),
            ],
            Self::Empty(_) => vec![],
        }
    }

    fn from_node_fields(&self, fields: Vec<NodeField<Self>>) -> LatticeResult<Self> {
        match (self, fields.as_slice()) {
            (Self::NodeScan(_), [NodeField::Value(PlanArg::Label(label))]) => {
                Ok(Self::NodeScan(NodeScanExec::new(label.clone())))
            }
            (Self::IndexScan(_), [NodeField::Value(PlanArg::Label(Some(label)))]) => {
                Ok(Self::IndexScan(IndexScanExec::new(label.clone())))
            }
            (
                Self::Expand(_),
                [NodeField::Child(input), NodeField::Value(PlanArg::RelType(rel_type)), NodeField::Value(PlanArg::Direction(direction))],
            ) => Ok(Self::Expand(ExpandExec::new(
                Arc::clone(input),
                rel_type.clone(),
                *direction,
            ))),
            (
                Self::Filter(_),
                [NodeField::Child(input), NodeField::Value(PlanArg::Expr(predicate))],
            ) => Ok(Self::Filter(FilterExec::new(
                Arc::clone(input),
                predicate.clone(),
            ))),
            (
                Self::Project(_),
                [NodeField::Child(input), NodeField::Value(PlanArg::Projections(projections))],
            ) => Ok(Self::Project(ProjectExec::new(
                Arc::clone(input),
                projections.clone(),
            ))),
            (
                Self::Limit(_),
                [NodeField::Child(input), NodeField::Value(PlanArg::Count(limit))],
            ) => Ok(Self::Limit(LimitExec::new(Arc::clone(input), *limit))),
            (
                Self::Union(_),
                [seq @ NodeField::Seq(_), NodeField::Value(PlanArg::Flag(all))],
            ) => {
                let inputs = seq.clone().into_children().ok_or_else(|| {
                    LatticeError::reconstruction(
                        "UnionExec branch sequence mixes children and values",
                    )
                })?;
                Ok(Self::Union(UnionExec::new(inputs, *all)))
            }
            (Self::Empty(_), []) => Ok(Self::Empty(EmptyExec::new())),
            (_, other) => Err(LatticeError::reconstruction(format!(
                "{} operator cannot be rebuilt from fields {other:?}",
                self.name()
            ))),
        }
    }

    fn memo(&self) -> &NodeMemo<Self> {
        match self {
            Self::NodeScan(op) => &op.memo,
            Self::IndexScan(op) => &op.memo,
            Self::Expand(op) => &op.memo,
            Self::Filter(op) => &op.memo,
            Self::Project(op) => &op.memo,
            Self::Limit(op) => &op.memo,
            Self::Union(op) => &op.memo,
            Self::Empty(op) => &op.memo,
        }
    }
}

impl std::fmt::Display for PhysicalOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.explain_self())
    }
}
