//! Logical operators for query plans.

mod expand;
mod filter;
mod limit;
mod project;
mod scan;
mod union;

pub use expand::{Direction, ExpandOp};
pub use filter::FilterOp;
pub use limit::LimitOp;
pub use project::{ProjectOp, Projection};
pub use scan::{ScanKind, ScanOp};
pub use union::UnionOp;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use common_error::{LatticeError, LatticeResult};
use lattice_trees::{NodeField, NodeMemo, SeqItem, TreeNode};

use crate::expr::Expr;

/// Non-child constructor argument of a logical operator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PlanArg {
    /// A full expression tree, opaque at the plan level.
    Expr(Expr),
    /// Projection list of a project.
    Projections(Vec<Projection>),
    /// Label filter of a scan.
    Label(Option<String>),
    /// Relationship type filter of an expand.
    RelType(Option<String>),
    /// Access path of a scan.
    Kind(ScanKind),
    /// Traversal direction of an expand.
    Direction(Direction),
    /// Row count of a limit.
    Count(usize),
    /// Distinctness flag of a union.
    Flag(bool),
}

/// Logical operator in a query plan.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogicalOp {
    /// Scan graph elements.
    Scan(ScanOp),
    /// Expand to adjacent elements via relationships.
    Expand(ExpandOp),
    /// Filter rows based on a predicate.
    Filter(FilterOp),
    /// Project columns.
    Project(ProjectOp),
    /// Limit number of rows.
    Limit(LimitOp),
    /// Concatenate branches.
    Union(UnionOp),
}

impl LogicalOp {
    /// Wrap a scan.
    pub fn scan(op: ScanOp) -> Self {
        Self::Scan(op)
    }

    /// Wrap an expand.
    pub fn expand(op: ExpandOp) -> Self {
        Self::Expand(op)
    }

    /// Wrap a filter.
    pub fn filter(op: FilterOp) -> Self {
        Self::Filter(op)
    }

    /// Wrap a project.
    pub fn project(op: ProjectOp) -> Self {
        Self::Project(op)
    }

    /// Wrap a limit.
    pub fn limit(op: LimitOp) -> Self {
        Self::Limit(op)
    }

    /// Wrap a union.
    pub fn union(op: UnionOp) -> Self {
        Self::Union(op)
    }

    /// Get the name of this operator.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Scan(_) => "Scan",
            Self::Expand(_) => "Expand",
            Self::Filter(_) => "Filter",
            Self::Project(_) => "Project",
            Self::Limit(_) => "Limit",
            Self::Union(_) => "Union",
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
            Self::Scan(op) => {
                let label = op.label.as_deref().unwrap_or("*");
                format!("Scan({:?}, label={})", op.kind, label)
            }
            Self::Expand(op) => {
                let rel = op.rel_type.as_deref().unwrap_or("*");
                format!("Expand(rel={}, dir={})", rel, op.direction)
            }
            Self::Filter(op) => format!("Filter({})", op.predicate),
            Self::Project(op) => {
                let names: Vec<String> =
                    op.projections.iter().map(Projection::output_name).collect();
                format!("Project({})", names.join(", "))
            }
            Self::Limit(op) => format!("Limit({})", op.limit),
            Self::Union(op) => {
                if op.distinct {
                    "Union(DISTINCT)".to_string()
                } else {
                    "Union(ALL)".to_string()
                }
            }
        }
    }
}

impl TreeNode for LogicalOp {
    type Arg = PlanArg;

    fn node_name(&self) -> &str {
        self.name()
    }

    fn node_fields(&self) -> Vec<NodeField<Self>> {
        match self {
            Self::Scan(op) => vec![
                NodeField::Value(PlanArg::Label(op.label.clone())),
                NodeField::Value(PlanArg::Kind(op.kind)),
            ],
            Self::Expand(op) => vec![
                NodeField::Child(Arc::clone(&op.input)),
                NodeField::Value(PlanArg::RelType(op.rel_type.clone())),
                NodeField::Value(PlanArg::Direction(op.direction)),
            ],
            Self::Filter(op) => vec![
                NodeField::Value(PlanArg::Expr(op.predicate.clone())),
                NodeField::Child(Arc::clone(&op.input)),
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
                NodeField::Value(PlanArg::Flag(op.distinct)),
            ],
        }
    }

    fn from_node_fields(&self, fields: Vec<NodeField<Self>>) -> LatticeResult<Self> {
        match (self, fields.as_slice()) {
            (
                Self::Scan(_),
                [NodeField::Value(PlanArg::Label(label)), NodeField::Value(PlanArg::Kind(kind))],
            ) => Ok(Self::Scan(ScanOp {
                label: label.clone(),
                kind: *kind,
                memo: NodeMemo::new(),
            })),
            (
                Self::Expand(_),
                [NodeField::Child(input), NodeField::Value(PlanArg::RelType(rel_type)), NodeField::Value(PlanArg::Direction(direction))],
            ) => Ok(Self::Expand(ExpandOp {
                input: Arc::clone(input),
                rel_type: rel_type.clone(),
                direction: *direction,
                memo: NodeMemo::new(),
            })),
            (
                Self::Filter(_),
                [NodeField::Value(PlanArg::Expr(predicate)), NodeField::Child(input)],
            ) => Ok(Self::Filter(FilterOp {
                predicate: predicate.clone(),
                input: Arc::clone(input),
                memo: NodeMemo::new(),
            })),
            (
                Self::Project(_),
                [NodeField::Child(input), NodeField::Value(PlanArg::Projections(projections))],
            ) => Ok(Self::Project(ProjectOp {
                input: Arc::clone(input),
                projections: projections.clone(),
                memo: NodeMemo::new(),
            })),
            (
                Self::Limit(_),
                [NodeField::Child(input), NodeField::Value(PlanArg::Count(limit))],
            ) => Ok(Self::Limit(LimitOp {
                input: Arc::clone(input),
                limit: *limit,
                memo: NodeMemo::new(),
            })),
            (
                Self::Union(_),
                [seq @ NodeField::Seq(_), NodeField::Value(PlanArg::Flag(distinct))],
            ) => {
                let inputs = seq.clone().into_children().ok_or_else(|| {
                    LatticeError::reconstruction(
                        "Union branch sequence mixes children and values",
                    )
                })?;
                Ok(Self::Union(UnionOp {
                    inputs,
                    distinct: *distinct,
                    memo: NodeMemo::new(),
                }))
            }
            (_, other) => Err(LatticeError::reconstruction(format!(
                "{} operator cannot be rebuilt from fields {other:?}",
                self.name()
            ))),
        }
    }

    fn memo(&self) -> &NodeMemo<Self> {
        match self {
            Self::Scan(op) => &op.memo,
            Self::Expand(op) => &op.memo,
            Self::Filter(op) => &op.memo,
            Self::Project(op) => &op.memo,
            Self::Limit(op) => &op.memo,
            Self::Union(op) => &op.memo,
        }
    }
}

impl std::fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.explain_self())
    }
}
