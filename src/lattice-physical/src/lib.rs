//! Physical planning layer for Lattice.
//!
//! Lowers optimized logical plans into trees of `*Exec` operators. The
//! physical family implements the same tree contract as the logical one,
//! so plan inspection and rewriting reuse the generic machinery.

pub mod operators;
mod plan;
mod planner;

pub use operators::{
    EmptyExec, ExpandExec, FilterExec, IndexScanExec, LimitExec, NodeScanExec, PhysicalOp,
    ProjectExec, UnionExec,
};
pub use plan::PhysicalPlan;
pub use planner::{LocalPhysicalPlanner, PhysicalPlanner};
