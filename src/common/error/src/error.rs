//! Core error types for Lattice.

use thiserror::Error;

/// Result type alias using `LatticeError`.
pub type LatticeResult<T> = std::result::Result<T, LatticeError>;

/// Core error type for Lattice operations.
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum LatticeError {
    /// A node's field list violates the child placement invariants
    /// (a second child sequence, or a single child declared after one).
    #[error("StructuralError: {0}")]
    StructuralError(String),

    /// A replacement children list is incompatible with the node's arity.
    #[error("ArityError: {0}")]
    ArityError(String),

    /// A concrete node type rejected the argument list assembled for it.
    #[error("ReconstructionError: {0}")]
    ReconstructionError(String),

    /// Planning error (logical to physical lowering).
    #[error("PlanError: {0}")]
    PlanError(String),

    /// Optimization error.
    #[error("OptimizationError: {0}")]
    OptimizationError(String),

    /// Feature not yet implemented.
    #[error("NotImplemented: {0}")]
    NotImplemented(String),

    /// Internal error (bug in Lattice).
    #[error("InternalError: {0}")]
    InternalError(String),
}

impl LatticeError {
    /// Create a new `StructuralError`.
    pub fn structural<S: Into<String>>(msg: S) -> Self {
        Self::StructuralError(msg.into())
    }

    /// Create a new `ArityError`.
    pub fn arity<S: Into<String>>(msg: S) -> Self {
        Self::ArityError(msg.into())
    }

    /// Create a new `ReconstructionError`.
    pub fn reconstruction<S: Into<String>>(msg: S) -> Self {
        Self::ReconstructionError(msg.into())
    }

    /// Create a new `PlanError`.
    pub fn plan<S: Into<String>>(msg: S) -> Self {
        Self::PlanError(msg.into())
    }

    /// Create a new `OptimizationError`.
    pub fn optimization<S: Into<String>>(msg: S) -> Self {
        Self::OptimizationError(msg.into())
    }

    /// Create a new `NotImplemented` error.
    pub fn not_implemented<S: Into<String>>(msg: S) -> Self {
        Self::NotImplemented(msg.into())
    }

    /// Create a new `InternalError`.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Self::InternalError(msg.into())
    }
}
