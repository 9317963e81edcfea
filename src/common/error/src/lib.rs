//! Error types and result aliases for Lattice.
//!
//! Every fallible operation in the workspace, from tree extraction to
//! physical planning, reports through [`LatticeError`].

mod error;

pub use error::{LatticeError, LatticeResult};
