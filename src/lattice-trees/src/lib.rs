//! Structural tree rewriting framework for Lattice.
//!
//! Every compiler stage in Lattice — expressions, logical operators,
//! physical operators — represents its nodes as trees and funnels all
//! traversal, equality, size/height computation, and rule-based
//! transformation through this one crate. A node family implements
//! [`TreeNode`] by declaring its ordered constructor field list; the
//! framework derives children from that declaration, rebuilds nodes with
//! replaced children, and drives bottom-up and top-down rewrites without
//! ever inspecting a node's concrete shape.
//!
//! # Example
//!
//! ```
//! use lattice_trees::{testing::TestNode, TreeNode};
//!
//! let tree = TestNode::unary("root", TestNode::leaf("leaf"));
//! assert_eq!(tree.size().unwrap(), 2);
//! assert_eq!(tree.height().unwrap(), 2);
//! ```
//!
//! # Modules
//!
//! - [`NodeField`] / [`SeqItem`]: ordered constructor field slots
//! - [`TreeNode`]: the node capability contract and its derived operations
//! - [`transform_up`] / [`transform_down`]: rule-based rewriting
//! - [`map_tree`]: structure-preserving mapping between node families
//! - [`testing`]: configurable fixture nodes for framework consumers

mod extract;
mod field;
mod memo;
mod node;
mod rebuild;
pub mod testing;
mod transform;
mod traverse;

pub use field::{NodeField, SeqItem};
pub use memo::NodeMemo;
pub use node::TreeNode;
pub use transform::{transform_down, transform_up};
pub use traverse::map_tree;
