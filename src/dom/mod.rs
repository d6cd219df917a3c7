//! In-memory DOM: slotmap-backed element tree that templates can be built into.

pub mod backend;
pub mod html;
pub mod node;
pub mod query;
pub mod tree;

pub use node::{NodeData, NodeId};
pub use tree::{Dom, DomError};
