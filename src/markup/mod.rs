//! Markup arena: slotmap-backed element tree with attribute handling and HTML
//! serialization.

pub mod node;
pub mod serialize;
pub mod tree;

pub use node::{Attribute, ElementData, NodeData, NodeId};
pub use serialize::{SerializeOptions, VoidStyle};
pub use tree::{Markup, MarkupError};
