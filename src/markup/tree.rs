//! Tree operations: append elements and text, set attributes, walk.

use slotmap::{SecondaryMap, SlotMap};

use super::node::{Attribute, ElementData, NodeData, NodeId};
use super::serialize::is_void;

/// Empty slice constant for returning when a node has no children.
const EMPTY_CHILDREN: &[NodeId] = &[];

/// Errors from building the markup tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkupError {
    #[error("node does not exist in this markup tree")]
    UnknownNode,
    #[error("cannot append children to a text node")]
    NotAContainer,
    #[error("<{tag}> is a void element and cannot have children")]
    VoidElement { tag: String },
    #[error("attributes can only be set on elements")]
    NotAnElement,
    #[error("invalid {kind} name: {name:?}")]
    InvalidName { kind: &'static str, name: String },
    #[error("attribute `{name}` is already set on <{tag}>")]
    DuplicateAttribute { tag: String, name: String },
}

/// The output document being built during a render, backed by a slotmap arena.
///
/// The tree is append-only: nodes are created as children of an existing node
/// and never move, so every node has exactly one parent and cycles cannot
/// form. A fresh tree holds a single [`NodeData::Document`] root.
pub struct Markup {
    nodes: SlotMap<NodeId, NodeData>,
    children: SecondaryMap<NodeId, Vec<NodeId>>,
    parent: SecondaryMap<NodeId, NodeId>,
    root: NodeId,
}

impl Markup {
    /// Create a tree containing only the document root.
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(NodeData::Document);
        let mut children = SecondaryMap::new();
        children.insert(root, Vec::new());
        Self {
            nodes,
            children,
            parent: SecondaryMap::new(),
            root,
        }
    }

    /// The document root.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Append a new element with the given tag as the last child of `parent`.
    pub fn append_element(&mut self, parent: NodeId, tag: &str) -> Result<NodeId, MarkupError> {
        validate_name("tag", tag)?;
        self.append(parent, NodeData::Element(ElementData::new(tag)))
    }

    /// Append a text node as the last child of `parent`.
    pub fn append_text(
        &mut self,
        parent: NodeId,
        text: impl Into<String>,
    ) -> Result<NodeId, MarkupError> {
        self.append(parent, NodeData::Text(text.into()))
    }

    fn append(&mut self, parent: NodeId, data: NodeData) -> Result<NodeId, MarkupError> {
        match self.nodes.get(parent) {
            None => return Err(MarkupError::UnknownNode),
            Some(NodeData::Text(_)) => return Err(MarkupError::NotAContainer),
            Some(NodeData::Element(element)) if is_void(&element.tag) => {
                return Err(MarkupError::VoidElement {
                    tag: element.tag.clone(),
                })
            }
            Some(_) => {}
        }
        let id = self.nodes.insert(data);
        self.children.insert(id, Vec::new());
        self.parent.insert(id, parent);
        self.children
            .get_mut(parent)
            .ok_or(MarkupError::UnknownNode)?
            .push(id);
        Ok(id)
    }

    /// Set an attribute on an element. `None` sets a presence-only attribute.
    ///
    /// Each attribute can be set once; setting the same name again is an
    /// error rather than an overwrite.
    pub fn set_attribute(
        &mut self,
        node: NodeId,
        name: &str,
        value: Option<&str>,
    ) -> Result<(), MarkupError> {
        validate_name("attribute", name)?;
        let element = match self.nodes.get_mut(node) {
            None => return Err(MarkupError::UnknownNode),
            Some(NodeData::Element(element)) => element,
            Some(_) => return Err(MarkupError::NotAnElement),
        };
        if element.has_attribute(name) {
            return Err(MarkupError::DuplicateAttribute {
                tag: element.tag.clone(),
                name: name.to_owned(),
            });
        }
        element.attributes.push(Attribute {
            name: name.to_owned(),
            value: value.map(str::to_owned),
        });
        Ok(())
    }

    /// Get the parent of a node, if it has one.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parent.get(id).copied()
    }

    /// Get the children of a node. Returns an empty slice if the node has no children
    /// or does not exist.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.children
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(EMPTY_CHILDREN)
    }

    /// Immutable access to a node's data.
    pub fn get(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id)
    }

    /// The element data of a node, if it is an element.
    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.nodes.get(id).and_then(NodeData::as_element)
    }

    /// Number of nodes, including the document root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the document has no content besides its root.
    pub fn is_empty(&self) -> bool {
        self.children(self.root).is_empty()
    }

    /// Whether the tree contains a node with the given id.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Pre-order depth-first traversal starting from `start`.
    pub fn walk_depth_first(&self, start: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if !self.nodes.contains_key(current) {
                continue;
            }
            result.push(current);
            // Push children in reverse so the first child is visited first.
            for &child in self.children(current).iter().rev() {
                stack.push(child);
            }
        }
        result
    }
}

impl Default for Markup {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Markup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Markup")
            .field("nodes", &self.nodes.len())
            .field("html", &self.to_html())
            .finish()
    }
}

/// Reject names the serializer could not emit unambiguously.
fn validate_name(kind: &'static str, name: &str) -> Result<(), MarkupError> {
    let invalid = name.is_empty()
        || name.chars().any(|c| {
            c.is_whitespace()
                || c.is_control()
                || matches!(c, '/' | '>' | '<' | '"' | '\'' | '=')
        });
    if invalid {
        return Err(MarkupError::InvalidName {
            kind,
            name: name.to_owned(),
        });
    }
    Ok(())
}
