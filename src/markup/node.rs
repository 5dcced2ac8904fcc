//! Node types: NodeId, NodeData, ElementData, Attribute.

use slotmap::new_key_type;

use super::serialize::is_void;

new_key_type! {
    /// Unique identifier for a markup node. Copy, lightweight (u64).
    pub struct NodeId;
}

/// A single attribute on an element.
///
/// A `None` value is a presence-only (boolean) attribute such as `checked`,
/// serialized as the bare name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: Option<String>,
}

impl Attribute {
    /// A `name="value"` attribute.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// A presence-only attribute.
    pub fn flag(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    /// Whether this attribute carries no value.
    pub fn is_flag(&self) -> bool {
        self.value.is_none()
    }
}

/// Tag name and attributes of an element node.
///
/// Attributes are kept in insertion order; that order is what gets serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementData {
    /// Lowercase tag name (e.g. "input", "div").
    pub tag: String,
    /// Attributes in emission order.
    pub attributes: Vec<Attribute>,
}

impl ElementData {
    /// Create element data with no attributes.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
        }
    }

    /// Look up an attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Whether an attribute with this name is present.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// Attribute names in emission order.
    pub fn attribute_names(&self) -> Vec<&str> {
        self.attributes.iter().map(|a| a.name.as_str()).collect()
    }
}

/// Data associated with a single markup node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    /// The document root. Serializes as its children only.
    Document,
    /// An element with a tag and attributes.
    Element(ElementData),
    /// A run of character data, escaped on output.
    Text(String),
}

impl NodeData {
    /// The element data, if this is an element node.
    pub fn as_element(&self) -> Option<&ElementData> {
        match self {
            NodeData::Element(data) => Some(data),
            _ => None,
        }
    }

    /// Whether this node may hold children. Text and void elements may not.
    pub fn is_container(&self) -> bool {
        match self {
            NodeData::Document => true,
            NodeData::Element(data) => !is_void(&data.tag),
            NodeData::Text(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_with_value() {
        let attr = Attribute::new("name", "plan");
        assert_eq!(attr.name, "name");
        assert_eq!(attr.value.as_deref(), Some("plan"));
        assert!(!attr.is_flag());
    }

    #[test]
    fn attribute_flag() {
        let attr = Attribute::flag("checked");
        assert!(attr.is_flag());
        assert!(attr.value.is_none());
    }

    #[test]
    fn element_attribute_lookup() {
        let mut data = ElementData::new("input");
        data.attributes.push(Attribute::new("type", "radio"));
        data.attributes.push(Attribute::flag("checked"));
        assert!(data.has_attribute("type"));
        assert!(data.has_attribute("checked"));
        assert!(!data.has_attribute("disabled"));
        assert_eq!(data.attribute_names(), vec!["type", "checked"]);
    }

    #[test]
    fn text_is_not_container() {
        assert!(NodeData::Document.is_container());
        assert!(NodeData::Element(ElementData::new("div")).is_container());
        assert!(!NodeData::Text("hi".into()).is_container());
        assert!(!NodeData::Element(ElementData::new("input")).is_container());
    }

    #[test]
    fn as_element() {
        let node = NodeData::Element(ElementData::new("div"));
        assert_eq!(node.as_element().map(|e| e.tag.as_str()), Some("div"));
        assert!(NodeData::Document.as_element().is_none());
    }

    #[test]
    fn node_id_is_copy() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<NodeId>();
    }
}
