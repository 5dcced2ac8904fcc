//! Text: character data.
//!
//! The one built-in leaf that appends a text node rather than an element.
//! Content is escaped on serialization.

use crate::component::Leaf;
use crate::environment::Environment;
use crate::markup::{Markup, NodeId};
use crate::render::RenderError;

/// A run of text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text {
    content: String,
}

impl Text {
    /// Create a text node with the given content.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Return the text content.
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Leaf for Text {
    fn component_type(&self) -> &str {
        "Text"
    }

    fn render(
        &self,
        markup: &mut Markup,
        parent: NodeId,
        _env: &Environment,
    ) -> Result<(), RenderError> {
        markup.append_text(parent, self.content.as_str())?;
        Ok(())
    }
}
