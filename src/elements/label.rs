//! Label element: a caption for a form control.

use crate::attr::{emit, AttrField};
use crate::component::{Component, Leaf};
use crate::environment::Environment;
use crate::markup::{Markup, NodeId};
use crate::render::{render_into, RenderError};

use super::div::class_list;

/// A `<label>` with child content.
///
/// Attribute order: `for`, `id`, `class`.
///
/// # Examples
///
/// ```ignore
/// let label = Label::new()
///     .with_for("plan-premium")
///     .with_child(Text::new("Premium"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Label {
    children: Vec<Component>,
    for_id: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Label {
    /// Create an empty label.
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate the label with the control whose id is `id` (builder pattern).
    pub fn with_for(mut self, id: impl Into<String>) -> Self {
        self.for_id = Some(id.into());
        self
    }

    /// Set the element id (builder pattern).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a CSS class (builder pattern). Duplicates are ignored.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    /// Add a child component (builder pattern).
    pub fn with_child(mut self, child: impl Into<Component>) -> Self {
        self.children.push(child.into());
        self
    }
}

impl Leaf for Label {
    fn component_type(&self) -> &str {
        "Label"
    }

    fn render(
        &self,
        markup: &mut Markup,
        parent: NodeId,
        env: &Environment,
    ) -> Result<(), RenderError> {
        let label = markup.append_element(parent, "label")?;
        let class = class_list(&self.classes);
        emit(
            markup,
            label,
            &[
                AttrField::text("for", self.for_id.as_deref()),
                AttrField::text("id", self.id.as_deref()),
                AttrField::text("class", class.as_deref()),
            ],
        )?;
        for child in &self.children {
            render_into(markup, label, child, env)?;
        }
        Ok(())
    }
}
