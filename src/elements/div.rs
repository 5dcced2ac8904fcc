//! Div element: a generic block container.

use crate::attr::{emit, AttrField};
use crate::component::{Component, Leaf};
use crate::environment::Environment;
use crate::markup::{Markup, NodeId};
use crate::render::{render_into, RenderError};

// ---------------------------------------------------------------------------
// Div
// ---------------------------------------------------------------------------

/// A `<div>` holding child components.
///
/// Attribute order: `id`, `class` (space-separated, in insertion order).
/// Children render inside the div, in order, under the div's environment.
///
/// # Examples
///
/// ```ignore
/// use gilt_html::elements::{Div, Radio, Text};
///
/// let card = Div::new()
///     .with_class("card")
///     .with_child(Text::new("Pick a size"))
///     .with_child(Radio::new().with_name("size"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Div {
    children: Vec<Component>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Div {
    /// Create a new empty div.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a child component (builder pattern).
    pub fn with_child(mut self, child: impl Into<Component>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Add several child components (builder pattern).
    pub fn with_children(
        mut self,
        children: impl IntoIterator<Item = impl Into<Component>>,
    ) -> Self {
        self.children.extend(children.into_iter().map(Into::into));
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

    /// Return the element id, if set.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Return the CSS classes.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// The number of children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

impl Leaf for Div {
    fn component_type(&self) -> &str {
        "Div"
    }

    fn render(
        &self,
        markup: &mut Markup,
        parent: NodeId,
        env: &Environment,
    ) -> Result<(), RenderError> {
        let div = markup.append_element(parent, "div")?;
        let class = class_list(&self.classes);
        emit(
            markup,
            div,
            &[
                AttrField::text("id", self.id.as_deref()),
                AttrField::text("class", class.as_deref()),
            ],
        )?;
        for child in &self.children {
            render_into(markup, div, child, env)?;
        }
        Ok(())
    }
}

/// Join classes for the `class` attribute; `None` when there are none.
pub(crate) fn class_list(classes: &[String]) -> Option<String> {
    if classes.is_empty() {
        None
    } else {
        Some(classes.join(" "))
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{Radio, Text};
    use crate::render::render_html;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_div() {
        assert_eq!(render_html(Div::new()).unwrap(), "<div></div>");
    }

    #[test]
    fn id_before_class() {
        let div = Div::new().with_class("card").with_id("main");
        assert_eq!(
            render_html(div).unwrap(),
            r#"<div id="main" class="card"></div>"#
        );
    }

    #[test]
    fn classes_joined_and_deduped() {
        let div = Div::new()
            .with_class("card")
            .with_class("wide")
            .with_class("card");
        assert_eq!(div.classes(), &["card".to_owned(), "wide".to_owned()]);
        assert_eq!(
            render_html(div).unwrap(),
            r#"<div class="card wide"></div>"#
        );
    }

    #[test]
    fn children_render_inside() {
        let div = Div::new()
            .with_child(Text::new("Size"))
            .with_child(Radio::new().with_name("size"));
        assert_eq!(div.child_count(), 2);
        assert_eq!(
            render_html(div).unwrap(),
            r#"<div>Size<input type="radio" name="size" /></div>"#
        );
    }

    #[test]
    fn nested_divs() {
        let div = Div::new().with_child(Div::new().with_child(Div::new().with_id("deep")));
        assert_eq!(
            render_html(div).unwrap(),
            r#"<div><div><div id="deep"></div></div></div>"#
        );
    }

    #[test]
    fn with_children_extends() {
        let div = Div::new().with_children([Text::new("a"), Text::new("b")]);
        assert_eq!(render_html(div).unwrap(), "<div>ab</div>");
    }

    #[test]
    fn accessors() {
        let div = Div::new().with_id("x");
        assert_eq!(div.id(), Some("x"));
        assert_eq!(div.component_type(), "Div");
    }
}
