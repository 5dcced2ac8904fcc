//! Checkbox control: `<input type="checkbox">`.

use crate::attr::{emit, AttrField};
use crate::component::Leaf;
use crate::environment::{Environment, FormDisabled};
use crate::markup::{Markup, NodeId};
use crate::render::RenderError;

use super::append_input;

/// An independent on/off control.
///
/// Attribute order after `type="checkbox"`: `name`, `value`, `id`,
/// `checked`, `required`, `autofocus`, `disabled`.
///
/// # Examples
///
/// ```ignore
/// let terms = Checkbox::new()
///     .with_name("terms")
///     .with_id("accept-terms")
///     .required(true);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Checkbox {
    name: Option<String>,
    value: Option<String>,
    id: Option<String>,
    checked: bool,
    required: bool,
    autofocus: bool,
    disabled: bool,
}

impl Checkbox {
    /// Create an unchecked checkbox.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the form control name (builder pattern).
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the value submitted when checked (builder pattern).
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the element id (builder pattern).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Check the box by default (builder pattern).
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Require the box to be checked before submit (builder pattern).
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Focus this control on page load (builder pattern).
    pub fn autofocus(mut self, autofocus: bool) -> Self {
        self.autofocus = autofocus;
        self
    }

    /// Disable the control (builder pattern).
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl Leaf for Checkbox {
    fn component_type(&self) -> &str {
        "Checkbox"
    }

    fn render(
        &self,
        markup: &mut Markup,
        parent: NodeId,
        env: &Environment,
    ) -> Result<(), RenderError> {
        let input = append_input(markup, parent, "checkbox")?;
        emit(
            markup,
            input,
            &[
                AttrField::text("name", self.name.as_deref()),
                AttrField::text("value", self.value.as_deref()),
                AttrField::text("id", self.id.as_deref()),
                AttrField::flag("checked", self.checked),
                AttrField::flag("required", self.required),
                AttrField::flag("autofocus", self.autofocus),
                AttrField::flag("disabled", self.disabled || env.get::<FormDisabled>()),
            ],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render_html;
    use pretty_assertions::assert_eq;

    #[test]
    fn basic() {
        assert_eq!(
            render_html(Checkbox::new()).unwrap(),
            r#"<input type="checkbox" />"#
        );
    }

    #[test]
    fn all_attributes() {
        let checkbox = Checkbox::new()
            .with_name("newsletter")
            .with_value("yes")
            .with_id("newsletter")
            .checked(true)
            .required(true)
            .autofocus(true)
            .disabled(true);
        assert_eq!(
            render_html(checkbox).unwrap(),
            r#"<input type="checkbox" name="newsletter" value="yes" id="newsletter" checked required autofocus disabled />"#
        );
    }

    #[test]
    fn unchecked_omits_checked() {
        let checkbox = Checkbox::new().with_name("terms").required(true);
        assert_eq!(
            render_html(checkbox).unwrap(),
            r#"<input type="checkbox" name="terms" required />"#
        );
    }
}
