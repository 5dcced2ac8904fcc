//! TextField control: single-line `<input type="text">`.

use crate::attr::{emit, AttrField};
use crate::component::Leaf;
use crate::environment::{Environment, FormDisabled};
use crate::markup::{Markup, NodeId};
use crate::render::RenderError;

use super::append_input;

// ---------------------------------------------------------------------------
// TextField
// ---------------------------------------------------------------------------

/// A single-line text input.
///
/// Attribute order after `type="text"`: `name`, `value`, `placeholder`, `id`,
/// `required`, `autofocus`, `readonly`, `disabled`.
///
/// # Examples
///
/// ```ignore
/// let email = TextField::new()
///     .with_name("email")
///     .with_placeholder("you@example.com")
///     .required(true);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    name: Option<String>,
    value: Option<String>,
    placeholder: Option<String>,
    id: Option<String>,
    required: bool,
    autofocus: bool,
    readonly: bool,
    disabled: bool,
}

impl TextField {
    /// Create an empty text field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the form control name (builder pattern).
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the initial value (builder pattern).
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the placeholder hint (builder pattern).
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set the element id (builder pattern).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Require a value before submit (builder pattern).
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Focus this control on page load (builder pattern).
    pub fn autofocus(mut self, autofocus: bool) -> Self {
        self.autofocus = autofocus;
        self
    }

    /// Make the value read-only (builder pattern).
    pub fn readonly(mut self, readonly: bool) -> Self {
        self.readonly = readonly;
        self
    }

    /// Disable the control (builder pattern).
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl Leaf for TextField {
    fn component_type(&self) -> &str {
        "TextField"
    }

    fn render(
        &self,
        markup: &mut Markup,
        parent: NodeId,
        env: &Environment,
    ) -> Result<(), RenderError> {
        let input = append_input(markup, parent, "text")?;
        emit(
            markup,
            input,
            &[
                AttrField::text("name", self.name.as_deref()),
                AttrField::text("value", self.value.as_deref()),
                AttrField::text("placeholder", self.placeholder.as_deref()),
                AttrField::text("id", self.id.as_deref()),
                AttrField::flag("required", self.required),
                AttrField::flag("autofocus", self.autofocus),
                AttrField::flag("readonly", self.readonly),
                AttrField::flag("disabled", self.disabled || env.get::<FormDisabled>()),
            ],
        )?;
        Ok(())
    }
}
