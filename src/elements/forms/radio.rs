//! Radio control: `<input type="radio">`.
//!
//! Radio buttons come in groups that share a `name`; only one member of a
//! group can be selected at a time.

use crate::attr::{emit, AttrField};
use crate::component::Leaf;
use crate::environment::{Environment, FormDisabled};
use crate::markup::{Markup, NodeId};
use crate::render::RenderError;

use super::append_input;

// ---------------------------------------------------------------------------
// Radio
// ---------------------------------------------------------------------------

/// A control for picking one option out of a mutually exclusive group.
///
/// Attributes are emitted after `type="radio"` in this order: `name`,
/// `value`, `id`, `checked`, `required`, `autofocus`, `disabled`. Unset
/// fields are omitted.
///
/// # Examples
///
/// ```ignore
/// // A pre-selected option with an id for label association.
/// let radio = Radio::new()
///     .with_name("plan")
///     .with_value("premium")
///     .with_id("plan-premium")
///     .checked(true);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Radio {
    name: Option<String>,
    value: Option<String>,
    id: Option<String>,
    checked: bool,
    required: bool,
    autofocus: bool,
    disabled: bool,
}

impl Radio {
    /// Create a radio button with no attributes besides its type.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the form control name shared by the group (builder pattern).
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the value submitted when this option is selected (builder pattern).
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the element id, used for `<label for>` association (builder pattern).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Select this option by default (builder pattern).
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Require a selection in this group before submit (builder pattern).
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

    /// The group name, if set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The submitted value, if set.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Whether the option is selected by default.
    pub fn is_checked(&self) -> bool {
        self.checked
    }
}

impl Leaf for Radio {
    fn component_type(&self) -> &str {
        "Radio"
    }

    fn render(
        &self,
        markup: &mut Markup,
        parent: NodeId,
        env: &Environment,
    ) -> Result<(), RenderError> {
        let input = append_input(markup, parent, "radio")?;
        let disabled = self.disabled || env.get::<FormDisabled>();
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
                AttrField::flag("disabled", disabled),
            ],
        )?;
        Ok(())
    }
}

// ===========================================================================
// Tests
// ===========================================================================
