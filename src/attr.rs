//! Attribute emission: ordered tables of optional and boolean fields.
//!
//! Leaf components describe their attributes as a fixed table of
//! [`AttrField`]s and hand it to [`emit`]. Fields are applied in table order;
//! an unset text field or a false flag produces nothing, so the output order
//! of the remaining attributes always matches the table.

use tracing::trace;

use crate::markup::{Markup, MarkupError, NodeId};

/// The value side of an attribute table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrValue<'a> {
    /// `name="value"` when present, nothing when absent.
    Text(Option<&'a str>),
    /// Presence-only `name` when true, nothing when false.
    Flag(bool),
}

/// One entry in a component's attribute table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttrField<'a> {
    pub name: &'static str,
    pub value: AttrValue<'a>,
}

impl<'a> AttrField<'a> {
    /// A string-valued optional attribute.
    pub fn text(name: &'static str, value: Option<&'a str>) -> Self {
        Self {
            name,
            value: AttrValue::Text(value),
        }
    }

    /// A boolean attribute.
    pub fn flag(name: &'static str, value: bool) -> Self {
        Self {
            name,
            value: AttrValue::Flag(value),
        }
    }

    /// Whether this entry produces an attribute.
    pub fn is_emitted(&self) -> bool {
        match self.value {
            AttrValue::Text(value) => value.is_some(),
            AttrValue::Flag(value) => value,
        }
    }
}

/// Apply `fields` to `element` in order.
///
/// Emission is single-pass: a field whose name is already present on the
/// element fails with [`MarkupError::DuplicateAttribute`].
pub fn emit(
    markup: &mut Markup,
    element: NodeId,
    fields: &[AttrField<'_>],
) -> Result<(), MarkupError> {
    for field in fields {
        match field.value {
            AttrValue::Text(Some(value)) => {
                trace!(name = field.name, value, "emit attribute");
                markup.set_attribute(element, field.name, Some(value))?;
            }
            AttrValue::Flag(true) => {
                trace!(name = field.name, "emit flag");
                markup.set_attribute(element, field.name, None)?;
            }
            AttrValue::Text(None) | AttrValue::Flag(false) => {}
        }
    }
    Ok(())
}
