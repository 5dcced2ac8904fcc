//! Form controls: `<input>` variants.

pub mod checkbox;
pub mod radio;
pub mod text_field;

pub use checkbox::Checkbox;
pub use radio::Radio;
pub use text_field::TextField;

use crate::attr::{emit, AttrField};
use crate::markup::{Markup, MarkupError, NodeId};

/// Append `<input type="{kind}">` under `parent`.
///
/// `type` is always the first attribute.
pub(crate) fn append_input(
    markup: &mut Markup,
    parent: NodeId,
    kind: &'static str,
) -> Result<NodeId, MarkupError> {
    let input = markup.append_element(parent, "input")?;
    emit(markup, input, &[AttrField::text("type", Some(kind))])?;
    Ok(input)
}
