//! Built-in HTML elements: form controls, containers, text.
//!
//! Every element is a [`Leaf`](crate::component::Leaf) with a fixed tag and a
//! fixed attribute table emitted through [`crate::attr::emit`].

pub mod div;
pub mod forms;
pub mod label;
pub mod text;

pub use div::Div;
pub use forms::{Checkbox, Radio, TextField};
pub use label::Label;
pub use text::Text;

/// Implement `From<$ty> for Component` for leaf elements.
macro_rules! impl_into_component {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for $crate::component::Component {
                fn from(element: $ty) -> Self {
                    $crate::component::Component::leaf(element)
                }
            }
        )*
    };
}

impl_into_component!(Checkbox, Div, Label, Radio, Text, TextField);
