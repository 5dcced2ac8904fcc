//! ComponentCss trait and StyledInstance.

use crate::util::type_display_name;

// ---------------------------------------------------------------------------
// ComponentCss
// ---------------------------------------------------------------------------

/// A component that contributes CSS to the aggregated stylesheet.
///
/// ```ignore
/// struct PricingCard;
///
/// impl ComponentCss for PricingCard {
///     fn component_css(&self) -> &str {
///         ".pricing-card { border: 1px solid #ddd; }"
///     }
/// }
///
/// assert_eq!(PricingCard.component_name(), "PricingCard");
/// ```
pub trait ComponentCss {
    /// The CSS for this instance.
    fn component_css(&self) -> &str;

    /// Name written in the comment above the fragment.
    ///
    /// Defaults to the implementing type's name without its module path.
    fn component_name(&self) -> String {
        type_display_name::<Self>().to_owned()
    }
}

// ---------------------------------------------------------------------------
// StyledInstance
// ---------------------------------------------------------------------------

/// A named CSS fragment, ready for aggregation.
///
/// The name is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledInstance {
    name: String,
    css: String,
}

impl StyledInstance {
    /// Create an instance with an explicit name.
    pub fn new(name: impl Into<String>, css: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            css: css.into(),
        }
    }

    /// Capture a component's name and CSS.
    pub fn of<C: ComponentCss + ?Sized>(component: &C) -> Self {
        Self {
            name: component.component_name(),
            css: component.component_css().to_owned(),
        }
    }

    /// Create an instance named after `T`.
    pub fn unnamed<T: ?Sized>(css: impl Into<String>) -> Self {
        Self::new(type_display_name::<T>(), css)
    }

    /// The display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The CSS fragment.
    pub fn css(&self) -> &str {
        &self.css
    }
}

impl ComponentCss for StyledInstance {
    fn component_css(&self) -> &str {
        &self.css
    }

    fn component_name(&self) -> String {
        self.name.clone()
    }
}
