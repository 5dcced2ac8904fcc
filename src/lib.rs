//! # gilt-html
//!
//! A declarative, typed component-to-HTML compiler.
//!
//! Pages are trees of composable components. The renderer walks the tree,
//! threads an immutable environment down through it, and lets each terminal
//! component write exactly the element it stands for, with attributes in a
//! fixed order. Component CSS is collected separately into a single
//! stylesheet.
//!
//! ## Core Systems
//!
//! - **[`markup`]**: Slotmap-backed element tree and HTML serializer
//! - **[`attr`]**: Ordered attribute tables for leaf components
//! - **[`environment`]**: Typed, persistent render context
//! - **[`component`]**: `Leaf` and `Compose` traits, the `Component` tree
//! - **[`render`]**: Tree walk, render config, `render_html` entry points
//! - **[`elements`]**: Built-in elements: Radio, Checkbox, TextField, Div, Label, Text
//! - **[`style`]**: Component CSS and stylesheet aggregation
//!
//! ## Example
//!
//! ```ignore
//! use gilt_html::elements::Radio;
//! use gilt_html::render_html;
//!
//! let html = render_html(Radio::new().with_name("size").checked(true))?;
//! assert_eq!(html, r#"<input type="radio" name="size" checked />"#);
//! ```

// Foundation
pub mod markup;
mod util;

// Core systems
pub mod attr;
pub mod component;
pub mod environment;
pub mod render;

// Element catalog
pub mod elements;

// Stylesheets
pub mod style;

pub use component::{Component, Compose, Leaf};
pub use environment::{Environment, EnvironmentKey, FormDisabled, Overrides};
pub use render::{render_html, render_html_with, RenderConfig, RenderError, Renderer};
pub use style::{aggregate_styles, ComponentCss, StyledInstance};

// Proc macros (feature-gated)
#[cfg(feature = "macros")]
pub use gilt_html_macros::view;
