//! Rendering pipeline: tree walk, render configuration, entry points.

pub mod renderer;

pub use renderer::{render_html, render_html_with, render_into, RenderConfig, Renderer};

use crate::markup::MarkupError;

/// Errors that abort a render.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("markup construction failed: {0}")]
    Markup(#[from] MarkupError),
    #[error("component `{component}` failed to render: {message}")]
    Component { component: String, message: String },
}

impl RenderError {
    /// A failure reported by a custom component.
    pub fn component(component: impl Into<String>, message: impl Into<String>) -> Self {
        RenderError::Component {
            component: component.into(),
            message: message.into(),
        }
    }
}
