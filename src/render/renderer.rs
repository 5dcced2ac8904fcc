//! Tree renderer: expands a component tree into a markup tree.
//!
//! The walk is depth-first and pre-order. Composing components are
//! transparent: they derive their environment, produce a body, and that body
//! is rendered into the *same* parent. Leaves append markup. Groups render
//! each child in order. All three cases meet in [`render_into`].

use tracing::{debug, trace};

use crate::component::Component;
use crate::environment::Environment;
use crate::markup::{Markup, NodeId, SerializeOptions, VoidStyle};

use super::RenderError;

// ---------------------------------------------------------------------------
// RenderConfig
// ---------------------------------------------------------------------------

/// Configuration for a [`Renderer`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderConfig {
    /// How the finished markup tree is serialized.
    pub serialize: SerializeOptions,
}

impl RenderConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix output with `<!DOCTYPE html>` (builder).
    pub fn with_doctype(mut self, doctype: bool) -> Self {
        self.serialize.doctype = doctype;
        self
    }

    /// Set how void elements are terminated (builder).
    pub fn with_void_style(mut self, void_style: VoidStyle) -> Self {
        self.serialize.void_style = void_style;
        self
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Renders component trees to markup.
///
/// A renderer holds only configuration; every call builds its own
/// [`Markup`], so one renderer can serve independent renders concurrently.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    /// Create a renderer with the given config.
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// The renderer's configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render `root` into a fresh markup tree.
    ///
    /// The first error aborts the walk; no partial tree is returned.
    pub fn render(&self, root: &Component, env: &Environment) -> Result<Markup, RenderError> {
        debug!(root = root.component_type(), "render start");
        let mut markup = Markup::new();
        let document = markup.root();
        render_into(&mut markup, document, root, env)?;
        debug!(
            root = root.component_type(),
            nodes = markup.len(),
            "render complete"
        );
        Ok(markup)
    }

    /// Render `root` and serialize the result.
    pub fn render_to_string(
        &self,
        root: &Component,
        env: &Environment,
    ) -> Result<String, RenderError> {
        let markup = self.render(root, env)?;
        Ok(markup.to_html_with(&self.config.serialize))
    }
}

/// Render `component` under `parent` with `env`.
///
/// This is the renderer's single dispatch point. Container leaves call it to
/// render their children into the element they appended.
pub fn render_into(
    markup: &mut Markup,
    parent: NodeId,
    component: &Component,
    env: &Environment,
) -> Result<(), RenderError> {
    match component {
        Component::Leaf(leaf) => {
            trace!(component = leaf.component_type(), "render leaf");
            leaf.render(markup, parent, env)
        }
        Component::Composing(compose) => {
            trace!(component = compose.component_type(), "expand body");
            let env = compose.environment(env);
            let body = compose.body(&env);
            render_into(markup, parent, &body, &env)
        }
        Component::Group(children) => {
            for child in children {
                render_into(markup, parent, child, env)?;
            }
            Ok(())
        }
    }
}

/// Render `root` with a default environment and config.
pub fn render_html(root: impl Into<Component>) -> Result<String, RenderError> {
    render_html_with(root, &Environment::new())
}

/// Render `root` with the given environment and the default config.
pub fn render_html_with(
    root: impl Into<Component>,
    env: &Environment,
) -> Result<String, RenderError> {
    Renderer::default().render_to_string(&root.into(), env)
}

// ===========================================================================
// Tests
// ===========================================================================
