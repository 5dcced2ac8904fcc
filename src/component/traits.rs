//! Component model: `Leaf`, `Compose`, and the closed `Component` set.
//!
//! A [`Leaf`] writes markup directly. A [`Compose`] component writes nothing
//! itself; it derives an environment for its subtree and produces a body,
//! which the renderer expands recursively. [`Component`] is the value the
//! renderer walks and the only place the two kinds are told apart.

use std::fmt;
use std::sync::Arc;

use crate::environment::{Environment, EnvironmentKey, Overrides};
use crate::markup::{Markup, NodeId};
use crate::render::RenderError;

// ---------------------------------------------------------------------------
// Leaf
// ---------------------------------------------------------------------------

/// A terminal component that renders markup directly.
///
/// Element leaves append exactly one child element to `parent`, configure it
/// through [`crate::attr::emit`], and, if they are containers, render their
/// children into that element with [`crate::render::render_into`].
pub trait Leaf: Send + Sync {
    /// The component type name (e.g. "Radio", "Div").
    fn component_type(&self) -> &str;

    /// Append this component's markup under `parent`.
    ///
    /// `env` is read-only; leaves may consult it but cannot change what
    /// their siblings see.
    fn render(
        &self,
        markup: &mut Markup,
        parent: NodeId,
        env: &Environment,
    ) -> Result<(), RenderError>;
}

// ---------------------------------------------------------------------------
// Compose
// ---------------------------------------------------------------------------

/// A component defined in terms of other components.
///
/// `body` is evaluated on every render and must be free of side effects.
pub trait Compose: Send + Sync {
    /// The component type name (e.g. "PricingCard").
    fn component_type(&self) -> &str;

    /// The environment seen by the body. Defaults to the inherited one.
    fn environment(&self, env: &Environment) -> Environment {
        env.clone()
    }

    /// Produce the component this one expands to.
    fn body(&self, env: &Environment) -> Component;
}

// ---------------------------------------------------------------------------
// Component
// ---------------------------------------------------------------------------

/// A node of the authored component tree.
///
/// Clones share the underlying component (`Arc`), so composing wrappers can
/// hand out their content as a fresh body on every render.
#[derive(Clone)]
pub enum Component {
    /// Expands to a body under a possibly derived environment.
    Composing(Arc<dyn Compose>),
    /// Renders markup directly.
    Leaf(Arc<dyn Leaf>),
    /// Ordered siblings rendered into the same parent.
    Group(Vec<Component>),
}

impl Component {
    /// Wrap a leaf component.
    pub fn leaf(leaf: impl Leaf + 'static) -> Self {
        Component::Leaf(Arc::new(leaf))
    }

    /// Wrap a composing component.
    pub fn compose(compose: impl Compose + 'static) -> Self {
        Component::Composing(Arc::new(compose))
    }

    /// A group of sibling components.
    pub fn group(children: impl IntoIterator<Item = impl Into<Component>>) -> Self {
        Component::Group(children.into_iter().map(Into::into).collect())
    }

    /// A component that renders nothing.
    pub fn empty() -> Self {
        Component::Group(Vec::new())
    }

    /// The component type name. Groups report `"Group"`.
    pub fn component_type(&self) -> &str {
        match self {
            Component::Composing(c) => c.component_type(),
            Component::Leaf(l) => l.component_type(),
            Component::Group(_) => "Group",
        }
    }

    /// Render this subtree with `K` set to `value`.
    pub fn with_environment<K: EnvironmentKey>(self, value: K::Value) -> Self {
        self.with_overrides(Overrides::new().set::<K>(value))
    }

    /// Render this subtree with a batch of environment overrides.
    pub fn with_overrides(self, overrides: Overrides) -> Self {
        Component::compose(EnvironmentOverride {
            overrides,
            content: self,
        })
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Composing(c) => f
                .debug_tuple("Composing")
                .field(&c.component_type())
                .finish(),
            Component::Leaf(l) => f.debug_tuple("Leaf").field(&l.component_type()).finish(),
            Component::Group(children) => f.debug_tuple("Group").field(children).finish(),
        }
    }
}

impl Default for Component {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Vec<Component>> for Component {
    fn from(children: Vec<Component>) -> Self {
        Component::Group(children)
    }
}

// ---------------------------------------------------------------------------
// EnvironmentOverride
// ---------------------------------------------------------------------------

/// Composing wrapper whose only effect is deriving environment entries.
///
/// Created by [`Component::with_environment`] and [`Component::with_overrides`].
struct EnvironmentOverride {
    overrides: Overrides,
    content: Component,
}

impl Compose for EnvironmentOverride {
    fn component_type(&self) -> &str {
        "EnvironmentOverride"
    }

    fn environment(&self, env: &Environment) -> Environment {
        env.derive(self.overrides.clone())
    }

    fn body(&self, _env: &Environment) -> Component {
        self.content.clone()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::FormDisabled;

    #[derive(Debug)]
    struct Marker(&'static str);

    impl Leaf for Marker {
        fn component_type(&self) -> &str {
            "Marker"
        }

        fn render(
            &self,
            markup: &mut Markup,
            parent: NodeId,
            _env: &Environment,
        ) -> Result<(), RenderError> {
            markup.append_element(parent, self.0)?;
            Ok(())
        }
    }

    struct Card;

    impl Compose for Card {
        fn component_type(&self) -> &str {
            "Card"
        }

        fn body(&self, _env: &Environment) -> Component {
            Component::leaf(Marker("section"))
        }
    }

    #[test]
    fn component_type_names() {
        assert_eq!(Component::leaf(Marker("p")).component_type(), "Marker");
        assert_eq!(Component::compose(Card).component_type(), "Card");
        assert_eq!(Component::empty().component_type(), "Group");
    }

    #[test]
    fn compose_default_environment_is_inherited() {
        let env = Environment::new().with::<FormDisabled>(true);
        assert!(Card.environment(&env).get::<FormDisabled>());
    }

    #[test]
    fn group_from_iter() {
        let group = Component::group(vec![
            Component::leaf(Marker("a")),
            Component::leaf(Marker("b")),
        ]);
        match group {
            Component::Group(children) => assert_eq!(children.len(), 2),
            other => panic!("expected group, got {other:?}"),
        }
    }

    #[test]
    fn with_environment_wraps_in_composing() {
        let wrapped = Component::leaf(Marker("p")).with_environment::<FormDisabled>(true);
        let Component::Composing(compose) = &wrapped else {
            panic!("expected composing wrapper");
        };
        assert_eq!(compose.component_type(), "EnvironmentOverride");
        let env = compose.environment(&Environment::new());
        assert!(env.get::<FormDisabled>());
        assert_eq!(compose.body(&env).component_type(), "Marker");
    }

    #[test]
    fn clone_shares_component() {
        let a = Component::compose(Card);
        let b = a.clone();
        match (&a, &b) {
            (Component::Composing(x), Component::Composing(y)) => assert!(Arc::ptr_eq(x, y)),
            _ => panic!("expected composing"),
        }
    }

    #[test]
    fn debug_output() {
        let group = Component::group(vec![Component::leaf(Marker("p"))]);
        assert_eq!(format!("{group:?}"), r#"Group([Leaf("Marker")])"#);
    }

    #[test]
    fn component_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Component>();
    }
}
