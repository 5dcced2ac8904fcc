//! Environment: immutable, typed, inheritable render context.
//!
//! An [`Environment`] is a persistent map from key types to values. Deriving
//! an environment pushes a frame in front of the existing chain; the parent is
//! never touched, so sibling subtrees cannot observe each other's overrides.
//! Every key carries a default, so lookups always succeed.

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

use crate::util::type_display_name;

// ---------------------------------------------------------------------------
// EnvironmentKey
// ---------------------------------------------------------------------------

/// A typed environment entry.
///
/// Implement on a marker type:
///
/// ```ignore
/// struct Theme;
///
/// impl EnvironmentKey for Theme {
///     type Value = String;
///     fn default_value() -> String { "light".into() }
/// }
/// ```
pub trait EnvironmentKey: 'static {
    /// The stored value type.
    type Value: Clone + Send + Sync + 'static;

    /// Value returned when no frame overrides this key.
    fn default_value() -> Self::Value;
}

/// Whether form controls in the subtree render as disabled.
///
/// Controls OR this with their own `disabled` flag.
#[derive(Debug, Clone, Copy)]
pub struct FormDisabled;

impl EnvironmentKey for FormDisabled {
    type Value = bool;

    fn default_value() -> bool {
        false
    }
}

// ---------------------------------------------------------------------------
// Environment
// ---------------------------------------------------------------------------

type SharedValue = Arc<dyn Any + Send + Sync>;

#[derive(Clone)]
struct Entry {
    key: TypeId,
    key_name: &'static str,
    value: SharedValue,
}

struct Frame {
    entries: Vec<Entry>,
    parent: Option<Arc<Frame>>,
}

/// Immutable render context passed down the component tree.
///
/// Cloning is cheap (one `Arc` bump).
#[derive(Clone, Default)]
pub struct Environment {
    head: Option<Arc<Frame>>,
}

impl Environment {
    /// An environment where every key has its default value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up `K`, falling back to its default.
    pub fn get<K: EnvironmentKey>(&self) -> K::Value {
        self.lookup::<K>().unwrap_or_else(K::default_value)
    }

    /// Whether some frame in the chain overrides `K`.
    pub fn is_set<K: EnvironmentKey>(&self) -> bool {
        self.lookup::<K>().is_some()
    }

    /// Derive a new environment with `K` set to `value`.
    pub fn with<K: EnvironmentKey>(&self, value: K::Value) -> Self {
        self.derive(Overrides::new().set::<K>(value))
    }

    /// Derive a new environment applying all `overrides`.
    ///
    /// An empty set of overrides returns a clone of `self`.
    pub fn derive(&self, overrides: Overrides) -> Self {
        if overrides.entries.is_empty() {
            return self.clone();
        }
        Self {
            head: Some(Arc::new(Frame {
                entries: overrides.entries,
                parent: self.head.clone(),
            })),
        }
    }

    fn lookup<K: EnvironmentKey>(&self) -> Option<K::Value> {
        let key = TypeId::of::<K>();
        let mut frame = self.head.as_deref();
        while let Some(current) = frame {
            // Later entries in a frame win over earlier ones.
            if let Some(entry) = current.entries.iter().rev().find(|e| e.key == key) {
                return entry.value.downcast_ref::<K::Value>().cloned();
            }
            frame = current.parent.as_deref();
        }
        None
    }

    /// Names of the overridden keys, innermost frame first. Duplicates across
    /// frames are listed once.
    pub fn overridden_keys(&self) -> Vec<&'static str> {
        let mut seen: Vec<TypeId> = Vec::new();
        let mut names = Vec::new();
        let mut frame = self.head.as_deref();
        while let Some(current) = frame {
            for entry in current.entries.iter().rev() {
                if !seen.contains(&entry.key) {
                    seen.push(entry.key);
                    names.push(entry.key_name);
                }
            }
            frame = current.parent.as_deref();
        }
        names
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("overridden", &self.overridden_keys())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Overrides
// ---------------------------------------------------------------------------

/// A batch of environment entries applied together by [`Environment::derive`].
///
/// Cloning shares the stored values.
#[derive(Clone, Default)]
pub struct Overrides {
    entries: Vec<Entry>,
}

impl Overrides {
    /// An empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `K` to `value` (builder). Setting the same key twice keeps the last value.
    pub fn set<K: EnvironmentKey>(mut self, value: K::Value) -> Self {
        self.entries.push(Entry {
            key: TypeId::of::<K>(),
            key_name: type_display_name::<K>(),
            value: Arc::new(value),
        });
        self
    }

    /// Number of entries in the batch.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the batch is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Overrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|e| e.key_name))
            .finish()
    }
}
