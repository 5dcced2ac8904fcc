//! Component model: leaf and composing components, environment overrides.

pub mod traits;

pub use traits::{Component, Compose, Leaf};
