//! Component-scoped stylesheets: CSS fragments and their aggregation.
//!
//! Components expose CSS through [`ComponentCss`]. The caller lists the
//! instances whose styles should ship, and [`aggregate_styles`] appends them
//! to a base stylesheet. Fragments are opaque text: nothing is parsed,
//! reordered, or deduplicated.

pub mod aggregate;
pub mod component_css;

pub use aggregate::{
    aggregate_styles, combine, StyleAggregator, StyleConfig, StyleError, StyleReport,
    DEFAULT_BANNER,
};
pub use component_css::{ComponentCss, StyledInstance};
