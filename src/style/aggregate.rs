//! Stylesheet aggregation: base CSS plus component fragments, written atomically.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::{debug, info};

use super::component_css::StyledInstance;

/// Comment line separating the base stylesheet from component styles.
pub const DEFAULT_BANNER: &str = "/* Component-specific styles */";

/// Errors from style aggregation. Any of them means nothing was written.
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    #[error("failed to read base stylesheet {}: {source}", .path.display())]
    ReadBase { path: PathBuf, source: io::Error },
    #[error("output path has no file name: {}", .path.display())]
    InvalidOutput { path: PathBuf },
    #[error("failed to create output directory {}: {source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("failed to write stylesheet {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

// ---------------------------------------------------------------------------
// StyleConfig
// ---------------------------------------------------------------------------

/// Configuration for a [`StyleAggregator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleConfig {
    /// Comment line written between the base CSS and the component styles.
    pub banner: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            banner: DEFAULT_BANNER.to_owned(),
        }
    }
}

impl StyleConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the banner comment (builder).
    pub fn with_banner(mut self, banner: impl Into<String>) -> Self {
        self.banner = banner.into();
        self
    }
}

// ---------------------------------------------------------------------------
// StyleReport
// ---------------------------------------------------------------------------

/// Outcome of a successful aggregation.
///
/// Displays as a one-line confirmation, e.g.
/// `Rendered styles: 3 components → site.css`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleReport {
    /// Number of component instances written.
    pub components: usize,
    /// Where the stylesheet was written.
    pub output: PathBuf,
}

impl fmt::Display for StyleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = self
            .output
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default();
        write!(f, "Rendered styles: {} components → {}", self.components, file)
    }
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Assemble the combined stylesheet text.
///
/// Layout: `base`, a blank line, the banner, then for each instance a
/// `/* name */` comment, its CSS, and a blank line.
pub fn combine(base: &str, instances: &[StyledInstance], config: &StyleConfig) -> String {
    let fragments: usize = instances
        .iter()
        .map(|i| i.name().len() + i.css().len() + 8)
        .sum();
    let mut css = String::with_capacity(base.len() + config.banner.len() + fragments + 3);
    css.push_str(base);
    css.push_str("\n\n");
    css.push_str(&config.banner);
    css.push('\n');
    for instance in instances {
        css.push_str("/* ");
        css.push_str(instance.name());
        css.push_str(" */\n");
        css.push_str(instance.css());
        css.push_str("\n\n");
    }
    css
}

/// Combines a base stylesheet with component CSS and writes the result.
#[derive(Debug, Clone, Default)]
pub struct StyleAggregator {
    config: StyleConfig,
}

impl StyleAggregator {
    /// Create an aggregator with the given config.
    pub fn new(config: StyleConfig) -> Self {
        Self { config }
    }

    /// The aggregator's configuration.
    pub fn config(&self) -> &StyleConfig {
        &self.config
    }

    /// Read `base_css`, append `instances` in order, and write to `output`.
    ///
    /// The output's directory is created if missing. The file is replaced
    /// atomically, so readers see either the old file or the complete new one.
    pub fn aggregate(
        &self,
        instances: &[StyledInstance],
        base_css: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<StyleReport, StyleError> {
        let base_css = base_css.as_ref();
        let output = output.as_ref();
        if output.file_name().is_none() {
            return Err(StyleError::InvalidOutput {
                path: output.to_path_buf(),
            });
        }

        debug!(
            base = %base_css.display(),
            components = instances.len(),
            "aggregating styles"
        );
        let base = fs::read_to_string(base_css).map_err(|source| StyleError::ReadBase {
            path: base_css.to_path_buf(),
            source,
        })?;
        let css = combine(&base, instances, &self.config);

        if let Some(dir) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|source| StyleError::CreateDir {
                path: dir.to_path_buf(),
                source,
            })?;
        }
        write_atomic(output, css.as_bytes()).map_err(|source| StyleError::Write {
            path: output.to_path_buf(),
            source,
        })?;

        let report = StyleReport {
            components: instances.len(),
            output: output.to_path_buf(),
        };
        info!("{report}");
        Ok(report)
    }
}

/// Aggregate with the default banner.
pub fn aggregate_styles(
    instances: &[StyledInstance],
    base_css: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<StyleReport, StyleError> {
    StyleAggregator::default().aggregate(instances, base_css, output)
}

/// Distinguishes temp files of concurrent writers within one process.
static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Write `contents` to a sibling temp file, then rename it over `path`.
fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"))?;
    let mut temp_name = std::ffi::OsString::from(".");
    temp_name.push(file_name);
    temp_name.push(format!(
        ".{}.{}.tmp",
        std::process::id(),
        TEMP_COUNTER.fetch_add(1, Ordering::Relaxed)
    ));
    let temp = path.with_file_name(temp_name);

    let result = fs::File::create(&temp)
        .and_then(|mut file| {
            file.write_all(contents)?;
            file.sync_all()
        })
        .and_then(|()| fs::rename(&temp, path));
    if result.is_err() {
        // Best effort: the temp file may not exist if create failed.
        let _ = fs::remove_file(&temp);
    }
    result
}

// ===========================================================================
// Tests
// ===========================================================================
