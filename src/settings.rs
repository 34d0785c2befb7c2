//! Tool settings module.
//!
//! Handles loading, validating, and merging `docsnav.toml`. The file is
//! optional and sparse: stock defaults are overridden by whatever keys the
//! user sets.
//!
//! ## Settings File Location
//!
//! Place `docsnav.toml` in the content root next to `docs.json`:
//!
//! ```text
//! docs/
//! ├── docs.json        # Navigation configuration being managed
//! ├── docsnav.toml     # Tool settings (optional)
//! ├── index.mdx
//! └── guides/
//! ```
//!
//! ## Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [scan]
//! extensions = [".mdx"]            # Content file extensions
//! exclude_directories = []         # Extra directory names to skip
//! include_api_reference = false    # Also walk api-reference/
//! group_root_files = false         # Root pages go into "Getting Started"
//!
//! [merge]
//! combine_empty_groups = false
//! add_root_pages_to_getting_started = false
//! allow_duplicates = false
//!
//! [populate]
//! preserve_existing = true         # Merge into docs.json instead of replacing
//!
//! [output]
//! url_prefix = ""                  # Prefix applied to every page after a scan
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::manager::PopulateOptions;
use crate::merge::MergeOptions;
use crate::scan::ScanOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// File name looked up in the content root.
pub const SETTINGS_FILE: &str = "docsnav.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Tool settings loaded from `docsnav.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Directory scanning rules.
    pub scan: ScanOptions,
    /// Merge behavior shared by `scan` and `merge`.
    pub merge: MergeOptions,
    /// How scanned pages combine with an existing `docs.json`.
    pub populate: PopulateSettings,
    /// Post-processing of the written configuration.
    pub output: OutputSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PopulateSettings {
    /// Merge discovered pages into the existing navigation. When false the
    /// discovered pages replace it.
    pub preserve_existing: bool,
}

impl Default for PopulateSettings {
    fn default() -> Self {
        Self {
            preserve_existing: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSettings {
    /// Prefix applied to every page and link after a scan. Empty = none.
    pub url_prefix: String,
}

impl Settings {
    /// Validate values that serde alone cannot check.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scan.extensions.is_empty() {
            return Err(ConfigError::Validation(
                "scan.extensions must not be empty".into(),
            ));
        }
        if let Some(bad) = self.scan.extensions.iter().find(|e| !e.starts_with('.') || e.len() < 2) {
            return Err(ConfigError::Validation(format!(
                "scan.extensions entries must look like \".mdx\", got {bad:?}"
            )));
        }
        Ok(())
    }

    /// Options for [`DocsManager::populate_navigation_from_path`](crate::manager::DocsManager::populate_navigation_from_path).
    pub fn populate_options(&self) -> PopulateOptions {
        PopulateOptions {
            scan: self.scan.clone(),
            merge: self.merge,
            preserve_existing: self.populate.preserve_existing,
        }
    }
}

// =============================================================================
// Settings loading, merging, and validation
// =============================================================================

/// Returns the stock default settings as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged on top of.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(Settings::default()).expect("default settings must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `docsnav.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_settings(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let path = dir.join(SETTINGS_FILE);
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_settings(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<Settings, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let settings: Settings = merged.try_into()?;
    settings.validate()?;
    Ok(settings)
}

/// Load settings for a content directory, falling back to stock defaults.
pub fn load_settings(dir: &Path) -> Result<Settings, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_settings(dir)?;
    resolve_settings(base, overlay)
}

/// Returns a fully-commented stock `docsnav.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_settings_toml() -> &'static str {
    r#"# docsnav settings
# ================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys cause an error.

# ---------------------------------------------------------------------------
# Directory scanning
# ---------------------------------------------------------------------------
[scan]
# Content file extensions, with the leading dot. `.md` files found while
# only `.mdx` is accepted are reported and skipped.
extensions = [".mdx"]

# Extra directory names to skip (case-insensitive). Hidden directories and
# node_modules, bin, obj, dist, build, images, snippets, assets, static are
# always skipped.
exclude_directories = []

# Also walk the api-reference/ directory.
include_api_reference = false

# Collect pages in the content root into a leading "Getting Started" group.
group_root_files = false

# ---------------------------------------------------------------------------
# Merging
# ---------------------------------------------------------------------------
[merge]
# Merge all groups with an empty name into one. By default each is its own
# anonymous section.
combine_empty_groups = false

# Put new root-level pages into an existing "Getting Started" group.
add_root_pages_to_getting_started = false

# Keep pages whose path is already in the navigation.
allow_duplicates = false

# ---------------------------------------------------------------------------
# Populating docs.json from the content directory
# ---------------------------------------------------------------------------
[populate]
# true: merge discovered pages into the existing navigation.
# false: replace the navigation's pages and groups with what was discovered.
preserve_existing = true

# ---------------------------------------------------------------------------
# Output
# ---------------------------------------------------------------------------
[output]
# Prefix applied to every page path and relative link, e.g. "/v2".
url_prefix = ""
"#
}
