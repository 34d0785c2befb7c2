//! The public face of the crate: one loaded `docs.json` and its path registry.
//!
//! [`DocsManager`] owns the configuration exclusively and is the only place
//! the navigation tree is mutated. Every operation that adds, removes, or
//! renames a page updates the [`PathRegistry`] as it goes; the registry is
//! rebuilt from scratch only when a new configuration is loaded.
//!
//! ```no_run
//! # fn main() -> Result<(), docsnav::manager::DocsError> {
//! use docsnav::manager::{DocsManager, PopulateOptions};
//! use std::path::Path;
//!
//! let mut docs = DocsManager::new();
//! docs.load_file(Path::new("docs/docs.json"))?;
//! docs.populate_navigation_from_path(Path::new("docs"), &PopulateOptions::default())?;
//! docs.apply_url_prefix("/v2")?;
//! docs.save(Path::new("docs/docs.json"))?;
//! # Ok(())
//! # }
//! ```
//!
//! Not safe for concurrent mutation; callers serialize access per instance.

use crate::clean::clean_navigation;
use crate::diagnostics::{Diagnostic, Diagnostics, codes};
use crate::merge::{MergeOptions, merge_pages, overwrite, overwrite_str};
use crate::prefix::{ApplyPrefix, normalize_prefix};
use crate::reconcile::merge_navigation;
use crate::registry::PathRegistry;
use crate::scan::{self, ScanError, ScanOptions};
use crate::types::{DocsConfig, GroupConfig, NavNode, NavigationConfig};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Location recorded for diagnostics when a configuration has no file.
const INLINE_SOURCE: &str = "docs.json";

#[derive(Error, Debug)]
pub enum DocsError {
    #[error("No configuration loaded")]
    NotLoaded,
    #[error("Directory not found: {0}")]
    DirectoryNotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
}

/// Options for [`DocsManager::populate_navigation_from_path`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopulateOptions {
    pub scan: ScanOptions,
    pub merge: MergeOptions,
    /// Merge into the existing navigation. When false, the discovered pages
    /// replace the navigation's `pages` and `groups`.
    pub preserve_existing: bool,
}

impl Default for PopulateOptions {
    fn default() -> Self {
        Self {
            scan: ScanOptions::default(),
            merge: MergeOptions::default(),
            preserve_existing: true,
        }
    }
}

#[derive(Debug, Default)]
pub struct DocsManager {
    config: Option<DocsConfig>,
    registry: PathRegistry,
    diagnostics: Diagnostics,
    source: Option<PathBuf>,
}

impl DocsManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self) -> Option<&DocsConfig> {
        self.config.as_ref()
    }

    pub fn navigation(&self) -> Option<&NavigationConfig> {
        self.config.as_ref().map(|c| &c.navigation)
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.diagnostics.as_slice()
    }

    /// Hand the accumulated diagnostics to the caller, leaving none behind.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics).into_vec()
    }

    pub fn is_path_known(&self, path: &str) -> bool {
        self.registry.contains(path)
    }

    // =========================================================================
    // Loading and saving
    // =========================================================================

    /// Load a `docs.json` file. Malformed JSON fails; invalid groups are
    /// dropped and reported.
    pub fn load_file(&mut self, path: &Path) -> Result<(), DocsError> {
        let content = fs::read_to_string(path)?;
        let config: DocsConfig = serde_json::from_str(&content)?;
        self.source = Some(path.to_path_buf());
        self.load(config);
        Ok(())
    }

    pub fn load_str(&mut self, json: &str) -> Result<(), DocsError> {
        let config: DocsConfig = serde_json::from_str(json)?;
        self.source = None;
        self.load(config);
        Ok(())
    }

    /// Take ownership of an already-deserialized configuration.
    pub fn load(&mut self, mut config: DocsConfig) {
        let mut diagnostics = Diagnostics::default();
        clean_navigation(&mut config.navigation, &mut diagnostics);
        self.record(diagnostics);

        self.registry = PathRegistry::from_navigation(&config.navigation);
        info!(pages = self.registry.len(), name = %config.name, "configuration loaded");
        self.config = Some(config);
    }

    /// Load a fresh configuration with an empty navigation.
    pub fn load_default(&mut self, name: &str) {
        self.source = None;
        self.load(DocsConfig::new_default(name));
    }

    pub fn to_json(&self) -> Result<String, DocsError> {
        let config = self.config.as_ref().ok_or(DocsError::NotLoaded)?;
        Ok(serde_json::to_string_pretty(config)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), DocsError> {
        let json = self.to_json()?;
        fs::write(path, json + "\n")?;
        debug!(path = %path.display(), "configuration saved");
        Ok(())
    }

    /// Prefix diagnostic locations with the loaded file, if any.
    fn record(&mut self, diagnostics: Diagnostics) {
        let file = self
            .source
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| INLINE_SOURCE.to_string());
        for d in diagnostics.into_vec() {
            let location = format!("{file}: {}", d.location);
            if d.is_warning {
                self.diagnostics.warning(location, d.code, d.message);
            } else {
                self.diagnostics.error(location, d.code, d.message);
            }
        }
    }

    // =========================================================================
    // Merging
    // =========================================================================

    /// Merge another configuration into the loaded one.
    ///
    /// With `combine_base_fields`, the other configuration's non-empty
    /// top-level fields (name, theme, colors, …) overwrite ours first.
    pub fn merge(
        &mut self,
        other: DocsConfig,
        combine_base_fields: bool,
        options: MergeOptions,
    ) -> Result<(), DocsError> {
        let DocsConfig {
            schema,
            theme,
            name,
            description,
            colors,
            favicon,
            navigation,
            extra,
        } = other;

        let config = self.config.as_mut().ok_or(DocsError::NotLoaded)?;
        if combine_base_fields {
            overwrite(&mut config.schema, schema);
            overwrite_str(&mut config.theme, theme);
            overwrite_str(&mut config.name, name);
            overwrite(&mut config.description, description);
            overwrite(&mut config.favicon, favicon);
            overwrite(&mut config.colors.primary, colors.primary);
            overwrite(&mut config.colors.light, colors.light);
            overwrite(&mut config.colors.dark, colors.dark);
            for (key, value) in extra {
                config.extra.entry(key).or_insert(value);
            }
        }
        self.merge_navigation(navigation, options)
    }

    /// Merge a navigation tree into the loaded one.
    pub fn merge_navigation(
        &mut self,
        mut source: NavigationConfig,
        options: MergeOptions,
    ) -> Result<(), DocsError> {
        let config = self.config.as_mut().ok_or(DocsError::NotLoaded)?;
        let mut diagnostics = Diagnostics::default();
        clean_navigation(&mut source, &mut diagnostics);

        let before = self.registry.len();
        merge_navigation(&mut config.navigation, source, options, &mut self.registry);
        info!(added = self.registry.len().saturating_sub(before), "navigation merged");

        self.diagnostics.extend(diagnostics);
        Ok(())
    }

    // =========================================================================
    // Directory discovery
    // =========================================================================

    /// Discover pages under `dir` and fold them into the navigation.
    ///
    /// With `preserve_existing` the discovered tree goes through the same
    /// merge as [`merge_navigation`](Self::merge_navigation). Otherwise it
    /// replaces the navigation's `pages` and `groups` as-is.
    pub fn populate_navigation_from_path(
        &mut self,
        dir: &Path,
        options: &PopulateOptions,
    ) -> Result<(), DocsError> {
        let config = self.config.as_mut().ok_or(DocsError::NotLoaded)?;
        if !dir.is_dir() {
            return Err(DocsError::DirectoryNotFound(dir.to_path_buf()));
        }

        let mut diagnostics = Diagnostics::default();
        let discovered = scan::build_navigation(dir, &options.scan, &mut diagnostics)?;
        self.diagnostics.extend(diagnostics);

        let navigation = &mut config.navigation;
        if options.preserve_existing {
            merge_pages(&mut navigation.pages, discovered, options.merge, &mut self.registry);
        } else {
            self.registry.unregister_all(&navigation.pages);
            self.registry.unregister_all(&navigation.groups);
            navigation.groups.clear();
            self.registry.register_all(&discovered);
            navigation.pages = discovered;
        }
        info!(pages = self.registry.len(), "navigation populated from {}", dir.display());
        Ok(())
    }

    // =========================================================================
    // Single-page edits and rewrites
    // =========================================================================

    /// Add one page, at the top level or inside the named top-level group
    /// (created at the end if missing).
    ///
    /// Returns `false` when the path is already present and duplicates are
    /// not allowed.
    pub fn add_page(
        &mut self,
        path: &str,
        group: Option<&str>,
        allow_duplicate: bool,
    ) -> Result<bool, DocsError> {
        let config = self.config.as_mut().ok_or(DocsError::NotLoaded)?;
        if !allow_duplicate && self.registry.contains(path) {
            debug!(%path, "page already present");
            return Ok(false);
        }

        let pages = &mut config.navigation.pages;
        let leaf = NavNode::page(path);
        match group {
            None => pages.push(leaf),
            Some(name) => {
                let existing = pages.iter_mut().find_map(|node| match node {
                    NavNode::Group(g) if g.name() == Some(name) => Some(g),
                    _ => None,
                });
                match existing {
                    Some(g) => g.pages.push(leaf),
                    None => pages.push(NavNode::Group(GroupConfig::named(name, vec![leaf]))),
                }
            }
        }
        self.registry.insert(path);
        Ok(true)
    }

    /// Prefix every page and relative link with `prefix`.
    pub fn apply_url_prefix(&mut self, prefix: &str) -> Result<(), DocsError> {
        let config = self.config.as_mut().ok_or(DocsError::NotLoaded)?;
        let Some(prefix) = normalize_prefix(prefix) else {
            return Ok(());
        };
        config.navigation.apply_prefix(prefix, &mut self.registry);
        info!(prefix, "url prefix applied");
        Ok(())
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Light field checks on the loaded configuration. Problems are appended
    /// to the diagnostics; returns whether any of them is an error.
    pub fn validate(&mut self) -> Result<bool, DocsError> {
        let config = self.config.as_ref().ok_or(DocsError::NotLoaded)?;
        let mut diagnostics = Diagnostics::default();

        if config.name.trim().is_empty() {
            diagnostics.error("name", codes::CONFIG_MISSING_NAME, "configuration has no name");
        }
        let colors = [
            ("colors.primary", &config.colors.primary),
            ("colors.light", &config.colors.light),
            ("colors.dark", &config.colors.dark),
        ];
        for (field, value) in colors {
            if let Some(value) = value
                && !is_hex_color(value)
            {
                diagnostics.warning(
                    field,
                    codes::CONFIG_INVALID_COLOR,
                    format!("'{value}' is not a #RGB or #RRGGBB color"),
                );
            }
        }

        let has_errors = diagnostics.has_errors();
        self.record(diagnostics);
        Ok(has_errors)
    }
}

fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    fn loaded(json: &str) -> DocsManager {
        let mut docs = DocsManager::new();
        docs.load_str(json).unwrap();
        docs
    }

    // =========================================================================
    // Load
    // =========================================================================

    #[test]
    fn load_seeds_registry() {
        let docs = loaded(
            r#"{ "name": "Docs", "navigation": { "pages": ["index", { "group": "G", "pages": ["g/a"] }] } }"#,
        );
        assert!(docs.is_path_known("index"));
        assert!(docs.is_path_known("G/A"));
        assert!(!docs.is_path_known("missing"));
    }

    #[test]
    fn load_malformed_json_is_error() {
        let mut docs = DocsManager::new();
        let result = docs.load_str("{ not json");
        assert!(matches!(result, Err(DocsError::Json(_))));
        assert!(docs.config().is_none());
        assert!(docs.diagnostics().is_empty());
    }

    #[test]
    fn load_drops_null_groups_and_their_pages() {
        let docs = loaded(
            r#"{ "name": "Docs", "navigation": { "pages": [{ "group": null, "pages": ["ghost"] }, "real"] } }"#,
        );
        assert!(!docs.is_path_known("ghost"));
        assert!(docs.is_path_known("real"));

        let diag = &docs.diagnostics()[0];
        assert_eq!(diag.code, codes::GROUP_MISSING_NAME);
        assert_eq!(diag.location, "docs.json: navigation.pages[0]");
    }

    #[test]
    fn load_file_records_path_in_diagnostics() {
        let tmp = content_tree(&[]);
        let path = tmp.path().join("docs.json");
        fs::write(&path, r#"{ "name": "Docs", "navigation": { "groups": [{ "group": "", "pages": [] }] } }"#).unwrap();

        let mut docs = DocsManager::new();
        docs.load_file(&path).unwrap();
        let diag = &docs.diagnostics()[0];
        assert_eq!(diag.code, codes::GROUP_EMPTY_NAME);
        assert!(diag.location.starts_with(&path.display().to_string()));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let tmp = content_tree(&[]);
        let mut docs = DocsManager::new();
        let result = docs.load_file(&tmp.path().join("docs.json"));
        assert!(matches!(result, Err(DocsError::Io(_))));
    }

    #[test]
    fn save_round_trips() {
        let tmp = content_tree(&[]);
        let path = tmp.path().join("docs.json");
        let mut docs = DocsManager::new();
        docs.load_default("Acme");
        docs.add_page("index", None, false).unwrap();
        docs.save(&path).unwrap();

        let mut reloaded = DocsManager::new();
        reloaded.load_file(&path).unwrap();
        assert_eq!(reloaded.config(), docs.config());
        assert!(reloaded.is_path_known("index"));
    }

    // =========================================================================
    // Preconditions
    // =========================================================================

    #[test]
    fn operations_require_loaded_config() {
        let mut docs = DocsManager::new();
        assert!(matches!(
            docs.merge_navigation(NavigationConfig::default(), MergeOptions::default()),
            Err(DocsError::NotLoaded)
        ));
        assert!(matches!(docs.apply_url_prefix("/v2"), Err(DocsError::NotLoaded)));
        assert!(matches!(docs.add_page("a", None, false), Err(DocsError::NotLoaded)));
        assert!(matches!(docs.to_json(), Err(DocsError::NotLoaded)));
        assert!(matches!(
            docs.populate_navigation_from_path(Path::new("."), &PopulateOptions::default()),
            Err(DocsError::NotLoaded)
        ));
    }

    #[test]
    fn populate_missing_directory_is_error() {
        let tmp = content_tree(&[]);
        let mut docs = DocsManager::new();
        docs.load_default("Docs");
        let result = docs.populate_navigation_from_path(&tmp.path().join("nope"), &PopulateOptions::default());
        assert!(matches!(result, Err(DocsError::DirectoryNotFound(_))));
        assert!(docs.diagnostics().is_empty());
    }

    // =========================================================================
    // Merge
    // =========================================================================

    #[test]
    fn merge_base_fields_only_when_asked() {
        let other: DocsConfig = serde_json::from_str(
            r##"{ "name": "Other", "theme": "maple", "colors": { "primary": "#112233" }, "logo": "/logo.svg" }"##,
        )
        .unwrap();

        let mut docs = loaded(r#"{ "name": "Mine", "theme": "mint" }"#);
        docs.merge(other.clone(), false, MergeOptions::default()).unwrap();
        assert_eq!(docs.config().unwrap().name, "Mine");

        docs.merge(other, true, MergeOptions::default()).unwrap();
        let config = docs.config().unwrap();
        assert_eq!(config.name, "Other");
        assert_eq!(config.theme, "maple");
        assert_eq!(config.colors.primary.as_deref(), Some("#112233"));
        assert!(config.extra.contains_key("logo"));
    }

    #[test]
    fn merge_base_fields_keep_ours_when_theirs_blank() {
        let mut docs = loaded(r#"{ "name": "Mine", "theme": "mint", "description": "ours" }"#);
        let other: DocsConfig = serde_json::from_str(r#"{ "name": "", "description": "" }"#).unwrap();
        docs.merge(other, true, MergeOptions::default()).unwrap();

        let config = docs.config().unwrap();
        assert_eq!(config.name, "Mine");
        assert_eq!(config.theme, "mint");
        assert_eq!(config.description.as_deref(), Some("ours"));
    }

    #[test]
    fn merge_navigation_cleans_source() {
        let mut docs = loaded(r#"{ "name": "Docs", "navigation": { "pages": ["a"] } }"#);
        let source: NavigationConfig =
            serde_json::from_str(r#"{ "pages": [{ "group": null, "pages": ["ghost"] }, "b"] }"#).unwrap();
        docs.merge_navigation(source, MergeOptions::default()).unwrap();

        assert_eq!(leaf_paths(&docs.navigation().unwrap().pages), vec!["a", "b"]);
        assert!(!docs.is_path_known("ghost"));
        assert_eq!(docs.diagnostics()[0].code, codes::GROUP_MISSING_NAME);
    }

    // =========================================================================
    // Populate
    // =========================================================================

    #[test]
    fn populate_merges_into_existing() {
        let tmp = content_tree(&["index.mdx", "guides/new.mdx"]);
        let mut docs = loaded(
            r#"{ "name": "Docs", "navigation": { "pages": ["index", { "group": "Guides", "pages": ["guides/old"] }] } }"#,
        );
        docs.populate_navigation_from_path(tmp.path(), &PopulateOptions::default()).unwrap();

        let pages = &docs.navigation().unwrap().pages;
        assert_eq!(leaf_paths(pages), vec!["index"]);
        assert_nav_shape(pages, &[("Guides", &["guides/old", "guides/new"])]);
        assert!(docs.is_path_known("guides/new"));
    }

    #[test]
    fn populate_replace_discards_existing() {
        let tmp = content_tree(&["index.mdx"]);
        let mut docs = loaded(
            r#"{ "name": "Docs", "navigation": {
                "pages": ["old"],
                "groups": [{ "group": "Legacy", "pages": ["legacy/a"] }],
                "tabs": [{ "tab": "API", "pages": ["api/a"] }]
            } }"#,
        );
        let options = PopulateOptions {
            preserve_existing: false,
            ..PopulateOptions::default()
        };
        docs.populate_navigation_from_path(tmp.path(), &options).unwrap();

        let nav = docs.navigation().unwrap();
        assert_eq!(leaf_paths(&nav.pages), vec!["index"]);
        assert!(nav.groups.is_empty());
        assert_eq!(nav.tabs.len(), 1);
        assert!(!docs.is_path_known("old"));
        assert!(!docs.is_path_known("legacy/a"));
        assert!(docs.is_path_known("api/a"));
        assert!(docs.is_path_known("index"));
    }

    #[test]
    fn populate_allow_duplicates() {
        let tmp = content_tree(&["index.mdx"]);
        let mut docs = loaded(r#"{ "name": "Docs", "navigation": { "pages": ["index"] } }"#);
        let options = PopulateOptions {
            merge: MergeOptions {
                allow_duplicates: true,
                ..MergeOptions::default()
            },
            ..PopulateOptions::default()
        };
        docs.populate_navigation_from_path(tmp.path(), &options).unwrap();
        assert_eq!(leaf_paths(&docs.navigation().unwrap().pages), vec!["index", "index"]);
    }

    #[test]
    fn populate_reports_scan_diagnostics() {
        let tmp = content_tree(&["index.mdx", "old.md"]);
        let mut docs = DocsManager::new();
        docs.load_default("Docs");
        docs.populate_navigation_from_path(tmp.path(), &PopulateOptions::default()).unwrap();

        let found: Vec<&str> = docs.diagnostics().iter().map(|d| d.code).collect();
        assert_eq!(found, vec![codes::LEGACY_EXTENSION]);
    }

    fn populate_with_unnamed_override_group(preserve_existing: bool) -> DocsManager {
        let tmp = content_tree(&["guides/a.mdx", "guides/ghost.mdx"]);
        fs::write(
            tmp.path().join("guides").join("navigation.json"),
            r#"{ "group": "Guides", "pages": ["guides/a", { "pages": ["guides/ghost"] }] }"#,
        )
        .unwrap();
        let mut docs = loaded(r#"{ "name": "Docs", "navigation": { "pages": ["index"] } }"#);
        let options = PopulateOptions {
            preserve_existing,
            ..PopulateOptions::default()
        };
        docs.populate_navigation_from_path(tmp.path(), &options).unwrap();
        docs
    }

    #[test]
    fn populate_drops_unnamed_group_from_override() {
        for preserve_existing in [true, false] {
            let docs = populate_with_unnamed_override_group(preserve_existing);

            assert_nav_shape(&docs.navigation().unwrap().pages, &[("Guides", &["guides/a"])]);
            assert!(docs.is_path_known("guides/a"));
            assert!(!docs.is_path_known("guides/ghost"), "preserve_existing={preserve_existing}");
            assert!(!docs.to_json().unwrap().contains("guides/ghost"));

            let missing: Vec<_> = docs
                .diagnostics()
                .iter()
                .filter(|d| d.code == codes::GROUP_MISSING_NAME)
                .collect();
            assert_eq!(missing.len(), 1, "preserve_existing={preserve_existing}");
            assert!(missing[0].location.ends_with("navigation.json: pages[1]"));
        }
    }

    // =========================================================================
    // Tabs nested in pages
    // =========================================================================

    #[test]
    fn load_keeps_tab_inside_pages() {
        let docs = loaded(
            r#"{ "name": "Docs", "navigation": { "pages": ["index", { "tab": "API", "pages": ["api/a"] }] } }"#,
        );
        assert!(docs.diagnostics().is_empty());
        assert!(docs.is_path_known("api/a"));

        let pages = &docs.navigation().unwrap().pages;
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1].as_tab().map(|t| t.tab.as_str()), Some("API"));

        let json: serde_json::Value = serde_json::from_str(&docs.to_json().unwrap()).unwrap();
        assert_eq!(json["navigation"]["pages"][1]["tab"], "API");
        assert_eq!(json["navigation"]["pages"][1]["pages"][0], "api/a");
        assert!(json["navigation"]["pages"][1].get("group").is_none());
    }

    #[test]
    fn url_prefix_reaches_tab_inside_pages() {
        let mut docs = loaded(
            r#"{ "name": "Docs", "navigation": { "pages": [{ "tab": "API", "pages": ["api/a"] }] } }"#,
        );
        docs.apply_url_prefix("/v2/").unwrap();

        let tab = docs.navigation().unwrap().pages[0].as_tab().unwrap();
        assert_eq!(leaf_paths(&tab.pages), vec!["/v2/api/a"]);
        assert!(docs.is_path_known("/v2/api/a"));
        assert!(!docs.is_path_known("api/a"));
    }

    // =========================================================================
    // add_page / prefix / validate
    // =========================================================================

    #[test]
    fn add_page_skips_known_paths() {
        let mut docs = loaded(r#"{ "name": "Docs", "navigation": { "pages": ["Intro"] } }"#);
        assert!(!docs.add_page("intro", None, false).unwrap());
        assert!(docs.add_page("intro", None, true).unwrap());
        assert_eq!(leaf_paths(&docs.navigation().unwrap().pages), vec!["Intro", "intro"]);
    }

    #[test]
    fn add_page_into_group() {
        let mut docs = loaded(r#"{ "name": "Docs", "navigation": { "pages": [{ "group": "Guides", "pages": ["a"] }] } }"#);
        docs.add_page("b", Some("Guides"), false).unwrap();
        docs.add_page("c", Some("Reference"), false).unwrap();

        assert_nav_shape(
            &docs.navigation().unwrap().pages,
            &[("Guides", &["a", "b"]), ("Reference", &["c"])],
        );
        assert!(docs.is_path_known("c"));
    }

    #[test]
    fn url_prefix_updates_registry() {
        let mut docs = loaded(r#"{ "name": "Docs", "navigation": { "pages": ["index", "guides/a"] } }"#);
        docs.apply_url_prefix("/v2/").unwrap();

        for original in ["index", "guides/a"] {
            assert!(docs.is_path_known(&format!("/v2/{original}")));
            assert!(!docs.is_path_known(original));
        }
    }

    #[test]
    fn empty_prefix_is_noop() {
        let mut docs = loaded(r#"{ "name": "Docs", "navigation": { "pages": ["index"] } }"#);
        docs.apply_url_prefix("/").unwrap();
        assert_eq!(leaf_paths(&docs.navigation().unwrap().pages), vec!["index"]);
    }

    #[test]
    fn validate_flags_name_and_colors() {
        let mut docs = loaded(r##"{ "name": " ", "colors": { "primary": "#0D9373", "light": "teal" } }"##);
        assert!(docs.validate().unwrap());

        let found: Vec<&str> = docs.diagnostics().iter().map(|d| d.code).collect();
        assert_eq!(found, vec![codes::CONFIG_MISSING_NAME, codes::CONFIG_INVALID_COLOR]);
    }

    #[test]
    fn validate_default_config_is_clean() {
        let mut docs = DocsManager::new();
        docs.load_default("Docs");
        assert!(!docs.validate().unwrap());
        assert!(docs.diagnostics().is_empty());
    }

    #[test]
    fn hex_colors() {
        assert!(is_hex_color("#fff"));
        assert!(is_hex_color("#0D9373"));
        assert!(!is_hex_color("0D9373"));
        assert!(!is_hex_color("#12345"));
        assert!(!is_hex_color("#ggg"));
    }
}
