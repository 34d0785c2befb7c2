//! Shared test utilities for the docsnav test suite.
//!
//! Builders and assertions over [`NavNode`] sequences, plus temp content
//! trees for scanner tests.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = content_tree(&["index.mdx", "guides/setup.mdx"]);
//! let nodes = build(tmp.path(), &ScanOptions::default());
//!
//! assert_eq!(leaf_paths(&nodes), vec!["index"]);
//! assert_nav_shape(&nodes, &[("Guides", &["guides/setup"])]);
//! ```

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::diagnostics::Diagnostics;
use crate::scan::{ScanOptions, build_navigation};
use crate::types::{GroupConfig, NavNode};

// =========================================================================
// Node builders
// =========================================================================

/// Page leaves for each path, in order.
pub fn pages(paths: &[&str]) -> Vec<NavNode> {
    paths.iter().map(|p| NavNode::page(*p)).collect()
}

/// A named group node holding page leaves.
pub fn group(name: &str, paths: &[&str]) -> NavNode {
    NavNode::Group(GroupConfig::named(name, pages(paths)))
}

// =========================================================================
// Content trees
// =========================================================================

/// Create a temp directory containing the given files.
///
/// Parent directories are created as needed. Paths ending in `/` create an
/// empty directory.
pub fn content_tree(files: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    write_files(tmp.path(), files);
    tmp
}

pub fn write_files(root: &Path, files: &[&str]) {
    for file in files {
        let path = root.join(file);
        if file.ends_with('/') {
            fs::create_dir_all(&path).unwrap();
            continue;
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        let stem = path.file_stem().unwrap().to_string_lossy().into_owned();
        fs::write(&path, format!("---\ntitle: {stem}\n---\n\n# {stem}\n")).unwrap();
    }
}

/// Scan `root`, panicking on fatal errors.
pub fn build(root: &Path, options: &ScanOptions) -> Vec<NavNode> {
    let mut diagnostics = Diagnostics::default();
    build_navigation(root, options, &mut diagnostics).unwrap()
}

// =========================================================================
// Extractors and lookups (lookups panic with a clear message on miss)
// =========================================================================

/// Page paths at this level only, skipping groups.
pub fn leaf_paths(nodes: &[NavNode]) -> Vec<&str> {
    nodes.iter().filter_map(NavNode::as_page).collect()
}

/// Group names at this level, in order.
pub fn group_names(nodes: &[NavNode]) -> Vec<&str> {
    nodes
        .iter()
        .filter_map(NavNode::as_group)
        .filter_map(GroupConfig::name)
        .collect()
}

/// Find a group by exact name. Panics if not found.
pub fn find_group<'a>(nodes: &'a [NavNode], name: &str) -> &'a GroupConfig {
    nodes
        .iter()
        .filter_map(NavNode::as_group)
        .find(|g| g.name() == Some(name))
        .unwrap_or_else(|| {
            let names = group_names(nodes);
            panic!("group '{name}' not found. Available: {names:?}")
        })
}

/// Assert the groups at this level and the pages directly inside each.
///
/// ```rust
/// assert_nav_shape(&nodes, &[
///     ("Getting Started", &["index", "quickstart"]),
///     ("Guides", &["guides/setup"]),
/// ]);
/// ```
pub fn assert_nav_shape(nodes: &[NavNode], expected: &[(&str, &[&str])]) {
    let expected_names: Vec<&str> = expected.iter().map(|(n, _)| *n).collect();
    assert_eq!(group_names(nodes), expected_names, "group names mismatch");

    for (name, children) in expected {
        let actual = leaf_paths(&find_group(nodes, name).pages);
        assert_eq!(actual, children.to_vec(), "pages of '{name}' mismatch");
    }
}
