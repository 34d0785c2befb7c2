//! Centralized name and path formatting for discovered content.
//!
//! Directory names become group titles, file paths become page paths. Both
//! conversions live here so the scanner, the merger, and the registry agree
//! on the exact same strings.
//!
//! ## Group Titles
//!
//! Hyphens and underscores become spaces and every word is capitalized:
//! - `getting-started/` → "Getting Started"
//! - `api_v2/` → "Api V2"
//! - `SDKs/` → "SDKs" (existing capitals are kept)
//!
//! ## Page Paths
//!
//! Relative to the scan root, forward slashes, no extension:
//! - `guides/setup.mdx` → `guides/setup`

use std::path::{Component, Path};

/// Name of the group that collects root-level pages.
pub const DEFAULT_GROUP_NAME: &str = "Getting Started";

/// Format a directory name as a group title.
pub fn group_title(dir_name: &str) -> String {
    dir_name
        .split(['-', '_', ' '])
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert a path relative to the scan root into a page path.
///
/// Separators are normalized to `/` and the final extension is dropped.
pub fn page_path(relative: &Path) -> String {
    relative
        .with_extension("")
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Key under which a page path is compared. Page identity ignores case.
pub fn path_key(path: &str) -> String {
    path.to_lowercase()
}
