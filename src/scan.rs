//! Directory scanning into a navigation tree.
//!
//! Walks a content directory and produces the same `pages` shape a person
//! would write by hand, so the result can be fed through the merger like any
//! other navigation.
//!
//! ## Directory Structure
//!
//! ```text
//! docs/                            # Scan root
//! ├── index.mdx                    # → "index" (always first)
//! ├── quickstart.mdx               # → "quickstart"
//! ├── legacy.md                    # warned about and skipped
//! ├── getting-started/             # → group "Getting Started"
//! │   ├── index.mdx                # → "getting-started/index"
//! │   └── install.mdx
//! ├── guides/
//! │   ├── navigation.json          # Override: this group, verbatim, nothing else
//! │   └── draft.mdx                # ignored because of the override
//! ├── api-reference/               # skipped unless explicitly included
//! ├── images/                      # built-in exclusion
//! └── .vitepress/                  # hidden, skipped
//! ```
//!
//! ## Per-Directory Rules
//!
//! 1. **Override.** A `navigation.json` holding a single group replaces the
//!    whole directory and everything below it. Nothing under it is walked.
//!    A malformed override is reported and automatic discovery takes over.
//! 2. **Collect.** Files with an accepted extension (default `.mdx`) and
//!    subdirectories that are not hidden or excluded.
//! 3. **Sort.** `index` first, then files before directories, then
//!    case-insensitive alphabetical.
//! 4. **Recurse.** Each subdirectory becomes a group titled from its name.
//!    Directories with no content contribute nothing.
//! 5. **Pages.** Paths are relative to the scan root, `/`-separated, with the
//!    extension removed. With `group_root_files`, root-level pages are
//!    collected into a leading "Getting Started" group.

use crate::clean::clean_nodes;
use crate::diagnostics::{Diagnostics, codes};
use crate::naming::{self, DEFAULT_GROUP_NAME};
use crate::types::{GroupConfig, NavNode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Directory not found: {0}")]
    DirectoryNotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Per-directory file that replaces automatic discovery.
pub const OVERRIDE_FILE: &str = "navigation.json";
/// Stem of the page that always sorts first in its directory.
pub const INDEX_STEM: &str = "index";
/// API reference directory, skipped unless explicitly included.
pub const API_REFERENCE_DIR: &str = "api-reference";
/// Content extension that is close enough to be a mistake.
pub const LEGACY_EXTENSION: &str = ".md";

const DEFAULT_EXTENSION: &str = ".mdx";

/// Directories never treated as content (compared case-insensitively).
const EXCLUDED_DIRECTORIES: &[&str] = &[
    "node_modules",
    "bin",
    "obj",
    "dist",
    "build",
    "images",
    "snippets",
    "assets",
    "static",
];

/// Options for [`build_navigation`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanOptions {
    /// Accepted content extensions, with the leading dot.
    pub extensions: Vec<String>,
    /// Extra directory names to skip, on top of the built-in list.
    pub exclude_directories: Vec<String>,
    /// Walk the `api-reference` directory too.
    pub include_api_reference: bool,
    /// Collect root-level pages into a leading "Getting Started" group.
    pub group_root_files: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extensions: vec![DEFAULT_EXTENSION.to_string()],
            exclude_directories: Vec::new(),
            include_api_reference: false,
            group_root_files: false,
        }
    }
}

/// Build a navigation subtree from the content under `root`.
///
/// Recoverable problems (malformed overrides, `.md` files) are appended to
/// `diagnostics`; only a missing root or an unreadable directory fails.
pub fn build_navigation(
    root: &Path,
    options: &ScanOptions,
    diagnostics: &mut Diagnostics,
) -> Result<Vec<NavNode>, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::DirectoryNotFound(root.to_path_buf()));
    }
    info!(root = %root.display(), "scanning content directory");
    let scanner = Scanner::new(root, options);
    let nodes = match scanner.scan_directory(root, diagnostics)? {
        DirectoryNav::Override(group) => vec![NavNode::Group(group)],
        DirectoryNav::Discovered(nodes) => nodes,
    };
    Ok(nodes)
}

/// What a single directory contributes.
enum DirectoryNav {
    /// Taken verbatim from `navigation.json`; the walk stopped here.
    Override(GroupConfig),
    Discovered(Vec<NavNode>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    File,
    Directory,
}

#[derive(Debug)]
struct Entry {
    path: PathBuf,
    /// File stem for pages, full name for directories.
    name: String,
    kind: EntryKind,
}

impl Entry {
    fn is_index(&self) -> bool {
        self.kind == EntryKind::File && self.name.eq_ignore_ascii_case(INDEX_STEM)
    }
}

struct Scanner<'a> {
    root: &'a Path,
    options: &'a ScanOptions,
    /// Accepted extensions, lowercased, without the dot.
    extensions: Vec<String>,
}

impl<'a> Scanner<'a> {
    fn new(root: &'a Path, options: &'a ScanOptions) -> Self {
        let extensions = options
            .extensions
            .iter()
            .map(|e| e.trim_start_matches('.').to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self {
            root,
            options,
            extensions,
        }
    }

    fn scan_directory(
        &self,
        dir: &Path,
        diagnostics: &mut Diagnostics,
    ) -> Result<DirectoryNav, ScanError> {
        if let Some(group) = self.read_override(dir, diagnostics) {
            info!(dir = %dir.display(), "using navigation override");
            return Ok(DirectoryNav::Override(group));
        }

        let is_root = dir == self.root;
        let mut nodes = Vec::new();
        let mut root_group: Option<GroupConfig> = None;

        for entry in self.collect_entries(dir, diagnostics)? {
            match entry.kind {
                EntryKind::File => {
                    let page = NavNode::Page(self.page_path(&entry.path));
                    if is_root && self.options.group_root_files {
                        root_group
                            .get_or_insert_with(|| GroupConfig::named(DEFAULT_GROUP_NAME, vec![]))
                            .pages
                            .push(page);
                    } else {
                        nodes.push(page);
                    }
                }
                EntryKind::Directory => match self.scan_directory(&entry.path, diagnostics)? {
                    DirectoryNav::Override(group) => nodes.push(NavNode::Group(group)),
                    DirectoryNav::Discovered(children) if children.is_empty() => {
                        debug!(dir = %entry.path.display(), "no content, skipping");
                    }
                    DirectoryNav::Discovered(children) => {
                        let name = self.group_name(&entry.name, root_group.is_some());
                        nodes.push(NavNode::Group(GroupConfig::named(name, children)));
                    }
                },
            }
        }

        if let Some(group) = root_group {
            nodes.insert(0, NavNode::Group(group));
        }
        Ok(DirectoryNav::Discovered(nodes))
    }

    /// Parse `dir/navigation.json` if present. Problems are reported and
    /// yield `None` so the caller falls back to discovery.
    fn read_override(&self, dir: &Path, diagnostics: &mut Diagnostics) -> Option<GroupConfig> {
        let path = dir.join(OVERRIDE_FILE);
        if !path.is_file() {
            return None;
        }
        let location = path.display().to_string();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                diagnostics.warning(
                    location,
                    codes::OVERRIDE_PARSE,
                    format!("could not read override: {err}"),
                );
                return None;
            }
        };
        match serde_json::from_str::<GroupConfig>(&content) {
            Ok(mut group) if group.group.is_some() => {
                clean_nodes(&mut group.pages, &format!("{location}: pages"), diagnostics);
                Some(group)
            }
            Ok(_) => {
                diagnostics.warning(
                    location,
                    codes::OVERRIDE_INVALID,
                    "override must name its group; using automatic discovery",
                );
                None
            }
            Err(err) => {
                diagnostics.warning(
                    location,
                    codes::OVERRIDE_PARSE,
                    format!("invalid override, using automatic discovery: {err}"),
                );
                None
            }
        }
    }

    fn collect_entries(
        &self,
        dir: &Path,
        diagnostics: &mut Diagnostics,
    ) -> Result<Vec<Entry>, ScanError> {
        let mut entries = Vec::new();
        for item in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let item = item?;
            let file_name = item.file_name().to_string_lossy().into_owned();
            let is_dir = item.file_type().is_dir();
            let path = item.into_path();

            if is_dir {
                if !self.is_excluded_dir(&file_name) {
                    entries.push(Entry {
                        path,
                        name: file_name,
                        kind: EntryKind::Directory,
                    });
                }
                continue;
            }

            let extension = path
                .extension()
                .map(|e| e.to_string_lossy().to_lowercase())
                .unwrap_or_default();
            if self.extensions.contains(&extension) {
                let stem = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default();
                entries.push(Entry {
                    path,
                    name: stem,
                    kind: EntryKind::File,
                });
            } else if format!(".{extension}") == LEGACY_EXTENSION {
                diagnostics.warning(
                    path.display().to_string(),
                    codes::LEGACY_EXTENSION,
                    format!(
                        "'{file_name}' uses the {LEGACY_EXTENSION} extension and is not included; rename it to {DEFAULT_EXTENSION}"
                    ),
                );
            }
        }

        entries.sort_by_cached_key(|e| {
            (
                !e.is_index(),
                e.kind == EntryKind::Directory,
                e.name.to_lowercase(),
            )
        });
        Ok(entries)
    }

    fn is_excluded_dir(&self, name: &str) -> bool {
        name.starts_with('.')
            || EXCLUDED_DIRECTORIES
                .iter()
                .any(|d| d.eq_ignore_ascii_case(name))
            || self
                .options
                .exclude_directories
                .iter()
                .any(|d| d.eq_ignore_ascii_case(name))
            || (!self.options.include_api_reference
                && name.eq_ignore_ascii_case(API_REFERENCE_DIR))
    }

    /// Group title for a directory, kept distinct from the root-page group
    /// when that group exists at the same level.
    fn group_name(&self, dir_name: &str, beside_root_group: bool) -> String {
        let title = naming::group_title(dir_name);
        if beside_root_group && title == DEFAULT_GROUP_NAME {
            format!("{title} ({dir_name})")
        } else {
            title
        }
    }

    fn page_path(&self, path: &Path) -> String {
        let relative = path.strip_prefix(self.root).unwrap_or(path);
        naming::page_path(relative)
    }
}
