//! URL prefix rewriting.
//!
//! Applies a path prefix to every page, group `root`, and tab/anchor/etc.
//! `href` in a navigation tree: `value` becomes `prefix/value`. Each page
//! rewrite renames the path in the [`PathRegistry`] in the same step, so the
//! registry never holds a stale path.
//!
//! Absolute URLs (`https://…`) in links point off-site and are left alone.

use crate::registry::PathRegistry;
use crate::types::{
    AnchorConfig, DropdownConfig, GlobalNavigation, GroupConfig, LanguageConfig, NavNode,
    NavigationConfig, TabConfig, VersionConfig,
};

/// Strip trailing separators. `None` when nothing is left to apply.
pub fn normalize_prefix(prefix: &str) -> Option<&str> {
    let trimmed = prefix.trim().trim_end_matches('/');
    (!trimmed.is_empty()).then_some(trimmed)
}

fn prefixed(prefix: &str, value: &str) -> String {
    format!("{}/{}", prefix, value.trim_start_matches('/'))
}

fn prefix_link(prefix: &str, link: &mut Option<String>) {
    if let Some(value) = link
        && !value.is_empty()
        && !value.contains("://")
    {
        *value = prefixed(prefix, value);
    }
}

/// Types whose paths and links can be prefixed. `prefix` must already be
/// normalized.
pub trait ApplyPrefix {
    fn apply_prefix(&mut self, prefix: &str, registry: &mut PathRegistry);
}

impl<T: ApplyPrefix> ApplyPrefix for Vec<T> {
    fn apply_prefix(&mut self, prefix: &str, registry: &mut PathRegistry) {
        for item in self {
            item.apply_prefix(prefix, registry);
        }
    }
}

impl ApplyPrefix for NavNode {
    fn apply_prefix(&mut self, prefix: &str, registry: &mut PathRegistry) {
        match self {
            NavNode::Page(path) => {
                let renamed = prefixed(prefix, path);
                registry.rename(path, &renamed);
                *path = renamed;
            }
            NavNode::Tab(tab) => tab.apply_prefix(prefix, registry),
            NavNode::Group(group) => group.apply_prefix(prefix, registry),
        }
    }
}

impl ApplyPrefix for GroupConfig {
    fn apply_prefix(&mut self, prefix: &str, registry: &mut PathRegistry) {
        prefix_link(prefix, &mut self.root);
        self.pages.apply_prefix(prefix, registry);
    }
}

impl ApplyPrefix for TabConfig {
    fn apply_prefix(&mut self, prefix: &str, registry: &mut PathRegistry) {
        prefix_link(prefix, &mut self.href);
        self.pages.apply_prefix(prefix, registry);
        self.groups.apply_prefix(prefix, registry);
        self.anchors.apply_prefix(prefix, registry);
        self.dropdowns.apply_prefix(prefix, registry);
        self.languages.apply_prefix(prefix, registry);
        self.versions.apply_prefix(prefix, registry);
    }
}

impl ApplyPrefix for AnchorConfig {
    fn apply_prefix(&mut self, prefix: &str, registry: &mut PathRegistry) {
        prefix_link(prefix, &mut self.href);
        self.pages.apply_prefix(prefix, registry);
        self.groups.apply_prefix(prefix, registry);
        self.tabs.apply_prefix(prefix, registry);
        self.dropdowns.apply_prefix(prefix, registry);
        self.languages.apply_prefix(prefix, registry);
        self.versions.apply_prefix(prefix, registry);
    }
}

impl ApplyPrefix for DropdownConfig {
    fn apply_prefix(&mut self, prefix: &str, registry: &mut PathRegistry) {
        prefix_link(prefix, &mut self.href);
        self.pages.apply_prefix(prefix, registry);
        self.groups.apply_prefix(prefix, registry);
    }
}

impl ApplyPrefix for LanguageConfig {
    fn apply_prefix(&mut self, prefix: &str, registry: &mut PathRegistry) {
        prefix_link(prefix, &mut self.href);
        self.pages.apply_prefix(prefix, registry);
        self.groups.apply_prefix(prefix, registry);
        self.tabs.apply_prefix(prefix, registry);
    }
}

impl ApplyPrefix for VersionConfig {
    fn apply_prefix(&mut self, prefix: &str, registry: &mut PathRegistry) {
        prefix_link(prefix, &mut self.href);
        self.pages.apply_prefix(prefix, registry);
        self.groups.apply_prefix(prefix, registry);
        self.tabs.apply_prefix(prefix, registry);
    }
}

impl ApplyPrefix for GlobalNavigation {
    fn apply_prefix(&mut self, prefix: &str, registry: &mut PathRegistry) {
        self.tabs.apply_prefix(prefix, registry);
        self.anchors.apply_prefix(prefix, registry);
    }
}

impl ApplyPrefix for NavigationConfig {
    fn apply_prefix(&mut self, prefix: &str, registry: &mut PathRegistry) {
        self.pages.apply_prefix(prefix, registry);
        self.groups.apply_prefix(prefix, registry);
        self.tabs.apply_prefix(prefix, registry);
        self.anchors.apply_prefix(prefix, registry);
        self.dropdowns.apply_prefix(prefix, registry);
        self.languages.apply_prefix(prefix, registry);
        self.versions.apply_prefix(prefix, registry);
        if let Some(global) = &mut self.global {
            global.apply_prefix(prefix, registry);
        }
    }
}
