//! Index of every page path present in a navigation tree.
//!
//! The registry is a cache over the tree, not a recomputation: it is seeded
//! once when a configuration is loaded and then updated by each mutation
//! (merge, add, populate, prefix rewrite). Lookups ignore case.
//!
//! Paths are reference-counted so a tree that legitimately lists the same page
//! twice (allowed on load) still reports the path as known after one of the
//! two leaves is removed or renamed.

use crate::naming::path_key;
use crate::types::{
    AnchorConfig, DropdownConfig, GlobalNavigation, GroupConfig, LanguageConfig, NavNode,
    NavigationConfig, TabConfig, VersionConfig,
};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct PathRegistry {
    counts: HashMap<String, usize>,
}

impl PathRegistry {
    /// Seed a registry from every page reachable in `navigation`.
    pub fn from_navigation(navigation: &NavigationConfig) -> Self {
        let mut registry = Self::default();
        registry.register_all(navigation);
        registry
    }

    pub fn contains(&self, path: &str) -> bool {
        self.counts.contains_key(&path_key(path))
    }

    pub fn insert(&mut self, path: &str) {
        *self.counts.entry(path_key(path)).or_insert(0) += 1;
    }

    /// Drop one occurrence of `path`. Returns false if it was not known.
    pub fn remove(&mut self, path: &str) -> bool {
        let key = path_key(path);
        match self.counts.get_mut(&key) {
            Some(count) if *count > 1 => {
                *count -= 1;
                true
            }
            Some(_) => {
                self.counts.remove(&key);
                true
            }
            None => false,
        }
    }

    /// Replace one occurrence of `old` with `new` in a single step.
    pub fn rename(&mut self, old: &str, new: &str) {
        self.remove(old);
        self.insert(new);
    }

    pub fn register_all(&mut self, item: &impl PagePaths) {
        item.for_each_page(&mut |path| self.insert(path));
    }

    pub fn unregister_all(&mut self, item: &impl PagePaths) {
        item.for_each_page(&mut |path| {
            self.remove(path);
        });
    }

    /// Number of distinct (case-folded) paths.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn clear(&mut self) {
        self.counts.clear();
    }
}

/// Anything that contains page leaves, visited in document order.
pub trait PagePaths {
    fn for_each_page(&self, f: &mut dyn FnMut(&str));

    fn page_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        self.for_each_page(&mut |p| paths.push(p.to_string()));
        paths
    }
}

impl<T: PagePaths> PagePaths for [T] {
    fn for_each_page(&self, f: &mut dyn FnMut(&str)) {
        for item in self {
            item.for_each_page(f);
        }
    }
}

impl<T: PagePaths> PagePaths for Vec<T> {
    fn for_each_page(&self, f: &mut dyn FnMut(&str)) {
        self.as_slice().for_each_page(f);
    }
}

impl<T: PagePaths> PagePaths for Option<T> {
    fn for_each_page(&self, f: &mut dyn FnMut(&str)) {
        if let Some(item) = self {
            item.for_each_page(f);
        }
    }
}

impl PagePaths for NavNode {
    fn for_each_page(&self, f: &mut dyn FnMut(&str)) {
        match self {
            NavNode::Page(path) => f(path),
            NavNode::Tab(tab) => tab.for_each_page(f),
            NavNode::Group(group) => group.for_each_page(f),
        }
    }
}

impl PagePaths for GroupConfig {
    fn for_each_page(&self, f: &mut dyn FnMut(&str)) {
        self.pages.for_each_page(f);
    }
}

impl PagePaths for TabConfig {
    fn for_each_page(&self, f: &mut dyn FnMut(&str)) {
        self.pages.for_each_page(f);
        self.groups.for_each_page(f);
        self.anchors.for_each_page(f);
        self.dropdowns.for_each_page(f);
        self.languages.for_each_page(f);
        self.versions.for_each_page(f);
    }
}

impl PagePaths for AnchorConfig {
    fn for_each_page(&self, f: &mut dyn FnMut(&str)) {
        self.pages.for_each_page(f);
        self.groups.for_each_page(f);
        self.tabs.for_each_page(f);
        self.dropdowns.for_each_page(f);
        self.languages.for_each_page(f);
        self.versions.for_each_page(f);
    }
}

impl PagePaths for DropdownConfig {
    fn for_each_page(&self, f: &mut dyn FnMut(&str)) {
        self.pages.for_each_page(f);
        self.groups.for_each_page(f);
    }
}

impl PagePaths for LanguageConfig {
    fn for_each_page(&self, f: &mut dyn FnMut(&str)) {
        self.pages.for_each_page(f);
        self.groups.for_each_page(f);
        self.tabs.for_each_page(f);
    }
}

impl PagePaths for VersionConfig {
    fn for_each_page(&self, f: &mut dyn FnMut(&str)) {
        self.pages.for_each_page(f);
        self.groups.for_each_page(f);
        self.tabs.for_each_page(f);
    }
}

impl PagePaths for GlobalNavigation {
    fn for_each_page(&self, f: &mut dyn FnMut(&str)) {
        self.tabs.for_each_page(f);
        self.anchors.for_each_page(f);
    }
}

impl PagePaths for NavigationConfig {
    fn for_each_page(&self, f: &mut dyn FnMut(&str)) {
        self.pages.for_each_page(f);
        self.groups.for_each_page(f);
        self.tabs.for_each_page(f);
        self.anchors.for_each_page(f);
        self.dropdowns.for_each_page(f);
        self.languages.for_each_page(f);
        self.versions.for_each_page(f);
        self.global.for_each_page(f);
    }
}
