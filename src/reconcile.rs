//! Tab and anchor reconciliation, and the whole-tree merge built on it.
//!
//! Tabs and anchors are identified by their display label, falling back to
//! their link target. A match made through one key also indexes the merged
//! node under the other key, so a later source node that only shares the
//! link (or only the label) still lands on the same merged node.
//!
//! Nested `pages` go through [`merge_pages`](crate::merge::merge_pages)'s
//! algorithm, nested `groups` are reconciled by name, and the remaining
//! collections (`anchors`, `tabs`, `dropdowns`, `languages`, `versions`) are
//! concatenated in order: they carry no page identity of their own.

use crate::merge::{
    MergeOptions, append, merge_groups, merge_nested_pages, merge_pages, overwrite, overwrite_icon,
    overwrite_openapi, overwrite_str,
};
use crate::registry::{PagePaths, PathRegistry};
use crate::types::{AnchorConfig, GlobalNavigation, NavigationConfig, TabConfig};
use std::collections::HashMap;
use tracing::debug;

/// A navigation node identified by label or link.
trait Keyed: PagePaths + Default {
    fn label(&self) -> &str;
    fn link(&self) -> Option<&str>;
    /// Fold `source` into `self` after identity has been established.
    fn absorb(&mut self, source: Self, options: MergeOptions, registry: &mut PathRegistry);
}

impl Keyed for TabConfig {
    fn label(&self) -> &str {
        &self.tab
    }

    fn link(&self) -> Option<&str> {
        self.href.as_deref()
    }

    fn absorb(&mut self, source: Self, options: MergeOptions, registry: &mut PathRegistry) {
        overwrite_str(&mut self.tab, source.tab);
        overwrite(&mut self.href, source.href);
        overwrite_icon(&mut self.icon, source.icon);
        overwrite_openapi(&mut self.openapi, source.openapi);
        if source.hidden.is_some() {
            self.hidden = source.hidden;
        }
        merge_nested_pages(&mut self.pages, source.pages, options, registry);
        merge_groups(&mut self.groups, source.groups, options, registry);
        append(&mut self.anchors, source.anchors, registry);
        append(&mut self.dropdowns, source.dropdowns, registry);
        append(&mut self.languages, source.languages, registry);
        append(&mut self.versions, source.versions, registry);
    }
}

impl Keyed for AnchorConfig {
    fn label(&self) -> &str {
        &self.anchor
    }

    fn link(&self) -> Option<&str> {
        self.href.as_deref()
    }

    fn absorb(&mut self, source: Self, options: MergeOptions, registry: &mut PathRegistry) {
        overwrite_str(&mut self.anchor, source.anchor);
        overwrite(&mut self.href, source.href);
        overwrite(&mut self.color, source.color);
        overwrite_icon(&mut self.icon, source.icon);
        overwrite_openapi(&mut self.openapi, source.openapi);
        if source.hidden.is_some() {
            self.hidden = source.hidden;
        }
        merge_nested_pages(&mut self.pages, source.pages, options, registry);
        merge_groups(&mut self.groups, source.groups, options, registry);
        append(&mut self.tabs, source.tabs, registry);
        append(&mut self.dropdowns, source.dropdowns, registry);
        append(&mut self.languages, source.languages, registry);
        append(&mut self.versions, source.versions, registry);
    }
}

/// Label and link indexes over a list being merged. First occurrence wins
/// until a reconciliation re-points a key.
#[derive(Default)]
struct KeyIndex {
    by_label: HashMap<String, usize>,
    by_link: HashMap<String, usize>,
}

impl KeyIndex {
    fn find(&self, label: &str, link: Option<&str>) -> Option<usize> {
        let by_label = (!label.is_empty())
            .then(|| self.by_label.get(label))
            .flatten();
        let by_link = || {
            link.filter(|l| !l.is_empty())
                .and_then(|l| self.by_link.get(l))
        };
        by_label.or_else(by_link).copied()
    }

    fn record(&mut self, label: &str, link: Option<&str>, index: usize, replace: bool) {
        if !label.is_empty() {
            if replace {
                self.by_label.insert(label.to_string(), index);
            } else {
                self.by_label.entry(label.to_string()).or_insert(index);
            }
        }
        if let Some(link) = link.filter(|l| !l.is_empty()) {
            if replace {
                self.by_link.insert(link.to_string(), index);
            } else {
                self.by_link.entry(link.to_string()).or_insert(index);
            }
        }
    }
}

fn merge_keyed<T: Keyed>(
    target: &mut Vec<T>,
    source: Vec<T>,
    options: MergeOptions,
    registry: &mut PathRegistry,
) {
    let mut index = KeyIndex::default();
    for (i, item) in target.iter().enumerate() {
        index.record(item.label(), item.link(), i, false);
    }

    for item in source {
        match index.find(item.label(), item.link()) {
            Some(i) => {
                debug!(label = item.label(), "reconciling with existing entry");
                target[i].absorb(item, options, registry);
                let merged = &target[i];
                index.record(merged.label(), merged.link(), i, true);
            }
            None => {
                let mut fresh = T::default();
                fresh.absorb(item, options, registry);
                index.record(fresh.label(), fresh.link(), target.len(), false);
                target.push(fresh);
            }
        }
    }
}

/// Merge a single tab into one already known to share its identity.
pub(crate) fn reconcile_tab(
    target: &mut TabConfig,
    source: TabConfig,
    options: MergeOptions,
    registry: &mut PathRegistry,
) {
    target.absorb(source, options, registry);
}

/// Merge tabs by label, then by link.
pub fn merge_tabs(
    target: &mut Vec<TabConfig>,
    source: Vec<TabConfig>,
    options: MergeOptions,
    registry: &mut PathRegistry,
) {
    merge_keyed(target, source, options, registry);
}

/// Merge anchors by label, then by link.
pub fn merge_anchors(
    target: &mut Vec<AnchorConfig>,
    source: Vec<AnchorConfig>,
    options: MergeOptions,
    registry: &mut PathRegistry,
) {
    merge_keyed(target, source, options, registry);
}

/// Merge a complete navigation tree into `target`.
pub fn merge_navigation(
    target: &mut NavigationConfig,
    source: NavigationConfig,
    options: MergeOptions,
    registry: &mut PathRegistry,
) {
    merge_pages(&mut target.pages, source.pages, options, registry);
    merge_groups(&mut target.groups, source.groups, options, registry);
    merge_tabs(&mut target.tabs, source.tabs, options, registry);
    merge_anchors(&mut target.anchors, source.anchors, options, registry);
    append(&mut target.dropdowns, source.dropdowns, registry);
    append(&mut target.languages, source.languages, registry);
    append(&mut target.versions, source.versions, registry);

    if let Some(incoming) = source.global {
        match target.global.as_mut() {
            Some(existing) => merge_global(existing, incoming, options, registry),
            None => {
                registry.register_all(&incoming);
                target.global = Some(incoming);
            }
        }
    }
}

fn merge_global(
    target: &mut GlobalNavigation,
    source: GlobalNavigation,
    options: MergeOptions,
    registry: &mut PathRegistry,
) {
    merge_tabs(&mut target.tabs, source.tabs, options, registry);
    merge_anchors(&mut target.anchors, source.anchors, options, registry);
}
