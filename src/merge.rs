//! Navigation tree merging.
//!
//! Combines two independently authored `pages` sequences into one without
//! duplicating page leaves, while keeping the order a human wrote.
//!
//! ## Algorithm
//!
//! 1. **Catalog the target.** The existing nodes are copied into an output
//!    buffer, named groups are indexed by name (first occurrence wins), and
//!    the paths already present are remembered.
//! 2. **Fold the source in**, in order:
//!    - a page already known (here or anywhere in the registry) is skipped;
//!      otherwise it is appended, or routed into the "Getting Started" group
//!      when [`MergeOptions::add_root_pages_to_getting_started`] asks for it;
//!    - a named group whose name is indexed is reconciled into the existing
//!      group; otherwise it is appended and indexed;
//!    - an empty-named group is its own anonymous section and is appended,
//!      unless [`MergeOptions::combine_empty_groups`] collapses them or it is
//!      a page-less copy of one already there;
//!    - a tab nested in `pages` is reconciled with the same-labelled tab;
//!    - a group with no name at all is dropped.
//! 3. The buffer replaces the target in one assignment.
//!
//! Group identity is the exact, case-sensitive name. Page identity is the
//! case-insensitive path.
//!
//! ## Scalar Fields
//!
//! When two nodes are reconciled, a source scalar (root, icon, tag, hidden,
//! openapi) overwrites the target's only when the source actually has a
//! value. A blank source never erases what the target already had.

use crate::naming::{DEFAULT_GROUP_NAME, path_key};
use crate::reconcile::reconcile_tab;
use crate::registry::{PagePaths, PathRegistry};
use crate::types::{GroupConfig, Icon, NavNode, OpenApiSpec, TabConfig};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Knobs for a merge. Passed by value through the whole merge call graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MergeOptions {
    /// Collapse every empty-named group into a single anonymous group.
    pub combine_empty_groups: bool,
    /// Route new root-level pages into an existing "Getting Started" group.
    pub add_root_pages_to_getting_started: bool,
    /// Keep pages whose path is already present instead of skipping them.
    pub allow_duplicates: bool,
}

/// Merge `source` into the root-level `target` sequence.
pub fn merge_pages(
    target: &mut Vec<NavNode>,
    source: Vec<NavNode>,
    options: MergeOptions,
    registry: &mut PathRegistry,
) {
    merge_sequence(target, source, options, registry, true);
}

/// Merge `source` into a `pages` sequence nested inside a group, tab, or anchor.
pub(crate) fn merge_nested_pages(
    target: &mut Vec<NavNode>,
    source: Vec<NavNode>,
    options: MergeOptions,
    registry: &mut PathRegistry,
) {
    merge_sequence(target, source, options, registry, false);
}

fn merge_sequence(
    target: &mut Vec<NavNode>,
    source: Vec<NavNode>,
    options: MergeOptions,
    registry: &mut PathRegistry,
    is_root: bool,
) {
    let mut catalog = Catalog::of(std::mem::take(target), options);
    for node in source {
        match node {
            NavNode::Page(path) => catalog.add_page(path, is_root, options, registry),
            NavNode::Tab(tab) => catalog.add_tab(tab, options, registry),
            NavNode::Group(group) => catalog.add_group(group, options, registry),
        }
    }
    *target = catalog.nodes;
}

/// Working state for one level of a merge.
struct Catalog {
    nodes: Vec<NavNode>,
    groups: HashMap<String, usize>,
    /// Tabs nested in `pages`, by label.
    tabs: HashMap<String, usize>,
    seen: HashSet<String>,
}

impl Catalog {
    fn of(existing: Vec<NavNode>, options: MergeOptions) -> Self {
        let mut catalog = Catalog {
            nodes: Vec::with_capacity(existing.len()),
            groups: HashMap::new(),
            tabs: HashMap::new(),
            seen: HashSet::new(),
        };
        for node in existing {
            match &node {
                NavNode::Page(path) => {
                    catalog.seen.insert(path_key(path));
                }
                NavNode::Tab(tab) if !tab.tab.is_empty() => {
                    catalog
                        .tabs
                        .entry(tab.tab.clone())
                        .or_insert(catalog.nodes.len());
                }
                NavNode::Tab(_) => {}
                NavNode::Group(group) => match group.name() {
                    None => {
                        debug!("dropping unnamed group from merge target");
                        continue;
                    }
                    Some(name) if shares_identity(name, options) => {
                        catalog
                            .groups
                            .entry(name.to_string())
                            .or_insert(catalog.nodes.len());
                    }
                    Some(_) => {}
                },
            }
            catalog.nodes.push(node);
        }
        catalog
    }

    fn add_page(
        &mut self,
        path: String,
        is_root: bool,
        options: MergeOptions,
        registry: &mut PathRegistry,
    ) {
        let key = path_key(&path);
        if !options.allow_duplicates && (self.seen.contains(&key) || registry.contains(&path)) {
            debug!(%path, "skipping duplicate page");
            return;
        }
        self.seen.insert(key);
        registry.insert(&path);

        if is_root
            && options.add_root_pages_to_getting_started
            && let Some(group) = self.group_mut(DEFAULT_GROUP_NAME)
        {
            group.pages.push(NavNode::Page(path));
            return;
        }
        self.nodes.push(NavNode::Page(path));
    }

    fn add_group(&mut self, group: GroupConfig, options: MergeOptions, registry: &mut PathRegistry) {
        let Some(name) = group.group.clone() else {
            debug!("dropping unnamed group from merge source");
            return;
        };
        let keyed = shares_identity(&name, options);
        if keyed && let Some(existing) = self.group_mut(&name) {
            reconcile_group(existing, group, options, registry);
            return;
        }
        if !keyed
            && group.pages.is_empty()
            && self.nodes.iter().any(|n| n.as_group() == Some(&group))
        {
            debug!("skipping empty anonymous group already present");
            return;
        }
        if let Some(group) = adopt_group(group, options, registry) {
            if keyed {
                self.groups.insert(name, self.nodes.len());
            }
            self.nodes.push(NavNode::Group(group));
        }
    }

    /// Reconcile a nested tab with the same-labelled one, or append it.
    fn add_tab(&mut self, tab: TabConfig, options: MergeOptions, registry: &mut PathRegistry) {
        if let Some(existing) = self.tab_mut(&tab.tab) {
            reconcile_tab(existing, tab, options, registry);
            return;
        }
        let mut fresh = TabConfig::default();
        reconcile_tab(&mut fresh, tab, options, registry);
        if !fresh.tab.is_empty() {
            self.tabs.insert(fresh.tab.clone(), self.nodes.len());
        }
        self.nodes.push(NavNode::Tab(fresh));
    }

    fn tab_mut(&mut self, label: &str) -> Option<&mut TabConfig> {
        let index = *self.tabs.get(label)?;
        match self.nodes.get_mut(index) {
            Some(NavNode::Tab(tab)) => Some(tab),
            _ => None,
        }
    }

    fn group_mut(&mut self, name: &str) -> Option<&mut GroupConfig> {
        let index = *self.groups.get(name)?;
        match self.nodes.get_mut(index) {
            Some(NavNode::Group(group)) => Some(group),
            _ => None,
        }
    }
}

/// Whether groups with this name merge with each other.
///
/// Named groups always do. Empty-named groups are separate anonymous sections
/// unless the caller opts into combining them.
fn shares_identity(name: &str, options: MergeOptions) -> bool {
    !name.is_empty() || options.combine_empty_groups
}

/// Take ownership of a group that has no counterpart in the target.
///
/// Its pages still go through the merge so paths already present elsewhere
/// are not duplicated. A group that had pages but loses all of them that way
/// is not added. Callers skip a page-less anonymous group when an identical
/// one is already present.
fn adopt_group(
    mut group: GroupConfig,
    options: MergeOptions,
    registry: &mut PathRegistry,
) -> Option<GroupConfig> {
    let pages = std::mem::take(&mut group.pages);
    let had_pages = !pages.is_empty();
    merge_nested_pages(&mut group.pages, pages, options, registry);
    if had_pages && group.pages.is_empty() {
        debug!(group = ?group.group, "group only contained known pages");
        return None;
    }
    Some(group)
}

/// Merge `source` into `target`, two groups already known to share identity.
pub fn reconcile_group(
    target: &mut GroupConfig,
    source: GroupConfig,
    options: MergeOptions,
    registry: &mut PathRegistry,
) {
    overwrite(&mut target.root, source.root);
    overwrite(&mut target.tag, source.tag);
    overwrite_icon(&mut target.icon, source.icon);
    overwrite_openapi(&mut target.openapi, source.openapi);
    if source.hidden.is_some() {
        target.hidden = source.hidden;
    }
    merge_nested_pages(&mut target.pages, source.pages, options, registry);
}

/// Merge a `groups` list (the non-`pages` group arrays on tabs, anchors and
/// the navigation root) with the same identity rules as groups inside `pages`.
pub fn merge_groups(
    target: &mut Vec<GroupConfig>,
    source: Vec<GroupConfig>,
    options: MergeOptions,
    registry: &mut PathRegistry,
) {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut merged: Vec<GroupConfig> = Vec::with_capacity(target.len() + source.len());

    for group in std::mem::take(target) {
        let Some(name) = group.name() else {
            continue;
        };
        if shares_identity(name, options) {
            index.entry(name.to_string()).or_insert(merged.len());
        }
        merged.push(group);
    }

    for group in source {
        let Some(name) = group.group.clone() else {
            continue;
        };
        let keyed = shares_identity(&name, options);
        if keyed && let Some(&i) = index.get(&name) {
            reconcile_group(&mut merged[i], group, options, registry);
        } else if !keyed && group.pages.is_empty() && merged.contains(&group) {
            debug!("skipping empty anonymous group already present");
        } else if let Some(group) = adopt_group(group, options, registry) {
            if keyed {
                index.insert(name, merged.len());
            }
            merged.push(group);
        }
    }

    *target = merged;
}

/// Concatenate a collection that has no identity of its own.
pub(crate) fn append<T: PagePaths>(target: &mut Vec<T>, source: Vec<T>, registry: &mut PathRegistry) {
    for item in source {
        registry.register_all(&item);
        target.push(item);
    }
}

pub(crate) fn overwrite(target: &mut Option<String>, source: Option<String>) {
    if let Some(value) = source
        && !value.trim().is_empty()
    {
        *target = Some(value);
    }
}

pub(crate) fn overwrite_str(target: &mut String, source: String) {
    if !source.trim().is_empty() {
        *target = source;
    }
}

pub(crate) fn overwrite_icon(target: &mut Option<Icon>, source: Option<Icon>) {
    if let Some(icon) = source
        && !icon.is_empty()
    {
        *target = Some(icon);
    }
}

pub(crate) fn overwrite_openapi(target: &mut Option<OpenApiSpec>, source: Option<OpenApiSpec>) {
    if let Some(api) = source
        && !api.is_empty()
    {
        *target = Some(api);
    }
}
