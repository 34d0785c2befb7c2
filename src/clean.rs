//! Load-time cleaning of invalid groups.
//!
//! A group with no name (`"group"` missing or `null`) cannot be rendered and
//! must never reach output: it is dropped together with its pages and an
//! error diagnostic is recorded. A group whose name is the empty string is a
//! valid anonymous section; it is kept and only flagged with a warning.
//!
//! Deserialization never turns a missing name into an empty one, so the
//! decision (and the diagnostic code) is made here and only here.

use crate::diagnostics::{Diagnostics, codes};
use crate::types::{
    AnchorConfig, DropdownConfig, GlobalNavigation, GroupConfig, LanguageConfig, NavNode,
    NavigationConfig, TabConfig, VersionConfig,
};

/// Clean every group list reachable from `navigation`.
pub fn clean_navigation(navigation: &mut NavigationConfig, diagnostics: &mut Diagnostics) {
    navigation.clean("navigation", diagnostics);
}

trait Clean {
    fn clean(&mut self, location: &str, diagnostics: &mut Diagnostics);
}

fn clean_list<T: Clean>(items: &mut [T], location: &str, diagnostics: &mut Diagnostics) {
    for (i, item) in items.iter_mut().enumerate() {
        item.clean(&format!("{location}[{i}]"), diagnostics);
    }
}

/// Returns whether `group` survives. Descends into survivors.
fn keep_group(group: &mut GroupConfig, location: &str, diagnostics: &mut Diagnostics) -> bool {
    match group.name() {
        None => {
            diagnostics.error(
                location,
                codes::GROUP_MISSING_NAME,
                format!(
                    "group has no name; dropped with its {} page(s)",
                    group.pages.len()
                ),
            );
            return false;
        }
        Some("") => diagnostics.warning(
            location,
            codes::GROUP_EMPTY_NAME,
            "group has an empty name; kept as an anonymous section",
        ),
        Some(_) => {}
    }
    clean_nodes(&mut group.pages, &format!("{location}.pages"), diagnostics);
    true
}

/// Clean a `pages` array, dropping unnamed groups at any depth. `location`
/// is the breadcrumb of the array itself.
pub(crate) fn clean_nodes(nodes: &mut Vec<NavNode>, location: &str, diagnostics: &mut Diagnostics) {
    let mut i = 0;
    nodes.retain_mut(|node| {
        let here = format!("{location}[{i}]");
        i += 1;
        match node {
            NavNode::Page(_) => true,
            NavNode::Tab(tab) => {
                tab.clean(&here, diagnostics);
                true
            }
            NavNode::Group(group) => keep_group(group, &here, diagnostics),
        }
    });
}

fn clean_groups(groups: &mut Vec<GroupConfig>, location: &str, diagnostics: &mut Diagnostics) {
    let mut i = 0;
    groups.retain_mut(|group| {
        let here = format!("{location}[{i}]");
        i += 1;
        keep_group(group, &here, diagnostics)
    });
}

impl Clean for NavigationConfig {
    fn clean(&mut self, location: &str, diagnostics: &mut Diagnostics) {
        clean_nodes(&mut self.pages, &format!("{location}.pages"), diagnostics);
        clean_groups(&mut self.groups, &format!("{location}.groups"), diagnostics);
        clean_list(&mut self.tabs, &format!("{location}.tabs"), diagnostics);
        clean_list(&mut self.anchors, &format!("{location}.anchors"), diagnostics);
        clean_list(&mut self.dropdowns, &format!("{location}.dropdowns"), diagnostics);
        clean_list(&mut self.languages, &format!("{location}.languages"), diagnostics);
        clean_list(&mut self.versions, &format!("{location}.versions"), diagnostics);
        if let Some(global) = &mut self.global {
            global.clean(&format!("{location}.global"), diagnostics);
        }
    }
}

impl Clean for TabConfig {
    fn clean(&mut self, location: &str, diagnostics: &mut Diagnostics) {
        clean_nodes(&mut self.pages, &format!("{location}.pages"), diagnostics);
        clean_groups(&mut self.groups, &format!("{location}.groups"), diagnostics);
        clean_list(&mut self.anchors, &format!("{location}.anchors"), diagnostics);
        clean_list(&mut self.dropdowns, &format!("{location}.dropdowns"), diagnostics);
        clean_list(&mut self.languages, &format!("{location}.languages"), diagnostics);
        clean_list(&mut self.versions, &format!("{location}.versions"), diagnostics);
    }
}

impl Clean for AnchorConfig {
    fn clean(&mut self, location: &str, diagnostics: &mut Diagnostics) {
        clean_nodes(&mut self.pages, &format!("{location}.pages"), diagnostics);
        clean_groups(&mut self.groups, &format!("{location}.groups"), diagnostics);
        clean_list(&mut self.tabs, &format!("{location}.tabs"), diagnostics);
        clean_list(&mut self.dropdowns, &format!("{location}.dropdowns"), diagnostics);
        clean_list(&mut self.languages, &format!("{location}.languages"), diagnostics);
        clean_list(&mut self.versions, &format!("{location}.versions"), diagnostics);
    }
}

impl Clean for DropdownConfig {
    fn clean(&mut self, location: &str, diagnostics: &mut Diagnostics) {
        clean_nodes(&mut self.pages, &format!("{location}.pages"), diagnostics);
        clean_groups(&mut self.groups, &format!("{location}.groups"), diagnostics);
    }
}

impl Clean for LanguageConfig {
    fn clean(&mut self, location: &str, diagnostics: &mut Diagnostics) {
        clean_nodes(&mut self.pages, &format!("{location}.pages"), diagnostics);
        clean_groups(&mut self.groups, &format!("{location}.groups"), diagnostics);
        clean_list(&mut self.tabs, &format!("{location}.tabs"), diagnostics);
    }
}

impl Clean for VersionConfig {
    fn clean(&mut self, location: &str, diagnostics: &mut Diagnostics) {
        clean_nodes(&mut self.pages, &format!("{location}.pages"), diagnostics);
        clean_groups(&mut self.groups, &format!("{location}.groups"), diagnostics);
        clean_list(&mut self.tabs, &format!("{location}.tabs"), diagnostics);
    }
}

impl Clean for GlobalNavigation {
    fn clean(&mut self, location: &str, diagnostics: &mut Diagnostics) {
        clean_list(&mut self.tabs, &format!("{location}.tabs"), diagnostics);
        clean_list(&mut self.anchors, &format!("{location}.anchors"), diagnostics);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    fn cleaned(json: &str) -> (NavigationConfig, Diagnostics) {
        let mut nav: NavigationConfig = serde_json::from_str(json).unwrap();
        let mut diagnostics = Diagnostics::default();
        clean_navigation(&mut nav, &mut diagnostics);
        (nav, diagnostics)
    }

    #[test]
    fn null_named_group_dropped_with_error() {
        let (nav, diags) = cleaned(
            r#"{ "pages": ["index", { "group": null, "pages": ["lost"] }, "after"] }"#,
        );

        assert_eq!(leaf_paths(&nav.pages), vec!["index", "after"]);
        let errors: Vec<_> = diags.with_code(codes::GROUP_MISSING_NAME).collect();
        assert_eq!(errors.len(), 1);
        assert!(!errors[0].is_warning);
        assert_eq!(errors[0].location, "navigation.pages[1]");
    }

    #[test]
    fn missing_name_treated_like_null() {
        let (nav, diags) = cleaned(r#"{ "groups": [{ "pages": ["x"] }] }"#);
        assert!(nav.groups.is_empty());
        assert_eq!(diags.with_code(codes::GROUP_MISSING_NAME).count(), 1);
    }

    #[test]
    fn empty_named_group_kept_with_warning() {
        let (nav, diags) = cleaned(r#"{ "pages": [{ "group": "", "pages": ["a"] }] }"#);

        assert_eq!(group_names(&nav.pages), vec![""]);
        let warnings: Vec<_> = diags.with_code(codes::GROUP_EMPTY_NAME).collect();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].is_warning);
        assert!(!diags.has_errors());
    }

    #[test]
    fn nested_invalid_groups_found_everywhere() {
        let (nav, diags) = cleaned(
            r#"{
                "pages": [{ "group": "Outer", "pages": [{ "group": null, "pages": [] }] }],
                "tabs": [{ "tab": "API", "groups": [{ "group": null, "pages": ["a"] }] }],
                "anchors": [{ "anchor": "A", "pages": [{ "pages": [] }] }]
            }"#,
        );

        assert!(find_group(&nav.pages, "Outer").pages.is_empty());
        assert!(nav.tabs[0].groups.is_empty());
        assert!(nav.anchors[0].pages.is_empty());

        let locations: Vec<&str> = diags
            .with_code(codes::GROUP_MISSING_NAME)
            .map(|d| d.location.as_str())
            .collect();
        assert_eq!(
            locations,
            vec![
                "navigation.pages[0].pages[0]",
                "navigation.tabs[0].groups[0]",
                "navigation.anchors[0].pages[0]",
            ]
        );
    }

    #[test]
    fn valid_tree_untouched() {
        let json = r#"{ "pages": ["a", { "group": "G", "pages": ["b"] }] }"#;
        let (nav, diags) = cleaned(json);
        let original: NavigationConfig = serde_json::from_str(json).unwrap();
        assert_eq!(nav, original);
        assert!(diags.is_empty());
    }
}
