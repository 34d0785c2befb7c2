//! CLI output formatting.
//!
//! # Information-First Display
//!
//! The tree listing leads with what a reader of the rendered site sees: group
//! titles and page paths in their final order, each with a positional index
//! per sibling level. Groups show how many pages they hold, counting nested
//! groups, so a large override or a dropped group is visible at a glance.
//!
//! # Output Format
//!
//! ```text
//! Pages
//! 001 index
//! 002 Guides (2 pages)
//!     001 guides/setup
//!     002 guides/deploy
//!
//! Tabs
//! 001 API (1 page)
//!     001 api/index
//!
//! 4 pages, 1 group, 1 tab
//! ```
//!
//! Diagnostics are listed one per line in their `Display` form, followed by a
//! count line:
//!
//! ```text
//! warning[DOCS_LEGACY_EXTENSION] docs/old.md: 'old.md' uses the .md extension ...
//! 1 warning, 0 errors
//! ```
//!
//! # Architecture
//!
//! Each listing has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that does the I/O. Format functions
//! are pure.

use crate::diagnostics::Diagnostic;
use crate::registry::PagePaths;
use crate::types::{GroupConfig, NavNode, NavigationConfig};

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// `1 page`, `3 pages`.
fn plural(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("{n} {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

/// Header line for a container: index, title, page count.
///
/// ```text
/// 002 Guides (2 pages)
/// 001 (untitled) (1 page)
/// ```
fn container_header(index: usize, title: &str, pages: usize) -> String {
    let title = if title.is_empty() { "(untitled)" } else { title };
    format!("{} {} ({})", format_index(index), title, plural(pages, "page"))
}

// ============================================================================
// Tree listing
// ============================================================================

fn format_nodes(nodes: &[NavNode], depth: usize, lines: &mut Vec<String>) {
    for (i, node) in nodes.iter().enumerate() {
        match node {
            NavNode::Page(path) => {
                lines.push(format!("{}{} {}", indent(depth), format_index(i + 1), path));
            }
            NavNode::Tab(tab) => {
                lines.push(format!(
                    "{}{} [tab]",
                    indent(depth),
                    container_header(i + 1, &tab.tab, tab.page_paths().len())
                ));
                format_nodes(&tab.pages, depth + 1, lines);
                for (j, group) in tab.groups.iter().enumerate() {
                    format_group(group, tab.pages.len() + j + 1, depth + 1, lines);
                }
            }
            NavNode::Group(group) => format_group(group, i + 1, depth, lines),
        }
    }
}

fn format_group(group: &GroupConfig, index: usize, depth: usize, lines: &mut Vec<String>) {
    let title = group.name().unwrap_or_default();
    lines.push(format!(
        "{}{}",
        indent(depth),
        container_header(index, title, group.page_paths().len())
    ));
    format_nodes(&group.pages, depth + 1, lines);
}

/// A titled container whose children are `pages` followed by `groups`.
fn format_container(
    index: usize,
    title: &str,
    item: &impl PagePaths,
    pages: &[NavNode],
    groups: &[GroupConfig],
    lines: &mut Vec<String>,
) {
    lines.push(container_header(index, title, item.page_paths().len()));
    format_nodes(pages, 1, lines);
    for (i, group) in groups.iter().enumerate() {
        format_group(group, pages.len() + i + 1, 1, lines);
    }
}

/// Push `heading` and a blank separator when there is a previous section.
fn section(lines: &mut Vec<String>, heading: &str) {
    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(heading.to_string());
}

/// Count groups at any depth below `nodes`.
fn count_groups(nodes: &[NavNode]) -> usize {
    nodes
        .iter()
        .filter_map(NavNode::as_group)
        .map(|g| 1 + count_groups(&g.pages))
        .sum()
}

/// One-line totals for a navigation tree.
///
/// ```text
/// 4 pages, 1 group, 1 tab
/// ```
pub fn format_summary(navigation: &NavigationConfig) -> String {
    let groups = count_groups(&navigation.pages)
        + navigation
            .groups
            .iter()
            .map(|g| 1 + count_groups(&g.pages))
            .sum::<usize>();
    let mut parts = vec![
        plural(navigation.page_paths().len(), "page"),
        plural(groups, "group"),
    ];
    let tabs = navigation.tabs.len();
    if tabs > 0 {
        parts.push(plural(tabs, "tab"));
    }
    let anchors = navigation.anchors.len();
    if anchors > 0 {
        parts.push(plural(anchors, "anchor"));
    }
    parts.join(", ")
}

/// Format the whole navigation tree, section by section.
///
/// Empty sections are omitted; the summary line always closes the listing.
pub fn format_navigation(navigation: &NavigationConfig) -> Vec<String> {
    let mut lines = Vec::new();

    if !navigation.pages.is_empty() || !navigation.groups.is_empty() {
        section(&mut lines, "Pages");
        format_nodes(&navigation.pages, 0, &mut lines);
        for (i, group) in navigation.groups.iter().enumerate() {
            format_group(group, navigation.pages.len() + i + 1, 0, &mut lines);
        }
    }

    if !navigation.tabs.is_empty() {
        section(&mut lines, "Tabs");
        for (i, tab) in navigation.tabs.iter().enumerate() {
            format_container(i + 1, &tab.tab, tab, &tab.pages, &tab.groups, &mut lines);
        }
    }

    if !navigation.anchors.is_empty() {
        section(&mut lines, "Anchors");
        for (i, anchor) in navigation.anchors.iter().enumerate() {
            format_container(i + 1, &anchor.anchor, anchor, &anchor.pages, &anchor.groups, &mut lines);
        }
    }

    if !navigation.dropdowns.is_empty() {
        section(&mut lines, "Dropdowns");
        for (i, dropdown) in navigation.dropdowns.iter().enumerate() {
            format_container(
                i + 1,
                &dropdown.dropdown,
                dropdown,
                &dropdown.pages,
                &dropdown.groups,
                &mut lines,
            );
        }
    }

    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(format_summary(navigation));
    lines
}

pub fn print_navigation(navigation: &NavigationConfig) {
    for line in format_navigation(navigation) {
        println!("{}", line);
    }
}

// ============================================================================
// Diagnostics
// ============================================================================

/// Format diagnostics one per line, then a warning/error count.
///
/// Nothing at all when there are no diagnostics.
pub fn format_diagnostics(diagnostics: &[Diagnostic]) -> Vec<String> {
    if diagnostics.is_empty() {
        return Vec::new();
    }
    let mut lines: Vec<String> = diagnostics.iter().map(|d| d.to_string()).collect();
    let warnings = diagnostics.iter().filter(|d| d.is_warning).count();
    let errors = diagnostics.len() - warnings;
    lines.push(format!(
        "{}, {}",
        plural(warnings, "warning"),
        plural(errors, "error")
    ));
    lines
}

/// Diagnostics go to stderr so stdout stays clean for JSON.
pub fn print_diagnostics(diagnostics: &[Diagnostic]) {
    for line in format_diagnostics(diagnostics) {
        eprintln!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{Diagnostics, codes};

    fn nav(json: &str) -> NavigationConfig {
        serde_json::from_str(json).unwrap()
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(1000), "1000");
    }

    #[test]
    fn indent_levels() {
        assert_eq!(indent(0), "");
        assert_eq!(indent(2), "        ");
    }

    #[test]
    fn plural_forms() {
        assert_eq!(plural(0, "page"), "0 pages");
        assert_eq!(plural(1, "page"), "1 page");
        assert_eq!(plural(2, "tab"), "2 tabs");
    }

    #[test]
    fn untitled_container() {
        assert_eq!(container_header(3, "", 1), "003 (untitled) (1 page)");
    }

    // =========================================================================
    // Navigation listing
    // =========================================================================

    #[test]
    fn lists_pages_and_nested_groups() {
        let lines = format_navigation(&nav(
            r#"{ "pages": [
                "index",
                { "group": "Guides", "pages": [
                    "guides/setup",
                    { "group": "Advanced", "pages": ["guides/advanced/tuning"] }
                ] }
            ] }"#,
        ));
        assert_eq!(
            lines,
            vec![
                "Pages",
                "001 index",
                "002 Guides (2 pages)",
                "    001 guides/setup",
                "    002 Advanced (1 page)",
                "        001 guides/advanced/tuning",
                "",
                "3 pages, 2 groups",
            ]
        );
    }

    #[test]
    fn top_level_groups_follow_pages() {
        let lines = format_navigation(&nav(
            r#"{ "pages": ["index"], "groups": [{ "group": "Reference", "pages": ["ref/a"] }] }"#,
        ));
        assert_eq!(lines[1], "001 index");
        assert_eq!(lines[2], "002 Reference (1 page)");
    }

    #[test]
    fn tabs_section() {
        let lines = format_navigation(&nav(
            r#"{ "tabs": [{ "tab": "API", "pages": ["api/index"], "groups": [{ "group": "Users", "pages": ["api/users"] }] }] }"#,
        ));
        assert_eq!(
            lines,
            vec![
                "Tabs",
                "001 API (2 pages)",
                "    001 api/index",
                "    002 Users (1 page)",
                "        001 api/users",
                "",
                "2 pages, 0 groups, 1 tab",
            ]
        );
    }

    #[test]
    fn tab_inside_pages_marked() {
        let lines = format_navigation(&nav(
            r#"{ "pages": ["index", { "tab": "API", "pages": ["api/a"] }] }"#,
        ));
        assert_eq!(
            lines,
            vec![
                "Pages",
                "001 index",
                "002 API (1 page) [tab]",
                "    001 api/a",
                "",
                "2 pages, 0 groups",
            ]
        );
    }

    #[test]
    fn sections_separated_by_blank_line() {
        let lines = format_navigation(&nav(
            r#"{ "pages": ["index"], "anchors": [{ "anchor": "Blog", "pages": ["blog/first"] }] }"#,
        ));
        assert_eq!(lines[0], "Pages");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "Anchors");
        assert_eq!(lines.last().unwrap(), "2 pages, 0 groups, 1 anchor");
    }

    #[test]
    fn empty_navigation_is_just_summary() {
        let lines = format_navigation(&NavigationConfig::default());
        assert_eq!(lines, vec!["0 pages, 0 groups"]);
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    #[test]
    fn no_diagnostics_no_output() {
        assert!(format_diagnostics(&[]).is_empty());
    }

    #[test]
    fn diagnostics_with_counts() {
        let mut diagnostics = Diagnostics::default();
        diagnostics.warning("docs/old.md", codes::LEGACY_EXTENSION, "rename it");
        diagnostics.error("navigation.pages[0]", codes::GROUP_MISSING_NAME, "dropped");
        diagnostics.warning("navigation.groups[1]", codes::GROUP_EMPTY_NAME, "kept");

        let lines = format_diagnostics(diagnostics.as_slice());
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("DOCS_LEGACY_EXTENSION"));
        assert!(lines[1].starts_with("error[NAV_GROUP_MISSING_NAME]"));
        assert_eq!(lines[3], "2 warnings, 1 error");
    }
}
