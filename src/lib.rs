//! # docsnav
//!
//! Builds and merges the navigation tree of a documentation site's
//! `docs.json`. Pages come from a hand-written configuration, from a content
//! directory, or both, and end up in one tree with no page listed twice.
//!
//! # Pipeline
//!
//! ```text
//! docs.json ─┐
//!            ├─ load + clean ─→ DocsManager ─→ save ─→ docs.json
//! docs/  ────┘   scan + merge      │
//!                                  └─ apply_url_prefix
//! ```
//!
//! Every mutation goes through [`manager::DocsManager`], which keeps a
//! case-insensitive [`registry::PathRegistry`] of the pages in the tree in
//! step with each edit.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`manager`] | Owns a loaded configuration; load, merge, populate, prefix, save |
//! | [`merge`] | Page-sequence and group merging with global page dedup |
//! | [`reconcile`] | Tab/anchor reconciliation and whole-navigation merges |
//! | [`scan`] | Content directory → navigation tree, with `navigation.json` overrides |
//! | [`registry`] | Reference-counted page path set and the [`registry::PagePaths`] traversal |
//! | [`prefix`] | URL prefix rewriting that keeps the registry consistent |
//! | [`clean`] | Load-time removal of unnamed groups |
//! | [`diagnostics`] | Recoverable problems, reported with a code and a location |
//! | [`settings`] | Layered `docsnav.toml` loading |
//! | [`types`] | Serde types for `docs.json` |
//! | [`naming`] | Group titles and page paths derived from file names |
//! | [`output`] | CLI listing of navigation trees and diagnostics |
//!
//! # Design Decisions
//!
//! ## Pages Are Unique, Groups Are Merged by Name
//!
//! A page path appears at most once in the whole tree, compared without
//! regard to case. Groups with the same exact name are the same group: their
//! pages are merged rather than listed twice. A group with an empty name is
//! an anonymous section and never merges with another unless
//! [`merge::MergeOptions::combine_empty_groups`] asks for it.
//!
//! ## Human Order Wins
//!
//! Merging never reorders what is already there. New material is appended in
//! the order it arrives, so a hand-curated `docs.json` keeps its shape when a
//! directory scan is folded into it.
//!
//! ## Overrides Are Total
//!
//! A `navigation.json` in a content directory describes that directory
//! completely. The scanner stops there; nothing below it is discovered.
//!
//! ## Invalid Groups Never Reach Output
//!
//! A group without a name is dropped at load time with an error diagnostic.
//! Every other recoverable problem is also a diagnostic rather than a failure,
//! so one bad override does not stop a whole scan.

pub mod clean;
pub mod diagnostics;
pub mod manager;
pub mod merge;
pub mod naming;
pub mod output;
pub mod prefix;
pub mod reconcile;
pub mod registry;
pub mod scan;
pub mod settings;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use diagnostics::{Diagnostic, Diagnostics};
pub use manager::{DocsError, DocsManager, PopulateOptions};
pub use merge::MergeOptions;
pub use scan::ScanOptions;
pub use types::{DocsConfig, GroupConfig, NavNode, NavigationConfig};
