//! Shared types for the `docs.json` site configuration.
//!
//! The navigation tree is the interesting part: a `pages` array holds page
//! paths and groups interchangeably, so it is modelled as the [`NavNode`] sum
//! type and every traversal matches on it exhaustively. Everything else is
//! plain serde data.
//!
//! ```json
//! {
//!   "name": "Acme Docs",
//!   "theme": "mint",
//!   "navigation": {
//!     "pages": [
//!       "index",
//!       { "group": "Guides", "pages": ["guides/setup", "guides/deploy"] }
//!     ],
//!     "tabs": [{ "tab": "API", "href": "api", "pages": ["api/index"] }]
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Schema URL written into freshly created configurations.
pub const DEFAULT_SCHEMA: &str = "https://mintlify.com/docs.json";
/// Theme used by [`DocsConfig::new_default`].
pub const DEFAULT_THEME: &str = "mint";
/// Primary color used by [`DocsConfig::new_default`].
pub const DEFAULT_PRIMARY_COLOR: &str = "#0D9373";

/// Root of a `docs.json` document.
///
/// Unknown top-level keys are kept in `extra` so a load → save cycle does not
/// lose fields this crate does not model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocsConfig {
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub theme: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Colors::is_empty")]
    pub colors: Colors,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl DocsConfig {
    /// Minimal valid configuration with an empty navigation tree.
    pub fn new_default(name: &str) -> Self {
        Self {
            schema: Some(DEFAULT_SCHEMA.to_string()),
            theme: DEFAULT_THEME.to_string(),
            name: name.to_string(),
            colors: Colors {
                primary: Some(DEFAULT_PRIMARY_COLOR.to_string()),
                ..Colors::default()
            },
            ..Self::default()
        }
    }
}

/// Brand colors. Values are CSS hex strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Colors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark: Option<String>,
}

impl Colors {
    pub fn is_empty(&self) -> bool {
        self.primary.is_none() && self.light.is_none() && self.dark.is_none()
    }
}

/// The navigation tree owned by a [`DocsConfig`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavigationConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pages: Vec<NavNode>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<GroupConfig>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tabs: Vec<TabConfig>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub anchors: Vec<AnchorConfig>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dropdowns: Vec<DropdownConfig>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<LanguageConfig>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub versions: Vec<VersionConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global: Option<GlobalNavigation>,
}

/// One entry of a `pages` array: a page path, a nested tab, or a nested group.
///
/// In JSON a string is a page, an object with a `tab` key is a tab, and any
/// other object is a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavNode {
    Page(String),
    Tab(TabConfig),
    Group(GroupConfig),
}

impl NavNode {
    pub fn page(path: impl Into<String>) -> Self {
        NavNode::Page(path.into())
    }

    pub fn as_group(&self) -> Option<&GroupConfig> {
        match self {
            NavNode::Group(group) => Some(group),
            NavNode::Page(_) | NavNode::Tab(_) => None,
        }
    }

    pub fn as_tab(&self) -> Option<&TabConfig> {
        match self {
            NavNode::Tab(tab) => Some(tab),
            NavNode::Page(_) | NavNode::Group(_) => None,
        }
    }

    pub fn as_page(&self) -> Option<&str> {
        match self {
            NavNode::Page(path) => Some(path),
            NavNode::Group(_) | NavNode::Tab(_) => None,
        }
    }
}

/// A named container of pages.
///
/// `group` distinguishes two states that are easy to conflate:
/// - `None`: the key is missing or `null`. Invalid; dropped when loading.
/// - `Some("")`: an anonymous section. Valid, and each one is its own
///   identity unless empty groups are explicitly combined.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default)]
    pub pages: Vec<NavNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openapi: Option<OpenApiSpec>,
}

impl GroupConfig {
    pub fn named(name: impl Into<String>, pages: Vec<NavNode>) -> Self {
        Self {
            group: Some(name.into()),
            pages,
            ..Self::default()
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.group.as_deref()
    }
}

/// Top-level section, identified by its label or, failing that, its link.
///
/// The `tab` key is required: it is what tells a tab apart from a group
/// inside a `pages` array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TabConfig {
    pub tab: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openapi: Option<OpenApiSpec>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pages: Vec<NavNode>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<GroupConfig>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub anchors: Vec<AnchorConfig>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dropdowns: Vec<DropdownConfig>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<LanguageConfig>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub versions: Vec<VersionConfig>,
}

/// Sidebar anchor. Same identity rule as [`TabConfig`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnchorConfig {
    #[serde(default)]
    pub anchor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openapi: Option<OpenApiSpec>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pages: Vec<NavNode>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<GroupConfig>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tabs: Vec<TabConfig>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dropdowns: Vec<DropdownConfig>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<LanguageConfig>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub versions: Vec<VersionConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DropdownConfig {
    #[serde(default)]
    pub dropdown: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pages: Vec<NavNode>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<GroupConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguageConfig {
    #[serde(default)]
    pub language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pages: Vec<NavNode>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<GroupConfig>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tabs: Vec<TabConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VersionConfig {
    #[serde(default)]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pages: Vec<NavNode>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<GroupConfig>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tabs: Vec<TabConfig>,
}

/// Links shown on every page regardless of the active tab.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalNavigation {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tabs: Vec<TabConfig>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub anchors: Vec<AnchorConfig>,
}

/// An icon given either by name or as a detailed object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Icon {
    Name(String),
    Detailed {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        library: Option<String>,
    },
}

impl Icon {
    pub fn is_empty(&self) -> bool {
        match self {
            Icon::Name(name) | Icon::Detailed { name, .. } => name.trim().is_empty(),
        }
    }
}

/// OpenAPI spec reference: a single URL/path or a list of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OpenApiSpec {
    Single(String),
    Multiple(Vec<String>),
}

impl OpenApiSpec {
    pub fn is_empty(&self) -> bool {
        match self {
            OpenApiSpec::Single(url) => url.trim().is_empty(),
            OpenApiSpec::Multiple(urls) => urls.iter().all(|u| u.trim().is_empty()),
        }
    }
}
