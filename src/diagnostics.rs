//! Diagnostics channel for recoverable anomalies.
//!
//! Fatal problems (no configuration loaded, missing directory, malformed
//! `docs.json`) are returned as errors. Everything the operation can recover
//! from is recorded here instead and the operation continues with its
//! fallback. The list is append-only and keeps insertion order.

use serde::Serialize;
use std::fmt;

/// Diagnostic codes emitted by this crate.
pub mod codes {
    /// `navigation.json` could not be read or parsed. Automatic discovery is used.
    pub const OVERRIDE_PARSE: &str = "NAV_OVERRIDE_PARSE";
    /// `navigation.json` parsed but does not name its group.
    pub const OVERRIDE_INVALID: &str = "NAV_OVERRIDE_INVALID";
    /// A `.md` file sits where `.mdx` content is expected. Excluded.
    pub const LEGACY_EXTENSION: &str = "DOCS_LEGACY_EXTENSION";
    /// A group without a name. Dropped with its pages.
    pub const GROUP_MISSING_NAME: &str = "NAV_GROUP_MISSING_NAME";
    /// A group with an empty name. Kept as an anonymous section.
    pub const GROUP_EMPTY_NAME: &str = "NAV_GROUP_EMPTY_NAME";
    pub const CONFIG_MISSING_NAME: &str = "CONFIG_MISSING_NAME";
    pub const CONFIG_INVALID_COLOR: &str = "CONFIG_INVALID_COLOR";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// File path or navigation breadcrumb (`navigation.tabs[0].groups[2]`).
    pub location: String,
    pub code: &'static str,
    pub message: String,
    pub is_warning: bool,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = if self.is_warning { "warning" } else { "error" };
        write!(
            f,
            "{}[{}] {}: {}",
            severity, self.code, self.location, self.message
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn warning(
        &mut self,
        location: impl Into<String>,
        code: &'static str,
        message: impl Into<String>,
    ) {
        self.push(location.into(), code, message.into(), true);
    }

    pub fn error(
        &mut self,
        location: impl Into<String>,
        code: &'static str,
        message: impl Into<String>,
    ) {
        self.push(location.into(), code, message.into(), false);
    }

    fn push(&mut self, location: String, code: &'static str, message: String, is_warning: bool) {
        tracing::debug!(%location, code, %message, is_warning, "diagnostic recorded");
        self.items.push(Diagnostic {
            location,
            code,
            message,
            is_warning,
        });
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.items.extend(other.items);
    }

    pub fn has_errors(&self) -> bool {
        self.items.iter().any(|d| !d.is_warning)
    }

    pub fn with_code(&self, code: &str) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter().filter(move |d| d.code == code)
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}
