//! Warnings about markup dropped during sanitization.

use std::fmt;

use crate::checker::CheckError;

/// A non-fatal report about something removed from the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// An element (and its subtree) had no schema entry.
    UnsupportedElement { tag: String, source: String },
    /// An attribute failed its checker or has none.
    UnsupportedAttribute {
        attribute: String,
        tag: String,
        source: String,
        reason: CheckError,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Log scrapers depend on these exact shapes, casing included.
        match self {
            Diagnostic::UnsupportedElement { tag, source } => {
                write!(f, "Warning: Unsupported tag \"{tag}\" removed. In {source}")
            }
            Diagnostic::UnsupportedAttribute {
                attribute,
                tag,
                source,
                ..
            } => write!(
                f,
                "WARNING: Unsupported attribute \"{attribute}\" in tag \"{tag}\" removed. In {source}"
            ),
        }
    }
}

/// Ordered list of diagnostics produced by one conversion.
///
/// Every pushed diagnostic is also emitted as a `tracing` warning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        match &diagnostic {
            Diagnostic::UnsupportedAttribute { reason, .. } => {
                tracing::warn!(%reason, "{diagnostic}");
            }
            Diagnostic::UnsupportedElement { .. } => {
                tracing::warn!("{diagnostic}");
            }
        }
        self.items.push(diagnostic);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    /// Rendered warning lines, in emission order.
    pub fn lines(&self) -> Vec<String> {
        self.items.iter().map(ToString::to_string).collect()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}
