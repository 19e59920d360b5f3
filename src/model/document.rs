use super::{View, Workset};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentKind {
    Host,
    Linked,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Host => f.write_str("Host"),
            Self::Linked => f.write_str("Linked"),
        }
    }
}

/// Normalized view of one document, as handed over by the collection layer.
///
/// Worksets and views keep the document's enumeration order; every result
/// the engine produces follows that order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentModel {
    pub title: String,
    pub kind: DocumentKind,
    #[serde(default)]
    pub worksets: Vec<Workset>,
    #[serde(default)]
    pub views: Vec<View>,
}

impl DocumentModel {
    #[must_use]
    pub fn new(title: impl Into<String>, kind: DocumentKind) -> Self {
        Self {
            title: title.into(),
            kind,
            worksets: Vec::new(),
            views: Vec::new(),
        }
    }

    #[must_use]
    pub fn total_views(&self) -> usize {
        self.views.len()
    }

    #[must_use]
    pub fn total_worksets(&self) -> usize {
        self.worksets.len()
    }
}

/// Every document of one audit run: the host first, then its links.
///
/// A link that could not be loaded arrives as `null` and is skipped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditSnapshot {
    pub documents: Vec<Option<DocumentModel>>,
}
