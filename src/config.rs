//! Audit settings.
//!
//! Settings come from an optional JSON file and are then overridden by
//! command-line flags. Every field has a default, so `{}` is a valid file.

use crate::error::LoadError;
use crate::model::ViewType;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Naming policy, e.g. `discipline:STR,ARC;not:temp`.
    pub policy: String,
    /// Restricts visibility resolution to 3D views whose name contains this.
    pub keyword: Option<String>,
    /// View kinds to audit; `None` audits every kind.
    pub view_types: Option<Vec<ViewType>>,
    pub parallel: bool,
}

impl AuditConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path_ref = path.as_ref();
        let content = std::fs::read_to_string(path_ref).map_err(|source| LoadError::FileRead {
            path: path_ref.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| LoadError::Json {
            path: path_ref.to_path_buf(),
            source,
        })
    }

    #[must_use]
    pub fn with_policy(mut self, policy: impl Into<String>) -> Self {
        self.policy = policy.into();
        self
    }

    #[must_use]
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    #[must_use]
    pub fn with_view_types(mut self, view_types: Vec<ViewType>) -> Self {
        self.view_types = Some(view_types);
        self
    }

    #[must_use]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
