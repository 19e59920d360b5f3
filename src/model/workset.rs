use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorksetId(pub i64);

impl fmt::Display for WorksetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Configured visibility of a workset, either globally or inside one view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Visibility {
    Visible,
    Hidden,
}

impl Visibility {
    #[must_use]
    pub fn is_visible(self) -> bool {
        self == Self::Visible
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Visible => f.write_str("Visible"),
            Self::Hidden => f.write_str("Hidden"),
        }
    }
}

/// A named partition of model elements.
///
/// `is_open` is session state (loaded for editing) and has nothing to do
/// with visibility. An empty `owner` means nobody has it borrowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workset {
    pub id: WorksetId,
    pub name: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub is_open: bool,
    pub default_visibility: Visibility,
}
