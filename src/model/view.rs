use super::{Visibility, WorksetId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewId(pub i64);

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of view, named after the host application's view types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ViewType {
    ThreeD,
    FloorPlan,
    CeilingPlan,
    EngineeringPlan,
    AreaPlan,
    Section,
    Elevation,
    Detail,
    DraftingView,
    Legend,
    Schedule,
    DrawingSheet,
    Walkthrough,
    Rendering,
    #[serde(other)]
    Other,
}

impl ViewType {
    #[must_use]
    pub fn is_3d(self) -> bool {
        self == Self::ThreeD
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ThreeD => "ThreeD",
            Self::FloorPlan => "FloorPlan",
            Self::CeilingPlan => "CeilingPlan",
            Self::EngineeringPlan => "EngineeringPlan",
            Self::AreaPlan => "AreaPlan",
            Self::Section => "Section",
            Self::Elevation => "Elevation",
            Self::Detail => "Detail",
            Self::DraftingView => "DraftingView",
            Self::Legend => "Legend",
            Self::Schedule => "Schedule",
            Self::DrawingSheet => "DrawingSheet",
            Self::Walkthrough => "Walkthrough",
            Self::Rendering => "Rendering",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct View {
    pub id: ViewId,
    pub name: String,
    pub view_type: ViewType,
    /// Explicit per-view settings. A missing entry means "use the workset default".
    #[serde(default)]
    pub per_workset_overrides: BTreeMap<WorksetId, Visibility>,
    #[serde(default = "default_displayable")]
    pub is_displayable: bool,
}

fn default_displayable() -> bool {
    true
}

impl View {
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>, view_type: ViewType) -> Self {
        Self {
            id: ViewId(id),
            name: name.into(),
            view_type,
            per_workset_overrides: BTreeMap::new(),
            is_displayable: true,
        }
    }

    #[must_use]
    pub fn with_override(mut self, workset_id: WorksetId, visibility: Visibility) -> Self {
        self.per_workset_overrides.insert(workset_id, visibility);
        self
    }

    #[must_use]
    pub fn displayable(mut self, is_displayable: bool) -> Self {
        self.is_displayable = is_displayable;
        self
    }
}
