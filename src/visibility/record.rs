use crate::model::{ViewId, Visibility, Workset, WorksetId};
use serde::Serialize;

/// Rendered in place of a view id or a visibility when no view applies.
pub const NOT_APPLICABLE: &str = "Not Applicable";
/// Rendered in place of a view name when no view matched the selection.
pub const NO_MATCHING_VIEWS: &str = "No Matching Views";

/// Which view a record belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RecordView {
    Resolved { view_id: ViewId, view_name: String },
    NoMatchingViews,
}

/// Configured and effective visibility of a workset in one view.
///
/// `is_actually_visible` is only ever true when `visibility_setting` is
/// `Visible`; the converse does not hold for views that cannot display content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RecordVisibility {
    Resolved {
        visibility_setting: Visibility,
        is_actually_visible: bool,
    },
    NotApplicable,
}

impl RecordVisibility {
    #[must_use]
    pub fn resolved(visibility_setting: Visibility, view_is_displayable: bool) -> Self {
        Self::Resolved {
            visibility_setting,
            is_actually_visible: visibility_setting.is_visible() && view_is_displayable,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisibilityRecord {
    pub workset_id: WorksetId,
    pub workset_name: String,
    pub view: RecordView,
    pub visibility: RecordVisibility,
    pub is_open: bool,
    pub owner: String,
}

impl VisibilityRecord {
    pub(crate) fn for_view(
        workset: &Workset,
        view_id: ViewId,
        view_name: &str,
        visibility: RecordVisibility,
    ) -> Self {
        Self {
            workset_id: workset.id,
            workset_name: workset.name.clone(),
            view: RecordView::Resolved {
                view_id,
                view_name: view_name.to_string(),
            },
            visibility,
            is_open: workset.is_open,
            owner: workset.owner.clone(),
        }
    }

    pub(crate) fn without_view(workset: &Workset) -> Self {
        Self {
            workset_id: workset.id,
            workset_name: workset.name.clone(),
            view: RecordView::NoMatchingViews,
            visibility: RecordVisibility::NotApplicable,
            is_open: workset.is_open,
            owner: workset.owner.clone(),
        }
    }

    #[must_use]
    pub fn view_id(&self) -> Option<ViewId> {
        match &self.view {
            RecordView::Resolved { view_id, .. } => Some(*view_id),
            RecordView::NoMatchingViews => None,
        }
    }

    #[must_use]
    pub fn view_name(&self) -> &str {
        match &self.view {
            RecordView::Resolved { view_name, .. } => view_name,
            RecordView::NoMatchingViews => NO_MATCHING_VIEWS,
        }
    }

    #[must_use]
    pub fn visibility_setting(&self) -> Option<Visibility> {
        match self.visibility {
            RecordVisibility::Resolved {
                visibility_setting, ..
            } => Some(visibility_setting),
            RecordVisibility::NotApplicable => None,
        }
    }

    #[must_use]
    pub fn is_actually_visible(&self) -> Option<bool> {
        match self.visibility {
            RecordVisibility::Resolved {
                is_actually_visible,
                ..
            } => Some(is_actually_visible),
            RecordVisibility::NotApplicable => None,
        }
    }

    #[must_use]
    pub fn view_id_label(&self) -> String {
        self.view_id()
            .map_or_else(|| NOT_APPLICABLE.to_string(), |id| id.to_string())
    }

    #[must_use]
    pub fn visibility_setting_label(&self) -> String {
        self.visibility_setting()
            .map_or_else(|| NOT_APPLICABLE.to_string(), |v| v.to_string())
    }

    #[must_use]
    pub fn actually_visible_label(&self) -> &'static str {
        match self.is_actually_visible() {
            Some(true) => "Yes",
            Some(false) => "No",
            None => NOT_APPLICABLE,
        }
    }
}
