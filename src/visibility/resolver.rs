use super::record::{RecordVisibility, VisibilityRecord};
use crate::error::ResolveError;
use crate::model::{View, ViewId, ViewType, Workset};
use serde::Serialize;

/// Every workset of a document as seen through one view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewResolution {
    pub view_id: ViewId,
    pub view_name: String,
    pub view_type: ViewType,
    /// One record per workset, in document workset order.
    pub records: Vec<VisibilityRecord>,
}

impl ViewResolution {
    pub fn visible(&self) -> impl Iterator<Item = &VisibilityRecord> {
        self.records
            .iter()
            .filter(|r| r.is_actually_visible() == Some(true))
    }

    pub fn hidden(&self) -> impl Iterator<Item = &VisibilityRecord> {
        self.records
            .iter()
            .filter(|r| r.is_actually_visible() != Some(true))
    }

    /// Splits records into (actually visible, not actually visible).
    #[must_use]
    pub fn partition(&self) -> (Vec<&VisibilityRecord>, Vec<&VisibilityRecord>) {
        self.records
            .iter()
            .partition(|r| r.is_actually_visible() == Some(true))
    }
}

/// Resolves every workset against one view.
///
/// A workset takes the view's override when there is one and its own default
/// otherwise. It is actually visible only if that setting is `Visible` and
/// the view can display content at all.
///
/// # Errors
///
/// Returns [`ResolveError::UnknownWorkset`] if the view overrides a workset
/// that is not in `worksets`.
pub fn resolve_view(view: &View, worksets: &[Workset]) -> Result<ViewResolution, ResolveError> {
    let refs: Vec<&Workset> = worksets.iter().collect();
    resolve_against(view, &refs)
}

pub(crate) fn resolve_against(
    view: &View,
    worksets: &[&Workset],
) -> Result<ViewResolution, ResolveError> {
    if let Some(unknown) = view
        .per_workset_overrides
        .keys()
        .find(|id| !worksets.iter().any(|w| w.id == **id))
    {
        return Err(ResolveError::UnknownWorkset {
            view_id: view.id,
            view_name: view.name.clone(),
            workset_id: *unknown,
        });
    }

    let records = worksets
        .iter()
        .map(|workset| {
            let setting = view
                .per_workset_overrides
                .get(&workset.id)
                .copied()
                .unwrap_or(workset.default_visibility);

            VisibilityRecord::for_view(
                workset,
                view.id,
                &view.name,
                RecordVisibility::resolved(setting, view.is_displayable),
            )
        })
        .collect();

    Ok(ViewResolution {
        view_id: view.id,
        view_name: view.name.clone(),
        view_type: view.view_type,
        records,
    })
}
