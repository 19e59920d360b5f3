//! Workset visibility resolution.
//!
//! For every selected view, each workset of the document gets one
//! [`VisibilityRecord`] holding both the configured setting and whether the
//! workset can actually be seen. When the selection is empty the resolver
//! switches to [`Resolution::NoMatchingViews`] and lists the worksets on their
//! own, so "no views matched" never looks like "no worksets".

pub mod record;
pub mod resolver;

use crate::error::ResolveError;
use crate::model::{View, Workset, WorksetId};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashSet;

pub use record::{RecordView, RecordVisibility, VisibilityRecord, NOT_APPLICABLE, NO_MATCHING_VIEWS};
pub use resolver::{resolve_view, ViewResolution};

#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveOptions {
    /// Resolve views on the rayon pool. Output order is unaffected.
    pub parallel: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "results", rename_all = "snake_case")]
pub enum Resolution {
    /// Per-view records, in view selection order.
    PerView(Vec<ViewResolution>),
    /// No view was selected; one view-less record per workset.
    NoMatchingViews(Vec<VisibilityRecord>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisibilityReport {
    pub resolution: Resolution,
    /// Views or worksets that could not be resolved and were skipped.
    pub failures: Vec<ResolveError>,
}

impl VisibilityReport {
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self.resolution, Resolution::NoMatchingViews(_))
    }

    /// All records in output order, whichever mode produced them.
    pub fn records(&self) -> Box<dyn Iterator<Item = &VisibilityRecord> + '_> {
        match &self.resolution {
            Resolution::PerView(views) => Box::new(views.iter().flat_map(|v| v.records.iter())),
            Resolution::NoMatchingViews(records) => Box::new(records.iter()),
        }
    }

    #[must_use]
    pub fn total_records(&self) -> usize {
        self.records().count()
    }
}

/// Lists worksets without any view, for when the selection came back empty.
#[must_use]
pub fn list_without_views(worksets: &[Workset]) -> Vec<VisibilityRecord> {
    worksets.iter().map(VisibilityRecord::without_view).collect()
}

/// Resolves every workset against every view in `views`.
///
/// Views that fail to resolve are reported in
/// [`VisibilityReport::failures`] and skipped; the rest are still resolved.
/// A workset id that appears twice in `worksets` keeps its first entry and
/// the duplicate is reported as a failure.
#[must_use]
pub fn resolve(views: &[&View], worksets: &[Workset], options: ResolveOptions) -> VisibilityReport {
    let (worksets, mut failures) = dedupe_worksets(worksets);

    if views.is_empty() {
        let records = worksets
            .iter()
            .map(|w| VisibilityRecord::without_view(w))
            .collect();
        return VisibilityReport {
            resolution: Resolution::NoMatchingViews(records),
            failures,
        };
    }

    let outcomes: Vec<Result<ViewResolution, ResolveError>> = if options.parallel {
        views
            .par_iter()
            .map(|view| resolver::resolve_against(view, &worksets))
            .collect()
    } else {
        views
            .iter()
            .map(|view| resolver::resolve_against(view, &worksets))
            .collect()
    };

    let mut resolved = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        match outcome {
            Ok(view) => resolved.push(view),
            Err(err) => failures.push(err),
        }
    }

    VisibilityReport {
        resolution: Resolution::PerView(resolved),
        failures,
    }
}

fn dedupe_worksets(worksets: &[Workset]) -> (Vec<&Workset>, Vec<ResolveError>) {
    let mut seen: HashSet<WorksetId> = HashSet::with_capacity(worksets.len());
    let mut unique = Vec::with_capacity(worksets.len());
    let mut duplicates = Vec::new();

    for workset in worksets {
        if seen.insert(workset.id) {
            unique.push(workset);
        } else {
            duplicates.push(ResolveError::DuplicateWorkset {
                workset_id: workset.id,
                workset_name: workset.name.clone(),
            });
        }
    }

    (unique, duplicates)
}
