//! Audit runs over whole documents.
//!
//! [`Auditor`] ties the selector, the naming policy and the visibility
//! resolver together and reports what happened through an [`AuditSink`].
//! Nothing below this module logs; the sink is the only side channel.

use crate::config::AuditConfig;
use crate::error::{PolicyError, ResolveError};
use crate::model::{AuditSnapshot, DocumentKind, DocumentModel, View};
use crate::policy::{Policy, ViewCompliance};
use crate::selector::{select_by_keyword, select_by_type};
use crate::visibility::{resolve, ResolveOptions, VisibilityReport};
use serde::Serialize;

/// Something worth telling the operator about during an audit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditEvent {
    /// A linked document was not loaded and has been skipped.
    DocumentUnavailable { position: usize },
    /// No view matched the selection; worksets are listed without views.
    NoMatchingViews {
        document: String,
        keyword: Option<String>,
    },
    /// A view or workset could not be resolved and has been skipped.
    ItemSkipped {
        document: String,
        error: ResolveError,
    },
    DocumentAudited {
        document: String,
        views_checked: usize,
        non_compliant: usize,
        visibility_records: usize,
    },
}

pub trait AuditSink {
    fn record(&mut self, event: AuditEvent);
}

/// Forwards events to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl AuditSink for TracingSink {
    fn record(&mut self, event: AuditEvent) {
        match event {
            AuditEvent::DocumentUnavailable { position } => {
                tracing::warn!(position, "linked document is not loaded, skipping");
            }
            AuditEvent::NoMatchingViews { document, keyword } => {
                tracing::warn!(
                    document = %document,
                    keyword = keyword.as_deref().unwrap_or(""),
                    "no matching views, listing worksets without views"
                );
            }
            AuditEvent::ItemSkipped { document, error } => {
                tracing::error!(document = %document, error = %error, "skipped item");
            }
            AuditEvent::DocumentAudited {
                document,
                views_checked,
                non_compliant,
                visibility_records,
            } => {
                tracing::info!(
                    document = %document,
                    views_checked,
                    non_compliant,
                    visibility_records,
                    "document audited"
                );
            }
        }
    }
}

/// Keeps every event in memory.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    pub events: Vec<AuditEvent>,
}

impl AuditSink for MemorySink {
    fn record(&mut self, event: AuditEvent) {
        self.events.push(event);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentAudit {
    pub title: String,
    pub kind: DocumentKind,
    pub compliance: Vec<ViewCompliance>,
    pub visibility: VisibilityReport,
}

impl DocumentAudit {
    #[must_use]
    pub fn non_compliant(&self) -> usize {
        self.compliance
            .iter()
            .filter(|c| !c.result.is_compliant)
            .count()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    pub documents: Vec<DocumentAudit>,
}

impl AuditReport {
    #[must_use]
    pub fn total_failures(&self) -> usize {
        self.documents
            .iter()
            .map(|d| d.visibility.failures.len())
            .sum()
    }
}

/// A parsed configuration, ready to audit any number of documents.
#[derive(Debug, Clone)]
pub struct Auditor {
    config: AuditConfig,
    policy: Policy,
}

impl Auditor {
    /// Parses the configured policy up front.
    ///
    /// # Errors
    ///
    /// Returns the [`PolicyError`] of the first malformed clause; nothing is
    /// audited with a partially parsed policy.
    pub fn new(config: AuditConfig) -> Result<Self, PolicyError> {
        let policy = Policy::parse(&config.policy)?;
        Ok(Self { config, policy })
    }

    #[must_use]
    pub fn config(&self) -> &AuditConfig {
        &self.config
    }

    #[must_use]
    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Audits one document.
    ///
    /// Naming compliance covers every view of the configured kinds. Workset
    /// visibility covers the same views, narrowed to matching 3D views when a
    /// keyword is set.
    pub fn audit_document(&self, document: &DocumentModel, sink: &mut dyn AuditSink) -> DocumentAudit {
        let typed: Vec<&View> = select_by_type(&document.views, self.config.view_types.as_deref());

        let compliance: Vec<ViewCompliance> = typed
            .iter()
            .map(|view| self.policy.evaluate_view(view))
            .collect();

        let visibility_views = match self.config.keyword.as_deref() {
            Some(keyword) => select_by_keyword(typed.iter().copied(), keyword),
            None => typed,
        };

        let visibility = resolve(
            &visibility_views,
            &document.worksets,
            ResolveOptions {
                parallel: self.config.parallel,
            },
        );

        if visibility.is_fallback() {
            sink.record(AuditEvent::NoMatchingViews {
                document: document.title.clone(),
                keyword: self.config.keyword.clone(),
            });
        }
        for error in &visibility.failures {
            sink.record(AuditEvent::ItemSkipped {
                document: document.title.clone(),
                error: error.clone(),
            });
        }

        let audit = DocumentAudit {
            title: document.title.clone(),
            kind: document.kind,
            compliance,
            visibility,
        };

        sink.record(AuditEvent::DocumentAudited {
            document: audit.title.clone(),
            views_checked: audit.compliance.len(),
            non_compliant: audit.non_compliant(),
            visibility_records: audit.visibility.total_records(),
        });

        audit
    }

    /// Audits every loaded document of the snapshot, in order.
    pub fn audit(&self, snapshot: &AuditSnapshot, sink: &mut dyn AuditSink) -> AuditReport {
        let mut documents = Vec::with_capacity(snapshot.documents.len());

        for (position, document) in snapshot.documents.iter().enumerate() {
            match document {
                Some(document) => documents.push(self.audit_document(document, sink)),
                None => sink.record(AuditEvent::DocumentUnavailable { position }),
            }
        }

        AuditReport { documents }
    }
}
