//! # BIM Audit
//!
//! An audit rule engine for BIM documents and their links.
//!
//! ## Features
//!
//! - Check view names against a naming policy (discipline codes, literals,
//!   regular expressions, exclusions)
//! - Resolve configured vs actual workset visibility per view
//! - Select views by kind or by keyword
//! - Export results to CSV and JSON
//!
//! ## Example
//!
//! ```
//! use bim_audit::audit::{Auditor, MemorySink};
//! use bim_audit::config::AuditConfig;
//! use bim_audit::model::{DocumentKind, DocumentModel, View, ViewType};
//!
//! let mut document = DocumentModel::new("Tower_ARC", DocumentKind::Host);
//! document.views.push(View::new(1, "L01_ARC_Plan", ViewType::FloorPlan));
//!
//! let config = AuditConfig::default().with_policy("discipline:ARC,STR;not:temp");
//! let auditor = Auditor::new(config)?;
//! let audit = auditor.audit_document(&document, &mut MemorySink::default());
//!
//! assert!(audit.compliance[0].result.is_compliant);
//! assert!(audit.visibility.records().next().is_none());
//! # Ok::<(), bim_audit::error::PolicyError>(())
//! ```

pub mod audit;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod policy;
pub mod selector;
pub mod snapshot;
pub mod telemetry;
pub mod visibility;
