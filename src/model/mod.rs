pub mod document;
pub mod view;
pub mod workset;

pub use document::{AuditSnapshot, DocumentKind, DocumentModel};
pub use view::{View, ViewId, ViewType};
pub use workset::{Visibility, Workset, WorksetId};
