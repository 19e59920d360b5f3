//! Error types for BIM Audit.

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

use crate::model::{ViewId, WorksetId};

/// Errors raised while parsing a naming policy.
///
/// Any of these rejects the whole policy before a single view is evaluated.
#[derive(Debug, Error)]
pub enum PolicyError {
    /// The `regex:` clause does not compile.
    #[error("invalid regular expression in clause '{clause}': {source}")]
    InvalidRegex {
        clause: String,
        source: regex::Error,
    },

    /// A `discipline:` clause was placed inside `not:`.
    #[error("discipline clause is not allowed inside an exclusion: '{clause}'")]
    DisciplineInExclusion { clause: String },

    /// A `not:` clause was placed inside another `not:`.
    #[error("exclusion clauses cannot be nested: '{clause}'")]
    NestedExclusion { clause: String },

    /// A prefixed clause has nothing after its prefix.
    #[error("clause has an empty body: '{clause}'")]
    EmptyClause { clause: String },
}

/// Errors raised while resolving workset visibility for a single view.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolveError {
    /// A view override references a workset the document does not contain.
    #[error("view '{view_name}' ({view_id}) overrides unknown workset {workset_id}")]
    UnknownWorkset {
        view_id: ViewId,
        view_name: String,
        workset_id: WorksetId,
    },

    /// Two worksets in one document share an id; the first one wins.
    #[error("workset {workset_id} ('{workset_name}') appears more than once")]
    DuplicateWorkset {
        workset_id: WorksetId,
        workset_name: String,
    },
}

/// Errors that can occur when loading a snapshot or configuration file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to read the file from disk.
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not valid JSON for the expected shape.
    #[error("invalid JSON in '{path}': {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Errors that can occur when exporting data.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to create the output file.
    #[error("failed to create file '{path}': {source}")]
    FileCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write data to the file.
    #[error("failed to write data: {message}")]
    WriteError { message: String },

    /// Failed to serialize data to JSON.
    #[error("JSON serialization failed: {source}")]
    JsonSerialize {
        #[from]
        source: serde_json::Error,
    },

    /// Failed to write CSV data.
    #[error("CSV write failed: {source}")]
    CsvWrite {
        #[from]
        source: csv::Error,
    },
}
