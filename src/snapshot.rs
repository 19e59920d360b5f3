use crate::error::LoadError;
use crate::model::AuditSnapshot;
use std::path::Path;

/// Loads the normalized document snapshot written by the collection layer.
///
/// The file holds the host document first and its links after it:
///
/// ```json
/// {
///   "documents": [
///     {
///       "title": "Tower_ARC",
///       "kind": "Host",
///       "worksets": [
///         { "id": 1, "name": "Shared Levels and Grids", "owner": "",
///           "is_open": true, "default_visibility": "Visible" }
///       ],
///       "views": [
///         { "id": 100, "name": "Navisworks Export", "view_type": "ThreeD",
///           "per_workset_overrides": { "1": "Hidden" }, "is_displayable": true }
///       ]
///     },
///     null
///   ]
/// }
/// ```
///
/// A `null` entry stands for a link that was not loaded.
///
/// # Errors
///
/// Returns [`LoadError::FileRead`] if the file cannot be read.
/// Returns [`LoadError::Json`] if it does not describe a snapshot.
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<AuditSnapshot, LoadError> {
    let path_ref = path.as_ref();
    let content = std::fs::read_to_string(path_ref).map_err(|source| LoadError::FileRead {
        path: path_ref.to_path_buf(),
        source,
    })?;

    parse_snapshot(&content).map_err(|source| LoadError::Json {
        path: path_ref.to_path_buf(),
        source,
    })
}

pub fn parse_snapshot(content: &str) -> Result<AuditSnapshot, serde_json::Error> {
    serde_json::from_str(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DocumentKind, ViewId, ViewType, Visibility, WorksetId};
    use pretty_assertions::assert_eq;

    const SNAPSHOT: &str = r#"{
        "documents": [
            {
                "title": "Tower_ARC",
                "kind": "Host",
                "worksets": [
                    { "id": 1, "name": "Shared Levels and Grids", "is_open": true,
                      "default_visibility": "Visible" },
                    { "id": 2, "name": "ARC_Facade", "owner": "anowak", "is_open": false,
                      "default_visibility": "Hidden" }
                ],
                "views": [
                    { "id": 100, "name": "Navisworks Export", "view_type": "ThreeD",
                      "per_workset_overrides": { "2": "Visible" } },
                    { "id": 101, "name": "Camera", "view_type": "Perspective",
                      "is_displayable": false }
                ]
            },
            null,
            { "title": "Tower_STR", "kind": "Linked" }
        ]
    }"#;

    #[test]
    fn test_parse_snapshot() {
        let snapshot = parse_snapshot(SNAPSHOT).unwrap();
        assert_eq!(snapshot.documents.len(), 3);
        assert!(snapshot.documents[1].is_none());

        let host = snapshot.documents[0].as_ref().unwrap();
        assert_eq!(host.kind, DocumentKind::Host);
        assert_eq!(host.worksets[0].owner, "");
        assert_eq!(host.worksets[1].default_visibility, Visibility::Hidden);

        let export = &host.views[0];
        assert_eq!(export.id, ViewId(100));
        assert!(export.is_displayable);
        assert_eq!(
            export.per_workset_overrides.get(&WorksetId(2)),
            Some(&Visibility::Visible)
        );

        // Unknown view kinds are kept, not rejected.
        assert_eq!(host.views[1].view_type, ViewType::Other);
        assert!(!host.views[1].is_displayable);

        let link = snapshot.documents[2].as_ref().unwrap();
        assert_eq!(link.total_views(), 0);
        assert_eq!(link.total_worksets(), 0);
    }

    #[test]
    fn test_load_snapshot_missing_file() {
        let err = load_snapshot("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, LoadError::FileRead { .. }));
    }
}
