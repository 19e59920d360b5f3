use crate::audit::AuditReport;
use crate::error::ExportError;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const VISIBILITY_FILE_NAME: &str = "workset_visibility.csv";
pub const COMPLIANCE_FILE_NAME: &str = "view_compliance.csv";

const LIST_SEPARATOR: &str = "; ";
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

const VISIBILITY_HEADER: [&str; 10] = [
    "Document Type",
    "Document Name",
    "View Name",
    "View Id",
    "Workset Name",
    "Workset Id",
    "Visibility Setting",
    "Actually Visible",
    "Is Open",
    "Owner",
];

const COMPLIANCE_HEADER: [&str; 9] = [
    "Document Type",
    "Document Name",
    "View Name",
    "View Id",
    "View Type",
    "Is Compliant",
    "Matched Patterns",
    "Failed Patterns",
    "Exclusion Violations",
];

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// One row per (view, workset) record, or per workset in fallback mode.
pub fn write_visibility_csv<W: Write>(report: &AuditReport, writer: W) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_writer(writer);

    writer.write_record(VISIBILITY_HEADER)?;

    for document in &report.documents {
        let kind = document.kind.to_string();
        for record in document.visibility.records() {
            writer.write_record([
                kind.as_str(),
                document.title.as_str(),
                record.view_name(),
                record.view_id_label().as_str(),
                record.workset_name.as_str(),
                record.workset_id.to_string().as_str(),
                record.visibility_setting_label().as_str(),
                record.actually_visible_label(),
                yes_no(record.is_open),
                record.owner.as_str(),
            ])?;
        }
    }

    writer.flush().map_err(|e| ExportError::WriteError {
        message: e.to_string(),
    })?;

    Ok(())
}

/// One row per audited view.
pub fn write_compliance_csv<W: Write>(report: &AuditReport, writer: W) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_writer(writer);

    writer.write_record(COMPLIANCE_HEADER)?;

    for document in &report.documents {
        let kind = document.kind.to_string();
        for view in &document.compliance {
            writer.write_record([
                kind.as_str(),
                document.title.as_str(),
                view.view_name.as_str(),
                view.view_id.to_string().as_str(),
                view.view_type.as_str(),
                yes_no(view.result.is_compliant),
                view.result.matched_patterns.join(LIST_SEPARATOR).as_str(),
                view.result.failed_patterns.join(LIST_SEPARATOR).as_str(),
                view.result.exclusion_violations.join(LIST_SEPARATOR).as_str(),
            ])?;
        }
    }

    writer.flush().map_err(|e| ExportError::WriteError {
        message: e.to_string(),
    })?;

    Ok(())
}

/// Writes both tables into `dir`, each with a UTF-8 BOM so spreadsheet tools
/// pick the right encoding. Returns the written paths.
pub fn export_csv<P: AsRef<Path>>(report: &AuditReport, dir: P) -> Result<Vec<PathBuf>, ExportError> {
    let dir = dir.as_ref();

    let visibility_path = dir.join(VISIBILITY_FILE_NAME);
    write_visibility_csv(report, create_with_bom(&visibility_path)?)?;

    let compliance_path = dir.join(COMPLIANCE_FILE_NAME);
    write_compliance_csv(report, create_with_bom(&compliance_path)?)?;

    Ok(vec![visibility_path, compliance_path])
}

fn create_with_bom(path: &Path) -> Result<File, ExportError> {
    let mut file = File::create(path).map_err(|source| ExportError::FileCreate {
        path: path.to_path_buf(),
        source,
    })?;

    file.write_all(UTF8_BOM).map_err(|e| ExportError::WriteError {
        message: e.to_string(),
    })?;

    Ok(file)
}
