use clap::Parser;
use color_eyre::Result;
use std::path::PathBuf;
use tracing::Level;

use bim_audit::audit::{AuditReport, Auditor, TracingSink};
use bim_audit::config::AuditConfig;
use bim_audit::export::{export_csv, export_json};
use bim_audit::model::ViewType;
use bim_audit::snapshot::load_snapshot;
use bim_audit::telemetry::init_tracing;

#[derive(Parser, Debug)]
#[command(name = "bim-audit")]
#[command(about = "BIM Audit - view naming compliance and workset visibility")]
#[command(version)]
struct Args {
    /// Path to the document snapshot (JSON)
    #[arg(required = true)]
    snapshot: PathBuf,

    /// Settings file (JSON); flags below override it
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Naming policy, e.g. "discipline:STR,ARC;not:temp"
    #[arg(long)]
    policy: Option<String>,

    /// Only resolve visibility for 3D views whose name contains this
    #[arg(long)]
    keyword: Option<String>,

    /// View kind to audit (repeatable), e.g. ThreeD, FloorPlan, Section
    #[arg(long = "view-type", value_name = "TYPE", value_parser = parse_view_type)]
    view_types: Vec<ViewType>,

    /// Resolve views in parallel
    #[arg(long)]
    parallel: bool,

    /// Export CSV tables into this directory
    #[arg(long, value_name = "DIR")]
    csv_dir: Option<PathBuf>,

    /// Export the full report to JSON
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Emit log lines as JSON
    #[arg(long)]
    log_json: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_view_type(value: &str) -> Result<ViewType, String> {
    let view_type: ViewType = serde_json::from_value(serde_json::Value::String(value.to_string()))
        .map_err(|e| e.to_string())?;

    // Unknown names deserialize to `Other`; on the command line that is a typo.
    if view_type == ViewType::Other && value != "Other" {
        return Err(format!("unknown view type '{value}'"));
    }
    Ok(view_type)
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    init_tracing(
        args.log_json,
        if args.verbose { Level::DEBUG } else { Level::INFO },
    );

    let mut config = match &args.config {
        Some(path) => AuditConfig::from_file(path)?,
        None => AuditConfig::default(),
    };
    if let Some(policy) = args.policy {
        config.policy = policy;
    }
    if let Some(keyword) = args.keyword {
        config.keyword = Some(keyword);
    }
    if !args.view_types.is_empty() {
        config.view_types = Some(args.view_types);
    }
    config.parallel |= args.parallel;

    let auditor = Auditor::new(config)?;
    for rule in auditor.policy().rules() {
        tracing::debug!(kind = %rule.kind(), clause = %rule.raw_text, "policy clause");
    }

    let snapshot = load_snapshot(&args.snapshot)?;
    let report = auditor.audit(&snapshot, &mut TracingSink);

    if let Some(dir) = &args.csv_dir {
        std::fs::create_dir_all(dir)?;
        for path in export_csv(&report, dir)? {
            println!("Exported to CSV: {}", path.display());
        }
    }

    if let Some(json_path) = &args.json {
        export_json(&report, json_path)?;
        println!("Exported to JSON: {}", json_path.display());
    }

    if args.csv_dir.is_none() && args.json.is_none() {
        print_summary(&report);
    }

    Ok(())
}

fn print_summary(report: &AuditReport) {
    for document in &report.documents {
        println!("{} ({})", document.title, document.kind);
        println!(
            "  views checked: {}, non-compliant: {}",
            document.compliance.len(),
            document.non_compliant()
        );
        if document.visibility.is_fallback() {
            println!(
                "  no matching views, {} worksets listed",
                document.visibility.total_records()
            );
        } else {
            println!(
                "  visibility records: {}",
                document.visibility.total_records()
            );
        }
        if !document.visibility.failures.is_empty() {
            println!("  skipped: {}", document.visibility.failures.len());
        }
    }
}
