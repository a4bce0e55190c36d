//! Versioned JSON report with KPIs and the full result set.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use riordino_model::{Kpis, ReorderSignal};

const REPORT_SCHEMA: &str = "riordino.reorder-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
pub struct ReorderReportPayload<'a> {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub source: String,
    pub workdays: u32,
    pub kpis: &'a Kpis,
    pub signals: &'a [ReorderSignal],
}

/// Write `reorder_report.json` under `output_dir` and return its path.
pub fn write_reorder_report_json(
    output_dir: &Path,
    source: &str,
    workdays: u32,
    kpis: &Kpis,
    signals: &[ReorderSignal],
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create output dir: {}", output_dir.display()))?;
    let output_path = output_dir.join("reorder_report.json");
    let payload = ReorderReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        source: source.to_string(),
        workdays,
        kpis,
        signals,
    };
    let json = serde_json::to_string_pretty(&payload).context("serialize report")?;
    std::fs::write(&output_path, format!("{json}\n"))
        .with_context(|| format!("write report: {}", output_path.display()))?;
    Ok(output_path)
}
