//! Inventory analysis pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: read the source CSV into a raw table
//! 2. **Validate**: check the required columns are present
//! 3. **Normalize**: coerce types, fill defaults, drop invalid rows
//! 4. **Compute**: per-item reorder metrics, priority sort, KPIs
//! 5. **Output**: write the results CSV and the KPI report
//!
//! Each stage takes the output of the previous stage and returns typed
//! results; any failure aborts the batch cleanly.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use riordino_engine::{compute, compute_kpis, normalize, validate_schema};
use riordino_ingest::read_csv_table;
use riordino_model::{EngineOptions, Item, Kpis, RawTable, ReorderError, ReorderSignal};
use riordino_report::{write_reorder_report_json, write_results_csv};

use crate::types::OutputPaths;

/// Stage 1: read the inventory file.
pub fn ingest(input: &Path) -> Result<RawTable> {
    let span = info_span!("ingest");
    let _guard = span.enter();
    let table = read_csv_table(input)?;
    info!(
        rows = table.len(),
        columns = table.headers.len(),
        "ingested inventory table"
    );
    Ok(table)
}

/// Stages 2-3: schema validation plus normalization.
///
/// Fails with [`ReorderError::MissingColumns`] before touching any row, and
/// with [`ReorderError::NoValidRows`] when normalization drops everything.
pub fn normalize_table(table: &RawTable) -> std::result::Result<Vec<Item>, ReorderError> {
    let span = info_span!("normalize");
    let _guard = span.enter();
    validate_schema(table)?;
    let items = normalize(table);
    if items.is_empty() {
        return Err(ReorderError::NoValidRows);
    }
    info!(
        items = items.len(),
        dropped = table.len() - items.len(),
        "normalized rows"
    );
    Ok(items)
}

/// Stage 4: metrics computation and aggregation.
pub fn compute_signals(
    items: &[Item],
    workdays: u32,
    options: &EngineOptions,
) -> std::result::Result<(Vec<ReorderSignal>, Kpis), ReorderError> {
    let span = info_span!("compute", workdays);
    let _guard = span.enter();
    let signals = compute(items, workdays, options)?;
    let kpis = compute_kpis(&signals);
    info!(
        items = kpis.items,
        high_risk = kpis.high_risk_items,
        "computed reorder signals"
    );
    Ok((signals, kpis))
}

/// Configuration for the output stage.
#[derive(Debug)]
pub struct OutputConfig {
    pub output_dir: PathBuf,
    pub write_csv: bool,
    pub write_json: bool,
    /// Source file name recorded in the JSON report.
    pub source_name: String,
    pub workdays: u32,
}

/// Stage 5: write the requested output files.
pub fn output(
    config: &OutputConfig,
    signals: &[ReorderSignal],
    kpis: &Kpis,
) -> Result<OutputPaths> {
    let span = info_span!("output");
    let _guard = span.enter();
    std::fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("create output dir: {}", config.output_dir.display()))?;
    let mut outputs = OutputPaths::default();
    if config.write_csv {
        let path = config.output_dir.join("reorder_results.csv");
        write_results_csv(&path, signals)?;
        debug!(path = %path.display(), "wrote results csv");
        outputs.results_csv = Some(path);
    }
    if config.write_json {
        let path = write_reorder_report_json(
            &config.output_dir,
            &config.source_name,
            config.workdays,
            kpis,
            signals,
        )?;
        debug!(path = %path.display(), "wrote kpi report");
        outputs.report_json = Some(path);
    }
    Ok(outputs)
}
