use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{Datelike, Local};
use comfy_table::Table;
use tracing::info_span;

use riordino_cli::pipeline::{OutputConfig, compute_signals, ingest, normalize_table, output};
use riordino_cli::types::{AnalysisResult, OutputPaths};
use riordino_engine::workdays_in_month;
use riordino_model::{EngineOptions, ReorderError};

use crate::cli::{AnalyzeArgs, OutputFormatArg};
use crate::summary::apply_table_style;

pub fn run_analyze(args: &AnalyzeArgs) -> Result<AnalysisResult> {
    let span = info_span!("analyze", input = %args.input.display());
    let _guard = span.enter();

    let (workdays, period) = resolve_workdays(args)?;
    let table = ingest(&args.input)?;
    let items = normalize_table(&table)?;
    let options = if args.simple_only {
        EngineOptions::simple_only()
    } else {
        EngineOptions::new()
    };
    let (signals, kpis) = compute_signals(&items, workdays, &options)?;

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| default_output_dir(&args.input));
    let outputs = if args.dry_run {
        OutputPaths::default()
    } else {
        let (write_csv, write_json) = match args.format {
            OutputFormatArg::Csv => (true, false),
            OutputFormatArg::Json => (false, true),
            OutputFormatArg::Both => (true, true),
        };
        output(
            &OutputConfig {
                output_dir: output_dir.clone(),
                write_csv,
                write_json,
                source_name: source_name(&args.input),
                workdays,
            },
            &signals,
            &kpis,
        )?
    };

    Ok(AnalysisResult {
        source: args.input.clone(),
        output_dir,
        workdays,
        period,
        signals,
        kpis,
        outputs,
    })
}

/// Print the expected input schema.
pub fn run_columns() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Column", "Required", "Default", "Description"]);
    apply_table_style(&mut table);
    let rows: [(&str, &str, &str, &str); 11] = [
        ("articolo", "yes", "-", "unique article code"),
        ("consumo_mensile", "yes", "-", "monthly consumption, in units"),
        ("lead_time_giorni", "yes", "-", "supplier lead time, in days"),
        ("stock_attuale", "yes", "-", "stock currently on hand"),
        ("criticita", "yes", "-", "bassa / media / alta"),
        ("valore_unitario", "yes", "-", "unit value in euro"),
        ("unita_misura", "no", "pz", "unit of measure (pz, kg, lt, ...)"),
        ("stagionale", "no", "no", "si / no, seasonal demand"),
        ("indice_rotazione", "no", "-", "yearly rotation index"),
        (
            "deviazione_standard",
            "no",
            "-",
            "std dev of monthly consumption; enables the service-level formula",
        ),
        ("livello_servizio", "no", "medio", "basso / medio / alto"),
    ];
    for (column, required, default, description) in rows {
        table.add_row(vec![column, required, default, description]);
    }
    println!("{table}");
    Ok(())
}

fn resolve_workdays(args: &AnalyzeArgs) -> Result<(u32, Option<(i32, u32)>)> {
    if let Some(workdays) = args.workdays {
        if workdays == 0 {
            return Err(ReorderError::InvalidPeriod { workdays: 0 }.into());
        }
        return Ok((workdays, None));
    }
    let today = Local::now().date_naive();
    let year = args.year.unwrap_or_else(|| today.year());
    let month = args.month.unwrap_or_else(|| today.month());
    let workdays = workdays_in_month(year, month)?;
    Ok((workdays, Some((year, month))))
}

fn default_output_dir(input: &Path) -> PathBuf {
    input
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("output")
}

fn source_name(input: &Path) -> String {
    input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string())
}
