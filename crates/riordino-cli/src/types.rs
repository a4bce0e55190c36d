use std::path::PathBuf;

use riordino_model::{Kpis, ReorderSignal};

/// Files produced by the output stage.
#[derive(Debug, Clone, Default)]
pub struct OutputPaths {
    pub results_csv: Option<PathBuf>,
    pub report_json: Option<PathBuf>,
}

/// Everything one `analyze` run produced.
#[derive(Debug)]
pub struct AnalysisResult {
    pub source: PathBuf,
    pub output_dir: PathBuf,
    /// Business days used for the daily-consumption estimate.
    pub workdays: u32,
    /// The (year, month) the workdays were derived from, when not given
    /// explicitly.
    pub period: Option<(i32, u32)>,
    pub signals: Vec<ReorderSignal>,
    pub kpis: Kpis,
    pub outputs: OutputPaths,
}
