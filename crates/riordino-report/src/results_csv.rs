//! Results CSV export.

use std::path::Path;

use anyhow::{Context, Result};
use csv::Writer;

use riordino_model::ReorderSignal;

use crate::money::format_numeric;

/// Output columns, input fields first, derived metrics after.
pub const RESULTS_COLUMNS: [&str; 19] = [
    "articolo",
    "unita_misura",
    "consumo_mensile",
    "lead_time_giorni",
    "stock_attuale",
    "criticita",
    "valore_unitario",
    "stagionale",
    "indice_rotazione",
    "deviazione_standard",
    "livello_servizio",
    "consumo_giornaliero",
    "domanda_lt",
    "scorta_sicurezza",
    "punto_riordino",
    "qty_suggerita",
    "rischio_stockout",
    "valore_ordine_suggerito",
    "capitale_immobilizzato",
];

/// Write the sorted result set to a CSV file, priority order preserved.
pub fn write_results_csv(path: &Path, signals: &[ReorderSignal]) -> Result<()> {
    let mut writer =
        Writer::from_path(path).with_context(|| format!("create csv: {}", path.display()))?;
    writer
        .write_record(RESULTS_COLUMNS)
        .context("write csv header")?;
    for signal in signals {
        writer
            .write_record(signal_record(signal))
            .with_context(|| format!("write csv row: {}", signal.item.articolo))?;
    }
    writer.flush().context("flush csv")?;
    Ok(())
}

fn signal_record(signal: &ReorderSignal) -> Vec<String> {
    let item = &signal.item;
    vec![
        item.articolo.clone(),
        item.unita_misura.clone(),
        format_numeric(item.consumo_mensile),
        format_numeric(item.lead_time_giorni),
        format_numeric(item.stock_attuale),
        item.criticita.to_string(),
        format!("{:.2}", item.valore_unitario),
        item.stagionale.to_string(),
        optional_numeric(item.indice_rotazione),
        optional_numeric(item.deviazione_standard),
        item.livello_servizio.to_string(),
        format_numeric(signal.consumo_giornaliero),
        format_numeric(signal.domanda_lt),
        format_numeric(signal.scorta_sicurezza),
        signal.punto_riordino.to_string(),
        signal.qty_suggerita.to_string(),
        signal.rischio_stockout.to_string(),
        format!("{:.2}", signal.valore_ordine_suggerito),
        format!("{:.2}", signal.capitale_immobilizzato),
    ]
}

fn optional_numeric(value: Option<f64>) -> String {
    value.map(format_numeric).unwrap_or_default()
}
