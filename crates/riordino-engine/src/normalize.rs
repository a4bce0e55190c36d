//! Input normalization: schema validation, type coercion, row filtering.

use tracing::debug;

use riordino_model::{
    COL_ARTICOLO, COL_CONSUMO_MENSILE, COL_CRITICITA, COL_DEVIAZIONE_STANDARD,
    COL_INDICE_ROTAZIONE, COL_LEAD_TIME_GIORNI, COL_LIVELLO_SERVIZIO, COL_STAGIONALE,
    COL_STOCK_ATTUALE, COL_UNITA_MISURA, COL_VALORE_UNITARIO, Criticality, DEFAULT_UNIT, Item,
    RawRecord, RawTable, REQUIRED_COLUMNS, ReorderError, Result, Seasonality, ServiceLevel,
};

/// Returns the required columns absent from the input schema, in canonical
/// order. A non-empty result must be treated as a hard validation failure.
pub fn missing_required_columns(headers: &[String]) -> Vec<String> {
    REQUIRED_COLUMNS
        .iter()
        .filter(|required| !headers.iter().any(|header| header == *required))
        .map(|required| (*required).to_string())
        .collect()
}

/// Validate the table schema, failing before any row is touched.
pub fn validate_schema(table: &RawTable) -> Result<()> {
    let missing = missing_required_columns(&table.headers);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ReorderError::MissingColumns(missing))
    }
}

/// Normalize raw records into typed items.
///
/// Rows with a missing or unparseable mandatory value are dropped; optional
/// fields fall back to their documented defaults. An empty result is not an
/// error here — callers decide whether to surface it.
pub fn normalize(table: &RawTable) -> Vec<Item> {
    let mut items = Vec::with_capacity(table.len());
    let mut dropped = 0usize;
    for (index, record) in table.records().enumerate() {
        match normalize_record(&record) {
            Some(item) => items.push(item),
            None => {
                dropped += 1;
                debug!(row = index, "dropping row with missing mandatory value");
            }
        }
    }
    if dropped > 0 {
        debug!(kept = items.len(), dropped, "normalization complete");
    }
    items
}

fn normalize_record(record: &RawRecord<'_>) -> Option<Item> {
    let articolo = non_empty(record.get(COL_ARTICOLO))?.to_string();
    let consumo_mensile = parse_non_negative(record.get(COL_CONSUMO_MENSILE))?;
    let lead_time_giorni = parse_non_negative(record.get(COL_LEAD_TIME_GIORNI))?;
    let stock_attuale = parse_non_negative(record.get(COL_STOCK_ATTUALE))?;
    let criticita = Criticality::canonicalize(record.get(COL_CRITICITA).unwrap_or(""))?;
    let valore_unitario = parse_non_negative(record.get(COL_VALORE_UNITARIO))?;

    let unita_misura = non_empty(record.get(COL_UNITA_MISURA))
        .unwrap_or(DEFAULT_UNIT)
        .to_string();
    let stagionale = Seasonality::canonicalize(record.get(COL_STAGIONALE).unwrap_or(""));
    let livello_servizio =
        ServiceLevel::canonicalize(record.get(COL_LIVELLO_SERVIZIO).unwrap_or(""));
    let indice_rotazione = parse_non_negative(record.get(COL_INDICE_ROTAZIONE));
    let deviazione_standard = parse_non_negative(record.get(COL_DEVIAZIONE_STANDARD));

    Some(Item {
        articolo,
        unita_misura,
        consumo_mensile,
        lead_time_giorni,
        stock_attuale,
        criticita,
        valore_unitario,
        stagionale,
        indice_rotazione,
        deviazione_standard,
        livello_servizio,
    })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    let trimmed = value?.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}

/// Parses a cell as a non-negative finite number.
///
/// Unparseable or negative values become missing, never zero.
fn parse_non_negative(value: Option<&str>) -> Option<f64> {
    let trimmed = non_empty(value)?;
    let parsed = trimmed.parse::<f64>().ok()?;
    (parsed.is_finite() && parsed >= 0.0).then_some(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_non_negative() {
        assert_eq!(parse_non_negative(Some("10.5")), Some(10.5));
        assert_eq!(parse_non_negative(Some(" 0 ")), Some(0.0));
        assert_eq!(parse_non_negative(Some("abc")), None);
        assert_eq!(parse_non_negative(Some("")), None);
        assert_eq!(parse_non_negative(Some("-3")), None);
        assert_eq!(parse_non_negative(None), None);
    }

    #[test]
    fn test_missing_required_columns_order() {
        let headers = vec!["articolo".to_string(), "stock_attuale".to_string()];
        assert_eq!(
            missing_required_columns(&headers),
            vec![
                "consumo_mensile",
                "lead_time_giorni",
                "criticita",
                "valore_unitario"
            ]
        );
    }
}
