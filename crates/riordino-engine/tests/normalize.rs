//! Integration tests for the normalizer.

use riordino_engine::{missing_required_columns, normalize, validate_schema};
use riordino_model::{Criticality, RawTable, ReorderError, Seasonality, ServiceLevel};

fn table(headers: &[&str], rows: &[&[&str]]) -> RawTable {
    let mut table = RawTable::new(headers.iter().map(|h| (*h).to_string()).collect());
    for row in rows {
        table.push_row(row.iter().map(|v| (*v).to_string()).collect());
    }
    table
}

const FULL_HEADERS: [&str; 6] = [
    "articolo",
    "consumo_mensile",
    "lead_time_giorni",
    "stock_attuale",
    "criticita",
    "valore_unitario",
];

#[test]
fn missing_criticita_column_is_reported() {
    let table = table(
        &[
            "articolo",
            "consumo_mensile",
            "lead_time_giorni",
            "stock_attuale",
            "valore_unitario",
        ],
        &[],
    );

    assert_eq!(missing_required_columns(&table.headers), vec!["criticita"]);
    let error = validate_schema(&table).expect_err("schema must fail");
    assert!(matches!(&error, ReorderError::MissingColumns(cols) if cols == &["criticita"]));
    assert_eq!(error.to_string(), "missing required columns: criticita");
}

#[test]
fn complete_schema_passes() {
    let table = table(&FULL_HEADERS, &[]);
    assert!(validate_schema(&table).is_ok());
}

#[test]
fn non_numeric_consumption_drops_the_row() {
    let table = table(
        &FULL_HEADERS,
        &[
            &["A001", "abc", "10", "20", "alta", "10.50"],
            &["A002", "50", "20", "40", "media", "5.00"],
        ],
    );

    let items = normalize(&table);

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].articolo, "A002");
}

#[test]
fn only_invalid_rows_yield_empty_output() {
    let table = table(&FULL_HEADERS, &[&["A001", "abc", "10", "20", "alta", "10.50"]]);

    assert!(normalize(&table).is_empty());
}

#[test]
fn optional_fields_get_defaults() {
    let table = table(&FULL_HEADERS, &[&["A001", "100", "10", "20", "alta", "10.50"]]);

    let items = normalize(&table);

    assert_eq!(items.len(), 1);
    let item = &items[0];
    assert_eq!(item.unita_misura, "pz");
    assert_eq!(item.stagionale, Seasonality::No);
    assert_eq!(item.livello_servizio, ServiceLevel::Medio);
    assert_eq!(item.indice_rotazione, None);
    assert_eq!(item.deviazione_standard, None);
}

#[test]
fn categorical_values_are_canonicalized() {
    let headers = [
        "articolo",
        "consumo_mensile",
        "lead_time_giorni",
        "stock_attuale",
        "criticita",
        "valore_unitario",
        "stagionale",
        "livello_servizio",
    ];
    let table = table(
        &headers,
        &[
            &["A001", "100", "10", "20", " ALTO ", "10.50", "sì", "high"],
            &["A002", "50", "20", "40", "urgente", "5.00", "boh", "???"],
        ],
    );

    let items = normalize(&table);

    assert_eq!(items[0].criticita, Criticality::Alta);
    assert_eq!(items[0].stagionale, Seasonality::Si);
    assert_eq!(items[0].livello_servizio, ServiceLevel::Alto);
    // Unrecognized values land on the documented defaults
    assert_eq!(items[1].criticita, Criticality::Media);
    assert_eq!(items[1].stagionale, Seasonality::No);
    assert_eq!(items[1].livello_servizio, ServiceLevel::Medio);
}

#[test]
fn empty_criticita_means_missing_not_default() {
    let table = table(&FULL_HEADERS, &[&["A001", "100", "10", "20", "", "10.50"]]);

    assert!(normalize(&table).is_empty());
}

#[test]
fn negative_numbers_count_as_missing() {
    let table = table(&FULL_HEADERS, &[&["A001", "100", "10", "-20", "alta", "10.50"]]);

    assert!(normalize(&table).is_empty());
}

#[test]
fn garbage_optional_numerics_become_absent() {
    let headers = [
        "articolo",
        "consumo_mensile",
        "lead_time_giorni",
        "stock_attuale",
        "criticita",
        "valore_unitario",
        "deviazione_standard",
        "indice_rotazione",
    ];
    let table = table(
        &headers,
        &[&["A001", "100", "10", "20", "alta", "10.50", "n/a", "-1"]],
    );

    let items = normalize(&table);

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].deviazione_standard, None);
    assert_eq!(items[0].indice_rotazione, None);
}
