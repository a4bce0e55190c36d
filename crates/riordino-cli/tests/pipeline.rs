//! End-to-end tests for the analysis pipeline stages.

use std::fs;

use riordino_cli::pipeline::{OutputConfig, compute_signals, ingest, normalize_table, output};
use riordino_model::{EngineOptions, ReorderError, StockoutRisk};
use tempfile::tempdir;

const TEMPLATE_SAMPLE: &str = "\
articolo,consumo_mensile,lead_time_giorni,stock_attuale,criticita,valore_unitario,unita_misura\n\
A001,100,10,20,alta,10.50,pz\n\
A002,50,20,40,media,5.00,pz\n\
A003,200,5,10,bassa,15.00,pz\n";

#[test]
fn full_run_produces_sorted_outputs() {
    let dir = tempdir().expect("temp dir");
    let input = dir.path().join("magazzino.csv");
    fs::write(&input, TEMPLATE_SAMPLE).expect("write input");

    let table = ingest(&input).expect("ingest");
    let items = normalize_table(&table).expect("normalize");
    assert_eq!(items.len(), 3);

    let (signals, kpis) =
        compute_signals(&items, 22, &EngineOptions::default()).expect("compute");
    // All three template rows run short within their lead time
    assert!(
        signals
            .iter()
            .all(|signal| signal.rischio_stockout == StockoutRisk::Alto)
    );
    assert_eq!(kpis.items, 3);
    assert_eq!(kpis.high_risk_items, 3);

    let output_dir = dir.path().join("output");
    let outputs = output(
        &OutputConfig {
            output_dir: output_dir.clone(),
            write_csv: true,
            write_json: true,
            source_name: "magazzino.csv".to_string(),
            workdays: 22,
        },
        &signals,
        &kpis,
    )
    .expect("output");

    let csv_path = outputs.results_csv.expect("csv path");
    let json_path = outputs.report_json.expect("json path");
    assert!(csv_path.exists());
    assert!(json_path.exists());

    // Priority order: equal risk sorts by unit value descending
    let csv_content = fs::read_to_string(&csv_path).expect("read csv");
    let articles: Vec<&str> = csv_content
        .lines()
        .skip(1)
        .map(|line| line.split(',').next().unwrap())
        .collect();
    assert_eq!(articles, vec!["A003", "A001", "A002"]);

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).expect("read json"))
            .expect("parse json");
    assert_eq!(report["workdays"], 22);
    assert_eq!(report["kpis"]["items"], 3);
}

#[test]
fn missing_required_column_halts_before_normalization() {
    let dir = tempdir().expect("temp dir");
    let input = dir.path().join("magazzino.csv");
    fs::write(
        &input,
        "articolo,consumo_mensile,lead_time_giorni,stock_attuale,valore_unitario\n\
         A001,100,10,20,10.50\n",
    )
    .expect("write input");

    let table = ingest(&input).expect("ingest");
    let error = normalize_table(&table).expect_err("schema must fail");

    assert!(matches!(&error, ReorderError::MissingColumns(cols) if cols == &["criticita"]));
}

#[test]
fn unparseable_rows_surface_as_empty_result() {
    let dir = tempdir().expect("temp dir");
    let input = dir.path().join("magazzino.csv");
    fs::write(
        &input,
        "articolo,consumo_mensile,lead_time_giorni,stock_attuale,criticita,valore_unitario\n\
         A001,abc,10,20,alta,10.50\n",
    )
    .expect("write input");

    let table = ingest(&input).expect("ingest");
    let error = normalize_table(&table).expect_err("empty result must fail");

    assert!(matches!(error, ReorderError::NoValidRows));
}

#[test]
fn semicolon_export_works_end_to_end() {
    let dir = tempdir().expect("temp dir");
    let input = dir.path().join("magazzino.csv");
    fs::write(
        &input,
        "articolo;consumo_mensile;lead_time_giorni;stock_attuale;criticita;valore_unitario\n\
         A001;100;10;20;alta;10.50\n",
    )
    .expect("write input");

    let table = ingest(&input).expect("ingest");
    let items = normalize_table(&table).expect("normalize");
    let (signals, _) = compute_signals(&items, 22, &EngineOptions::default()).expect("compute");

    assert_eq!(signals[0].punto_riordino, 69);
    assert_eq!(signals[0].qty_suggerita, 49);
}
