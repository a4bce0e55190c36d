use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use riordino_cli::types::AnalysisResult;
use riordino_model::StockoutRisk;
use riordino_report::{format_money, format_numeric};

/// Rows shown in the terminal before deferring to the results file.
const MAX_SUMMARY_ROWS: usize = 20;

pub fn print_summary(result: &AnalysisResult) {
    println!("Input: {}", result.source.display());
    match result.period {
        Some((year, month)) => println!(
            "Period: {year}-{month:02} ({} working days)",
            result.workdays
        ),
        None => println!("Working days: {}", result.workdays),
    }
    if let Some(path) = &result.outputs.results_csv {
        println!("Results CSV: {}", path.display());
    }
    if let Some(path) = &result.outputs.report_json {
        println!("Report: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Articolo"),
        header_cell("UM"),
        header_cell("Stock"),
        header_cell("Domanda LT"),
        header_cell("Scorta sic."),
        header_cell("Punto riordino"),
        header_cell("Qty"),
        header_cell("Rischio"),
        header_cell("Valore ordine"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 2..=6 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    align_column(&mut table, 7, CellAlignment::Center);
    align_column(&mut table, 8, CellAlignment::Right);

    for signal in result.signals.iter().take(MAX_SUMMARY_ROWS) {
        let item = &signal.item;
        table.add_row(vec![
            Cell::new(&item.articolo).add_attribute(Attribute::Bold),
            dim_cell(&item.unita_misura),
            Cell::new(format_numeric(item.stock_attuale)),
            Cell::new(format!("{:.2}", signal.domanda_lt)),
            Cell::new(format!("{:.2}", signal.scorta_sicurezza)),
            Cell::new(signal.punto_riordino),
            qty_cell(signal.qty_suggerita),
            risk_cell(signal.rischio_stockout),
            Cell::new(format_money(signal.valore_ordine_suggerito)),
        ]);
    }
    println!("{table}");
    if result.signals.len() > MAX_SUMMARY_ROWS {
        println!(
            "({} more rows in the results file)",
            result.signals.len() - MAX_SUMMARY_ROWS
        );
    }

    let kpis = &result.kpis;
    println!(
        "Items: {} ({} at high stockout risk)",
        kpis.items, kpis.high_risk_items
    );
    println!(
        "Capitale immobilizzato: {}",
        format_money(kpis.capitale_immobilizzato_totale)
    );
    println!(
        "Valore ordini suggeriti: {}",
        format_money(kpis.valore_ordine_totale)
    );
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn risk_cell(risk: StockoutRisk) -> Cell {
    match risk {
        StockoutRisk::Alto => Cell::new("ALTO")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        StockoutRisk::Medio => Cell::new("MEDIO").fg(Color::Yellow),
        StockoutRisk::Basso => Cell::new("BASSO").fg(Color::Green),
    }
}

fn qty_cell(qty: u64) -> Cell {
    if qty > 0 {
        Cell::new(qty).add_attribute(Attribute::Bold)
    } else {
        dim_cell("0")
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
