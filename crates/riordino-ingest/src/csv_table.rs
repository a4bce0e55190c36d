use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::debug;

use riordino_model::RawTable;

/// Column-name prefix left behind by spreadsheet round-trips
/// (index columns exported without a header).
const UNNAMED_PREFIX: &str = "unnamed";

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized.to_lowercase()
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn is_discarded_column(header: &str) -> bool {
    header.is_empty() || header.starts_with(UNNAMED_PREFIX)
}

/// Guess the field delimiter from the header line.
///
/// SME spreadsheet exports commonly use `;` (locales with decimal commas);
/// the winner between `;` and `,` on the first non-empty line decides.
pub fn sniff_delimiter(content: &str) -> u8 {
    let first_line = content
        .lines()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("");
    let semicolons = first_line.matches(';').count();
    let commas = first_line.matches(',').count();
    if semicolons > commas { b';' } else { b',' }
}

/// Read a CSV file into a [`RawTable`].
///
/// The first non-empty row is the header. Headers are trimmed, BOM-stripped
/// and lower-cased; empty or `unnamed*` columns are removed together with
/// their cells. Data rows are padded to the header width, and fully empty
/// rows are skipped.
pub fn read_csv_table(path: &Path) -> Result<RawTable> {
    let content =
        fs::read_to_string(path).with_context(|| format!("read csv: {}", path.display()))?;
    read_csv_str(&content, path)
}

fn read_csv_str(content: &str, path: &Path) -> Result<RawTable> {
    let delimiter = sniff_delimiter(content);
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(content.as_bytes());

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }
    if raw_rows.is_empty() {
        return Ok(RawTable::default());
    }

    let header_row = &raw_rows[0];
    let mut kept_indices = Vec::with_capacity(header_row.len());
    let mut headers = Vec::with_capacity(header_row.len());
    for (index, raw) in header_row.iter().enumerate() {
        let header = normalize_header(raw);
        if is_discarded_column(&header) {
            debug!(column = index, "discarding unnamed column");
            continue;
        }
        kept_indices.push(index);
        headers.push(header);
    }

    let mut table = RawTable::new(headers);
    for record in raw_rows.iter().skip(1) {
        let mut row = Vec::with_capacity(kept_indices.len());
        for &index in &kept_indices {
            let value = record.get(index).map(String::as_str).unwrap_or("");
            row.push(normalize_cell(value));
        }
        table.push_row(row);
    }
    debug!(
        rows = table.len(),
        columns = table.headers.len(),
        delimiter = %(delimiter as char),
        "read csv table"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sniff_delimiter() {
        assert_eq!(sniff_delimiter("a;b;c\n1;2;3"), b';');
        assert_eq!(sniff_delimiter("a,b,c\n1,2,3"), b',');
        // Ties (including no separators at all) fall back to comma
        assert_eq!(sniff_delimiter("articolo"), b',');
        assert_eq!(sniff_delimiter(""), b',');
    }

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("  Articolo "), "articolo");
        assert_eq!(normalize_header("\u{feff}ARTICOLO"), "articolo");
        assert_eq!(normalize_header("Lead  Time   Giorni"), "lead time giorni");
    }

    #[test]
    fn test_discarded_columns() {
        assert!(is_discarded_column(""));
        assert!(is_discarded_column("unnamed: 0"));
        assert!(!is_discarded_column("articolo"));
    }
}
