//! Raw tabular input, before normalization.

use serde::{Deserialize, Serialize};

/// A raw tabular batch: cleaned column names plus string cells.
///
/// Headers are already lower-cased and trimmed by the ingest layer, and
/// every row has exactly `headers.len()` cells.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|header| header == name)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Iterate over rows as column-name -> value mappings.
    pub fn records(&self) -> impl Iterator<Item = RawRecord<'_>> {
        self.rows.iter().map(|row| RawRecord {
            headers: &self.headers,
            values: row,
        })
    }
}

/// One row viewed as an ordered mapping from column name to raw value.
#[derive(Debug, Clone, Copy)]
pub struct RawRecord<'a> {
    headers: &'a [String],
    values: &'a [String],
}

impl<'a> RawRecord<'a> {
    pub fn get(&self, column: &str) -> Option<&'a str> {
        let index = self.headers.iter().position(|header| header == column)?;
        self.values.get(index).map(String::as_str)
    }
}
