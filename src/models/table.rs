//! In-memory string table, the engine's only input shape.
//!
//! Every cell is kept as raw text: export files are noisy and the engine
//! does all typed parsing itself.

use std::collections::BTreeMap;

/// A tabular input where every cell is a string.
#[derive(Debug, Clone, Default)]
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

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Push a row, padding or truncating to the header width so that
    /// ragged export lines never panic downstream.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    /// Cell accessor by row and column index. Out-of-range reads return "".
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// All values of one column, in row order.
    pub fn column(&self, col: usize) -> Vec<&str> {
        self.rows
            .iter()
            .map(|r| r.get(col).map(String::as_str).unwrap_or(""))
            .collect()
    }

    /// Merge another table into this one by header name, the way the host
    /// concatenates several uploaded export files: the result holds the
    /// union of columns and missing cells stay blank.
    pub fn merge(&mut self, other: RawTable) {
        let mut index: BTreeMap<String, usize> = BTreeMap::new();
        for (i, h) in self.headers.iter().enumerate() {
            index.insert(h.clone(), i);
        }
        let mut mapping = Vec::with_capacity(other.headers.len());
        for h in &other.headers {
            let idx = match index.get(h).copied() {
                Some(i) => i,
                None => {
                    self.headers.push(h.clone());
                    for row in &mut self.rows {
                        row.push(String::new());
                    }
                    let i = self.headers.len() - 1;
                    index.insert(h.clone(), i);
                    i
                }
            };
            mapping.push(idx);
        }
        for row in other.rows {
            let mut merged = vec![String::new(); self.headers.len()];
            for (src, value) in row.into_iter().enumerate() {
                if let Some(&dst) = mapping.get(src) {
                    merged[dst] = value;
                }
            }
            self.rows.push(merged);
        }
    }
}
