//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Render with per-column widths sized to the content. Cyrillic
    /// headers make byte lengths useless, so widths are display widths.
    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self
            .headers
            .iter()
            .map(|h| UnicodeWidthStr::width(h.as_str()))
            .collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(UnicodeWidthStr::width(cell.as_str()));
                }
            }
        }

        let mut out = String::new();

        for (i, header) in self.headers.iter().enumerate() {
            out.push_str(&pad_cell(header, widths[i]));
            out.push(' ');
        }
        out.push('\n');

        for (i, _) in self.headers.iter().enumerate() {
            out.push_str(&"-".repeat(widths[i]));
            out.push(' ');
        }
        out.push('\n');

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    out.push_str(&pad_cell(cell, widths[i]));
                    out.push(' ');
                }
            }
            out.push('\n');
        }

        out
    }
}

fn pad_cell(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    let pad = width.saturating_sub(w);
    format!("{}{}", s, " ".repeat(pad))
}
