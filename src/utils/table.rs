//! Table rendering utilities for CLI outputs.

use crate::utils::formatting::{pad_left, pad_right};
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub right_align: bool,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    pub separator_char: String,
}

impl Table {
    pub fn new(columns: Vec<Column>, separator_char: &str) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            separator_char: separator_char.to_string(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Column widths derived from the widest cell (header included).
    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .columns
            .iter()
            .map(|c| UnicodeWidthStr::width(c.header.as_str()))
            .collect();

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                let w = UnicodeWidthStr::width(cell.as_str());
                if w > widths[i] {
                    widths[i] = w;
                }
            }
        }

        widths
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        for (col, w) in self.columns.iter().zip(&widths) {
            out.push_str(&pad_right(&col.header, *w));
            out.push(' ');
        }
        out.push('\n');

        // Separator line
        let total: usize = widths.iter().sum::<usize>() + widths.len();
        out.push_str(&self.separator_char.repeat(total));
        out.push('\n');

        // Rows
        for row in &self.rows {
            for ((col, cell), w) in self.columns.iter().zip(row).zip(&widths) {
                if col.right_align {
                    out.push_str(&pad_left(cell, *w));
                } else {
                    out.push_str(&pad_right(cell, *w));
                }
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}
