//! Table and JSON rendering of command results.

use serde::Serialize;

use crate::config::OutputFormat;
use crate::Result;

/// Box-drawn text table.
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates a table with the given column headers.
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row; missing cells render empty, extra cells are dropped.
    pub fn add_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row: Vec<String> = cells.into_iter().map(Into::into).collect();
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Renders the table, one line per row, with a trailing newline.
    pub fn render(&self) -> String {
        let widths: Vec<usize> = (0..self.headers.len())
            .map(|col| {
                self.rows
                    .iter()
                    .map(|row| row[col].chars().count())
                    .chain(std::iter::once(self.headers[col].chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let border = |left: &str, mid: &str, right: &str| {
            let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
            format!("{}{}{}\n", left, segments.join(mid), right)
        };
        let line = |cells: &[String]| {
            let padded: Vec<String> = cells
                .iter()
                .zip(widths.iter())
                .map(|(cell, w)| format!(" {}{} ", cell, " ".repeat(w - cell.chars().count())))
                .collect();
            format!("│{}│\n", padded.join("│"))
        };

        let mut out = border("┌", "┬", "┐");
        out.push_str(&line(&self.headers));
        out.push_str(&border("├", "┼", "┤"));
        for row in &self.rows {
            out.push_str(&line(row));
        }
        out.push_str(&border("└", "┴", "┘"));
        out
    }
}

/// Formats a number with four decimals.
pub fn num(value: f64) -> String {
    format!("{:.4}", value)
}

/// Renders `report` as pretty JSON, or as text via `table` otherwise.
pub fn render<T, F>(report: &T, format: OutputFormat, table: F) -> Result<String>
where
    T: Serialize,
    F: FnOnce(&T) -> String,
{
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)? + "\n"),
        OutputFormat::Table => Ok(table(report)),
    }
}
