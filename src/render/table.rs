use std::io::Write;

use colored::Colorize;
use itertools::Itertools;

use super::Renderer;
use crate::row::{Row, get};

const GAP: &str = "  ";

/// Display width of every column: the longest of the header and its values.
pub(crate) fn column_widths(rows: &[Row], columns: &[&str]) -> Vec<usize> {
    return columns
        .iter()
        .map(|column| {
            rows.iter()
                .map(|row| get(row, column).to_string().chars().count())
                .fold(column.chars().count(), usize::max)
        })
        .collect();
}

impl<W: Write> Renderer<W> {
    pub fn table(&mut self, title: &str, rows: &[Row], columns: &[&str]) -> std::io::Result<()> {
        self.title(title)?;
        if rows.is_empty() {
            return self.no_data();
        }
        let widths = column_widths(rows, columns);

        let header = columns
            .iter()
            .zip(&widths)
            .map(|(column, &width)| self.paint(&format!("{column:<width$}"), |s| s.cyan()))
            .join(GAP);
        writeln!(self.out, "{header}")?;
        let total = widths.iter().sum::<usize>() + GAP.len() * columns.len().saturating_sub(1);
        writeln!(self.out, "{}", "-".repeat(total))?;

        for row in rows {
            let line = columns
                .iter()
                .zip(&widths)
                .map(|(column, &width)| format!("{:<width$}", get(row, column).to_string()))
                .join(GAP);
            writeln!(self.out, "{line}")?;
        }
        return Ok(());
    }
}
