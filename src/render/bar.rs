use std::io::Write;

use super::Renderer;
use crate::row::{Row, get};

const BLOCK: char = '█';
const LABEL_WIDTH: usize = 10;

/// Bar lengths scaled to the largest value, which is never taken below 1.
/// Positive values get at least one block, zero and negative values none.
pub fn bar_lengths(values: &[i64], max_width: usize) -> Vec<usize> {
    let max = values.iter().copied().max().unwrap_or(0).max(1);
    return values
        .iter()
        .map(|&value| {
            if value <= 0 {
                return 0;
            }
            let scaled = (value as f64 / max as f64 * max_width as f64) as usize;
            return scaled.max(1);
        })
        .collect();
}

impl<W: Write> Renderer<W> {
    pub fn bar_chart(
        &mut self,
        title: &str,
        rows: &[Row],
        label_key: &str,
        value_key: &str,
    ) -> std::io::Result<()> {
        self.title(title)?;
        if rows.is_empty() {
            return self.no_data();
        }
        let values: Vec<i64> = rows
            .iter()
            .map(|row| get(row, value_key).as_i64().unwrap_or(0))
            .collect();
        let lengths = bar_lengths(&values, self.width);
        for ((row, value), length) in rows.iter().zip(values).zip(lengths) {
            let label = get(row, label_key).to_string();
            let bar = BLOCK.to_string().repeat(length);
            writeln!(self.out, "{label:>width$} {bar} {value}", width = LABEL_WIDTH)?;
        }
        return Ok(());
    }
}
