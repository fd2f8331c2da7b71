use std::io::Write;

use colored::Colorize;

use super::Renderer;

pub const PLOT_HEIGHT: usize = 10;

const POINT: char = '•';
const TRACE: char = '·';
const BLOCK: char = '█';
const EMPTY: char = ' ';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlotKind {
    /// Points joined by a line
    Line,
    Bar,
}

/// Labels of a plot. `subject` names the data in the empty-input message.
#[derive(Clone, Debug)]
pub struct Plot<'a> {
    pub title: &'a str,
    pub x_label: &'a str,
    pub y_label: &'a str,
    pub subject: &'a str,
    pub kind: PlotKind,
}

/// Character grid with the origin in the bottom left corner.
#[derive(Clone, Debug)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<Vec<char>>,
    low: f64,
    high: f64,
}

impl Canvas {
    /// Plots `values` against their index. The y range always includes zero.
    pub fn draw(values: &[f64], kind: PlotKind, width: usize, height: usize) -> Self {
        let width = width.max(1);
        let height = height.max(2);
        let low = values.iter().copied().fold(0.0, f64::min);
        let mut high = values.iter().copied().fold(f64::MIN, f64::max);
        if high <= low {
            high = low + 1.0;
        }
        let mut canvas = Self {
            width,
            height,
            cells: vec![vec![EMPTY; width]; height],
            low,
            high,
        };

        let points: Vec<(usize, usize)> = values
            .iter()
            .enumerate()
            .map(|(index, &value)| (canvas.column(index, values.len()), canvas.row(value)))
            .collect();
        match kind {
            PlotKind::Line => {
                for pair in points.windows(2) {
                    canvas.trace(pair[0], pair[1]);
                }
                for &(x, y) in &points {
                    canvas.set(x, y, POINT);
                }
            }
            PlotKind::Bar => {
                for (&(x, y), &value) in points.iter().zip(values) {
                    if value > low {
                        for level in 0..=y {
                            canvas.set(x, level, BLOCK);
                        }
                    }
                }
            }
        }
        return canvas;
    }

    fn column(&self, index: usize, count: usize) -> usize {
        if count <= 1 {
            return 0;
        }
        return (index * (self.width - 1) + (count - 1) / 2) / (count - 1);
    }

    fn row(&self, value: f64) -> usize {
        let ratio = ((value - self.low) / (self.high - self.low)).clamp(0.0, 1.0);
        return (ratio * (self.height - 1) as f64).round() as usize;
    }

    fn trace(&mut self, (x0, y0): (usize, usize), (x1, y1): (usize, usize)) {
        for x in x0 + 1..x1 {
            let t = (x - x0) as f64 / (x1 - x0) as f64;
            let y = (y0 as f64 + (y1 as f64 - y0 as f64) * t).round() as usize;
            if self.cells[y][x] == EMPTY {
                self.set(x, y, TRACE);
            }
        }
    }

    fn set(&mut self, x: usize, y: usize, cell: char) {
        if x < self.width && y < self.height {
            self.cells[y][x] = cell;
        }
    }

    pub fn low(&self) -> f64 {
        return self.low;
    }

    pub fn high(&self) -> f64 {
        return self.high;
    }

    /// Lines of the grid, top first.
    pub fn lines(&self) -> Vec<String> {
        return self
            .cells
            .iter()
            .rev()
            .map(|row| row.iter().collect())
            .collect();
    }
}

fn axis_label(value: f64) -> String {
    if value.fract() == 0.0 {
        return format!("{value:.0}");
    }
    return format!("{value:.1}");
}

impl<W: Write> Renderer<W> {
    /// Plots `(category, value)` points in order; categories are listed under the plot.
    pub fn plot(&mut self, plot: &Plot, points: &[(String, f64)]) -> std::io::Result<()> {
        if points.is_empty() {
            return writeln!(self.out, "No {} data to plot.", plot.subject);
        }
        let values: Vec<f64> = points.iter().map(|(_, value)| *value).collect();
        let canvas = Canvas::draw(&values, plot.kind, self.width, PLOT_HEIGHT);

        let title = self.paint(plot.title, |s| s.bold());
        writeln!(self.out, "{title}")?;
        let y_label = self.paint(plot.y_label, |s| s.dimmed());
        writeln!(self.out, "{y_label}")?;

        let top = axis_label(canvas.high());
        let bottom = axis_label(canvas.low());
        let label_width = top.len().max(bottom.len());
        let lines = canvas.lines();
        let last = lines.len() - 1;
        for (index, line) in lines.iter().enumerate() {
            let label = match index {
                0 => top.as_str(),
                index if index == last => bottom.as_str(),
                _ => "",
            };
            let line = self.paint(line, |s| s.cyan());
            writeln!(self.out, "{label:>label_width$} │{line}")?;
        }
        writeln!(self.out, "{:>label_width$} └{}", "", "─".repeat(self.width))?;
        writeln!(self.out, "{:>label_width$}  {}", "", plot.x_label)?;

        for (index, (category, _)) in points.iter().enumerate() {
            writeln!(self.out, "{index}: {category}")?;
        }
        return Ok(());
    }
}
