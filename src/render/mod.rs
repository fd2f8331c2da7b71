//! Text rendering of report sections.

use std::io::Write;

use colored::{ColoredString, Colorize};

use crate::{args::Config, error::QueryError};

mod bar;
mod plot;
mod table;

pub use bar::bar_lengths;
pub use plot::{Canvas, Plot, PlotKind};

pub const NO_DATA: &str = "(no data)";
const KPI_LABEL_WIDTH: usize = 27;

pub struct Renderer<W: Write> {
    out: W,
    color: bool,
    width: usize,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, config: &Config) -> Self {
        return Self {
            out,
            color: config.color,
            width: config.width,
        };
    }

    pub fn into_inner(self) -> W {
        return self.out;
    }

    fn paint(&self, text: &str, style: fn(ColoredString) -> ColoredString) -> String {
        if !self.color {
            return text.to_string();
        }
        return style(text.normal()).to_string();
    }

    pub fn line(&mut self, text: &str) -> std::io::Result<()> {
        return writeln!(self.out, "{text}");
    }

    pub fn blank(&mut self) -> std::io::Result<()> {
        return writeln!(self.out);
    }

    pub fn banner(&mut self, text: &str) -> std::io::Result<()> {
        let text = self.paint(text, |s| s.magenta().bold());
        return writeln!(self.out, "\n{text}\n");
    }

    pub fn heading(&mut self, text: &str) -> std::io::Result<()> {
        let text = self.paint(text, |s| s.bold());
        return writeln!(self.out, "{text}");
    }

    fn title(&mut self, text: &str) -> std::io::Result<()> {
        let text = self.paint(text, |s| s.bold());
        return writeln!(self.out, "\n{text}");
    }

    fn no_data(&mut self) -> std::io::Result<()> {
        let text = self.paint(NO_DATA, |s| s.dimmed());
        return writeln!(self.out, "{text}");
    }

    pub fn dimmed(&mut self, text: &str) -> std::io::Result<()> {
        let text = self.paint(text, |s| s.dimmed());
        return writeln!(self.out, "{text}");
    }

    pub fn kpi(&mut self, label: &str, value: impl std::fmt::Display) -> std::io::Result<()> {
        let label = self.paint(&format!("{label:<width$}", width = KPI_LABEL_WIDTH), |s| s.green());
        return writeln!(self.out, "{label}  {value}");
    }

    /// Prints a failed query the way the user should see it; the section itself renders empty.
    pub fn warning(&mut self, err: &QueryError) -> std::io::Result<()> {
        match err {
            QueryError::MalformedJson { raw, .. } => {
                let headline = self.paint(
                    "Failed to parse JSON from wrangler; raw output:",
                    |s| s.yellow(),
                );
                writeln!(self.out, "{headline}")?;
                return writeln!(self.out, "{raw}");
            }
            QueryError::CommandFailed { message, .. } => {
                let headline = self.paint("SQL error:", |s| s.yellow());
                return writeln!(self.out, "{headline} {message}");
            }
            QueryError::Spawn { .. } => {
                let headline = self.paint("SQL error:", |s| s.yellow());
                return writeln!(self.out, "{headline} {err}");
            }
        }
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        return self.out.flush();
    }
}
