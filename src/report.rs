use std::io::Write;

use tracing::warn;

use crate::{
    executor::{self, QueryRunner},
    render::Renderer,
    row::Row,
};

/// Runs queries for a report and degrades every failed query to an empty section.
pub struct Reporter<W: Write> {
    runner: Box<dyn QueryRunner>,
    pub renderer: Renderer<W>,
}

impl<W: Write> Reporter<W> {
    pub fn new(runner: Box<dyn QueryRunner>, renderer: Renderer<W>) -> Self {
        return Self { runner, renderer };
    }

    pub fn into_renderer(self) -> Renderer<W> {
        return self.renderer;
    }

    /// Rows of `sql`, or none after printing a warning when the query fails.
    /// Only errors writing the warning itself are returned.
    pub fn run_sql(&mut self, sql: &str) -> std::io::Result<Vec<Row>> {
        return match executor::query(self.runner.as_ref(), sql) {
            Ok(rows) => Ok(rows),
            Err(err) => {
                warn!("Query failed, showing no data: {err}");
                self.renderer.warning(&err)?;
                Ok(Vec::new())
            }
        };
    }
}
