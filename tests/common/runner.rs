use d1_report::{error::QueryError, executor::QueryRunner};

/// Answers queries from a fixed table: the first entry whose needle occurs in the SQL wins.
pub struct StaticRunner {
    responses: Vec<(&'static str, String)>,
    fallback: String,
}

impl StaticRunner {
    pub fn new(fallback: &str) -> Self {
        return Self {
            responses: Vec::new(),
            fallback: fallback.to_string(),
        };
    }

    pub fn with(mut self, needle: &'static str, stdout: &str) -> Self {
        self.responses.push((needle, stdout.to_string()));
        return self;
    }
}

impl QueryRunner for StaticRunner {
    fn execute(&self, sql: &str) -> Result<String, QueryError> {
        let stdout = self
            .responses
            .iter()
            .find(|(needle, _)| sql.contains(needle))
            .map_or(&self.fallback, |(_, stdout)| stdout);
        return Ok(stdout.clone());
    }
}
