use std::process::{Command, Stdio};

use tracing::debug;

use crate::{
    args::Config,
    error::QueryError,
    response::Response,
    row::Row,
};

/// Runs a single read-only SQL statement against the remote database.
#[cfg_attr(test, mockall::automock)]
pub trait QueryRunner {
    /// Returns the raw standard output of a successful run.
    fn execute(&self, sql: &str) -> Result<String, QueryError>;
}

/// `wrangler d1 execute <database> --remote --command <sql> --json`
pub struct WranglerCli {
    program: String,
    database: String,
}

impl WranglerCli {
    pub fn new(config: &Config) -> Self {
        return Self {
            program: config.cli.clone(),
            database: config.database.clone(),
        };
    }

    fn command(&self, sql: &str) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args([
                "d1",
                "execute",
                self.database.as_str(),
                "--remote",
                "--command",
                sql,
                "--json",
            ])
            .stdin(Stdio::null());
        return command;
    }
}

impl QueryRunner for WranglerCli {
    fn execute(&self, sql: &str) -> Result<String, QueryError> {
        debug!("Running on {}: {sql}", self.database);
        // Waits for the child and collects both streams, also when it crashes
        let output = self
            .command(sql)
            .output()
            .map_err(|source| QueryError::Spawn {
                program: self.program.clone(),
                source,
            })?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = match stderr.trim() {
                "" => stdout.trim(),
                stderr => stderr,
            };
            return Err(QueryError::CommandFailed {
                code: output.status.code(),
                message: message.to_string(),
            });
        }
        return Ok(stdout.into_owned());
    }
}

/// Normalizes the CLI output into rows. Empty output is an empty result.
pub fn parse_rows(stdout: &str) -> Result<Vec<Row>, QueryError> {
    let stdout = stdout.trim();
    if stdout.is_empty() {
        return Ok(Vec::new());
    }
    let value: serde_json::Value =
        serde_json::from_str(stdout).map_err(|source| QueryError::MalformedJson {
            raw: stdout.to_string(),
            source,
        })?;
    let response = Response::from(value);
    if !response.is_recognized() {
        debug!("Unrecognized response shape, treating as empty");
    }
    return Ok(response.into_rows());
}

pub fn query(runner: &dyn QueryRunner, sql: &str) -> Result<Vec<Row>, QueryError> {
    let rows = parse_rows(&runner.execute(sql)?)?;
    debug!("Got {} rows", rows.len());
    return Ok(rows);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   \n")]
    fn test_empty_output(#[case] stdout: &str) {
        assert_eq!(parse_rows(stdout).unwrap(), Vec::<Row>::new());
    }

    #[test]
    fn test_malformed_json_keeps_raw_output() {
        let err = parse_rows("  ✘ [ERROR] not json\n").unwrap_err();
        match err {
            QueryError::MalformedJson { raw, .. } => assert_eq!(raw, "✘ [ERROR] not json"),
            other => panic!("Unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_unrecognized_shape_is_empty() {
        assert!(parse_rows(r#"{"success": true}"#).unwrap().is_empty());
    }

    #[test]
    fn test_query_uses_runner() {
        let mut runner = MockQueryRunner::new();
        runner
            .expect_execute()
            .withf(|sql| sql == "SELECT 1")
            .times(1)
            .returning(|_| Ok(r#"[{"results": [{"one": 1}]}]"#.to_string()));
        let rows = query(&runner, "SELECT 1").unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_query_propagates_command_failure() {
        let mut runner = MockQueryRunner::new();
        runner.expect_execute().returning(|_| {
            Err(QueryError::CommandFailed {
                code: Some(1),
                message: "boom".to_string(),
            })
        });
        assert!(matches!(
            query(&runner, "SELECT 1"),
            Err(QueryError::CommandFailed { .. })
        ));
    }

    #[test]
    fn test_wrangler_arguments() {
        let config = Config {
            database: "stats".to_string(),
            ..Default::default()
        };
        let command = WranglerCli::new(&config).command("SELECT 1;");
        let args: Vec<_> = command
            .get_args()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();
        assert_eq!(command.get_program(), "wrangler");
        assert_eq!(
            args,
            vec!["d1", "execute", "stats", "--remote", "--command", "SELECT 1;", "--json"]
        );
    }

    #[test]
    fn test_missing_binary_is_spawn_error() {
        let config = Config {
            cli: "/nonexistent/d1-report-wrangler".to_string(),
            ..Default::default()
        };
        let err = WranglerCli::new(&config).execute("SELECT 1").unwrap_err();
        assert!(matches!(err, QueryError::Spawn { .. }));
    }
}
