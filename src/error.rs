use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Unable to run {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
    #[error("SQL error: {message}")]
    CommandFailed { code: Option<i32>, message: String },
    #[error("Failed to parse JSON from wrangler; raw output:\n{raw}")]
    MalformedJson {
        raw: String,
        source: serde_json::Error,
    },
}
