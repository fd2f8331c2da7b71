use std::{fmt::Display, io::Write};

use chrono::DateTime;

use crate::{
    cleaner::{PathMode, clean_path},
    dashboard::TIMESTAMP_FORMAT,
    queries,
    report::Reporter,
    row::{Row, Value, get},
};

pub const COLUMNS: [&str; 8] = [
    "timestamp",
    "path",
    "utm_source",
    "scroll_pct",
    "duration_s",
    "device_browser",
    "country",
    "city",
];

/// Milliseconds since the epoch, shown in UTC. Anything unreadable is `-`.
#[derive(Debug)]
pub struct FormattedTimestamp(pub Option<i64>);

impl Display for FormattedTimestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0.and_then(DateTime::from_timestamp_millis) {
            Some(ts) => write!(f, "{}", ts.format(TIMESTAMP_FORMAT)),
            None => f.write_str("-"),
        }
    }
}

fn or_blank(value: &Value) -> Value {
    return match value {
        Value::Null => Value::from(""),
        other => other.clone(),
    };
}

/// Milliseconds as seconds with two decimals, exact halves rounded to even.
fn duration_s(value: &Value) -> Value {
    let Some(ms) = value.as_i64() else {
        return Value::from("");
    };
    let (centis, rest) = (ms.div_euclid(10), ms.rem_euclid(10));
    let centis = match rest {
        6.. => centis + 1,
        5 if centis % 2 != 0 => centis + 1,
        _ => centis,
    };
    return Value::F64(centis as f64 / 100.0);
}

/// Turns a raw `analytics` row into the displayed columns.
pub fn display_row(raw: &Row) -> Row {
    let path = get(raw, "path")
        .as_str()
        .map_or_else(String::new, |path| clean_path(path, PathMode::UrlToPath));
    return Row::from([
        (
            "timestamp".to_string(),
            Value::String(FormattedTimestamp(get(raw, "ts").as_i64()).to_string()),
        ),
        ("path".to_string(), Value::String(path)),
        ("utm_source".to_string(), or_blank(get(raw, "utm_source"))),
        ("scroll_pct".to_string(), or_blank(get(raw, "scroll_pct"))),
        ("duration_s".to_string(), duration_s(get(raw, "duration_ms"))),
        ("device_browser".to_string(), or_blank(get(raw, "device_browser"))),
        ("country".to_string(), or_blank(get(raw, "country"))),
        ("city".to_string(), or_blank(get(raw, "city"))),
    ]);
}

pub fn run<W: Write>(reporter: &mut Reporter<W>, limit: usize) -> anyhow::Result<()> {
    let rows: Vec<Row> = reporter
        .run_sql(&queries::recent_events(limit))?
        .iter()
        .map(display_row)
        .collect();
    let out = &mut reporter.renderer;
    out.table(&format!("Latest {limit} events"), &rows, &COLUMNS)?;
    out.flush()?;
    return Ok(());
}
