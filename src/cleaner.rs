use crate::row::{Row, Value};

/// How much of a recorded path survives cleaning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathMode {
    /// Drop the `?query` suffix only.
    QueryOnly,
    /// Also collapse full `http(s)://` URLs to their path.
    UrlToPath,
}

pub fn strip_query(path: &str) -> &str {
    return path.split_once('?').map_or(path, |(path, _)| path);
}

/// Path component of an `http(s)://` URL, taken verbatim: no percent-decoding
/// and no dot-segment resolution. `;params` on the last segment are dropped.
fn url_path(url: &str) -> &str {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    let rest = rest.find(['/', '?', '#']).map_or("", |end| &rest[end..]);
    let path = rest.find(['?', '#']).map_or(rest, |end| &rest[..end]);
    let last_segment = path.rfind('/').unwrap_or(0);
    if path[last_segment..].contains(';') {
        if let Some(end) = path.find(';') {
            return &path[..end];
        }
    }
    return path;
}

pub fn clean_path(path: &str, mode: PathMode) -> String {
    if mode == PathMode::UrlToPath && (path.starts_with("http://") || path.starts_with("https://"))
    {
        let path = url_path(path);
        if path.is_empty() {
            return "/".to_string();
        }
        return path.to_string();
    }
    return strip_query(path).to_string();
}

/// Cleans `key` of every row in place. Missing and non-string values are left as is.
pub fn clean_paths(rows: &mut [Row], key: &str, mode: PathMode) {
    for row in rows {
        if let Some(Value::String(path)) = row.get_mut(key) {
            *path = clean_path(path, mode);
        }
    }
}
