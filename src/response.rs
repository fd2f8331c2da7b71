//! Shapes of the JSON printed by `wrangler d1 execute --json`.
//!
//! The layout changed between wrangler releases, so every known variant is
//! accepted and anything else is treated as an empty result.

use serde_json::{Map, Value as Json};

use crate::row::{Row, row_from_json};

#[derive(Clone, Debug, PartialEq)]
pub enum Response {
    /// `[{"results": [...], "success": true, "meta": {...}}]`, wrangler 3+
    ListOfResultsWrapper(Vec<Json>),
    /// `[{...}, {...}]`
    ListOfRows(Vec<Json>),
    /// `{"results": [...]}`
    MappingWithResults(Vec<Json>),
    /// `{"result": [...]}` or `{"result": {"results": [...]}}`
    MappingWithResult(Vec<Json>),
    Unrecognized,
}

fn take_list(map: &mut Map<String, Json>, key: &str) -> Option<Vec<Json>> {
    return match map.remove(key) {
        Some(Json::Array(items)) => Some(items),
        Some(other) => {
            map.insert(key.to_string(), other);
            None
        }
        None => None,
    };
}

impl From<Json> for Response {
    fn from(value: Json) -> Self {
        match value {
            Json::Array(mut items) => {
                if let Some(Json::Object(first)) = items.first_mut() {
                    if let Some(results) = take_list(first, "results") {
                        return Response::ListOfResultsWrapper(results);
                    }
                }
                if items.iter().all(Json::is_object) {
                    return Response::ListOfRows(items);
                }
                return Response::Unrecognized;
            }
            Json::Object(mut map) => {
                if let Some(results) = take_list(&mut map, "results") {
                    return Response::MappingWithResults(results);
                }
                return match map.remove("result") {
                    Some(Json::Array(items)) => Response::MappingWithResult(items),
                    Some(Json::Object(mut inner)) => match take_list(&mut inner, "results") {
                        Some(results) => Response::MappingWithResult(results),
                        None => Response::Unrecognized,
                    },
                    _ => Response::Unrecognized,
                };
            }
            _ => return Response::Unrecognized,
        }
    }
}

impl Response {
    pub fn is_recognized(&self) -> bool {
        return !matches!(self, Response::Unrecognized);
    }

    /// Rows carried by the response. Entries that are not JSON objects are skipped.
    pub fn into_rows(self) -> Vec<Row> {
        let items = match self {
            Response::ListOfResultsWrapper(items)
            | Response::ListOfRows(items)
            | Response::MappingWithResults(items)
            | Response::MappingWithResult(items) => items,
            Response::Unrecognized => return Vec::new(),
        };
        return items.into_iter().filter_map(row_from_json).collect();
    }
}
