use crate::row::{Row, get};

/// Integer sum of a column, each value truncated, missing or null counts as zero.
/// Saturates at the `i64` bounds.
pub fn sum(rows: &[Row], column: &str) -> i64 {
    return rows
        .iter()
        .map(|row| get(row, column).as_i64().unwrap_or(0))
        .fold(0, i64::saturating_add);
}

pub fn count(rows: &[Row]) -> usize {
    return rows.len();
}

/// Arithmetic mean of a column, 0.0 for no rows.
pub fn mean(rows: &[Row], column: &str) -> f64 {
    if rows.is_empty() {
        return 0.0;
    }
    let total: f64 = rows
        .iter()
        .map(|row| get(row, column).as_f64().unwrap_or(0.0))
        .sum();
    return total / rows.len() as f64;
}

#[derive(Clone, Debug, PartialEq)]
pub struct Kpis {
    pub pageviews_30d: i64,
    pub unique_countries: usize,
    pub google_landings: i64,
    pub avg_engagement_s: f64,
}

impl Kpis {
    pub fn compute(days: &[Row], countries: &[Row], google: &[Row], posts: &[Row]) -> Self {
        return Self {
            pageviews_30d: sum(days, "views"),
            unique_countries: count(countries),
            google_landings: sum(google, "google_clicks"),
            avg_engagement_s: mean(posts, "avg_duration_s"),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::Value;
    use pretty_assertions::assert_eq;

    fn rows(column: &str, values: Vec<Value>) -> Vec<Row> {
        return values
            .into_iter()
            .map(|value| Row::from([(column.to_string(), value)]))
            .collect();
    }

    #[test]
    fn test_sum_treats_null_and_missing_as_zero() {
        let mut data = rows("views", vec![Value::I64(3), Value::Null, Value::from("4")]);
        data.push(Row::new());
        assert_eq!(sum(&data, "views"), 7);
    }

    #[test]
    fn test_sum_saturates() {
        let data = rows("views", vec![Value::I64(i64::MAX), Value::I64(1)]);
        assert_eq!(sum(&data, "views"), i64::MAX);
        let data = rows("views", vec![Value::from("1e19"), Value::from("1e19")]);
        assert_eq!(sum(&data, "views"), i64::MAX);
    }

    #[test]
    fn test_mean_of_empty_is_zero() {
        assert_eq!(mean(&[], "avg_duration_s"), 0.0);
    }

    #[test]
    fn test_mean() {
        let data = rows(
            "avg_duration_s",
            vec![Value::F64(10.0), Value::I64(20), Value::Null],
        );
        assert_eq!(mean(&data, "avg_duration_s"), 10.0);
    }

    #[test]
    fn test_kpis() {
        let days = rows("views", vec![Value::I64(10), Value::I64(5)]);
        let countries = rows("country", vec![Value::from("US"), Value::from("DE")]);
        let google = rows("google_clicks", vec![Value::I64(2)]);
        let kpis = Kpis::compute(&days, &countries, &google, &[]);
        assert_eq!(
            kpis,
            Kpis {
                pageviews_30d: 15,
                unique_countries: 2,
                google_landings: 2,
                avg_engagement_s: 0.0,
            }
        );
    }
}
