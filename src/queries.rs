//! Read-only statements run by the reports. The `v_*` views live in the D1 database.

pub const TOP_POSTS: &str = "SELECT path, full_url, events, avg_duration_s, avg_scroll_pct \
     FROM v_top_posts_by_duration \
     ORDER BY avg_duration_s DESC \
     LIMIT 20;";

pub const TOP_COUNTRIES: &str = "SELECT country, hits \
     FROM v_top_countries \
     ORDER BY hits DESC \
     LIMIT 20;";

pub const GOOGLE_CLICKS: &str = "SELECT path, full_url, google_clicks \
     FROM v_google_clicks_by_page \
     ORDER BY google_clicks DESC \
     LIMIT 20;";

/// Newest day first.
pub const DAILY_PAGEVIEWS: &str = "SELECT day, views \
     FROM v_pageviews_by_day \
     ORDER BY day DESC \
     LIMIT 30;";

pub const MONTHLY_PAGEVIEWS: &str = "SELECT \
       strftime('%Y-%m', ts/1000, 'unixepoch') AS month, \
       COUNT(*) AS views \
     FROM analytics \
     WHERE type = 'page_view' \
     GROUP BY month \
     ORDER BY month;";

fn quote_like(value: &str) -> String {
    return value.replace('\'', "''");
}

/// Referrers grouped and counted, skipping visits that came from `site` itself.
pub fn top_referrers(site: &str) -> String {
    let site = quote_like(site);
    return format!(
        "SELECT \
           COALESCE(referrer, '(none)') AS referrer, \
           COUNT(*) AS hits \
         FROM analytics \
         WHERE referrer IS NOT NULL \
           AND referrer NOT LIKE '%{site}%' \
         GROUP BY referrer \
         ORDER BY hits DESC \
         LIMIT 20;"
    );
}

/// The latest `limit` events, oldest first.
pub fn recent_events(limit: usize) -> String {
    return format!(
        "SELECT * FROM (\
           SELECT ts, path, utm_source, scroll_pct, duration_ms, device_browser, country, city \
           FROM analytics \
           ORDER BY ts DESC \
           LIMIT {limit}\
         ) \
         ORDER BY ts ASC;"
    );
}
