use std::io::Write;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::{
    aggregate::Kpis,
    cleaner::{PathMode, clean_paths},
    queries,
    render::{Plot, PlotKind},
    report::Reporter,
    row::{Row, get},
};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

const DAILY_PLOT: Plot<'static> = Plot {
    title: "Daily Pageviews (Last 30 Days)",
    x_label: "Index (0 = oldest)",
    y_label: "Views",
    subject: "daily",
    kind: PlotKind::Line,
};

const MONTHLY_PLOT: Plot<'static> = Plot {
    title: "Monthly Pageviews (All Time)",
    x_label: "Index (oldest → newest)",
    y_label: "Views",
    subject: "monthly",
    kind: PlotKind::Bar,
};

/// Everything the dashboard shows, fetched up front.
#[derive(Clone, Debug, Default)]
pub struct DashboardData {
    pub posts: Vec<Row>,
    pub countries: Vec<Row>,
    pub referrers: Vec<Row>,
    pub google: Vec<Row>,
    /// Newest day first
    pub days: Vec<Row>,
    pub months: Vec<Row>,
}

impl DashboardData {
    pub fn fetch<W: Write>(reporter: &mut Reporter<W>, site: &str) -> std::io::Result<Self> {
        let mut data = Self {
            posts: reporter.run_sql(queries::TOP_POSTS)?,
            countries: reporter.run_sql(queries::TOP_COUNTRIES)?,
            referrers: reporter.run_sql(&queries::top_referrers(site))?,
            google: reporter.run_sql(queries::GOOGLE_CLICKS)?,
            days: reporter.run_sql(queries::DAILY_PAGEVIEWS)?,
            months: reporter.run_sql(queries::MONTHLY_PAGEVIEWS)?,
        };
        clean_paths(&mut data.posts, "path", PathMode::QueryOnly);
        clean_paths(&mut data.google, "path", PathMode::QueryOnly);
        return Ok(data);
    }

    pub fn kpis(&self) -> Kpis {
        return Kpis::compute(&self.days, &self.countries, &self.google, &self.posts);
    }
}

fn points(rows: &[Row], category: &str, value: &str) -> Vec<(String, f64)> {
    return rows
        .iter()
        .map(|row| {
            (
                get(row, category).to_string(),
                get(row, value).as_f64().unwrap_or(0.0),
            )
        })
        .collect();
}

pub fn render<W: Write>(
    reporter: &mut Reporter<W>,
    data: &DashboardData,
    now: DateTime<Utc>,
) -> std::io::Result<()> {
    let kpis = data.kpis();
    let out = &mut reporter.renderer;

    out.banner("=== ANALYTICS DASHBOARD ===")?;

    out.heading("KPI Summary")?;
    out.kpi("Total pageviews (last 30d):", kpis.pageviews_30d)?;
    out.kpi("Unique countries:", kpis.unique_countries)?;
    out.kpi("Google landings (all time):", kpis.google_landings)?;
    out.kpi(
        "Avg engagement (top posts):",
        format!("{:.1}s", kpis.avg_engagement_s),
    )?;
    out.blank()?;

    out.table(
        "Top Posts by Engagement",
        &data.posts,
        &["path", "events", "avg_duration_s", "avg_scroll_pct"],
    )?;
    out.table("Top Countries", &data.countries, &["country", "hits"])?;
    out.table("Top Referrers", &data.referrers, &["referrer", "hits"])?;
    out.table("Google Clicks by Page", &data.google, &["path", "google_clicks"])?;
    out.table(
        "Pageviews by Day (UTC, last 30 days)",
        &data.days,
        &["day", "views"],
    )?;

    out.bar_chart("Top Countries by Hits", &data.countries, "country", "hits")?;

    let mut chronological = data.days.clone();
    chronological.reverse();
    out.line("\n\nDaily Pageviews Plot:\n")?;
    out.plot(&DAILY_PLOT, &points(&chronological, "day", "views"))?;

    out.line("\n\nMonthly Pageviews Plot:\n")?;
    out.plot(&MONTHLY_PLOT, &points(&data.months, "month", "views"))?;

    out.blank()?;
    out.dimmed(&format!("Last updated: {}", now.format(TIMESTAMP_FORMAT)))?;
    out.blank()?;
    return out.flush();
}

pub fn run<W: Write>(reporter: &mut Reporter<W>, site: &str) -> anyhow::Result<()> {
    let data = DashboardData::fetch(reporter, site)?;
    info!(
        "Fetched dashboard: {} posts, {} countries, {} referrers, {} days, {} months",
        data.posts.len(),
        data.countries.len(),
        data.referrers.len(),
        data.days.len(),
        data.months.len()
    );
    render(reporter, &data, Utc::now())?;
    return Ok(());
}
