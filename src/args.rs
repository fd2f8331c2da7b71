use clap::{Parser, Subcommand};
use tracing::Level;

pub const DEFAULT_DATABASE: &str = "emstat";
pub const DEFAULT_CLI: &str = "wrangler";
pub const DEFAULT_SITE: &str = "emmr.me";
pub const DEFAULT_WIDTH: u16 = 40;
pub const DEFAULT_RECENT_LIMIT: usize = 20;

#[derive(Parser, Clone, Debug)]
#[command(version, about, long_about = None)]
#[command(next_line_help = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Name of the D1 database
    #[arg(long, short, global = true, default_value = DEFAULT_DATABASE)]
    pub database: String,

    /// Wrangler binary used to run queries
    #[arg(long, global = true, default_value = DEFAULT_CLI)]
    pub cli: String,

    /// Own domain, referrals from it are not counted as traffic sources
    #[arg(long, global = true, default_value = DEFAULT_SITE)]
    pub site: String,

    /// Width of bar charts and plots
    #[arg(long, short, global = true, default_value_t = DEFAULT_WIDTH,
        value_parser = clap::value_parser!(u16).range(1..))]
    pub width: u16,

    /// Disable colored output
    #[clap(long, global = true, action)]
    pub no_color: bool,

    /// Log level
    #[arg(long, global = true, default_value_t = Level::WARN)]
    pub log_level: Level,
}

#[derive(Subcommand, Clone, Debug, PartialEq)]
pub enum Command {
    /// KPIs, top tables and pageview plots
    Dashboard,
    /// Latest raw events with readable timestamps
    Recent {
        /// Number of events to show
        #[arg(long, short, default_value_t = DEFAULT_RECENT_LIMIT)]
        limit: usize,
    },
}

/// Settings shared by the query runner and the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub database: String,
    pub cli: String,
    pub site: String,
    pub width: usize,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        return Self {
            database: DEFAULT_DATABASE.to_string(),
            cli: DEFAULT_CLI.to_string(),
            site: DEFAULT_SITE.to_string(),
            width: DEFAULT_WIDTH.into(),
            color: true,
        };
    }
}

impl Args {
    pub fn new(command: Command) -> Self {
        return Args {
            command,
            database: DEFAULT_DATABASE.to_string(),
            cli: DEFAULT_CLI.to_string(),
            site: DEFAULT_SITE.to_string(),
            width: DEFAULT_WIDTH,
            no_color: true,
            log_level: Level::WARN,
        };
    }

    pub fn config(&self) -> Config {
        return Config {
            database: self.database.clone(),
            cli: self.cli.clone(),
            site: self.site.clone(),
            width: self.width.into(),
            color: !self.no_color,
        };
    }
}
