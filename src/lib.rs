pub mod aggregate;
pub mod args;
pub mod cleaner;
pub mod dashboard;
pub mod error;
pub mod executor;
pub mod queries;
pub mod recent;
pub mod render;
pub mod report;
pub mod response;
pub mod row;

use std::io::Write;

use args::{Args, Command, Config};
use executor::{QueryRunner, WranglerCli};
use render::Renderer;
use report::Reporter;

/// Runs one report with the given query runner, writing everything to `out`.
pub fn run_with<W: Write>(
    command: &Command,
    config: &Config,
    runner: Box<dyn QueryRunner>,
    out: W,
) -> anyhow::Result<W> {
    let mut reporter = Reporter::new(runner, Renderer::new(out, config));
    match command {
        Command::Dashboard => dashboard::run(&mut reporter, &config.site)?,
        Command::Recent { limit } => recent::run(&mut reporter, *limit)?,
    }
    return Ok(reporter.into_renderer().into_inner());
}

pub fn run(args: Args) -> anyhow::Result<()> {
    let config = args.config();
    if !config.color {
        colored::control::set_override(false);
    }
    let runner = Box::new(WranglerCli::new(&config));
    run_with(&args.command, &config, runner, std::io::stdout().lock())?;
    return Ok(());
}
