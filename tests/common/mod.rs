#![allow(dead_code)]
#[cfg(unix)]
pub mod fake_cli;
pub mod runner;

use d1_report::args::{Args, Command, Config};
use d1_report::executor::QueryRunner;

/// Runs a report into memory and returns what it printed.
pub fn render(command: Command, config: &Config, runner: Box<dyn QueryRunner>) -> String {
    let out = d1_report::run_with(&command, config, runner, Vec::new()).unwrap();
    return String::from_utf8(out).unwrap();
}

/// Default settings with colors off, as built for a bare `Args`.
pub fn plain_config() -> Config {
    return Args::new(Command::Dashboard).config();
}
