//! Command-line interface of `llpplot`.

mod benchmark;
mod helpers;
mod plot;
mod read;
mod styles;

use anyhow::Result;
use clap::{ArgAction, Parser};
use enum_dispatch::enum_dispatch;
use git_version::git_version;
use log::LevelFilter;
use std::process::ExitCode;

#[derive(Parser)]
pub struct GlobalConfiguration {
    /// Print more log messages, repeat for even more.
    #[arg(action = ArgAction::Count, global = true, long, short)]
    pub verbose: u8,
}

impl GlobalConfiguration {
    /// Maximum level of the messages that are logged.
    #[must_use]
    pub const fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// A subcommand of the `llpplot` binary.
#[enum_dispatch]
pub trait Subcommand {
    /// Runs the subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error if the subcommand fails.
    fn run(&self, cfg: &GlobalConfiguration) -> Result<ExitCode>;
}

#[enum_dispatch(Subcommand)]
#[derive(Parser)]
pub enum SubcommandEnum {
    Benchmark(benchmark::Opts),
    Plot(plot::Opts),
    Read(read::Opts),
    Styles(styles::Opts),
}

#[derive(Parser)]
#[command(
    arg_required_else_help = true,
    about,
    disable_help_subcommand = true,
    name = "llpplot",
    version = git_version!(
        args = ["--always", "--dirty", "--long", "--tags"],
        cargo_prefix = "",
        fallback = "unknown"
    )
)]
pub struct Opts {
    #[command(flatten)]
    pub configuration: GlobalConfiguration,
    #[command(subcommand)]
    pub subcommand: SubcommandEnum,
}
