use super::{GlobalConfiguration, Subcommand};
use anyhow::{Context, Result};
use clap::{Parser, ValueHint};
use llpplot::benchmark::Benchmark;
use llpplot::decoration::Scenario;
use std::path::PathBuf;
use std::process::ExitCode;

/// Produces the plots of the benchmark scenarios.
#[derive(Parser)]
pub struct Opts {
    /// Benchmark scenarios: one, twoA, twoB or three.
    #[arg(required = true)]
    scenarios: Vec<Scenario>,
    /// Directory the data and plot paths of the benchmarks are relative to.
    #[arg(default_value = ".", long, value_hint = ValueHint::DirPath)]
    base_dir: PathBuf,
}

impl Subcommand for Opts {
    fn run(&self, _: &GlobalConfiguration) -> Result<ExitCode> {
        for &scenario in &self.scenarios {
            let plot = Benchmark::new(scenario)
                .run(&self.base_dir)
                .with_context(|| format!("benchmark `{scenario}` failed"))?;

            println!("{}", plot.display());
        }

        Ok(ExitCode::SUCCESS)
    }
}
