use super::{GlobalConfiguration, Subcommand};
use anyhow::{Context, Result};
use clap::{Parser, ValueHint};
use llpplot::{data, render};
use std::path::PathBuf;
use std::process::ExitCode;

/// Draws the sensitivity curves of all detectors in a directory.
#[derive(Parser)]
pub struct Opts {
    /// Directory containing the `.dat` files.
    #[arg(value_hint = ValueHint::DirPath)]
    data_dir: PathBuf,
    /// Path of the plot, written as SVG if it ends with `.svg` and as PDF otherwise.
    #[arg(value_hint = ValueHint::FilePath)]
    output: PathBuf,
    /// Decoration of the plot: one, twoA, twoB or three.
    #[arg(long, short)]
    style: Option<String>,
    /// Leave out the given detectors.
    #[arg(long, value_delimiter = ',', value_name = "NAME")]
    exclude: Vec<String>,
}

impl Subcommand for Opts {
    fn run(&self, _: &GlobalConfiguration) -> Result<ExitCode> {
        let mut series = data::load_data(&self.data_dir)?;
        data::exclude(&mut series, &self.exclude);

        render::save(
            &series,
            self.style.as_deref().unwrap_or_default(),
            &self.output,
        )
        .with_context(|| format!("unable to write plot `{}`", self.output.display()))?;

        Ok(ExitCode::SUCCESS)
    }
}
