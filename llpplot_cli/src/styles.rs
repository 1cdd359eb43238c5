use super::helpers;
use super::{GlobalConfiguration, Subcommand};
use anyhow::Result;
use clap::Parser;
use llpplot::{label, style};
use prettytable::row;
use std::process::ExitCode;

/// Shows the colors, line styles and legend labels of all known detectors.
#[derive(Parser)]
pub struct Opts {}

impl Subcommand for Opts {
    fn run(&self, _: &GlobalConfiguration) -> Result<ExitCode> {
        let mut table = helpers::create_table();
        table.set_titles(row![c => "detector", "color", "line", "label", "legend"]);

        for (name, detector_style) in style::detector_styles() {
            table.add_row(row![
                name,
                detector_style.color,
                detector_style.linestyle,
                detector_style.label,
                label::to_plain(detector_style.label)
            ]);
        }

        table.printstd();

        Ok(ExitCode::SUCCESS)
    }
}
