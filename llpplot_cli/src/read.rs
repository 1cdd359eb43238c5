use super::helpers;
use super::{GlobalConfiguration, Subcommand};
use anyhow::{Result, bail};
use clap::{Parser, ValueHint};
use itertools::Itertools;
use llpplot::{data, label};
use prettytable::{Row, cell};
use std::path::PathBuf;
use std::process::ExitCode;

/// Shows the sensitivity curves found in a directory.
#[derive(Parser)]
pub struct Opts {
    /// Directory containing the `.dat` files.
    #[arg(value_hint = ValueHint::DirPath)]
    data_dir: PathBuf,
    /// Print the data of a single detector instead of the overview.
    #[arg(long, value_name = "NAME")]
    detector: Option<String>,
}

impl Subcommand for Opts {
    fn run(&self, _: &GlobalConfiguration) -> Result<ExitCode> {
        let series = data::load_data(&self.data_dir)?;

        if let Some(name) = &self.detector {
            let Some(series) = series.get(name) else {
                bail!(
                    "no data for detector `{name}` in `{}`, available: {}",
                    self.data_dir.display(),
                    series.keys().join(", ")
                );
            };

            print!("{}", series.to_dat());

            return Ok(ExitCode::SUCCESS);
        }

        let mut table = helpers::create_table();
        let mut titles = Row::empty();

        for title in ["detector", "rows", "ctau min", "ctau max", "min", "max", "label"] {
            titles.add_cell(cell!(c->title));
        }

        table.set_titles(titles);

        for (name, series) in &series {
            let (x_min, x_max) = series.x_range();
            let (y_min, y_max) = series.y_range();

            let row = table.add_empty_row();
            row.add_cell(cell!(l->name));
            row.add_cell(cell!(r->series.points().len()));
            row.add_cell(cell!(r->helpers::format_number(x_min)));
            row.add_cell(cell!(r->helpers::format_number(x_max)));
            row.add_cell(cell!(r->helpers::format_number(y_min)));
            row.add_cell(cell!(r->helpers::format_number(y_max)));
            row.add_cell(cell!(l->label::to_plain(series.style().label)));
        }

        table.printstd();

        Ok(ExitCode::SUCCESS)
    }
}
