//! The fixed pipelines producing the benchmark plots.
//!
//! All paths are relative to the directory containing the plotting scripts, next to which the
//! data lives in `../3_plots/`.

use super::data;
use super::decoration::Scenario;
use super::error::Result;
use super::render;
use std::path::{Path, PathBuf};

/// Input directory, output file and excluded detectors of one benchmark plot.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Benchmark {
    /// Scenario selecting the decoration.
    pub scenario: Scenario,
    /// Directory containing the `.dat` files.
    pub data_dir: &'static str,
    /// Path of the resulting PDF.
    pub plot_file: &'static str,
    /// Detectors with very low sensitivity in this benchmark, which are not shown.
    pub excluded: &'static [&'static str],
}

impl Benchmark {
    /// Returns the pipeline producing the plot of `scenario`.
    #[must_use]
    pub const fn new(scenario: Scenario) -> Self {
        let (data_dir, plot_file, excluded): (_, _, &[_]) = match scenario {
            Scenario::One => (
                "../3_plots/data_points",
                "../3_plots/benchmark_one.pdf",
                &[],
            ),
            Scenario::TwoA => (
                "../3_plots/data_pointsA",
                "../3_plots/benchmark_twoA.pdf",
                &["FASER"],
            ),
            Scenario::TwoB => (
                "../3_plots/data_pointsB",
                "../3_plots/benchmark_twoB.pdf",
                &["FASER"],
            ),
            Scenario::Three => (
                "../3_plots/data_points",
                "../3_plots/benchmark_three.pdf",
                &["FASER", "FASER2"],
            ),
        };

        Self {
            scenario,
            data_dir,
            plot_file,
            excluded,
        }
    }

    /// Loads the data below `base`, draws the plot and writes it. Returns the path of the
    /// written file.
    ///
    /// # Errors
    ///
    /// Fails if the data can't be loaded or the plot can't be written.
    pub fn run(&self, base: &Path) -> Result<PathBuf> {
        let data_dir = base.join(self.data_dir);
        let plot_file = base.join(self.plot_file);

        log::info!(
            "benchmark {}: `{}` -> `{}`",
            self.scenario,
            data_dir.display(),
            plot_file.display()
        );

        let mut series = data::load_data(&data_dir)?;
        data::exclude(&mut series, self.excluded);
        render::save(&series, self.scenario.name(), &plot_file)?;

        Ok(plot_file)
    }
}
