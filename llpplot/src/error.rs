//! Error type returned by loading and rendering.

use std::io;
use std::num::ParseFloatError;
use std::path::PathBuf;
use svg2pdf::usvg;
use thiserror::Error;

/// Catch-all error for this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The data path given to the loader is missing or not a directory.
    #[error("`{}` is not a directory", .0.display())]
    NotADirectory(PathBuf),
    /// Reading or writing a file failed.
    #[error("failed to access `{}`", path.display())]
    Io {
        /// File or directory that could not be accessed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// A value column of a data file does not contain a number.
    #[error("`{}`, line {line}: `{token}` is not a number", path.display())]
    ParseFloat {
        /// Data file containing the token.
        path: PathBuf,
        /// One-based line number.
        line: usize,
        /// The offending token.
        token: String,
        /// Underlying parse error.
        #[source]
        source: ParseFloatError,
    },
    /// The plotting backend failed while drawing the chart.
    #[error("failed to draw plot: {0}")]
    Drawing(String),
    /// The SVG produced by the plotting backend could not be parsed for conversion.
    #[error("failed to parse rendered SVG")]
    Svg(#[from] usvg::Error),
    /// The SVG could not be converted to PDF.
    #[error("failed to convert plot to PDF: {0}")]
    Pdf(String),
}

/// Result type used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
