#![warn(clippy::all, clippy::cargo, clippy::nursery, clippy::pedantic)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

//! Sensitivity plots for long-lived particle searches at present and proposed LHC detectors.
//!
//! The reach of each detector is read from a tab-separated data file giving the sensitivity as
//! a function of the proper decay length `cτ`, and all curves are drawn on a single log-log plot
//! decorated according to a benchmark scenario.

pub mod benchmark;
pub mod data;
pub mod decoration;
pub mod error;
pub mod label;
pub mod render;
pub mod style;

pub use error::{Error, Result};
