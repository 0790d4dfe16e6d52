pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub mod config;

#[cfg(feature = "cli")]
pub use crate::config::{cli::OutputTarget, CliConfig};

pub use crate::core::chart::{ChartEngine, ChartOptions, ExposureChart, TableSelection};
pub use crate::core::combinations::StackSelection;
pub use crate::domain::model::{format_duration, DurationBand, ExposureTime, StopValue};
pub use crate::utils::error::{ChartError, Result};
