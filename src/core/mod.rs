pub mod chart;
pub mod combinations;
pub mod csv_table;
pub mod markdown;

pub use crate::domain::model::{ExposureTime, StopValue};
pub use crate::domain::ports::{ChartSource, TableRenderer};
pub use crate::utils::error::Result;
