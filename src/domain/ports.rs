use crate::domain::model::{ExposureTime, StopValue};
use crate::utils::error::Result;

/// Read-only view a renderer draws from.
pub trait ChartSource {
    fn shutters(&self) -> &[ExposureTime];
    fn combinations(&self) -> &[StopValue];

    fn cell(&self, shutter: &ExposureTime, combination: &StopValue) -> String {
        shutter.format_with_stops(combination.stops)
    }
}

pub trait TableRenderer {
    fn name(&self) -> &'static str;
    fn render(&self, chart: &dyn ChartSource) -> Result<String>;
}
