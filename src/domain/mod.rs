// Domain layer: exposure arithmetic, the curated data tables and the renderer port.

pub mod catalog;
pub mod model;
pub mod ports;
