use crate::domain::model::{ExposureTime, StopValue};
use crate::utils::error::{ChartError, Result};
use crate::utils::validation::{validate_positive_number, Validate};
use std::collections::{BTreeMap, HashSet};

/// Registry order the combination generator relies on.
pub const CURATED_ORDER: [&str; 4] = ["1k", "64", "8", "4"];

/// The only three-filter stacks worth printing by default.
pub const HAND_PICKED_TRIPLES: [[&str; 3]; 2] = [["1k", "64", "4"], ["1k", "8", "4"]];

/// Minimum rows for the CSV header to repeat mid-table.
pub const MIN_SHUTTERS: usize = 2;

/// Curated ND filters, in registry order.
pub fn standard_filters() -> Vec<StopValue> {
    vec![
        StopValue::new(10, "1k"), // ND1000
        StopValue::new(6, "64"),  // ND64
        StopValue::new(3, "8"),   // ND8
        StopValue::new(2, "4"),   // ND4
    ]
}

/// Speeds faster than the table normally needs.
pub fn extreme_shutters() -> Vec<ExposureTime> {
    [8000, 6400, 5000]
        .into_iter()
        .map(ExposureTime::from_fraction)
        .collect()
}

/// Shutter speeds the camera offers, fastest first.
pub fn standard_shutters() -> Vec<ExposureTime> {
    const FRACTIONS: [u32; 31] = [
        4000, 3200, 2500, 2000, 1600, 1250, 1000, 800, 640, 500, 400, 320, 250, 200, 160, 125,
        100, 80, 60, 50, 40, 30, 25, 20, 15, 13, 10, 8, 6, 5, 4,
    ];
    // (秒, 十分之一秒)
    const DECIMALS: [(u32, u32); 21] = [
        (0, 3),
        (0, 4),
        (0, 5),
        (0, 6),
        (0, 8),
        (1, 0),
        (1, 3),
        (1, 6),
        (2, 0),
        (2, 5),
        (3, 2),
        (4, 0),
        (5, 0),
        (6, 0),
        (8, 0),
        (10, 0),
        (13, 0),
        (15, 0),
        (20, 0),
        (25, 0),
        (30, 0),
    ];

    FRACTIONS
        .into_iter()
        .map(ExposureTime::from_fraction)
        .chain(
            DECIMALS
                .into_iter()
                .map(|(whole, tenths)| ExposureTime::from_whole_and_tenths(whole, tenths)),
        )
        .collect()
}

/// Filters and shutter speeds a chart is built from. Built once, read-only afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    filters: Vec<StopValue>,
    by_label: BTreeMap<String, usize>,
    shutters: Vec<ExposureTime>,
}

impl Catalog {
    pub fn new(filters: Vec<StopValue>, shutters: Vec<ExposureTime>) -> Self {
        let by_label = filters
            .iter()
            .enumerate()
            .map(|(index, filter)| (filter.label.clone(), index))
            .collect();

        Self {
            filters,
            by_label,
            shutters,
        }
    }

    pub fn standard() -> Self {
        Self::new(standard_filters(), standard_shutters())
    }

    pub fn with_extreme_shutters(mut self) -> Self {
        let mut shutters = extreme_shutters();
        shutters.append(&mut self.shutters);
        self.shutters = shutters;
        self
    }

    pub fn filters(&self) -> &[StopValue] {
        &self.filters
    }

    pub fn shutters(&self) -> &[ExposureTime] {
        &self.shutters
    }

    pub fn filter(&self, label: &str) -> Result<&StopValue> {
        self.by_label
            .get(label)
            .map(|&index| &self.filters[index])
            .ok_or_else(|| ChartError::ConsistencyError {
                message: format!("Filter '{}' is not in the registry", label),
            })
    }

    /// Stacks the named filters left to right.
    pub fn stack(&self, labels: &[&str]) -> Result<StopValue> {
        let (first, rest) = labels
            .split_first()
            .ok_or_else(|| ChartError::ConsistencyError {
                message: "Cannot stack an empty list of filters".to_string(),
            })?;

        let mut stacked = self.filter(first)?.clone();
        for label in rest {
            stacked = &stacked + self.filter(label)?;
        }
        Ok(stacked)
    }
}

impl Validate for Catalog {
    fn validate(&self) -> Result<()> {
        validate_positive_number("filters", self.filters.len(), CURATED_ORDER.len())?;
        validate_positive_number("shutters", self.shutters.len(), MIN_SHUTTERS)?;

        let mut seen = HashSet::new();
        for filter in &self.filters {
            if !seen.insert(filter.label.as_str()) {
                return Err(ChartError::ConsistencyError {
                    message: format!("Filter label '{}' is registered twice", filter.label),
                });
            }
        }

        for (position, expected) in CURATED_ORDER.iter().enumerate() {
            let actual = &self.filters[position].label;
            if actual != expected {
                return Err(ChartError::ConsistencyError {
                    message: format!(
                        "Expected filter '{}' at position {}, found '{}'",
                        expected, position, actual
                    ),
                });
            }
        }

        for triple in HAND_PICKED_TRIPLES {
            for label in triple {
                self.filter(label)?;
            }
        }

        if let Some(shutter) = self
            .shutters
            .iter()
            .find(|s| s.seconds().is_nan() || s.seconds() <= 0.0)
        {
            return Err(ChartError::ConsistencyError {
                message: format!("Shutter speed must be positive, got {}s", shutter.seconds()),
            });
        }

        Ok(())
    }
}
