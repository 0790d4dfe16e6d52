use crate::core::combinations::{generate_combinations, sort_combinations, StackSelection};
use crate::core::csv_table::CsvRenderer;
use crate::core::markdown::MarkdownRenderer;
use crate::domain::catalog::Catalog;
use crate::domain::model::{ExposureTime, StopValue};
use crate::domain::ports::{ChartSource, TableRenderer};
use crate::utils::error::Result;

/// Shutter speeds and sorted filter stacks. Immutable once built.
#[derive(Debug, Clone)]
pub struct ExposureChart {
    shutters: Vec<ExposureTime>,
    combinations: Vec<StopValue>,
}

impl ExposureChart {
    pub fn build(catalog: &Catalog, selection: StackSelection) -> Result<Self> {
        let combinations = sort_combinations(generate_combinations(catalog, selection)?);

        Ok(Self {
            shutters: catalog.shutters().to_vec(),
            combinations,
        })
    }
}

impl ChartSource for ExposureChart {
    fn shutters(&self) -> &[ExposureTime] {
        &self.shutters
    }

    fn combinations(&self) -> &[StopValue] {
        &self.combinations
    }
}

/// Which tables to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableSelection {
    Markdown,
    Csv,
    #[default]
    Both,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ChartOptions {
    pub tables: TableSelection,
    pub stacks: StackSelection,
    pub extreme_shutters: bool,
}

pub struct ChartEngine {
    chart: ExposureChart,
    renderers: Vec<Box<dyn TableRenderer>>,
}

impl ChartEngine {
    pub fn new(options: ChartOptions) -> Result<Self> {
        let mut catalog = Catalog::standard();
        if options.extreme_shutters {
            catalog = catalog.with_extreme_shutters();
        }

        let chart = ExposureChart::build(&catalog, options.stacks)?;
        tracing::debug!(
            "Chart ready: {} shutter speeds x {} filter stacks",
            chart.shutters().len(),
            chart.combinations().len()
        );

        let mut renderers: Vec<Box<dyn TableRenderer>> = Vec::new();
        if matches!(options.tables, TableSelection::Markdown | TableSelection::Both) {
            renderers.push(Box::new(MarkdownRenderer));
        }
        if matches!(options.tables, TableSelection::Csv | TableSelection::Both) {
            renderers.push(Box::new(CsvRenderer));
        }

        Ok(Self { chart, renderers })
    }

    pub fn chart(&self) -> &ExposureChart {
        &self.chart
    }

    /// Renders the selected tables back to back.
    pub fn run(&self) -> Result<String> {
        let mut output = String::new();
        for renderer in &self.renderers {
            tracing::debug!("Rendering {} table", renderer.name());
            output.push_str(&renderer.render(&self.chart)?);
        }
        Ok(output)
    }
}
