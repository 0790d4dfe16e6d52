use crate::domain::model::{ExposureTime, StopValue};
use crate::domain::ports::{ChartSource, TableRenderer};
use crate::utils::error::Result;
use csv::{QuoteStyle, WriterBuilder};

const NO_FILTER_HEADER: &str = "  no ND";
const FIELD_PREFIX: &str = "  ";

/// Comma-separated table. The header is printed again every half table so
/// both halves of a printed page carry one.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvRenderer;

impl CsvRenderer {
    /// Rows (0-based) that get a header printed in front of them: every
    /// multiple of half the row count. An odd count gets a third header
    /// before its last row.
    pub fn header_rows(shutter_count: usize) -> Vec<usize> {
        let middle = shutter_count / 2;
        if middle == 0 {
            vec![0]
        } else {
            (0..shutter_count).step_by(middle).collect()
        }
    }

    /// One header followed by its rows.
    fn render_block(
        chart: &dyn ChartSource,
        shutters: &[ExposureTime],
        combinations: &[StopValue],
    ) -> Result<String> {
        // Cells carry `"` and `'` marks, quoting would mangle them.
        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Never)
            .from_writer(Vec::new());

        let mut header = vec![NO_FILTER_HEADER.to_string()];
        header.extend(
            combinations
                .iter()
                .map(|combination| format!("{}{}", FIELD_PREFIX, combination.format_label())),
        );
        writer.write_record(&header)?;

        for shutter in shutters {
            let mut record = vec![shutter.to_string()];
            record.extend(combinations.iter().map(|combination| {
                format!("{}{}", FIELD_PREFIX, chart.cell(shutter, combination))
            }));
            writer.write_record(&record)?;
        }

        let bytes = writer.into_inner().map_err(|e| e.into_error())?;
        Ok(String::from_utf8(bytes)?)
    }
}

impl TableRenderer for CsvRenderer {
    fn name(&self) -> &'static str {
        "csv"
    }

    fn render(&self, chart: &dyn ChartSource) -> Result<String> {
        let shutters = chart.shutters();
        let header_rows = Self::header_rows(shutters.len());

        let mut out = String::new();
        for (i, &start) in header_rows.iter().enumerate() {
            let end = header_rows.get(i + 1).copied().unwrap_or(shutters.len());

            // 每個表頭前空一行
            out.push('\n');
            out.push_str(&Self::render_block(
                chart,
                &shutters[start..end],
                chart.combinations(),
            )?);
        }

        Ok(out)
    }
}
