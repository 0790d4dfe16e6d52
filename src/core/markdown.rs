use crate::domain::ports::{ChartSource, TableRenderer};
use crate::utils::error::Result;

pub const NO_FILTER_HEADER: &str = "no ND  ";
const SEPARATOR: &str = "-------";

/// Pipe-delimited table, one column per filter stack.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl TableRenderer for MarkdownRenderer {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn render(&self, chart: &dyn ChartSource) -> Result<String> {
        let mut out = String::new();
        let combinations = chart.combinations();

        // 表頭
        out.push_str(&format!("| {} | ", NO_FILTER_HEADER));
        for combination in combinations {
            out.push_str(&format!("{} | ", combination.format_label()));
        }
        out.push('\n');

        out.push_str(&format!("| {} | ", SEPARATOR));
        for _ in combinations {
            out.push_str(&format!("{} | ", SEPARATOR));
        }
        out.push('\n');

        for shutter in chart.shutters() {
            out.push_str(&format!("| {} | ", shutter));
            for combination in combinations {
                out.push_str(&format!("{} | ", chart.cell(shutter, combination)));
            }
            out.push('\n');
        }

        Ok(out)
    }
}
