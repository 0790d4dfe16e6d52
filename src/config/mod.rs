pub mod cli;

use crate::core::chart::{ChartOptions, TableSelection};
use crate::core::combinations::StackSelection;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TableArg {
    Markdown,
    Csv,
    #[default]
    Both,
}

impl From<TableArg> for TableSelection {
    fn from(arg: TableArg) -> Self {
        match arg {
            TableArg::Markdown => TableSelection::Markdown,
            TableArg::Csv => TableSelection::Csv,
            TableArg::Both => TableSelection::Both,
        }
    }
}

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "nd-exposure")]
#[command(about = "Exposure times for every shutter speed behind stacked ND filters")]
pub struct CliConfig {
    /// Which table(s) to print
    #[arg(long, value_enum, default_value_t = TableArg::Both)]
    pub table: TableArg,

    /// Write the tables to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also list 1/8000, 1/6400 and 1/5000
    #[arg(long)]
    pub extreme_shutters: bool,

    /// List every three-filter stack and the full stack, not just the hand-picked ones
    #[arg(long)]
    pub all_stacks: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn chart_options(&self) -> ChartOptions {
        ChartOptions {
            tables: self.table.into(),
            stacks: if self.all_stacks {
                StackSelection::All
            } else {
                StackSelection::HandPicked
            },
            extreme_shutters: self.extreme_shutters,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(output) = &self.output {
            validate_path("output", &output.to_string_lossy())?;
        }
        Ok(())
    }
}
