pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_extension, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "fees-etl")]
#[command(about = "Computes late fees per patron from a book-returns log")]
pub struct CliConfig {
    /// Directory that holds the returns log and receives the report
    #[arg(long, default_value = ".")]
    pub data_dir: String,

    #[arg(long, default_value = "book_returns.csv")]
    pub input_file: String,

    #[arg(long, default_value = "book_fees.csv")]
    pub output_file: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn input_file(&self) -> &str {
        &self.input_file
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("data_dir", &self.data_dir)?;
        validate_path("input_file", &self.input_file)?;
        validate_path("output_file", &self.output_file)?;
        validate_file_extension("input_file", &self.input_file, &["csv"])?;
        validate_file_extension("output_file", &self.output_file, &["csv"])?;
        Ok(())
    }
}
