pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::{etl::ReportEngine, pipeline::FeesPipeline};
pub use utils::dates::{add_date_range, date_range, reformat_dates};
pub use utils::error::{FeesError, Result};
