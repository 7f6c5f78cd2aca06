use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeesError {
    #[error("Date format error: '{value}' does not match pattern {pattern}")]
    FormatError {
        value: String,
        pattern: &'static str,
    },

    #[error("Schema error: expected column '{column}' is missing")]
    SchemaError { column: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

pub type Result<T> = std::result::Result<T, FeesError>;
