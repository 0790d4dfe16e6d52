use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Rendered table is not valid UTF-8: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),

    #[error("Curated data is inconsistent: {message}")]
    ConsistencyError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ChartError {
    /// Startup checks failing means the built-in tables themselves are malformed.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ChartError::ConsistencyError { .. } | ChartError::InvalidConfigValueError { .. }
        )
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_fatal() {
            3
        } else {
            1
        }
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;
