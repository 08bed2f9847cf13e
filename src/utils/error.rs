use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Spreadsheet error: {0}")]
    XlsxError(#[from] rust_xlsxwriter::XlsxError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required field: {field}")]
    MissingFieldError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

pub type Result<T> = std::result::Result<T, ExportError>;
