use thiserror::Error;

#[derive(Error, Debug)]
pub enum TerritoryError {
    #[error("Spreadsheet serialization failed: {0}")]
    XlsxError(#[from] rust_xlsxwriter::XlsxError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, TerritoryError>;
