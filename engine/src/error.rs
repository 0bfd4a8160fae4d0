use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("CSV appears to be empty")]
    EmptyInput,

    #[error("Required column \"{column}\" not found. Headers found: {}", .found.join(", "))]
    MissingColumn { column: String, found: Vec<String> },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("CSV writing error: {source}")]
    CsvSystemError {
        #[from]
        source: csv::Error,
    },

    #[error("Rate table error: {source}")]
    RateTableError {
        #[from]
        source: serde_json::Error,
    },

    #[error("Timed out after {millis} ms while loading {what}")]
    Timeout { what: String, millis: u64 },
}

pub type Result<T> = std::result::Result<T, EngineError>;
