use thiserror::Error;

#[derive(Error, Debug)]
pub enum NmeaError {
    #[error("Non-finite value for {field}: {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("Malformed sentence: {0}")]
    MalformedSentence(String),

    #[error("Checksum mismatch: sentence carries {expected}, payload hashes to {computed}")]
    ChecksumMismatch { expected: String, computed: String },

    #[error("Timestamp out of range: {0}ms")]
    InvalidTimestamp(i64),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, NmeaError>;
