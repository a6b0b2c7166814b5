//! Decoder error types.

/// The input blob could not be decoded into vehicle records.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("JSON parse error at line {line}, column {column}: {message}")]
pub struct DecodeError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        DecodeError {
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }
}
