use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("Invalid entry #{index}: `{field}` {message}")]
    InvalidEntry {
        index: usize,
        field: &'static str,
        message: String,
    },
    #[error("Invalid starting balance: {0}")]
    InvalidStartingBalance(f64),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CoreError {
    pub fn invalid_entry(index: usize, field: &'static str, message: impl Into<String>) -> Self {
        CoreError::InvalidEntry {
            index,
            field,
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for CoreError {
    fn from(err: std::io::Error) -> Self {
        CoreError::Storage(err.to_string())
    }
}
