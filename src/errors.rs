use thiserror::Error;

#[derive(Error, Debug)]
pub enum LendingError {
    #[error("invalid {field}: {message}")]
    InvalidInput {
        field: &'static str,
        message: String,
    },

    #[error("out of range: {message}")]
    OutOfRange {
        message: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("malformed configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("unable to read configuration: {0}")]
    ConfigRead(#[from] std::io::Error),
}

impl LendingError {
    pub(crate) fn invalid_input(field: &'static str, message: impl Into<String>) -> Self {
        LendingError::InvalidInput {
            field,
            message: message.into(),
        }
    }

    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        LendingError::InvalidConfiguration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LendingError>;
