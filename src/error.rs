// ⚠️ Errors - decode, encode, validation

use crate::schema::ValidationError;

/// Everything a typed record operation can fail with.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed JSON, a value of the wrong shape (bad date-time string,
    /// string where a number belongs) or a missing required field.
    #[error("failed to decode {record}: {source}")]
    Decode {
        record: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode {record}: {source}")]
    Encode {
        record: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("unknown record type: {0}")]
    UnknownRecord(String),
}

impl Error {
    /// The validation failure, if this is one.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Error::Validation(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
