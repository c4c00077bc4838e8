//! Error type for the decoding and localisation surfaces
//!
//! The snapshot core itself is best-effort and never fails; these errors only
//! come from turning raw input into JSON or from parsing the actor URL.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("invalid actor JSON")]
    InvalidJson(#[source] serde_json::Error),

    #[error("invalid URL {url:?}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("URL {0:?} has no host")]
    MissingHost(String),

    #[error("failed to serialize snapshot")]
    Serialize(#[source] serde_json::Error),
}

impl SnapshotError {
    /// Message with every underlying cause appended, for hosts that only see a string
    pub fn report(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = std::error::Error::source(cause);
        }
        message
    }
}

pub type Result<T> = std::result::Result<T, SnapshotError>;
