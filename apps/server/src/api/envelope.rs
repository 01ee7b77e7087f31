//! JSON envelope shared by every response: `{status, data}` on success,
//! `{status, message[, error]}` on failure.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Envelope<T> {
    Success {
        data: T,
    },
    Error {
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Envelope::Success { data }
    }

    pub fn error(message: impl Into<String>, error: Option<String>) -> Self {
        Envelope::Error {
            message: message.into(),
            error,
        }
    }
}
