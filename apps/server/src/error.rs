//! Error types for the store lookup service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::api::envelope::Envelope;

pub type Result<T> = std::result::Result<T, Error>;

pub const MISSING_FILTER_MESSAGE: &str = "Specify medicine (name or ID) or pincode";

#[derive(Error, Debug)]
pub enum Error {
    /// None of the name, id or pincode filters survived sanitization
    #[error("Specify medicine (name or ID) or pincode")]
    MissingFilter,

    /// No connection could be obtained from the pool
    #[error("Database connection failed")]
    Connection(#[source] sqlx::Error),

    /// The lookup statement could not be prepared
    #[error("Query failed: {0}")]
    QueryPreparation(#[source] sqlx::Error),

    /// The prepared statement failed while executing or decoding rows
    #[error("{0}")]
    QueryExecution(#[source] sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Service unavailable: {0}")]
    Unavailable(String),
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::MissingFilter => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Error::Connection(_)
            | Error::QueryPreparation(_)
            | Error::QueryExecution(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short label used for the lookup outcome metric
    pub fn kind(&self) -> &'static str {
        match self {
            Error::MissingFilter => "missing_filter",
            Error::Connection(_) => "connection_error",
            Error::QueryPreparation(_) => "prepare_error",
            Error::QueryExecution(_) => "execution_error",
            Error::NotFound(_) => "not_found",
            Error::Unavailable(_) => "unavailable",
        }
    }

    /// Driver message reported next to the generic connection failure text
    fn detail(&self) -> Option<String> {
        match self {
            Error::Connection(source) => Some(source.to_string()),
            _ => None,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, detail = ?self.detail(), "Request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }

        let body = Envelope::<()>::error(self.to_string(), self.detail());
        (status, Json(body)).into_response()
    }
}
