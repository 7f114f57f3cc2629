use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Everything that can go wrong between the upstream feed and the response.
///
/// Both variants collapse to the same opaque 500 at the HTTP boundary; the
/// detail string only ever reaches the server log.
#[derive(Error, Debug)]
pub enum FeedError {
    /// The feed could not be fetched or did not parse as a valid document:
    /// network failure, timeout, non-2xx status, XML parse error, missing
    /// required field, empty rate list, or a non-success result code.
    #[error("currency feed unavailable: {0}")]
    FeedUnavailable(String),
    /// A record parsed structurally but carries a non-numeric rate or an
    /// unparsable rate date.
    #[error("malformed rate record: {0}")]
    MalformedRecord(String),
}

impl IntoResponse for FeedError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong").into_response()
    }
}

pub type FeedResult<T> = Result<T, FeedError>;
