//! Error types for the resource client

use crate::transport::TransportError;
use thiserror::Error;
use wikirest_core::RouteError;

/// Errors that can occur during a resource operation
///
/// 404 on a single-resource read is not represented here: resource
/// absence is a defined empty result, and the operation returns the
/// response body instead of failing.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Route error: {0}")]
    Route(#[from] RouteError),

    #[error("Request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    #[error("Response did not carry a usable Location header")]
    MissingLocation,

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}
