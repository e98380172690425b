use queue_core::QueueEntry;
use thiserror::Error;

/// Transport-level failure talking to the queue endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("invalid request url: {0}")]
    InvalidUrl(String),
    #[error("http status {0}")]
    Status(u16),
    #[error("request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response body: {0}")]
    Body(String),
}

/// Which mutation a remote command carried, for logging and event
/// routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    Modify,
    Archive,
}

/// Completion of one remote command. Every success carries the full,
/// authoritative collection; the client never merges deltas.
#[derive(Debug)]
pub enum RemoteEvent {
    FetchFinished(Result<Vec<QueueEntry>, ApiError>),
    MutationFinished {
        kind: MutationKind,
        result: Result<Vec<QueueEntry>, ApiError>,
    },
}

pub(crate) fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::Timeout;
    }
    ApiError::Network(err.to_string())
}
