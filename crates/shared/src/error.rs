use thiserror::Error;

/// The only error kind in the system: retrieving the post collection failed.
/// Converted at the controller boundary into the terminal
/// [`FetchState::Error`](crate::domain::FetchState) with the rendered message.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("post source request failed: {0}")]
    Request(String),
    #[error("post source returned status {status}")]
    Status { status: u16 },
    #[error("invalid post payload from source: {0}")]
    InvalidBody(String),
}
