use thiserror::Error as ThisError;

/// Broad classification of a client failure, independent of the message details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Request,
    Status,
    Decode,
    Task,
    Config,
}

/// Failure raised by the album client.
///
/// `Clone` is required because a failed fetch is cached inside the shared deferred
/// handle and re-raised to every later reader of the same key.
#[derive(Debug, Clone, ThisError)]
pub enum Error {
    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("failed to decode album response: {message}")]
    Decode { message: String },

    #[error("album fetch task failed: {message}")]
    Task { message: String },

    #[error("invalid client configuration: {message}")]
    Config { message: String },
}

impl Error {
    pub(crate) fn request(url: impl Into<String>, error: surf::Error) -> Self {
        Self::Request {
            url: url.into(),
            message: error.to_string(),
        }
    }

    pub(crate) fn status(url: impl Into<String>, status: surf::StatusCode) -> Self {
        Self::Status {
            url: url.into(),
            status: status.into(),
        }
    }

    pub(crate) fn decode(error: surf::Error) -> Self {
        Self::Decode {
            message: error.to_string(),
        }
    }

    pub(crate) fn task(error: tokio::task::JoinError) -> Self {
        Self::Task {
            message: error.to_string(),
        }
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Request { .. } => ErrorKind::Request,
            Self::Status { .. } => ErrorKind::Status,
            Self::Decode { .. } => ErrorKind::Decode,
            Self::Task { .. } => ErrorKind::Task,
            Self::Config { .. } => ErrorKind::Config,
        }
    }
}
