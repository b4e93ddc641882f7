//! Shared error type across rovertel crates.

use thiserror::Error;

/// Client-facing status sentinel (stable API).
///
/// Every endpoint answers with one of these two bodies; the reason for a
/// rejection only shows up in the device log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Command accepted.
    Ok,
    /// Command rejected.
    Bad,
}

impl Status {
    /// String representation used in plain-text responses.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Bad => "BAD",
        }
    }
}

impl<T> From<&Result<T>> for Status {
    fn from(res: &Result<T>) -> Self {
        match res {
            Ok(_) => Status::Ok,
            Err(e) => e.status(),
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, RoverError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error, PartialEq)]
pub enum RoverError {
    #[error("client registry is full")]
    RegistryFull,
    #[error("client already registered: {0}")]
    DuplicateClient(String),
    #[error("fuel out of range: {0} (expected 0..=100)")]
    FuelOutOfRange(i64),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl RoverError {
    /// Map internal error to the client-facing status.
    ///
    /// All variants collapse to `Bad`: a duplicate name and a full registry
    /// are indistinguishable to the remote caller.
    pub fn status(&self) -> Status {
        match self {
            RoverError::RegistryFull
            | RoverError::DuplicateClient(_)
            | RoverError::FuelOutOfRange(_)
            | RoverError::BadRequest(_)
            | RoverError::UnsupportedVersion
            | RoverError::Internal(_) => Status::Bad,
        }
    }
}
