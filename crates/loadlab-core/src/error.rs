//! Shared error type across loadlab crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Requested record does not exist.
    NotFound,
    /// Invalid input / malformed config.
    BadRequest,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and tests.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, LoadLabError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum LoadLabError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl LoadLabError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            LoadLabError::NotFound(_) => ClientCode::NotFound,
            LoadLabError::BadRequest(_) => ClientCode::BadRequest,
            LoadLabError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            LoadLabError::Internal(_) => ClientCode::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(LoadLabError::NotFound("customer 7".into()).client_code().as_str(), "NOT_FOUND");
        assert_eq!(LoadLabError::UnsupportedVersion.client_code(), ClientCode::UnsupportedVersion);
        assert_eq!(LoadLabError::Internal("x".into()).to_string(), "internal: x");
    }
}
