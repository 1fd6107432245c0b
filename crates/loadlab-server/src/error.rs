//! HTTP mapping for domain errors.
//!
//! Not-found is a bare 404 with no body; other failures get a short text body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use loadlab_core::error::{ClientCode, LoadLabError};

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub LoadLabError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.client_code() {
            ClientCode::NotFound => StatusCode::NOT_FOUND,
            ClientCode::BadRequest => StatusCode::BAD_REQUEST,
            ClientCode::UnsupportedVersion | ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match status {
            StatusCode::NOT_FOUND => status.into_response(),
            s if s.is_server_error() => {
                tracing::error!(err = %self.0, "request failed");
                (status, self.0.client_code().as_str()).into_response()
            }
            _ => (status, self.0.to_string()).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(ApiError(LoadLabError::NotFound("customer 1".into())).status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError(LoadLabError::BadRequest("x".into())).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError(LoadLabError::Internal("x".into())).status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
