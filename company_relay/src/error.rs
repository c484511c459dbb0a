//! Mapping of relay failures onto HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use company_relay_lib::RelayError;
use serde_json::json;
use thiserror::Error;

/// Errors a handler can return. Bodies are `{"detail": "..."}`.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing x-api-key header")]
    MissingApiKey,
    #[error("Invalid x-api-key header")]
    InvalidApiKey,
    #[error(transparent)]
    Relay(#[from] RelayError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingApiKey | Self::InvalidApiKey => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Relay(RelayError::InvalidQuery) => StatusCode::BAD_REQUEST,
            Self::Relay(err) if err.is_unauthorized() => StatusCode::UNAUTHORIZED,
            Self::Relay(RelayError::Upstream(_)) => StatusCode::BAD_GATEWAY,
        }
    }

    fn detail(&self) -> String {
        match self {
            Self::Relay(RelayError::Upstream(_)) if self.status() == StatusCode::UNAUTHORIZED => {
                "Registry rejected the API key".to_string()
            }
            Self::Relay(RelayError::Upstream(_)) => "Company registry unavailable".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Request rejected: {}", self);
        }
        (status, Json(json!({ "detail": self.detail() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use company_relay_lib::truproxy_api::Error as UpstreamError;

    #[test]
    fn status_mapping() {
        assert_eq!(AppError::MissingApiKey.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            AppError::from(RelayError::InvalidQuery).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(RelayError::from(UpstreamError::Unauthorized { status: 401 })).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::from(RelayError::from(UpstreamError::ParseFailed("x".into()))).status(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn invalid_query_detail_matches_contract() {
        assert_eq!(
            AppError::from(RelayError::InvalidQuery).detail(),
            "Invalid query param"
        );
    }

    #[test]
    fn upstream_detail_hides_internals() {
        let err = AppError::from(RelayError::from(UpstreamError::HttpStatus {
            status: 500,
            body: "stack trace".into(),
        }));
        assert_eq!(err.detail(), "Company registry unavailable");
    }
}
