//! Request extractors.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use company_relay_lib::ApiKey;

use crate::error::AppError;

/// Header carrying the caller's registry API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// The caller's registry API key, taken from the `x-api-key` header and
/// forwarded on every upstream call made for the request.
#[derive(Debug, Clone)]
pub struct UpstreamKey(pub ApiKey);

#[async_trait]
impl<S> FromRequestParts<S> for UpstreamKey
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(API_KEY_HEADER)
            .ok_or(AppError::MissingApiKey)?;
        let key = value.to_str().map_err(|_| AppError::InvalidApiKey)?;
        Ok(Self(ApiKey::new(key)))
    }
}
