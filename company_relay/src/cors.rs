//! CORS layer built from [`CorsConfig`](crate::config::CorsConfig).

use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};
use tracing::warn;

use crate::config::CorsConfig;

/// Build the CORS layer from config.
///
/// Methods and headers are mirrored from the preflight request, which is what
/// "allow everything" means once credentials are enabled. A `*` origin turns
/// credentials off, since browsers reject that combination.
pub fn build_cors_layer(cfg: &CorsConfig) -> CorsLayer {
    let has_wildcard_origin = cfg.allowed_origins.iter().any(|o| o == "*");

    let layer = CorsLayer::new()
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    if has_wildcard_origin {
        if cfg.allow_credentials {
            warn!("CORS allowed_origins contains '*'; credentials will not be allowed");
        }
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = cfg
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    layer
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(cfg.allow_credentials)
}
