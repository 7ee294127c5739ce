use http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

use crate::config::Config;

/// Open CORS while developing; production only admits the portal's own origin.
pub fn portal_cors(config: &Config) -> CorsLayer {
    if !config.production {
        return CorsLayer::new()
            .allow_methods(Any)
            .allow_headers(Any)
            .allow_origin(Any);
    }

    match HeaderValue::from_str(&config.portal_base_url) {
        Ok(origin) => CorsLayer::new()
            .allow_methods(Any)
            .allow_headers(Any)
            .allow_origin(origin),
        Err(e) => {
            warn!(error = %e, origin = %config.portal_base_url, "Unusable portal origin, CORS left closed");
            CorsLayer::new()
        }
    }
}
