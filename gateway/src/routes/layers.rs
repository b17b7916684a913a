//! Cross-cutting HTTP layers applied at the server edge

use http::{
    HeaderValue, Method,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use tower::ServiceBuilder;
use tower::layer::util::{Identity, Stack};
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::{info, warn};

use crate::middleware::REQUEST_ID_HEADER;

/// Build the CORS layer from a comma-separated origin list or `*`
///
/// With no origins configured, no `Access-Control-Allow-Origin` is ever sent
/// and browsers keep requests same-origin.
pub fn cors_layer(origins: Option<&str>) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .expose_headers([http::HeaderName::from_static(REQUEST_ID_HEADER)]);

    match origins.map(str::trim) {
        Some("*") => base.allow_origin(Any),
        Some(list) if !list.is_empty() => {
            let parsed: Vec<HeaderValue> = list
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .filter_map(|s| match s.parse() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        warn!(origin = %s, "Ignoring invalid CORS origin");
                        None
                    }
                })
                .collect();
            base.allow_origin(parsed)
        }
        _ => {
            info!(
                "CORS not configured, defaulting to same-origin only. \
                 Set CORS_ALLOWED_ORIGINS to enable cross-origin access."
            );
            base
        }
    }
}

type SecurityHeaders = Stack<
    SetResponseHeaderLayer<HeaderValue>,
    Stack<SetResponseHeaderLayer<HeaderValue>, Identity>,
>;

/// `X-Content-Type-Options: nosniff` and `X-Frame-Options: DENY` on every response
pub fn security_headers() -> ServiceBuilder<SecurityHeaders> {
    ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            http::header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            http::header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
}
