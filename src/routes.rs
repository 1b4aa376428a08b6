//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`      - Health check: database (public)
//! - `/api/links/*`      - Link management, click recording and statistics
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on `/api` (configurable for proxy deployments)
//! - **CORS** - Optional, for browser clients served from another origin
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::rate_limit::{self, RateLimit};
use crate::api::middleware::tracing;
use crate::config::Config;
use crate::state::AppState;
use anyhow::{Context, Result};
use axum::Router;
use axum::http::HeaderValue;
use axum::routing::get;
use tower::Layer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Errors
///
/// Returns an error if the rate limit or CORS settings cannot be turned into
/// middleware.
pub fn app_router(state: AppState, config: &Config) -> Result<NormalizePath<Router>> {
    let limit = RateLimit {
        per_second: config.rate_limit_per_second,
        burst: config.rate_limit_burst,
    };

    let api_router = api::routes::link_routes();
    let api_router = if config.behind_proxy {
        api_router.layer(rate_limit::proxied_layer(limit)?)
    } else {
        api_router.layer(rate_limit::layer(limit)?)
    };

    let mut router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(tracing::layer());

    if let Some(origins) = &config.cors_allow_origin {
        router = router.layer(cors_layer(origins)?);
    }

    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}

/// Builds a CORS layer for the given origins; `*` allows any origin.
fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.iter().any(|o| o == "*") {
        return Ok(layer.allow_origin(Any));
    }

    let origins = origins
        .iter()
        .map(|o| {
            HeaderValue::from_str(o).with_context(|| format!("Invalid CORS origin '{}'", o))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(layer.allow_origin(origins))
}
