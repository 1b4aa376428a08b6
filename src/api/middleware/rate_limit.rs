//! Rate limiting middleware using token bucket algorithm.

use anyhow::{Context, Result};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor},
};

/// Token bucket settings shared by both key extraction strategies.
#[derive(Debug, Clone, Copy)]
pub struct RateLimit {
    /// Tokens replenished per second, between 1 and 1000.
    pub per_second: u64,
    /// Maximum burst size.
    pub burst: u32,
}

impl RateLimit {
    fn replenish_interval_ms(&self) -> u64 {
        1000 / self.per_second.clamp(1, 1000)
    }
}

/// Creates a per-IP rate limiter keyed on the socket peer address.
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Errors
///
/// Returns an error if `burst` is zero.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .nest("/api", link_routes())
///     .layer(rate_limit::layer(RateLimit { per_second: 10, burst: 50 })?);
/// ```
pub fn layer(
    limit: RateLimit,
) -> Result<GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>> {
    let governor_conf = GovernorConfigBuilder::default()
        .per_millisecond(limit.replenish_interval_ms())
        .burst_size(limit.burst)
        .finish()
        .context("Invalid rate limit configuration")?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}

/// Creates a per-IP rate limiter for deployments behind a reverse proxy.
///
/// The client IP is read from `X-Forwarded-For`, `X-Real-IP` or `Forwarded`,
/// falling back to the peer address. Enable only behind a trusted proxy,
/// since clients can set these headers themselves.
///
/// # Errors
///
/// Returns an error if `burst` is zero.
pub fn proxied_layer(
    limit: RateLimit,
) -> Result<GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>>
{
    let governor_conf = GovernorConfigBuilder::default()
        .key_extractor(SmartIpKeyExtractor)
        .per_millisecond(limit.replenish_interval_ms())
        .burst_size(limit.burst)
        .finish()
        .context("Invalid rate limit configuration")?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replenish_interval() {
        assert_eq!(RateLimit { per_second: 10, burst: 1 }.replenish_interval_ms(), 100);
        assert_eq!(RateLimit { per_second: 1, burst: 1 }.replenish_interval_ms(), 1000);
        assert_eq!(RateLimit { per_second: 0, burst: 1 }.replenish_interval_ms(), 1000);
        assert_eq!(RateLimit { per_second: 5000, burst: 1 }.replenish_interval_ms(), 1);
    }

    #[test]
    fn test_zero_burst_is_rejected() {
        assert!(layer(RateLimit { per_second: 10, burst: 0 }).is_err());
        assert!(proxied_layer(RateLimit { per_second: 10, burst: 0 }).is_err());
    }

    #[test]
    fn test_valid_limits_build() {
        assert!(layer(RateLimit { per_second: 10, burst: 50 }).is_ok());
        assert!(proxied_layer(RateLimit { per_second: 10, burst: 50 }).is_ok());
    }
}
