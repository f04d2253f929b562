use std::env;
use std::time::Duration;

use crate::service::breaker::BreakerConfig;

/// Service-layer configuration, read from the environment with sane
/// defaults so the demo runs without any setup.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Base URL of the marketplace backend
    pub base_url: String,
    /// Per-request timeout for backend calls
    pub request_timeout: Duration,
    pub breaker: BreakerConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            request_timeout: Duration::from_secs(10),
            breaker: BreakerConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from `ESTATE_*` environment variables, falling
    /// back to defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let secs = |name: &str, fallback: Duration| {
            env::var(name)
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(fallback)
        };
        Self {
            base_url: env::var("ESTATE_BACKEND_URL").unwrap_or(defaults.base_url),
            request_timeout: secs("ESTATE_REQUEST_TIMEOUT_SECS", defaults.request_timeout),
            breaker: BreakerConfig {
                failure_threshold: env::var("ESTATE_BREAKER_THRESHOLD")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.breaker.failure_threshold),
                cooldown: secs("ESTATE_BREAKER_COOLDOWN_SECS", defaults.breaker.cooldown),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = ServiceConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.breaker.failure_threshold, 3);
    }
}
