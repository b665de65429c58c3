//! Configuration for vcli
//!
//! Defaults come from [`defaults`], environment variables override them,
//! and command-line flags are applied last by the binary.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{VcliError, VcliResult};

pub mod defaults;

pub use defaults::*;

/// How the client reaches the appliance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Endpoint {
    /// Loopback HTTP on port 5000, no authentication.
    Local,
    /// HTTPS to `host` with a static `Authorization` header.
    Remote { host: String, token: String },
}

impl Default for Endpoint {
    fn default() -> Self {
        Endpoint::Local
    }
}

impl Endpoint {
    /// Remote only when both a host and a token are present.
    pub fn from_parts(host: Option<String>, token: Option<String>) -> Self {
        match (host, token) {
            (Some(host), Some(token)) if !host.is_empty() && !token.is_empty() => {
                Endpoint::Remote { host, token }
            }
            _ => Endpoint::Local,
        }
    }

    pub fn base_url(&self) -> String {
        match self {
            Endpoint::Local => LOCAL_API_URL.to_string(),
            Endpoint::Remote { host, .. } => {
                format!("https://{}{}", host.trim_end_matches('/'), REMOTE_API_PREFIX)
            }
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Endpoint::Remote { .. })
    }
}

/// Root configuration structure for vcli
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VcliConfig {
    pub endpoint: Endpoint,

    /// Overrides the URL derived from `endpoint`; used to point at a fake
    /// appliance.
    pub base_url_override: Option<String>,

    #[serde(with = "humantime_serde")]
    pub request_timeout: Duration,

    /// Interval between poll ticks on data screens
    #[serde(with = "humantime_serde")]
    pub poll_interval: Duration,

    #[serde(with = "humantime_serde")]
    pub progress_interval: Duration,

    #[serde(with = "humantime_serde")]
    pub service_progress_interval: Duration,

    /// Pause between the stop and start halves of a room restart
    #[serde(with = "humantime_serde")]
    pub restart_delay: Duration,
}

impl Default for VcliConfig {
    fn default() -> Self {
        Self {
            endpoint: Endpoint::Local,
            base_url_override: None,
            request_timeout: duration_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            poll_interval: duration_ms(DEFAULT_POLL_INTERVAL_MS),
            progress_interval: duration_ms(DEFAULT_PROGRESS_INTERVAL_MS),
            service_progress_interval: duration_ms(DEFAULT_SERVICE_PROGRESS_INTERVAL_MS),
            restart_delay: duration_secs(DEFAULT_RESTART_DELAY_SECS),
        }
    }
}

impl VcliConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> VcliResult<Self> {
        let mut config = Self::default();

        config.endpoint = Endpoint::from_parts(
            std::env::var(ENV_HOST).ok(),
            std::env::var(ENV_TOKEN).ok(),
        );

        if let Ok(secs) = std::env::var(ENV_TIMEOUT_SECS) {
            let secs: u64 = secs
                .parse()
                .map_err(|_| VcliError::configuration(ENV_TIMEOUT_SECS, "must be an integer"))?;
            config.request_timeout = duration_secs(secs);
        }

        if let Ok(ms) = std::env::var(ENV_POLL_INTERVAL_MS) {
            let ms: u64 = ms.parse().map_err(|_| {
                VcliError::configuration(ENV_POLL_INTERVAL_MS, "must be an integer")
            })?;
            config.poll_interval = duration_ms(ms);
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> VcliResult<()> {
        if self.request_timeout.is_zero() {
            return Err(VcliError::configuration(
                "request_timeout",
                "must be greater than zero",
            ));
        }

        if self.poll_interval < duration_ms(MIN_POLL_INTERVAL_MS) {
            return Err(VcliError::configuration(
                "poll_interval",
                format!("must be at least {}ms", MIN_POLL_INTERVAL_MS),
            ));
        }

        if let Endpoint::Remote { host, .. } = &self.endpoint {
            if host.trim().is_empty() {
                return Err(VcliError::configuration("host", "remote mode requires a host"));
            }
        }

        if let Some(url) = &self.base_url_override {
            url::Url::parse(url)
                .map_err(|e| VcliError::configuration("base_url_override", e.to_string()))?;
        }

        Ok(())
    }

    /// Base URL every request path is joined onto.
    pub fn base_url(&self) -> String {
        match &self.base_url_override {
            Some(url) if url.ends_with('/') => url.clone(),
            Some(url) => format!("{}/", url),
            None => self.endpoint.base_url(),
        }
    }

    /// Create a configuration that targets a fake appliance at `base_url`.
    pub fn test(base_url: impl Into<String>) -> Self {
        Self {
            base_url_override: Some(base_url.into()),
            restart_delay: duration_ms(10),
            ..Self::default()
        }
    }
}
