//! Default configuration values for vcli
//!
//! This module centralizes all default values to make them easy to find and modify.

use std::time::Duration;

// Appliance endpoints
pub const LOCAL_API_URL: &str = "http://127.0.0.1:5000/";
pub const REMOTE_API_PREFIX: &str = "/VirtualControl/config/api/";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 5;

// UI timers
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;
pub const DEFAULT_PROGRESS_INTERVAL_MS: u64 = 100;
pub const DEFAULT_SERVICE_PROGRESS_INTERVAL_MS: u64 = 300;
pub const MIN_POLL_INTERVAL_MS: u64 = 100;
pub const PROGRESS_STEP: f64 = 0.2;

// Room lifecycle
pub const DEFAULT_RESTART_DELAY_SECS: u64 = 3;

// Host service
pub const SERVICE_UNIT: &str = "virtualcontrol.service";

// Logging
pub const DEFAULT_LOG_DIRECTIVES: &str = "vcli=info,vcli_core=info";
pub const DEFAULT_LOG_FILE: &str = "vcli.log";

// Environment variables
pub const ENV_HOST: &str = "VCLI_HOST";
pub const ENV_TOKEN: &str = "VCLI_TOKEN";
pub const ENV_TIMEOUT_SECS: &str = "VCLI_TIMEOUT_SECS";
pub const ENV_POLL_INTERVAL_MS: &str = "VCLI_POLL_INTERVAL_MS";

pub const fn duration_ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

pub const fn duration_secs(secs: u64) -> Duration {
    Duration::from_secs(secs)
}
