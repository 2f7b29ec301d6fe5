//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Logical bucket all cached objects are stored under
    pub bucket: String,
    /// Freshness window in seconds: maximum age of a stored object before
    /// it is considered stale. Zero disables caching entirely (every read
    /// goes to the origin).
    pub freshness_secs: u64,
    /// Base URL of the upstream origin service
    pub upstream_url: String,
    /// HTTP server port
    pub server_port: u16,
    /// Interval in seconds between stale-object sweeps (memory backend)
    pub sweep_interval: u64,
    /// Root directory for the filesystem backend; unset selects the
    /// in-memory backend
    pub cache_dir: Option<PathBuf>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_BUCKET` - Logical bucket name (default: "readthru")
    /// - `FRESHNESS_SECS` - Freshness window in seconds (default: 300)
    /// - `UPSTREAM_URL` - Origin base URL (default: "http://localhost:8080")
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `SWEEP_INTERVAL` - Sweep frequency in seconds (default: 60)
    /// - `CACHE_DIR` - Filesystem backend root (default: unset, in-memory)
    pub fn from_env() -> Self {
        Self {
            bucket: env::var("CACHE_BUCKET").unwrap_or_else(|_| "readthru".to_string()),
            freshness_secs: env::var("FRESHNESS_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            upstream_url: env::var("UPSTREAM_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            sweep_interval: env::var("SWEEP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            cache_dir: env::var("CACHE_DIR").ok().map(PathBuf::from),
        }
    }

    /// The freshness window as a Duration.
    pub fn freshness(&self) -> Duration {
        Duration::from_secs(self.freshness_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bucket: "readthru".to_string(),
            freshness_secs: 300,
            upstream_url: "http://localhost:8080".to_string(),
            server_port: 3000,
            sweep_interval: 60,
            cache_dir: None,
        }
    }
}
