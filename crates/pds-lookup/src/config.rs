use std::env;
use std::time::Duration;

use atproto_pds_resolver::{CachePolicy, ResolverConfig};

/// Lookup configuration parsed from environment variables
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub service_url: Option<String>,
    pub plc_directory_url: Option<String>,
    pub timeout_secs: u64,
    pub cache_ttl_secs: Option<u64>,
    pub cache_max_capacity: Option<u64>,
    pub json_logs: bool,
}

impl Config {
    /// Parse configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let service_url = var("IDENTITY_SERVICE_URL");
        let plc_directory_url = var("PLC_DIRECTORY_URL");

        let timeout_secs = var("HTTP_TIMEOUT_SECS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);

        let cache_ttl_secs = var("CACHE_TTL_SECS").and_then(|s| s.parse().ok());
        let cache_max_capacity = var("CACHE_MAX_CAPACITY").and_then(|s| s.parse().ok());

        // JSON output for GCP Cloud Logging
        let json_logs = var("LOG_FORMAT").map(|v| v == "json").unwrap_or(false);

        Self {
            service_url,
            plc_directory_url,
            timeout_secs,
            cache_ttl_secs,
            cache_max_capacity,
            json_logs,
        }
    }

    pub fn resolver_config(&self) -> ResolverConfig {
        let mut config = ResolverConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            cache: CachePolicy {
                max_capacity: self.cache_max_capacity,
                time_to_live: self.cache_ttl_secs.map(Duration::from_secs),
            },
            ..Default::default()
        };
        if let Some(ref url) = self.service_url {
            config.service_url.clone_from(url);
        }
        if let Some(ref url) = self.plc_directory_url {
            config.plc_directory_url.clone_from(url);
        }
        config
    }
}
