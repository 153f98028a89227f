//! Server configuration, read from the environment at startup.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::provider::TripsApiConfig;

/// Default port to listen on.
const DEFAULT_PORT: u16 = 3000;

/// Default provider timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors reading configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed
    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Configuration for the whole server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to
    pub bind_addr: SocketAddr,
    /// Trips provider settings
    pub trips_api: TripsApiConfig,
    /// Snapshot file for the trip store; `None` keeps trips in memory
    pub store_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    ///
    /// Missing provider URL or key are left empty here; the trips API
    /// client refuses to start without them.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let host: IpAddr = parse_or(get("HOST"), "HOST", IpAddr::V4(Ipv4Addr::UNSPECIFIED))?;
        let port: u16 = parse_or(get("PORT"), "PORT", DEFAULT_PORT)?;
        let timeout_raw = get("TRIPS_API_TIMEOUT_SECS");
        let timeout_secs: u64 =
            parse_or(timeout_raw.clone(), "TRIPS_API_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        // A zero timeout would fail every provider call immediately
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                name: "TRIPS_API_TIMEOUT_SECS",
                value: timeout_raw.unwrap_or_default(),
            });
        }

        let trips_api = TripsApiConfig::new(
            get("TRIPS_API_URL").unwrap_or_default(),
            get("TRIPS_API_KEY").unwrap_or_default(),
        )
        .with_timeout(timeout_secs);

        Ok(Self {
            bind_addr: SocketAddr::new(host, port),
            trips_api,
            store_path: get("TRIPS_STORE_PATH").map(PathBuf::from),
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    value: Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(v) => v
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value: v }),
    }
}
