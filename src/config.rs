//! Environment configuration for the HTTP server

use hypermodern_core::LabelOrder;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::num::{NonZeroU64, NonZeroUsize};
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub request_timeout: Duration,
    pub max_body_bytes: usize,
    pub label_order: LabelOrder,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            label_order: LabelOrder::default(),
        }
    }
}

impl ServerConfig {
    /// Read the configuration from the process environment
    ///
    /// A `.env` file, if present, should already have been loaded.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    ///
    /// Unparseable values are logged and replaced by their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host: IpAddr = parse_or(&lookup, "HOST", defaults.bind_addr.ip());
        let port: u16 = parse_or(&lookup, "PORT", defaults.bind_addr.port());
        // Zero would time out or reject every request
        let request_timeout = parse_value::<_, NonZeroU64>(&lookup, "REQUEST_TIMEOUT_SECS")
            .map_or(defaults.request_timeout, |secs| Duration::from_secs(secs.get()));
        let max_body_bytes = parse_value::<_, NonZeroUsize>(&lookup, "MAX_BODY_BYTES")
            .map_or(defaults.max_body_bytes, NonZeroUsize::get);
        let label_order: LabelOrder = parse_or(&lookup, "LABEL_ORDER", defaults.label_order);

        Self {
            bind_addr: SocketAddr::new(host, port),
            request_timeout,
            max_body_bytes,
            label_order,
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    parse_value(lookup, key).unwrap_or(default)
}

/// Parsed value of `key`, `None` when unset, blank or invalid
fn parse_value<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = lookup(key)?;
    if raw.trim().is_empty() {
        return None;
    }
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Invalid {} value '{}': {}", key, raw, e);
            None
        }
    }
}
