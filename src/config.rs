//! Server configuration.

use crate::errors::ConfigError;
use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
};

/// The port variable set by the Azure Functions host for custom handlers.
pub const PORT_VAR: &str = "FUNCTIONS_CUSTOMHANDLER_PORT";

/// The variable overriding the address to bind to.
pub const ADDRESS_VAR: &str = "BOOKLIST_BIND_ADDRESS";

/// Port used when [`PORT_VAR`] is unset, matching the local Functions host default.
pub const DEFAULT_PORT: u16 = 7071;

/// Where to listen for requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// The address to bind to.
    pub address: IpAddr,
    /// The port to bind to.
    pub port: u16,
}

impl Default for Config {
    #[inline]
    fn default() -> Self {
        Self {
            address: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    /// Read the configuration from the process environment. Unset variables fall back to the
    /// [defaults](Self::default).
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed.
    #[inline]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Like [`from_env`](Self::from_env), but reads variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed.
    #[inline]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(ADDRESS_VAR) {
            config.address = value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidAddress {
                    name: ADDRESS_VAR,
                    value,
                    source,
                })?;
        }

        if let Some(value) = lookup(PORT_VAR) {
            config.port = value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidPort {
                    name: PORT_VAR,
                    value,
                    source,
                })?;
        }

        Ok(config)
    }

    /// The socket address to bind to.
    #[inline]
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.address, self.port)
    }
}
