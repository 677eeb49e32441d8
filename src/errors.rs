//! Error types used when configuring and running the server.
//!
//! Query execution has no error type of its own: lookups that miss resolve to `null` or an empty
//! list, and malformed requests are answered with GraphQL errors by the service.

use std::{
    io::Error as IoError,
    net::{AddrParseError, SocketAddr},
    num::ParseIntError,
};
use thiserror::Error;

/// Errors that may occur when reading configuration. Created by
/// [`Config::from_env`](crate::config::Config::from_env).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A variable holding a port was not a valid port number.
    #[error("{name} is not a valid port number: {value:?}")]
    InvalidPort {
        /// Name of the offending variable.
        name: &'static str,
        /// The raw value.
        value: String,
        /// The source error.
        #[source]
        source: ParseIntError,
    },
    /// A variable holding an address was not a valid IP address.
    #[error("{name} is not a valid IP address: {value:?}")]
    InvalidAddress {
        /// Name of the offending variable.
        name: &'static str,
        /// The raw value.
        value: String,
        /// The source error.
        #[source]
        source: AddrParseError,
    },
}

/// Errors that may occur while serving. Created by [`run`](crate::service::run).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ServeError {
    /// The listener could not be bound, e.g. because the port is taken.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        /// The address that was requested.
        addr: SocketAddr,
        /// The source error.
        #[source]
        source: IoError,
    },
    /// The server stopped with an error after binding.
    #[error("Server on {addr} failed: {source}")]
    Serve {
        /// The address being served.
        addr: SocketAddr,
        /// The source error.
        #[source]
        source: IoError,
    },
}
