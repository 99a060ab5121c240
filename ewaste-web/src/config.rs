//! Server settings read from the environment.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use ewaste_core::{BuiltinReference, FileReference, ReferenceSource};

/// Default listening port.
pub const DEFAULT_PORT: u16 = 8080;

const HOST_VAR: &str = "EWASTE_HOST";
const PORT_VAR: &str = "EWASTE_PORT";
const REFERENCE_FILE_VAR: &str = "EWASTE_REFERENCE_FILE";

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
/// Invalid server settings.
pub enum ConfigError {
    /// The host is not an IP address.
    #[error("Invalid EWASTE_HOST value: {0}")]
    InvalidHost(String),
    /// The port is not a number between 0 and 65535.
    #[error("Invalid EWASTE_PORT value: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Where to listen and which reference data to load.
pub struct ServerConfig {
    /// Interface to bind.
    pub host: IpAddr,
    /// Port to bind; 0 picks a free one.
    pub port: u16,
    /// Reference file overriding the built-in figures.
    pub reference_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            reference_file: None,
        }
    }
}

impl ServerConfig {
    /// Read settings from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read settings through `lookup`, which maps a variable name to its value.
    ///
    /// Unset and blank variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a variable is set to an unusable value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();
        if let Some(host) = read(HOST_VAR) {
            config.host = host.parse().map_err(|_err| ConfigError::InvalidHost(host))?;
        }
        if let Some(port) = read(PORT_VAR) {
            config.port = port.parse().map_err(|_err| ConfigError::InvalidPort(port))?;
        }
        config.reference_file = read(REFERENCE_FILE_VAR).map(PathBuf::from);
        Ok(config)
    }

    /// Socket address to bind.
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Reference source selected by these settings.
    #[must_use]
    pub fn reference_source(&self) -> Box<dyn ReferenceSource> {
        match &self.reference_file {
            Some(path) => Box::new(FileReference::new(path.clone())),
            None => Box::new(BuiltinReference),
        }
    }
}
