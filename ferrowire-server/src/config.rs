/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 23/8/26
******************************************************************************/

//! Server configuration read from the environment.

/// Interface the server binds to when `FERROWIRE_HOST` is unset.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Port the server binds to when `FERROWIRE_PORT` is unset.
pub const DEFAULT_PORT: u16 = 8088;

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface the listener binds to.
    pub host: String,
    /// TCP port the listener binds to.
    pub port: u16,
}

impl ServerConfig {
    /// Creates a configuration with the default host and port.
    #[must_use]
    pub fn new() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }

    /// Reads the configuration from `FERROWIRE_HOST` and `FERROWIRE_PORT`,
    /// falling back to the defaults for anything unset or unparseable.
    #[must_use]
    pub fn from_env() -> Self {
        let host = std::env::var("FERROWIRE_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = std::env::var("FERROWIRE_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        Self { host, port }
    }

    /// Sets the bind host.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Sets the bind port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Returns the `host:port` pair for the TCP listener.
    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new()
    }
}
