use std::net::SocketAddr;
use std::time::Duration;

use serde::Deserialize;
use loadlab_core::error::{LoadLabError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { version: 1, server: ServerSection::default() }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(LoadLabError::UnsupportedVersion);
        }
        self.server.validate()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Also serve the `/consumeCPU`-style routes of the first sample app.
    #[serde(default = "default_legacy_routes")]
    pub legacy_routes: bool,

    #[serde(default = "default_shutdown_grace_ms")]
    pub shutdown_grace_ms: u64,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            legacy_routes: default_legacy_routes(),
            shutdown_grace_ms: default_shutdown_grace_ms(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if self.shutdown_grace_ms > 60000 {
            return Err(LoadLabError::BadRequest(
                "server.shutdown_grace_ms must be between 0 and 60000".into(),
            ));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            LoadLabError::BadRequest(format!("server.listen must be a valid SocketAddr: {e}"))
        })
    }

    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_millis(self.shutdown_grace_ms)
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_legacy_routes() -> bool {
    true
}
fn default_shutdown_grace_ms() -> u64 {
    5000
}
