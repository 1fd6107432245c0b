//! Server config loader (strict parsing).

pub mod schema;

use std::fs;
use std::io::ErrorKind;

use loadlab_core::error::{LoadLabError, Result};

pub use schema::{ServerConfig, ServerSection};

/// Env var naming the config file.
pub const CONFIG_ENV: &str = "LOADLAB_CONFIG";
/// File read when `LOADLAB_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "loadlab.yaml";

/// Resolve the config file from the environment.
///
/// A missing default file falls back to built-in defaults; a missing file that
/// was named explicitly is an error.
pub fn load_from_env() -> Result<ServerConfig> {
    match std::env::var(CONFIG_ENV) {
        Ok(path) => load_from_file(&path),
        Err(_) => match fs::read_to_string(DEFAULT_CONFIG_PATH) {
            Ok(s) => load_from_str(&s),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(path = DEFAULT_CONFIG_PATH, "config file not found, using defaults");
                Ok(ServerConfig::default())
            }
            Err(e) => Err(LoadLabError::Internal(format!("read config failed: {e}"))),
        },
    }
}

pub fn load_from_file(path: &str) -> Result<ServerConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| LoadLabError::Internal(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServerConfig> {
    let cfg: ServerConfig = serde_yaml::from_str(s)
        .map_err(|e| LoadLabError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
