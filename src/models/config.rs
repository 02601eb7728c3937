//! Configuration model loaded from external sources.

use std::env;
use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Settings shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Root of the supplier REST API, e.g. `http://localhost:8080/neostore/api`.
    pub backend_url: String,
    /// Tera glob, e.g. `templates/**/*`.
    pub templates_dir: String,
    /// Signing key for flash message cookies; at least 64 bytes.
    pub secret: String,
}

impl ServerConfig {
    /// Loads `config/default.yaml`, the `APP_ENV` profile (default `local`)
    /// and `APP_*` environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());
        Self::load_from(Path::new("config"), &app_env)
    }

    /// Same as [`ServerConfig::load`] with an explicit config directory.
    pub fn load_from(dir: &Path, app_env: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(&dir.join("default").to_string_lossy()))
            .add_source(File::with_name(&dir.join(app_env).to_string_lossy()).required(false))
            .add_source(Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }
}
