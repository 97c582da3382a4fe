//! A layered, read-only configuration module.
//!
//! Values come from an optional YAML file, overridden by the process
//! environment. Nested keys are addressed with dots (`oauth.github.client_id`)
//! and map to environment variables with a double underscore
//! (`OAUTH__GITHUB__CLIENT_ID`). The configuration is built once at startup
//! and never reloaded.

use std::path::{Path, PathBuf};

use config::{Config as RawConfig, Environment, File};
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load or parse configuration")]
    Load(#[from] config::ConfigError),

    #[error("Required setting `{0}` is missing or empty")]
    MissingRequired(String),
}

#[derive(Debug)]
pub struct Config {
    inner: RawConfig,
}

impl Config {
    pub fn builder<P: AsRef<Path>>(path: P) -> ConfigBuilder {
        ConfigBuilder::new(path.as_ref().to_path_buf())
    }

    #[cfg(any(test, feature = "testing"))]
    pub fn builder_test() -> test_utils::TestConfigBuilder {
        test_utils::TestConfigBuilder::new()
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<T, ConfigError> {
        self.inner.get(key).map_err(ConfigError::from)
    }

    /// Like [`Config::get`], but yields `default` when the key is absent.
    /// A present value of the wrong type is still an error.
    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> Result<T, ConfigError> {
        match self.inner.get(key) {
            Ok(value) => Ok(value),
            Err(config::ConfigError::NotFound(_)) => Ok(default),
            Err(err) => Err(ConfigError::from(err)),
        }
    }

    /// Reads a string setting that must be present and non-blank.
    pub fn require(&self, key: &str) -> Result<String, ConfigError> {
        match self.inner.get::<String>(key) {
            Ok(value) if !value.trim().is_empty() => Ok(value),
            Ok(_) | Err(config::ConfigError::NotFound(_)) => Err(ConfigError::MissingRequired(key.to_string())),
            Err(err) => Err(ConfigError::from(err)),
        }
    }
}

pub struct ConfigBuilder {
    path: PathBuf,
    file_required: bool,
    env: bool,
}

impl ConfigBuilder {
    fn new(path: PathBuf) -> Self {
        Self { path, file_required: false, env: false }
    }

    /// Fails the build when the configuration file does not exist.
    pub fn file_required(mut self) -> Self {
        self.file_required = true;
        self
    }

    /// Layers the process environment on top of the file.
    pub fn with_env(mut self) -> Self {
        self.env = true;
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        let mut builder = RawConfig::builder().add_source(File::from(self.path.as_path()).required(self.file_required));

        if self.env {
            builder = builder.add_source(Environment::default().separator("__"));
        }

        let inner = builder.build()?;
        tracing::info!(path = %self.path.to_string_lossy(), env = self.env, "Configuration loaded");

        Ok(Config { inner })
    }
}

#[cfg(any(test, feature = "testing"))]
pub mod test_utils {
    use std::collections::HashMap;

    use config::Value;

    use super::*;

    #[derive(Default)]
    pub struct TestConfigBuilder {
        values: HashMap<String, Value>,
    }

    impl TestConfigBuilder {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with<T: Into<Value>>(mut self, key: &str, value: T) -> Self {
            self.values.insert(key.to_string(), value.into());
            self
        }

        pub fn build(self) -> Config {
            let mut builder = RawConfig::builder();

            for (key, value) in self.values {
                builder = builder.set_override(key, value).expect("Failed to set test config value");
            }

            let inner = builder.build().expect("Failed to create config from test values");

            Config { inner }
        }
    }
}
