//! Session configuration.

use crate::endpoint::Environment;
use crate::types::DEFAULT_API_VERSION;

/// Configuration for establishing a session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// The environment to log in against.
    pub environment: Environment,
    /// The Partner API version, interpolated into the endpoint URL.
    pub version: String,
    /// Whether single-element results are wrapped into a one-element array.
    pub wrap_results: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Live,
            version: DEFAULT_API_VERSION.to_string(),
            wrap_results: true,
        }
    }
}

impl SessionConfig {
    /// Create a new session config builder.
    pub fn builder() -> SessionConfigBuilder {
        SessionConfigBuilder::default()
    }
}

/// Builder for [`SessionConfig`].
#[derive(Debug, Default)]
pub struct SessionConfigBuilder {
    config: SessionConfig,
}

impl SessionConfigBuilder {
    /// Set the target environment.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.config.environment = environment;
        self
    }

    /// Set the Partner API version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.config.version = version.into();
        self
    }

    /// Enable or disable result wrapping.
    pub fn with_wrap_results(mut self, wrap: bool) -> Self {
        self.config.wrap_results = wrap;
        self
    }

    /// Build the session configuration.
    pub fn build(self) -> SessionConfig {
        self.config
    }
}
