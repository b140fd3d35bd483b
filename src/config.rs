//! Layered lookup configuration parsing and validation.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::{Error, Result, Sentinel};

/// The requested entry is not cached.
pub static CACHE_MISS: Sentinel = Sentinel::new("cache miss");
/// The requested entry does not exist.
pub static NOT_FOUND: Sentinel = Sentinel::new("resource not found");
/// The backing database is unreachable.
pub static DATABASE_DOWN: Sentinel = Sentinel::new("database unavailable");
/// A remote API call failed.
pub static REMOTE_FAILED: Sentinel = Sentinel::new("remote API failed");
/// An operation did not finish in time.
pub static TIMEOUT: Sentinel = Sentinel::new("operation timeout");

/// Failure a simulated layer reports.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Maps to [`CACHE_MISS`].
    CacheMiss,
    /// Maps to [`NOT_FOUND`].
    NotFound,
    /// Maps to [`DATABASE_DOWN`].
    DatabaseDown,
    /// Maps to [`REMOTE_FAILED`].
    RemoteFailed,
    /// Maps to [`TIMEOUT`].
    Timeout,
}

impl FailureKind {
    /// The sentinel this kind stands for.
    #[must_use]
    pub fn sentinel(self) -> &'static Sentinel {
        match self {
            Self::CacheMiss => &CACHE_MISS,
            Self::NotFound => &NOT_FOUND,
            Self::DatabaseDown => &DATABASE_DOWN,
            Self::RemoteFailed => &REMOTE_FAILED,
            Self::Timeout => &TIMEOUT,
        }
    }

    /// The error whose identity is this kind's sentinel.
    #[must_use]
    pub fn error(self) -> Error {
        self.sentinel().error()
    }
}

/// One data source in the lookup cascade.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct LayerConfig {
    /// Unique layer name, reported as the source of a resolution.
    pub name: String,
    /// Value the layer answers with; `{id}` is replaced by the requested id.
    #[serde(default)]
    pub value: Option<String>,
    /// Failure the layer reports instead of answering.
    #[serde(default)]
    pub fails_with: Option<FailureKind>,
    /// Failures from earlier layers this layer is consulted for; empty
    /// means any failure.
    #[serde(default)]
    pub recovers_from: Vec<FailureKind>,
}

/// Lookup configuration parsed from a TOML file.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct LookupConfig {
    /// Value used when every layer fails; `None` surfaces the last error.
    #[serde(default)]
    pub default_value: Option<String>,
    /// Layers in the order they are consulted.
    pub layers: Vec<LayerConfig>,
}

impl LookupConfig {
    /// Load and validate configuration from a TOML file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid
    /// TOML, or fails validation.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|err| Error::from(err).context("failed to read config"))?;
        Self::from_toml_str(&raw)
    }

    /// Parse and validate configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing or validation fails.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the cascade is well formed.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no layers, a name repeats, a layer
    /// sets neither or both of `value` and `fails_with`, or the first
    /// layer sets `recovers_from`.
    pub fn validate(&self) -> Result<()> {
        let Some(first) = self.layers.first() else {
            return Err(invalid("at least one layer is required"));
        };
        if !first.recovers_from.is_empty() {
            return Err(invalid(&format!(
                "layer '{}' is consulted first and cannot set recovers_from",
                first.name
            )));
        }

        let mut seen = HashSet::new();
        for layer in &self.layers {
            if layer.name.trim().is_empty() {
                return Err(invalid("layer name must not be empty"));
            }
            if !seen.insert(layer.name.as_str()) {
                return Err(invalid(&format!("duplicate layer name '{}'", layer.name)));
            }
            if layer.value.is_some() == layer.fails_with.is_some() {
                return Err(invalid(&format!(
                    "layer '{}' must set exactly one of value or fails_with",
                    layer.name
                )));
            }
        }

        Ok(())
    }
}

pub(crate) fn invalid(msg: &str) -> Error {
    Error::msg(msg).context("invalid config")
}
