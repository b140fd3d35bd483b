//! Cascading lookup across ordered data sources.
//!
//! [`LayeredLookup::resolve`] installs one recovery point per layer after
//! the first: a layer is consulted only when the failure still in flight
//! is one of the kinds it recovers from, or any failure when it lists
//! none. A failure no remaining layer recovers from stops the cascade and
//! surfaces, unless a default value catches everything.

use tracing::{info, info_span, warn};

use crate::bubble::Recovery;
use crate::chain::chain;
use crate::config::{invalid, FailureKind, LayerConfig, LookupConfig};
use crate::result::ResultExt;
use crate::{Error, Result};

/// Name reported when the configured default answers.
pub const DEFAULT_SOURCE: &str = "default";

/// A value and the name of the layer that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Resolved value.
    pub value: String,
    /// Layer name, or [`DEFAULT_SOURCE`].
    pub source: String,
}

#[derive(Debug, Clone)]
enum Answer {
    Value(String),
    Fails(FailureKind),
}

/// A simulated data source.
#[derive(Debug, Clone)]
pub struct Layer {
    name: String,
    answer: Answer,
    recovers_from: Vec<FailureKind>,
}

impl Layer {
    /// A layer that answers with `template`, `{id}` replaced by the id.
    #[must_use]
    pub fn answering(name: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            answer: Answer::Value(template.into()),
            recovers_from: Vec::new(),
        }
    }

    /// A layer that always fails with `kind`.
    #[must_use]
    pub fn failing(name: impl Into<String>, kind: FailureKind) -> Self {
        Self {
            name: name.into(),
            answer: Answer::Fails(kind),
            recovers_from: Vec::new(),
        }
    }

    /// Restrict the failures this layer is consulted for. Without a
    /// restriction the layer handles any failure of the layers before it.
    /// Ignored on the first layer of a lookup.
    #[must_use]
    pub fn recovering_from(mut self, kinds: impl IntoIterator<Item = FailureKind>) -> Self {
        self.recovers_from = kinds.into_iter().collect();
        self
    }

    /// Layer name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Failure kinds this layer recovers from; empty means any.
    #[must_use]
    pub fn recovers_from(&self) -> &[FailureKind] {
        &self.recovers_from
    }

    /// Fetch the value for `id`.
    ///
    /// # Errors
    ///
    /// Returns the layer's failure sentinel wrapped with the layer name.
    pub fn fetch(&self, id: u64) -> Result<String> {
        match &self.answer {
            Answer::Value(template) => Ok(template.replace("{id}", &id.to_string())),
            Answer::Fails(kind) => Err(kind.error().context(format!("{} layer", self.name))),
        }
    }

    fn resolve(&self, id: u64) -> Result<Resolution> {
        chain::<Resolution, _>(self.fetch(id)).map(|value| Resolution {
            value,
            source: self.name.clone(),
        })
    }
}

impl TryFrom<&LayerConfig> for Layer {
    type Error = Error;

    fn try_from(config: &LayerConfig) -> Result<Self> {
        let layer = match (&config.value, config.fails_with) {
            (Some(template), None) => Self::answering(&config.name, template),
            (None, Some(kind)) => Self::failing(&config.name, kind),
            _ => {
                return Err(invalid(&format!(
                    "layer '{}' must set exactly one of value or fails_with",
                    config.name
                )))
            }
        };
        Ok(layer.recovering_from(config.recovers_from.iter().copied()))
    }
}

/// Ordered cascade of layers with an optional catch-all default.
#[derive(Debug, Clone)]
pub struct LayeredLookup {
    layers: Vec<Layer>,
    default_value: Option<String>,
}

impl LayeredLookup {
    /// Build a lookup from explicit layers.
    #[must_use]
    pub fn new(layers: Vec<Layer>, default_value: Option<String>) -> Self {
        Self {
            layers,
            default_value,
        }
    }

    /// Build a lookup from configuration, validating it first.
    ///
    /// # Errors
    ///
    /// Returns the validation error when the configuration is malformed.
    pub fn from_config(config: &LookupConfig) -> Result<Self> {
        config.validate()?;
        let layers = config
            .layers
            .iter()
            .map(Layer::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(layers, config.default_value.clone()))
    }

    /// Resolve `id` through the recovery-point cascade.
    ///
    /// # Errors
    ///
    /// Without a default, returns the failure still in flight once no
    /// remaining layer recovers from it, or [`Error::EmptyResult`] when
    /// there are no layers.
    pub fn resolve(&self, id: u64) -> Result<Resolution> {
        let _span = info_span!("resolve", id).entered();

        let mut recovery = match self.layers.split_first() {
            Some((first, rest)) => {
                let mut recovery = Recovery::run(|| Ok(first.resolve(id)));
                for layer in rest {
                    let when: Vec<Error> = layer
                        .recovers_from
                        .iter()
                        .copied()
                        .map(FailureKind::error)
                        .collect();
                    recovery = recovery.catch_with(
                        |err| {
                            warn!(%err, next = %layer.name, "layer failed, falling through");
                            layer.resolve(id).bubble_up()
                        },
                        &when,
                    );
                }
                recovery
            }
            None => Recovery::from_result(Err(Error::EmptyResult)),
        };

        if let Some(default) = &self.default_value {
            recovery = recovery.fallback(
                Resolution {
                    value: default.replace("{id}", &id.to_string()),
                    source: DEFAULT_SOURCE.to_owned(),
                },
                &[],
            );
        }

        let resolution = recovery.catch()?;
        info!(source = %resolution.source, "lookup resolved");
        Ok(resolution)
    }

    /// Resolve `id` by taking the first layer that answers, ignoring
    /// which failure the earlier layers reported.
    ///
    /// # Errors
    ///
    /// Returns the last layer's error when every layer fails and no
    /// default is configured.
    pub fn resolve_first(&self, id: u64) -> Result<Resolution> {
        let _span = info_span!("resolve_first", id).entered();

        let mut last = Err(Error::EmptyResult);
        for layer in &self.layers {
            last = layer.resolve(id);
            if last.is_ok() {
                return last;
            }
        }

        match &self.default_value {
            Some(default) => Ok(Resolution {
                value: default.replace("{id}", &id.to_string()),
                source: DEFAULT_SOURCE.to_owned(),
            }),
            None => last,
        }
    }
}
