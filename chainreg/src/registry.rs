//! The chain configuration registry.

use std::collections::BTreeMap;

use crate::config;
use crate::environment::Environment;
use crate::error::Error;
use crate::network::Network;

/// Immutable registry of network configurations for one environment.
///
/// Built fresh on every load call; never mutated afterwards. Each call
/// produces an independent instance, so concurrent callers holding their own
/// registries observe no interference. Lookups hand out read-only views.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainConfigRegistry {
    environment: Environment,
    networks: BTreeMap<String, Network>,
}

impl ChainConfigRegistry {
    /// Load the embedded configuration document, scoped to `environment`.
    ///
    /// Any environment key with a section in the document is loadable here;
    /// the strict `{production, development}` restriction applies only to
    /// the selector-variable path ([`Self::from_process_env`]).
    ///
    /// # Errors
    ///
    /// See [`Self::load_from_str`].
    pub fn load(environment: &Environment) -> Result<Self, Error> {
        Self::load_from_str(config::DEFAULT_DOCUMENT, environment)
    }

    /// Load a caller-supplied configuration document, scoped to `environment`.
    ///
    /// Validation is fail-fast: the first invalid entry aborts the load and
    /// no partially-valid registry is ever exposed.
    ///
    /// # Errors
    ///
    /// - [`Error::ConfigParse`] — malformed document.
    /// - [`Error::UnknownEnvironment`] — no section for `environment`.
    /// - [`Error::InvalidAddressFormat`] / [`Error::InvalidChainId`] — a
    ///   structurally invalid network entry.
    pub fn load_from_str(document: &str, environment: &Environment) -> Result<Self, Error> {
        let networks = config::build_networks(document, environment)?;
        tracing::debug!(
            environment = %environment,
            networks = networks.len(),
            "registry loaded"
        );
        Ok(Self {
            environment: environment.clone(),
            networks,
        })
    }

    /// Load the environment selected by an explicit selector value.
    ///
    /// This is the pure core of [`Self::from_process_env`]; tests and
    /// callers that already hold the selector value use it directly instead
    /// of going through process-wide state.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingEnvironmentVariable`] — `selector` is `None`.
    /// - [`Error::InvalidEnvironmentValue`] — the value is outside
    ///   `{"production", "development"}`.
    /// - Any error of [`Self::load`].
    pub fn from_selector(selector: Option<&str>) -> Result<Self, Error> {
        let value = selector.ok_or(Error::MissingEnvironmentVariable)?;
        let environment = Environment::from_selector(value)?;
        Self::load(&environment)
    }

    /// Load the environment selected by the `NODE_ENV` process variable.
    ///
    /// # Errors
    ///
    /// See [`Self::from_selector`].
    pub fn from_process_env() -> Result<Self, Error> {
        let environment = Environment::from_process_env()?;
        Self::load(&environment)
    }

    /// Look up a network by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNetwork`] when `name` is not present.
    pub fn get(&self, name: &str) -> Result<&Network, Error> {
        self.networks
            .get(name)
            .ok_or_else(|| Error::UnknownNetwork(name.to_owned()))
    }

    /// The environment this registry was scoped to.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// All networks, in name order.
    pub fn networks(&self) -> impl Iterator<Item = &Network> {
        self.networks.values()
    }

    /// Number of networks in the registry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.networks.len()
    }

    /// Whether the registry holds no networks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }
}
