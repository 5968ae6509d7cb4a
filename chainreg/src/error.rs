//! Unified error types for the registry and CLI.

use thiserror::Error;

/// Name of the process-wide deployment-environment selector variable.
pub const ENV_SELECTOR: &str = "NODE_ENV";

/// Top-level error type for the chainreg crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration document violates its schema.
    #[error("config: {0}")]
    ConfigParse(String),

    /// A contract address is not a 0x-prefixed 40-hex-digit string.
    #[error("invalid address format '{0}': expected 0x-prefixed 40-hex-digit string")]
    InvalidAddressFormat(String),

    /// A chain id is zero or negative.
    #[error("invalid chain id {0}: must be a positive integer")]
    InvalidChainId(i64),

    /// The deployment-environment selector variable is unset.
    #[error("environment variable '{ENV_SELECTOR}' is not set")]
    MissingEnvironmentVariable,

    /// The selector variable holds a value outside the recognized set.
    #[error("invalid environment '{0}': expected 'production' or 'development'")]
    InvalidEnvironmentValue(String),

    /// The configuration document has no section for the requested environment.
    #[error("unknown environment '{0}'")]
    UnknownEnvironment(String),

    /// Lookup of a network name not present in the loaded registry.
    #[error("unknown network '{0}'")]
    UnknownNetwork(String),

    /// Lookup of a contract name not configured for a network.
    #[error("unknown contract '{contract}' on network '{network}'")]
    UnknownContract {
        /// Network the lookup was issued against.
        network: String,
        /// Logical contract name that is not configured.
        contract: String,
    },

    /// CLI file handling failed.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
