//! Multi-chain deployment configuration registry.
//!
//! Deployment tooling for a streaming-data network targets several
//! blockchain networks at once. This crate replaces ad hoc per-script
//! parsing of that configuration with one validated, typed, read-only
//! registry:
//!
//! - [`ChainConfigRegistry`] — immutable name → [`Network`] mapping, built
//!   from an embedded document (or any caller-supplied one).
//! - [`Network`] — chain id, environment tag, contract addresses, ordered
//!   RPC endpoints.
//! - [`Address`] / [`ChainId`] — validated at construction; a registry is
//!   either fully valid or not produced at all.
//!
//! ```
//! use chainreg::{ChainConfigRegistry, Environment, Protocol};
//!
//! let registry = ChainConfigRegistry::load(&Environment::Production)?;
//! let polygon = registry.get("polygon")?;
//! assert_eq!(polygon.chain_id().get(), 137);
//! let http = polygon.rpc_endpoints_by_protocol(Protocol::Http);
//! assert!(!http.is_empty());
//! # Ok::<(), chainreg::Error>(())
//! ```

mod address;
mod config;
mod environment;
mod error;
mod network;
mod registry;

pub use self::address::Address;
pub use self::config::DEFAULT_DOCUMENT;
pub use self::environment::Environment;
pub use self::error::{ENV_SELECTOR, Error};
pub use self::network::{ChainId, Network, Protocol, RpcEndpoint};
pub use self::registry::ChainConfigRegistry;
