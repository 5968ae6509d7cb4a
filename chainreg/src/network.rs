//! Network (chain) configuration types.
//!
//! - [`ChainId`] — positive-integer chain identifier.
//! - [`Protocol`] / [`RpcEndpoint`] — typed RPC access points.
//! - [`Network`] — one blockchain network's validated configuration.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::address::Address;
use crate::environment::Environment;
use crate::error::Error;

/// A validated EIP-155 style chain identifier, always greater than zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ChainId(u64);

impl ChainId {
    /// Construct a chain id from a raw document integer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChainId`] for zero or negative values.
    pub fn new(raw: i64) -> Result<Self, Error> {
        u64::try_from(raw)
            .ok()
            .filter(|id| *id > 0)
            .map(Self)
            .ok_or(Error::InvalidChainId(raw))
    }

    /// The numeric value of this chain id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for ChainId {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Transport protocol of an RPC endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    /// HTTP(S) JSON-RPC.
    Http,
    /// WebSocket JSON-RPC.
    Websocket,
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http => f.write_str("http"),
            Self::Websocket => f.write_str("websocket"),
        }
    }
}

impl FromStr for Protocol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "http" => Ok(Self::Http),
            "websocket" => Ok(Self::Websocket),
            other => Err(format!(
                "unknown protocol '{other}', expected 'http' or 'websocket'"
            )),
        }
    }
}

/// A single named network access point.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcEndpoint {
    /// Transport protocol tag.
    pub protocol: Protocol,
    /// Endpoint URL.
    pub url: Url,
}

/// One blockchain network's validated configuration.
///
/// Values are constructed by the registry loader and immutable thereafter;
/// all accessors hand out read-only views.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    #[serde(skip)]
    name: String,
    chain_id: ChainId,
    environment: Environment,
    contracts: BTreeMap<String, Address>,
    rpc_endpoints: Vec<RpcEndpoint>,
}

impl Network {
    pub(crate) fn new(
        name: String,
        chain_id: ChainId,
        environment: Environment,
        contracts: BTreeMap<String, Address>,
        rpc_endpoints: Vec<RpcEndpoint>,
    ) -> Self {
        Self {
            name,
            chain_id,
            environment,
            contracts,
            rpc_endpoints,
        }
    }

    /// The name this network is registered under (e.g. `"polygon"`).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The network's chain id.
    #[must_use]
    pub const fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    /// The environment this network belongs to.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Deployed contract addresses, keyed by logical contract name.
    #[must_use]
    pub const fn contracts(&self) -> &BTreeMap<String, Address> {
        &self.contracts
    }

    /// Look up a deployed contract address by logical name.
    #[must_use]
    pub fn contract(&self, name: &str) -> Option<&Address> {
        self.contracts.get(name)
    }

    /// All RPC endpoints, in configured order (index 0 is the default).
    #[must_use]
    pub fn rpc_endpoints(&self) -> &[RpcEndpoint] {
        &self.rpc_endpoints
    }

    /// RPC endpoints matching `protocol`, preserving configured order.
    ///
    /// Returns an empty vec (not an error) when nothing matches.
    #[must_use]
    pub fn rpc_endpoints_by_protocol(&self, protocol: Protocol) -> Vec<&RpcEndpoint> {
        self.rpc_endpoints
            .iter()
            .filter(|endpoint| endpoint.protocol == protocol)
            .collect()
    }
}
