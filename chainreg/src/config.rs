//! Raw configuration document types and document → registry validation.
//!
//! The document is TOML, keyed environment → network:
//!
//! ```toml
//! [production.polygon]
//! chain_id = 137
//!
//! [production.polygon.contracts]
//! "StreamRegistry" = "0x0D483E10612F327FC11965Fc82E90dC19b141641"
//!
//! [[production.polygon.rpc_endpoints]]
//! protocol = "http"
//! url = "https://polygon-rpc.com"
//! ```
//!
//! The `*Doc` types here mirror the document structure one-to-one; the
//! validated domain types live in [`crate::network`]. Validation is
//! fail-fast: any invalid entry aborts the whole load, so a registry is
//! either fully valid or not produced at all.

use std::collections::BTreeMap;

use serde::Deserialize;
use url::Url;

use crate::address::Address;
use crate::environment::Environment;
use crate::error::Error;
use crate::network::{ChainId, Network, Protocol, RpcEndpoint};

/// The configuration document embedded in the crate.
///
/// This is the default registry content; the CLI can substitute a document
/// read from disk via `--config`.
pub const DEFAULT_DOCUMENT: &str = include_str!("../data/networks.toml");

/// One RPC endpoint entry as written in the document.
#[derive(Debug, Deserialize)]
struct RpcEndpointDoc {
    protocol: Protocol,
    url: Url,
}

/// One network entry as written in the document.
#[derive(Debug, Deserialize)]
struct NetworkDoc {
    chain_id: i64,
    #[serde(default)]
    contracts: BTreeMap<String, String>,
    #[serde(default)]
    rpc_endpoints: Vec<RpcEndpointDoc>,
}

impl NetworkDoc {
    /// Validate this entry into a domain [`Network`].
    fn into_network(self, name: String, environment: Environment) -> Result<Network, Error> {
        let chain_id = ChainId::new(self.chain_id)?;
        let mut contracts = BTreeMap::new();
        for (contract_name, raw_address) in self.contracts {
            contracts.insert(contract_name, Address::new(raw_address)?);
        }
        let rpc_endpoints = self
            .rpc_endpoints
            .into_iter()
            .map(|doc| RpcEndpoint {
                protocol: doc.protocol,
                url: doc.url,
            })
            .collect();
        Ok(Network::new(
            name,
            chain_id,
            environment,
            contracts,
            rpc_endpoints,
        ))
    }
}

/// Parsed but not yet validated document: environment key → network key → entry.
type Document = BTreeMap<String, BTreeMap<String, NetworkDoc>>;

/// Parse and validate one environment section of a document.
///
/// # Errors
///
/// - [`Error::ConfigParse`] — the document is not valid TOML or violates
///   the schema (missing fields, wrong types, malformed URLs).
/// - [`Error::UnknownEnvironment`] — the document has no section for
///   `environment`.
/// - [`Error::InvalidAddressFormat`] / [`Error::InvalidChainId`] — a
///   structurally invalid entry; the whole load is aborted.
pub(crate) fn build_networks(
    document: &str,
    environment: &Environment,
) -> Result<BTreeMap<String, Network>, Error> {
    let mut parsed: Document =
        toml::from_str(document).map_err(|e| Error::ConfigParse(e.to_string()))?;
    let section = parsed
        .remove(environment.as_str())
        .ok_or_else(|| Error::UnknownEnvironment(environment.as_str().to_owned()))?;

    let mut networks = BTreeMap::new();
    for (name, doc) in section {
        let network = doc.into_network(name.clone(), environment.clone())?;
        networks.insert(name, network);
    }
    Ok(networks)
}
