//! `chainreg show` command — dump one network's configuration as JSON.

use chainreg::{ChainConfigRegistry, Error};

/// Execute the `show` command.
///
/// Emits the network as a JSON object keyed by its name, with camelCase
/// fields (`chainId`, `environment`, `contracts`, `rpcEndpoints`) — the
/// shape the surrounding deployment scripts consume.
///
/// # Errors
///
/// Returns an error when the network is not configured or serialization
/// fails.
#[allow(clippy::print_stdout)]
pub fn run(registry: &ChainConfigRegistry, network: &str) -> Result<(), Error> {
    let net = registry.get(network)?;
    let value = serde_json::to_value(net)
        .map_err(|e| Error::ConfigParse(format!("failed to render JSON: {e}")))?;

    let mut doc = serde_json::Map::new();
    doc.insert(net.name().to_owned(), value);
    let rendered = serde_json::to_string_pretty(&doc)
        .map_err(|e| Error::ConfigParse(format!("failed to render JSON: {e}")))?;
    println!("{rendered}");
    Ok(())
}
