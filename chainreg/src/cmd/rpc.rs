//! `chainreg rpc` command — print RPC endpoint URLs.

use chainreg::{ChainConfigRegistry, Error, Protocol};

/// Execute the `rpc` command.
///
/// Prints endpoint URLs in configured order (the first line is the default
/// endpoint), optionally filtered by protocol. No matching endpoints is not
/// an error; the output is simply empty.
///
/// # Errors
///
/// Returns an error when the network is not configured.
#[allow(clippy::print_stdout)]
pub fn run(
    registry: &ChainConfigRegistry,
    network: &str,
    protocol: Option<Protocol>,
) -> Result<(), Error> {
    let net = registry.get(network)?;
    match protocol {
        Some(protocol) => {
            for endpoint in net.rpc_endpoints_by_protocol(protocol) {
                println!("{}", endpoint.url);
            }
        }
        None => {
            for endpoint in net.rpc_endpoints() {
                println!("{}", endpoint.url);
            }
        }
    }
    Ok(())
}
