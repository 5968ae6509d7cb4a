//! `chainreg list` command — list the networks of the selected environment.

use chainreg::{ChainConfigRegistry, Error};

/// Execute the `list` command.
///
/// # Errors
///
/// Currently infallible; kept fallible for uniformity with the other
/// commands.
#[allow(clippy::print_stdout, clippy::unnecessary_wraps)]
pub fn run(registry: &ChainConfigRegistry) -> Result<(), Error> {
    for network in registry.networks() {
        println!(
            "{} (chain id {}, {} contracts, {} endpoints)",
            network.name(),
            network.chain_id(),
            network.contracts().len(),
            network.rpc_endpoints().len()
        );
    }
    Ok(())
}
