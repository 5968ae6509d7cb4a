//! `chainreg address` command — print one deployed contract address.

use chainreg::{ChainConfigRegistry, Error};

/// Execute the `address` command.
///
/// Prints the address of `contract` on `network`, the exact value a
/// deployment script should target with a transaction.
///
/// # Errors
///
/// Returns an error when the network or the contract is not configured.
#[allow(clippy::print_stdout)]
pub fn run(registry: &ChainConfigRegistry, network: &str, contract: &str) -> Result<(), Error> {
    let net = registry.get(network)?;
    let address = net
        .contract(contract)
        .ok_or_else(|| Error::UnknownContract {
            network: network.to_owned(),
            contract: contract.to_owned(),
        })?;
    println!("{address}");
    Ok(())
}
