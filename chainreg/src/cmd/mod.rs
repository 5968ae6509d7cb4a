//! CLI definitions and command implementations.

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use chainreg::{ChainConfigRegistry, Environment, Error, Protocol};

pub mod address;
pub mod init;
pub mod list;
pub mod rpc;
pub mod show;

/// chainreg — resolve contract addresses and RPC endpoints for deployments.
#[derive(Debug, Parser)]
#[command(name = "chainreg")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Environment key to load (any key present in the document).
    /// When omitted, the strict NODE_ENV selector is consulted instead.
    #[arg(short, long, global = true)]
    pub environment: Option<String>,

    /// Path to a TOML document overriding the embedded registry.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write the embedded configuration document to a file.
    Init {
        /// Output path for the configuration file.
        #[arg(short, long, default_value = "networks.toml")]
        output: PathBuf,

        /// Overwrite the file if it already exists.
        #[arg(long, default_value_t = false)]
        force: bool,
    },

    /// List the networks of the selected environment.
    List,

    /// Print one deployed contract address.
    Address {
        /// Network name (e.g. "polygon").
        network: String,

        /// Logical contract name (e.g. "StreamRegistry").
        contract: String,
    },

    /// Print RPC endpoint URLs in configured order (default first).
    Rpc {
        /// Network name.
        network: String,

        /// Only print endpoints with this protocol.
        #[arg(short, long)]
        protocol: Option<Protocol>,
    },

    /// Dump one network's configuration as JSON.
    Show {
        /// Network name.
        network: String,
    },
}

/// Dispatch the parsed CLI to its command implementation.
///
/// # Errors
///
/// Propagates any registry or I/O error from the executed command.
pub fn run(cli: &Cli) -> Result<(), Error> {
    match &cli.command {
        Commands::Init { output, force } => init::run(output, *force),
        Commands::List => list::run(&load_registry(cli)?),
        Commands::Address { network, contract } => {
            address::run(&load_registry(cli)?, network, contract)
        }
        Commands::Rpc { network, protocol } => rpc::run(&load_registry(cli)?, network, *protocol),
        Commands::Show { network } => show::run(&load_registry(cli)?, network),
    }
}

/// Build the registry the global flags select.
///
/// `--environment` takes an open key; without it the strict `NODE_ENV`
/// selector applies. `--config` substitutes a document read from disk for
/// the embedded one; the file read happens here so the library stays free
/// of I/O.
fn load_registry(cli: &Cli) -> Result<ChainConfigRegistry, Error> {
    let environment = match cli.environment.as_deref() {
        Some(key) => Environment::from(key),
        None => Environment::from_process_env()?,
    };
    match &cli.config {
        Some(path) => {
            let document = fs::read_to_string(path)?;
            ChainConfigRegistry::load_from_str(&document, &environment)
        }
        None => ChainConfigRegistry::load(&environment),
    }
}
