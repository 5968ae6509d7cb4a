//! chainreg CLI
//!
//! Resolves contract addresses and RPC endpoints for the deployment scripts
//! of a multi-chain streaming-data network.
//!
//! ```sh
//! chainreg init                             # Write the embedded networks.toml
//! chainreg -e production list               # List production networks
//! chainreg -e production address polygon StreamRegistry
//! chainreg -e production rpc polygon --protocol http
//! ```
//!
//! Without `--environment`, the `NODE_ENV` variable selects the environment
//! (strictly `production` or `development`).

mod cmd;

use clap::Parser;
use cmd::Cli;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Console logging with `RUST_LOG` filtering, `info` fallback.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[allow(clippy::print_stderr)]
fn main() {
    // Load .env variables before any selector-variable read
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    if let Err(e) = cmd::run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
