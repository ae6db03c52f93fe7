//! Unity MCP Bridge
//!
//! Resolves the bridge configuration and reports the effective settings.

use clap::Parser;
use tracing::{error, info};
use unity_mcp_bridge::config::loader::report_dotenv;
use unity_mcp_bridge::{ServerConfig, initialize_configuration, logging};

/// Unity MCP Bridge - resolve and report the bridge configuration
#[derive(Parser, Debug)]
#[command(name = "unity-mcp-bridge")]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Variables from .env are visible to the override pass
    let dotenv = dotenvy::dotenv();

    // Overrides never touch the logging fields, so the defaults are final
    logging::init(&ServerConfig::default())?;

    report_dotenv(dotenv);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting Unity MCP bridge"
    );

    let config = initialize_configuration();

    info!(
        remote = %config.remote_addr(),
        server_port = config.server_port,
        timeout_secs = config.connection_timeout_secs,
        buffer_size = config.buffer_size,
        max_retries = config.max_retries,
        retry_delay_secs = config.retry_delay_secs,
        "Configuration ready"
    );

    if args.print_config {
        let json = serde_json::to_string_pretty(&*config)
            .inspect_err(|e| error!(error = %e, "Failed to serialize configuration"))?;
        println!("{json}");
    }

    Ok(())
}
