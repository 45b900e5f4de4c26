//! media-bridge - serves media control and audio routing commands over WebSocket.

use std::{error::Error, path::PathBuf, process};

use clap::Parser;
use media_bridge::{
    bridge::{self, BridgeServer, net},
    config::{Config, ConfigPaths},
    tracing_config,
};
use tracing::{Level, info, span, warn};

#[derive(Parser)]
#[command(name = "media-bridge")]
#[command(about = "Expose media playback and audio output control over WebSocket")]
struct Cli {
    /// Address to bind; overrides the config file and LAN detection
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Configuration file, created with defaults when missing
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also write daily-rotated logs to the data directory
    #[arg(long)]
    log_file: bool,

    /// Print the JSON schema of the configuration file and exit
    #[arg(long)]
    print_config_schema: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("media-bridge: {e}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    if cli.print_config_schema {
        let schema = schemars::schema_for!(Config);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(());
    }

    let config_path = match cli.config {
        Some(path) => path,
        None => ConfigPaths::main_config()?,
    };
    let created = Config::ensure_file(&config_path)?;
    let mut config = Config::load(&config_path)?;
    apply_overrides(&mut config, cli.host, cli.port);

    let _guard = if cli.log_file {
        Some(tracing_config::init_with_file(config.general.log_level)?)
    } else {
        tracing_config::init(config.general.log_level)?;
        None
    };

    let _span = span!(Level::INFO, "media_bridge").entered();
    info!(config = %config_path.display(), "Starting media bridge");
    if created {
        info!("No configuration found, wrote defaults to {}", config_path.display());
    }

    let address = net::resolve_bind_address(
        config.server.host.as_deref(),
        config.server.port,
        &config.server.probe_address,
    )
    .await?;

    let router = bridge::build_router(&config);
    let server = BridgeServer::bind(address, router).await?;
    server.serve(shutdown_signal()).await?;

    Ok(())
}

fn apply_overrides(config: &mut Config, host: Option<String>, port: Option<u16>) {
    if host.is_some() {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown requested"),
        Err(e) => {
            warn!(error = %e, "Could not listen for Ctrl-C, running until killed");
            std::future::pending::<()>().await;
        }
    }
}
