//! ModelShare RPC Server - JSON-RPC backend for the model page.
//!
//! This binary serves the data service procedures and the version navigator
//! over JSON-RPC 2.0, backed by a local SQLite database or by another
//! ModelShare server.

mod handlers;
mod server;
mod wrapper;

use anyhow::Result;
use clap::Parser;
use modelshare_core::navigator::NavigatorStyle;
use modelshare_core::ModelShareApi;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "modelshare-rpc")]
#[command(about = "JSON-RPC server for ModelShare")]
struct Args {
    /// Port to listen on (0 = auto-assign)
    #[arg(short, long, default_value = "0")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// SQLite database path (defaults to the platform data directory)
    #[arg(long, conflicts_with = "remote")]
    database: Option<PathBuf>,

    /// Forward data service calls to another ModelShare server
    #[arg(long)]
    remote: Option<String>,

    /// Render navigator views with the dark color scheme
    #[arg(long)]
    dark: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    info!("Starting ModelShare RPC Server");

    let mut builder = ModelShareApi::builder().auto_create_dirs(true);
    if let Some(url) = args.remote {
        info!("Data service: {}", url);
        builder = builder.remote(url);
    } else if let Some(path) = args.database {
        info!("Database: {}", path.display());
        builder = builder.database(path);
    }
    let api = builder.build().await?;

    let style = if args.dark {
        NavigatorStyle::dark()
    } else {
        NavigatorStyle::default()
    };

    // Start the server
    let addr = server::start_server(api, style, &args.host, args.port).await?;

    // Port announcement on stdout is read by the parent process
    println!("RPC_PORT={}", addr.port());

    info!("RPC server running on {}", addr);

    // Wait for shutdown signal
    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received, exiting");

    Ok(())
}
