//! To-do MCP Server - Main Entry Point
//!
//! This is the main entry point for the to-do MCP server application.
//! The actual implementation is in the `todo_mcp` library.

use anyhow::Result;
use clap::Parser;
use mcp_attr::server::serve_stdio;
use std::path::PathBuf;
use todo_mcp::{AppConfig, TodoServerHandler, telemetry};

/// To-do MCP Server - a mock-authenticated to-do list session via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML config file (missing file means defaults)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Simulated login/signup latency in milliseconds (overrides config)
    #[arg(long)]
    login_delay_ms: Option<u64>,

    /// Log filter directive, e.g. "todo_mcp=debug" (overrides config; RUST_LOG wins)
    #[arg(long)]
    log_filter: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match args.config {
        Some(ref path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(delay) = args.login_delay_ms {
        config.login_delay_ms = delay;
    }
    if let Some(filter) = args.log_filter {
        config.log_filter = filter;
    }

    telemetry::init(&config.log_filter);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting todo-mcp");

    let handler = TodoServerHandler::new(&config);
    serve_stdio(handler).await?;

    tracing::info!("stdio transport closed, shutting down");
    Ok(())
}
