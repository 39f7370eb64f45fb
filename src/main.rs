//! Task Dashboard MCP Server - Main Entry Point
//!
//! This is the main entry point for the task dashboard server application.
//! The actual implementation is in the `task_dashboard` library.

use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use mcp_attr::server::serve_stdio;
use std::path::PathBuf;
use task_dashboard::{DashboardHandler, logging};

/// Task Dashboard MCP Server - personal task management with statistics via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the TOML configuration file (seed tasks and default settings)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pin the reference date (YYYY-MM-DD) instead of using the local date
    #[arg(long)]
    today: Option<NaiveDate>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init()?;

    let handler = DashboardHandler::from_config_file(args.config.as_deref(), args.today)?;
    tracing::info!("serving task dashboard over stdio");
    serve_stdio(handler).await?;
    Ok(())
}
