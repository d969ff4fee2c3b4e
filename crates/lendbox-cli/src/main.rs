//! lendbox CLI Application
//!
//! Command-line interface and MCP server for the lendbox item-sharing
//! service.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use lendbox_core::{AccessPolicy, LenderBuilder};
use log::info;
use mcp::{run_stdio_server, LendboxMcpServer};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        strict_access,
        command,
    } = Args::parse();

    let policy = if strict_access {
        AccessPolicy::Strict
    } else {
        AccessPolicy::Concealed
    };

    let lender = LenderBuilder::new()
        .with_database_path(database_file)
        .with_access_policy(policy)
        .build()
        .await
        .context("Failed to initialize lendbox")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("lendbox started");

    match command {
        User { command } => Cli::new(lender, renderer).handle_user_command(command).await,
        Item { command } => Cli::new(lender, renderer).handle_item_command(command).await,
        Booking { command } => {
            Cli::new(lender, renderer)
                .handle_booking_command(command)
                .await
        }
        Request { command } => {
            Cli::new(lender, renderer)
                .handle_request_command(command)
                .await
        }
        Comment { command } => {
            Cli::new(lender, renderer)
                .handle_comment_command(command)
                .await
        }
        Serve => {
            info!("Starting lendbox MCP server");
            run_stdio_server(LendboxMcpServer::new(lender))
                .await
                .context("MCP server failed")
        }
    }
}
