//! Todochat - terminal client for the AI Todo Assistant backend.
//!
//! Architecture:
//! - CLI is a thin client that talks to the backend over HTTP
//! - `auth` wraps the signup/signin/signout endpoints, `api` the chat ones
//! - The signed-in session is persisted to a JSON file under the home
//!   directory and attached as a bearer token to protected requests

mod api;
mod auth;
mod chat;
mod cli;
mod config;
mod models;
mod store;

use anyhow::Result;
use clap::Parser;

use cli::{execute, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    execute(cli).await
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("TODOCHAT_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
