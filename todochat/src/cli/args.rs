//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::api::DEFAULT_HISTORY_LIMIT;

/// Todochat - terminal client for the AI Todo Assistant
#[derive(Parser, Debug)]
#[command(name = "todochat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Backend base URL (overrides TODOCHAT_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an account and sign in
    Signup {
        /// Email to register with
        email: String,

        /// Password (prompted for when omitted)
        password: Option<String>,
    },

    /// Sign in to an existing account
    Signin {
        /// Email of the account
        email: String,

        /// Password (prompted for when omitted)
        password: Option<String>,
    },

    /// Revoke the token and clear the local session
    Signout,

    /// Chat with the assistant
    Chat,

    /// Print conversation history
    History {
        /// Maximum number of messages to fetch
        #[arg(short, long, default_value_t = DEFAULT_HISTORY_LIMIT)]
        limit: usize,
    },

    /// Show the signed-in identity
    Whoami,

    /// Check backend liveness
    Health,
}
