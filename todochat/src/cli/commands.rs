//! CLI command execution.
//!
//! Commands are thin wrappers: resolve config, open the session store, and
//! delegate to the auth/api clients.

use std::sync::Arc;

use anyhow::{bail, Context, Result};

use crate::api::{ApiClient, ChatApi};
use crate::auth::AuthClient;
use crate::chat::{self, AuthState};
use crate::config::Config;
use crate::models::Session;
use crate::store::{FileStore, SessionStore};

use super::args::{Cli, Commands};

pub async fn execute(cli: Cli) -> Result<()> {
    let config = Config::from_env().with_override(cli.api_url.clone());
    let mut store = FileStore::default_location()?;

    match cli.command {
        Commands::Signup { email, password } => {
            let password = resolve_password(password)?;
            let auth = AuthClient::new(&config.api_url);
            let session = auth.sign_up(&mut store, &email, &password).await?;
            println!("Signed up as {} ({})", session.email, session.user_id);
            Ok(())
        }
        Commands::Signin { email, password } => {
            let password = resolve_password(password)?;
            let auth = AuthClient::new(&config.api_url);
            let session = auth.sign_in(&mut store, &email, &password).await?;
            println!("Signed in as {}", session.email);
            Ok(())
        }
        Commands::Signout => {
            let auth = AuthClient::new(&config.api_url);
            auth.sign_out(&mut store).await?;
            println!("Signed out.");
            Ok(())
        }
        Commands::Chat => {
            let session = require_session(&store)?;
            let api = Arc::new(ApiClient::new(config.api_url.clone()));
            chat::run(api, session).await
        }
        Commands::History { limit } => {
            let session = require_session(&store)?;
            let api = ApiClient::new(config.api_url.clone());
            show_history(&api, &session, limit).await
        }
        Commands::Whoami => {
            let session = require_session(&store)?;
            println!("{} ({})", session.email, session.user_id);
            Ok(())
        }
        Commands::Health => {
            let api = ApiClient::new(config.api_url.clone());
            let health = api.check_health().await?;
            println!("{} at {}", health.status, health.timestamp);
            Ok(())
        }
    }
}

/// Resolve the protected-view guard into a session, or send the user to
/// sign-in.
fn require_session(store: &dyn SessionStore) -> Result<Session> {
    match AuthState::check(store) {
        AuthState::Authenticated(session) => Ok(session),
        AuthState::Checking | AuthState::Unauthenticated => {
            bail!("Not signed in. Run `todochat signin <email>` first.")
        }
    }
}

async fn show_history(api: &ApiClient, session: &Session, limit: usize) -> Result<()> {
    let history = api
        .conversation_history(&session.user_id, &session.token, limit)
        .await
        .context("Failed to fetch history")?;

    if history.messages.is_empty() {
        println!("No conversation history.");
        return Ok(());
    }

    if let Some(id) = &history.conversation_id {
        println!("Conversation {id}");
    }
    for msg in &history.messages {
        println!(
            "[{}] {}: {}",
            msg.created_at.format("%Y-%m-%d %H:%M"),
            msg.role,
            msg.content
        );
    }
    Ok(())
}

fn resolve_password(password: Option<String>) -> Result<String> {
    if let Some(password) = password {
        return Ok(password);
    }
    use std::io::Write;
    print!("Password: ");
    std::io::stdout().flush().context("Failed to flush stdout")?;
    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .context("Failed to read password")?;
    let password = line.trim_end_matches(['\r', '\n']).to_string();
    if password.is_empty() {
        bail!("Password must not be empty");
    }
    Ok(password)
}
