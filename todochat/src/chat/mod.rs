//! Interactive chat: the auth guard, the view state, and the terminal loop.

mod guard;
mod view;

pub use guard::AuthState;
pub use view::{ChatView, SendOutcome};

use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::api::ChatApi;
use crate::models::{Message, MessageRole, Session};

/// Run the interactive chat loop until EOF or a quit command.
pub async fn run(api: Arc<dyn ChatApi>, session: Session) -> Result<()> {
    let mut view = ChatView::new(api, session);
    view.load_history().await;
    tracing::debug!(
        loading = view.is_loading(),
        restored = view.messages().len(),
        "history loaded"
    );

    if view.messages().is_empty() {
        println!("No conversation yet. Say hello!");
    } else {
        for message in view.messages() {
            render(message);
        }
    }
    println!("Type a message and press enter, /quit to leave.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let input = line.trim();
        if input == "/quit" || input == "exit" {
            break;
        }
        if view.is_sending() {
            continue;
        }
        match view.submit(input).await {
            SendOutcome::Sent => {
                if let Some(reply) = view.messages().last() {
                    render(reply);
                }
            }
            SendOutcome::Failed => {
                if let Some(reply) = view.messages().last() {
                    render(reply);
                }
                if let Some(banner) = view.error() {
                    eprintln!("! {banner}");
                }
            }
            SendOutcome::Rejected => {}
        }
    }
    println!("Bye.");
    Ok(())
}

fn render(message: &Message) {
    let speaker = match message.role {
        MessageRole::User => "you",
        MessageRole::Assistant => "assistant",
    };
    println!("{speaker}> {}", message.content);
}

fn prompt() -> Result<()> {
    print!("you> ");
    std::io::stdout().flush()?;
    Ok(())
}
