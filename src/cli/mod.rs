pub mod commands;

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::chat::ChatController;
use crate::cli::commands::ReplInput;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::render::{terminal, ChatView};

/// What the terminal chat does with one line of input.
#[derive(Debug, PartialEq, Eq)]
pub enum ReplStep {
    Exit,
    Show(String),
    Submit(String),
    Idle,
}

/// Applies one parsed line to the input box. Text typed directly replaces any loaded draft.
pub fn apply_input(view: &mut ChatView, input: ReplInput<'_>, pending: bool) -> ReplStep {
    match input {
        ReplInput::Exit => ReplStep::Exit,
        ReplInput::Questions => ReplStep::Show(terminal::render_quick_questions()),
        ReplInput::Pick(index) => match view.pick_question(index) {
            Some(_) => ReplStep::Idle,
            None => ReplStep::Show(format!("No quick question #{}.\n", index + 1)),
        },
        ReplInput::Unknown(command) => ReplStep::Show(format!("Unknown command: {command}\n")),
        ReplInput::SendDraft if view.can_send(pending) => ReplStep::Submit(view.take_draft()),
        ReplInput::SendDraft => ReplStep::Idle,
        ReplInput::Text(text) => {
            view.set_draft(text);
            ReplStep::Submit(view.take_draft())
        }
    }
}

/// Terminal chat against a fresh in-memory session.
pub async fn run_repl(config: AppConfig) -> Result<(), AppError> {
    let chat = ChatController::new(&config.chat);
    let mut view = ChatView::default();

    println!("--- FloatChat Terminal ---");
    println!("Type /questions for examples, /pick N to load one, /exit to quit.");
    println!("--------------------------");
    for message in chat.transcript().await.messages {
        print!("{}", terminal::render_message(&message));
    }

    let stdin = io::stdin();
    let mut input = String::new();
    loop {
        if view.draft().is_empty() {
            print!("\nYou> ");
        } else {
            print!("\nYou [{}]> ", view.draft());
        }
        io::stdout().flush()?;

        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }

        let pending = chat.is_pending().await;
        let text = match apply_input(&mut view, ReplInput::parse(&input), pending) {
            ReplStep::Exit => break,
            ReplStep::Show(text) => {
                print!("{text}");
                continue;
            }
            ReplStep::Idle => continue,
            ReplStep::Submit(text) => text,
        };

        let reply = match chat.submit(&text).await {
            Ok((_, reply)) => reply,
            Err(e) => {
                debug!("submission dropped: {}", e);
                continue;
            }
        };

        print!("{}", terminal::render_thinking());
        io::stdout().flush()?;
        match reply.wait().await {
            Some(message) => print!("{}", terminal::render_message(&message)),
            None => warn!("reply was cancelled before it arrived"),
        }
    }

    Ok(())
}
