use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "floatchat", version, about = "FloatChat ARGO ocean data chat", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Override the config file path globally
    #[arg(short, long, global = true, default_value = "config.yaml")]
    pub config: String,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start the HTTP server (liveness route and web chat)
    Serve,

    /// Enter the interactive terminal chat
    Chat {
        /// Reply delay in milliseconds, overriding the configured one
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Seed for synthetic current velocities
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// A line typed into the terminal chat.
#[derive(Debug, PartialEq, Eq)]
pub enum ReplInput<'a> {
    Exit,
    Questions,
    Pick(usize),
    /// Empty line: send the current draft
    SendDraft,
    Text(&'a str),
    Unknown(&'a str),
}

impl<'a> ReplInput<'a> {
    /// Trims only to detect commands; free text keeps its spacing, minus the newline.
    pub fn parse(line: &'a str) -> Self {
        let text = line.trim();
        if text.is_empty() {
            return ReplInput::SendDraft;
        }
        if !text.starts_with('/') {
            return ReplInput::Text(line.trim_end_matches(|c: char| c == '\n' || c == '\r'));
        }

        let mut parts = text.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("/exit" | "/quit"), None) => ReplInput::Exit,
            (Some("/questions"), None) => ReplInput::Questions,
            (Some("/pick"), Some(n)) => match n.parse::<usize>() {
                Ok(n) if n >= 1 => ReplInput::Pick(n - 1),
                _ => ReplInput::Unknown(text),
            },
            _ => ReplInput::Unknown(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_repl_commands() {
        assert_eq!(ReplInput::parse("  "), ReplInput::SendDraft);
        assert_eq!(ReplInput::parse("/quit"), ReplInput::Exit);
        assert_eq!(ReplInput::parse("/pick 2"), ReplInput::Pick(1));
        assert_eq!(ReplInput::parse("/pick 0"), ReplInput::Unknown("/pick 0"));
        assert_eq!(ReplInput::parse(" salt? \r\n"), ReplInput::Text(" salt? "));
        assert_eq!(ReplInput::parse("/dance"), ReplInput::Unknown("/dance"));
    }

    #[test]
    fn cli_parses_chat_overrides() {
        let cli = Cli::parse_from(["floatchat", "chat", "--delay-ms", "0", "--seed", "9"]);
        assert_eq!(
            cli.command,
            Commands::Chat {
                delay_ms: Some(0),
                seed: Some(9)
            }
        );
        assert_eq!(cli.config, "config.yaml");
    }
}
