//! tgutil - command line front end for the Telegram helpers.
//!
//! Handy for scripting and for checking links, commands and keyboards
//! without running a bot.

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tgutil::Config;
use tgutil::utils::{
    self, Keyboard, build_message_link, format_duration, format_size, parse_message_link,
};

#[derive(Parser)]
#[command(name = "tgutil", version, about = "Telegram helper toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split command text into tokens
    Command {
        text: String,
        /// Command prefix (defaults to COMMAND_PREFIX or '/')
        #[arg(long)]
        prefix: Option<char>,
    },

    /// Print the arguments of a command
    Args {
        text: String,
        #[arg(long)]
        prefix: Option<char>,
    },

    /// Build a message link
    Link {
        #[arg(allow_negative_numbers = true)]
        chat_id: i64,
        message_id: i32,
        /// Public username (defaults to DEFAULT_USERNAME)
        #[arg(long)]
        username: Option<String>,
        /// Ignore DEFAULT_USERNAME and build a private link
        #[arg(long)]
        private: bool,
    },

    /// Parse a message link into chat, thread and message ids
    ParseLink {
        link: String,
        #[arg(long)]
        json: bool,
    },

    /// Format seconds as a duration
    Duration {
        #[arg(allow_negative_numbers = true)]
        seconds: i64,
    },

    /// Format a byte count as a size
    Size {
        #[arg(allow_negative_numbers = true)]
        bytes: i64,
    },

    /// Extract a login code from text
    Code { text: String },

    /// Validate a keyboard (JSON rows of buttons) and print the markup
    Keyboard {
        json: String,
        /// Drop invalid buttons instead of failing
        #[arg(long)]
        lossy: bool,
    },
}

fn main() -> anyhow::Result<()> {
    // Load .env file first (before anything else)
    dotenvy::dotenv().ok();

    // If RUST_LOG is not set, default to "info" level for our crate
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("tgutil=info,teloxide=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env();
    debug!("Configuration loaded: {:?}", config);

    let cli = Cli::parse();
    run(cli.command, &config)
}

fn run(command: Commands, config: &Config) -> anyhow::Result<()> {
    match command {
        Commands::Command { text, prefix } => {
            let prefix = prefix.unwrap_or(config.command_prefix);
            let parts = utils::parse_command_with_prefix(&text, prefix);
            if parts.is_empty() {
                bail!("not a command (expected prefix '{}')", prefix);
            }
            for part in parts {
                println!("{}", part);
            }
        }

        Commands::Args { text, prefix } => {
            let prefix = prefix.unwrap_or(config.command_prefix);
            for arg in utils::get_command_args_with_prefix(&text, prefix) {
                println!("{}", arg);
            }
        }

        Commands::Link {
            chat_id,
            message_id,
            username,
            private,
        } => {
            let username = link_username(username, private, config);
            println!("{}", build_message_link(chat_id, message_id, username.as_deref()));
        }

        Commands::ParseLink { link, json } => {
            let parsed = parse_message_link(&link)
                .with_context(|| format!("unrecognized message link: {}", link))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&parsed)?);
            } else {
                println!("chat: {}", parsed.chat);
                if let Some(thread_id) = parsed.thread_id {
                    println!("thread: {}", thread_id);
                }
                println!("message: {}", parsed.message_id);
            }
        }

        Commands::Duration { seconds } => println!("{}", format_duration(seconds)),

        Commands::Size { bytes } => println!("{}", format_size(bytes)),

        Commands::Code { text } => match utils::extract_code(&text) {
            Some(code) => println!("{}", code),
            None => bail!("no code found"),
        },

        Commands::Keyboard { json, lossy } => {
            let keyboard: Keyboard =
                serde_json::from_str(&json).context("keyboard must be JSON rows of buttons")?;
            let markup = if lossy {
                keyboard.to_markup_lossy()
            } else {
                keyboard.to_markup()?
            };
            info!("Keyboard has {} row(s)", markup.inline_keyboard.len());
            println!("{}", serde_json::to_string_pretty(&markup)?);
        }
    }

    Ok(())
}

/// Username for the `link` subcommand: `--private` wins, then
/// `--username`, then DEFAULT_USERNAME.
fn link_username(username: Option<String>, private: bool, config: &Config) -> Option<String> {
    if private {
        return None;
    }
    username
        .or_else(|| config.default_username.clone())
        .map(|u| u.trim_start_matches('@').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_negative_chat_id() {
        let cli = Cli::try_parse_from(["tgutil", "link", "-1001234567890", "55"]).unwrap();
        match cli.command {
            Commands::Link {
                chat_id,
                message_id,
                username,
                private,
            } => {
                assert_eq!(chat_id, -1001234567890);
                assert_eq!(message_id, 55);
                assert_eq!(username, None);
                assert!(!private);
            }
            _ => panic!("expected link subcommand"),
        }
    }

    #[test]
    fn test_link_username_precedence() {
        let config = Config {
            default_username: Some("news".into()),
            ..Config::default()
        };

        assert_eq!(link_username(None, false, &config).as_deref(), Some("news"));
        assert_eq!(
            link_username(Some("@talk".into()), false, &config).as_deref(),
            Some("talk")
        );
        assert_eq!(link_username(Some("talk".into()), true, &config), None);
        assert_eq!(link_username(None, true, &config), None);
        assert_eq!(link_username(None, false, &Config::default()), None);
    }

    #[test]
    fn test_run_reports_bad_link() {
        let command = Commands::ParseLink {
            link: "nope".into(),
            json: false,
        };
        assert!(run(command, &Config::default()).is_err());
    }

    #[test]
    fn test_run_rejects_invalid_keyboard() {
        let command = Commands::Keyboard {
            json: r#"[[{"text":"Bad","url":"not a url"}]]"#.into(),
            lossy: false,
        };
        assert!(run(command, &Config::default()).is_err());

        let command = Commands::Keyboard {
            json: r#"[[{"text":"Bad","url":"not a url"}]]"#.into(),
            lossy: true,
        };
        assert!(run(command, &Config::default()).is_ok());
    }
}
