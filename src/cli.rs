// Command-line surface: argument definitions and the dispatcher that turns
// a parsed command into an API call.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

use crate::api::ApiClient;
use crate::config::Config;
use crate::ui::Progress;

#[derive(Debug, Parser)]
#[command(
    name = "sanpush",
    version = env!("CARGO_PKG_VERSION"),
    about = "Send a message or a reload signal to the configured webhook endpoint",
    after_help = "Examples:\n  sanpush send-message \"Hello world.\"\n  sanpush reload"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Send a message to the configured API endpoint
    SendMessage {
        /// The message text, at most 600 characters
        message: String,
    },
    /// Reload the page at the configured API endpoint
    Reload,
    /// Display version information
    Version,
}

/// Parse the process arguments and run the selected command. The config is
/// loaded here, once per invocation, and handed to the client; the help and
/// version paths never touch the config file.
pub fn run() -> Result<()> {
    dispatch(Cli::parse())
}

fn dispatch(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        // Bare `sanpush` prints usage and exits cleanly.
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Command::SendMessage { message } => {
            let config = Config::load()?;
            let api = ApiClient::new(&config)?;
            api.send_message(&message, &Progress::auto())?;
            println!("\n✅ Message sent successfully...\n");
        }
        Command::Reload => {
            let config = Config::load()?;
            let api = ApiClient::new(&config)?;
            api.reload(&Progress::auto())?;
            println!("\n🍪 Page reloaded successfully\n");
        }
        Command::Version => {
            println!("sanpush version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
