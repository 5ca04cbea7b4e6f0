//! Command-line client for the foundation chatbot.
//!
//! Commands:
//! - chat: Ask the chatbot a question
//! - status: Show index status
//! - init: Rebuild the server's index
//!
//! Configuration via environment:
//! - CHATBOT_URL: Base URL of the chatbot server (default: http://localhost:3000)

mod commands;

use clap::{Parser, Subcommand};

use commands::{chat::ChatArgs, init::InitArgs, status::StatusArgs};

/// Mwalimu Hope Foundation chatbot CLI
///
/// Prints JSON by default; pass --human for formatted output.
#[derive(Parser)]
#[command(name = "chatbot")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output human-readable formatted text instead of JSON
    #[arg(long, global = true)]
    human: bool,

    /// Chatbot server URL
    #[arg(
        long,
        env = "CHATBOT_URL",
        default_value = "http://localhost:3000",
        global = true
    )]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask the chatbot a question
    Chat(ChatArgs),

    /// Show chatbot status
    Status(StatusArgs),

    /// Rebuild the chatbot index on the server
    Init(InitArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let client = match commands::build_client() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Chat(args) => commands::chat::execute(&client, &cli.url, cli.human, args).await,
        Commands::Status(args) => {
            commands::status::execute(&client, &cli.url, cli.human, args).await
        }
        Commands::Init(args) => commands::init::execute(&client, &cli.url, cli.human, args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
