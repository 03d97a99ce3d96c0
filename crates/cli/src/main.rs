//! AidConnect CLI - response engine queries and local data management.
//!
//! # Usage
//!
//! ```bash
//! # Ask the response engine a question as a given role
//! aid-cli ask --role donor "show my donations"
//!
//! # Ask in another language, or against the admin rule path
//! aid-cli ask --role staff --admin-page --language hi "fund allocation"
//!
//! # Seed the local store with demo contact messages
//! aid-cli seed
//!
//! # List stored contact messages / advance a status
//! aid-cli messages list
//! aid-cli messages set-status MSG-1700000000000 read
//! ```
//!
//! # Commands
//!
//! - `ask` - Run one input through the response engine
//! - `seed` - Seed demo contact messages into the local store
//! - `messages` - Inspect and update the contact inbox

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "aid-cli")]
#[command(author, version, about = "AidConnect Global CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one input through the response engine and print the reply
    Ask {
        /// Role to ask as (`visitor`, `donor`, `staff`)
        #[arg(short, long, default_value = "visitor")]
        role: String,

        /// Display language code (`en`, `hi`, `mr`, ...)
        #[arg(short, long, default_value = "en")]
        language: String,

        /// Use the admin-page rule path
        #[arg(long)]
        admin_page: bool,

        /// The message text
        text: String,
    },
    /// Seed the local store with demo contact messages
    Seed {
        /// Data directory (defaults to AIDCONNECT_DATA_DIR or ./data)
        #[arg(short, long)]
        data_dir: Option<String>,
    },
    /// Inspect and update the contact inbox
    Messages {
        #[command(subcommand)]
        action: MessagesAction,

        /// Data directory (defaults to AIDCONNECT_DATA_DIR or ./data)
        #[arg(short, long, global = true)]
        data_dir: Option<String>,
    },
}

#[derive(Subcommand)]
enum MessagesAction {
    /// List stored contact messages
    List,
    /// Advance a message status (`read`, `replied`)
    SetStatus {
        /// Message id (`MSG-...`)
        id: String,
        /// New status
        status: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Ask {
            role,
            language,
            admin_page,
            text,
        } => commands::ask::run(&role, &language, admin_page, &text)?,
        Commands::Seed { data_dir } => commands::seed::run(data_dir.as_deref())?,
        Commands::Messages { action, data_dir } => match action {
            MessagesAction::List => commands::messages::list(data_dir.as_deref())?,
            MessagesAction::SetStatus { id, status } => {
                commands::messages::set_status(data_dir.as_deref(), &id, &status)?;
            }
        },
    }
    Ok(())
}
