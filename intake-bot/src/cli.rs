//! CLI parser.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "intake-bot")]
#[command(about = "Telegram intake bot: relays client inquiries to administrators", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Load and validate config, print a summary and exit. No network access.
    CheckConfig {
        #[arg(short, long)]
        token: Option<String>,
    },
}
