//! Binary for the intake bot.

use anyhow::Result;
use clap::Parser;
use intake_bot::{config_summary, run_bot, BotConfig, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = BotConfig::load(token)?;
            run_bot(config).await
        }
        Commands::CheckConfig { token } => {
            let config = BotConfig::load(token)?;
            config.validate()?;
            println!("{}", config_summary(&config));
            Ok(())
        }
    }
}
