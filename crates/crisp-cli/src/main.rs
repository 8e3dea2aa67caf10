mod locate;
mod quote;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::locate::LocateArgs;
use crate::quote::QuoteArgs;

#[derive(Debug, Parser)]
#[command(name = "crisp-cli")]
#[command(about = "Crisp Cleaning quote and address tools")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Price a cleaning job
    Quote(QuoteArgs),
    /// List the price catalogue
    Prices,
    /// Resolve the device's current address
    Locate(LocateArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(crisp_core::log_level_from_env()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Quote(args)) => quote::run_quote(&args)?,
        Some(Commands::Prices) => quote::run_prices(),
        Some(Commands::Locate(args)) => {
            let config = crisp_core::load_app_config_from_env()?;
            locate::run_locate(&config, &args).await?;
        }
        None => println!("crisp-cli ready; try `crisp-cli quote --help`"),
    }

    Ok(())
}
