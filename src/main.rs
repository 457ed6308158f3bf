use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use lrx::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for lrx::AppCommand {
    fn from(cmd: Commands) -> lrx::AppCommand {
        match cmd {
            Commands::Rates => lrx::AppCommand::Rates,
            Commands::Convert { amount, from, to } => lrx::AppCommand::Convert { amount, from, to },
            Commands::Forecast {
                days,
                base_growth,
                target_growth,
                seed,
            } => lrx::AppCommand::Forecast {
                days,
                base_growth,
                target_growth,
                seed,
            },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Display today's exchange rates for the configured pair
    Rates,
    /// Convert an amount between the two configured currencies
    Convert {
        /// Amount to convert
        amount: f64,
        /// Currency code to convert from
        from: String,
        /// Currency code to convert to
        to: String,
    },
    /// Project the cross-rate over the coming days
    Forecast {
        /// Days to project (defaults to the configured horizon)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
        days: Option<u32>,
        /// Daily growth of the base currency in %/day
        #[arg(long)]
        base_growth: Option<f64>,
        /// Daily growth of the target currency in %/day
        #[arg(long)]
        target_growth: Option<f64>,
        /// Seed for the demo growth sampler (used when growths are omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => lrx::cli::setup::setup(),
        Some(cmd) => lrx::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
