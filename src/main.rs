use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use helpkit::core::log::init_logging;

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

impl From<Commands> for helpkit::AppCommand {
    fn from(cmd: Commands) -> helpkit::AppCommand {
        match cmd {
            Commands::Convert {
                from,
                to,
                amount,
                precision,
            } => helpkit::AppCommand::Convert {
                from,
                to,
                amount,
                precision,
            },
            Commands::Quote { from, to } => helpkit::AppCommand::Quote { from, to },
            Commands::Uuid {
                without_hyphens,
                count,
            } => helpkit::AppCommand::Uuid {
                without_hyphens,
                count,
            },
            Commands::Jwt { token } => helpkit::AppCommand::Jwt { token },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Convert an amount between two currencies at the latest rate
    Convert {
        /// Source currency code, e.g. EUR
        from: String,
        /// Target currency code, e.g. USD
        to: String,
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        /// Decimal places to print
        #[arg(short, long, default_value_t = 2)]
        precision: usize,
    },
    /// Show the latest candle for a currency pair
    Quote { from: String, to: String },
    /// Generate random UUIDs
    Uuid {
        /// Print the 32 character form without hyphens
        #[arg(short = 'H', long)]
        without_hyphens: bool,
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },
    /// Decode a JWT header and payload without verifying the signature
    Jwt { token: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => helpkit::cli::setup::setup(),
        Some(cmd) => helpkit::run_command(cmd.into(), cli.config_path.as_deref()).await,
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
