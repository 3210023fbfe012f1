pub mod cli;
pub mod core;
pub mod helpers;
pub mod providers;

use crate::core::config::AppConfig;
use crate::providers::fcsapi::FcsApiClient;
use anyhow::Result;
use tracing::{debug, info};

pub enum AppCommand {
    Convert {
        from: String,
        to: String,
        amount: f64,
        precision: usize,
    },
    Quote {
        from: String,
        to: String,
    },
    Uuid {
        without_hyphens: bool,
        count: usize,
    },
    Jwt {
        token: String,
    },
}

fn load_config(config_path: Option<&str>) -> Result<AppConfig> {
    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");
    Ok(config)
}

fn fcsapi_client(config_path: Option<&str>) -> Result<FcsApiClient> {
    let config = load_config(config_path)?;
    Ok(FcsApiClient::from_config(&config.fcsapi()))
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("helpkit starting...");

    match command {
        AppCommand::Convert {
            from,
            to,
            amount,
            precision,
        } => {
            let client = fcsapi_client(config_path)?;
            cli::convert::run(&client, &from, &to, amount, precision).await?;
        }
        AppCommand::Quote { from, to } => {
            let client = fcsapi_client(config_path)?;
            cli::quote::run(&client, &from, &to).await?;
        }
        AppCommand::Uuid {
            without_hyphens,
            count,
        } => {
            cli::token::run_uuid(without_hyphens, count);
        }
        AppCommand::Jwt { token } => {
            cli::token::run_jwt(&token)?;
        }
    }
    Ok(())
}
