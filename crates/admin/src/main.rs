use std::process::ExitCode;

use clap::Parser;

use catalog_client::{CatalogClient, SubmitGate};

mod cli;
mod commands;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> ExitCode {
    catalog_observability::init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<u8> {
    let config = cli.api.to_config();
    tracing::debug!(api_url = %config.base_url(), "using catalog service");
    let client = CatalogClient::new(config)?;
    // One gate per process. A single CLI run never contends for it; callers
    // that drive several edits through one client share it the same way.
    let gate = SubmitGate::new();
    let mut out = std::io::stdout().lock();

    match cli.command {
        Command::Types { action } => commands::product_types(&client, action, &mut out).await,
        Command::Brands { action } => commands::brands(&client, action, &mut out).await,
        Command::Product { action } => {
            commands::product(&client, &gate, action, &mut out).await
        }
    }
}
