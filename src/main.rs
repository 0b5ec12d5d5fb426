use std::io::IsTerminal;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use prompt_seeder::config::SeederConfig;
use prompt_seeder::infrastructure::registry::MlflowPromptRegistry;
use prompt_seeder::seeder::{catalog, ConsoleReporter, Seeder};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load environment variables
    dotenv::dotenv().ok();

    // Logs go to stderr; stdout is reserved for seeding progress
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let config = SeederConfig::from_env().context("invalid configuration")?;
    println!("MLflow tracking URI: {}", config.tracking_uri);
    tracing::info!(?config, "Starting prompt seeding");

    let registry = MlflowPromptRegistry::new(&config.tracking_uri, config.credentials.clone())?;
    let seeder = Seeder::new(Arc::new(registry), Arc::new(ConsoleReporter))
        .with_lookup_policy(config.lookup_policy);

    seeder.reconcile(&catalog::starter_prompts()).await?;

    Ok(())
}
