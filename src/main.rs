use anyhow::Context;
use clap::Parser;
use lp_solver::adapters::http;
use lp_solver::core::ServerSettings;
use lp_solver::utils::{logger, validation::Validate};
use lp_solver::{AppConfig, CliConfig, GoodLpSolver, SolveService};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match AppConfig::load(&cli).and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    logger::init_logger(config.verbose, config.log_level.as_deref(), config.log_format);
    tracing::debug!("Effective config: {:?}", config);

    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {}", address))?;

    let service = SolveService::new(GoodLpSolver::new());
    http::serve(listener, service, shutdown_signal()).await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
