use anyhow::{Context, Result};
use clap::Parser;
use data_ingestion::{
    adapters::inbound::http::router::{create_router, AppState},
    app::AppBuilder,
    config::{log_filter, to_app_config, IngestionArgs, StorageArgs},
};
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "data-ingestion-server")]
#[command(about = "Receives object-creation events and relocates processed objects", long_about = None)]
struct Cli {
    /// Server port to listen on
    #[arg(short, long, env = "PORT", default_value = "8080")]
    port: u16,

    /// Server host to bind to
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    #[command(flatten)]
    storage: StorageArgs,

    #[command(flatten)]
    ingestion: IngestionArgs,
}

impl Cli {
    fn init_logging(&self) -> Result<()> {
        // RUST_LOG wins over --log-level when set
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(log_filter(&self.log_level)));

        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()
            .context("Failed to initialize logging")?;

        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    cli.init_logging()?;

    let config = to_app_config(&cli.storage, &cli.ingestion)?;

    info!("Starting data ingestion server");
    info!("Storage backend: {}", config.storage_backend.name());
    info!(
        bucket = %config.ingestion.source_bucket,
        source_folder = %config.ingestion.source_folder,
        target_folder = %config.ingestion.target_folder,
        "Watching for new objects"
    );

    let app_services = AppBuilder::new()
        .with_config(config)
        .build()
        .context("Failed to build application")?;

    let state = AppState {
        ingestion_service: Arc::new(app_services.ingestion_service),
    };
    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port)
        .parse()
        .context("Invalid listen address")?;
    let listener = TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, router)
        .await
        .context("Failed to start server")?;

    Ok(())
}
