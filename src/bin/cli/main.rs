use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use data_ingestion::{
    app::AppBuilder,
    config::{log_filter, to_app_config, IngestionArgs, StorageArgs},
    domain::models::{IngestionOutcome, Notification, ObjectLocation, RelocationRequest},
    ports::services::IngestionService,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "data-ingestion-cli")]
#[command(about = "Operator commands for re-processing and reconciling objects", long_about = None)]
struct Cli {
    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    #[command(flatten)]
    storage: StorageArgs,

    #[command(flatten)]
    ingestion: IngestionArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the ingestion workflow for one object, as if it had just been created
    Process {
        /// Bucket name
        #[arg(short, long)]
        bucket: String,
        /// Object name
        #[arg(short, long)]
        name: String,
    },

    /// Move a single object (copy, then delete the source)
    Move {
        /// Bucket holding the source object
        #[arg(short, long)]
        bucket: String,
        /// Source object name
        #[arg(long)]
        from: String,
        /// Target object name
        #[arg(long)]
        to: String,
        /// Target bucket, defaults to the source bucket
        #[arg(long)]
        target_bucket: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(log_filter(&cli.log_level))),
        )
        .init();

    let config = to_app_config(&cli.storage, &cli.ingestion)?;
    let app = AppBuilder::new()
        .with_config(config)
        .build()
        .context("Failed to build application")?;

    match cli.command {
        Commands::Process { bucket, name } => {
            let outcome = app
                .ingestion_service
                .process(&Notification::new(bucket, name))
                .await;

            match outcome {
                IngestionOutcome::Skipped(reason) => println!("Skipped: {:?}", reason),
                IngestionOutcome::Relocated { target, line_count } => {
                    println!("Moved to {} ({} non-empty lines)", target, line_count)
                }
                IngestionOutcome::FetchFailed { error, .. } => bail!("Read failed: {}", error),
                IngestionOutcome::RelocationFailed { error, .. } => {
                    bail!("Move failed: {}", error)
                }
            }
        }
        Commands::Move {
            bucket,
            from,
            to,
            target_bucket,
        } => {
            let source = ObjectLocation::parse(&bucket, &from).context("Invalid source")?;
            let target = ObjectLocation::parse(target_bucket.as_deref().unwrap_or(&bucket), &to)
                .context("Invalid target")?;

            app.blob_store
                .move_object(&RelocationRequest::new(source, target.clone()))
                .await
                .context("Move failed")?;

            println!("Moved to {}", target);
        }
    }

    Ok(())
}
