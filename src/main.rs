use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use palisade::annotation::vision::VisionProvider;
use palisade::config::Config;
use palisade::credentials;
use palisade::moderation::moderator::Moderator;
use palisade::moderation::policy::Status;
use palisade::output::terminal;

/// Palisade: image moderation gate.
///
/// Sends image references to Google Vision SafeSearch and quarantines
/// anything scoring LIKELY or above for adult, violence, or racy content.
#[derive(Parser)]
#[command(name = "palisade", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Moderate one or more image URIs
    Moderate {
        /// Image URIs the Vision API can reach (e.g. object-storage URLs)
        #[arg(required = true)]
        uris: Vec<String>,

        /// Emit one JSON record per line instead of the table
        #[arg(long)]
        json: bool,

        /// Number of images to moderate in parallel (default: 4)
        #[arg(long, default_value = "4")]
        concurrency: usize,
    },

    /// Verify that the configured credential source yields an API key
    CheckCredentials,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("palisade=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Moderate {
            uris,
            json,
            concurrency,
        } => {
            let config = Config::load()?;
            config.require_credentials()?;

            let moderator = build_moderator(&config).await?;
            let results = moderator.moderate_many(&uris, concurrency).await;

            let mut approved = 0;
            let mut quarantined = 0;
            let mut failed = 0;

            for (uri, result) in uris.iter().zip(&results) {
                match result {
                    Ok(record) => {
                        match record.status {
                            Status::Approved => approved += 1,
                            Status::Quarantined => quarantined += 1,
                        }
                        if json {
                            println!("{}", serde_json::to_string(record)?);
                        } else {
                            terminal::display_record(record);
                        }
                    }
                    Err(e) => {
                        failed += 1;
                        if json {
                            println!(
                                "{}",
                                serde_json::json!({ "image_uri": uri, "error": e.to_string() })
                            );
                        } else {
                            terminal::display_failure(uri, e);
                        }
                    }
                }
            }

            if !json {
                terminal::display_summary(approved, quarantined, failed);
            }

            if failed > 0 {
                std::process::exit(1);
            }
        }

        Commands::CheckCredentials => {
            let config = Config::load()?;
            config.require_credentials()?;

            let provider = credentials::provider_from_config(&config)?;
            // Fetch but never print the key itself
            provider.vision_credentials().await?;
            println!("Credentials OK ({:?} source)", config.credential_source);
        }
    }

    Ok(())
}

/// Fetch credentials once and build the shared moderator. The Vision
/// client this constructs is reused across every concurrent request.
async fn build_moderator(config: &Config) -> Result<Moderator> {
    let creds_provider = credentials::provider_from_config(config)?;
    let creds = creds_provider.vision_credentials().await?;

    info!(
        endpoint = config.vision_api_url,
        source = ?config.credential_source,
        "Vision client ready"
    );

    let provider = VisionProvider::new(&config.vision_api_url, creds, config.request_timeout)?;
    Ok(Moderator::new(Arc::new(provider)))
}
