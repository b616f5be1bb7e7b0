use std::io::Read;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use nh_core::{ArticleStructurer, Config, UpstreamFetcher};
use nh_upstream::{create_fetcher, create_structurer, OutlineStructurer, StaticFetcher};
use nh_web::handlers::{load_headlines, structure, StructureRequest};
use nh_web::logging::init_logging;
use nh_web::AppState;
use tracing::info;

mod config;

use config::{Cli, Commands};

fn build_structurer(cli: &Cli, config: &Config) -> Result<Arc<dyn ArticleStructurer>> {
    if cli.outline {
        info!("📝 Using local outline structurer");
        return Ok(Arc::new(OutlineStructurer::new()));
    }
    Ok(create_structurer(&config.gateway)?)
}

fn build_state(cli: &Cli, config: &Config, fetcher: Arc<dyn UpstreamFetcher>) -> Result<AppState> {
    let structurer = build_structurer(cli, config)?;
    Ok(AppState::new(fetcher, structurer))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let log = init_logging(&cli.log_level).with_prefix("newshub");
    let config = cli.config();

    match &cli.command {
        Commands::Serve { bind } => {
            let fetcher = create_fetcher(config.provider, &config)?;
            log.info(&format!("📰 Headlines from {}", fetcher.kind()));
            let state = build_state(&cli, &config, fetcher)?;
            nh_web::serve(*bind, state)
                .await
                .with_context(|| format!("Server on {} stopped", bind))?;
        }
        Commands::Headlines => {
            let fetcher = create_fetcher(config.provider, &config)?;
            let state = build_state(&cli, &config, fetcher)?;
            let (status, payload) = load_headlines(&state).await;
            println!("{}", serde_json::to_string_pretty(&payload)?);
            if let Some(error) = payload.error {
                bail!("Headline fetch failed ({}): {}", status, error);
            }
        }
        Commands::Structure { title, content } => {
            let fetcher = create_fetcher(config.provider, &config)?;
            let state = build_state(&cli, &config, fetcher)?;
            let request = StructureRequest {
                title: Some(title.clone()),
                content: Some(content.clone()),
                description: None,
            };
            let response = structure(&state, request).await?;
            println!("{}", response.structured_content);
        }
        Commands::Normalize { file } => {
            let raw = match file {
                Some(path) => std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?,
                None => {
                    let mut raw = String::new();
                    std::io::stdin()
                        .read_to_string(&mut raw)
                        .context("Failed to read stdin")?;
                    raw
                }
            };
            log.debug(&format!("Normalizing {} bytes as {}", raw.len(), config.provider));
            let fetcher = Arc::new(StaticFetcher::new(config.provider, raw));
            let state = AppState::new(fetcher, Arc::new(OutlineStructurer::new()));
            let (_, payload) = load_headlines(&state).await;
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
    }

    Ok(())
}
