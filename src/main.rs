use anyhow::{Context, Result};
use marketing_gateway::{config, server};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::load()
        .await
        .context("failed to load gateway configuration")?;

    // RUST_LOG wins over the configured level; a bad configured value is a
    // startup error, not a silent fallback
    let filter = EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(&config.server.logs.level).with_context(|| {
            format!(
                "invalid log level '{}' in configuration",
                config.server.logs.level
            )
        })
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .init();

    info!(
        model = %config.llm.model,
        allowed_origin = %config.server.allowed_origin,
        "Marketing gateway starting"
    );

    server::run(config).await?;

    Ok(())
}
