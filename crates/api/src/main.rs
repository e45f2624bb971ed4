use anyhow::{Context, Result};
use gluten_api::{build_app, AppConfig};
use gluten_observability::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("gluten_api");

    let config = AppConfig::from_env();
    let app = build_app(&config).await?;

    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    tracing::info!(
        bind = %config.bind,
        product_csv = %config.product_csv.display(),
        chat_csv = %config.chat_csv.display(),
        templates_root = %config.templates_root.display(),
        "gluten guide api started"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
