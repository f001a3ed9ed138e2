use anyhow::Result;
use tracing::info;

use page_translator::{config::Config, server};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("page_translator=info".parse()?),
        )
        .init();

    // Load configuration from environment
    let config = Config::from_env()?;
    let app = server::router(&config)?;

    let addr = format!("{}:{}", config.bind_addr, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Translation API listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
