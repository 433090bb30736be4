use anyhow::Context;
use core_rtx::{get_server_addr, setup_logging};

use api_rtx::{routes, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file, if it exists
    dotenvy::dotenv().ok();

    setup_logging("api_rtx=debug,robots_txt=info,tower_http=debug");

    let state = AppState::from_env()?;
    let app = routes::router(state);

    let addr = get_server_addr().context("Invalid HOST or PORT")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to address: {}", addr))?;

    tracing::info!("Serving robots.txt at http://{}/robots.txt", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
