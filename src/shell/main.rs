use activities::shell::config::AppConfig;
use activities::shell::http;
use activities::shell::state::AppState;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("activities=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let state = AppState::in_memory();
    let app = http::app(state, &config);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    let addr = listener.local_addr()?;
    tracing::info!("Activities API: http://{}/activities", addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
