use registro_horas::shell::config::HttpConfig;
use registro_horas::shell::http;
use registro_horas::shell::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = HttpConfig::from_env();
    let state = AppState::in_memory();
    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!(address = %config.bind_address(), "registro_horas listening");
    axum::serve(listener, http::router(state)).await?;
    Ok(())
}
