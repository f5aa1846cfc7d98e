use std::net::SocketAddr;

use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use srpush::config::CONFIG;
use srpush::endpoints::create_router;
use srpush::middleware::CredentialTable;
use srpush::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("srpush={}", CONFIG.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_ansi(false))
        .init();

    tracing::info!("Starting srpush v{}", env!("CARGO_PKG_VERSION"));

    let db = srpush::db::connect().await?;
    tracing::info!("Database connection established");

    let credentials = CredentialTable::from_secret(CONFIG.auth_secret.as_deref());
    if credentials.is_empty() {
        tracing::warn!("SRPUSH_AUTH is missing or malformed; all gated routes will reject");
    }

    let state = AppState::new(db, credentials);
    let app = create_router(state).layer(TraceLayer::new_for_http());

    let addr = SocketAddr::new(CONFIG.host.parse()?, CONFIG.port);
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
