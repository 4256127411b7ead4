use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cisl_site::config::SiteConfig;
use cisl_site::router::build_app;
use cisl_site::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "cisl_site=debug,cisl_loader=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "Site server failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // --- Configuration ---
    let config = SiteConfig::from_env()?;
    tracing::info!(
        host = %config.host,
        port = %config.port,
        site_root = %config.site_root.display(),
        data_base_url = ?config.data_base_url,
        "Loaded site configuration"
    );

    let addr = SocketAddr::new(config.host.parse()?, config.port);

    // --- App ---
    let state = AppState::from_config(config)?;
    let app = build_app(state);

    tracing::info!("Starting server on {addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
