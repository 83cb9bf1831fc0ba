use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use seedance_backend::{app, config::Config, AppState};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = Config::from_env().context("Invalid configuration")?;

    let _guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                environment: Some(config.environment.as_str().into()),
                ..Default::default()
            },
        ))
    });

    use tracing_subscriber::{fmt, EnvFilter};
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,seedance_backend=debug,seedance=debug"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!(
        environment = config.environment.as_str(),
        content_dir = %config.content_dir.display(),
        locales = ?config.locales,
        hydrate = config.client_bundle.is_some(),
        "Loaded configuration"
    );

    let port = config.port;
    let state = Arc::new(AppState::new(config));
    tracing::info!("Starting server on port {}", port);
    let listener = TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .with_context(|| format!("Failed to bind port {port}"))?;
    axum::serve(listener, app(state)).await?;
    Ok(())
}
