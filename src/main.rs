use anyhow::Result;
use recipebook_core::{
    bootstrap,
    config::AppConfig,
    infrastructure::backend::Backend,
    presentation::http::{routes::build_router, state::HttpState},
    telemetry::init_tracing,
};
use std::net::SocketAddr;
use tokio::signal;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let backend = Backend::connect(config.database_url()).await?;
    backend.migrate().await?;

    let result = serve(&config, &backend).await;
    backend.shutdown().await;
    result
}

async fn serve(config: &AppConfig, backend: &Backend) -> Result<()> {
    let services = bootstrap::services(config, backend)?;
    if config.admin_api_token().is_none() {
        tracing::warn!("ADMIN_API_TOKEN unset: admin api rejects every request");
    }

    let state = HttpState {
        services,
        admin_token: config.admin_api_token().map(Into::into),
    };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
