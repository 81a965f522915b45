use anyhow::Context;
use tokio::signal;
use tracing_subscriber::EnvFilter;

use knowledge_recommender::{
    api::{create_router, with_permissive_cors, AppState},
    config::Config,
    services::JsonFileCatalog,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("knowledge_recommender=debug,tower_http=debug")),
        )
        .init();

    let config = Config::from_env()?;

    // Lists are read per request; this only warns early about a bad document.
    let catalog = JsonFileCatalog::new(config.db_path.clone());
    match catalog.probe().await {
        Ok(missing) if missing.is_empty() => {
            tracing::info!(path = %config.db_path.display(), "Catalog document found");
        }
        Ok(missing) => {
            let missing: Vec<&str> = missing.iter().map(|key| key.as_str()).collect();
            tracing::warn!(path = %config.db_path.display(), ?missing, "Catalog document is incomplete");
        }
        Err(e) => {
            tracing::warn!(error = %e, "Catalog document is not readable, list endpoints will fail");
        }
    }

    let mut app = create_router(AppState::from_file(config.db_path.clone()));
    if config.cors_permissive {
        app = with_permissive_cors(app);
    }

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
