use axum::Router;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::Config;
use crate::db::{self, Backend, ContentStore};
use crate::error::TaaltorenError;
use crate::middleware::AdminAuth;
use crate::router::{
    ContentState, ProbeState, ScoreState, content_router, probe_router, score_router,
};

/// Open the pool, create `users` when asked to, and build the score router.
pub async fn build_score_app(cfg: &Config) -> Result<Router, TaaltorenError> {
    let database_url = cfg.database_url()?;
    let backend = Backend::from_url(&database_url)?;
    let pool = db::connect(&database_url, cfg.db_max_connections).await?;

    let state = ScoreState::new(pool);
    if cfg.init_schema {
        state.store.init_schema(backend).await?;
        info!(?backend, "users table ready");
    }
    Ok(score_router(state))
}

/// Open the pool and check it answers; the route itself never touches it.
pub async fn build_probe_app(cfg: &Config) -> Result<Router, TaaltorenError> {
    let database_url = cfg.database_url()?;
    let backend = Backend::from_url(&database_url)?;
    let pool = db::connect(&database_url, cfg.db_max_connections).await?;

    match db::ping(&pool).await {
        Ok(()) => info!("database answered ping"),
        Err(e) => warn!(error = %e, "database did not answer ping"),
    }
    if cfg.init_schema {
        db::apply_ddl(&pool, backend.probe_user_ddl()).await?;
    }
    Ok(probe_router(ProbeState::new(pool)))
}

/// Open the pool, create `sentences`/`dialogues` when asked to, and build the
/// content router.
pub async fn build_content_app(cfg: &Config) -> Result<Router, TaaltorenError> {
    let database_url = cfg.database_url()?;
    let backend = Backend::from_url(&database_url)?;
    let pool = db::connect(&database_url, cfg.db_max_connections).await?;

    let store = ContentStore::new(pool, backend);
    if cfg.init_schema {
        store.init_schema().await?;
        info!(?backend, "content tables ready");
    }
    let admin = AdminAuth::from_config(cfg);
    Ok(content_router(ContentState::new(store, admin)))
}

/// Bind `addr` and serve until Ctrl-C or SIGTERM.
pub async fn serve(addr: &str, app: Router) -> Result<(), TaaltorenError> {
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to listen for SIGTERM");
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
    info!("shutdown signal received");
}
