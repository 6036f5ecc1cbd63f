//! Repair Academy Content API server
//!
//! Serves the institute website's catalog, achievements and enrollments.
//! With `DATABASE_URL` set, content is kept in PostgreSQL; without it the
//! server runs on an in-memory store that is lost on restart.

use anyhow::Context;
use repair_academy_api::config::Settings;
use repair_academy_api::db;
use repair_academy_api::routes::create_router;
use repair_academy_api::state::AppState;
use repair_academy_api::store::{ContentStore, MemoryStore, PgStore};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("Failed to load configuration")?;

    init_tracing();

    info!("🚀 Starting {} API...", settings.institute_name);

    let store: Arc<dyn ContentStore> = match &settings.database {
        Some(db_config) => {
            let pool = db::connect(db_config)
                .await
                .context("Failed to connect to database")?;
            db::bootstrap_schema(&pool)
                .await
                .context("Failed to create database tables")?;
            Arc::new(PgStore::new(pool))
        }
        None => {
            warn!("⚠️  DATABASE_URL not set, using in-memory store (data is lost on restart)");
            Arc::new(MemoryStore::new())
        }
    };

    let state = Arc::new(AppState::new(store, settings.institute_name.clone()));
    let app = create_router(state, &settings);

    let addr = SocketAddr::from((settings.server.host, settings.server.port));

    info!("🌐 Server listening on http://{}", addr);
    info!("📚 API Endpoints:");
    info!("   GET    /api/services");
    info!("   GET    /api/courses");
    info!("   GET    /api/achievements");
    info!("   POST   /api/achievements");
    info!("   DELETE /api/achievements/{{id}}");
    info!("   GET    /api/enrollments");
    info!("   POST   /api/enrollments");
    info!("   PATCH  /api/enrollments/{{id}}/status?status=pending|approved|rejected");
    if settings.cors.allowed_origins.is_empty() {
        info!("🔓 CORS: any origin");
    } else {
        info!("🔒 CORS: {}", settings.cors.allowed_origins.join(", "));
    }

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server shutdown complete");
    Ok(())
}

/// Initialize tracing with structured logging
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,repair_academy_api=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_file(true)
                .with_line_number(true)
                .compact(),
        )
        .init();
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("📴 Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            info!("📴 Received terminate signal, initiating graceful shutdown...");
        },
    }
}
