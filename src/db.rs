//! Database connection management
//!
//! Builds the Postgres pool and bootstraps the content schema.

pub mod queries;

use crate::config::DatabaseConfig;
use crate::error::AppError;
use deadpool_postgres::{Config, ManagerConfig, Pool, PoolConfig, RecyclingMethod, Runtime};
use tokio_postgres::NoTls;
use tracing::{info, warn};

/// Create a connection pool and verify that it can reach the server
pub async fn connect(config: &DatabaseConfig) -> Result<Pool, AppError> {
    let pool = create_pool(config)?;

    let client = pool.get().await?;
    client.query_one("SELECT 1", &[]).await?;
    drop(client);

    info!(
        "Database connection established ({}:{}/{}, TLS: {})",
        config.host, config.port, config.database, config.require_tls
    );
    Ok(pool)
}

fn create_pool(config: &DatabaseConfig) -> Result<Pool, AppError> {
    let mut cfg = Config::new();
    cfg.host = Some(config.host.clone());
    cfg.port = Some(config.port);
    cfg.user = Some(config.user.clone());
    cfg.password = Some(config.password.clone());
    cfg.dbname = Some(config.database.clone());
    cfg.manager = Some(ManagerConfig {
        recycling_method: RecyclingMethod::Fast,
    });
    cfg.pool = Some(PoolConfig::new(config.max_pool_size));

    if config.require_tls {
        let certs = rustls_native_certs::load_native_certs();
        for err in &certs.errors {
            warn!("Skipping unreadable native certificate: {}", err);
        }

        let mut root_store = rustls::RootCertStore::empty();
        for cert in certs.certs {
            root_store.add(cert).ok();
        }

        let tls_config = rustls::ClientConfig::builder()
            .with_root_certificates(root_store)
            .with_no_client_auth();
        let tls = tokio_postgres_rustls::MakeRustlsConnect::new(tls_config);

        cfg.create_pool(Some(Runtime::Tokio1), tls)
            .map_err(|e| AppError::Config(format!("Failed to create TLS pool: {}", e)))
    } else {
        cfg.create_pool(Some(Runtime::Tokio1), NoTls)
            .map_err(|e| AppError::Config(format!("Failed to create pool: {}", e)))
    }
}

/// Create content tables if they don't exist
pub async fn bootstrap_schema(pool: &Pool) -> Result<(), AppError> {
    let client = pool.get().await?;

    for statement in queries::SCHEMA {
        client.execute(*statement, &[]).await?;
    }

    info!("Database tables initialized");
    Ok(())
}
