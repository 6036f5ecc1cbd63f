//! Application configuration module
//!
//! Handles loading and validating configuration from environment variables.

use std::net::Ipv4Addr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: Ipv4Addr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: Ipv4Addr::new(0, 0, 0, 0),
            port: 8001,
        }
    }
}

/// Database configuration, parsed from `DATABASE_URL`
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub max_pool_size: usize,
    pub require_tls: bool,
}

/// CORS configuration
#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
    /// Empty means any origin is allowed.
    pub allowed_origins: Vec<String>,
}

/// Complete application settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerConfig,
    /// `None` selects the in-memory store.
    pub database: Option<DatabaseConfig>,
    pub cors: CorsConfig,
    pub institute_name: String,
}

pub const DEFAULT_INSTITUTE_NAME: &str = "Sri Sakthi Vinayaga Mobile Services";

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            database: None,
            cors: CorsConfig::default(),
            institute_name: DEFAULT_INSTITUTE_NAME.to_string(),
        }
    }
}

impl Settings {
    /// Load settings from environment variables
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if it exists (ignore errors if file not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server = ServerConfig {
            host: lookup("HOST")
                .and_then(|h| h.parse().ok())
                .unwrap_or_else(|| ServerConfig::default().host),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or_else(|| ServerConfig::default().port),
        };

        let max_pool_size = lookup("DB_MAX_CONNECTIONS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(10);

        let database = match lookup("DATABASE_URL").filter(|s| !s.trim().is_empty()) {
            Some(url) => Some(Self::parse_database_url(&url, max_pool_size)?),
            None => None,
        };

        let cors = CorsConfig {
            allowed_origins: match lookup("CORS_ORIGINS") {
                Some(raw) => Self::parse_origins(&raw)?,
                None => Vec::new(),
            },
        };

        let institute_name = lookup("INSTITUTE_NAME")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_INSTITUTE_NAME.to_string());

        Ok(Self {
            server,
            database,
            cors,
            institute_name,
        })
    }

    /// `*` anywhere in the list collapses to "any origin".
    /// Every other entry must be an `http(s)://host[:port]` origin.
    fn parse_origins(raw: &str) -> Result<Vec<String>, ConfigError> {
        let origins: Vec<String> = raw
            .split(',')
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if origins.iter().any(|o| o == "*") {
            return Ok(Vec::new());
        }

        for origin in &origins {
            Self::check_origin(origin)?;
        }
        Ok(origins)
    }

    fn check_origin(origin: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue(format!("Invalid CORS origin '{}'", origin));

        let parsed = url::Url::parse(origin).map_err(|_| invalid())?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(invalid());
        }
        if parsed.path() != "/" || parsed.query().is_some() {
            return Err(invalid());
        }
        axum::http::HeaderValue::from_str(origin).map_err(|_| invalid())?;
        Ok(())
    }

    /// Parse a DATABASE_URL connection string (postgresql://...)
    fn parse_database_url(url: &str, max_pool_size: usize) -> Result<DatabaseConfig, ConfigError> {
        let parsed = url::Url::parse(url).map_err(|_| {
            ConfigError::InvalidValue(
                "Invalid DATABASE_URL format (expected postgresql://...)".to_string(),
            )
        })?;

        if !matches!(parsed.scheme(), "postgres" | "postgresql") {
            return Err(ConfigError::InvalidValue(format!(
                "Unsupported DATABASE_URL scheme '{}'",
                parsed.scheme()
            )));
        }

        let host = parsed
            .host_str()
            .ok_or_else(|| ConfigError::InvalidValue("Missing host in DATABASE_URL".to_string()))?
            .to_string();

        let database = parsed.path().trim_start_matches('/').to_string();
        if database.is_empty() {
            return Err(ConfigError::InvalidValue(
                "Missing database name in DATABASE_URL".to_string(),
            ));
        }

        let require_tls = parsed
            .query_pairs()
            .any(|(k, v)| k == "sslmode" && v == "require");

        Ok(DatabaseConfig {
            host,
            port: parsed.port().unwrap_or(5432),
            user: parsed.username().to_string(),
            password: parsed.password().map(|p| p.to_string()).unwrap_or_default(),
            database,
            max_pool_size,
            require_tls,
        })
    }
}
