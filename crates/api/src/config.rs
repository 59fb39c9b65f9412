use std::str::FromStr;

use axum::http::HeaderValue;

/// Deployment environment, selects the default database file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn default_database_url(self) -> &'static str {
        match self {
            AppEnv::Development => "sqlite://database/music_library.db",
            AppEnv::Production => "sqlite://database/music_library_prod.db",
        }
    }
}

impl FromStr for AppEnv {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(AppEnv::Development),
            "production" => Ok(AppEnv::Production),
            other => Err(format!("unknown environment '{other}'")),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} has invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    pub app_env: AppEnv,
    /// SQLite connection URL; defaults depend on [`AppEnv`].
    pub database_url: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<HeaderValue>,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var        | Default                                   |
    /// |----------------|-------------------------------------------|
    /// | `HOST`         | `0.0.0.0`                                 |
    /// | `PORT`         | `3000`                                    |
    /// | `APP_ENV`      | `development`                             |
    /// | `DATABASE_URL` | `sqlite://database/music_library.db`      |
    /// | `CORS_ORIGINS` | `http://localhost:5173`                   |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port = match lookup("PORT") {
            Some(value) => value.parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::Invalid {
                    var: "PORT",
                    reason: e.to_string(),
                    value,
                }
            })?,
            None => 3000,
        };

        let app_env = match lookup("APP_ENV") {
            Some(value) => value.parse().map_err(|reason| ConfigError::Invalid {
                var: "APP_ENV",
                value,
                reason,
            })?,
            None => AppEnv::Development,
        };

        let database_url = lookup("DATABASE_URL")
            .unwrap_or_else(|| app_env.default_database_url().to_string());

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|e| ConfigError::Invalid {
                    var: "CORS_ORIGINS",
                    value: origin.to_string(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            host,
            port,
            app_env,
            database_url,
            cors_origins,
        })
    }
}
