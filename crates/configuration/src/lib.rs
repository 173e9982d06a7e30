use crate::error::ConfigError;
use std::env;
use std::path::Path;

// Declare the modules that make up this crate.
#[cfg(feature = "clap")]
pub mod cli;
pub mod error;
pub mod settings;

#[cfg(feature = "clap")]
pub use cli::ConfigArgs;

// Re-export the core types to provide a clean public API.
pub use settings::{
    ConnectionStrings, DatabaseSettings, LoggingSettings, ServerSettings, Settings,
    StorageBackend,
};

/// The config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "charging.toml";

/// Prefix of the environment variables that override file settings,
/// e.g. `CHARGING__CONNECTION_STRINGS__DEFAULT_CONNECTION`.
pub const ENV_PREFIX: &str = "CHARGING";

/// Loads the application settings.
///
/// Sources are layered, later ones winning: built-in defaults, the TOML file
/// (`path`, or `charging.toml` if present), then `CHARGING__*` environment
/// variables. If no connection string is configured, `DATABASE_URL` is used.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    load_with_fallback(path, env::var("DATABASE_URL").ok())
}

/// `load_settings` with the `DATABASE_URL` value passed in rather than read.
fn load_with_fallback(
    path: Option<&Path>,
    database_url: Option<String>,
) -> Result<Settings, ConfigError> {
    let file = match path {
        Some(p) => config::File::from(p).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    let builder = config::Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5000)?
        .set_default("server.body_limit_bytes", 1024 * 1024)?
        .set_default("database.backend", "postgres")?
        .set_default("database.max_connections", 10)?
        .set_default("database.acquire_timeout_secs", 5)?
        .set_default("database.migration_retries", 3)?
        .set_default("database.migration_retry_delay_secs", 3)?
        .set_default("logging.level", "info")?
        .add_source(file)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let mut settings = builder.try_deserialize::<Settings>()?;

    if settings.connection_strings.default_connection.is_none() {
        if let Some(url) = database_url {
            settings.connection_strings.default_connection = Some(url);
            settings.connection_strings.from_database_url = true;
        }
    }

    validate(&settings)?;
    Ok(settings)
}

/// Rejects settings that would only fail later, at connect time.
pub fn validate(settings: &Settings) -> Result<(), ConfigError> {
    if settings.database.backend == StorageBackend::Postgres
        && settings
            .connection_strings
            .default_connection
            .as_deref()
            .is_none_or(|s| s.trim().is_empty())
    {
        return Err(ConfigError::ValidationError(
            "connection_strings.default_connection (or DATABASE_URL) must be set for the postgres backend".to_string(),
        ));
    }
    if settings.database.migration_retries == 0 {
        return Err(ConfigError::ValidationError(
            "database.migration_retries must be at least 1".to_string(),
        ));
    }
    Ok(())
}
