use std::time::Duration;

use crate::app_config::{AppConfig, Environment, SearchConfig};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Same as [`load_app_config`] without touching `.env` files.
fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it from a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        or_default(var, default)
            .parse::<SocketAddr>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let database_url = require("DATABASE_URL")?;
    let env = parse_environment(&or_default("TOURDB_ENV", "development"));
    let bind_addr = parse_addr("TOURDB_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("TOURDB_LOG_LEVEL", "info");

    let db_max_connections = parse_u32("TOURDB_DB_MAX_CONNECTIONS", "10")?;
    let db_min_connections = parse_u32("TOURDB_DB_MIN_CONNECTIONS", "1")?;
    let db_acquire_timeout_secs = parse_u64("TOURDB_DB_ACQUIRE_TIMEOUT_SECS", "10")?;

    let page_size = or_default("TOURDB_SEARCH_PAGE_SIZE", "10")
        .parse::<i64>()
        .map_err(|e| invalid("TOURDB_SEARCH_PAGE_SIZE", e.to_string()))?;
    if page_size <= 0 {
        return Err(invalid(
            "TOURDB_SEARCH_PAGE_SIZE",
            format!("must be positive, got {page_size}"),
        ));
    }

    let default_radius_km = or_default("TOURDB_SEARCH_DEFAULT_RADIUS_KM", "5.0")
        .parse::<f64>()
        .map_err(|e| invalid("TOURDB_SEARCH_DEFAULT_RADIUS_KM", e.to_string()))?;
    if !default_radius_km.is_finite() || default_radius_km < 0.0 {
        return Err(invalid(
            "TOURDB_SEARCH_DEFAULT_RADIUS_KM",
            format!("must be a finite, non-negative number, got {default_radius_km}"),
        ));
    }

    let enrichment_timeout_ms = parse_u64("TOURDB_ENRICHMENT_TIMEOUT_MS", "500")?;

    Ok(AppConfig {
        database_url,
        env,
        bind_addr,
        log_level,
        db_max_connections,
        db_min_connections,
        db_acquire_timeout_secs,
        search: SearchConfig {
            page_size,
            default_radius_km,
            enrichment_timeout: Duration::from_millis(enrichment_timeout_ms),
        },
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
