use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const DEFAULT_RADIUS_KM: f64 = 5.0;
pub const DEFAULT_ENRICHMENT_TIMEOUT_MS: u64 = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Tunables shared by nearby and keyword search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    /// Results per page for both search modes.
    pub page_size: i64,
    /// Radius used by nearby search when the caller omits one.
    pub default_radius_km: f64,
    /// Upper bound for a single thumbnail or bookmark lookup.
    pub enrichment_timeout: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            default_radius_km: DEFAULT_RADIUS_KM,
            enrichment_timeout: Duration::from_millis(DEFAULT_ENRICHMENT_TIMEOUT_MS),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub db_acquire_timeout_secs: u64,
    pub search: SearchConfig,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("database_url", &"[redacted]")
            .field("db_max_connections", &self.db_max_connections)
            .field("db_min_connections", &self.db_min_connections)
            .field("db_acquire_timeout_secs", &self.db_acquire_timeout_secs)
            .field("search", &self.search)
            .finish()
    }
}
