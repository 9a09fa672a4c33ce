//! Server configuration

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Origins allowed when `CORS_ORIGINS` is not set
pub const DEFAULT_CORS_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "http://10.0.2.2:8081",
    "http://10.0.2.2:8082",
    "http://192.168.56.1:8082",
];

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection URL
    pub database_url: String,
    /// Connection pool size
    pub database_max_connections: u32,
    /// HTTP port (env: HTTP_PORT, falls back to PORT)
    pub http_port: u16,
    /// Allowed CORS origins; `*` allows any origin
    pub cors_origins: Vec<String>,
    /// Environment: development | staging | production
    pub environment: String,
    /// Default log filter when RUST_LOG is unset
    pub log_level: String,
    /// Emit JSON log lines
    pub log_json: bool,
    /// Directory for daily-rotated log files
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self, BoxError> {
        let database_url = var("DATABASE_URL")
            .filter(|s| !s.is_empty())
            .ok_or("DATABASE_URL must be set")?;

        let cors_origins = match var("CORS_ORIGINS") {
            Some(list) => list
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
            None => DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect(),
        };

        Ok(Self {
            database_url,
            database_max_connections: var("DATABASE_MAX_CONNECTIONS")
                .and_then(|n| n.parse().ok())
                .unwrap_or(10),
            http_port: var("HTTP_PORT")
                .or_else(|| var("PORT"))
                .and_then(|p| p.parse().ok())
                .unwrap_or(8082),
            cors_origins,
            environment: var("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            log_level: var("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_json: var("LOG_FORMAT").is_some_and(|f| f.eq_ignore_ascii_case("json")),
            log_dir: var("LOG_DIR").filter(|s| !s.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, BoxError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn test_database_url_required() {
        let err = load(&[]).unwrap_err();
        assert_eq!(err.to_string(), "DATABASE_URL must be set");
        assert!(load(&[("DATABASE_URL", "")]).is_err());
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("DATABASE_URL", "postgres://localhost/resto")]).unwrap();
        assert_eq!(config.http_port, 8082);
        assert_eq!(config.database_max_connections, 10);
        assert_eq!(config.cors_origins.len(), DEFAULT_CORS_ORIGINS.len());
        assert_eq!(config.environment, "development");
        assert_eq!(config.log_level, "info");
        assert!(!config.log_json);
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("DATABASE_URL", "postgres://db/resto"),
            ("PORT", "9000"),
            ("CORS_ORIGINS", "http://a.test, http://b.test,"),
            ("LOG_FORMAT", "JSON"),
        ])
        .unwrap();
        assert_eq!(config.http_port, 9000);
        assert_eq!(config.cors_origins, ["http://a.test", "http://b.test"]);
        assert!(config.log_json);

        // HTTP_PORT wins over PORT
        let config = load(&[
            ("DATABASE_URL", "postgres://db/resto"),
            ("PORT", "9000"),
            ("HTTP_PORT", "9100"),
        ])
        .unwrap();
        assert_eq!(config.http_port, 9100);
    }
}
