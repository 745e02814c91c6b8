use crate::utils::{AppError, AppResult};

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | ./data | database and log directory |
/// | HTTP_PORT | 3000 | HTTP API port |
/// | ENVIRONMENT | development | development, staging or production |
/// | LOG_LEVEL | info | default tracing filter |
/// | LOG_JSON | false | JSON formatted log lines |
/// | ADMIN_KEY | superempire-admin | shared admin panel key |
/// | SEED_CATALOG | true | seed the product container on first start |
/// | BACKEND_URL / BACKEND_KEY | unset | hosted backend mirror, see [`BackendConfig`] |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/srv/storefront HTTP_PORT=8080 cargo run --bin storefront-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory holding `storefront.redb` and `logs/`
    pub work_dir: String,
    pub http_port: u16,
    /// development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_json: bool,
    /// Compared verbatim against the `X-Admin-Key` header
    pub admin_key: String,
    pub seed_catalog: bool,
    /// Present only when both backend variables are set
    pub backend: Option<BackendConfig>,
}

pub const DEFAULT_ADMIN_KEY: &str = "superempire-admin";

impl Config {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let backend = match BackendConfig::from_env() {
            Ok(backend) => Some(backend),
            Err(e) => {
                tracing::debug!("Hosted backend disabled: {}", e);
                None
            }
        };

        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            admin_key: std::env::var("ADMIN_KEY").unwrap_or_else(|_| DEFAULT_ADMIN_KEY.into()),
            seed_catalog: std::env::var("SEED_CATALOG")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            backend,
        }
    }

    /// Build a configuration rooted at `work_dir` without reading the environment
    ///
    /// Used by tests.
    pub fn for_work_dir(work_dir: impl Into<String>) -> Self {
        Self {
            work_dir: work_dir.into(),
            http_port: 0,
            environment: "test".into(),
            log_level: "debug".into(),
            log_json: false,
            admin_key: DEFAULT_ADMIN_KEY.into(),
            seed_catalog: true,
            backend: None,
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Path of the redb database file
    pub fn database_path(&self) -> std::path::PathBuf {
        std::path::Path::new(&self.work_dir).join("storefront.redb")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Hosted backend credentials
///
/// Both values are required. The `seed-backend` utility refuses to start
/// without them; the server only disables remote mirroring.
#[derive(Clone)]
pub struct BackendConfig {
    /// Service base URL, e.g. `https://xyz.example.co`
    pub url: String,
    /// Service key sent as `apikey` and bearer token
    pub key: String,
    pub timeout_secs: u64,
}

impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendConfig")
            .field("url", &self.url)
            .field("key", &"***")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl BackendConfig {
    pub fn from_env() -> AppResult<Self> {
        let url = required_var("BACKEND_URL")?;
        let key = required_var("BACKEND_KEY")?;
        let timeout_secs = std::env::var("BACKEND_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);
        Ok(Self::new(url, key).with_timeout(timeout_secs))
    }

    pub fn new(url: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            key: key.into(),
            timeout_secs: 30,
        }
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

fn required_var(name: &str) -> AppResult<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::config(format!("{name} is not set"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_work_dir_defaults() {
        let config = Config::for_work_dir("/tmp/storefront");
        assert_eq!(config.admin_key, DEFAULT_ADMIN_KEY);
        assert!(config.seed_catalog);
        assert!(config.backend.is_none());
        assert!(!config.is_production());
        assert_eq!(
            config.database_path(),
            std::path::Path::new("/tmp/storefront/storefront.redb")
        );
    }

    #[test]
    fn test_backend_config_debug_hides_key() {
        let backend = BackendConfig::new("https://backend.local", "secret-key");
        let debug = format!("{:?}", backend);
        assert!(debug.contains("backend.local"));
        assert!(!debug.contains("secret-key"));
    }
}
