use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;
use std::path::Path;

/// Connection string used when neither `config.toml` nor `MONGO_URI` provides one.
pub const DEFAULT_MONGO_URI: &str = "mongodb://localhost:27017/musicDB";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

fn default_host() -> String { "0.0.0.0".into() }
fn default_port() -> u16 { 5000 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), worker_threads: Some(4) }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_db_name")]
    pub name: String,
    #[serde(default = "default_collection")]
    pub collection: String,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_selection_timeout")]
    pub server_selection_timeout_secs: u64,
    #[serde(default)]
    pub seed_on_startup: bool,
}

fn default_db_name() -> String { "musicDB".into() }
fn default_collection() -> String { "singers".into() }
fn default_connect_timeout() -> u64 { 10 }
fn default_selection_timeout() -> u64 { 10 }

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            name: default_db_name(),
            collection: default_collection(),
            connect_timeout_secs: default_connect_timeout(),
            server_selection_timeout_secs: default_selection_timeout(),
            seed_on_startup: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_format() -> String { "compact".into() }

impl Default for LogConfig {
    fn default() -> Self {
        Self { format: default_log_format() }
    }
}

pub fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_default() -> Result<AppConfig> {
    load_from_file(&config_path())
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    load_from_str(&content)
}

pub fn load_from_str(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

impl AppConfig {
    /// Load `config.toml` (or `CONFIG_PATH`) when present, otherwise build from
    /// environment variables, then normalize and validate.
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = if Path::new(&config_path()).exists() {
            load_default()?
        } else {
            Self::from_lookup(env_lookup)
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Build a configuration from `SERVER_HOST`, `SERVER_PORT`, `LOG_FORMAT`
    /// and the database variables; unset or unparsable values keep defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();
        if let Some(host) = lookup("SERVER_HOST") {
            cfg.server.host = host;
        }
        if let Some(port) = lookup("SERVER_PORT").and_then(|p| p.parse::<u16>().ok()) {
            cfg.server.port = port;
        }
        if let Some(w) = lookup("TOKIO_WORKER_THREADS").and_then(|v| v.parse::<usize>().ok()) {
            cfg.server.worker_threads = Some(w);
        }
        if let Some(format) = lookup("LOG_FORMAT") {
            cfg.log.format = format;
        }
        if let Some(name) = lookup("MONGO_DB_NAME") {
            cfg.database.name = name;
        }
        cfg.database.seed_on_startup = lookup("SEED_ON_STARTUP")
            .map(|v| matches!(v.trim(), "1" | "true" | "yes"))
            .unwrap_or(false);
        cfg
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.normalize_and_validate_with(env_lookup)
    }

    pub fn normalize_and_validate_with(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        self.server.normalize()?;
        // 若 TOML 中未提供 URL，则尝试从环境变量 MONGO_URI 填充
        self.database.normalize_with(lookup);
        self.database.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be within 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    /// Fill an empty URL from `MONGO_URI`, falling back to [`DEFAULT_MONGO_URI`].
    pub fn normalize_with(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if self.url.trim().is_empty() {
            self.url = lookup("MONGO_URI")
                .filter(|u| !u.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_MONGO_URI.to_string());
        }
    }

    pub fn validate(&self) -> Result<()> {
        let lower = self.url.trim().to_lowercase();
        if !(lower.starts_with("mongodb://") || lower.starts_with("mongodb+srv://")) {
            return Err(anyhow!("database.url must start with mongodb:// or mongodb+srv://"));
        }
        if self.name.trim().is_empty() {
            return Err(anyhow!("database.name must not be empty"));
        }
        if self.collection.trim().is_empty() {
            return Err(anyhow!("database.collection must not be empty"));
        }
        if self.connect_timeout_secs == 0 || self.server_selection_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }
}

impl LogConfig {
    fn validate(&self) -> Result<()> {
        match self.format.to_ascii_lowercase().as_str() {
            "compact" | "json" => Ok(()),
            other => Err(anyhow!("log.format must be compact or json, got {other}")),
        }
    }
}
