//! Configuration loading
//!
//! Static configuration is read once at startup from an optional
//! `config.toml`, overridden by environment variables with prefix `LG` and
//! separator `__` (e.g. `LG__SERVER__PORT=9000`, `LG__WEBHOOK__URL=...`).

use serde::{Deserialize, Serialize};

/// Static application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaticConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub webhook: WebhookConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// Load configuration from `config.toml` and environment variables.
    ///
    /// Priority: ENV > config.toml > defaults.
    pub fn load() -> Self {
        use config::{Config, Environment, File};

        let path = "config.toml";

        let builder = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix("LG")
                    .separator("__")
                    .try_parsing(true),
            );

        let mut config = match builder.build() {
            Ok(settings) => match settings.try_deserialize::<StaticConfig>() {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("[ERROR] Failed to deserialize config: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("[ERROR] Failed to build config: {}", e);
                Self::default()
            }
        };

        config.webhook.sanitize();
        config
    }

    /// Render a sample TOML configuration with all defaults
    pub fn generate_sample_config() -> String {
        let sample = Self::default();
        toml::to_string_pretty(&sample)
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_url")]
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
        }
    }
}

/// Webhook notification target. Absence of `url` disables notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookConfig {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default = "default_webhook_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout_secs: default_webhook_timeout_secs(),
        }
    }
}

impl WebhookConfig {
    /// Drop an endpoint that is not a usable http(s) URL.
    pub fn sanitize(&mut self) {
        let Some(raw) = self.url.as_deref() else {
            return;
        };

        let usable = url::Url::parse(raw)
            .map(|u| matches!(u.scheme(), "http" | "https"))
            .unwrap_or(false);

        if !usable {
            // Runs before logging is initialized
            eprintln!("[WARN] Ignoring invalid webhook url: {}", raw);
            self.url = None;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CorsConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// "plain" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
    /// Log file path; empty or absent means stdout
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub enable_rotation: bool,
    #[serde(default = "default_log_max_backups")]
    pub max_backups: u32,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            enable_rotation: false,
            max_backups: default_log_max_backups(),
        }
    }
}

fn default_server_host() -> String {
    "127.0.0.1".to_string()
}

fn default_server_port() -> u16 {
    8080
}

fn default_database_url() -> String {
    "sqlite://leadgate.db".to_string()
}

fn default_webhook_timeout_secs() -> u64 {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "plain".to_string()
}

fn default_log_max_backups() -> u32 {
    7
}
