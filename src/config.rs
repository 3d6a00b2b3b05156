use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_INFERENCE_URL: &str = "http://127.0.0.1:8000/predict";

#[derive(Debug, Clone, Deserialize)]
pub struct InferenceConfig {
    pub url: String,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl InferenceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_INFERENCE_URL.into(),
            timeout_secs: 5,
            connect_timeout_secs: 2,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub db_max_connections: u32,
    pub inference: InferenceConfig,
    pub upload_limit_bytes: usize,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let defaults = InferenceConfig::default();
        let inference = InferenceConfig {
            url: std::env::var("INFERENCE_URL").unwrap_or(defaults.url),
            timeout_secs: env_or("INFERENCE_TIMEOUT_SECS", defaults.timeout_secs),
            connect_timeout_secs: env_or(
                "INFERENCE_CONNECT_TIMEOUT_SECS",
                defaults.connect_timeout_secs,
            ),
        };
        Ok(Self {
            database_url,
            db_max_connections: env_or("DB_MAX_CONNECTIONS", 10),
            inference,
            upload_limit_bytes: env_or("UPLOAD_LIMIT_BYTES", 20 * 1024 * 1024),
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env_or("APP_PORT", 8080),
        })
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}
