// src/config/mod.rs
// All tunables come from the environment (optionally via .env); defaults below.

use once_cell::sync::Lazy;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Config {
    // ── Upstream completion API
    /// The one secret. Absent means chat requests are refused with a 500;
    /// the server itself still boots.
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub model: String,

    // ── Content store (menu / offers / events)
    pub content_api_url: String,

    // ── Server
    pub host: String,
    pub port: u16,
    pub cors_origin: String,

    // ── Logging
    pub log_level: String,
}

// Handles values with trailing comments and extra whitespace.
fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            let clean_val = val.split('#').next().unwrap_or("").trim();
            match clean_val.parse::<T>() {
                Ok(parsed) => {
                    eprintln!("Config: {} = {} (from environment)", key, clean_val);
                    parsed
                }
                Err(_) => {
                    eprintln!("Config: {} = '{}' (parse failed, using default)", key, val);
                    default
                }
            }
        }
        Err(_) => default,
    }
}

// Secrets go through here: present-or-absent only, value never printed.
fn env_var_opt(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

impl Config {
    pub fn from_env() -> Self {
        if dotenvy::dotenv().is_err() {
            eprintln!("Warning: .env file not found. Using environment variables and defaults.");
        }

        Self {
            openai_api_key: env_var_opt("OPENAI_API_KEY"),
            openai_base_url: env_var_or(
                "LAYALI_OPENAI_BASE_URL",
                "https://api.openai.com/v1".to_string(),
            ),
            model: env_var_or("LAYALI_MODEL", "gpt-4o-mini".to_string()),
            content_api_url: env_var_or(
                "LAYALI_CONTENT_API_URL",
                "http://localhost:8090".to_string(),
            ),
            host: env_var_or("LAYALI_HOST", "0.0.0.0".to_string()),
            port: env_var_or("LAYALI_PORT", 3001),
            cors_origin: env_var_or("LAYALI_CORS_ORIGIN", "http://localhost:3000".to_string()),
            log_level: env_var_or("LAYALI_LOG_LEVEL", "info".to_string()),
        }
    }
}

// Global config instance - loaded once at startup
pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);
