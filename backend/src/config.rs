use log::warn;
use std::env;
use std::path::PathBuf;

const DEFAULT_JWT_SECRET: &str = "dev-secret-change-me";

/// Runtime settings, read once from the environment at startup.
pub struct Config {
    pub bind_addr: String,
    pub database_path: PathBuf,
    pub jwt_secret: String,
    pub token_ttl_secs: u64,
    pub admin_email: String,
    pub admin_password: String,
}

impl Config {
    pub fn from_env() -> Self {
        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            warn!("JWT_SECRET not set, falling back to the built-in development secret");
            DEFAULT_JWT_SECRET.to_string()
        });

        Self {
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:5000".to_string()),
            database_path: env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "agent_manager.sqlite".to_string())
                .into(),
            jwt_secret,
            token_ttl_secs: env::var("TOKEN_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(86_400),
            admin_email: env::var("ADMIN_EMAIL")
                .unwrap_or_else(|_| "admin@example.com".to_string()),
            admin_password: env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".to_string()),
        }
    }
}
