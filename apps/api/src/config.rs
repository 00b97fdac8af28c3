use anyhow::{Context, Result};

const DEFAULT_MASTER_LIST_PATH: &str = "apps/api/data/master_document_list.txt";
const DEFAULT_ALLOWED_ORIGIN: &str = "https://merilmoretolife.github.io";

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub master_list_path: String,
    /// Single origin allowed by the CORS layer; "*" disables the restriction.
    pub allowed_origin: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: require_env("OPENAI_API_KEY")?,
            master_list_path: std::env::var("MASTER_LIST_PATH")
                .unwrap_or_else(|_| DEFAULT_MASTER_LIST_PATH.to_string()),
            allowed_origin: std::env::var("ALLOWED_ORIGIN")
                .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGIN.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
