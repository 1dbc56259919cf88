use serde::Deserialize;
use std::fs;

fn default_timeout_seconds() -> u64 {
    10
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub base_url: String,
    pub api_token: String,
    #[serde(default = "default_timeout_seconds")]
    pub request_timeout_seconds: u64,
}

pub fn load_config(path: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}
