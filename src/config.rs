use std::env;

use crate::error::ConfigError;

pub const DEFAULT_STORE_URL: &str = "shopping_lists.json";

#[derive(Clone)]
pub struct Config {
    pub token: String,
    pub store_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let token = ["BOT_TOKEN", "TELOXIDE_TOKEN"]
            .iter()
            .filter_map(|key| env::var(key).ok())
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty())
            .ok_or(ConfigError::MissingToken)?;
        let store_url = env::var("STORE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_STORE_URL.to_string());
        Ok(Self { token, store_url })
    }
}

// Token is left out so it never ends up in logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("store_url", &self.store_url)
            .finish_non_exhaustive()
    }
}
