use serde::Deserialize;

use crate::chat::reply::WELCOME_MESSAGE;

/// Fixed origin of the local frontend dev server, always allowed alongside `CLIENT_URL`.
pub const DEV_ORIGIN: &str = "http://localhost:5173";

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub client_url: Option<String>,
    pub dev_origin: String,
    pub body_limit_bytes: usize,
}

impl ServerConfig {
    /// Origins permitted to make credentialed cross-origin calls.
    pub fn allowed_origins(&self) -> Vec<String> {
        let mut origins = Vec::with_capacity(2);
        if let Some(url) = self.client_url.as_deref().map(str::trim) {
            if !url.is_empty() {
                origins.push(url.trim_end_matches('/').to_string());
            }
        }
        if !origins.iter().any(|o| o == &self.dev_origin) {
            origins.push(self.dev_origin.clone());
        }
        origins
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatConfig {
    pub response_delay_ms: u64,
    pub welcome_message: String,
    /// Seeds the RNG behind synthetic current velocities; entropy when unset.
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub chat: ChatConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
                client_url: None,
                dev_origin: DEV_ORIGIN.to_string(),
                body_limit_bytes: 64 * 1024,
            },
            chat: ChatConfig {
                response_delay_ms: 1500,
                welcome_message: WELCOME_MESSAGE.to_string(),
                seed: None,
            },
        }
    }
}

impl AppConfig {
    pub fn load(path: &str) -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();

        let settings = config::Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("server.dev_origin", DEV_ORIGIN)?
            .set_default("server.body_limit_bytes", 64 * 1024)?
            .set_default("chat.response_delay_ms", 1500)?
            .set_default("chat.welcome_message", WELCOME_MESSAGE)?
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("FLOATCHAT").separator("__"))
            .set_override_option("server.client_url", std::env::var("CLIENT_URL").ok())?
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .build()?;

        let mut app_config: AppConfig = settings.try_deserialize()?;

        // Expand environment variables if present like ${CLIENT_URL}
        app_config.server.host = expand_env(&app_config.server.host);
        app_config.server.client_url = app_config
            .server
            .client_url
            .as_deref()
            .map(expand_env)
            .filter(|url| !url.trim().is_empty());

        Ok(app_config)
    }
}

fn expand_env(val: &str) -> String {
    match val.strip_prefix("${").and_then(|rest| rest.strip_suffix('}')) {
        Some(var_name) => std::env::var(var_name).unwrap_or_default(),
        None => val.to_string(),
    }
}
