use std::path::PathBuf;

use crate::error::{config::ConfigError, AppError};

const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";

const DEFAULT_GUILD_DATA_DIR: &str = "guild_data";
const DEFAULT_PORT: u16 = 3001;

/// Application configuration loaded from the environment.
///
/// The session secret signs the session cookie, so it must be long enough
/// to derive a signing key from (64 bytes). The Discord endpoint URLs are
/// constants rather than configuration.
pub struct Config {
    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_redirect_url: String,
    pub discord_bot_token: String,

    pub session_secret: String,
    pub frontend_origin: String,

    pub guild_data_dir: PathBuf,
    pub port: u16,

    pub discord_auth_url: String,
    pub discord_token_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let port = match std::env::var("PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidEnvVar("PORT", "must be a port number"))?,
            Err(_) => DEFAULT_PORT,
        };

        let session_secret = require_env("SESSION_SECRET")?;
        if session_secret.len() < 64 {
            return Err(ConfigError::InvalidEnvVar(
                "SESSION_SECRET",
                "must be at least 64 bytes",
            )
            .into());
        }

        Ok(Self {
            discord_client_id: require_env("DISCORD_CLIENT_ID")?,
            discord_client_secret: require_env("DISCORD_CLIENT_SECRET")?,
            discord_redirect_url: require_env("DISCORD_REDIRECT_URL")?,
            discord_bot_token: require_env("DISCORD_BOT_TOKEN")?,
            session_secret,
            frontend_origin: require_env("FRONTEND_ORIGIN")?,
            guild_data_dir: std::env::var("GUILD_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_GUILD_DATA_DIR)),
            port,
            discord_auth_url: DISCORD_AUTH_URL.to_string(),
            discord_token_url: DISCORD_TOKEN_URL.to_string(),
        })
    }
}

fn require_env(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
