//! Direct access to the Discord REST API.
//!
//! Every operation is a single proxy call: no retry, no backoff, no caching.
//! User-scoped calls go through the shared reqwest client with the user's
//! bearer token; the bot-scoped guild lookup goes through the Serenity HTTP
//! client holding the bot credential.

use serde::de::DeserializeOwned;
use serenity::all::{GuildInfo, User};
use serenity::http::Http;

use crate::error::discord::DiscordApiError;

const DISCORD_API_BASE: &str = "https://discord.com/api/v10";

pub struct DiscordApiClient<'a> {
    http_client: &'a reqwest::Client,
    discord_http: &'a Http,
}

impl<'a> DiscordApiClient<'a> {
    pub fn new(http_client: &'a reqwest::Client, discord_http: &'a Http) -> Self {
        Self {
            http_client,
            discord_http,
        }
    }

    /// Retrieves the profile of the user the access token belongs to.
    pub async fn fetch_current_user(&self, access_token: &str) -> Result<User, DiscordApiError> {
        self.get_with_bearer("/users/@me", access_token).await
    }

    /// Retrieves the guilds the user belongs to, in Discord's own order.
    ///
    /// Each entry carries the permission bitmask the user holds in that
    /// guild, which is what the guild access rule filters on.
    pub async fn fetch_user_guilds(
        &self,
        access_token: &str,
    ) -> Result<Vec<GuildInfo>, DiscordApiError> {
        self.get_with_bearer("/users/@me/guilds", access_token)
            .await
    }

    /// Retrieves the guilds the bot itself is installed in, using the bot
    /// credential rather than any user's token. Fetched fresh on every call.
    pub async fn fetch_bot_guilds(&self) -> Result<Vec<GuildInfo>, DiscordApiError> {
        let guilds = self.discord_http.get_guilds(None, None).await?;
        Ok(guilds)
    }

    async fn get_with_bearer<T: DeserializeOwned>(
        &self,
        path: &str,
        access_token: &str,
    ) -> Result<T, DiscordApiError> {
        let response = self
            .http_client
            .get(format!("{DISCORD_API_BASE}{path}"))
            .bearer_auth(access_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DiscordApiError::Remote { status, body });
        }

        Ok(response.json::<T>().await?)
    }
}
