//! The guild access rule: which guilds a logged-in user may configure.

use std::collections::HashSet;

use serenity::all::{GuildId, GuildInfo, Permissions};
use serenity::http::Http;

use crate::{data::discord::DiscordApiClient, error::discord::DiscordApiError};

pub struct GuildAccessService<'a> {
    http_client: &'a reqwest::Client,
    discord_http: &'a Http,
}

impl<'a> GuildAccessService<'a> {
    pub fn new(http_client: &'a reqwest::Client, discord_http: &'a Http) -> Self {
        Self {
            http_client,
            discord_http,
        }
    }

    /// Returns the guilds the user can manage through the dashboard.
    ///
    /// Fetches the user's guild memberships with their access token and the
    /// bot's memberships with the bot credential, both fresh on every call,
    /// then keeps the user guilds where the user holds the Manage Guild
    /// permission bit and the bot is installed. Discord's ordering of the
    /// user-guilds response is preserved.
    pub async fn list_manageable_guilds(
        &self,
        access_token: &str,
    ) -> Result<Vec<GuildInfo>, DiscordApiError> {
        let api = DiscordApiClient::new(self.http_client, self.discord_http);

        let user_guilds = api.fetch_user_guilds(access_token).await?;
        let bot_guild_ids: HashSet<GuildId> = api
            .fetch_bot_guilds()
            .await?
            .into_iter()
            .map(|guild| guild.id)
            .collect();

        let manageable = filter_manageable(user_guilds, &bot_guild_ids);

        tracing::debug!(
            "User can manage {} of the bot's {} guilds",
            manageable.len(),
            bot_guild_ids.len()
        );

        Ok(manageable)
    }
}

/// Keeps the guilds where the user's permission bitmask includes Manage
/// Guild (`0x20`) and the guild appears in the bot's guild set. Other bits
/// in the mask are ignored, and the input order is preserved.
fn filter_manageable(
    user_guilds: Vec<GuildInfo>,
    bot_guild_ids: &HashSet<GuildId>,
) -> Vec<GuildInfo> {
    user_guilds
        .into_iter()
        .filter(|guild| {
            guild.permissions.contains(Permissions::MANAGE_GUILD)
                && bot_guild_ids.contains(&guild.id)
        })
        .collect()
}
