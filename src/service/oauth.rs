//! OAuth2 login with Discord.

use oauth2::{AuthorizationCode, CsrfToken, Scope, TokenResponse};
use serenity::all::User;
use serenity::http::Http;
use url::Url;

use crate::{
    data::discord::DiscordApiClient,
    error::{discord::DiscordApiError, AppError},
    state::OAuth2Client,
};

pub struct DiscordAuthService<'a> {
    http_client: &'a reqwest::Client,
    oauth_client: &'a OAuth2Client,
    discord_http: &'a Http,
}

impl<'a> DiscordAuthService<'a> {
    pub fn new(
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
        discord_http: &'a Http,
    ) -> Self {
        Self {
            http_client,
            oauth_client,
            discord_http,
        }
    }

    /// Builds the Discord authorization URL the dashboard redirects the
    /// browser to. No side effects.
    ///
    /// The `state` parameter oauth2 appends is not round-tripped: the
    /// dashboard delivers the authorization code back to us as a JSON body
    /// rather than a redirect, so there is nothing to validate it against.
    pub fn login_url(&self) -> Url {
        let (authorize_url, _csrf_state) = self
            .oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("identify".to_string()))
            .add_scope(Scope::new("guilds".to_string()))
            .url();

        authorize_url
    }

    /// Completes the OAuth flow: exchanges the authorization code for an
    /// access token, then fetches the user's profile with it.
    ///
    /// Either the whole sequence succeeds or the request fails; the caller
    /// establishes the session only after this returns `Ok`, so a failed
    /// exchange leaves any prior session unchanged.
    ///
    /// # Returns
    /// - `Ok((user, access_token))` - The authenticated profile and its token
    /// - `Err(AppError::DiscordErr(_))` - Exchange or profile fetch failed
    pub async fn callback(&self, authorization_code: String) -> Result<(User, String), AppError> {
        let auth_code = AuthorizationCode::new(authorization_code);

        let token = self
            .oauth_client
            .exchange_code(auth_code)
            .request_async(self.http_client)
            .await
            .map_err(|err| DiscordApiError::Exchange(err.to_string()))?;

        let access_token = token.access_token().secret().to_string();

        let api = DiscordApiClient::new(self.http_client, self.discord_http);
        let user = api.fetch_current_user(&access_token).await?;

        Ok((user, access_token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, startup};
    use std::path::PathBuf;

    fn test_config() -> Config {
        Config {
            discord_client_id: "1234567890".to_string(),
            discord_client_secret: "secret".to_string(),
            discord_redirect_url: "https://dashboard.example.com/callback".to_string(),
            discord_bot_token: "bot-token".to_string(),
            session_secret: "s".repeat(64),
            frontend_origin: "https://dashboard.example.com".to_string(),
            guild_data_dir: PathBuf::from("guild_data"),
            port: 3001,
            discord_auth_url: "https://discord.com/oauth2/authorize".to_string(),
            discord_token_url: "https://discord.com/api/oauth2/token".to_string(),
        }
    }

    /// The authorization URL carries the client id, the redirect target, and
    /// both requested scopes.
    #[test]
    fn login_url_contains_client_id_redirect_and_scopes() {
        let config = test_config();
        let http_client = reqwest::Client::new();
        let oauth_client = startup::setup_oauth_client(&config).unwrap();
        let discord_http = Http::new("test-token");

        let service = DiscordAuthService::new(&http_client, &oauth_client, &discord_http);
        let url = service.login_url();

        assert_eq!(url.host_str(), Some("discord.com"));
        assert_eq!(url.path(), "/oauth2/authorize");

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        assert!(pairs.contains(&("client_id".to_string(), "1234567890".to_string())));
        assert!(pairs.contains(&(
            "redirect_uri".to_string(),
            "https://dashboard.example.com/callback".to_string()
        )));
        assert!(pairs
            .iter()
            .any(|(k, v)| k == "scope" && v.contains("identify") && v.contains("guilds")));
    }
}
