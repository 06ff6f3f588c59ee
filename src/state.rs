//! Application state shared across all request handlers.
//!
//! `AppState` is initialized once during startup and cloned for each request
//! through Axum's state extraction. All fields are cheap to clone:
//! `reqwest::Client` uses an `Arc` internally, the OAuth2 client is designed
//! to be cloned, `Arc<Http>` is a reference-counted pointer, and
//! `SettingsStore` only holds a path.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use serenity::http::Http;
use std::sync::Arc;

use crate::data::settings::SettingsStore;

/// Type alias for the OAuth2 client configured for Discord authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
#[derive(Clone)]
pub struct AppState {
    /// HTTP client for user-scoped Discord API requests.
    ///
    /// Configured with redirects disabled to prevent SSRF through
    /// attacker-influenced response chains.
    pub http_client: reqwest::Client,

    /// OAuth2 client for the Discord authorization-code flow.
    pub oauth_client: OAuth2Client,

    /// Discord HTTP client authenticated with the bot credential.
    ///
    /// Used for the bot-scoped guild membership lookup; never carries a
    /// user's access token.
    pub discord_http: Arc<Http>,

    /// Per-guild settings document store.
    pub settings: SettingsStore,
}

impl AppState {
    pub fn new(
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        discord_http: Arc<Http>,
        settings: SettingsStore,
    ) -> Self {
        Self {
            http_client,
            oauth_client,
            discord_http,
            settings,
        }
    }
}
