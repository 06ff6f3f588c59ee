//! Construction of clients, layers, and stores during server startup.

use axum::http::{header, HeaderValue, Method};
use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use time::Duration;
use tower_http::cors::CorsLayer;
use tower_sessions::{
    cookie::{Key, SameSite},
    service::SignedCookie,
    Expiry, MemoryStore, SessionManagerLayer,
};

use crate::{
    config::Config,
    data::settings::SettingsStore,
    error::{config::ConfigError, AppError},
    state::OAuth2Client,
};

/// Name of the session cookie delivered to the dashboard.
pub const SESSION_COOKIE_NAME: &str = "exobot.sid";

/// Sessions expire after this many days without a request.
const SESSION_INACTIVITY_DAYS: i64 = 7;

/// Builds the shared HTTP client used for user-scoped Discord calls and the
/// token exchange. Redirects are disabled so a malicious response cannot
/// steer requests elsewhere.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Builds the OAuth2 client for Discord's authorization-code flow from the
/// configured client credentials and redirect URL.
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let client = BasicClient::new(ClientId::new(config.discord_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.discord_client_secret.clone()))
        .set_auth_uri(AuthUrl::new(config.discord_auth_url.clone())?)
        .set_token_uri(TokenUrl::new(config.discord_token_url.clone())?)
        .set_redirect_uri(RedirectUrl::new(config.discord_redirect_url.clone())?);

    Ok(client)
}

/// Builds the session layer: an in-memory store behind a signed cookie.
///
/// The dashboard and this API are served from different origins, so the
/// cookie must be `SameSite=None` and therefore `Secure`. Sessions are
/// process-local; a restart clears them.
pub fn setup_session_layer(
    config: &Config,
) -> Result<SessionManagerLayer<MemoryStore, SignedCookie>, AppError> {
    if config.session_secret.len() < 64 {
        return Err(ConfigError::InvalidEnvVar("SESSION_SECRET", "must be at least 64 bytes").into());
    }

    let layer = SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE_NAME)
        .with_secure(true)
        .with_same_site(SameSite::None)
        .with_expiry(Expiry::OnInactivity(Duration::days(SESSION_INACTIVITY_DAYS)))
        .with_signed(Key::from(config.session_secret.as_bytes()));

    Ok(layer)
}

/// Builds the CORS layer permitting only the dashboard's origin, with
/// credentials allowed so the session cookie is sent cross-origin.
pub fn setup_cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let origin = config
        .frontend_origin
        .parse::<HeaderValue>()
        .map_err(|_| ConfigError::InvalidEnvVar("FRONTEND_ORIGIN", "must be a valid origin"))?;

    let layer = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    Ok(layer)
}

/// Builds the settings store and creates its document directory if absent.
pub async fn setup_settings_store(config: &Config) -> Result<SettingsStore, AppError> {
    let store = SettingsStore::new(config.guild_data_dir.clone());
    store.init().await?;

    Ok(store)
}
