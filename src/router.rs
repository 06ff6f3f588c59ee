use axum::{
    routing::{get, post},
    Router,
};

use crate::{
    controller::{auth, guild, settings},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/discord", get(auth::login))
        .route("/auth/callback", post(auth::callback))
        .route("/api/me", get(auth::me))
        .route("/api/guilds", get(guild::list_guilds))
        .route(
            "/api/settings/{guild_id}",
            get(settings::get_settings).post(settings::update_settings),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, data::settings::SettingsStore, startup};
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use serenity::http::Http;
    use std::path::PathBuf;
    use std::sync::Arc;
    use tempfile::TempDir;
    use tower::ServiceExt;

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

    /// Builds the full app with a settings store rooted in a fresh temp
    /// directory. The TempDir must outlive the returned router.
    fn build_test_app() -> (Router, TempDir) {
        let config = test_config();
        let dir = tempfile::tempdir().expect("temp dir for settings store");

        let state = AppState::new(
            reqwest::Client::new(),
            startup::setup_oauth_client(&config).expect("oauth client"),
            Arc::new(Http::new("test-token")),
            SettingsStore::new(dir.path()),
        );

        let app = router()
            .with_state(state)
            .layer(startup::setup_session_layer(&config).expect("session layer"));

        (app, dir)
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("response body");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn auth_discord_returns_authorization_url() {
        let (app, _dir) = build_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/auth/discord")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let payload = json_body(response).await;
        let auth_url = payload["authUrl"].as_str().expect("authUrl string");
        assert!(auth_url.starts_with("https://discord.com/oauth2/authorize"));
        assert!(auth_url.contains("client_id=1234567890"));
        assert!(auth_url.contains("identify"));
        assert!(auth_url.contains("guilds"));
    }

    #[tokio::test]
    async fn me_without_session_returns_401() {
        let (app, _dir) = build_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/me")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let payload = json_body(response).await;
        assert!(payload["error"].is_string());
    }

    #[tokio::test]
    async fn guilds_without_session_returns_401_with_empty_array() {
        let (app, _dir) = build_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/guilds")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(json_body(response).await, json!([]));
    }

    #[tokio::test]
    async fn settings_write_then_read_round_trips() {
        let (app, _dir) = build_test_app();

        let write = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/settings/123")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"prefix":"!"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(write.status(), StatusCode::OK);
        assert_eq!(json_body(write).await, json!({ "success": true }));

        let read = app
            .oneshot(
                Request::builder()
                    .uri("/api/settings/123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(read.status(), StatusCode::OK);
        assert_eq!(json_body(read).await, json!({ "prefix": "!" }));
    }

    #[tokio::test]
    async fn settings_for_unwritten_guild_returns_empty_object() {
        let (app, _dir) = build_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/settings/999")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!({}));
    }

    #[tokio::test]
    async fn settings_post_replaces_previous_document() {
        let (app, _dir) = build_test_app();

        for body in [r#"{"prefix":"!","language":"en"}"#, r#"{"prefix":"?"}"#] {
            let response = app
                .clone()
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/api/settings/42")
                        .header(header::CONTENT_TYPE, "application/json")
                        .body(Body::from(body))
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let read = app
            .oneshot(
                Request::builder()
                    .uri("/api/settings/42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(json_body(read).await, json!({ "prefix": "?" }));
    }
}
