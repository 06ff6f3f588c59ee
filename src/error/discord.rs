use axum::http::StatusCode;
use thiserror::Error;

/// Failure taxonomy for calls against the Discord API.
///
/// Callers never see Discord's own error shapes; every remote call resolves
/// into one of these variants. All of them surface to the client as a
/// generic 500 with the detail logged server-side.
#[derive(Error, Debug)]
pub enum DiscordApiError {
    /// Discord answered with a non-success status.
    #[error("Discord API returned {status}: {body}")]
    Remote { status: StatusCode, body: String },

    /// Network-level failure reaching Discord, or a malformed payload that
    /// could not be decoded.
    #[error("Failed to reach Discord API: {0}")]
    Transport(#[from] reqwest::Error),

    /// The OAuth2 authorization-code exchange was rejected.
    #[error("Authorization code exchange failed: {0}")]
    Exchange(String),

    /// Bot-credential client failure that is not a rejected request.
    #[error(transparent)]
    Client(Box<serenity::Error>),
}

impl From<serenity::Error> for DiscordApiError {
    fn from(err: serenity::Error) -> Self {
        match err {
            serenity::Error::Http(serenity::http::HttpError::UnsuccessfulRequest(response)) => {
                Self::Remote {
                    status: response.status_code,
                    body: response.error.message,
                }
            }
            other => Self::Client(Box::new(other)),
        }
    }
}
