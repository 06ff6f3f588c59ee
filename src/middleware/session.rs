//! Type-safe session management wrapper.
//!
//! `AuthSession` wraps the underlying `tower_sessions::Session` and exposes
//! only the operations the rest of the application needs: establishing an
//! authenticated session after the OAuth callback and reading it back on
//! later requests. Centralizing the session keys here prevents typos and
//! keeps the access token from being read anywhere it shouldn't be.

use serenity::all::User;
use tower_sessions::Session;

use crate::error::{auth::AuthError, AppError};

// Session key constants
const SESSION_AUTH_USER: &str = "auth:user";
const SESSION_AUTH_ACCESS_TOKEN: &str = "auth:access_token";

/// Authentication session management.
///
/// The session record holds the Discord user profile and the user's access
/// token. The token stays server-side only; nothing outside this module
/// should ever place it in a response body.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Establishes an authenticated session, overwriting any existing record.
    ///
    /// Called only by the OAuth callback handler after a successful
    /// exchange-then-fetch sequence.
    ///
    /// # Arguments
    /// - `user` - The authenticated user's Discord profile
    /// - `access_token` - The user's OAuth2 access token
    pub async fn establish(&self, user: &User, access_token: &str) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER, user).await?;
        self.session
            .insert(SESSION_AUTH_ACCESS_TOKEN, access_token)
            .await?;
        Ok(())
    }

    /// Retrieves the authenticated user's profile from the session.
    ///
    /// # Returns
    /// - `Ok(Some(user))` - User is logged in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn current_user(&self) -> Result<Option<User>, AppError> {
        let user = self.session.get::<User>(SESSION_AUTH_USER).await?;
        Ok(user)
    }

    /// Retrieves the stored access token from the session.
    pub async fn access_token(&self) -> Result<Option<String>, AppError> {
        let token = self
            .session
            .get::<String>(SESSION_AUTH_ACCESS_TOKEN)
            .await?;
        Ok(token)
    }

    /// Like `current_user`, but maps an absent session to `Unauthenticated`.
    pub async fn require_user(&self) -> Result<User, AppError> {
        self.current_user()
            .await?
            .ok_or_else(|| AuthError::Unauthenticated.into())
    }
}

#[cfg(test)]
mod tests {
    use serenity::all::User;
    use test_utils::serenity::user::create_test_user;

    /// The session store persists values through serde_json, so the stored
    /// profile must survive that trip with its identity intact.
    #[test]
    fn user_profile_survives_session_serialization() {
        let user = create_test_user(80351110224678912, "exo_admin");

        let stored = serde_json::to_value(&user).expect("serialize profile");
        let restored: User = serde_json::from_value(stored).expect("deserialize profile");

        assert_eq!(restored.id, user.id);
        assert_eq!(restored.name, "exo_admin");
    }
}
