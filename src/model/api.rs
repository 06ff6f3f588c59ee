use serde::{Deserialize, Serialize};

/// Error payload returned for failed requests.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

/// Response body for `GET /auth/discord`.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthUrlDto {
    #[serde(rename = "authUrl")]
    pub auth_url: String,
}

/// Acknowledgement body for endpoints that return no data.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessDto {
    pub success: bool,
}
