use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use log::debug;
use serde::Deserialize;

use crate::clients::errors::Result;

const SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Spotify application credentials for the client-credentials flow.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub id: String,
    pub secret: String,
}

impl Credentials {
    pub fn new(id: impl Into<String>, secret: impl Into<String>) -> Self {
        Credentials {
            id: id.into(),
            secret: secret.into(),
        }
    }

    /// Load credentials from `CLIENT_ID` / `CLIENT_SECRET` or raise a
    /// configuration error.
    pub fn from_env() -> Result<Self> {
        let id = std::env::var("CLIENT_ID")?;
        let secret = std::env::var("CLIENT_SECRET")?;
        Ok(Credentials { id, secret })
    }

    // Header value for HTTP Basic auth: "Basic " + base64("id:secret")
    fn basic_auth_header(&self) -> String {
        format!(
            "Basic {}",
            STANDARD.encode(format!("{}:{}", self.id, self.secret))
        )
    }
}

#[derive(Deserialize, Debug)]
struct TokenResponse {
    access_token: String,
}

/// Exchange client credentials for a short-lived bearer token.
///
/// Sends `grant_type=client_credentials` as a form body with the Basic
/// credential header and extracts `access_token` from the JSON response.
/// Any HTTP failure, non-success status, or missing field is fatal.
pub async fn request_token(http: &reqwest::Client, credentials: &Credentials) -> Result<String> {
    debug!("Requesting client-credentials token ...");
    let params = [("grant_type", "client_credentials")];
    let response = http
        .post(SPOTIFY_TOKEN_URL)
        .form(&params)
        .header("Authorization", credentials.basic_auth_header())
        .send()
        .await?
        .error_for_status()?;

    let body = response.text().await?;
    let token: TokenResponse = serde_json::from_str(&body)?;
    debug!("Obtained bearer token");
    Ok(token.access_token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_auth_header_encoding() {
        let creds = Credentials::new("my_id", "my_secret");
        assert_eq!(creds.basic_auth_header(), "Basic bXlfaWQ6bXlfc2VjcmV0");
    }

    #[test]
    fn test_token_response_extracts_access_token() {
        let body = r#"{"access_token":"abc123","token_type":"Bearer","expires_in":3600}"#;
        let token: TokenResponse = serde_json::from_str(body).unwrap();
        assert_eq!(token.access_token, "abc123");
    }

    #[test]
    fn test_token_response_rejects_missing_field() {
        let body = r#"{"token_type":"Bearer","expires_in":3600}"#;
        assert!(serde_json::from_str::<TokenResponse>(body).is_err());
    }
}
