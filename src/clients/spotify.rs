use log::debug;

use crate::clients::auth::{self, Credentials};
use crate::clients::entities::PlaylistPage;
use crate::clients::errors::{Error, Result};

const SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";

// Fixed projection: only the fields the log needs, nothing else.
const TRACK_FIELDS: &str = "items(added_at,track(name,artists(name)))";

/// Spotify Web API client using the client-credentials flow.
pub struct SpotifyClient {
    http: reqwest::Client,
    credentials: Credentials,
    token: Option<String>,
    base_url: String,
}

impl SpotifyClient {
    pub fn new(credentials: Credentials) -> Self {
        SpotifyClient {
            http: reqwest::Client::new(),
            credentials,
            token: None,
            base_url: SPOTIFY_API_URL.to_string(),
        }
    }

    /// Create a client for testing with a custom API base URL
    #[cfg(test)]
    pub fn with_base_url(credentials: Credentials, base_url: impl Into<String>) -> Self {
        SpotifyClient {
            http: reqwest::Client::new(),
            credentials,
            token: None,
            base_url: base_url.into(),
        }
    }

    // Create a SpotifyClient from environment variables or raise a configuration error
    pub fn try_default() -> Result<Self> {
        let credentials = Credentials::from_env().map_err(|_| {
            Error::ConfigurationError(
                "Missing Spotify credentials in environment variables. Check README.MD for details."
                    .into(),
            )
        })?;
        Ok(Self::new(credentials))
    }

    // Authorize the client by exchanging credentials for a bearer token.
    // All subsequent API calls send this token.
    pub async fn authorize_client(&mut self) -> Result<()> {
        debug!("Starting Spotify authorization ...");
        let token = auth::request_token(&self.http, &self.credentials).await?;
        self.token = Some(token);
        Ok(())
    }

    /// Fetch one page of playlist entries starting at `offset`.
    ///
    /// The page is capped at 100 entries by the API; callers wanting more
    /// must manage the offset across calls themselves.
    pub async fn get_playlist_tracks(&self, playlist_id: &str, offset: u32) -> Result<PlaylistPage> {
        let token = self.token.as_ref().ok_or_else(|| {
            Error::ConfigurationError("Spotify client is not authorized yet".into())
        })?;

        let url = format!("{}/playlists/{playlist_id}/tracks", self.base_url);
        debug!("Fetching playlist page at offset {offset} ...");
        let offset = offset.to_string();
        let response = self
            .http
            .get(&url)
            .query(&[("fields", TRACK_FIELDS), ("offset", offset.as_str())])
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let page: PlaylistPage = serde_json::from_str(&body)?;
        debug!("Fetched {} playlist entries", page.items.len());
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_projection_is_fixed() {
        assert_eq!(TRACK_FIELDS, "items(added_at,track(name,artists(name)))");
    }

    #[test]
    fn test_client_starts_unauthorized() {
        let client = SpotifyClient::new(Credentials::new("id", "secret"));
        assert!(client.token.is_none());
        assert_eq!(client.base_url, SPOTIFY_API_URL);
    }

    #[tokio::test]
    async fn test_fetch_without_authorization_is_an_error() {
        let client =
            SpotifyClient::with_base_url(Credentials::new("id", "secret"), "http://localhost:0");
        let result = client.get_playlist_tracks("4sX65t1XzJjbQcZVNBV74f", 0).await;
        assert!(matches!(result, Err(Error::ConfigurationError(_))));
    }
}
