use serde::Deserialize;

/// An artist as returned by the playlist-tracks endpoint.
#[derive(Deserialize, Debug, Clone)]
pub struct Artist {
    pub name: String,
}

/// A track with its contributing artists.
#[derive(Deserialize, Debug, Clone)]
pub struct Track {
    pub name: String,
    pub artists: Vec<Artist>,
}

/// One playlist entry: a track plus the moment it was added.
///
/// `added_at` is an ISO-8601 UTC timestamp kept as a string. The format is
/// zero-padded and UTC-normalized, so plain string ordering matches
/// chronological ordering; the whole crate relies on that.
#[derive(Deserialize, Debug, Clone)]
pub struct PlaylistItem {
    pub added_at: String,
    pub track: Track,
}

/// One page of playlist entries, capped at 100 by the Spotify API.
#[derive(Deserialize, Debug, Clone)]
pub struct PlaylistPage {
    pub items: Vec<PlaylistItem>,
}

impl PlaylistItem {
    /// Render this entry as one log line: artist names joined with `", "`,
    /// an em-dash, then the track name.
    pub fn render_line(&self) -> String {
        let artists = self
            .track
            .artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        format!("{artists} — {}", self.track.name)
    }
}

impl PlaylistPage {
    /// The entry most recently listed in this page, if any.
    pub fn last(&self) -> Option<&PlaylistItem> {
        self.items.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(added_at: &str, name: &str, artists: &[&str]) -> PlaylistItem {
        PlaylistItem {
            added_at: added_at.to_string(),
            track: Track {
                name: name.to_string(),
                artists: artists
                    .iter()
                    .map(|a| Artist {
                        name: (*a).to_string(),
                    })
                    .collect(),
            },
        }
    }

    #[test]
    fn test_render_line_single_artist() {
        let entry = item("2023-01-01T00:00:00Z", "Title", &["A"]);
        assert_eq!(entry.render_line(), "A — Title");
    }

    #[test]
    fn test_render_line_multiple_artists() {
        let entry = item("2023-01-01T00:00:00Z", "Title", &["A", "B"]);
        assert_eq!(entry.render_line(), "A, B — Title");
    }

    #[test]
    fn test_page_deserializes_from_api_shape() {
        let body = r#"{
            "items": [
                {
                    "added_at": "2023-01-01T00:00:00Z",
                    "track": {
                        "name": "X",
                        "artists": [{ "name": "Artist1" }]
                    }
                }
            ]
        }"#;
        let page: PlaylistPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].added_at, "2023-01-01T00:00:00Z");
        assert_eq!(page.items[0].track.name, "X");
        assert_eq!(page.items[0].track.artists[0].name, "Artist1");
        assert_eq!(page.last().unwrap().render_line(), "Artist1 — X");
    }

    #[test]
    fn test_added_at_string_ordering_is_chronological() {
        // Zero-padded UTC ISO-8601 sorts lexicographically.
        assert!("2023-01-01T00:00:00Z" < "2023-02-01T00:00:00Z");
        assert!("2023-09-30T23:59:59Z" < "2023-10-01T00:00:00Z");
    }
}
