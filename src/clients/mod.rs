/// Client-credentials token exchange
pub mod auth;
/// Data entities for playlist pages and tracks
pub mod entities;
/// Error types and result aliases
pub mod errors;
/// Local playlist log with incremental updates
pub mod playlist_log;
/// Spotify API client
pub mod spotify;

pub use playlist_log::PlaylistLog;
pub use spotify::SpotifyClient;
