use log::{debug, info};
use ptracker::clients::errors::Result;
use ptracker::clients::playlist_log::RecordOutcome;
use ptracker::clients::{PlaylistLog, SpotifyClient};

// Playlist followed by this tool and the fetch offset used for every run.
// The API caps one page at 100 entries; anything past offset+100 is not seen.
const DEFAULT_PLAYLIST_ID: &str = "4sX65t1XzJjbQcZVNBV74f";
const DEFAULT_OFFSET: u32 = 240;

// Configuration for the Tracker struct
pub struct Config {
    pub spotify: SpotifyClient,
    pub log: PlaylistLog,
    pub playlist_id: String,
    pub offset: u32,
}

pub struct ConfigBuilder {
    spotify: Option<SpotifyClient>,
    log: Option<PlaylistLog>,
    playlist_id: Option<String>,
    offset: Option<u32>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            spotify: None,
            log: None,
            playlist_id: None,
            offset: None,
        }
    }

    pub fn build(self) -> Result<Config> {
        let spotify = match self.spotify {
            Some(s) => s,
            None => SpotifyClient::try_default()?,
        };
        let log = self.log.unwrap_or_default();
        Ok(Config {
            spotify,
            log,
            playlist_id: self
                .playlist_id
                .unwrap_or_else(|| DEFAULT_PLAYLIST_ID.to_string()),
            offset: self.offset.unwrap_or(DEFAULT_OFFSET),
        })
    }
}

// The main Tracker struct that performs one fetch-and-record run
pub struct Tracker {
    config: Config,
}

impl Tracker {
    pub fn new(config: Config) -> Self {
        Tracker { config }
    }

    pub async fn track(&self) -> Result<()> {
        info!("Starting tracking run ...");
        debug!("Fetching playlist page from Spotify ...");
        let page = self
            .config
            .spotify
            .get_playlist_tracks(&self.config.playlist_id, self.config.offset)
            .await?;
        debug!("Fetched {} entries from Spotify", page.items.len());

        if page.items.is_empty() {
            info!("Playlist page is empty. Nothing to record.");
            return Ok(());
        }

        match self.config.log.record(&page).await? {
            RecordOutcome::Created { entries } => {
                info!(
                    "Created {:?} with {entries} tracks",
                    self.config.log.path()
                );
            }
            RecordOutcome::Rewritten { reported, kept } => {
                debug!("Kept {kept} entries newer than the previous marker");
                info!("{reported} tracks were added");
            }
            RecordOutcome::UpToDate => {
                info!("No new tracks to add");
            }
        }
        Ok(())
    }
}
