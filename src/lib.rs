//! Ptracker - Record new additions to a Spotify playlist
//!
//! This library fetches one page of a Spotify playlist and appends the
//! entries added since the previous run to a local text log.

/// Client modules for the Spotify API and the local playlist log
pub mod clients;
