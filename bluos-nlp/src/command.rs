//! Data types for parsed music commands

use std::fmt;

use serde::{Deserialize, Serialize};

/// Playback control actions understood by the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackAction {
    Play,
    Pause,
    Resume,
    Stop,
    Skip,
    Back,
}

impl PlaybackAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaybackAction::Play => "play",
            PlaybackAction::Pause => "pause",
            PlaybackAction::Resume => "resume",
            PlaybackAction::Stop => "stop",
            PlaybackAction::Skip => "skip",
            PlaybackAction::Back => "back",
        }
    }
}

impl fmt::Display for PlaybackAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Categories a play request's content query can be classified as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Artist,
    Track,
    Album,
    Playlist,
    Podcast,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Artist => "artist",
            ContentType::Track => "track",
            ContentType::Album => "album",
            ContentType::Playlist => "playlist",
            ContentType::Podcast => "podcast",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed music command
///
/// A command is either fully formed or parsing fails entirely; the parser
/// never produces a partially populated command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub action: PlaybackAction,
    /// What to play, with command scaffolding stripped. Only set for play.
    pub content_query: Option<String>,
    pub content_type: Option<ContentType>,
    /// Zone id or group name, resolved later by the registry.
    pub zone_target: Option<String>,
    /// Requested volume, already clamped to 0-100 by the parser.
    pub volume: Option<u8>,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Command(action={}", self.action)?;
        if let Some(query) = &self.content_query {
            write!(f, ", query='{}'", query)?;
        }
        if let Some(content_type) = &self.content_type {
            write!(f, ", type={}", content_type)?;
        }
        if let Some(zone) = &self.zone_target {
            write!(f, ", zone={}", zone)?;
        }
        if let Some(volume) = self.volume {
            write!(f, ", volume={}%", volume)?;
        }
        write!(f, ")")
    }
}
