//! The parsed record for a single file name.

use super::{MediaType, Resolution};
use crate::output::{self, DebugFormat, OutputFormat, PlexFormat};

/// Everything inferred from one raw file name.
///
/// A `ParsedName` is built once from its input and never changes. All
/// derived fields are computed during construction, so the getters are
/// cheap and always return the same answer.
///
/// # Example
/// ```
/// use reelname_parser::{MediaType, ParsedName};
///
/// let name = ParsedName::new("Show.Name.S01E02");
/// assert_eq!(name.title(), "Show Name");
/// assert_eq!(name.season(), Some(1));
/// assert_eq!(name.episode(), Some(2));
/// assert_eq!(name.media_type(), MediaType::Tv);
/// assert_eq!(name.basic_plex_name(), "Show Name - S01E02");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    raw: String,
    title: String,
    media_type: MediaType,
    year: Option<u16>,
    season: Option<u16>,
    episode: Option<u16>,
    resolution: Option<Resolution>,
    episode_title: Option<String>,
    release_group: Option<String>,
    container: Option<String>,
}

/// Derived fields handed over by the parser.
#[derive(Debug, Default)]
pub(crate) struct NameParts {
    pub title: String,
    pub year: Option<u16>,
    pub season: Option<u16>,
    pub episode: Option<u16>,
    pub resolution: Option<Resolution>,
    pub episode_title: Option<String>,
    pub release_group: Option<String>,
    pub container: Option<String>,
}

impl ParsedName {
    /// Parse `raw` with the default configuration.
    ///
    /// Never fails: a name with no recognisable structure becomes a movie
    /// whose title is the normalized input.
    pub fn new(raw: impl Into<String>) -> Self {
        crate::parse(&raw.into())
    }

    pub(crate) fn from_parts(raw: &str, parts: NameParts) -> Self {
        Self {
            raw: raw.to_string(),
            media_type: MediaType::from_season_episode(parts.season, parts.episode),
            title: parts.title,
            year: parts.year,
            season: parts.season,
            episode: parts.episode,
            resolution: parts.resolution,
            episode_title: parts.episode_title,
            release_group: parts.release_group,
            container: parts.container,
        }
    }

    /// The input exactly as given.
    pub fn raw_name(&self) -> &str {
        &self.raw
    }

    /// Human-readable title; never absent, possibly empty.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Release year, if a bounded four-digit year was found.
    pub fn year(&self) -> Option<u16> {
        self.year
    }

    /// Season number.
    pub fn season(&self) -> Option<u16> {
        self.season
    }

    /// Episode number.
    pub fn episode(&self) -> Option<u16> {
        self.episode
    }

    /// Movie or TV.
    pub fn media_type(&self) -> MediaType {
        self.media_type
    }

    pub fn is_tv(&self) -> bool {
        self.media_type == MediaType::Tv
    }

    pub fn is_movie(&self) -> bool {
        self.media_type == MediaType::Movie
    }

    /// First display resolution named in the input.
    pub fn resolution(&self) -> Option<Resolution> {
        self.resolution
    }

    /// Text between the season/episode token and the first release marker.
    /// Only ever set for TV names.
    pub fn episode_title(&self) -> Option<&str> {
        self.episode_title.as_deref()
    }

    /// Trailing `-Group` suffix, if any.
    pub fn release_group(&self) -> Option<&str> {
        self.release_group.as_deref()
    }

    /// Lower-cased video file extension, if any.
    pub fn container(&self) -> Option<&str> {
        self.container.as_deref()
    }

    /// Season zero-padded to two digits, e.g. `"01"`.
    pub fn formatted_season(&self) -> Option<String> {
        self.season.map(|s| output::pad(s, 2))
    }

    /// Episode zero-padded to two digits, e.g. `"05"`.
    pub fn formatted_episode(&self) -> Option<String> {
        self.episode.map(|e| output::pad(e, 2))
    }

    /// `S##E##`, `S##`, `E##` or `""` depending on which halves exist.
    pub fn formatted_season_episode(&self) -> String {
        output::format_season_episode(self.season, self.episode)
    }

    /// Canonical display name, e.g. `"Show Name (2010) - S01E02"`.
    pub fn basic_plex_name(&self) -> String {
        PlexFormat.format(self)
    }

    /// Pretty-printed JSON dump for humans; not a stable contract.
    pub fn to_debug_json(&self) -> crate::Result<String> {
        DebugFormat.format(self)
    }
}

impl std::fmt::Display for ParsedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let dump = self.to_debug_json().map_err(|_| std::fmt::Error)?;
        f.write_str(&dump)
    }
}

impl From<&str> for ParsedName {
    fn from(raw: &str) -> Self {
        crate::parse(raw)
    }
}

impl From<String> for ParsedName {
    fn from(raw: String) -> Self {
        crate::parse(&raw)
    }
}
