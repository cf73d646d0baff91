//! Plex-style display names.

use super::OutputFormat;
use crate::model::{MediaType, ParsedName};

/// Formats names according to Plex naming conventions:
/// - Movies: "Movie Title (Year)"
/// - TV Shows: "Show Title (Year) - S##E##"
///
/// The year segment is left out entirely when no year was found.
///
/// # Example
///
/// ```
/// use reelname_parser::{parse, output::{OutputFormat, PlexFormat}};
///
/// let name = parse("Show.Name-0.2010.S01E02.Source.Quality.Etc-Group");
/// assert_eq!(PlexFormat.format(&name), "Show Name-0 (2010) - S01E02");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlexFormat;

impl OutputFormat for PlexFormat {
    type Output = String;

    fn format(&self, name: &ParsedName) -> Self::Output {
        let year = name
            .year()
            .map(|y| format!(" ({y})"))
            .unwrap_or_default();

        match name.media_type() {
            MediaType::Tv => format!(
                "{}{} - {}",
                name.title(),
                year,
                name.formatted_season_episode()
            ),
            MediaType::Movie => format!("{}{}", name.title(), year),
        }
    }
}
