//! Output formatting for parsed names.
//!
//! # Available Formats
//!
//! - [`PlexFormat`]: the canonical display name, `"Title (Year) - S##E##"`
//! - [`DebugFormat`]: a pretty-printed JSON dump for inspection
//!
//! # Example
//!
//! ```
//! use reelname_parser::{parse, output::{OutputFormat, PlexFormat}};
//!
//! let name = parse("Movie.Name.2013.1080p.BluRay.H264.AAC.mp4");
//! assert_eq!(PlexFormat.format(&name), "Movie Name (2013)");
//! ```

mod debug;
mod plex;

pub use debug::DebugFormat;
pub use plex::PlexFormat;

use crate::model::ParsedName;

/// Trait for rendering a [`ParsedName`] for a particular consumer.
pub trait OutputFormat {
    /// The output type produced by this formatter.
    type Output;

    /// Render the parsed name.
    fn format(&self, name: &ParsedName) -> Self::Output;
}

/// Left-pad `number` with zeros to at least `width` digits.
///
/// Never truncates, so a four-digit season stays four digits.
///
/// ```
/// use reelname_parser::pad;
///
/// assert_eq!(pad(1, 2), "01");
/// assert_eq!(pad(12, 2), "12");
/// assert_eq!(pad(2005, 2), "2005");
/// ```
pub fn pad(number: u16, width: usize) -> String {
    format!("{number:0width$}")
}

/// `"S" + pad(season)` followed by `"E" + pad(episode)`, each half omitted
/// when its value is absent.
pub fn format_season_episode(season: Option<u16>, episode: Option<u16>) -> String {
    let mut out = String::new();
    if let Some(season) = season {
        out.push('S');
        out.push_str(&pad(season, 2));
    }
    if let Some(episode) = episode {
        out.push('E');
        out.push_str(&pad(episode, 2));
    }
    out
}
