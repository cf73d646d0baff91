//! Human-oriented JSON dump of a parsed name.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use super::OutputFormat;
use crate::model::{MediaType, ParsedName};

/// Renders `{title, episode, season, year, type, basicPlexName}` as JSON
/// indented with four spaces. Absent values are left out.
///
/// Meant for logs and terminals; the shape may change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebugFormat;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DebugView<'a> {
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    episode: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    season: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    year: Option<u16>,
    #[serde(rename = "type")]
    media_type: MediaType,
    basic_plex_name: String,
}

impl OutputFormat for DebugFormat {
    type Output = crate::Result<String>;

    fn format(&self, name: &ParsedName) -> Self::Output {
        let view = DebugView {
            title: name.title(),
            episode: name.episode(),
            season: name.season(),
            year: name.year(),
            media_type: name.media_type(),
            basic_plex_name: name.basic_plex_name(),
        };

        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        view.serialize(&mut ser)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn dumps_tv_with_four_space_indent() {
        let dump = DebugFormat.format(&parse("Show.Name.S01E02")).unwrap();
        let expected = r#"{
    "title": "Show Name",
    "episode": 2,
    "season": 1,
    "type": "tv",
    "basicPlexName": "Show Name - S01E02"
}"#;
        assert_eq!(dump, expected);
    }

    #[test]
    fn omits_absent_fields_for_movies() {
        let dump = DebugFormat
            .format(&parse("Movie.Name.2013.1080p.BluRay.H264.AAC.mp4"))
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&dump).unwrap();
        assert_eq!(value["title"], "Movie Name");
        assert_eq!(value["year"], 2013);
        assert_eq!(value["type"], "movie");
        assert_eq!(value["basicPlexName"], "Movie Name (2013)");
        assert!(value.get("season").is_none());
        assert!(value.get("episode").is_none());
    }

    #[test]
    fn display_matches_dump() {
        let name = parse("Show Name - s05e01");
        assert_eq!(name.to_string(), name.to_debug_json().unwrap());
    }
}
