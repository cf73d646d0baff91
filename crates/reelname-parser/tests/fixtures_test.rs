//! Fixture tests for reelname-parser.
//!
//! Each case in `tests/fixtures/names.json` names the fields it expects and
//! the fields that must be absent. Fields not mentioned are not checked.

use reelname_parser::config::{CompactForm, ParserConfig};
use reelname_parser::{parse, MediaType, ParsedName, Parser};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A single test case from the fixture file.
#[derive(Debug, Deserialize)]
struct TestCase {
    input: String,
    #[serde(default)]
    config: Option<FixtureConfig>,
    expected: Expected,
    #[serde(default)]
    absent: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct FixtureConfig {
    compact_form: Option<CompactForm>,
    episode_titles: Option<bool>,
}

/// Expected values for a test case.
#[derive(Debug, Deserialize)]
struct Expected {
    title: Option<String>,
    #[serde(rename = "type")]
    media_type: Option<MediaType>,
    year: Option<u16>,
    season: Option<u16>,
    episode: Option<u16>,
    resolution: Option<String>,
    episode_title: Option<String>,
    release_group: Option<String>,
    container: Option<String>,
    basic_plex_name: Option<String>,
    formatted_season: Option<String>,
    formatted_episode: Option<String>,
    formatted_season_episode: Option<String>,
}

fn load_fixtures() -> Vec<TestCase> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/names.json");
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
    serde_json::from_str(&content).expect("fixture file is valid JSON")
}

fn parser_for(case: &TestCase) -> Parser {
    let mut builder = ParserConfig::builder();
    if let Some(config) = &case.config {
        if let Some(form) = config.compact_form {
            builder = builder.compact_form(form);
        }
        if let Some(enabled) = config.episode_titles {
            builder = builder.episode_titles(enabled);
        }
    }
    Parser::new(builder.build())
}

fn check<T: PartialEq + std::fmt::Debug>(
    errors: &mut Vec<String>,
    field: &str,
    expected: Option<T>,
    actual: T,
) {
    if let Some(expected) = expected {
        if expected != actual {
            errors.push(format!("{field}: expected {expected:?}, got {actual:?}"));
        }
    }
}

fn is_present(name: &ParsedName, field: &str) -> bool {
    match field {
        "year" => name.year().is_some(),
        "season" => name.season().is_some(),
        "episode" => name.episode().is_some(),
        "resolution" => name.resolution().is_some(),
        "episode_title" => name.episode_title().is_some(),
        "release_group" => name.release_group().is_some(),
        "container" => name.container().is_some(),
        other => panic!("unknown field in fixture: {other}"),
    }
}

fn verify(case: &TestCase, name: &ParsedName) -> Vec<String> {
    let mut errors = Vec::new();
    let e = &case.expected;

    check(&mut errors, "title", e.title.as_deref(), name.title());
    check(&mut errors, "type", e.media_type, name.media_type());
    check(&mut errors, "year", e.year.map(Some), name.year());
    check(&mut errors, "season", e.season.map(Some), name.season());
    check(&mut errors, "episode", e.episode.map(Some), name.episode());
    check(
        &mut errors,
        "resolution",
        e.resolution.as_deref().map(Some),
        name.resolution().map(|r| r.as_str()),
    );
    check(&mut errors, "episode_title", e.episode_title.as_deref().map(Some), name.episode_title());
    check(&mut errors, "release_group", e.release_group.as_deref().map(Some), name.release_group());
    check(&mut errors, "container", e.container.as_deref().map(Some), name.container());
    check(&mut errors, "basic_plex_name", e.basic_plex_name.clone(), name.basic_plex_name());
    check(&mut errors, "formatted_season", e.formatted_season.clone().map(Some), name.formatted_season());
    check(&mut errors, "formatted_episode", e.formatted_episode.clone().map(Some), name.formatted_episode());
    check(
        &mut errors,
        "formatted_season_episode",
        e.formatted_season_episode.clone(),
        name.formatted_season_episode(),
    );

    for field in &case.absent {
        if is_present(name, field) {
            errors.push(format!("{field}: expected absent"));
        }
    }
    errors
}

#[test]
fn test_all_fixtures() {
    let fixtures = load_fixtures();
    assert!(!fixtures.is_empty());

    let mut failures = Vec::new();
    for case in &fixtures {
        let name = parser_for(case).parse(&case.input);
        let errors = verify(case, &name);
        if !errors.is_empty() {
            failures.push(format!("{:?}\n    {}", case.input, errors.join("\n    ")));
        }
    }

    assert!(
        failures.is_empty(),
        "{} of {} fixtures failed:\n{}",
        failures.len(),
        fixtures.len(),
        failures.join("\n")
    );
}

#[test]
fn test_tv_iff_both_numbers() {
    for case in load_fixtures() {
        let name = parser_for(&case).parse(&case.input);
        let both = name.season().is_some() && name.episode().is_some();
        assert_eq!(name.is_tv(), both, "{:?}", case.input);
    }
}

#[test]
fn test_formatted_season_episode_shape() {
    for case in load_fixtures() {
        let name = parser_for(&case).parse(&case.input);
        let formatted = name.formatted_season_episode();
        let expected = match (name.formatted_season(), name.formatted_episode()) {
            (Some(s), Some(e)) => format!("S{s}E{e}"),
            (Some(s), None) => format!("S{s}"),
            (None, Some(e)) => format!("E{e}"),
            (None, None) => String::new(),
        };
        assert_eq!(formatted, expected, "{:?}", case.input);
    }
}

#[test]
fn test_canonical_names_reparse_identically() {
    for case in load_fixtures() {
        let parser = parser_for(&case);
        let name = parser.parse(&case.input);
        if !name.is_tv() {
            continue;
        }

        let canonical = name.basic_plex_name();
        let reparsed = parser.parse(&canonical);
        assert_eq!(reparsed.title(), name.title(), "{canonical:?}");
        assert_eq!(reparsed.season(), name.season(), "{canonical:?}");
        assert_eq!(reparsed.episode(), name.episode(), "{canonical:?}");
    }
}

#[test]
fn test_codec_and_resolution_alone_stay_movies() {
    for input in [
        "Movie.Name.x264",
        "Movie.Name.720p",
        "Movie Name x264 720p",
        "Movie.Name.H.264.mkv",
        "Movie Name [720] Group",
    ] {
        let name = parse(input);
        assert_eq!(name.media_type(), MediaType::Movie, "{input:?}");
        assert_eq!(name.season(), None, "{input:?}");
    }
}

#[test]
fn test_honorifics() {
    assert_eq!(reelname_parser::normalize("Mr.Bean's.Holiday"), "Mr. Bean's Holiday");
    assert_eq!(reelname_parser::normalize("Mr.and.Mrs.Smith"), "Mr. and Mrs. Smith");
}

#[test]
fn test_debug_dump() {
    let dump = parse("Show Name (2010) - S01E02").to_debug_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&dump).unwrap();
    assert_eq!(value["title"], "Show Name");
    assert_eq!(value["season"], 1);
    assert_eq!(value["episode"], 2);
    assert_eq!(value["year"], 2010);
    assert_eq!(value["type"], "tv");
    assert_eq!(value["basicPlexName"], "Show Name (2010) - S01E02");
    assert!(dump.contains("\n    \"title\""));
}
