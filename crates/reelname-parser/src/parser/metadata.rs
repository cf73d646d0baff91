//! Metadata parser.
//!
//! Extracts the release group, the container and the episode title. The
//! latter two also mark where free text stops.

use super::extract::SeasonEpisodeToken;
use super::normalize::normalize;
use crate::lexer::Lexer;
use crate::model::Resolution;
use phf::phf_set;
use regex::Regex;
use std::sync::LazyLock;

/// Known video file extensions.
static CONTAINERS: phf::Set<&'static str> = phf_set! {
    "mkv", "mp4", "avi", "m4v", "mov", "wmv", "ts", "webm", "mpg", "mpeg", "flv",
};

/// Trailing `-Group`, optionally followed by a container extension.
static RELEASE_GROUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"-(?P<group>[A-Za-z0-9]+)(?:\.(?i:mkv|mp4|avi|m4v|mov|wmv|ts|webm|mpg|mpeg|flv))?$")
        .expect("release group pattern is valid")
});

/// The trailing release group and the byte offset of its hyphen.
fn group_match<'a>(lexer: &Lexer<'a>) -> Option<(usize, &'a str)> {
    let input = lexer.input();
    let group = RELEASE_GROUP.captures(input)?.name("group")?;
    let hyphen = group.start() - 1;

    // WEB-DL, DTS-HD and the like end in a hyphenated marker, not a group.
    if lexer.markers().any(|(_, span)| span.contains(hyphen)) {
        return None;
    }
    if group.as_str().parse::<Resolution>().is_ok() {
        return None;
    }
    Some((hyphen, group.as_str()))
}

/// Byte offset of the dot before a known container extension.
fn container_dot(raw: &str) -> Option<usize> {
    let (stem, ext) = raw.rsplit_once('.')?;
    CONTAINERS
        .contains(ext.to_ascii_lowercase().as_str())
        .then_some(stem.len())
}

/// Trailing `-Group` suffix.
pub fn release_group(lexer: &Lexer) -> Option<String> {
    group_match(lexer).map(|(_, group)| group.to_string())
}

/// Lower-cased container extension.
pub fn container(raw: &str) -> Option<String> {
    container_dot(raw).map(|dot| raw[dot + 1..].to_ascii_lowercase())
}

/// Text between the season/episode token and the first release marker.
///
/// A title is only produced when something bounds it on the right: a
/// metadata marker, the release-group hyphen or the container extension.
pub fn episode_title(lexer: &Lexer, token: &SeasonEpisodeToken) -> Option<String> {
    let input = lexer.input();
    let after = token.span.end;

    let marker = lexer
        .markers()
        .map(|(_, span)| span.start)
        .find(|&start| start >= after);
    let group = group_match(lexer).map(|(hyphen, _)| hyphen);
    let dot = container_dot(input);

    let end = [marker, group, dot]
        .into_iter()
        .flatten()
        .filter(|&pos| pos >= after)
        .min()?;

    let title = normalize(&input[after..end]);
    (!title.is_empty()).then_some(title)
}
