//! Compiled pattern table for season/episode and year detection.
//!
//! Every season/episode pattern exposes the located token as the `token`
//! capture group, so the extractor can read its exact source offsets.

use regex::Regex;
use std::sync::LazyLock;

macro_rules! pattern {
    ($name:ident, $re:expr) => {
        static $name: LazyLock<Regex> =
            LazyLock::new(|| Regex::new($re).expect(concat!(stringify!($name), " pattern is valid")));
    };
}

pattern!(PRETTY, r"(?i)(?P<token>S?(?:[0-9]{4}|[0-9]{1,2})[-.\s_]?E[0-9]{1,2})");
pattern!(
    TRICKY,
    r"(?i)[^0-9](?P<token>(?:[0-9]{4}|[0-9]{1,2})[x\-.\s_][0-9]{1,2})(?:[^0-9]|$)"
);
pattern!(
    COMBINED,
    r"(?i)(?P<token>S?(?:[0-9]{4}|[0-9]{1,2})[ex\-.\s_][0-9]{1,2})(?:[^0-9]|$)"
);
pattern!(
    ALT_SEASON,
    r"(?i)(?P<token>Season (?:[0-9]{4}|[0-9]{1,2}) Episode [0-9]{1,2})"
);
pattern!(
    ALT_SEASON_SINGLE,
    r"(?i)(?P<token>Season (?P<number>[0-9]{4}|[0-9]{1,2}))"
);
pattern!(
    ALT_EPISODE_SINGLE,
    r"(?i)(?P<token>Episode (?P<number>[0-9]{1,2}))"
);
pattern!(ALT_SEASON_2, r"[\s_.\-\[](?P<token>[0-9]{3})[\s_.\-\]]");
pattern!(YEAR, r"[(.\s_\[](?:19|[2-9][0-9])[0-9]{2}[\]\s_.)]");

/// Season/episode matchers, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatcherKind {
    /// `S01E02`, `s2005e01`, `S01.E03`
    Pretty,
    /// `1x02` preceded by a non-digit
    Tricky,
    /// `S01x02`, `1-02`, `1.02`
    Combined,
    /// `Season 1 Episode 2`
    AltSeason,
    /// `Season 1`
    AltSeasonSingle,
    /// `Episode 2`
    AltEpisodeSingle,
    /// Bare three-digit block such as ` 102 `
    AltSeason2,
}

impl MatcherKind {
    /// All matchers, highest priority first.
    pub const PRIORITY: [MatcherKind; 7] = [
        MatcherKind::Pretty,
        MatcherKind::Tricky,
        MatcherKind::Combined,
        MatcherKind::AltSeason,
        MatcherKind::AltSeasonSingle,
        MatcherKind::AltEpisodeSingle,
        MatcherKind::AltSeason2,
    ];

    /// Stable name used in log output.
    pub fn name(self) -> &'static str {
        match self {
            MatcherKind::Pretty => "pretty",
            MatcherKind::Tricky => "tricky",
            MatcherKind::Combined => "combined",
            MatcherKind::AltSeason => "altSeason",
            MatcherKind::AltSeasonSingle => "altSeasonSingle",
            MatcherKind::AltEpisodeSingle => "altEpisodeSingle",
            MatcherKind::AltSeason2 => "altSeason2",
        }
    }

    /// The compiled pattern for this matcher.
    pub fn regex(self) -> &'static Regex {
        match self {
            MatcherKind::Pretty => &*PRETTY,
            MatcherKind::Tricky => &*TRICKY,
            MatcherKind::Combined => &*COMBINED,
            MatcherKind::AltSeason => &*ALT_SEASON,
            MatcherKind::AltSeasonSingle => &*ALT_SEASON_SINGLE,
            MatcherKind::AltEpisodeSingle => &*ALT_EPISODE_SINGLE,
            MatcherKind::AltSeason2 => &*ALT_SEASON_2,
        }
    }
}

/// Four-digit year bounded by a separator or bracket on each side.
pub fn year() -> &'static Regex {
    &*YEAR
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(kind: MatcherKind, input: &str) -> Option<String> {
        kind.regex()
            .captures(input)
            .and_then(|c| c.name("token"))
            .map(|m| m.as_str().to_string())
    }

    #[test]
    fn every_matcher_has_a_token_group() {
        for kind in MatcherKind::PRIORITY {
            assert!(
                kind.regex().capture_names().any(|n| n == Some("token")),
                "{}",
                kind.name()
            );
        }
    }

    #[test]
    fn pretty_forms() {
        assert_eq!(token(MatcherKind::Pretty, "Show.Name.S01E02").as_deref(), Some("S01E02"));
        assert_eq!(token(MatcherKind::Pretty, "Show - s2005e01").as_deref(), Some("s2005e01"));
        assert_eq!(token(MatcherKind::Pretty, "Show.S01.E03.Name").as_deref(), Some("S01.E03"));
        assert_eq!(token(MatcherKind::Pretty, "Show Name 1x02"), None);
    }

    #[test]
    fn tricky_needs_a_leading_non_digit() {
        assert_eq!(token(MatcherKind::Tricky, "Show_Name.1x02.Source").as_deref(), Some("1x02"));
        assert_eq!(token(MatcherKind::Tricky, "Show Name 1x02").as_deref(), Some("1x02"));
        assert_eq!(token(MatcherKind::Tricky, "1x02"), None);
        assert_eq!(token(MatcherKind::Tricky, "Name.1x023"), None);
    }

    #[test]
    fn combined_allows_season_prefix() {
        assert_eq!(token(MatcherKind::Combined, "S01x02").as_deref(), Some("S01x02"));
        assert_eq!(token(MatcherKind::Combined, "1x02").as_deref(), Some("1x02"));
    }

    #[test]
    fn labelled_forms() {
        assert_eq!(
            token(MatcherKind::AltSeason, "Show Season 1 Episode 2").as_deref(),
            Some("Season 1 Episode 2")
        );
        let caps = MatcherKind::AltSeasonSingle.regex().captures("Show season 3").unwrap();
        assert_eq!(&caps["number"], "3");
        let caps = MatcherKind::AltEpisodeSingle.regex().captures("Show Episode 12").unwrap();
        assert_eq!(&caps["number"], "12");
    }

    #[test]
    fn compact_block_needs_boundaries() {
        assert_eq!(token(MatcherKind::AltSeason2, "Show Name 102 HDTV").as_deref(), Some("102"));
        assert_eq!(token(MatcherKind::AltSeason2, "Show.[102].HDTV").as_deref(), Some("102"));
        assert_eq!(token(MatcherKind::AltSeason2, "Show Name 1024 HDTV"), None);
        assert_eq!(token(MatcherKind::AltSeason2, "Show.x264"), None);
    }

    #[test]
    fn year_bounds() {
        assert!(year().is_match("Movie.Name.2013.1080p"));
        assert!(year().is_match("Movie Name (1999)"));
        assert!(year().is_match("Movie [2021] x264"));
        assert!(!year().is_match("Movie.Name.1080p"));
        assert!(!year().is_match("Movie.Name.1850."));
        assert!(!year().is_match("Movie.2013-GROUP"));
    }
}
