//! Season and episode derivation.
//!
//! Turns a located season/episode token into numbers. Media type follows
//! from the result: tv only when both numbers are present.

use super::extract::SeasonEpisodeToken;
use super::normalize::normalize;
use super::numbers::exact_number;
use super::patterns::MatcherKind;
use crate::config::CompactForm;
use regex::Regex;

/// Derive `(season, episode)` from a located token.
///
/// Labelled tokens (`Season 1`, `Episode 2`) re-read their numbers from the
/// raw name. Three-character tokens follow `form`. Everything else is split
/// on its delimiters: the first piece is the season, the next the episode.
pub fn season_and_episode(
    raw: &str,
    token: &SeasonEpisodeToken,
    form: CompactForm,
) -> (Option<u16>, Option<u16>) {
    let cleaned = normalize(&token.text);
    let lower = cleaned.to_lowercase();
    let has_season = lower.contains("season ");
    let has_episode = lower.contains("episode ");

    if has_season || has_episode {
        let season = if has_season {
            labelled_number(MatcherKind::AltSeasonSingle.regex(), raw)
        } else {
            None
        };
        let episode = if has_episode {
            labelled_number(MatcherKind::AltEpisodeSingle.regex(), raw)
        } else {
            None
        };
        return (season, episode);
    }

    if cleaned.chars().count() == 3 {
        match form {
            CompactForm::LeadingDigitSeason if cleaned.bytes().all(|b| b.is_ascii_digit()) => {
                return (exact_number(&cleaned[..1]), exact_number(&cleaned[1..]));
            }
            CompactForm::MiddleDigit => {
                let middle = cleaned
                    .chars()
                    .nth(1)
                    .and_then(|c| c.to_digit(10))
                    .and_then(|d| u16::try_from(d).ok());
                return (middle, middle);
            }
            CompactForm::LeadingDigitSeason => {}
        }
    }

    // Whitespace splits too: the normalizer has already turned `.` and `_`
    // delimiters into spaces.
    let mut pieces = cleaned
        .split(|c: char| matches!(c, 'e' | 'E' | 'x' | 'X' | '-' | '.' | '_') || c.is_whitespace())
        .filter(|piece| !piece.is_empty());
    let season = pieces.next().and_then(season_piece);
    let episode = pieces.next().and_then(exact_number);
    (season, episode)
}

/// Parse the `number` group of a labelled pattern against the raw name.
fn labelled_number(pattern: &Regex, raw: &str) -> Option<u16> {
    let caps = pattern.captures(raw)?;
    exact_number(caps.name("number")?.as_str())
}

/// Season pieces longer than two characters lose their first character
/// (`S01` → 1, `2005` → 5). Shorter pieces only drop a leading letter (`S1`).
fn season_piece(piece: &str) -> Option<u16> {
    let mut chars = piece.chars();
    let first = chars.next()?;
    if chars.count() >= 2 || !first.is_ascii_digit() {
        exact_number(&piece[first.len_utf8()..])
    } else {
        exact_number(piece)
    }
}
