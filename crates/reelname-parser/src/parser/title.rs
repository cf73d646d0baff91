//! Title parser.
//!
//! Carves the title out of the raw name using the boundaries found by the
//! extractor, then cleans it with the normalizer.

use super::extract::SeasonEpisodeToken;
use super::normalize::normalize;
use crate::model::MediaType;
use regex::Regex;
use std::sync::LazyLock;

static DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+\.[0-9]+").expect("decimal pattern is valid"));

static SPACED_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+ [0-9]+").expect("spaced digits pattern is valid"));

/// Resolve the title for a parsed name.
///
/// Movies are cut before the year; tv names before the season/episode token
/// and then before the year. Without a usable boundary the whole input is
/// normalized instead.
pub fn resolve(
    raw: &str,
    media_type: MediaType,
    token: Option<&SeasonEpisodeToken>,
    year: Option<u16>,
) -> String {
    let candidate = match media_type {
        MediaType::Movie => year
            .and_then(|y| raw.find(&y.to_string()))
            .map(|idx| before_previous_char(raw, idx)),
        MediaType::Tv => token.filter(|t| t.span.start > 0).map(|t| {
            let head = before_previous_char(raw, t.span.start);
            match year.and_then(|y| head.find(&y.to_string())) {
                Some(idx) => before_previous_char(head, idx),
                None => head,
            }
        }),
    };

    let unclean = match candidate {
        Some(text) if !text.is_empty() => text,
        _ => raw,
    };
    restore_decimals(unclean, &normalize(unclean))
}

/// `text` up to, but not including, the character before `idx`.
fn before_previous_char(text: &str, idx: usize) -> &str {
    match text[..idx].char_indices().next_back() {
        Some((prev, _)) => &text[..prev],
        None => "",
    }
}

/// Put back a decimal number that normalization split into two numbers.
///
/// Only the first decimal in `unclean` is considered, and only when the
/// first pair of space-separated numbers in `clean` spells the same digits.
/// Every occurrence of that pair is restored.
fn restore_decimals(unclean: &str, clean: &str) -> String {
    let (Some(decimal), Some(spaced)) = (DECIMAL.find(unclean), SPACED_DIGITS.find(clean)) else {
        return clean.to_string();
    };
    if spaced.as_str() != decimal.as_str().replacen('.', " ", 1) {
        return clean.to_string();
    }
    clean.replace(spaced.as_str(), decimal.as_str())
}
