//! Heuristic extraction engine.
//!
//! The season/episode and year matchers work on the raw string; the lexer
//! supplies release-metadata markers for resolution, release group and
//! episode-title bounds.

mod episode;
mod extract;
mod metadata;
pub(crate) mod normalize;
mod numbers;
mod patterns;
mod quality;
mod title;

use crate::config::ParserConfig;
use crate::lexer::Lexer;
use crate::model::{MediaType, NameParts, ParsedName};
use tracing::debug;

/// Parse a file name with custom configuration.
///
/// Total: every input, including the empty string, yields a record.
pub fn parse_with_config(input: &str, config: &ParserConfig) -> ParsedName {
    let lexer = Lexer::new(input);

    let token = extract::find_season_episode(input);
    let year = extract::find_year(input);

    let (season, episode) = token.as_ref().map_or((None, None), |token| {
        episode::season_and_episode(input, token, config.compact_form)
    });
    let media_type = MediaType::from_season_episode(season, episode);

    let episode_title = match &token {
        Some(token) if media_type == MediaType::Tv && config.episode_titles => {
            metadata::episode_title(&lexer, token)
        }
        _ => None,
    };

    let title = title::resolve(input, media_type, token.as_ref(), year);

    debug!(
        input,
        media_type = %media_type,
        title = %title,
        ?year,
        ?season,
        ?episode,
        "classified file name"
    );

    ParsedName::from_parts(
        input,
        NameParts {
            title,
            year,
            season,
            episode,
            resolution: quality::resolution(&lexer),
            episode_title,
            release_group: metadata::release_group(&lexer),
            container: metadata::container(input),
        },
    )
}
