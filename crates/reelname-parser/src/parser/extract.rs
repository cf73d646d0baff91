//! Token extraction: the season/episode token and the year.

use super::normalize::normalize;
use super::numbers::leading_number;
use super::patterns::{self, MatcherKind};
use crate::lexer::Span;
use tracing::{debug, trace};

/// Compact blocks that are almost always a codec or a resolution.
const COMPACT_COLLISIONS: [&str; 2] = ["264", "720"];

/// The substring identified as encoding season and episode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonEpisodeToken {
    /// Which matcher located it.
    pub kind: MatcherKind,
    /// Token text; normalized for every kind except tricky and combined.
    pub text: String,
    /// Byte offsets of the token in the raw name.
    pub span: Span,
}

/// Locate the season/episode token.
///
/// Matchers run in priority order and the first one that matches decides;
/// results are never combined. A compact block that collides with a codec
/// or resolution ends the search with no token.
pub fn find_season_episode(raw: &str) -> Option<SeasonEpisodeToken> {
    for kind in MatcherKind::PRIORITY {
        let Some(m) = kind.regex().captures(raw).and_then(|c| c.name("token")) else {
            continue;
        };

        let text = match kind {
            MatcherKind::Tricky | MatcherKind::Combined => m.as_str().to_string(),
            MatcherKind::AltSeason2 => {
                let block = normalize(m.as_str());
                if COMPACT_COLLISIONS.contains(&block.as_str()) {
                    debug!(block = %block, "compact block rejected as codec or resolution");
                    return None;
                }
                block
            }
            _ => normalize(m.as_str()),
        };

        trace!(matcher = kind.name(), token = %text, "season/episode token located");
        return Some(SeasonEpisodeToken {
            kind,
            text,
            span: Span::new(m.start(), m.end()),
        });
    }
    None
}

/// Locate the release year.
pub fn find_year(raw: &str) -> Option<u16> {
    let m = patterns::year().find(raw)?;
    leading_number(&normalize(m.as_str()))
}
