//! Resolution parser.

use crate::lexer::{Lexer, Token};
use crate::model::Resolution;

/// First resolution tag that stands alone between separators.
pub fn resolution(lexer: &Lexer) -> Option<Resolution> {
    lexer.markers().find_map(|(token, _)| match token {
        Token::Resolution(text) => text.parse().ok(),
        _ => None,
    })
}
