//! Integer parsing for matched fragments.
//!
//! Fragments that fail to parse become `None`; no sentinel values.

use winnow::ascii::digit1;
use winnow::prelude::*;

fn number(input: &mut &str) -> ModalResult<u16> {
    digit1.try_map(str::parse::<u16>).parse_next(input)
}

/// Parse the digits at the start of `text`, ignoring whatever follows.
///
/// `"2013)"` gives 2013; `"x2013"` gives `None`.
pub fn leading_number(text: &str) -> Option<u16> {
    let mut input = text;
    number(&mut input).ok()
}

/// Parse `text` as a whole number, allowing surrounding whitespace.
pub fn exact_number(text: &str) -> Option<u16> {
    number.parse(text.trim()).ok()
}
