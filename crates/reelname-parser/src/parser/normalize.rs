//! Text normalization for titles and matched fragments.

use phf::phf_set;
use regex::Regex;
use std::sync::LazyLock;

/// One run of a single separator character at the start or end of a line.
static BOUNDARY_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^(?: +|-+|\.+|\(+|\[+|\]+|\{+|\}+|\)+|_+)|(?: +|-+|\.+|\(+|\[+|\]+|\{+|\}+|\)+|_+)$",
    )
    .expect("boundary run pattern is valid")
});

/// Tokens whose trailing period survives normalization.
static HONORIFICS: phf::Set<&'static str> = phf_set! {
    "dr",
    "mr",
    "mrs",
    "ms",
    "phd",
};

/// Turn a raw fragment of a file name into readable text.
///
/// 1. One run of a separator character is stripped from the start and the
///    end of each line.
/// 2. Periods become spaces, except directly after an honorific, where the
///    period is kept and followed by exactly one space.
/// 3. Underscores become spaces.
/// 4. Surrounding whitespace is trimmed.
///
/// The honorific check looks only at the letters right before the period,
/// so `HDR.` keeps its period too.
///
/// ```
/// use reelname_parser::normalize;
///
/// assert_eq!(normalize("Show_Name."), "Show Name");
/// assert_eq!(normalize("Mr.and.Mrs.Smith"), "Mr. and Mrs. Smith");
/// ```
pub fn normalize(input: &str) -> String {
    let stripped = BOUNDARY_RUN.replace_all(input, "");

    let mut out = String::with_capacity(stripped.len());
    let mut chars = stripped.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '.' if ends_with_honorific(&out) => {
                out.push_str(". ");
                while chars.next_if(|c| *c == ' ' || *c == '_').is_some() {}
            }
            '.' | '_' => out.push(' '),
            _ => out.push(ch),
        }
    }

    out.trim().to_string()
}

fn ends_with_honorific(text: &str) -> bool {
    let bytes = text.as_bytes();
    HONORIFICS.iter().any(|h| {
        bytes.len() >= h.len() && bytes[bytes.len() - h.len()..].eq_ignore_ascii_case(h.as_bytes())
    })
}
