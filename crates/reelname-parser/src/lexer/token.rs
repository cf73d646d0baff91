//! Token types for the Logos-based lexer.

use logos::Logos;

/// Token types recognized by the lexer.
///
/// Only release-metadata markers get their own variants; everything else
/// is a word, a number or a delimiter. Markers outrank `Word`/`Number` so
/// that `x264` lexes as a codec rather than a word of the same length.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token<'src> {
    /// Display resolution (e.g. 720p, 1080p, 4K)
    #[regex(r"(?i)((480|720|1080|2160)p|4k)", priority = 10)]
    Resolution(&'src str),

    /// Release source (BluRay, WEB-DL, HDTV, ...)
    #[regex(
        r"(?i)(Blu-?Ray|BDRip|BRRip|WEB-?DL|WEB-?Rip|WEB|HDTV|HDRip|DVDRip|REMUX)",
        priority = 8
    )]
    Source(&'src str),

    /// Streaming service tag
    #[regex(r"(?i)(AMZN|NF|DSNP|HMAX|ATVP|HULU)", priority = 8)]
    StreamingService(&'src str),

    /// Video codec (x264, H.264, HEVC, ...)
    #[regex(r"(?i)(x26[45]|H\.?26[45]|HEVC|AVC|XviD|DivX|AV1)", priority = 8)]
    VideoCodec(&'src str),

    /// Audio codec, optionally with a channel layout (DD5.1, DDP5.1, ...)
    #[regex(
        r"(?i)((DDP?|E?AC3|AAC)([0-9]\.[0-9])?|DTS(-?HD)?|TrueHD|Atmos|FLAC)",
        priority = 8
    )]
    AudioCodec(&'src str),

    /// Quality and release tags
    #[regex(r"(?i)(PROPER|REPACK|HDR(10)?|UHD|10bit)", priority = 8)]
    QualityTag(&'src str),

    /// Dot delimiter
    #[token(".")]
    Dot,

    /// Hyphen delimiter
    #[token("-")]
    Hyphen,

    /// Underscore delimiter
    #[token("_")]
    Underscore,

    /// Opening bracket of any kind
    #[regex(r"[\[({]")]
    BracketOpen,

    /// Closing bracket of any kind
    #[regex(r"[\])}]")]
    BracketClose,

    /// Generic word token (lower priority than specific patterns)
    #[regex(r"[a-zA-Z][a-zA-Z0-9'&]*", priority = 1)]
    Word(&'src str),

    /// Numeric token
    #[regex(r"[0-9]+", priority = 2)]
    Number(&'src str),
}

impl Token<'_> {
    /// Whether this token is a release-metadata marker: the kind of tag
    /// after which free text (an episode title) stops.
    pub fn is_release_marker(&self) -> bool {
        matches!(
            self,
            Token::Resolution(_)
                | Token::Source(_)
                | Token::StreamingService(_)
                | Token::VideoCodec(_)
                | Token::AudioCodec(_)
                | Token::QualityTag(_)
        )
    }
}
