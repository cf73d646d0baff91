//! # reelname-parser
//!
//! Infers title, media type, season, episode, year and resolution from a
//! free-form media file name, without any external lookup.
//!
//! Parsing is total: every input produces a [`ParsedName`]. A name with no
//! recognisable structure becomes a movie whose title is the normalized
//! input.
//!
//! ## Quick Start
//!
//! ```
//! use reelname_parser::{parse, MediaType, Resolution};
//!
//! let name = parse("Movie.Name.2013.1080p.BluRay.H264.AAC.mp4");
//!
//! assert_eq!(name.title(), "Movie Name");
//! assert_eq!(name.year(), Some(2013));
//! assert_eq!(name.resolution(), Some(Resolution::_1080p));
//! assert_eq!(name.media_type(), MediaType::Movie);
//! assert_eq!(name.basic_plex_name(), "Movie Name (2013)");
//! ```
//!
//! ## Configurable Parsing
//!
//! ```
//! use reelname_parser::Parser;
//! use reelname_parser::config::{CompactForm, ParserConfig};
//!
//! let config = ParserConfig::builder()
//!     .compact_form(CompactForm::MiddleDigit)
//!     .build();
//!
//! let parser = Parser::new(config);
//! let name = parser.parse("Show Name 102 HDTV");
//! assert_eq!(name.season(), Some(0));
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod output;

pub mod lexer;
mod parser;

pub use config::{CompactForm, ParserConfig};
pub use error::{Error, Result};
pub use model::{MediaType, ParsedName, Resolution};
pub use output::pad;
pub use parser::normalize::normalize;

/// Parse a file name using default settings.
///
/// # Examples
///
/// ```
/// use reelname_parser::parse;
///
/// let name = parse("Show.Name.S01E02");
/// assert_eq!(name.title(), "Show Name");
/// assert_eq!(name.formatted_season_episode(), "S01E02");
/// assert!(name.is_tv());
/// ```
pub fn parse(input: &str) -> ParsedName {
    Parser::default().parse(input)
}

/// A configurable file name parser.
///
/// ```
/// use reelname_parser::Parser;
/// use reelname_parser::config::ParserConfig;
///
/// let parser = Parser::new(ParserConfig::builder().episode_titles(false).build());
/// let name = parser.parse("Show.S01E02.Pilot.720p.HDTV");
/// assert_eq!(name.episode_title(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with the given configuration.
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a file name into a [`ParsedName`].
    pub fn parse(&self, input: &str) -> ParsedName {
        parser::parse_with_config(input, &self.config)
    }

    /// The configuration this parser was built with.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}
