//! Parser configuration.

use crate::error::Error;

/// How a bare three-digit token such as `102` is split into season and
/// episode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompactForm {
    /// Leading digit is the season, trailing two digits the episode.
    /// `102` → season 1, episode 2. Only all-digit tokens take this path.
    #[default]
    LeadingDigitSeason,
    /// Legacy behaviour: any three-character token yields the middle
    /// character as both season and episode. `102` → season 0, episode 0.
    MiddleDigit,
}

impl std::str::FromStr for CompactForm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "leading-digit-season" | "leading" => Ok(CompactForm::LeadingDigitSeason),
            "middle-digit" | "legacy" => Ok(CompactForm::MiddleDigit),
            _ => Err(Error::invalid_value("compact form", s)),
        }
    }
}

/// Configuration for the parser.
///
/// Use the builder pattern to create a configuration:
///
/// ```
/// use reelname_parser::config::{CompactForm, ParserConfig};
///
/// let config = ParserConfig::builder()
///     .compact_form(CompactForm::MiddleDigit)
///     .episode_titles(false)
///     .build();
/// assert!(!config.episode_titles);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// How three-digit season/episode tokens are read.
    /// Default: LeadingDigitSeason
    pub compact_form: CompactForm,

    /// Whether to derive episode titles for TV names.
    /// Default: true
    pub episode_titles: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            compact_form: CompactForm::default(),
            episode_titles: true,
        }
    }
}

impl ParserConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration builder.
    pub fn builder() -> ParserConfigBuilder {
        ParserConfigBuilder::default()
    }
}

/// Builder for `ParserConfig`.
#[derive(Debug, Clone, Default)]
pub struct ParserConfigBuilder {
    compact_form: Option<CompactForm>,
    episode_titles: Option<bool>,
}

impl ParserConfigBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how three-digit tokens are split.
    pub fn compact_form(mut self, form: CompactForm) -> Self {
        self.compact_form = Some(form);
        self
    }

    /// Set whether to derive episode titles.
    ///
    /// Default: true
    pub fn episode_titles(mut self, enabled: bool) -> Self {
        self.episode_titles = Some(enabled);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ParserConfig {
        ParserConfig {
            compact_form: self.compact_form.unwrap_or_default(),
            episode_titles: self.episode_titles.unwrap_or(true),
        }
    }
}
