//! Media type enum.

use crate::error::Error;

/// Kind of media a name describes.
///
/// A name is [`MediaType::Tv`] only when both a season and an episode
/// were derived from it; everything else is a movie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    /// Movie/Film
    #[default]
    Movie,
    /// TV episode
    Tv,
}

impl MediaType {
    /// Classify from the derived season and episode.
    pub fn from_season_episode(season: Option<u16>, episode: Option<u16>) -> Self {
        match (season, episode) {
            (Some(_), Some(_)) => MediaType::Tv,
            _ => MediaType::Movie,
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaType::Movie => write!(f, "movie"),
            MediaType::Tv => write!(f, "tv"),
        }
    }
}

impl std::str::FromStr for MediaType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "movie" | "film" => Ok(MediaType::Movie),
            "tv" | "series" | "show" => Ok(MediaType::Tv),
            _ => Err(Error::invalid_value("media type", s)),
        }
    }
}
