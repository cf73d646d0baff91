//! Display resolution vocabulary.

use crate::error::Error;

/// Display resolution named in a file name.
///
/// Only the closed vocabulary below is recognised; anything else leaves
/// the field empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Resolution {
    /// 480p SD
    #[serde(rename = "480p")]
    _480p,
    /// 720p HD
    #[serde(rename = "720p")]
    _720p,
    /// 1080p Full HD
    #[serde(rename = "1080p")]
    _1080p,
    /// 2160p Ultra HD
    #[serde(rename = "2160p")]
    _2160p,
    /// "4K" as spelled in the name
    #[serde(rename = "4K")]
    _4k,
}

impl Resolution {
    /// The spelling used in canonical output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Resolution::_480p => "480p",
            Resolution::_720p => "720p",
            Resolution::_1080p => "1080p",
            Resolution::_2160p => "2160p",
            Resolution::_4k => "4K",
        }
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Resolution {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "480p" => Ok(Resolution::_480p),
            "720p" => Ok(Resolution::_720p),
            "1080p" => Ok(Resolution::_1080p),
            "2160p" => Ok(Resolution::_2160p),
            "4k" => Ok(Resolution::_4k),
            _ => Err(Error::invalid_value("resolution", s)),
        }
    }
}

impl PartialEq<&str> for Resolution {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
