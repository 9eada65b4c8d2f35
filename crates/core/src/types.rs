//! Primitive type aliases and enums shared across crates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// The two kinds of media TMDB serves and favorites reference.
///
/// Serialized and stored as lowercase strings (`"movie"` / `"tv"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    Tv,
}

impl MediaType {
    /// Lowercase string form used in URLs and the `favorites.media_type` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Tv => "tv",
        }
    }

    /// Discriminator value injected into favorite list entries
    /// (`"movie"` / `"tv_show"`, matching the API contract).
    pub fn tag(&self) -> &'static str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Tv => "tv_show",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaType {
    type Err = crate::error::CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "movie" => Ok(MediaType::Movie),
            "tv" => Ok(MediaType::Tv),
            other => Err(crate::error::CoreError::Validation(format!(
                "Media type must be either \"movie\" or \"tv\", got \"{other}\""
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_type_round_trips_through_str() {
        assert_eq!("movie".parse::<MediaType>().unwrap(), MediaType::Movie);
        assert_eq!("tv".parse::<MediaType>().unwrap(), MediaType::Tv);
        assert_eq!(MediaType::Movie.as_str(), "movie");
        assert_eq!(MediaType::Tv.as_str(), "tv");
    }

    #[test]
    fn media_type_rejects_unknown_values() {
        assert!("tv_show".parse::<MediaType>().is_err());
        assert!("".parse::<MediaType>().is_err());
    }

    #[test]
    fn media_type_tag_distinguishes_tv_shows() {
        assert_eq!(MediaType::Movie.tag(), "movie");
        assert_eq!(MediaType::Tv.tag(), "tv_show");
    }
}
