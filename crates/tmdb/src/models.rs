//! Response shapes served by the backend, projected from raw TMDB payloads.
//!
//! Projection is strict: if TMDB omits a field the shape needs, the
//! conversion fails and the whole request fails with it. No defaulting.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use cinevault_core::types::MediaType;

use crate::error::TmdbError;

/// A TMDB genre entry (`{ id, name }`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

/// Detail projection for a single movie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieDetails {
    pub id: i64,
    pub title: String,
    pub overview: String,
    pub release_date: String,
    /// Null for titles TMDB has no runtime for.
    pub runtime: Option<i64>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub vote_average: f64,
    pub genres: Vec<Genre>,
}

impl MovieDetails {
    /// Project a raw `GET /movie/{id}` payload down to the detail shape,
    /// dropping credits/videos/images and everything else not listed.
    pub fn from_payload(payload: Value) -> Result<Self, TmdbError> {
        serde_json::from_value(payload).map_err(|e| TmdbError::Payload(e.to_string()))
    }
}

/// Detail projection for a single TV show.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TvDetails {
    pub id: i64,
    pub name: String,
    pub original_name: String,
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub vote_average: f64,
    pub vote_count: i64,
    pub genres: Vec<Genre>,
    pub first_air_date: Option<String>,
    pub last_air_date: Option<String>,
    pub number_of_seasons: i64,
    pub number_of_episodes: i64,
    pub in_production: bool,
    pub status: String,
}

impl TvDetails {
    /// Project a raw `GET /tv/{id}` payload down to the detail shape.
    pub fn from_payload(payload: Value) -> Result<Self, TmdbError> {
        serde_json::from_value(payload).map_err(|e| TmdbError::Payload(e.to_string()))
    }
}

/// One entry from a TMDB `/videos` list.
#[derive(Debug, Clone, Deserialize)]
pub struct Video {
    pub name: String,
    pub key: String,
    /// TMDB's video category, e.g. `"Trailer"`, `"Teaser"`, `"Clip"`.
    #[serde(rename = "type")]
    pub kind: String,
    pub official: bool,
    pub published_at: String,
}

/// A watchable trailer link derived from a [`Video`].
#[derive(Debug, Clone, Serialize)]
pub struct TrailerLink {
    pub name: String,
    pub link: String,
    pub official: bool,
    pub published_at: String,
}

#[derive(Debug, Deserialize)]
struct VideoList {
    results: Vec<Video>,
}

/// Filter a `/videos` payload down to trailers and map each to a YouTube
/// watch link. An empty result is returned as-is; the caller decides whether
/// that is a not-found condition.
pub fn trailer_links(payload: Value) -> Result<Vec<TrailerLink>, TmdbError> {
    let list: VideoList =
        serde_json::from_value(payload).map_err(|e| TmdbError::Payload(e.to_string()))?;

    Ok(list
        .results
        .into_iter()
        .filter(|video| video.kind == "Trailer")
        .map(|video| TrailerLink {
            link: format!("https://www.youtube.com/watch?v={}", video.key),
            name: video.name,
            official: video.official,
            published_at: video.published_at,
        })
        .collect())
}

/// Tag a raw favorite payload with its `type` discriminator so mixed
/// favorite lists stay distinguishable (`"movie"` / `"tv_show"`).
pub fn tag_with_type(mut payload: Value, media_type: MediaType) -> Value {
    if let Some(object) = payload.as_object_mut() {
        object.insert("type".to_string(), Value::String(media_type.tag().into()));
    }
    payload
}
