//! HTTP client for the TMDB REST API.
//!
//! Wraps the handful of TMDB endpoints this backend proxies using
//! [`reqwest`]. All calls authenticate with a bearer token checked at call
//! time, make exactly one attempt, and treat any transport failure or non-2xx
//! status as fatal for the request.

use std::str::FromStr;

use serde_json::Value;

use cinevault_core::error::CoreError;
use cinevault_core::types::MediaType;

use crate::error::TmdbError;
use crate::models::Genre;

/// Default TMDB API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Which TMDB search endpoint to dispatch a query to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Movie,
    Tv,
    Multi,
}

impl SearchKind {
    fn path(&self) -> &'static str {
        match self {
            SearchKind::Movie => "/search/movie",
            SearchKind::Tv => "/search/tv",
            SearchKind::Multi => "/search/multi",
        }
    }
}

impl FromStr for SearchKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "movie" => Ok(SearchKind::Movie),
            "tv" => Ok(SearchKind::Tv),
            "multi" => Ok(SearchKind::Multi),
            other => Err(CoreError::Validation(format!(
                "Search type must be \"movie\", \"tv\", or \"multi\", got \"{other}\""
            ))),
        }
    }
}

/// HTTP client for the TMDB API.
#[derive(Debug, Clone)]
pub struct TmdbClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl TmdbClient {
    /// Create a client with the given bearer token and the production base URL.
    ///
    /// An empty token is accepted here; calls will fail with
    /// [`TmdbError::MissingToken`] until one is configured.
    pub fn new(token: String) -> Self {
        Self::with_base_url(token, DEFAULT_BASE_URL.to_string())
    }

    /// Create a client targeting a non-default base URL (used by tests to
    /// point at a stub server).
    pub fn with_base_url(token: String, base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            token,
        }
    }

    /// Issue an authenticated `GET {base_url}{path}` with the given query
    /// parameters and parse the body as JSON.
    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value, TmdbError> {
        if self.token.is_empty() {
            return Err(TmdbError::MissingToken);
        }

        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .bearer_auth(&self.token)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, path, "TMDB returned an error status");
            return Err(TmdbError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }

    /// `GET /movie/popular` -- the `results` array.
    pub async fn popular_movies(&self, page: u32) -> Result<Vec<Value>, TmdbError> {
        let payload = self
            .get("/movie/popular", &[("page", page.to_string())])
            .await?;
        take_array(payload, "results")
    }

    /// `GET /movie/now_playing` -- the `results` array.
    pub async fn now_playing_movies(&self, page: u32) -> Result<Vec<Value>, TmdbError> {
        let payload = self
            .get("/movie/now_playing", &[("page", page.to_string())])
            .await?;
        take_array(payload, "results")
    }

    /// `GET /movie/{id}` with credits, videos, and images appended.
    pub async fn movie_details(&self, id: i64) -> Result<Value, TmdbError> {
        self.get(
            &format!("/movie/{id}"),
            &[("append_to_response", "credits,videos,images".to_string())],
        )
        .await
    }

    /// `GET /movie/{id}` -- the plain movie object (favorites re-fetch).
    pub async fn movie(&self, id: i64) -> Result<Value, TmdbError> {
        self.get(&format!("/movie/{id}"), &[]).await
    }

    /// `GET /tv/popular` -- the `results` array.
    pub async fn popular_tv(&self, page: u32) -> Result<Vec<Value>, TmdbError> {
        let payload = self.get("/tv/popular", &[("page", page.to_string())]).await?;
        take_array(payload, "results")
    }

    /// `GET /tv/top_rated` -- the `results` array.
    pub async fn top_rated_tv(&self, page: u32) -> Result<Vec<Value>, TmdbError> {
        let payload = self
            .get("/tv/top_rated", &[("page", page.to_string())])
            .await?;
        take_array(payload, "results")
    }

    /// `GET /tv/{id}` with credits, videos, and images appended.
    pub async fn tv_details(&self, id: i64) -> Result<Value, TmdbError> {
        self.get(
            &format!("/tv/{id}"),
            &[("append_to_response", "credits,videos,images".to_string())],
        )
        .await
    }

    /// `GET /tv/{id}` -- the plain show object (favorites re-fetch).
    pub async fn tv(&self, id: i64) -> Result<Value, TmdbError> {
        self.get(&format!("/tv/{id}"), &[]).await
    }

    /// `GET /genre/movie/list` -- the `genres` array.
    pub async fn movie_genres(&self) -> Result<Vec<Genre>, TmdbError> {
        let payload = self
            .get("/genre/movie/list", &[("language", "en-US".to_string())])
            .await?;
        take_genres(payload)
    }

    /// `GET /genre/tv/list` -- the `genres` array.
    pub async fn tv_genres(&self) -> Result<Vec<Genre>, TmdbError> {
        let payload = self
            .get("/genre/tv/list", &[("language", "en-US".to_string())])
            .await?;
        take_genres(payload)
    }

    /// `GET /search/{movie|tv|multi}` -- the `results` array.
    pub async fn search(
        &self,
        kind: SearchKind,
        query: &str,
        page: u32,
    ) -> Result<Vec<Value>, TmdbError> {
        let payload = self
            .get(
                kind.path(),
                &[
                    ("query", query.to_string()),
                    ("include_adult", "false".to_string()),
                    ("language", "en-US".to_string()),
                    ("page", page.to_string()),
                ],
            )
            .await?;
        take_array(payload, "results")
    }

    /// `GET /{movie|tv}/{id}/videos` -- the raw payload, shaped downstream by
    /// [`crate::models::trailer_links`].
    pub async fn videos(&self, media_type: MediaType, id: i64) -> Result<Value, TmdbError> {
        self.get(
            &format!("/{}/{id}/videos", media_type.as_str()),
            &[("language", "en-US".to_string())],
        )
        .await
    }

    /// `GET /discover/movie` filtered to a genre, sorted by rating descending.
    pub async fn discover_movies_by_genre(&self, genre_id: i64) -> Result<Vec<Value>, TmdbError> {
        let payload = self
            .get(
                "/discover/movie",
                &[
                    ("with_genres", genre_id.to_string()),
                    ("sort_by", "vote_average.desc".to_string()),
                ],
            )
            .await?;
        take_array(payload, "results")
    }

    /// `GET /discover/tv` filtered to a genre, sorted by rating descending.
    pub async fn discover_tv_by_genre(&self, genre_id: i64) -> Result<Vec<Value>, TmdbError> {
        let payload = self
            .get(
                "/discover/tv",
                &[
                    ("with_genres", genre_id.to_string()),
                    ("sort_by", "vote_average.desc".to_string()),
                ],
            )
            .await?;
        take_array(payload, "results")
    }
}

/// Extract an array field from a payload, erroring if it is absent or not an
/// array. A missing field means TMDB changed shape on us; there is no sane
/// default to substitute.
fn take_array(mut payload: Value, key: &str) -> Result<Vec<Value>, TmdbError> {
    match payload.get_mut(key).map(Value::take) {
        Some(Value::Array(items)) => Ok(items),
        _ => Err(TmdbError::Payload(format!(
            "expected a \"{key}\" array in the response"
        ))),
    }
}

fn take_genres(mut payload: Value) -> Result<Vec<Genre>, TmdbError> {
    let genres = match payload.get_mut("genres").map(Value::take) {
        Some(genres @ Value::Array(_)) => genres,
        _ => {
            return Err(TmdbError::Payload(
                "expected a \"genres\" array in the response".to_string(),
            ))
        }
    };
    serde_json::from_value(genres).map_err(|e| TmdbError::Payload(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn take_array_extracts_results() {
        let payload = json!({ "page": 1, "results": [{ "id": 1 }, { "id": 2 }] });
        let items = take_array(payload, "results").unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["id"], 1);
    }

    #[test]
    fn take_array_errors_when_field_missing() {
        let payload = json!({ "page": 1 });
        let err = take_array(payload, "results").unwrap_err();
        assert!(matches!(err, TmdbError::Payload(_)));
    }

    #[test]
    fn take_array_errors_when_field_not_array() {
        let payload = json!({ "results": "oops" });
        assert!(take_array(payload, "results").is_err());
    }

    #[test]
    fn search_kind_parses_known_values() {
        assert_eq!("movie".parse::<SearchKind>().unwrap(), SearchKind::Movie);
        assert_eq!("tv".parse::<SearchKind>().unwrap(), SearchKind::Tv);
        assert_eq!("multi".parse::<SearchKind>().unwrap(), SearchKind::Multi);
        assert!("anime".parse::<SearchKind>().is_err());
    }

    #[tokio::test]
    async fn empty_token_fails_before_any_request() {
        let client = TmdbClient::new(String::new());
        let err = client.get("/movie/popular", &[]).await.unwrap_err();
        assert!(matches!(err, TmdbError::MissingToken));
    }
}
