//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Pagination parameters for the movie and TV list endpoints
/// (`?page=&size=`). `page` is forwarded to TMDB; `size` caps how many
/// entries of each fetched list are returned.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
    pub size: Option<usize>,
}

impl PageParams {
    /// TMDB page to request (default 1).
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1)
    }

    /// Maximum entries to return per list (default 10).
    pub fn size(&self) -> usize {
        self.size.unwrap_or(10)
    }
}
