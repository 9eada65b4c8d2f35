/// Errors from the TMDB client layer.
#[derive(Debug, thiserror::Error)]
pub enum TmdbError {
    /// No API token was configured when the call was made.
    #[error("TMDB API token is missing")]
    MissingToken,

    /// The HTTP request itself failed (network, DNS, TLS, body decode).
    #[error("TMDB request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// TMDB returned a non-2xx status code.
    #[error("TMDB API error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response body did not have the expected shape.
    #[error("Unexpected TMDB payload: {0}")]
    Payload(String),
}
