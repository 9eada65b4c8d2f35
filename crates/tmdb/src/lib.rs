//! Client and response-shaping types for the TMDB metadata API.
//!
//! [`TmdbClient`] issues the outbound HTTP calls; the [`models`] module turns
//! raw TMDB payloads into the shapes this backend serves. Nothing here is
//! cached or retried -- every call is a single attempt whose failure is fatal
//! for the request that triggered it.

mod client;
mod error;
pub mod models;

pub use client::{SearchKind, TmdbClient, DEFAULT_BASE_URL};
pub use error::TmdbError;
