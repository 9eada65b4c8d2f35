pub mod auth;
pub mod content;
pub mod favorites;
pub mod movies;
pub mod search;
pub mod trailers;
pub mod tv;
