//! Shared primitives for the cinevault backend: the domain error taxonomy
//! and the handful of types every layer agrees on.

pub mod error;
pub mod types;
