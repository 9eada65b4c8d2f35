//! Shared response envelope for API handlers.
//!
//! All successful responses use the
//! `{ "status": "success", "message", "data", "page"?, "size"?, "total"? }`
//! envelope. Use [`ApiResponse`] instead of ad-hoc `serde_json::json!`
//! blocks to get compile-time type safety and consistent serialization.

use axum::Json;
use serde::Serialize;

/// Standard success envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: &'static str,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

impl<T: Serialize> ApiResponse<T> {
    /// A success envelope with a payload and no pagination fields.
    pub fn success(message: &'static str, data: T) -> Json<Self> {
        Json(Self {
            status: "success",
            message,
            data: Some(data),
            page: None,
            size: None,
            total: None,
        })
    }

    /// A success envelope for sliced list endpoints.
    pub fn paginated(
        message: &'static str,
        data: T,
        page: u32,
        size: usize,
        total: usize,
    ) -> Json<Self> {
        Json(Self {
            status: "success",
            message,
            data: Some(data),
            page: Some(page),
            size: Some(size),
            total: Some(total),
        })
    }
}

impl ApiResponse<()> {
    /// A success envelope with no payload (e.g. after a delete).
    pub fn message(message: &'static str) -> Json<Self> {
        Json(Self {
            status: "success",
            message,
            data: None,
            page: None,
            size: None,
            total: None,
        })
    }
}
