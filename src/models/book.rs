//! Book catalog models

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use validator::Validate;

/// Book as shown in the public catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i64,
    pub cover_url: Option<String>,
    pub title: String,
    pub author: Option<String>,
    pub publisher: Option<String>,
    pub isbn: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub total_qty: Option<i32>,
    pub available_qty: Option<i32>,
}

impl Book {
    /// Whether at least one copy can be borrowed right now
    pub fn is_available(&self) -> bool {
        self.available_qty.unwrap_or(0) > 0
    }
}

/// Catalog search parameters
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
pub struct BookQuery {
    pub q: Option<String>,
    pub category: Option<String>,
}

/// Book as managed from the administration console
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminBook {
    pub id: i64,
    pub cover_url: Option<String>,
    pub title: String,
    pub author: Option<String>,
    pub publisher: Option<String>,
    pub isbn: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub total_qty: i32,
    #[serde(default)]
    pub available_qty: i32,
    /// 1 on shelf, 0 withdrawn
    #[serde(default)]
    pub status: i32,
}

/// Administration book listing filters
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminBookQuery {
    pub keyword: Option<String>,
    pub category: Option<String>,
    pub status: Option<i32>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

/// Create or update a book; unset fields are left out of the request
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AdminBookSave {
    pub cover_url: Option<String>,
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: Option<String>,
    pub author: Option<String>,
    pub publisher: Option<String>,
    pub isbn: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0, message = "Total quantity cannot be negative"))]
    pub total_qty: Option<i32>,
    pub status: Option<i32>,
}
