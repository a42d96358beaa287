//! Portal content: carousel slides, notices and news posts

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use validator::Validate;

use super::datetime;

/// Number of posts requested when the caller does not say
pub const DEFAULT_POST_LIMIT: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselItem {
    pub id: i64,
    pub tag: Option<String>,
    pub title: String,
    pub subtitle: Option<String>,
    pub cover_url: Option<String>,
    pub accent: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalPostListItem {
    pub id: i64,
    #[serde(rename = "type")]
    pub post_type: i32,
    pub title: String,
    pub subtitle: Option<String>,
    #[serde(with = "datetime")]
    pub publish_time: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalPostDetail {
    pub id: i64,
    #[serde(rename = "type")]
    pub post_type: i32,
    pub title: String,
    pub content: Option<String>,
    pub cover_url: Option<String>,
    #[serde(with = "datetime")]
    pub publish_time: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct PostListQuery {
    #[serde(rename = "type")]
    pub post_type: i32,
    pub limit: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminPortalPostListItem {
    pub id: i64,
    #[serde(rename = "type")]
    pub post_type: i32,
    pub tag: Option<String>,
    pub title: String,
    pub subtitle: Option<String>,
    pub cover_url: Option<String>,
    pub accent: Option<String>,
    pub sort: Option<i32>,
    #[serde(with = "datetime")]
    pub publish_time: NaiveDateTime,
    pub status: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminPortalPostDetail {
    pub id: i64,
    #[serde(rename = "type")]
    pub post_type: i32,
    pub tag: Option<String>,
    pub title: String,
    pub subtitle: Option<String>,
    pub content: Option<String>,
    pub cover_url: Option<String>,
    pub accent: Option<String>,
    pub sort: Option<i32>,
    #[serde(default, with = "datetime::option")]
    pub publish_time: Option<NaiveDateTime>,
    pub status: i32,
}

/// Administration post listing filters
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminPostQuery {
    #[serde(rename = "type")]
    pub post_type: Option<i32>,
    pub status: Option<i32>,
    pub keyword: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

/// Create or update a post; unset fields are left out of the request
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AdminPortalPostSave {
    #[serde(rename = "type")]
    pub post_type: Option<i32>,
    pub tag: Option<String>,
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub content: Option<String>,
    pub cover_url: Option<String>,
    pub accent: Option<String>,
    pub sort: Option<i32>,
    #[serde(with = "iso_datetime")]
    pub publish_time: Option<NaiveDateTime>,
    pub status: Option<i32>,
}

/// Outgoing date-times use the plain ISO form the backend parses by default
mod iso_datetime {
    use chrono::NaiveDateTime;
    use serde::Serializer;

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(at) => serializer.serialize_str(&at.format("%Y-%m-%dT%H:%M:%S").to_string()),
            None => serializer.serialize_none(),
        }
    }
}
