//! Reader and administrator account models

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use validator::{Validate, ValidationError};

use super::datetime;
use super::session::Profile;

/// Rejects empty and whitespace-only values
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Login credentials; `identifier` is the reader card code or the
/// administrator username depending on the scope being logged into
#[derive(Debug, Clone, Validate)]
pub struct Credentials {
    #[validate(custom(function = "not_blank", message = "Identifier must not be empty"))]
    pub identifier: String,
    #[validate(custom(function = "not_blank", message = "Password must not be empty"))]
    pub password: String,
}

impl Credentials {
    pub fn new(identifier: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            password: password.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ReaderLoginBody<'a> {
    pub code: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct AdminLoginBody<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Reader authentication result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user_id: i64,
    pub name: String,
    pub code: String,
}

impl LoginResponse {
    pub fn profile(&self) -> Profile {
        Profile {
            id: self.user_id,
            display_name: self.name.clone(),
            identifier_code: self.code.clone(),
        }
    }
}

/// Administrator authentication result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminLoginResponse {
    pub token: String,
    pub admin_id: i64,
    pub name: String,
    pub username: String,
}

impl AdminLoginResponse {
    pub fn profile(&self) -> Profile {
        Profile {
            id: self.admin_id,
            display_name: self.name.clone(),
            identifier_code: self.username.clone(),
        }
    }
}

/// Self-service reader registration
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(custom(function = "not_blank", message = "Name must not be empty"))]
    pub name: String,
    /// Student or staff number, used as the login identifier
    #[validate(custom(function = "not_blank", message = "Code must not be empty"))]
    pub code: String,
    #[validate(custom(function = "not_blank", message = "Phone must not be empty"))]
    pub phone: String,
    #[validate(custom(function = "not_blank", message = "Password must not be empty"))]
    pub password: String,
    /// Defaults to the backend's standard reader type when unset
    pub reader_type_id: Option<i64>,
}

/// Profile of the logged-in reader
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: i64,
    pub name: String,
    pub code: String,
}

/// Borrowing policy attached to a category of readers
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReaderType {
    pub id: i64,
    pub name: String,
    pub max_borrow: i32,
    pub borrow_days: i32,
    pub max_renew: i32,
    pub description: Option<String>,
}

/// Reader account as listed in the administration console
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminReader {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub phone: String,
    pub reader_type_id: Option<i64>,
    pub reader_type_name: Option<String>,
    /// 1 active, 0 disabled
    pub status: i32,
    #[serde(with = "datetime")]
    pub create_time: NaiveDateTime,
}

/// Administration reader listing filters
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminReaderQuery {
    pub keyword: Option<String>,
    pub status: Option<i32>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

#[derive(Debug, Serialize)]
pub(crate) struct StatusBody {
    pub status: i32,
}
