//! Borrowing (loan) models

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use validator::Validate;

use super::datetime;

/// Borrow record status codes used by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum BorrowStatus {
    Borrowing = 0,
    Returned = 1,
    Overdue = 2,
}

impl BorrowStatus {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(BorrowStatus::Borrowing),
            1 => Some(BorrowStatus::Returned),
            2 => Some(BorrowStatus::Overdue),
            _ => None,
        }
    }
}

/// A loan currently held by the logged-in reader
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorrowedBook {
    pub record_id: i64,
    pub book_id: i64,
    pub cover_url: Option<String>,
    pub title: String,
    pub author: Option<String>,
    pub publisher: Option<String>,
    pub location: Option<String>,
    #[serde(with = "datetime")]
    pub borrow_at: NaiveDateTime,
    #[serde(with = "datetime")]
    pub due_at: NaiveDateTime,
    #[serde(default)]
    pub renew_count: i32,
    pub status: i32,
}

impl BorrowedBook {
    pub fn borrow_status(&self) -> Option<BorrowStatus> {
        BorrowStatus::from_code(self.status)
    }

    /// Overdue either by status or because the due date is behind `now`
    pub fn is_overdue(&self, now: NaiveDateTime) -> bool {
        self.borrow_status() == Some(BorrowStatus::Overdue)
            || (self.borrow_status() == Some(BorrowStatus::Borrowing) && self.due_at < now)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BookRef {
    pub book_id: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RecordRef {
    pub record_id: i64,
}

/// Loan as seen from the administration console
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminBorrowRecord {
    pub record_id: i64,
    pub user_id: i64,
    pub user_name: String,
    pub user_code: String,
    pub book_id: i64,
    pub book_title: String,
    #[serde(with = "datetime")]
    pub borrow_at: NaiveDateTime,
    #[serde(with = "datetime")]
    pub due_at: NaiveDateTime,
    #[serde(default, with = "datetime::option")]
    pub return_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub renew_count: i32,
    pub status: i32,
    #[serde(default)]
    pub fine_amount: Option<Decimal>,
    pub handled_by: Option<i64>,
    pub handled_by_name: Option<String>,
}

/// Administration loan listing filters
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminBorrowQuery {
    pub status: Option<i32>,
    pub keyword: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

/// Lend a book over the counter to a reader identified by card code
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AdminBorrowCreate {
    #[validate(length(min = 1, message = "Reader code must not be empty"))]
    pub user_code: String,
    pub book_id: i64,
}

/// Take a book back, optionally charging a fine
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminBorrowReturn {
    pub record_id: i64,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub fine_amount: Option<Decimal>,
}
