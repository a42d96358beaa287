//! Counter lending and returns

use rust_decimal::Decimal;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    http::{ApiClient, ApiRequest},
    models::{
        borrow::{AdminBorrowCreate, AdminBorrowQuery, AdminBorrowRecord, AdminBorrowReturn},
        page::PageResult,
        session::Scope,
    },
};

pub async fn page_borrows(client: &ApiClient, query: &AdminBorrowQuery) -> AppResult<PageResult<AdminBorrowRecord>> {
    let request = ApiRequest::get("/admin/borrows").scope(Scope::Admin).query(query)?;
    client.send(request).await
}

/// Lend `book_id` to the reader holding card `user_code`
pub async fn borrow_out(client: &ApiClient, user_code: &str, book_id: i64) -> AppResult<()> {
    let body = AdminBorrowCreate {
        user_code: user_code.trim().to_string(),
        book_id,
    };
    body.validate()?;

    let request = ApiRequest::post("/admin/borrows/borrow")
        .scope(Scope::Admin)
        .json(&body)?;
    client.send(request).await
}

/// Record a return, charging `fine_amount` when given
pub async fn return_borrow(client: &ApiClient, record_id: i64, fine_amount: Option<Decimal>) -> AppResult<()> {
    if fine_amount.is_some_and(|fine| fine.is_sign_negative()) {
        return Err(AppError::Validation("Fine amount cannot be negative".to_string()));
    }

    let request = ApiRequest::post("/admin/borrows/return")
        .scope(Scope::Admin)
        .json(&AdminBorrowReturn { record_id, fine_amount })?;
    client.send(request).await
}
