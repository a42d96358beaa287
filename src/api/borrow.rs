//! Reader loan endpoints

use crate::{
    error::AppResult,
    http::{ApiClient, ApiRequest},
    models::{
        borrow::{BookRef, BorrowedBook, RecordRef},
        session::Scope,
    },
};

/// Books the logged-in reader currently holds
pub async fn list_current_borrowed(client: &ApiClient) -> AppResult<Vec<BorrowedBook>> {
    client
        .send(ApiRequest::get("/api/borrow/current").scope(Scope::Reader))
        .await
}

pub async fn borrow_book(client: &ApiClient, book_id: i64) -> AppResult<()> {
    let request = ApiRequest::post("/api/borrow/borrow")
        .scope(Scope::Reader)
        .json(&BookRef { book_id })?;
    client.send(request).await
}

pub async fn return_book(client: &ApiClient, record_id: i64) -> AppResult<()> {
    let request = ApiRequest::post("/api/borrow/return")
        .scope(Scope::Reader)
        .json(&RecordRef { record_id })?;
    client.send(request).await
}

/// Extend the due date; the backend enforces the reader type's renewal cap
pub async fn renew_book(client: &ApiClient, record_id: i64) -> AppResult<()> {
    let request = ApiRequest::post("/api/borrow/renew")
        .scope(Scope::Reader)
        .json(&RecordRef { record_id })?;
    client.send(request).await
}
