//! Catalog management

use validator::Validate;

use crate::{
    error::AppResult,
    http::{ApiClient, ApiRequest},
    models::{
        book::{AdminBook, AdminBookQuery, AdminBookSave},
        page::PageResult,
        session::Scope,
    },
};

pub async fn page_books(client: &ApiClient, query: &AdminBookQuery) -> AppResult<PageResult<AdminBook>> {
    let request = ApiRequest::get("/admin/books").scope(Scope::Admin).query(query)?;
    client.send(request).await
}

pub async fn get_book(client: &ApiClient, id: i64) -> AppResult<AdminBook> {
    client
        .send(ApiRequest::get(format!("/admin/books/{}", id)).scope(Scope::Admin))
        .await
}

pub async fn create_book(client: &ApiClient, book: &AdminBookSave) -> AppResult<()> {
    book.validate()?;
    let request = ApiRequest::post("/admin/books").scope(Scope::Admin).json(book)?;
    client.send(request).await
}

pub async fn update_book(client: &ApiClient, id: i64, book: &AdminBookSave) -> AppResult<()> {
    book.validate()?;
    let request = ApiRequest::put(format!("/admin/books/{}", id))
        .scope(Scope::Admin)
        .json(book)?;
    client.send(request).await
}

pub async fn delete_book(client: &ApiClient, id: i64) -> AppResult<()> {
    client
        .send(ApiRequest::delete(format!("/admin/books/{}", id)).scope(Scope::Admin))
        .await
}
