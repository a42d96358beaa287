//! Public catalog endpoints

use crate::{
    error::AppResult,
    http::{ApiClient, ApiRequest},
    models::{
        book::{Book, BookQuery},
        session::Scope,
    },
};

/// Search the catalog; unset filters are not sent
pub async fn list_books(client: &ApiClient, query: &BookQuery) -> AppResult<Vec<Book>> {
    let request = ApiRequest::get("/api/books").scope(Scope::Reader).query(query)?;
    client.send(request).await
}

pub async fn list_categories(client: &ApiClient) -> AppResult<Vec<String>> {
    client
        .send(ApiRequest::get("/api/books/categories").scope(Scope::Reader))
        .await
}

pub async fn get_book(client: &ApiClient, id: i64) -> AppResult<Book> {
    client
        .send(ApiRequest::get(format!("/api/books/{}", id)).scope(Scope::Reader))
        .await
}
