//! Reader account endpoints

use crate::{
    error::AppResult,
    http::{ApiClient, ApiRequest},
    models::{
        session::Scope,
        user::{ReaderType, UserProfile},
    },
};

/// Profile of the reader behind the current token
pub async fn me(client: &ApiClient) -> AppResult<UserProfile> {
    client
        .send(ApiRequest::get("/api/user/me").scope(Scope::Reader))
        .await
}

/// Reader categories offered at registration
pub async fn list_reader_types(client: &ApiClient) -> AppResult<Vec<ReaderType>> {
    client
        .send(ApiRequest::get("/api/reader-types").scope(Scope::Reader))
        .await
}
