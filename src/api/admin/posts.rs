//! Portal post management

use validator::Validate;

use crate::{
    error::AppResult,
    http::{ApiClient, ApiRequest},
    models::{
        page::PageResult,
        portal::{AdminPortalPostDetail, AdminPortalPostListItem, AdminPortalPostSave, AdminPostQuery},
        session::Scope,
    },
};

pub async fn page_posts(client: &ApiClient, query: &AdminPostQuery) -> AppResult<PageResult<AdminPortalPostListItem>> {
    let request = ApiRequest::get("/admin/portal/posts")
        .scope(Scope::Admin)
        .query(query)?;
    client.send(request).await
}

pub async fn get_post(client: &ApiClient, id: i64) -> AppResult<AdminPortalPostDetail> {
    client
        .send(ApiRequest::get(format!("/admin/portal/posts/{}", id)).scope(Scope::Admin))
        .await
}

pub async fn create_post(client: &ApiClient, post: &AdminPortalPostSave) -> AppResult<()> {
    post.validate()?;
    let request = ApiRequest::post("/admin/portal/posts")
        .scope(Scope::Admin)
        .json(post)?;
    client.send(request).await
}

pub async fn update_post(client: &ApiClient, id: i64, post: &AdminPortalPostSave) -> AppResult<()> {
    post.validate()?;
    let request = ApiRequest::put(format!("/admin/portal/posts/{}", id))
        .scope(Scope::Admin)
        .json(post)?;
    client.send(request).await
}

pub async fn delete_post(client: &ApiClient, id: i64) -> AppResult<()> {
    client
        .send(ApiRequest::delete(format!("/admin/portal/posts/{}", id)).scope(Scope::Admin))
        .await
}
