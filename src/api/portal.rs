//! Portal home page content

use crate::{
    error::AppResult,
    http::{ApiClient, ApiRequest},
    models::{
        portal::{CarouselItem, PortalPostDetail, PortalPostListItem, PostListQuery, DEFAULT_POST_LIMIT},
        session::Scope,
    },
};

pub async fn list_carousel(client: &ApiClient) -> AppResult<Vec<CarouselItem>> {
    client
        .send(ApiRequest::get("/api/portal/carousel").scope(Scope::Reader))
        .await
}

/// Latest published posts of one type, at most `limit` (10 when unset)
pub async fn list_posts(client: &ApiClient, post_type: i32, limit: Option<u32>) -> AppResult<Vec<PortalPostListItem>> {
    let query = PostListQuery {
        post_type,
        limit: limit.unwrap_or(DEFAULT_POST_LIMIT),
    };
    let request = ApiRequest::get("/api/portal/posts")
        .scope(Scope::Reader)
        .query(&query)?;
    client.send(request).await
}

pub async fn get_post(client: &ApiClient, id: i64) -> AppResult<PortalPostDetail> {
    client
        .send(ApiRequest::get(format!("/api/portal/posts/{}", id)).scope(Scope::Reader))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        api::test_support::{client, ok},
        http::transport::MockHttpTransport,
    };
    use mockall::predicate::function;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_posts_default_limit() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_execute()
            .with(function(|r: &ApiRequest| {
                let mut query = r.query.clone();
                query.sort();
                query
                    == vec![
                        ("limit".to_string(), "10".to_string()),
                        ("type".to_string(), "2".to_string()),
                    ]
            }))
            .times(1)
            .returning(|_| {
                Ok(ok(json!([
                    {"id": 1, "type": 2, "title": "Opening hours", "publishTime": "2024-05-01T09:00:00"}
                ])))
            });
        let client = client(transport);

        let posts = list_posts(&client, 2, None).await.unwrap();
        assert_eq!(posts[0].title, "Opening hours");
    }

    #[tokio::test]
    async fn test_missing_data_is_malformed_for_lists() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_execute()
            .returning(|_| Ok(crate::http::RawResponse::new(200, r#"{"code":1}"#)));
        let client = client(transport);

        assert!(list_carousel(&client).await.is_err());
    }
}
