//! Reader account administration

use crate::{
    error::AppResult,
    http::{ApiClient, ApiRequest},
    models::{
        page::PageResult,
        session::Scope,
        user::{AdminReader, AdminReaderQuery, StatusBody},
    },
};

pub async fn page_readers(client: &ApiClient, query: &AdminReaderQuery) -> AppResult<PageResult<AdminReader>> {
    let request = ApiRequest::get("/admin/users").scope(Scope::Admin).query(query)?;
    client.send(request).await
}

/// Reset a reader's password to the backend default
pub async fn reset_password(client: &ApiClient, id: i64) -> AppResult<()> {
    client
        .send(ApiRequest::post(format!("/admin/users/{}/reset-password", id)).scope(Scope::Admin))
        .await
}

/// Enable (1) or disable (0) a reader account
pub async fn update_status(client: &ApiClient, id: i64, status: i32) -> AppResult<()> {
    let request = ApiRequest::post(format!("/admin/users/{}/status", id))
        .scope(Scope::Admin)
        .json(&StatusBody { status })?;
    client.send(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        api::test_support::{client, ok},
        http::{transport::MockHttpTransport, RequestBody},
    };
    use mockall::predicate::function;
    use serde_json::{json, Value};

    #[tokio::test]
    async fn test_update_status() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_execute()
            .with(function(|r: &ApiRequest| {
                r.path == "/admin/users/8/status" && r.body == RequestBody::Json(json!({"status": 0}))
            }))
            .times(1)
            .returning(|_| Ok(ok(Value::Null)));
        let client = client(transport);

        update_status(&client, 8, 0).await.unwrap();
    }

    #[tokio::test]
    async fn test_page_readers_keyword() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_execute()
            .with(function(|r: &ApiRequest| {
                r.query == vec![("keyword".to_string(), "ada".to_string())]
            }))
            .times(1)
            .returning(|_| {
                Ok(ok(json!({
                    "total": 1,
                    "records": [{
                        "id": 1,
                        "name": "Ada",
                        "code": "R100",
                        "phone": "555",
                        "status": 1,
                        "createTime": "2024-01-02 03:04:05"
                    }]
                })))
            });
        let client = client(transport);

        let query = AdminReaderQuery {
            keyword: Some("ada".to_string()),
            ..Default::default()
        };
        let page = page_readers(&client, &query).await.unwrap();
        assert_eq!(page.records[0].code, "R100");
    }
}
