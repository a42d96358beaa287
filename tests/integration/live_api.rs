//! Tests against a running backend
//!
//! Run with: API_BASE_URL=http://localhost:8080 cargo test -- --ignored

use lending_client::{
    api,
    config::AppConfig,
    models::{book::BookQuery, Credentials},
    services::Services,
    storage::MemoryStore,
};
use std::sync::Arc;

fn live_services() -> Services {
    let mut config = AppConfig::default();
    if let Ok(base_url) = std::env::var("API_BASE_URL") {
        config.api.base_url = base_url;
    }
    let transport = lending_client::http::ReqwestTransport::new(&config.api)
        .expect("Failed to build transport");
    Services::new(&config, Arc::new(MemoryStore::new()), Arc::new(transport))
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_list_categories() {
    let services = live_services();
    let categories = api::books::list_categories(&services.client)
        .await
        .expect("Failed to list categories");
    assert!(categories.iter().all(|c| !c.is_empty()));
}

#[tokio::test]
#[ignore]
async fn test_search_books() {
    let services = live_services();
    let books = api::books::list_books(&services.client, &BookQuery::default())
        .await
        .expect("Failed to list books");

    if let Some(book) = books.first() {
        let fetched = api::books::get_book(&services.client, book.id)
            .await
            .expect("Failed to get book");
        assert_eq!(fetched.id, book.id);
    }
}

#[tokio::test]
#[ignore]
async fn test_portal_content() {
    let services = live_services();
    api::portal::list_carousel(&services.client)
        .await
        .expect("Failed to list carousel");
    let posts = api::portal::list_posts(&services.client, 1, Some(3))
        .await
        .expect("Failed to list posts");
    assert!(posts.len() <= 3);
}

#[tokio::test]
#[ignore]
async fn test_reader_login_and_profile() {
    let (Ok(code), Ok(password)) = (
        std::env::var("LENDING_DEMO__READER_CODE"),
        std::env::var("LENDING_DEMO__READER_PASSWORD"),
    ) else {
        return;
    };
    let services = live_services();

    let profile = services
        .sessions
        .reader()
        .login(&services.client, &Credentials::new(code.as_str(), password.as_str()))
        .await
        .expect("Failed to log in");

    let me = api::user::me(&services.client).await.expect("Failed to get profile");
    assert_eq!(me.code, profile.identifier_code);
    assert_eq!(me.user_id, profile.id);
}

#[tokio::test]
#[ignore]
async fn test_unknown_admin_rejected() {
    let services = live_services();
    let result = services
        .sessions
        .admin()
        .login(&services.client, &Credentials::new("nobody", "nothing"))
        .await;
    assert!(result.is_err());
    assert!(!services.sessions.admin().is_logged_in());
}
