//! End-to-end client scenarios

use std::time::Duration;

use lending_client::{
    api,
    models::{ConfirmOptions, Credentials, Scope, ToastKind},
    storage::{FileStore, KeyValueStore},
    AppError,
};

use crate::support::services;

const LOGIN_OK: &str =
    r#"{"code":1,"msg":"success","data":{"token":"t-100","userId":1,"name":"Ada","code":"R100"}}"#;

#[tokio::test]
async fn test_reader_login_then_expiry() {
    let (services, storage, transport) = services();
    transport
        .respond(200, LOGIN_OK)
        .respond(401, r#"{"code":0,"msg":"NOT_LOGIN"}"#);
    let mut expired = services.events.subscribe();

    let reader = services.sessions.reader();
    reader
        .login(&services.client, &Credentials::new("R100", "secret"))
        .await
        .unwrap();

    assert!(reader.is_logged_in());
    assert_eq!(storage.get("lib_token").as_deref(), Some("t-100"));
    assert!(storage.get("lib_user").unwrap().contains("\"code\":\"R100\""));

    let err = api::borrow::list_current_borrowed(&services.client).await.unwrap_err();
    assert!(err.is_session_expired());
    assert_eq!(transport.token_sent(1).as_deref(), Some("t-100"));

    assert!(!reader.is_logged_in());
    assert_eq!(storage.get("lib_token"), None);
    assert_eq!(storage.get("lib_user"), None);
    assert_eq!(expired.try_recv().unwrap().scope, Scope::Reader);
    assert!(expired.try_recv().is_err());
}

#[tokio::test]
async fn test_admin_expiry_leaves_reader_alone() {
    let (services, storage, transport) = services();
    transport
        .respond(200, LOGIN_OK)
        .respond(
            200,
            r#"{"code":1,"data":{"token":"a-1","adminId":2,"name":"Root","username":"root"}}"#,
        )
        .respond(401, "");

    services
        .sessions
        .reader()
        .login(&services.client, &Credentials::new("R100", "secret"))
        .await
        .unwrap();
    services
        .sessions
        .admin()
        .login(&services.client, &Credentials::new("root", "pw"))
        .await
        .unwrap();

    let err = api::admin::readers::reset_password(&services.client, 5).await.unwrap_err();
    assert_eq!(err.expired_scope(), Some(Scope::Admin));
    assert_eq!(transport.token_sent(2).as_deref(), Some("a-1"));

    assert!(services.sessions.reader().is_logged_in());
    assert!(!services.sessions.admin().is_logged_in());
    assert_eq!(storage.get("lib_token").as_deref(), Some("t-100"));
    assert_eq!(storage.get("lib_admin_token"), None);
}

#[tokio::test]
async fn test_failed_login_changes_nothing() {
    let (services, storage, transport) = services();
    transport.respond(200, r#"{"code":0,"msg":"Wrong code or password"}"#);

    let err = services
        .sessions
        .reader()
        .login(&services.client, &Credentials::new("R100", "wrong"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Wrong code or password");
    assert!(!services.sessions.reader().is_logged_in());
    assert!(storage.is_empty());
}

#[tokio::test]
async fn test_business_failure_under_http_200() {
    let (services, _, transport) = services();
    transport.respond(200, r#"{"code":0,"msg":"No copies left"}"#);

    let err = api::borrow::borrow_book(&services.client, 12).await.unwrap_err();
    assert_eq!(err, AppError::Business { code: 0, message: "No copies left".to_string() });
}

#[tokio::test]
async fn test_transport_failure_message() {
    let (services, _, transport) = services();
    transport.respond(500, "<html>Internal Server Error</html>");

    let err = api::books::list_categories(&services.client).await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.to_string(), "Request failed (500)");
}

#[tokio::test(start_paused = true)]
async fn test_toast_queue_scenario() {
    let (services, _, _) = services();
    let toast = &services.toast;

    assert_eq!(toast.show(ToastKind::Error, "", None), None);
    assert!(toast.is_empty());

    for text in ["one", "two", "three", "four"] {
        toast.info(text, None);
    }
    assert_eq!(toast.len(), 3);
    assert_eq!(toast.items()[0].text, "four");

    tokio::time::sleep(Duration::from_millis(2501)).await;
    assert!(toast.is_empty());
}

#[tokio::test]
async fn test_confirm_supersession() {
    let (services, _, _) = services();
    let broker = services.confirm.clone();

    let first = broker.confirm(ConfirmOptions::new("Delete book?").danger());
    let second = broker.confirm(ConfirmOptions::new("Delete post?"));
    assert!(!first.await);

    let accepter = broker.clone();
    let answer = tokio::spawn(second);
    tokio::task::yield_now().await;
    assert!(accepter.accept());
    assert!(answer.await.unwrap());
    assert!(!broker.is_pending());
}

#[tokio::test]
async fn test_explicit_token_wins() {
    let (services, _, transport) = services();
    transport.respond(200, LOGIN_OK).respond(200, r#"{"code":1,"data":[]}"#);
    services
        .sessions
        .reader()
        .login(&services.client, &Credentials::new("R100", "secret"))
        .await
        .unwrap();

    let request = lending_client::http::ApiRequest::get("/api/books").token("other");
    let books: Vec<serde_json::Value> = services.client.send(request).await.unwrap();

    assert!(books.is_empty());
    assert_eq!(transport.token_sent(1).as_deref(), Some("other"));
    assert_eq!(transport.requests()[1].headers.len(), 1);
}

#[tokio::test]
async fn test_session_survives_restart_with_file_storage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sessions.json");

    {
        let store = std::sync::Arc::new(FileStore::open(path.clone()).unwrap());
        let transport = std::sync::Arc::new(crate::support::ScriptedTransport::default());
        transport.respond(200, LOGIN_OK);
        let services = lending_client::services::Services::new(
            &lending_client::AppConfig::default(),
            store,
            transport,
        );
        services
            .sessions
            .reader()
            .login(&services.client, &Credentials::new("R100", "secret"))
            .await
            .unwrap();
    }

    let reopened = std::sync::Arc::new(FileStore::open(path).unwrap());
    let sessions = lending_client::services::session::Sessions::new(reopened);
    sessions.hydrate_all();
    assert_eq!(sessions.reader().token().as_deref(), Some("t-100"));
    assert_eq!(sessions.reader().profile().unwrap().display_name, "Ada");
    assert!(!sessions.admin().is_logged_in());
}
