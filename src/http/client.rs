//! Session-aware request client

use serde::de::DeserializeOwned;
use std::sync::Arc;

use super::{
    envelope::{self, Envelope},
    request::{ApiRequest, TOKEN_HEADER},
    transport::HttpTransport,
};
use crate::{
    error::{AppError, AppResult, SESSION_EXPIRED_MESSAGE},
    services::{events::SessionEvents, session::Sessions},
};

/// HTTP status that terminates the owning session
const UNAUTHORIZED: u16 = 401;

/// Issues requests with the right session token and turns 401s into
/// session expiry
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn HttpTransport>,
    sessions: Sessions,
    events: SessionEvents,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn HttpTransport>, sessions: Sessions, events: SessionEvents) -> Self {
        Self {
            transport,
            sessions,
            events,
        }
    }

    pub fn sessions(&self) -> &Sessions {
        &self.sessions
    }

    pub fn events(&self) -> &SessionEvents {
        &self.events
    }

    /// Perform one exchange and decode the envelope payload as `T`.
    ///
    /// Use `T = ()` for commands whose envelope carries no data.
    pub async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> AppResult<T> {
        let scope = request.effective_scope();
        let store = self.sessions.get(scope);

        // Token the session held when the request left; a 401 only ends that session
        let session_token = store.token();
        let mut request = request;
        if !request.has_header(TOKEN_HEADER) {
            if let Some(token) = session_token.clone() {
                request = request.token(token);
            }
        }

        tracing::debug!("{} {} [{}]", request.method, request.path, scope);
        let response = self.transport.execute(request).await?;

        if response.status == UNAUTHORIZED {
            let message = Envelope::parse(&response.body)
                .and_then(|e| e.message().map(String::from))
                .unwrap_or_else(|| SESSION_EXPIRED_MESSAGE.to_string());

            tracing::warn!("Backend rejected the {} session: {}", scope, message);
            store.terminate_if_token(session_token.as_deref());
            self.events.emit_expired(scope);

            return Err(AppError::SessionExpired { scope, message });
        }

        envelope::decode(response.status, &response.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        http::transport::{MockHttpTransport, RawResponse},
        models::session::{Profile, Scope},
        storage::{KeyValueStore, MemoryStore},
    };
    use mockall::predicate::function;
    use serde_json::{json, Value};

    fn profile() -> Profile {
        Profile {
            id: 1,
            display_name: "Ada".to_string(),
            identifier_code: "R100".to_string(),
        }
    }

    fn client_with(transport: MockHttpTransport) -> (ApiClient, Arc<MemoryStore>) {
        let storage = Arc::new(MemoryStore::new());
        let sessions = Sessions::new(storage.clone());
        let client = ApiClient::new(Arc::new(transport), sessions, SessionEvents::default());
        (client, storage)
    }

    fn token_of(request: &ApiRequest) -> Option<&str> {
        request
            .headers
            .iter()
            .find(|(name, _)| name == TOKEN_HEADER)
            .map(|(_, value)| value.as_str())
    }

    #[tokio::test]
    async fn test_attaches_scope_token() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_execute()
            .with(function(|r: &ApiRequest| token_of(r) == Some("admin-token")))
            .times(1)
            .returning(|_| Ok(RawResponse::new(200, r#"{"code":1,"data":[]}"#)));
        let (client, _) = client_with(transport);
        client.sessions().admin().establish("admin-token", profile()).unwrap();
        client.sessions().reader().establish("reader-token", profile()).unwrap();

        let books: Vec<Value> = client.send(ApiRequest::get("/admin/books")).await.unwrap();
        assert!(books.is_empty());
    }

    #[tokio::test]
    async fn test_explicit_token_wins() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_execute()
            .with(function(|r: &ApiRequest| {
                r.headers.iter().filter(|(n, _)| n == TOKEN_HEADER).count() == 1
                    && token_of(r) == Some("")
            }))
            .times(1)
            .returning(|_| Ok(RawResponse::new(200, r#"{"code":1}"#)));
        let (client, _) = client_with(transport);
        client.sessions().reader().establish("reader-token", profile()).unwrap();

        client.send::<()>(ApiRequest::get("/api/books").token("")).await.unwrap();
    }

    #[tokio::test]
    async fn test_no_token_when_logged_out() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_execute()
            .with(function(|r: &ApiRequest| token_of(r).is_none()))
            .times(1)
            .returning(|_| Ok(RawResponse::new(200, r#"{"code":1,"data":"ok"}"#)));
        let (client, _) = client_with(transport);

        let value: String = client.send(ApiRequest::get("/api/books")).await.unwrap();
        assert_eq!(value, "ok");
    }

    #[tokio::test]
    async fn test_unauthorized_terminates_owning_session_only() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_execute()
            .times(1)
            .returning(|_| Ok(RawResponse::new(401, r#"{"code":0,"msg":"NOT_LOGIN"}"#)));
        let (client, storage) = client_with(transport);
        client.sessions().reader().establish("reader-token", profile()).unwrap();
        client.sessions().admin().establish("admin-token", profile()).unwrap();
        let mut events = client.events().subscribe();

        let err = client
            .send::<Value>(ApiRequest::get("/admin/users"))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            AppError::SessionExpired { scope: Scope::Admin, message: "NOT_LOGIN".to_string() }
        );
        assert!(!client.sessions().admin().is_logged_in());
        assert_eq!(storage.get("lib_admin_token"), None);
        assert_eq!(storage.get("lib_admin_user"), None);
        assert!(client.sessions().reader().is_logged_in());
        assert_eq!(storage.get("lib_token").as_deref(), Some("reader-token"));

        assert_eq!(events.try_recv().unwrap().scope, Scope::Admin);
        assert!(events.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_late_unauthorized_keeps_a_newer_session() {
        let storage = Arc::new(MemoryStore::new());
        let sessions = Sessions::new(storage.clone());
        sessions.reader().establish("stale", profile()).unwrap();

        // The user signs in again while the old request is still in flight
        let relogin = sessions.clone();
        let mut transport = MockHttpTransport::new();
        transport
            .expect_execute()
            .with(function(|r: &ApiRequest| token_of(r) == Some("stale")))
            .times(1)
            .returning(move |_| {
                relogin.reader().establish("fresh", profile()).unwrap();
                Ok(RawResponse::new(401, r#"{"code":0,"msg":"NOT_LOGIN"}"#))
            });
        let client = ApiClient::new(Arc::new(transport), sessions, SessionEvents::default());
        let mut events = client.events().subscribe();

        let err = client.send::<()>(ApiRequest::get("/api/user/me")).await.unwrap_err();

        assert_eq!(err.expired_scope(), Some(Scope::Reader));
        assert_eq!(client.sessions().reader().token().as_deref(), Some("fresh"));
        assert_eq!(storage.get("lib_token").as_deref(), Some("fresh"));
        assert_eq!(events.try_recv().unwrap().scope, Scope::Reader);
    }

    #[tokio::test]
    async fn test_unauthorized_without_envelope_uses_default_message() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_execute()
            .returning(|_| Ok(RawResponse::new(401, "")));
        let (client, _) = client_with(transport);

        let err = client.send::<()>(ApiRequest::get("/api/user/me")).await.unwrap_err();
        assert_eq!(err.expired_scope(), Some(Scope::Reader));
        assert_eq!(err.to_string(), SESSION_EXPIRED_MESSAGE);
    }

    #[tokio::test]
    async fn test_other_failures_leave_sessions_alone() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_execute()
            .times(3)
            .returning(|r: ApiRequest| {
                Ok(match r.path.as_str() {
                    "/api/a" => RawResponse::new(403, r#"{"code":0,"msg":"Forbidden"}"#),
                    "/api/b" => RawResponse::new(200, r#"{"code":0,"msg":"Limit reached"}"#),
                    _ => RawResponse::new(200, "oops"),
                })
            });
        let (client, _) = client_with(transport);
        client.sessions().reader().establish("reader-token", profile()).unwrap();
        let mut events = client.events().subscribe();

        let a = client.send::<()>(ApiRequest::get("/api/a")).await.unwrap_err();
        let b = client.send::<()>(ApiRequest::get("/api/b")).await.unwrap_err();
        let c = client.send::<()>(ApiRequest::get("/api/c")).await.unwrap_err();

        assert!(matches!(a, AppError::Transport { status: 403, .. }));
        assert!(matches!(b, AppError::Business { .. }));
        assert!(matches!(c, AppError::MalformedResponse(_)));
        assert!(client.sessions().reader().is_logged_in());
        assert!(events.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_network_errors_propagate() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_execute()
            .returning(|_| Err(AppError::Network("connection refused".to_string())));
        let (client, _) = client_with(transport);

        let err = client
            .send::<()>(ApiRequest::post("/api/borrow/borrow").json(&json!({"bookId": 1})).unwrap())
            .await
            .unwrap_err();
        assert!(err.is_transport());
    }
}
