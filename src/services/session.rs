//! Reader and administrator login sessions

use parking_lot::Mutex;
use std::sync::Arc;
use validator::Validate;

use crate::{
    api,
    error::{AppError, AppResult},
    http::ApiClient,
    models::{
        session::{Profile, Scope, Session},
        user::{Credentials, RegisterRequest},
    },
    storage::KeyValueStore,
};

#[derive(Debug, Default)]
struct SessionState {
    session: Option<Session>,
    hydrated: bool,
}

/// One scope's session, mirrored to durable storage.
///
/// Reads hydrate lazily from storage the first time; afterwards memory is
/// authoritative and only `establish`/`terminate` change it.
pub struct SessionStore {
    scope: Scope,
    storage: Arc<dyn KeyValueStore>,
    state: Mutex<SessionState>,
}

impl SessionStore {
    pub fn new(scope: Scope, storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            scope,
            storage,
            state: Mutex::new(SessionState::default()),
        }
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Load the session from storage unless that already happened
    pub fn hydrate(&self) {
        let mut state = self.state.lock();
        self.hydrate_locked(&mut state);
    }

    pub fn is_hydrated(&self) -> bool {
        self.state.lock().hydrated
    }

    fn hydrate_locked(&self, state: &mut SessionState) {
        if state.hydrated {
            return;
        }
        state.session = self.read_stored();
        state.hydrated = true;
        tracing::debug!(
            "Hydrated {} session: {}",
            self.scope,
            if state.session.is_some() { "logged in" } else { "logged out" }
        );
    }

    /// Both entries must be present and valid, otherwise there is no session
    fn read_stored(&self) -> Option<Session> {
        let token = self
            .storage
            .get(self.scope.token_key())
            .filter(|t| !t.trim().is_empty())?;
        let profile_json = self.storage.get(self.scope.profile_key())?;
        let profile = Profile::from_stored_json(self.scope, &profile_json).or_else(|| {
            tracing::warn!("Stored {} profile is unreadable, ignoring it", self.scope);
            None
        })?;
        Some(Session { token, profile })
    }

    pub fn session(&self) -> Option<Session> {
        let mut state = self.state.lock();
        self.hydrate_locked(&mut state);
        state.session.clone()
    }

    pub fn token(&self) -> Option<String> {
        self.session().map(|s| s.token)
    }

    pub fn profile(&self) -> Option<Profile> {
        self.session().map(|s| s.profile)
    }

    pub fn is_logged_in(&self) -> bool {
        let mut state = self.state.lock();
        self.hydrate_locked(&mut state);
        state.session.is_some()
    }

    /// Persist and activate a session.
    ///
    /// Storage is written first; if any write fails the previous durable
    /// token is restored and memory keeps its old value.
    pub fn establish(&self, token: impl Into<String>, profile: Profile) -> AppResult<()> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(AppError::Validation("Session token must not be empty".to_string()));
        }
        let profile_json = profile.to_stored_json(self.scope)?;

        let mut state = self.state.lock();
        let token_key = self.scope.token_key();
        let previous_token = self.storage.get(token_key);

        self.storage.set(token_key, &token)?;
        if let Err(e) = self.storage.set(self.scope.profile_key(), &profile_json) {
            let rollback = match previous_token {
                Some(old) => self.storage.set(token_key, &old),
                None => self.storage.remove(token_key),
            };
            if let Err(rollback_error) = rollback {
                tracing::warn!("Failed to roll back {} token: {}", self.scope, rollback_error);
            }
            return Err(e);
        }

        tracing::info!("{} session established for {}", self.scope, profile.identifier_code);
        state.session = Some(Session { token, profile });
        state.hydrated = true;
        Ok(())
    }

    /// Drop the session from memory and storage. Never fails: memory is
    /// always cleared and storage problems are only logged.
    pub fn terminate(&self) {
        let mut state = self.state.lock();
        self.terminate_locked(&mut state);
    }

    /// Terminate only while the current token is still `expected`. A session
    /// replaced since `expected` was read survives. Returns whether it ended.
    pub fn terminate_if_token(&self, expected: Option<&str>) -> bool {
        let mut state = self.state.lock();
        self.hydrate_locked(&mut state);
        let current = state.session.as_ref().map(|s| s.token.as_str());
        if current != expected {
            tracing::debug!("{} session changed since the request was sent, keeping it", self.scope);
            return false;
        }
        self.terminate_locked(&mut state);
        true
    }

    fn terminate_locked(&self, state: &mut SessionState) {
        state.session = None;
        state.hydrated = true;

        for key in [self.scope.token_key(), self.scope.profile_key()] {
            if let Err(e) = self.storage.remove(key) {
                tracing::warn!("Failed to remove {} from storage: {}", key, e);
            }
        }
        tracing::info!("{} session terminated", self.scope);
    }

    /// Authenticate against this scope's login endpoint and establish the
    /// session. A failed call leaves the store untouched.
    pub async fn login(&self, client: &ApiClient, credentials: &Credentials) -> AppResult<Profile> {
        credentials.validate()?;

        let (token, profile) = match self.scope {
            Scope::Reader => {
                let response = api::auth::login(client, &credentials.identifier, &credentials.password).await?;
                let profile = response.profile();
                (response.token, profile)
            }
            Scope::Admin => {
                let response =
                    api::auth::admin_login(client, &credentials.identifier, &credentials.password).await?;
                let profile = response.profile();
                (response.token, profile)
            }
        };

        self.establish(token, profile.clone())?;
        Ok(profile)
    }

    /// Create a reader account and log straight into it
    pub async fn register(&self, client: &ApiClient, request: &RegisterRequest) -> AppResult<Profile> {
        if self.scope != Scope::Reader {
            return Err(AppError::Validation(
                "Only readers can register an account".to_string(),
            ));
        }
        request.validate()?;

        let response = api::auth::register(client, request).await?;
        let profile = response.profile();
        self.establish(response.token, profile.clone())?;
        Ok(profile)
    }
}

/// The two session stores sharing one storage backend
#[derive(Clone)]
pub struct Sessions {
    reader: Arc<SessionStore>,
    admin: Arc<SessionStore>,
}

impl Sessions {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            reader: Arc::new(SessionStore::new(Scope::Reader, storage.clone())),
            admin: Arc::new(SessionStore::new(Scope::Admin, storage)),
        }
    }

    pub fn get(&self, scope: Scope) -> &Arc<SessionStore> {
        match scope {
            Scope::Reader => &self.reader,
            Scope::Admin => &self.admin,
        }
    }

    pub fn reader(&self) -> &Arc<SessionStore> {
        &self.reader
    }

    pub fn admin(&self) -> &Arc<SessionStore> {
        &self.admin
    }

    pub fn hydrate_all(&self) {
        self.reader.hydrate();
        self.admin.hydrate();
    }
}
