//! Client-side services

pub mod confirm;
pub mod events;
pub mod session;
pub mod toast;

use std::sync::Arc;

use crate::{
    config::AppConfig,
    error::AppResult,
    http::{ApiClient, HttpTransport, ReqwestTransport},
    storage::{self, KeyValueStore},
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub sessions: session::Sessions,
    pub events: events::SessionEvents,
    pub client: ApiClient,
    pub toast: toast::ToastQueue,
    pub confirm: confirm::ConfirmBroker,
}

impl Services {
    /// Wire the services around an existing storage backend and transport
    pub fn new(
        config: &AppConfig,
        storage: Arc<dyn KeyValueStore>,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        let sessions = session::Sessions::new(storage);
        let events = events::SessionEvents::default();
        let client = ApiClient::new(transport, sessions.clone(), events.clone());

        Self {
            sessions,
            events,
            client,
            toast: toast::ToastQueue::new(config.toast),
            confirm: confirm::ConfirmBroker::new(),
        }
    }

    /// Build the configured storage backend and the `reqwest` transport
    pub fn init(config: &AppConfig) -> AppResult<Self> {
        let storage = storage::open(&config.storage)?;
        let transport = Arc::new(ReqwestTransport::new(&config.api)?);
        tracing::info!("API client targeting {}", config.api.base_url);
        Ok(Self::new(config, storage, transport))
    }

    /// Restore both sessions from storage
    pub fn hydrate(&self) {
        self.sessions.hydrate_all();
    }

    /// Release pending confirmations and drop queued toasts
    pub fn shutdown(&self) {
        self.confirm.shutdown();
        self.toast.clear();
    }
}
