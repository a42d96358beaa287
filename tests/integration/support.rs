//! Scripted transport shared by the scenario tests

use async_trait::async_trait;
use parking_lot::Mutex;
use std::{collections::VecDeque, sync::Arc};

use lending_client::{
    config::AppConfig,
    http::{ApiRequest, HttpTransport, RawResponse},
    services::Services,
    storage::MemoryStore,
    AppError, AppResult,
};

/// Replays canned responses in order and records every request
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<RawResponse>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn respond(&self, status: u16, body: &str) -> &Self {
        self.responses.lock().push_back(RawResponse::new(status, body));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().clone()
    }

    pub fn token_sent(&self, index: usize) -> Option<String> {
        self.requests
            .lock()
            .get(index)?
            .headers
            .iter()
            .find(|(name, _)| name == "token")
            .map(|(_, value)| value.clone())
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn execute(&self, request: ApiRequest) -> AppResult<RawResponse> {
        self.requests.lock().push(request);
        self.responses
            .lock()
            .pop_front()
            .ok_or_else(|| AppError::Network("no scripted response left".to_string()))
    }
}

pub fn services() -> (Services, Arc<MemoryStore>, Arc<ScriptedTransport>) {
    let storage = Arc::new(MemoryStore::new());
    let transport = Arc::new(ScriptedTransport::default());
    let services = Services::new(&AppConfig::default(), storage.clone(), transport.clone());
    (services, storage, transport)
}
