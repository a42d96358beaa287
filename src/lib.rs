//! Lending Client
//!
//! Client library for the book-lending web service: session handling for
//! readers and administrators, the authenticated request client, typed
//! endpoint calls and the toast and confirmation primitives a UI builds on.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod services;
pub mod storage;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across the UI layer
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Build every service from configuration and restore stored sessions
    pub fn init(config: AppConfig) -> AppResult<Self> {
        let services = services::Services::init(&config)?;
        services.hydrate();

        Ok(Self {
            config: Arc::new(config),
            services: Arc::new(services),
        })
    }

    pub fn shutdown(&self) {
        self.services.shutdown();
    }
}
