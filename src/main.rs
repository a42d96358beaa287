//! Lending Client demo
//!
//! Walks the public catalog, optionally logs a reader in and lists their
//! loans, reporting through the toast queue.

use tokio_stream::StreamExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lending_client::{
    api,
    config::AppConfig,
    models::{book::BookQuery, user::Credentials},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("lending_client={}", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting Lending Client v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::init(config)?;
    let services = state.services.clone();

    // Report expired sessions; the UI layer decides where to send the user
    let mut expired = services.events.stream();
    let toast = services.toast.clone();
    let listener = tokio::spawn(async move {
        while let Some(event) = expired.next().await {
            match event {
                Ok(event) => {
                    tracing::warn!("{} session expired", event.scope);
                    toast.error("Your session has expired, please sign in again", None);
                }
                Err(e) => tracing::warn!("Missed session events: {}", e),
            }
        }
    });

    let client = &services.client;
    let reader = services.sessions.reader();

    if let (Some(code), Some(password)) = (&state.config.demo.reader_code, &state.config.demo.reader_password) {
        match reader.login(client, &Credentials::new(code.as_str(), password.as_str())).await {
            Ok(profile) => {
                services.toast.success(&format!("Welcome, {}", profile.display_name), None);
            }
            Err(e) => {
                tracing::warn!("Login failed: {}", e);
                services.toast.error(&e.to_string(), None);
            }
        }
    }

    match api::books::list_categories(client).await {
        Ok(categories) => tracing::info!("Categories: {}", categories.join(", ")),
        Err(e) => tracing::warn!("Failed to list categories: {}", e),
    }

    match api::books::list_books(client, &BookQuery::default()).await {
        Ok(books) => {
            for book in &books {
                tracing::info!(
                    "#{} {} ({}) {}",
                    book.id,
                    book.title,
                    book.author.as_deref().unwrap_or("unknown author"),
                    if book.is_available() { "available" } else { "out" }
                );
            }
            services.toast.info(&format!("{} books in the catalog", books.len()), None);
        }
        Err(e) => {
            services.toast.error(&e.to_string(), None);
        }
    }

    if reader.is_logged_in() {
        match api::borrow::list_current_borrowed(client).await {
            Ok(loans) => {
                let now = chrono::Local::now().naive_local();
                for loan in &loans {
                    tracing::info!(
                        "Loan {}: {} due {}{}",
                        loan.record_id,
                        loan.title,
                        loan.due_at,
                        if loan.is_overdue(now) { " (overdue)" } else { "" }
                    );
                }
            }
            Err(e) => {
                services.toast.error(&e.to_string(), None);
            }
        }
    }

    for item in services.toast.items() {
        tracing::info!("[{:?}] {}", item.kind, item.text);
    }

    state.shutdown();
    listener.abort();
    tracing::info!("Done");

    Ok(())
}
