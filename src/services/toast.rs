//! Toast notification queue

use chrono::Utc;
use parking_lot::Mutex;
use std::{
    collections::{HashMap, VecDeque},
    sync::{Arc, Weak},
    time::Duration,
};
use tokio::{runtime::Handle, sync::watch, task::AbortHandle};
use uuid::Uuid;

use crate::{
    config::ToastConfig,
    models::toast::{ToastItem, ToastKind},
};

#[derive(Default)]
struct ToastState {
    /// Newest first
    items: VecDeque<ToastItem>,
    timers: HashMap<String, AbortHandle>,
}

struct ToastInner {
    config: ToastConfig,
    state: Mutex<ToastState>,
    snapshots: watch::Sender<Vec<ToastItem>>,
}

impl ToastInner {
    fn publish(&self, state: &ToastState) {
        self.snapshots.send_replace(state.items.iter().cloned().collect());
    }

    /// Called by a timer once its toast's time is up
    fn expire(&self, id: &str) {
        let mut state = self.state.lock();
        state.timers.remove(id);
        let before = state.items.len();
        state.items.retain(|item| item.id != id);
        if state.items.len() != before {
            self.publish(&state);
        }
    }
}

impl Drop for ToastInner {
    fn drop(&mut self) {
        for (_, timer) in self.state.get_mut().timers.drain() {
            timer.abort();
        }
    }
}

/// Bounded, newest-first queue of transient messages that dismiss
/// themselves after their duration.
#[derive(Clone)]
pub struct ToastQueue {
    inner: Arc<ToastInner>,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(ToastConfig::default())
    }
}

impl ToastQueue {
    pub fn new(config: ToastConfig) -> Self {
        let (snapshots, _) = watch::channel(Vec::new());
        Self {
            inner: Arc::new(ToastInner {
                config,
                state: Mutex::new(ToastState::default()),
                snapshots,
            }),
        }
    }

    fn capacity(&self) -> usize {
        self.inner.config.capacity.max(1)
    }

    /// Queue a message. Blank text is ignored and yields `None`.
    pub fn show(&self, kind: ToastKind, text: &str, duration_ms: Option<u64>) -> Option<String> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let item = ToastItem {
            id: Uuid::new_v4().to_string(),
            kind,
            text: text.to_string(),
            duration_ms: self.inner.config.clamp_duration(duration_ms),
            created_at: Utc::now(),
        };
        let id = item.id.clone();
        let duration = Duration::from_millis(item.duration_ms);

        let mut state = self.inner.state.lock();
        state.items.push_front(item);
        while state.items.len() > self.capacity() {
            if let Some(evicted) = state.items.pop_back() {
                if let Some(timer) = state.timers.remove(&evicted.id) {
                    timer.abort();
                }
            }
        }

        match Handle::try_current() {
            Ok(handle) => {
                let weak: Weak<ToastInner> = Arc::downgrade(&self.inner);
                let timer_id = id.clone();
                let task = handle.spawn(async move {
                    tokio::time::sleep(duration).await;
                    if let Some(inner) = weak.upgrade() {
                        inner.expire(&timer_id);
                    }
                });
                state.timers.insert(id.clone(), task.abort_handle());
            }
            Err(_) => {
                tracing::warn!("No async runtime, toast {} will not dismiss itself", id);
            }
        }

        self.inner.publish(&state);
        Some(id)
    }

    pub fn success(&self, text: &str, duration_ms: Option<u64>) -> Option<String> {
        self.show(ToastKind::Success, text, duration_ms)
    }

    pub fn error(&self, text: &str, duration_ms: Option<u64>) -> Option<String> {
        self.show(ToastKind::Error, text, duration_ms)
    }

    pub fn info(&self, text: &str, duration_ms: Option<u64>) -> Option<String> {
        self.show(ToastKind::Info, text, duration_ms)
    }

    /// Remove a toast early; unknown ids are ignored
    pub fn dismiss(&self, id: &str) {
        let mut state = self.inner.state.lock();
        if let Some(timer) = state.timers.remove(id) {
            timer.abort();
        }
        let before = state.items.len();
        state.items.retain(|item| item.id != id);
        if state.items.len() != before {
            self.inner.publish(&state);
        }
    }

    pub fn clear(&self) {
        let mut state = self.inner.state.lock();
        for (_, timer) in state.timers.drain() {
            timer.abort();
        }
        state.items.clear();
        self.inner.publish(&state);
    }

    /// Newest first
    pub fn items(&self) -> Vec<ToastItem> {
        self.inner.state.lock().items.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.inner.state.lock().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<ToastItem>> {
        self.inner.snapshots.subscribe()
    }

    #[cfg(test)]
    fn pending_timers(&self) -> usize {
        self.inner.state.lock().timers.len()
    }
}
