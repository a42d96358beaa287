//! Single-flight confirmation dialogs

use parking_lot::Mutex;
use std::{
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};
use tokio::sync::{oneshot, watch};

use crate::models::confirm::{ConfirmOptions, ConfirmRequest};

struct Pending {
    request: ConfirmRequest,
    responder: oneshot::Sender<bool>,
}

struct BrokerInner {
    pending: Mutex<Option<Pending>>,
    current: watch::Sender<Option<ConfirmRequest>>,
}

/// Hands out at most one open confirmation at a time.
///
/// Asking again while a request is open answers the open one with `false`
/// before replacing it.
#[derive(Clone)]
pub struct ConfirmBroker {
    inner: Arc<BrokerInner>,
}

impl Default for ConfirmBroker {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfirmBroker {
    pub fn new() -> Self {
        let (current, _) = watch::channel(None);
        Self {
            inner: Arc::new(BrokerInner {
                pending: Mutex::new(None),
                current,
            }),
        }
    }

    /// Open a confirmation and get the future of its answer
    pub fn confirm(&self, options: ConfirmOptions) -> Confirmation {
        let request = ConfirmRequest::from(options);
        let (responder, receiver) = oneshot::channel();

        let mut pending = self.inner.pending.lock();
        if let Some(previous) = pending.take() {
            tracing::debug!("Superseding confirmation: {}", previous.request.message);
            let _ = previous.responder.send(false);
        }
        *pending = Some(Pending {
            request: request.clone(),
            responder,
        });
        self.inner.current.send_replace(Some(request));

        Confirmation { receiver }
    }

    fn resolve(&self, answer: bool) -> bool {
        let mut pending = self.inner.pending.lock();
        match pending.take() {
            Some(open) => {
                // The caller may have stopped waiting; that is not an error
                let _ = open.responder.send(answer);
                self.inner.current.send_replace(None);
                true
            }
            None => false,
        }
    }

    /// Answer the open request with `true`; `false` if nothing was open
    pub fn accept(&self) -> bool {
        self.resolve(true)
    }

    /// Answer the open request with `false`; `false` if nothing was open
    pub fn cancel(&self) -> bool {
        self.resolve(false)
    }

    pub fn current(&self) -> Option<ConfirmRequest> {
        self.inner
            .pending
            .lock()
            .as_ref()
            .map(|open| open.request.clone())
    }

    pub fn is_pending(&self) -> bool {
        self.inner.pending.lock().is_some()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<ConfirmRequest>> {
        self.inner.current.subscribe()
    }

    /// Release whoever is still waiting
    pub fn shutdown(&self) {
        if self.cancel() {
            tracing::info!("Open confirmation cancelled on shutdown");
        }
    }
}

/// Answer to a confirmation; resolves `false` if it is superseded,
/// cancelled or abandoned.
#[must_use = "a confirmation does nothing unless awaited"]
pub struct Confirmation {
    receiver: oneshot::Receiver<bool>,
}

impl Future for Confirmation {
    type Output = bool;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<bool> {
        Pin::new(&mut self.receiver)
            .poll(cx)
            .map(|answer| answer.unwrap_or(false))
    }
}
