//! In-process session-change stream.
//!
//! Every subscriber first receives the current session, then one message per
//! change. Subscriptions detach themselves when unsubscribed or dropped.

use std::sync::{
    mpsc::{self, Receiver, Sender, TryRecvError},
    Arc, Mutex,
};

use crate::domain::session::Session;

const SESSION_SUBSCRIBER_ADDED: &str = "SESSION_SUBSCRIBER_ADDED";
const SESSION_SUBSCRIBER_REMOVED: &str = "SESSION_SUBSCRIBER_REMOVED";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionChange {
    SignedIn(Session),
    SignedOut,
}

impl From<Option<Session>> for SessionChange {
    fn from(session: Option<Session>) -> Self {
        match session {
            Some(session) => Self::SignedIn(session),
            None => Self::SignedOut,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionClosed;

#[derive(Clone, Debug, Default)]
pub struct SessionNotifier {
    inner: Arc<Mutex<NotifierState>>,
}

#[derive(Debug, Default)]
struct NotifierState {
    current: Option<Session>,
    next_subscriber_id: u64,
    subscribers: Vec<(u64, Sender<SessionChange>)>,
}

impl SessionNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn current(&self) -> Option<Session> {
        self.inner
            .lock()
            .map(|state| state.current.clone())
            .unwrap_or_default()
    }

    pub fn subscribe(&self) -> SessionSubscription {
        let (tx, rx) = mpsc::channel();
        let mut id = 0;
        if let Ok(mut state) = self.inner.lock() {
            id = state.next_subscriber_id;
            state.next_subscriber_id += 1;
            let _ = tx.send(state.current.clone().into());
            state.subscribers.push((id, tx));
        }

        tracing::debug!(
            code = SESSION_SUBSCRIBER_ADDED,
            subscriber_id = id,
            "session change subscriber added"
        );

        SessionSubscription {
            id,
            rx,
            notifier: Some(self.clone()),
        }
    }

    pub fn publish(&self, session: Option<Session>) {
        if let Ok(mut state) = self.inner.lock() {
            state.current = session.clone();
            let change = SessionChange::from(session);
            state
                .subscribers
                .retain(|(_, sub)| sub.send(change.clone()).is_ok());
        }
    }

    #[cfg(test)]
    pub fn subscriber_count(&self) -> usize {
        self.inner
            .lock()
            .map(|state| state.subscribers.len())
            .unwrap_or_default()
    }

    fn unsubscribe(&self, id: u64) {
        if let Ok(mut state) = self.inner.lock() {
            state.subscribers.retain(|(subscriber_id, _)| *subscriber_id != id);
        }

        tracing::debug!(
            code = SESSION_SUBSCRIBER_REMOVED,
            subscriber_id = id,
            "session change subscriber removed"
        );
    }
}

#[derive(Debug)]
pub struct SessionSubscription {
    id: u64,
    rx: Receiver<SessionChange>,
    notifier: Option<SessionNotifier>,
}

impl SessionSubscription {
    /// Returns the next pending change without blocking.
    pub fn try_next(&self) -> Result<Option<SessionChange>, SubscriptionClosed> {
        match self.rx.try_recv() {
            Ok(change) => Ok(Some(change)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(SubscriptionClosed),
        }
    }

    pub fn unsubscribe(mut self) {
        self.detach();
    }

    fn detach(&mut self) {
        if let Some(notifier) = self.notifier.take() {
            notifier.unsubscribe(self.id);
        }
    }
}

impl Drop for SessionSubscription {
    fn drop(&mut self) {
        self.detach();
    }
}
