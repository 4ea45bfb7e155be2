use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use crate::config::SESSION_IDLE_MINUTES;
use super::VisitorSession;

struct Entry {
    session: VisitorSession,
    last_seen: Instant,
}

struct StoreInner {
    entries: HashMap<String, Entry>,
    idle: Duration,
}

impl StoreInner {
    fn sweep(&mut self) {
        let idle = self.idle;
        self.entries.retain(|_, e| e.last_seen.elapsed() < idle);
    }
}

/// In-memory visitor sessions, evicted after a period of inactivity.
///
/// The lock is only ever taken inside synchronous closures, never across an await.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(Duration::from_secs(SESSION_IDLE_MINUTES as u64 * 60))
    }
}

impl SessionStore {
    pub fn new(idle: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(StoreInner {
                entries: HashMap::new(),
                idle,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        // A panic inside a closure must not take every visitor down with it
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Register a fresh session under `sid`, sweeping expired ones first.
    pub fn insert(&self, sid: String) {
        let mut inner = self.lock();
        inner.sweep();
        inner.entries.insert(
            sid,
            Entry {
                session: VisitorSession::default(),
                last_seen: Instant::now(),
            },
        );
    }

    pub fn contains(&self, sid: &str) -> bool {
        let inner = self.lock();
        inner
            .entries
            .get(sid)
            .map_or(false, |e| e.last_seen.elapsed() < inner.idle)
    }

    /// Run `f` against a live session and refresh its idle timer.
    /// Returns `None` when the session is unknown or has expired.
    pub fn with<R>(&self, sid: &str, f: impl FnOnce(&mut VisitorSession) -> R) -> Option<R> {
        let mut inner = self.lock();
        let idle = inner.idle;
        let entry = inner.entries.get_mut(sid)?;
        if entry.last_seen.elapsed() >= idle {
            inner.entries.remove(sid);
            return None;
        }
        entry.last_seen = Instant::now();
        Some(f(&mut entry.session))
    }

    pub fn snapshot(&self, sid: &str) -> Option<VisitorSession> {
        self.with(sid, |s| s.clone())
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Puts a session back to a resting state if a submission is abandoned mid-flight
/// (dropped future, cancellation). Call [`SubmitGuard::disarm`] once the outcome
/// has been recorded.
pub struct SubmitGuard {
    store: SessionStore,
    sid: String,
    reset: fn(&mut VisitorSession),
    armed: bool,
}

impl SubmitGuard {
    pub fn new(store: &SessionStore, sid: &str, reset: fn(&mut VisitorSession)) -> Self {
        Self {
            store: store.clone(),
            sid: sid.to_string(),
            reset,
            armed: true,
        }
    }

    pub fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for SubmitGuard {
    fn drop(&mut self) {
        if self.armed {
            tracing::debug!(sid = %self.sid, "Submission abandoned; resetting form");
            self.store.with(&self.sid, self.reset);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BillingCycle;

    #[test]
    fn with_reaches_live_session() {
        let store = SessionStore::default();
        store.insert("abc".into());
        store.with("abc", |s| s.billing = BillingCycle::Yearly);
        assert_eq!(store.snapshot("abc").unwrap().billing, BillingCycle::Yearly);
    }

    #[test]
    fn unknown_session_is_none() {
        let store = SessionStore::default();
        assert!(store.with("nope", |_| ()).is_none());
        assert!(!store.contains("nope"));
    }

    #[test]
    fn expired_sessions_are_dropped() {
        let store = SessionStore::new(Duration::ZERO);
        store.insert("abc".into());
        assert!(!store.contains("abc"));
        assert!(store.with("abc", |_| ()).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn guard_resets_unless_disarmed() {
        let store = SessionStore::default();
        store.insert("abc".into());
        store.with("abc", |s| s.lead.phase.begin().unwrap());
        {
            let _guard = SubmitGuard::new(&store, "abc", |s| s.lead.phase.abandon());
        }
        assert!(!store.snapshot("abc").unwrap().lead.phase.is_submitting());

        store.with("abc", |s| s.lead.phase.begin().unwrap());
        let guard = SubmitGuard::new(&store, "abc", |s| s.lead.phase.abandon());
        guard.disarm();
        assert!(store.snapshot("abc").unwrap().lead.phase.is_submitting());
    }
}
