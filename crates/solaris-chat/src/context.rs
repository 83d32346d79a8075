//! Dialogue state store.
//!
//! Keeps one [`DialogueState`] per user. The outer map lock is only held to
//! find or create a user's entry; each entry has its own lock that is held for
//! a whole turn, so turns for one user serialize while different users run in
//! parallel. With a timeout configured, expired sessions are evicted whenever
//! a new user's entry is created, so the map does not grow without bound.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use tracing::{debug, warn};

use crate::types::DialogueState;

#[derive(Debug, Default)]
struct SessionEntry {
    state: DialogueState,
    /// Epoch seconds of the last completed turn.
    last_message_at: i64,
}

/// Per-user session store.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<String, Arc<Mutex<SessionEntry>>>>,
    /// Idle sessions older than this are reset. 0 disables expiry.
    session_timeout_minutes: u32,
}

impl SessionStore {
    /// Store whose sessions never expire.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(session_timeout_minutes: u32) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            session_timeout_minutes,
        }
    }

    /// Current state of a user's session, `Idle` if none exists or it expired.
    pub fn get(&self, user_id: &str) -> DialogueState {
        let Some(entry) = self.sessions().get(user_id).cloned() else {
            return DialogueState::Idle;
        };
        let entry = lock_entry(&entry);
        if self.is_expired(&entry) {
            DialogueState::Idle
        } else {
            entry.state.clone()
        }
    }

    /// Replace a user's session state.
    pub fn set(&self, user_id: &str, state: DialogueState) {
        self.with_session(user_id, |current| *current = state);
    }

    /// Run one read-modify-write turn on a user's session.
    ///
    /// The session is created on first use. An expired session is reset to
    /// `Idle` before `f` runs; the activity timestamp is refreshed after.
    pub fn with_session<F, T>(&self, user_id: &str, f: F) -> T
    where
        F: FnOnce(&mut DialogueState) -> T,
    {
        let entry = self.entry(user_id);
        let mut entry = lock_entry(&entry);

        if self.is_expired(&entry) {
            debug!(user_id, "Session expired, resetting to idle");
            entry.state = DialogueState::Idle;
        }

        let result = f(&mut entry.state);
        entry.last_message_at = Utc::now().timestamp();
        result
    }

    /// Number of tracked sessions.
    pub fn len(&self) -> usize {
        self.sessions().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn entry(&self, user_id: &str) -> Arc<Mutex<SessionEntry>> {
        let mut sessions = self.sessions();
        if let Some(entry) = sessions.get(user_id) {
            return Arc::clone(entry);
        }
        self.evict_expired(&mut sessions);
        let entry = Arc::new(Mutex::new(SessionEntry {
            state: DialogueState::Idle,
            last_message_at: Utc::now().timestamp(),
        }));
        sessions.insert(user_id.to_string(), Arc::clone(&entry));
        entry
    }

    /// Drop expired entries. Handles are only cloned under the map lock, so an
    /// entry whose `Arc` is not shared has no turn in flight.
    fn evict_expired(&self, sessions: &mut HashMap<String, Arc<Mutex<SessionEntry>>>) {
        if self.session_timeout_minutes == 0 {
            return;
        }
        let before = sessions.len();
        sessions.retain(|_, entry| {
            Arc::strong_count(entry) > 1 || !self.is_expired(&lock_entry(entry))
        });
        let evicted = before - sessions.len();
        if evicted > 0 {
            debug!(evicted, "Evicted expired sessions");
        }
    }

    fn sessions(&self) -> MutexGuard<'_, HashMap<String, Arc<Mutex<SessionEntry>>>> {
        self.sessions.lock().unwrap_or_else(|poisoned| {
            warn!("Session map lock poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Move a session's last activity `secs` into the past.
    #[cfg(test)]
    pub(crate) fn backdate(&self, user_id: &str, secs: i64) {
        let entry = self.entry(user_id);
        lock_entry(&entry).last_message_at -= secs;
    }

    fn is_expired(&self, entry: &SessionEntry) -> bool {
        if self.session_timeout_minutes == 0 {
            return false;
        }
        let timeout_secs = i64::from(self.session_timeout_minutes) * 60;
        Utc::now().timestamp() - entry.last_message_at > timeout_secs
    }
}

/// A panic mid-turn cannot leave an invalid state behind, so poisoned session
/// locks are recovered.
fn lock_entry(entry: &Mutex<SessionEntry>) -> MutexGuard<'_, SessionEntry> {
    entry.lock().unwrap_or_else(PoisonError::into_inner)
}
