//! Bounded per-session message log, scratch state, and an idle sweeper.

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use dashmap::DashMap;
use explore_core::{Message, SessionKey};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

pub const MAX_LOG_LEN: usize = 40;
const IDLE_TIMEOUT_MINUTES: i64 = 30;
const SWEEP_INTERVAL_SECS: u64 = 300;

pub struct Session {
    pub key: SessionKey,
    messages: RwLock<VecDeque<Message>>,
    scratch: RwLock<HashMap<String, serde_json::Value>>,
    pub created_at: DateTime<Utc>,
    last_active: RwLock<DateTime<Utc>>,
}

impl Session {
    fn new(key: SessionKey) -> Self {
        let now = Utc::now();
        Self {
            key,
            messages: RwLock::new(VecDeque::new()),
            scratch: RwLock::new(HashMap::new()),
            created_at: now,
            last_active: RwLock::new(now),
        }
    }

    async fn touch(&self) {
        *self.last_active.write().await = Utc::now();
    }

    pub async fn last_active(&self) -> DateTime<Utc> {
        *self.last_active.read().await
    }

    /// Append a message, evicting the oldest entries past `MAX_LOG_LEN`.
    pub async fn append(&self, message: Message) {
        self.touch().await;
        let mut log = self.messages.write().await;
        log.push_back(message);
        while log.len() > MAX_LOG_LEN {
            log.pop_front();
        }
    }

    /// The most recent `2 * max_rounds` messages (a "round" is one user
    /// turn plus its assistant reply), falling back to a sane default when
    /// `max_rounds` is non-positive.
    pub async fn recent(&self, max_rounds: i64) -> Vec<Message> {
        self.touch().await;
        let max_rounds = if max_rounds <= 0 { 20 } else { max_rounds };
        let cap = (2 * max_rounds) as usize;
        let log = self.messages.read().await;
        let skip = log.len().saturating_sub(cap);
        log.iter().skip(skip).cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.messages.read().await.len()
    }

    pub async fn set_scratch(&self, key: impl Into<String>, value: serde_json::Value) {
        self.scratch.write().await.insert(key.into(), value);
    }

    pub async fn get_scratch(&self, key: &str) -> Option<serde_json::Value> {
        self.scratch.read().await.get(key).cloned()
    }
}

pub struct SessionStore {
    sessions: DashMap<SessionKey, Arc<Session>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    pub fn touch_or_create(&self, key: &SessionKey) -> Arc<Session> {
        self.sessions
            .entry(key.clone())
            .or_insert_with(|| Arc::new(Session::new(key.clone())))
            .clone()
    }

    pub fn get(&self, key: &SessionKey) -> Option<Arc<Session>> {
        self.sessions.get(key).map(|s| s.clone())
    }

    pub fn remove(&self, key: &SessionKey) -> Option<Arc<Session>> {
        self.sessions.remove(key).map(|(_, s)| s)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Evict sessions whose last activity is older than the idle timeout.
    /// Returns the number of sessions evicted.
    pub async fn sweep_idle(&self) -> usize {
        let mut stale = Vec::new();
        for entry in self.sessions.iter() {
            let last = entry.value().last_active().await;
            if Utc::now() - last > ChronoDuration::minutes(IDLE_TIMEOUT_MINUTES) {
                stale.push(entry.key().clone());
            }
        }
        for key in &stale {
            self.sessions.remove(key);
        }
        if !stale.is_empty() {
            info!(evicted = stale.len(), "swept idle sessions");
        }
        stale.len()
    }

    /// Spawn the background idle sweeper. Dropping the returned handle
    /// stops it.
    pub fn spawn_sweeper(self: &Arc<Self>) -> tokio::task::JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(std::time::Duration::from_secs(
                SWEEP_INTERVAL_SECS,
            ));
            loop {
                interval.tick().await;
                store.sweep_idle().await;
            }
        })
    }
}
