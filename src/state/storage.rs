//! Session storage implementation
//!
//! Sessions map a Telegram user id to the scenario that user selected.
//! Two backends are available: a bounded in-process map with idle expiry
//! and least-recently-used eviction, and Redis with key expiry.

use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use redis::AsyncCommands;
use tokio::sync::Mutex;
use tracing::{debug, warn, error, info};
use crate::config::{SessionBackendKind, SessionConfig};
use crate::utils::errors::{EngChatBotError, Result};
use super::scenarios::Scenario;

/// Storage backend for user sessions
#[async_trait]
pub trait SessionBackend: Send + Sync {
    /// Load the stored scenario for a user, if any
    async fn load(&self, user_id: i64) -> Result<Option<Scenario>>;

    /// Store the scenario for a user, replacing any previous value
    async fn save(&self, user_id: i64, scenario: Scenario) -> Result<()>;

    /// Number of live sessions
    async fn len(&self) -> Result<usize>;

    /// Short backend name for logs
    fn name(&self) -> &'static str;
}

#[derive(Debug, Clone)]
struct SessionEntry {
    scenario: Scenario,
    last_seen: DateTime<Utc>,
    last_used: u64,
}

#[derive(Debug, Default)]
struct MemoryState {
    entries: HashMap<i64, SessionEntry>,
    tick: u64,
}

impl MemoryState {
    fn next_tick(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }

    fn purge_expired(&mut self, ttl: Duration, now: DateTime<Utc>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| now - entry.last_seen < ttl);
        before - self.entries.len()
    }

    fn evict_least_recently_used(&mut self) -> Option<i64> {
        let user_id = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_used)
            .map(|(user_id, _)| *user_id)?;
        self.entries.remove(&user_id);
        Some(user_id)
    }
}

/// In-process session backend bounded by capacity and idle TTL
#[derive(Debug)]
pub struct MemorySessionBackend {
    state: Mutex<MemoryState>,
    capacity: usize,
    ttl: Duration,
}

impl MemorySessionBackend {
    /// Create a new memory backend
    pub fn new(capacity: usize, ttl: std::time::Duration) -> Self {
        Self {
            state: Mutex::new(MemoryState::default()),
            capacity: capacity.max(1),
            ttl: Duration::from_std(ttl).unwrap_or_else(|_| Duration::days(36_500)),
        }
    }
}

#[async_trait]
impl SessionBackend for MemorySessionBackend {
    async fn load(&self, user_id: i64) -> Result<Option<Scenario>> {
        let mut state = self.state.lock().await;
        let now = Utc::now();
        let tick = state.next_tick();

        let expired = match state.entries.get_mut(&user_id) {
            Some(entry) if now - entry.last_seen < self.ttl => {
                entry.last_seen = now;
                entry.last_used = tick;
                return Ok(Some(entry.scenario));
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            debug!(user_id = user_id, "Session expired, removing");
            state.entries.remove(&user_id);
        }

        Ok(None)
    }

    async fn save(&self, user_id: i64, scenario: Scenario) -> Result<()> {
        let mut state = self.state.lock().await;
        let now = Utc::now();

        if !state.entries.contains_key(&user_id) && state.entries.len() >= self.capacity {
            let purged = state.purge_expired(self.ttl, now);
            if purged > 0 {
                debug!(purged = purged, "Purged expired sessions");
            }
            if state.entries.len() >= self.capacity {
                if let Some(evicted) = state.evict_least_recently_used() {
                    debug!(evicted_user_id = evicted, capacity = self.capacity, "Evicted least recently used session");
                }
            }
        }

        let tick = state.next_tick();
        state.entries.insert(user_id, SessionEntry {
            scenario,
            last_seen: now,
            last_used: tick,
        });

        Ok(())
    }

    async fn len(&self) -> Result<usize> {
        let mut state = self.state.lock().await;
        state.purge_expired(self.ttl, Utc::now());
        Ok(state.entries.len())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

/// Redis-backed session storage
#[derive(Clone)]
pub struct RedisSessionBackend {
    /// Redis connection manager
    connection_manager: redis::aio::ConnectionManager,
    prefix: String,
    ttl_seconds: u64,
}

impl RedisSessionBackend {
    /// Connect to Redis
    pub async fn new(url: &str, prefix: impl Into<String>, ttl_seconds: u64) -> Result<Self> {
        let client = redis::Client::open(url)?;
        let connection_manager = redis::aio::ConnectionManager::new(client).await?;

        Ok(Self {
            connection_manager,
            prefix: prefix.into(),
            ttl_seconds,
        })
    }

    /// Test Redis connection
    pub async fn test_connection(&self) -> Result<()> {
        let mut conn = self.connection_manager.clone();
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }

    fn session_key(&self, user_id: i64) -> String {
        session_key(&self.prefix, user_id)
    }
}

/// Redis key holding a user's session
fn session_key(prefix: &str, user_id: i64) -> String {
    format!("{}session:{}", prefix, user_id)
}

#[async_trait]
impl SessionBackend for RedisSessionBackend {
    async fn load(&self, user_id: i64) -> Result<Option<Scenario>> {
        let key = self.session_key(user_id);
        let mut conn = self.connection_manager.clone();

        // GETEX reads the tag and refreshes the idle expiry in one round trip
        let stored: Option<String> = match redis::cmd("GETEX")
            .arg(&key)
            .arg("EX")
            .arg(self.ttl_seconds)
            .query_async(&mut conn)
            .await
        {
            Ok(data) => data,
            Err(e) => {
                error!(user_id = user_id, error = %e, "Failed to get session from Redis");
                return Err(e.into());
            }
        };

        Ok(stored.map(|tag| Scenario::from_tag(&tag)))
    }

    async fn save(&self, user_id: i64, scenario: Scenario) -> Result<()> {
        let key = self.session_key(user_id);
        let mut conn = self.connection_manager.clone();

        match conn.set_ex::<_, _, ()>(&key, scenario.tag(), self.ttl_seconds).await {
            Ok(_) => {
                debug!(user_id = user_id, ttl_seconds = self.ttl_seconds, "Session saved to Redis");
                Ok(())
            }
            Err(e) => {
                error!(user_id = user_id, error = %e, "Failed to save session to Redis");
                Err(e.into())
            }
        }
    }

    async fn len(&self) -> Result<usize> {
        let pattern = format!("{}session:*", self.prefix);
        let mut conn = self.connection_manager.clone();
        let keys: Vec<String> = conn.keys(&pattern).await?;
        Ok(keys.len())
    }

    fn name(&self) -> &'static str {
        "redis"
    }
}

impl std::fmt::Debug for RedisSessionBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisSessionBackend")
            .field("prefix", &self.prefix)
            .field("ttl_seconds", &self.ttl_seconds)
            .finish_non_exhaustive()
    }
}

/// Per-user scenario store shared by all handlers
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn SessionBackend>,
}

impl SessionStore {
    /// Wrap an arbitrary backend
    pub fn with_backend(backend: Arc<dyn SessionBackend>) -> Self {
        Self { backend }
    }

    /// Create an in-process store
    pub fn in_memory(capacity: usize, ttl: std::time::Duration) -> Self {
        Self::with_backend(Arc::new(MemorySessionBackend::new(capacity, ttl)))
    }

    /// Create the store selected by configuration
    pub async fn from_config(config: &SessionConfig) -> Result<Self> {
        match config.backend {
            SessionBackendKind::Memory => {
                info!(capacity = config.capacity, ttl_seconds = config.ttl_seconds, "Using in-memory session store");
                Ok(Self::in_memory(
                    config.capacity,
                    std::time::Duration::from_secs(config.ttl_seconds),
                ))
            }
            SessionBackendKind::Redis => {
                let url = config.redis_url.as_deref().ok_or_else(|| {
                    EngChatBotError::Config("Redis URL is required for the redis session backend".to_string())
                })?;
                let backend = RedisSessionBackend::new(url, config.redis_prefix.clone(), config.ttl_seconds).await?;
                backend.test_connection().await?;
                info!(prefix = %config.redis_prefix, ttl_seconds = config.ttl_seconds, "Using Redis session store");
                Ok(Self::with_backend(Arc::new(backend)))
            }
        }
    }

    /// Scenario for a user, `Casual` when unset
    ///
    /// Backend failures are logged and read as `Casual` so a storage outage
    /// never blocks a conversation turn.
    pub async fn get(&self, user_id: i64) -> Scenario {
        match self.try_get(user_id).await {
            Ok(scenario) => scenario,
            Err(e) => {
                warn!(user_id = user_id, backend = self.backend.name(), error = %e, "Session lookup failed, using default scenario");
                Scenario::default()
            }
        }
    }

    /// Scenario for a user, surfacing backend errors
    pub async fn try_get(&self, user_id: i64) -> Result<Scenario> {
        Ok(self.backend.load(user_id).await?.unwrap_or_default())
    }

    /// Select a scenario for a user
    pub async fn set(&self, user_id: i64, scenario: Scenario) -> Result<()> {
        self.backend.save(user_id, scenario).await?;
        debug!(user_id = user_id, scenario = %scenario, "Scenario stored");
        Ok(())
    }

    /// Number of live sessions
    pub async fn len(&self) -> Result<usize> {
        self.backend.len().await
    }

    /// Backend name for logs
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("backend", &self.backend.name())
            .finish()
    }
}
