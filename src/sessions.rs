//! Per-client pipeline state.
//!
//! Each session owns one `Orchestrator`, so the "current" word list and theme
//! of one client never leak into another. Sessions idle longer than the TTL
//! are swept on `create`, and the store is capped at a fixed size.

use crate::config::{PipelineConfig, MAX_SESSIONS, SESSION_IDLE_TTL_SECS};
use crate::error::{Result, VibeError};
use crate::pipeline::{Orchestrator, PipelineOutput};
use crate::render::{CloudSpec, PageStyle};
use dashmap::DashMap;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub session_id: String,
    pub output: Option<PipelineOutput>,
    pub cloud: Option<CloudSpec>,
    pub page: PageStyle,
    /// Set only on views returned from a submit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ran: Option<bool>,
}

struct Session {
    orchestrator: Orchestrator,
    last_touched: Instant,
    // Monotonic touch order, the LRU tie-break when Instants collide
    touch_seq: u64,
}

#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<DashMap<String, Session>>,
    touch_counter: Arc<AtomicU64>,
    config: PipelineConfig,
    idle_ttl: Duration,
    max_sessions: usize,
}

impl SessionStore {
    pub fn new(config: PipelineConfig) -> Self {
        Self::with_limits(
            config,
            Duration::from_secs(SESSION_IDLE_TTL_SECS),
            MAX_SESSIONS,
        )
    }

    pub fn with_limits(config: PipelineConfig, idle_ttl: Duration, max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            touch_counter: Arc::new(AtomicU64::new(0)),
            config,
            idle_ttl,
            max_sessions: max_sessions.max(1),
        }
    }

    fn next_seq(&self) -> u64 {
        self.touch_counter.fetch_add(1, Ordering::Relaxed)
    }

    pub fn create(&self) -> String {
        self.evict_expired();
        while self.sessions.len() >= self.max_sessions {
            if !self.evict_least_recent() {
                break;
            }
        }

        let session_id = Uuid::new_v4().to_string();
        self.sessions.insert(
            session_id.clone(),
            Session {
                orchestrator: Orchestrator::with_config(self.config),
                last_touched: Instant::now(),
                touch_seq: self.next_seq(),
            },
        );
        info!(
            "Created session {} ({} active)",
            session_id,
            self.sessions.len()
        );
        session_id
    }

    /// Drops every session idle for longer than the TTL. Returns how many went.
    pub fn evict_expired(&self) -> usize {
        let before = self.sessions.len();
        let ttl = self.idle_ttl;
        self.sessions
            .retain(|_, session| session.last_touched.elapsed() <= ttl);
        let evicted = before.saturating_sub(self.sessions.len());
        if evicted > 0 {
            info!("Evicted {} idle sessions", evicted);
        }
        evicted
    }

    fn evict_least_recent(&self) -> bool {
        let oldest = self
            .sessions
            .iter()
            .min_by_key(|entry| entry.value().touch_seq)
            .map(|entry| entry.key().clone());

        match oldest {
            Some(session_id) => {
                debug!("Session cap reached, evicting {}", session_id);
                self.sessions.remove(&session_id).is_some()
            }
            None => false,
        }
    }

    /// Feeds text to the session's orchestrator and returns the resulting view.
    ///
    /// Run and view happen under one entry guard, so a concurrent submit or
    /// delete on the same session cannot slip in between them.
    pub fn submit_and_view(&self, session_id: &str, text: &str) -> Result<SessionView> {
        let mut session = self
            .sessions
            .get_mut(session_id)
            .ok_or_else(|| VibeError::SessionNotFound(session_id.to_string()))?;

        let ran = session.orchestrator.submit(text)?;
        session.last_touched = Instant::now();
        session.touch_seq = self.next_seq();

        build_view(session_id, &session.orchestrator, Some(ran))
    }

    pub fn view(&self, session_id: &str) -> Result<SessionView> {
        let mut session = self
            .sessions
            .get_mut(session_id)
            .ok_or_else(|| VibeError::SessionNotFound(session_id.to_string()))?;

        session.last_touched = Instant::now();
        session.touch_seq = self.next_seq();

        build_view(session_id, &session.orchestrator, None)
    }

    pub fn remove(&self, session_id: &str) -> bool {
        let removed = self.sessions.remove(session_id).is_some();
        if removed {
            info!("Removed session {}", session_id);
        }
        removed
    }

    pub fn contains(&self, session_id: &str) -> bool {
        self.sessions.contains_key(session_id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

fn build_view(
    session_id: &str,
    orchestrator: &Orchestrator,
    ran: Option<bool>,
) -> Result<SessionView> {
    let output = orchestrator.current().cloned();
    let page = PageStyle::for_theme(orchestrator.current_theme())?;
    let cloud = output.as_ref().map(CloudSpec::from_output);

    Ok(SessionView {
        session_id: session_id.to_string(),
        output,
        cloud,
        page,
        ran,
    })
}
