//! Application state: the shared question bank and the in-memory session store.
//!
//! This module owns:
//!   - the immutable question bank (seeds merged with optional TOML sets)
//!   - the session store (session id -> SessionState)
//!   - runtime settings (expiry window, default set)
//!
//! A session is only ever touched while holding the store's write lock, so
//! each submission is atomic with respect to its session; requests for
//! different sessions share nothing mutable but the lock itself. The bank is
//! read-only after startup and needs no locking at all.

use std::{collections::HashMap, sync::Arc, time::Duration};

use tokio::sync::RwLock;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::bank::QuestionBank;
use crate::config::{load_quiz_config_from_env, Settings};
use crate::session::SessionState;

#[derive(Clone)]
pub struct AppState {
    pub bank: Arc<QuestionBank>,
    pub sessions: Arc<RwLock<HashMap<String, SessionState>>>,
    pub settings: Settings,
}

impl AppState {
    /// Build state from env: load config if provided, merge the bank, keep settings.
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Self {
        let cfg_opt = load_quiz_config_from_env();
        let settings = cfg_opt
            .as_ref()
            .map(|c| c.settings.clone())
            .unwrap_or_default();
        let bank = QuestionBank::new(cfg_opt.as_ref());
        info!(
            target: "quantify_backend",
            sets = bank.set_names().len(),
            default_set = %settings.default_set,
            max_age_days = settings.session_max_age_days,
            "Question bank ready"
        );
        Self {
            bank: Arc::new(bank),
            sessions: Arc::new(RwLock::new(HashMap::new())),
            settings,
        }
    }

    /// Build state from explicit parts. Lets tests skip the env/config path.
    #[cfg(test)]
    pub fn with_bank(bank: QuestionBank, settings: Settings) -> Self {
        Self {
            bank: Arc::new(bank),
            sessions: Arc::new(RwLock::new(HashMap::new())),
            settings,
        }
    }

    fn max_age(&self) -> Duration {
        Duration::from_secs(self.settings.session_max_age_days * 24 * 60 * 60)
    }

    /// Issue a fresh session bound to `set` (or the configured default).
    #[instrument(level = "info", skip(self))]
    pub async fn create_session(&self, set: Option<String>) -> (String, SessionState) {
        let id = Uuid::new_v4().to_string();
        let state = SessionState::new(set.unwrap_or_else(|| self.settings.default_set.clone()));
        info!(target: "quiz", session = %id, set = %state.active_set, "Session created");
        self.sessions.write().await.insert(id.clone(), state.clone());
        (id, state)
    }

    /// Run `f` on the session under the store's write lock.
    ///
    /// An unknown id gets a fresh state (first interaction), and an expired
    /// one is silently replaced (fresh-start experience, never an error).
    /// `last_activity` is refreshed before `f` runs.
    #[instrument(level = "debug", skip(self, f), fields(%session_id))]
    pub async fn with_session<F, T>(&self, session_id: &str, f: F) -> T
    where
        F: FnOnce(&QuestionBank, &mut SessionState) -> T,
    {
        let max_age = self.max_age();
        let mut sessions = self.sessions.write().await;
        let entry = sessions
            .entry(session_id.to_string())
            .or_insert_with(|| SessionState::new(self.settings.default_set.clone()));
        if entry.is_expired(max_age) {
            info!(target: "quiz", session = %session_id, "Session expired; starting fresh");
            *entry = SessionState::new(self.settings.default_set.clone());
        }
        entry.touch();
        f(&self.bank, entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::SystemTime;

    fn test_state() -> AppState {
        AppState::with_bank(QuestionBank::new(None), Settings::default())
    }

    #[tokio::test]
    async fn unknown_session_id_gets_a_fresh_state() {
        let state = test_state();
        let set = state
            .with_session("nobody", |_, s| s.active_set.clone())
            .await;
        assert_eq!(set, "basic_translation");
        assert!(state.sessions.read().await.contains_key("nobody"));
    }

    #[tokio::test]
    async fn expired_session_is_silently_replaced() {
        let state = test_state();
        let (id, _) = state.create_session(None).await;
        state
            .with_session(&id, |_, s| {
                s.score = 4;
                s.last_activity = SystemTime::now() - Duration::from_secs(181 * 24 * 60 * 60);
            })
            .await;
        let score = state.with_session(&id, |_, s| s.score).await;
        assert_eq!(score, 0);
    }

    #[tokio::test]
    async fn sessions_are_independent() {
        let state = test_state();
        let (a, _) = state.create_session(None).await;
        let (b, _) = state.create_session(Some("many_place".into())).await;
        state.with_session(&a, |_, s| s.score = 3).await;
        let (set_b, score_b) = state
            .with_session(&b, |_, s| (s.active_set.clone(), s.score))
            .await;
        assert_eq!(set_b, "many_place");
        assert_eq!(score_b, 0);
    }
}
