//! Per-session quiz progress: counters, per-set snapshots, and expiry.
//!
//! A `SessionState` is exclusively owned by the request handling it (the
//! store in `state.rs` hands it out under a write lock), so nothing here
//! needs interior synchronization.

use std::collections::HashMap;
use std::time::{Duration, SystemTime};

use serde::{Deserialize, Serialize};

/// Saved progress for a set the session is not currently working on.
/// Restored verbatim when the user switches back.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct SetSnapshot {
    #[serde(default)]
    pub score: u32,
    #[serde(default)]
    pub total_attempts: u32,
    #[serde(default)]
    pub question_index: usize,
    #[serde(default)]
    pub hint_index: usize,
}

/// Mutable quiz state for one session.
///
/// Every counter carries `#[serde(default)]` so a record persisted by an
/// older build loads to the invariant-safe zero state instead of erroring.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionState {
    /// Identifier of the active question set.
    pub active_set: String,
    /// Position within the active set; equal to the set length once complete.
    #[serde(default)]
    pub question_index: usize,
    /// Hints already revealed for the current question.
    #[serde(default)]
    pub hint_index: usize,
    /// Correctly answered questions this session.
    #[serde(default)]
    pub score: u32,
    /// All submissions this session. Always >= score.
    #[serde(default)]
    pub total_attempts: u32,
    /// Parked progress for other sets, keyed by set identifier.
    #[serde(default)]
    pub snapshots: HashMap<String, SetSnapshot>,
    #[serde(default = "SystemTime::now")]
    pub last_activity: SystemTime,
}

impl SessionState {
    pub fn new(active_set: impl Into<String>) -> Self {
        Self {
            active_set: active_set.into(),
            question_index: 0,
            hint_index: 0,
            score: 0,
            total_attempts: 0,
            snapshots: HashMap::new(),
            last_activity: SystemTime::now(),
        }
    }

    /// True when the session has been idle longer than `max_age`.
    /// A clock that went backwards counts as expired.
    pub fn is_expired(&self, max_age: Duration) -> bool {
        self.last_activity
            .elapsed()
            .map(|elapsed| elapsed > max_age)
            .unwrap_or(true)
    }

    pub fn touch(&mut self) {
        self.last_activity = SystemTime::now();
    }

    /// Move to the next question. Hint progress never carries over.
    pub fn advance(&mut self) {
        self.question_index += 1;
        self.hint_index = 0;
    }

    /// Zero all counters and drop parked snapshots; the active set is kept.
    pub fn reset(&mut self) {
        self.question_index = 0;
        self.hint_index = 0;
        self.score = 0;
        self.total_attempts = 0;
        self.snapshots.clear();
        self.touch();
    }

    /// Switch to another set, parking the current counters under the current
    /// set name and restoring whatever was parked under the new one (zeroed
    /// if nothing was). Unknown names are accepted here; the bank treats
    /// them as empty sets downstream.
    pub fn switch_set(&mut self, new_set: &str) {
        if new_set == self.active_set {
            self.touch();
            return;
        }
        self.snapshots.insert(
            self.active_set.clone(),
            SetSnapshot {
                score: self.score,
                total_attempts: self.total_attempts,
                question_index: self.question_index,
                hint_index: self.hint_index,
            },
        );
        let restored = self.snapshots.remove(new_set).unwrap_or_default();
        self.active_set = new_set.to_string();
        self.score = restored.score;
        self.total_attempts = restored.total_attempts;
        self.question_index = restored.question_index;
        self.hint_index = restored.hint_index;
        self.touch();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switching_back_restores_the_exact_snapshot() {
        let mut s = SessionState::new("basic_translation");
        s.score = 2;
        s.total_attempts = 5;
        s.question_index = 3;
        s.hint_index = 1;

        s.switch_set("many_place");
        assert_eq!(s.active_set, "many_place");
        assert_eq!((s.score, s.total_attempts, s.question_index, s.hint_index), (0, 0, 0, 0));

        s.score = 1;
        s.total_attempts = 1;
        s.question_index = 1;

        s.switch_set("basic_translation");
        assert_eq!((s.score, s.total_attempts, s.question_index, s.hint_index), (2, 5, 3, 1));

        s.switch_set("many_place");
        assert_eq!((s.score, s.total_attempts, s.question_index, s.hint_index), (1, 1, 1, 0));
    }

    #[test]
    fn switching_to_the_active_set_changes_nothing() {
        let mut s = SessionState::new("basic_translation");
        s.score = 2;
        s.question_index = 2;
        s.switch_set("basic_translation");
        assert_eq!(s.score, 2);
        assert_eq!(s.question_index, 2);
        assert!(s.snapshots.is_empty());
    }

    #[test]
    fn reset_zeroes_counters_and_keeps_the_set() {
        let mut s = SessionState::new("many_place");
        s.score = 3;
        s.total_attempts = 7;
        s.question_index = 4;
        s.hint_index = 2;
        s.switch_set("basic_translation");
        s.reset();
        assert_eq!(s.active_set, "basic_translation");
        assert_eq!((s.score, s.total_attempts, s.question_index, s.hint_index), (0, 0, 0, 0));
        assert!(s.snapshots.is_empty());
    }

    #[test]
    fn stale_sessions_expire() {
        let mut s = SessionState::new("basic_translation");
        assert!(!s.is_expired(Duration::from_secs(60)));
        s.last_activity = SystemTime::now() - Duration::from_secs(120);
        assert!(s.is_expired(Duration::from_secs(60)));
        assert!(!s.is_expired(Duration::from_secs(600)));
    }

    #[test]
    fn legacy_records_load_with_defaults() {
        // Only the active set survives from an older build; counters default.
        let s: SessionState = serde_json::from_str(r#"{"active_set":"basic_translation"}"#)
            .expect("partial record");
        assert_eq!(s.active_set, "basic_translation");
        assert_eq!((s.score, s.total_attempts, s.question_index, s.hint_index), (0, 0, 0, 0));
        assert!(!s.is_expired(Duration::from_secs(60)));
    }
}
