//! Core behaviors shared by both HTTP and WebSocket handlers.
//!
//! This includes:
//!   - Building the client-facing quiz view for a session
//!   - Submitting an answer through the progress engine
//!   - Switching question sets and resetting progress

use tracing::{debug, info, instrument, warn};

use crate::bank::QuestionBank;
use crate::domain::Severity;
use crate::engine::{progress_percent, submit, SubmitOutcome};
use crate::protocol::{MessageOut, QuestionOut, QuizView};
use crate::session::SessionState;
use crate::state::AppState;
use crate::util::trunc_for_log;

/// Render the current session state, with an optional result banner.
pub fn build_view(bank: &QuestionBank, session: &SessionState, message: Option<MessageOut>) -> QuizView {
  let question = bank
    .get_question(&session.active_set, session.question_index)
    .map(|q| QuestionOut {
      sentence: q.sentence.clone(),
      hints_available: q.hints.len(),
      hints_used: session.hint_index,
    });
  QuizView {
    set: session.active_set.clone(),
    question,
    message,
    progress: progress_percent(bank, session),
    score: session.score,
    total_attempts: session.total_attempts,
    total_questions: bank.set_len(&session.active_set),
  }
}

/// Map a submission outcome onto the banner the UI shows.
fn outcome_message(outcome: &SubmitOutcome, score: u32, total: usize) -> MessageOut {
  match outcome {
    SubmitOutcome::AlreadyComplete => MessageOut {
      text: format!("Quiz already completed. Score: {}/{}", score, total),
      severity: Severity::Success,
    },
    SubmitOutcome::Correct { completed: false } => MessageOut {
      text: "Correct! Moving to next question...".into(),
      severity: Severity::Success,
    },
    SubmitOutcome::Correct { completed: true } => MessageOut {
      text: format!("Congratulations! Quiz completed. Score: {}/{}", score, total),
      severity: Severity::Success,
    },
    SubmitOutcome::IncorrectHint { number, hint } => MessageOut {
      text: format!("Hint {}: {}", number, hint),
      severity: Severity::Warning,
    },
    SubmitOutcome::IncorrectReveal { answer, .. } => MessageOut {
      text: format!("The correct answer was: {}", answer),
      severity: Severity::Danger,
    },
  }
}

fn outcome_tag(outcome: &SubmitOutcome) -> &'static str {
  match outcome {
    SubmitOutcome::AlreadyComplete => "already_complete",
    SubmitOutcome::Correct { .. } => "correct",
    SubmitOutcome::IncorrectHint { .. } => "hint",
    SubmitOutcome::IncorrectReveal { .. } => "reveal",
  }
}

#[instrument(level = "info", skip(state))]
pub async fn start_session(state: &AppState, set: Option<String>) -> (String, QuizView) {
  let (id, session) = state.create_session(set).await;
  let view = build_view(&state.bank, &session, None);
  (id, view)
}

#[instrument(level = "info", skip(state), fields(%session_id))]
pub async fn current_view(state: &AppState, session_id: &str) -> QuizView {
  state
    .with_session(session_id, |bank, session| build_view(bank, session, None))
    .await
}

#[instrument(level = "info", skip(state, raw_answer), fields(%session_id, answer_len = raw_answer.len()))]
pub async fn submit_answer(state: &AppState, session_id: &str, raw_answer: &str) -> QuizView {
  debug!(target: "quiz", session = %session_id, answer = %trunc_for_log(raw_answer, 120), "Submission received");
  state
    .with_session(session_id, |bank, session| {
      let outcome = submit(bank, session, raw_answer);
      info!(
        target: "quiz",
        session = %session_id,
        set = %session.active_set,
        index = session.question_index,
        score = session.score,
        attempts = session.total_attempts,
        outcome = outcome_tag(&outcome),
        "Answer evaluated"
      );
      let message = outcome_message(&outcome, session.score, bank.set_len(&session.active_set));
      build_view(bank, session, Some(message))
    })
    .await
}

#[instrument(level = "info", skip(state), fields(%session_id, %new_set))]
pub async fn switch_set(state: &AppState, session_id: &str, new_set: &str) -> QuizView {
  state
    .with_session(session_id, |bank, session| {
      if bank.get_set(new_set).is_none() {
        // Not fatal: an unknown name plays as an empty, already-complete set.
        warn!(target: "quiz", session = %session_id, set = %new_set, "Switching to unknown question set");
      }
      session.switch_set(new_set);
      info!(target: "quiz", session = %session_id, set = %new_set, index = session.question_index, "Question set switched");
      build_view(bank, session, None)
    })
    .await
}

#[instrument(level = "info", skip(state), fields(%session_id))]
pub async fn reset(state: &AppState, session_id: &str) -> QuizView {
  state
    .with_session(session_id, |bank, session| {
      session.reset();
      info!(target: "quiz", session = %session_id, set = %session.active_set, "Session reset");
      build_view(bank, session, None)
    })
    .await
}

pub fn list_sets(state: &AppState) -> Vec<String> {
  state.bank.set_names().to_vec()
}
