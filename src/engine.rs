//! The answer-matching and progressive-hint state machine.
//!
//! Per question the flow is:
//!   - answering: wrong answers reveal the stored hints one at a time, in order
//!   - last chance: all hints spent; the next wrong answer reveals the
//!     expected rendering and the session moves on anyway (no stuck state)
//!   - advance: to the next question, or set complete when none remains
//!
//! Matching is normalized string equality against the question's accepted
//! renderings. No parsing of formulas: logically equivalent forms that are
//! not enumerated as alternates count as wrong.

use tracing::{debug, instrument};

use crate::bank::QuestionBank;
use crate::session::SessionState;
use crate::util::normalize_answer;

/// What a single submission produced. `completed` marks outcomes that leave
/// the active set finished.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
  /// The set was already finished; nothing was counted or mutated.
  AlreadyComplete,
  Correct { completed: bool },
  /// Wrong answer; carries the next hint in stored order (`number` is the
  /// 1-based reveal position).
  IncorrectHint { number: usize, hint: String },
  /// Wrong answer with no hints left: the expected rendering is revealed and
  /// the session moves on regardless.
  IncorrectReveal { answer: String, completed: bool },
}

/// Process one submission against the session's current question.
///
/// Attempts are counted whenever a current question exists, including empty
/// submissions (they normalize to "" and play as ordinary wrong answers).
#[instrument(level = "debug", skip(bank, session, raw_answer), fields(set = %session.active_set, index = session.question_index, answer_len = raw_answer.len()))]
pub fn submit(bank: &QuestionBank, session: &mut SessionState, raw_answer: &str) -> SubmitOutcome {
  let Some(question) = bank.get_question(&session.active_set, session.question_index) else {
    return SubmitOutcome::AlreadyComplete;
  };

  session.total_attempts += 1;

  let given = normalize_answer(raw_answer);
  let matched = question
    .accepted_answers()
    .any(|candidate| normalize_answer(candidate) == given);

  if matched {
    session.score += 1;
    session.advance();
    let completed = session.question_index >= bank.set_len(&session.active_set);
    debug!(target: "quiz", score = session.score, completed, "Answer accepted");
    return SubmitOutcome::Correct { completed };
  }

  session.hint_index += 1;
  if session.hint_index <= question.hints.len() {
    let number = session.hint_index;
    debug!(target: "quiz", hint = number, "Answer rejected; revealing hint");
    SubmitOutcome::IncorrectHint { number, hint: question.hints[number - 1].clone() }
  } else {
    let answer = question.answer.clone();
    session.advance();
    let completed = session.question_index >= bank.set_len(&session.active_set);
    debug!(target: "quiz", completed, "Hints exhausted; revealing answer and moving on");
    SubmitOutcome::IncorrectReveal { answer, completed }
  }
}

/// Display progress through the active set, clamped to 100.
/// Unknown (empty) sets count as immediately complete.
pub fn progress_percent(bank: &QuestionBank, session: &SessionState) -> f32 {
  let total = bank.set_len(&session.active_set);
  if total == 0 {
    return 100.0;
  }
  (session.question_index as f32 / total as f32 * 100.0).min(100.0)
}
