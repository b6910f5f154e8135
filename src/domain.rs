//! Domain models used by the backend: questions, question sets, and message severity.

use serde::{Deserialize, Serialize};

/// Where did a question set come from?
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SetSource {
  LocalBank,   // from user-provided TOML config
  Seed,  // built-in sets
}

/// One quiz question: a natural-language sentence to be rendered in formal
/// logic notation. Immutable after the bank is built.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Question {
  pub sentence: String,
  /// The primary accepted formal-logic string.
  pub answer: String,
  /// Progressive hints, revealed one per wrong answer, in this order.
  #[serde(default)] pub hints: Vec<String>,
  /// Alternate accepted renderings. Matching is normalized string equality
  /// only, so logically equivalent forms must be enumerated here to count.
  #[serde(default)] pub alternates: Vec<String>,
}

impl Question {
  /// The canonical answer plus configured equivalents, in declaration order.
  /// Never empty.
  pub fn accepted_answers(&self) -> impl Iterator<Item = &str> {
    std::iter::once(self.answer.as_str())
      .chain(self.alternates.iter().map(String::as_str))
  }
}

/// A named, ordered collection of questions. Order defines index-based
/// navigation through the set.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QuestionSet {
  pub name: String,
  pub source: SetSource,
  pub questions: Vec<Question>,
}

/// Severity attached to user-facing result messages. The frontend maps these
/// onto alert styles.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
  Success,
  Warning,
  Danger,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn accepted_answers_always_includes_canonical() {
    let q = Question {
      sentence: "No birds can fly.".into(),
      answer: "¬∃x(Bird(x) ∧ Fly(x))".into(),
      hints: vec![],
      alternates: vec!["∀x(Bird(x) → ¬Fly(x))".into()],
    };
    let accepted: Vec<&str> = q.accepted_answers().collect();
    assert_eq!(accepted, vec!["¬∃x(Bird(x) ∧ Fly(x))", "∀x(Bird(x) → ¬Fly(x))"]);
  }

  #[test]
  fn accepted_answers_defaults_to_just_canonical() {
    let q = Question {
      sentence: "All dogs are mammals.".into(),
      answer: "∀x(Dog(x) → Mammal(x))".into(),
      hints: vec![],
      alternates: vec![],
    };
    assert_eq!(q.accepted_answers().count(), 1);
  }
}
