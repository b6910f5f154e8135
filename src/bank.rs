//! The question bank: read-only lookup of question sets and questions.
//!
//! Built once at startup by merging the built-in seed sets with whatever the
//! TOML config supplies (config wins on name collision), then never mutated.
//! Safe to share across all sessions without synchronization.

use std::collections::HashMap;

use tracing::{info, instrument, warn};

use crate::config::QuizConfig;
use crate::domain::{Question, QuestionSet, SetSource};
use crate::seeds::seed_question_sets;

pub struct QuestionBank {
  by_name: HashMap<String, QuestionSet>,
  // Stable listing order: seeds first, then config additions.
  names: Vec<String>,
}

impl QuestionBank {
  /// Merge seeds with optional config sets and log the startup inventory.
  #[instrument(level = "info", skip_all)]
  pub fn new(cfg: Option<&QuizConfig>) -> Self {
    let mut sets = seed_question_sets();

    if let Some(cfg) = cfg {
      for sc in &cfg.question_sets {
        if sc.questions.is_empty() {
          warn!(target: "quiz", set = %sc.name, "Skipping config set: no questions.");
          continue;
        }
        sets.push(QuestionSet {
          name: sc.name.clone(),
          source: SetSource::LocalBank,
          questions: sc.questions.clone(),
        });
      }
    }

    let bank = Self::from_sets(sets);
    for name in &bank.names {
      let set = &bank.by_name[name];
      info!(target: "quiz", set = %name, questions = set.questions.len(), source = ?set.source, "Startup question inventory");
    }
    bank
  }

  /// Build a bank from explicit sets. A later set with a repeated name
  /// replaces the earlier one but keeps its listing position.
  pub fn from_sets(sets: Vec<QuestionSet>) -> Self {
    let mut by_name = HashMap::new();
    let mut names = Vec::new();
    for set in sets {
      let name = set.name.clone();
      if by_name.insert(name.clone(), set).is_none() {
        names.push(name);
      }
    }
    Self { by_name, names }
  }

  /// `None` means the name is unknown; callers treat that as an empty set.
  pub fn get_set(&self, name: &str) -> Option<&QuestionSet> {
    self.by_name.get(name)
  }

  /// `None` for an out-of-bounds index is the end-of-set signal, not an error.
  pub fn get_question(&self, set_name: &str, index: usize) -> Option<&Question> {
    self.by_name.get(set_name).and_then(|s| s.questions.get(index))
  }

  /// Number of questions in a set; unknown names count as empty.
  pub fn set_len(&self, set_name: &str) -> usize {
    self.by_name.get(set_name).map(|s| s.questions.len()).unwrap_or(0)
  }

  /// Known set identifiers, in listing order.
  pub fn set_names(&self) -> &[String] {
    &self.names
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::QuestionSetCfg;

  fn one_question(sentence: &str, answer: &str) -> Question {
    Question {
      sentence: sentence.into(),
      answer: answer.into(),
      hints: vec![],
      alternates: vec![],
    }
  }

  #[test]
  fn seeds_are_always_present() {
    let bank = QuestionBank::new(None);
    assert!(bank.get_set("basic_translation").is_some());
    assert!(bank.get_set("many_place").is_some());
    assert_eq!(bank.set_len("basic_translation"), 5);
  }

  #[test]
  fn unknown_set_is_empty() {
    let bank = QuestionBank::new(None);
    assert!(bank.get_set("proofs").is_none());
    assert!(bank.get_question("proofs", 0).is_none());
    assert_eq!(bank.set_len("proofs"), 0);
  }

  #[test]
  fn out_of_bounds_index_returns_none() {
    let bank = QuestionBank::new(None);
    let len = bank.set_len("many_place");
    assert!(bank.get_question("many_place", len - 1).is_some());
    assert!(bank.get_question("many_place", len).is_none());
  }

  #[test]
  fn config_set_replaces_seed_by_name() {
    let cfg = QuizConfig {
      settings: Default::default(),
      question_sets: vec![QuestionSetCfg {
        name: "basic_translation".into(),
        questions: vec![one_question("Socrates is mortal.", "Mortal(socrates)")],
      }],
    };
    let bank = QuestionBank::new(Some(&cfg));
    assert_eq!(bank.set_len("basic_translation"), 1);
    let set = bank.get_set("basic_translation").expect("set");
    assert_eq!(set.source, SetSource::LocalBank);
    // Listing stays stable: no duplicate entry for the replaced name.
    let count = bank.set_names().iter().filter(|n| *n == "basic_translation").count();
    assert_eq!(count, 1);
  }

  #[test]
  fn empty_config_set_is_skipped() {
    let cfg = QuizConfig {
      settings: Default::default(),
      question_sets: vec![QuestionSetCfg { name: "empty".into(), questions: vec![] }],
    };
    let bank = QuestionBank::new(Some(&cfg));
    assert!(bank.get_set("empty").is_none());
  }
}
