//! Loading quiz configuration (settings + optional extra question sets) from TOML.
//!
//! See `QuizConfig` and `Settings` for the expected schema.

use serde::Deserialize;
use tracing::{info, error};

use crate::domain::Question;

#[derive(Clone, Debug, Deserialize, Default)]
pub struct QuizConfig {
  #[serde(default)]
  pub settings: Settings,
  #[serde(default)]
  pub question_sets: Vec<QuestionSetCfg>,
}

/// Question-set entry accepted in TOML configuration. A set whose name
/// collides with a built-in seed set replaces it wholesale.
#[derive(Clone, Debug, Deserialize)]
pub struct QuestionSetCfg {
  pub name: String,
  #[serde(default)] pub questions: Vec<Question>,
}

/// Runtime knobs. Defaults are sensible for a small deployment; override in
/// TOML where needed.
#[derive(Clone, Debug, Deserialize)]
pub struct Settings {
  /// Sessions idle longer than this are silently reset on next contact.
  #[serde(default = "default_session_max_age_days")]
  pub session_max_age_days: u64,
  /// Set served to sessions that do not ask for a specific one.
  #[serde(default = "default_set_name")]
  pub default_set: String,
}

fn default_session_max_age_days() -> u64 { 180 }
fn default_set_name() -> String { "basic_translation".into() }

impl Default for Settings {
  fn default() -> Self {
    Self {
      session_max_age_days: default_session_max_age_days(),
      default_set: default_set_name(),
    }
  }
}

/// Attempt to load `QuizConfig` from QUIZ_CONFIG_PATH. On any parsing/IO error, returns None.
pub fn load_quiz_config_from_env() -> Option<QuizConfig> {
  let path = std::env::var("QUIZ_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match toml::from_str::<QuizConfig>(&s) {
      Ok(cfg) => {
        info!(target: "quantify_backend", %path, "Loaded quiz config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "quantify_backend", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "quantify_backend", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_config_uses_defaults() {
    let cfg: QuizConfig = toml::from_str("").expect("empty config");
    assert_eq!(cfg.settings.session_max_age_days, 180);
    assert_eq!(cfg.settings.default_set, "basic_translation");
    assert!(cfg.question_sets.is_empty());
  }

  #[test]
  fn full_config_parses() {
    let cfg: QuizConfig = toml::from_str(
      r#"
      [settings]
      session_max_age_days = 30
      default_set = "many_place"

      [[question_sets]]
      name = "identity"

      [[question_sets.questions]]
      sentence = "Hesperus is Phosphorus."
      answer = "hesperus = phosphorus"
      hints = ["Identity is a two-place relation written infix."]
      alternates = ["phosphorus = hesperus"]
      "#,
    )
    .expect("config");

    assert_eq!(cfg.settings.session_max_age_days, 30);
    assert_eq!(cfg.settings.default_set, "many_place");
    assert_eq!(cfg.question_sets.len(), 1);
    let set = &cfg.question_sets[0];
    assert_eq!(set.name, "identity");
    assert_eq!(set.questions.len(), 1);
    assert_eq!(set.questions[0].hints.len(), 1);
    assert_eq!(set.questions[0].alternates.len(), 1);
  }
}
