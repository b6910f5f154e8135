//! Seed data: the built-in question sets.
//!
//! These guarantee the app is useful without any external config. Extra sets
//! (or replacements, matched by name) can be supplied via QUIZ_CONFIG_PATH.

use crate::domain::{Question, QuestionSet, SetSource};

fn q(sentence: &str, answer: &str, hints: [&str; 3]) -> Question {
  Question {
    sentence: sentence.into(),
    answer: answer.into(),
    hints: hints.iter().map(|h| (*h).to_string()).collect(),
    alternates: vec![],
  }
}

/// Built-in sets: one-place predicate translation and many-place translation.
pub fn seed_question_sets() -> Vec<QuestionSet> {
  let basic = vec![
    q(
      "All dogs are mammals.",
      "∀x(Dog(x) → Mammal(x))",
      [
        "Think about universal quantification (for all).",
        "You'll need an implication (if-then).",
        "The general form is: ∀x(P(x) → Q(x))",
      ],
    ),
    q(
      "Some cats are friendly.",
      "∃x(Cat(x) ∧ Friendly(x))",
      [
        "Think about existential quantification (there exists).",
        "You'll need a conjunction (and).",
        "The general form is: ∃x(P(x) ∧ Q(x))",
      ],
    ),
    Question {
      sentence: "No birds can fly.".into(),
      answer: "¬∃x(Bird(x) ∧ Fly(x))".into(),
      hints: vec![
        "Consider negation (not).".into(),
        "This can be expressed using existential quantification or universal quantification.".into(),
        "Think: 'There does not exist a bird that can fly.'".into(),
      ],
      // The universally quantified rendering is just as standard.
      alternates: vec!["∀x(Bird(x) → ¬Fly(x))".into()],
    },
    q(
      "If something is a square, then it is a rectangle.",
      "∀x(Square(x) → Rectangle(x))",
      [
        "This is a conditional statement.",
        "Use universal quantification for 'something'.",
        "The implication (→) represents the 'if-then'.",
      ],
    ),
    q(
      "There is a student who likes logic.",
      "∃x(Student(x) ∧ LikesLogic(x))",
      [
        "This requires existential quantification.",
        "You'll need a conjunction to connect the properties.",
        "The general form is 'There exists an x such that...'.",
      ],
    ),
  ];

  let many_place = vec![
    q(
      "Alice loves Bob.",
      "Loves(alice, bob)",
      [
        "Use a two-place predicate.",
        "Arguments go in order: lover first, beloved second.",
        "The general form is: Loves(x, y)",
      ],
    ),
    q(
      "Bob is taller than Alice.",
      "Taller(bob, alice)",
      [
        "Comparisons are two-place relations.",
        "The subject of the comparison comes first.",
        "The general form is: Taller(x, y)",
      ],
    ),
    q(
      "Everyone respects someone.",
      "∀x∃y(Respects(x, y))",
      [
        "You'll need two quantifiers, one for each role.",
        "Quantifier order matters: 'everyone' scopes over 'someone'.",
        "The general form is: ∀x∃y(R(x, y))",
      ],
    ),
    Question {
      sentence: "Every dog chases some cat.".into(),
      answer: "∀x(Dog(x) → ∃y(Cat(y) ∧ Chases(x, y)))".into(),
      hints: vec![
        "Restrict the universal quantifier with an implication.".into(),
        "Restrict the existential quantifier with a conjunction.".into(),
        "The general form is: ∀x(P(x) → ∃y(Q(y) ∧ R(x, y)))".into(),
      ],
      // Pulling the existential to the front is an accepted style.
      alternates: vec!["∀x∃y(Dog(x) → (Cat(y) ∧ Chases(x, y)))".into()],
    },
    q(
      "Some student admires every professor.",
      "∃x(Student(x) ∧ ∀y(Professor(y) → Admires(x, y)))",
      [
        "Start with the existential quantifier for 'some student'.",
        "Inside it, universally quantify over professors.",
        "The general form is: ∃x(P(x) ∧ ∀y(Q(y) → R(x, y)))",
      ],
    ),
  ];

  vec![
    QuestionSet { name: "basic_translation".into(), source: SetSource::Seed, questions: basic },
    QuestionSet { name: "many_place".into(), source: SetSource::Seed, questions: many_place },
  ]
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn seed_sets_are_well_formed() {
    let sets = seed_question_sets();
    assert_eq!(sets.len(), 2);
    for set in &sets {
      assert!(!set.questions.is_empty(), "empty seed set {}", set.name);
      for q in &set.questions {
        assert!(!q.sentence.trim().is_empty());
        assert!(!q.answer.trim().is_empty());
        assert_eq!(q.hints.len(), 3, "{} should carry three hints", q.sentence);
      }
    }
  }
}
