//! Small utility helpers used across modules.

/// Canonical normalization for answer matching: case-fold and drop all
/// whitespace (leading, trailing, and interior). The same normalization is
/// applied to submissions and to every accepted candidate, so spacing and
/// capitalization never decide correctness.
pub fn normalize_answer(s: &str) -> String {
  s.to_lowercase().chars().filter(|c| !c.is_whitespace()).collect()
}

/// Log-safe truncation for large strings.
/// Avoids spamming logs with huge request/response payloads.
/// Cuts on a char boundary so logic symbols never split mid-codepoint.
pub fn trunc_for_log(s: &str, max: usize) -> String {
  if s.len() <= max { return s.to_string(); }
  let cut = s.char_indices().map(|(i, _)| i).take_while(|i| *i <= max).last().unwrap_or(0);
  format!("{}… ({} bytes total)", &s[..cut], s.len())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn normalization_ignores_case_and_spacing() {
    assert_eq!(
      normalize_answer(" ∀X(dog(X)→mammal(X)) "),
      normalize_answer("∀x(Dog(x) → Mammal(x))")
    );
  }

  #[test]
  fn normalization_strips_interior_whitespace() {
    assert_eq!(normalize_answer("Loves( alice ,  bob )"), "loves(alice,bob)");
    assert_eq!(normalize_answer("   "), "");
  }

  #[test]
  fn trunc_respects_char_boundaries() {
    let s = "∀∀∀∀∀"; // 3 bytes each
    let t = trunc_for_log(s, 4);
    assert!(t.starts_with('∀'));
    assert!(t.contains("15 bytes total"));
  }
}
