/* src/server/toolbar/rust/src/i18n/changer.rs */

use crate::model::Language;

/// Same path under another language: `/de/about/` -> `/fr/about/`.
/// Paths without a known language prefix are prefixed as-is.
pub fn default_language_url(path: &str, languages: &[Language], target: &str) -> String {
  let trimmed = path.trim_start_matches('/');
  let rest = match trimmed.split_once('/') {
    Some((first, rest)) if languages.iter().any(|l| l.code == first) => rest,
    None if languages.iter().any(|l| l.code == trimmed) => "",
    _ => trimmed,
  };
  format!("/{target}/{rest}")
}

#[cfg(test)]
mod tests {
  use super::*;

  fn languages() -> Vec<Language> {
    vec![Language::new("en", "English"), Language::new("de", "Deutsch")]
  }

  #[test]
  fn swaps_language_segment() {
    assert_eq!(default_language_url("/en/about/team/", &languages(), "de"), "/de/about/team/");
  }

  #[test]
  fn bare_language_root() {
    assert_eq!(default_language_url("/en/", &languages(), "de"), "/de/");
    assert_eq!(default_language_url("/en", &languages(), "de"), "/de/");
  }

  #[test]
  fn prefixes_unprefixed_path() {
    assert_eq!(default_language_url("/about/", &languages(), "de"), "/de/about/");
    assert_eq!(default_language_url("/", &languages(), "en"), "/en/");
  }

  #[test]
  fn unknown_segment_is_kept() {
    assert_eq!(default_language_url("/xx/about/", &languages(), "de"), "/de/xx/about/");
  }
}
