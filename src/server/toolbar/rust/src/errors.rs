/* src/server/toolbar/rust/src/errors.rs */

use thiserror::Error;

/// Failures that abort a toolbar build.
///
/// `UnknownLanguage` is the one variant the builder recovers from: the
/// language menu is still emitted, just without an active entry.
#[derive(Debug, Error)]
pub enum ToolbarError {
  #[error("no reverse match for route '{route}' with {args} argument(s)")]
  NoReverseMatch { route: String, args: usize },

  #[error("translation of '{key}' failed: {reason}")]
  Translation { key: String, reason: String },

  #[error("language '{0}' is not available on this site")]
  UnknownLanguage(String),

  #[error("revision store: {0}")]
  Revisions(String),

  /// Any other collaborator failing (site or language registry, session).
  #[error("{service} failed: {message}")]
  Collaborator { service: String, message: String },

  #[error(transparent)]
  Serialize(#[from] serde_json::Error),
}

impl ToolbarError {
  pub fn no_reverse_match(route: impl Into<String>, args: usize) -> Self {
    Self::NoReverseMatch { route: route.into(), args }
  }

  pub fn translation(key: impl Into<String>, reason: impl Into<String>) -> Self {
    Self::Translation { key: key.into(), reason: reason.into() }
  }

  pub fn collaborator(service: impl Into<String>, message: impl Into<String>) -> Self {
    Self::Collaborator { service: service.into(), message: message.into() }
  }

  pub fn is_language_error(&self) -> bool {
    matches!(self, Self::UnknownLanguage(_))
  }
}
