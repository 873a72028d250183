/* src/server/toolbar/rust/src/i18n/catalog.rs */

use crate::errors::ToolbarError;
use crate::services::Translator;

/// Label translations keyed by locale: `{ "de": { "Page": "Seite" } }`.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
  locale: String,
  default_locale: String,
  messages: serde_json::Value,
  strict: bool,
}

impl MessageCatalog {
  pub fn new(
    locale: impl Into<String>,
    default_locale: impl Into<String>,
    messages: serde_json::Value,
  ) -> Self {
    Self { locale: locale.into(), default_locale: default_locale.into(), messages, strict: false }
  }

  /// Catalog without any messages: every label is its own key.
  pub fn passthrough() -> Self {
    Self::new("", "", serde_json::Value::Object(Default::default()))
  }

  /// Missing keys become `ToolbarError::Translation` instead of falling back
  /// to the key itself.
  pub fn strict(mut self) -> Self {
    self.strict = true;
    self
  }

  fn lookup(&self, locale: &str, key: &str) -> Option<&str> {
    self.messages.get(locale)?.get(key)?.as_str()
  }
}

impl Translator for MessageCatalog {
  fn translate(&self, key: &str) -> Result<String, ToolbarError> {
    if let Some(msg) = self.lookup(&self.locale, key).or_else(|| self.lookup(&self.default_locale, key))
    {
      return Ok(msg.to_string());
    }
    if self.strict {
      return Err(ToolbarError::translation(key, format!("no message for locale '{}'", self.locale)));
    }
    Ok(key.to_string())
  }
}
