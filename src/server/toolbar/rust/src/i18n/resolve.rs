/* src/server/toolbar/rust/src/i18n/resolve.rs */

use std::collections::HashSet;

use crate::context::ToolbarRequest;
use crate::errors::ToolbarError;
use crate::services::LanguageResolver;

pub const LANGUAGE_COOKIE: &str = "cms_language";

/// Resolve chain: path prefix -> cookie -> Accept-Language -> default language.
#[derive(Debug, Clone)]
pub struct ChainLanguageResolver {
  languages: Vec<String>,
  default_language: String,
  cookie_name: String,
}

impl ChainLanguageResolver {
  pub fn new(languages: Vec<String>, default_language: impl Into<String>) -> Self {
    Self { languages, default_language: default_language.into(), cookie_name: LANGUAGE_COOKIE.into() }
  }

  pub fn cookie_name(mut self, name: impl Into<String>) -> Self {
    self.cookie_name = name.into();
    self
  }

  fn resolve(&self, request: &ToolbarRequest<'_>) -> Option<String> {
    let language_set: HashSet<&str> = self.languages.iter().map(String::as_str).collect();

    path_language(request.path, &language_set)
      .or_else(|| {
        let header = request.cookie_header?;
        parse_cookie_language(header, &self.cookie_name, &language_set)
      })
      .or_else(|| parse_accept_language(request.accept_language?, &language_set))
  }
}

impl LanguageResolver for ChainLanguageResolver {
  fn resolve_request_language(&self, request: &ToolbarRequest<'_>) -> Result<String, ToolbarError> {
    if let Some(code) = self.resolve(request) {
      return Ok(code);
    }
    if self.default_language.is_empty() {
      return Err(ToolbarError::UnknownLanguage(String::new()));
    }
    Ok(self.default_language.clone())
  }
}

fn path_language(path: &str, language_set: &HashSet<&str>) -> Option<String> {
  let first = path.trim_start_matches('/').split('/').next()?;
  language_set.contains(first).then(|| first.to_string())
}

fn parse_cookie_language(header: &str, name: &str, language_set: &HashSet<&str>) -> Option<String> {
  header.split(';').filter_map(|pair| pair.split_once('=')).find_map(|(k, v)| {
    let v = v.trim();
    (k.trim() == name && language_set.contains(v)).then(|| v.to_string())
  })
}

/// Highest q-value wins; ties keep header order. `de-AT` matches `de`.
fn parse_accept_language(header: &str, language_set: &HashSet<&str>) -> Option<String> {
  let mut ranked: Vec<(&str, f64)> = header
    .split(',')
    .filter_map(|entry| {
      let mut params = entry.split(';').map(str::trim);
      let tag = params.next().filter(|t| !t.is_empty())?;
      let weight = params.filter_map(|p| p.strip_prefix("q=")?.parse::<f64>().ok()).last().unwrap_or(1.0);
      // q=0 means "not acceptable"
      (weight.is_finite() && weight > 0.0).then_some((tag, weight))
    })
    .collect();
  ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

  ranked.into_iter().find_map(|(tag, _)| {
    if language_set.contains(tag) {
      return Some(tag.to_string());
    }
    let (primary, _) = tag.split_once('-')?;
    language_set.contains(primary).then(|| primary.to_string())
  })
}
