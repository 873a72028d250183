/* src/server/toolbar/rust/src/config/loader.rs */

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use super::ToolbarSettings;

pub fn load_toolbar_settings(path: &Path) -> Result<ToolbarSettings> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let settings = ToolbarSettings::from_toml_str(&content)
    .with_context(|| format!("failed to load {}", path.display()))?;
  debug!(path = %path.display(), templates = settings.templates.len(), "toolbar settings loaded");
  Ok(settings)
}
