/* src/server/toolbar/rust/src/config/types.rs */

use std::collections::HashSet;

use anyhow::{Result, bail};
use serde::Deserialize;

use crate::model::TemplateChoice;
use crate::routes::RouteTable;

/// Static toolbar configuration, usually the `[toolbar]` table of a TOML file.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolbarSettings {
  pub templates: Vec<TemplateChoice>,
  /// A substituted user model has its own admin; the Users entry is hidden.
  #[serde(default)]
  pub user_model_swapped: bool,
  #[serde(default = "default_admin_prefix")]
  pub admin_prefix: String,
  #[serde(default = "default_site_scheme")]
  pub site_scheme: String,
}

#[derive(Deserialize)]
struct SettingsFile {
  toolbar: ToolbarSettings,
}

impl ToolbarSettings {
  pub fn new(templates: Vec<TemplateChoice>) -> Self {
    Self {
      templates,
      user_model_swapped: false,
      admin_prefix: default_admin_prefix(),
      site_scheme: default_site_scheme(),
    }
  }

  pub fn from_toml_str(content: &str) -> Result<Self> {
    let file: SettingsFile = toml::from_str(content)?;
    file.toolbar.validate()?;
    Ok(file.toolbar)
  }

  pub fn validate(&self) -> Result<()> {
    if self.templates.is_empty() {
      bail!("toolbar.templates must not be empty");
    }
    let mut seen = HashSet::new();
    for template in &self.templates {
      if !seen.insert(template.path.as_str()) {
        bail!("duplicate template path \"{}\" in toolbar.templates", template.path);
      }
    }
    if !self.admin_prefix.starts_with('/') || !self.admin_prefix.ends_with('/') {
      bail!("toolbar.admin_prefix \"{}\" must start and end with '/'", self.admin_prefix);
    }
    if self.admin_prefix.contains(['{', '}']) {
      bail!("toolbar.admin_prefix \"{}\" must not contain '{{' or '}}'", self.admin_prefix);
    }
    Ok(())
  }

  /// Standard admin routes mounted under `admin_prefix`.
  pub fn route_table(&self) -> RouteTable {
    RouteTable::admin(&self.admin_prefix)
  }

  pub fn has_inheritance_template(&self) -> bool {
    self.templates.iter().any(TemplateChoice::is_inheritance)
  }
}

fn default_admin_prefix() -> String {
  "/admin/".to_string()
}

fn default_site_scheme() -> String {
  "http".to_string()
}
