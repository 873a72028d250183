/* src/server/toolbar/rust/src/routes.rs */

use std::collections::HashMap;

use crate::errors::ToolbarError;
use crate::services::UrlResolver;

/// Named admin routes the toolbar links to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
  AdminIndex,
  Logout,
  UserChangelist,
  UserSettings,
  SiteChangelist,
  PageChangelist,
  PageAdd,
  PageChange,
  PageChangeTemplate,
  PageChangeInNavigation,
  PageAdvanced,
  PagePermissions,
  PageChangeStatus,
  PageDelete,
  PageUndo,
  PageRedo,
  PageRevert,
  PageHistory,
  PagePublish,
}

impl Route {
  pub const ALL: [Route; 19] = [
    Route::AdminIndex,
    Route::Logout,
    Route::UserChangelist,
    Route::UserSettings,
    Route::SiteChangelist,
    Route::PageChangelist,
    Route::PageAdd,
    Route::PageChange,
    Route::PageChangeTemplate,
    Route::PageChangeInNavigation,
    Route::PageAdvanced,
    Route::PagePermissions,
    Route::PageChangeStatus,
    Route::PageDelete,
    Route::PageUndo,
    Route::PageRedo,
    Route::PageRevert,
    Route::PageHistory,
    Route::PagePublish,
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      Self::AdminIndex => "admin:index",
      Self::Logout => "admin:logout",
      Self::UserChangelist => "admin:auth_user_changelist",
      Self::UserSettings => "admin:cms_usersettings_change",
      Self::SiteChangelist => "admin:sites_site_changelist",
      Self::PageChangelist => "admin:cms_page_changelist",
      Self::PageAdd => "admin:cms_page_add",
      Self::PageChange => "admin:cms_page_change",
      Self::PageChangeTemplate => "admin:cms_page_change_template",
      Self::PageChangeInNavigation => "admin:cms_page_change_innavigation",
      Self::PageAdvanced => "admin:cms_page_advanced",
      Self::PagePermissions => "admin:cms_page_permissions",
      Self::PageChangeStatus => "admin:cms_page_change_status",
      Self::PageDelete => "admin:cms_page_delete",
      Self::PageUndo => "admin:cms_page_undo",
      Self::PageRedo => "admin:cms_page_redo",
      Self::PageRevert => "admin:cms_page_revert_page",
      Self::PageHistory => "admin:cms_page_history",
      Self::PagePublish => "admin:cms_page_publish_page",
    }
  }

  /// Path below the admin mount point; `{}` marks a positional argument.
  fn default_pattern(self) -> &'static str {
    match self {
      Self::AdminIndex => "",
      Self::Logout => "logout/",
      Self::UserChangelist => "auth/user/",
      Self::UserSettings => "cms/usersettings/",
      Self::SiteChangelist => "sites/site/",
      Self::PageChangelist => "cms/page/",
      Self::PageAdd => "cms/page/add/",
      Self::PageChange => "cms/page/{}/",
      Self::PageChangeTemplate => "cms/page/{}/change_template/",
      Self::PageChangeInNavigation => "cms/page/{}/change_innavigation/",
      Self::PageAdvanced => "cms/page/{}/advanced-settings/",
      Self::PagePermissions => "cms/page/{}/permission-settings/",
      Self::PageChangeStatus => "cms/page/{}/change-status/",
      Self::PageDelete => "cms/page/{}/delete/",
      Self::PageUndo => "cms/page/{}/undo/",
      Self::PageRedo => "cms/page/{}/redo/",
      Self::PageRevert => "cms/page/{}/revert/",
      Self::PageHistory => "cms/page/{}/history/",
      Self::PagePublish => "cms/page/{}/publish/",
    }
  }
}

/// Pattern-based `UrlResolver`. Each `{}` in a pattern consumes one argument.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
  patterns: HashMap<Route, String>,
}

impl RouteTable {
  pub fn new() -> Self {
    Self::default()
  }

  /// Standard admin layout mounted at `prefix` (e.g. "/admin/").
  pub fn admin(prefix: &str) -> Self {
    let mut table = Self::new();
    for route in Route::ALL {
      table.patterns.insert(route, format!("{prefix}{}", route.default_pattern()));
    }
    table
  }

  pub fn route(mut self, route: Route, pattern: impl Into<String>) -> Self {
    self.patterns.insert(route, pattern.into());
    self
  }
}

impl UrlResolver for RouteTable {
  fn reverse(&self, route: Route, args: &[u64]) -> Result<String, ToolbarError> {
    let pattern =
      self.patterns.get(&route).ok_or_else(|| ToolbarError::no_reverse_match(route.as_str(), args.len()))?;
    let pieces: Vec<&str> = pattern.split("{}").collect();
    if pieces.len() != args.len() + 1 {
      return Err(ToolbarError::no_reverse_match(route.as_str(), args.len()));
    }
    let mut out = String::with_capacity(pattern.len() + args.len() * 4);
    for (i, piece) in pieces.iter().enumerate() {
      out.push_str(piece);
      if let Some(arg) = args.get(i) {
        out.push_str(&arg.to_string());
      }
    }
    Ok(out)
  }
}

/// Append url-encoded query pairs to `base`, keeping pair order.
pub fn with_query(base: &str, pairs: &[(&str, String)]) -> String {
  if pairs.is_empty() {
    return base.to_string();
  }
  let query: Vec<String> =
    pairs.iter().map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v))).collect();
  let sep = if base.contains('?') { '&' } else { '?' };
  format!("{base}{sep}{}", query.join("&"))
}
