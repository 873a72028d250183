/* src/server/toolbar/rust/src/context.rs */

use tracing::trace;

use crate::config::ToolbarSettings;
use crate::errors::ToolbarError;
use crate::model::{Page, Site, User};
use crate::routes::Route;
use crate::services::ToolbarServices;

/// Per-request override of the language switch targets: code -> URL.
pub type LanguageChangerFn = dyn Fn(&str) -> String + Send + Sync;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EditorMode {
  pub edit: bool,
  pub build: bool,
}

impl EditorMode {
  pub const OFF: Self = Self { edit: false, build: false };
  pub const EDIT: Self = Self { edit: true, build: false };
  pub const BUILD: Self = Self { edit: true, build: true };

  /// Apply the toolbar query flags on top of the session state.
  /// `edit_off` wins over `build`, which wins over `edit`.
  pub fn from_query(query: &str, session: EditorMode) -> EditorMode {
    let query = query.strip_prefix('?').unwrap_or(query);
    let has = |flag: &str| {
      query.split('&').any(|pair| pair.split_once('=').map_or(pair, |(k, _)| k) == flag)
    };
    if has("edit_off") {
      Self::OFF
    } else if has("build") {
      Self::BUILD
    } else if has("edit") {
      Self::EDIT
    } else {
      session
    }
  }
}

/// The inbound request, reduced to what the toolbar needs.
pub struct ToolbarRequest<'a> {
  pub user: &'a User,
  pub path: &'a str,
  pub current_site: &'a Site,
  pub current_page: Option<&'a Page>,
  pub mode: EditorMode,
  /// Whether the request is served by the CMS page application itself.
  pub is_current_app: bool,
  pub cookie_header: Option<&'a str>,
  pub accept_language: Option<&'a str>,
  pub language_changer: Option<&'a LanguageChangerFn>,
}

impl<'a> ToolbarRequest<'a> {
  pub fn new(user: &'a User, current_site: &'a Site, path: &'a str) -> Self {
    Self {
      user,
      path,
      current_site,
      current_page: None,
      mode: EditorMode::OFF,
      is_current_app: true,
      cookie_header: None,
      accept_language: None,
      language_changer: None,
    }
  }

  pub fn page(mut self, page: &'a Page) -> Self {
    self.current_page = Some(page);
    self
  }

  pub fn mode(mut self, mode: EditorMode) -> Self {
    self.mode = mode;
    self
  }

  pub fn current_app(mut self, is_current_app: bool) -> Self {
    self.is_current_app = is_current_app;
    self
  }

  pub fn cookies(mut self, header: &'a str) -> Self {
    self.cookie_header = Some(header);
    self
  }

  pub fn accept_language(mut self, header: &'a str) -> Self {
    self.accept_language = Some(header);
    self
  }

  pub fn language_changer(mut self, changer: &'a LanguageChangerFn) -> Self {
    self.language_changer = Some(changer);
    self
  }
}

/// Request-scoped facts computed once before any sub-builder runs.
pub struct RenderContext<'a> {
  pub request: &'a ToolbarRequest<'a>,
  pub services: ToolbarServices<'a>,
  pub settings: &'a ToolbarSettings,
  /// Editable (draft) version of the current page.
  pub page: Option<&'a Page>,
  pub edit_mode: bool,
  pub build_mode: bool,
  pub can_change: bool,
  pub permissions_active: bool,
  pub has_global_change_permission: bool,
}

impl<'a> RenderContext<'a> {
  pub fn new(
    request: &'a ToolbarRequest<'a>,
    services: ToolbarServices<'a>,
    settings: &'a ToolbarSettings,
  ) -> Self {
    let page = request.current_page.map(Page::editable);
    let permissions = services.permissions;
    let can_change = page.is_some_and(|p| permissions.can_change_page(request.user, p));
    let permissions_active = permissions.global_page_permission_enabled();
    let has_global_change_permission =
      permissions_active && permissions.has_global_page_change_permission(request.user);
    trace!(can_change, permissions_active, has_global_change_permission, "toolbar permissions resolved");
    Self {
      request,
      services,
      settings,
      page,
      edit_mode: request.mode.edit,
      build_mode: request.mode.build,
      can_change,
      permissions_active,
      has_global_change_permission,
    }
  }

  pub fn user(&self) -> &'a User {
    self.request.user
  }

  pub fn site(&self) -> &'a Site {
    self.request.current_site
  }

  /// Page-level controls require either the global or the page permission.
  pub fn may_edit_page(&self) -> bool {
    self.has_global_change_permission || self.can_change
  }

  pub fn t(&self, key: &str) -> Result<String, ToolbarError> {
    self.services.translator.translate(key)
  }

  pub fn url(&self, route: Route, args: &[u64]) -> Result<String, ToolbarError> {
    self.services.urls.reverse(route, args)
  }
}
