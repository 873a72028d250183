/* src/server/toolbar/rust/src/services.rs */

use crate::context::ToolbarRequest;
use crate::errors::ToolbarError;
use crate::model::{Language, Page, Revision, Site, User};
use crate::routes::Route;

/// Permission predicates. A denied check is `false`, never an error.
pub trait PermissionChecker {
  /// Whether per-page permissions are switched on for the installation.
  fn global_page_permission_enabled(&self) -> bool;
  /// Site-wide page change permission, independent of any single page.
  fn has_global_page_change_permission(&self, user: &User) -> bool;
  fn can_change_page(&self, user: &User, page: &Page) -> bool;
  fn can_publish(&self, user: &User, page: &Page) -> bool;
  fn can_change_advanced_settings(&self, user: &User, page: &Page) -> bool;
  fn can_change_permissions(&self, user: &User, page: &Page) -> bool;
  fn can_change_users(&self, user: &User) -> bool;
  /// Sites the user may manage under per-page permissions.
  fn visible_sites_for(&self, user: &User) -> Vec<Site>;
}

pub trait SiteRegistry {
  fn all_sites(&self) -> Vec<Site>;
}

pub trait UrlResolver {
  fn reverse(&self, route: Route, args: &[u64]) -> Result<String, ToolbarError>;
}

/// Stored revisions of a page, ordered oldest first.
pub trait RevisionStore {
  fn revisions_for(&self, page: &Page) -> Result<Vec<Revision>, ToolbarError>;
}

pub trait LanguageRegistry {
  fn languages_for(&self, site: &Site) -> Vec<Language>;
}

pub trait LanguageResolver {
  fn resolve_request_language(&self, request: &ToolbarRequest<'_>) -> Result<String, ToolbarError>;
}

pub trait Translator {
  fn translate(&self, key: &str) -> Result<String, ToolbarError>;
}

/// Everything the builder asks the outside world, bundled per request.
#[derive(Clone, Copy)]
pub struct ToolbarServices<'a> {
  pub permissions: &'a dyn PermissionChecker,
  pub sites: &'a dyn SiteRegistry,
  pub urls: &'a dyn UrlResolver,
  pub translator: &'a dyn Translator,
  pub languages: &'a dyn LanguageRegistry,
  pub language_resolver: &'a dyn LanguageResolver,
  /// Present only when revision tracking is installed.
  pub revisions: Option<&'a dyn RevisionStore>,
}
