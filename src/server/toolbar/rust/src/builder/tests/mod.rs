/* src/server/toolbar/rust/src/builder/tests/mod.rs */

mod admin;

use super::build_toolbar;
use crate::config::ToolbarSettings;
use crate::context::{EditorMode, LanguageChangerFn, ToolbarRequest};
use crate::errors::ToolbarError;
use crate::i18n::MessageCatalog;
use crate::model::{Language, Page, Revision, Site, TemplateChoice, User};
use crate::node::{Menu, MenuNode};
use crate::routes::RouteTable;
use crate::services::{
  LanguageRegistry, LanguageResolver, PermissionChecker, RevisionStore, SiteRegistry,
  ToolbarServices, Translator,
};
use crate::toolbar::Toolbar;

// -- In-memory collaborators --

#[derive(Clone)]
pub(super) struct FakePermissions {
  pub(super) enabled: bool,
  pub(super) global_change: bool,
  pub(super) change: bool,
  pub(super) publish: bool,
  pub(super) advanced: bool,
  pub(super) change_permissions: bool,
  pub(super) change_users: bool,
  pub(super) visible_sites: Vec<Site>,
}

impl FakePermissions {
  pub(super) fn allow_all() -> Self {
    Self {
      enabled: false,
      global_change: true,
      change: true,
      publish: true,
      advanced: true,
      change_permissions: true,
      change_users: true,
      visible_sites: vec![main_site()],
    }
  }

  pub(super) fn deny_all() -> Self {
    Self {
      enabled: false,
      global_change: false,
      change: false,
      publish: false,
      advanced: false,
      change_permissions: false,
      change_users: false,
      visible_sites: vec![],
    }
  }
}

impl PermissionChecker for FakePermissions {
  fn global_page_permission_enabled(&self) -> bool {
    self.enabled
  }

  fn has_global_page_change_permission(&self, _user: &User) -> bool {
    self.global_change
  }

  fn can_change_page(&self, _user: &User, _page: &Page) -> bool {
    self.change
  }

  fn can_publish(&self, _user: &User, _page: &Page) -> bool {
    self.publish
  }

  fn can_change_advanced_settings(&self, _user: &User, _page: &Page) -> bool {
    self.advanced
  }

  fn can_change_permissions(&self, _user: &User, _page: &Page) -> bool {
    self.change_permissions
  }

  fn can_change_users(&self, _user: &User) -> bool {
    self.change_users
  }

  fn visible_sites_for(&self, _user: &User) -> Vec<Site> {
    self.visible_sites.clone()
  }
}

pub(super) struct FakeSites(pub(super) Vec<Site>);

impl SiteRegistry for FakeSites {
  fn all_sites(&self) -> Vec<Site> {
    self.0.clone()
  }
}

pub(super) struct FakeLanguages(pub(super) Vec<Language>);

impl LanguageRegistry for FakeLanguages {
  fn languages_for(&self, _site: &Site) -> Vec<Language> {
    self.0.clone()
  }
}

pub(super) enum FakeResolver {
  Code(&'static str),
  Unknown,
  Broken,
}

impl LanguageResolver for FakeResolver {
  fn resolve_request_language(&self, _request: &ToolbarRequest<'_>) -> Result<String, ToolbarError> {
    match self {
      Self::Code(code) => Ok((*code).to_string()),
      Self::Unknown => Err(ToolbarError::UnknownLanguage("xx".into())),
      Self::Broken => Err(ToolbarError::collaborator("session", "backend unavailable")),
    }
  }
}

pub(super) enum FakeRevisions {
  Stored(Vec<u64>),
  Broken,
}

impl RevisionStore for FakeRevisions {
  fn revisions_for(&self, _page: &Page) -> Result<Vec<Revision>, ToolbarError> {
    match self {
      Self::Stored(ids) => Ok(ids.iter().map(|&id| Revision { id }).collect()),
      Self::Broken => Err(ToolbarError::Revisions("database gone".into())),
    }
  }
}

/// Passes every key through except one, which fails.
pub(super) struct FailingTranslator(pub(super) &'static str);

impl Translator for FailingTranslator {
  fn translate(&self, key: &str) -> Result<String, ToolbarError> {
    if key == self.0 {
      return Err(ToolbarError::translation(key, "catalog unavailable"));
    }
    Ok(key.to_string())
  }
}

// -- Fixture --

pub(super) fn main_site() -> Site {
  Site::new(1, "example.com", "example.com")
}

pub(super) fn second_site() -> Site {
  Site::new(2, "second", "second.example.com")
}

pub(super) fn default_page() -> Page {
  let mut page = Page::new(10);
  page.parent_id = Some(3);
  page.template = "col_two.html".into();
  page.published = true;
  page
}

pub(super) fn default_templates() -> Vec<TemplateChoice> {
  vec![
    TemplateChoice::new("col_two.html", "two columns"),
    TemplateChoice::new("col_three.html", "three columns"),
    TemplateChoice::new("INHERIT", "Inherit the template of the nearest ancestor"),
  ]
}

pub(super) struct Fixture {
  pub(super) user: User,
  pub(super) site: Site,
  pub(super) page: Option<Page>,
  pub(super) path: String,
  pub(super) mode: EditorMode,
  pub(super) is_current_app: bool,
  pub(super) settings: ToolbarSettings,
  pub(super) permissions: FakePermissions,
  pub(super) sites: FakeSites,
  pub(super) languages: FakeLanguages,
  pub(super) resolver: FakeResolver,
  pub(super) revisions: Option<FakeRevisions>,
  pub(super) routes: RouteTable,
  pub(super) translator: Box<dyn Translator>,
  pub(super) changer: Option<Box<LanguageChangerFn>>,
}

impl Fixture {
  pub(super) fn new() -> Self {
    let settings = ToolbarSettings::new(default_templates());
    let routes = settings.route_table();
    Self {
      user: User::new(1, "admin"),
      site: main_site(),
      page: Some(default_page()),
      path: "/en/about/".into(),
      mode: EditorMode::EDIT,
      is_current_app: true,
      settings,
      permissions: FakePermissions::allow_all(),
      sites: FakeSites(vec![main_site()]),
      languages: FakeLanguages(vec![Language::new("en", "English"), Language::new("de", "Deutsch")]),
      resolver: FakeResolver::Code("en"),
      revisions: None,
      routes,
      translator: Box::new(MessageCatalog::passthrough()),
      changer: None,
    }
  }

  pub(super) fn build(&self) -> Result<Toolbar, ToolbarError> {
    let mut request = ToolbarRequest::new(&self.user, &self.site, &self.path)
      .mode(self.mode)
      .current_app(self.is_current_app);
    if let Some(page) = &self.page {
      request = request.page(page);
    }
    if let Some(changer) = &self.changer {
      request = request.language_changer(&**changer);
    }
    let services = ToolbarServices {
      permissions: &self.permissions,
      sites: &self.sites,
      urls: &self.routes,
      translator: &*self.translator,
      languages: &self.languages,
      language_resolver: &self.resolver,
      revisions: self.revisions.as_ref().map(|r| r as &dyn RevisionStore),
    };
    build_toolbar(&request, services, &self.settings)
  }

  pub(super) fn toolbar(&self) -> Toolbar {
    self.build().unwrap()
  }

  pub(super) fn page_mut(&mut self) -> &mut Page {
    self.page.as_mut().unwrap()
  }
}

// -- Tree helpers --

/// Labels in order, breaks rendered as "|".
pub(super) fn outline(menu: &Menu) -> Vec<String> {
  menu
    .items()
    .iter()
    .map(|n| match n {
      MenuNode::Break(_) => "|".to_string(),
      other => other.label().unwrap_or_default().to_string(),
    })
    .collect()
}

pub(super) fn menu<'t>(toolbar: &'t Toolbar, identifier: &str) -> &'t Menu {
  toolbar.menu(identifier).unwrap_or_else(|| panic!("menu '{identifier}' missing"))
}
