/* src/server/toolbar/rust/src/model.rs */

use serde::{Deserialize, Serialize};

pub type PageId = u64;
pub type SiteId = u64;
pub type RevisionId = u64;

/// Template path that makes a page inherit its template from the parent.
pub const TEMPLATE_INHERITANCE_MAGIC: &str = "INHERIT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
  pub id: u64,
  pub username: String,
}

impl User {
  pub fn new(id: u64, username: impl Into<String>) -> Self {
    Self { id, username: username.into() }
  }
}

/// A CMS page as the toolbar sees it.
///
/// Public pages carry their draft counterpart in `draft`; the toolbar always
/// operates on the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
  pub id: PageId,
  pub parent_id: Option<PageId>,
  pub template: String,
  pub in_navigation: bool,
  pub published: bool,
  /// Draft holds changes not yet published.
  pub dirty: bool,
  /// Revision the draft currently points at, if any revision was recorded.
  pub revision_id: Option<RevisionId>,
  pub publisher_is_draft: bool,
  pub draft: Option<Box<Page>>,
}

impl Page {
  pub fn new(id: PageId) -> Self {
    Self {
      id,
      parent_id: None,
      template: TEMPLATE_INHERITANCE_MAGIC.to_string(),
      in_navigation: true,
      published: false,
      dirty: false,
      revision_id: None,
      publisher_is_draft: true,
      draft: None,
    }
  }

  /// The editable version of this page. A public page without an attached
  /// draft is its own draft.
  pub fn editable(&self) -> &Page {
    if self.publisher_is_draft {
      return self;
    }
    self.draft.as_deref().unwrap_or(self)
  }

  pub fn is_dirty(&self) -> bool {
    self.dirty
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
  pub id: SiteId,
  pub name: String,
  pub domain: String,
}

impl Site {
  pub fn new(id: SiteId, name: impl Into<String>, domain: impl Into<String>) -> Self {
    Self { id, name: name.into(), domain: domain.into() }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
  pub code: String,
  pub name: String,
}

impl Language {
  pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
    Self { code: code.into(), name: name.into() }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Revision {
  pub id: RevisionId,
}

/// A selectable page template: storage path plus display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateChoice {
  pub path: String,
  pub name: String,
}

impl TemplateChoice {
  pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
    Self { path: path.into(), name: name.into() }
  }

  pub fn is_inheritance(&self) -> bool {
    self.path == TEMPLATE_INHERITANCE_MAGIC
  }
}
