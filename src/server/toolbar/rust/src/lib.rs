/* src/server/toolbar/rust/src/lib.rs */

pub mod builder;
pub mod config;
pub mod context;
pub mod errors;
pub mod i18n;
pub mod model;
pub mod node;
pub mod routes;
pub mod services;
pub mod toolbar;

// Re-exports for ergonomic use
pub use builder::{RevisionCursor, build_toolbar};
pub use config::{ToolbarSettings, load_toolbar_settings};
pub use context::{EditorMode, LanguageChangerFn, RenderContext, ToolbarRequest};
pub use errors::ToolbarError;
pub use i18n::{ChainLanguageResolver, MessageCatalog, default_language_url};
pub use model::{Language, Page, Revision, Site, TEMPLATE_INHERITANCE_MAGIC, TemplateChoice, User};
pub use node::{
  AjaxItem, BreakItem, Button, ButtonList, LinkItem, Menu, MenuNode, ModalItem, NodeList, Side,
  SideFrameItem,
};
pub use routes::{Route, RouteTable, with_query};
pub use services::{
  LanguageRegistry, LanguageResolver, PermissionChecker, RevisionStore, SiteRegistry,
  ToolbarServices, Translator, UrlResolver,
};
pub use toolbar::{Toolbar, render_json};
