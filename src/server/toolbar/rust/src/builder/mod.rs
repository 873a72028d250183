/* src/server/toolbar/rust/src/builder/mod.rs */

mod admin;
mod history;
mod language;
mod page;
mod publish;
mod switcher;

#[cfg(test)]
mod tests;

use tracing::debug;

use crate::config::ToolbarSettings;
use crate::context::{RenderContext, ToolbarRequest};
use crate::errors::ToolbarError;
use crate::model::Page;
use crate::services::ToolbarServices;
use crate::toolbar::Toolbar;

pub use history::RevisionCursor;
pub use publish::{PUBLISH_ACTION_CLASS, PUBLISH_ACTIVE_CLASS, PUBLISH_CLASS};
pub use switcher::MODE_SWITCHER_CLASS;

/// Assemble the toolbar for one request.
///
/// Menus are appended in a fixed order: admin menu, page menu, history menu,
/// publish button, language menu, mode switcher. Any collaborator failure
/// other than an unknown request language aborts the build.
pub fn build_toolbar(
  request: &ToolbarRequest<'_>,
  services: ToolbarServices<'_>,
  settings: &ToolbarSettings,
) -> Result<Toolbar, ToolbarError> {
  let ctx = RenderContext::new(request, services, settings);
  debug!(
    user = %ctx.user().username,
    page = ?ctx.page.map(|p| p.id),
    edit = ctx.edit_mode,
    build = ctx.build_mode,
    "building toolbar"
  );

  let mut toolbar = Toolbar::new();
  admin::add_admin_menu(&mut toolbar, &ctx)?;
  if let Some(page) = ctx.page
    && request.is_current_app
  {
    add_cms_menus(&mut toolbar, &ctx, page)?;
  }
  language::add_language_menu(&mut toolbar, &ctx)?;
  switcher::add_mode_switcher(&mut toolbar, &ctx)?;

  debug!(nodes = toolbar.node_count(), "toolbar built");
  Ok(toolbar)
}

fn add_cms_menus(toolbar: &mut Toolbar, ctx: &RenderContext<'_>, page: &Page) -> Result<(), ToolbarError> {
  if !ctx.may_edit_page() {
    debug!(page = page.id, "no change permission, page controls skipped");
    return Ok(());
  }
  page::add_page_menu(toolbar, ctx, page)?;
  if ctx.edit_mode {
    history::add_history_menu(toolbar, ctx, page)?;
    publish::add_publish_button(toolbar, ctx, page)?;
  }
  Ok(())
}
