/* src/server/toolbar/rust/src/builder/publish.rs */

use tracing::debug;

use crate::context::RenderContext;
use crate::errors::ToolbarError;
use crate::model::Page;
use crate::node::{Button, Side};
use crate::routes::Route;
use crate::toolbar::Toolbar;

pub const PUBLISH_ACTION_CLASS: &str = "cms_btn-action";
pub const PUBLISH_CLASS: &str = "cms_btn-publish";
pub const PUBLISH_ACTIVE_CLASS: &str = "cms_btn-publish-active";

/// Right-hand publish button, enabled only while the draft is dirty.
pub(super) fn add_publish_button(
  toolbar: &mut Toolbar,
  ctx: &RenderContext<'_>,
  page: &Page,
) -> Result<(), ToolbarError> {
  if !ctx.services.permissions.can_publish(ctx.user(), page) {
    debug!(page = page.id, "no publish permission, publish button skipped");
    return Ok(());
  }
  let dirty = page.is_dirty();
  let title = if page.published { "Publish Changes" } else { "Publish Page now" };
  let mut button = Button::new(ctx.t(title)?, ctx.url(Route::PagePublish, &[page.id])?)
    .class(PUBLISH_ACTION_CLASS)
    .class(PUBLISH_CLASS)
    .active(dirty)
    .disabled(!dirty)
    .side(Side::Right);
  if dirty {
    button = button.class(PUBLISH_ACTIVE_CLASS);
  }
  toolbar.add_button(button);
  Ok(())
}
