/* src/server/toolbar/rust/src/builder/history.rs */

use crate::context::RenderContext;
use crate::errors::ToolbarError;
use crate::model::{Page, Revision, RevisionId};
use crate::node::{AjaxItem, HISTORY_MENU_BREAK, HISTORY_MENU_IDENTIFIER, ModalItem};
use crate::routes::Route;
use crate::toolbar::Toolbar;

/// Undo/redo availability relative to the page's revision pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevisionCursor {
  pub has_undo: bool,
  pub has_redo: bool,
}

impl RevisionCursor {
  /// Without a pointer the newest revision is current: undo needs a second
  /// revision, redo is impossible.
  pub fn new(revisions: &[Revision], pointer: Option<RevisionId>) -> Self {
    match pointer {
      Some(current) => Self {
        has_undo: revisions.iter().any(|r| r.id < current),
        has_redo: revisions.iter().any(|r| r.id > current),
      },
      None => Self { has_undo: revisions.len() > 1, has_redo: false },
    }
  }
}

pub(super) fn add_history_menu(
  toolbar: &mut Toolbar,
  ctx: &RenderContext<'_>,
  page: &Page,
) -> Result<(), ToolbarError> {
  let history_menu = toolbar.get_or_create_menu(HISTORY_MENU_IDENTIFIER, ctx.t("History")?);

  if let Some(store) = ctx.services.revisions {
    let revisions = store.revisions_for(page)?;
    let cursor = RevisionCursor::new(&revisions, page.revision_id);
    history_menu.add(
      AjaxItem::new(ctx.t("Undo")?, ctx.url(Route::PageUndo, &[page.id])?).disabled(!cursor.has_undo),
    );
    history_menu.add(
      AjaxItem::new(ctx.t("Redo")?, ctx.url(Route::PageRedo, &[page.id])?).disabled(!cursor.has_redo),
    );
    history_menu.add_break(HISTORY_MENU_BREAK);
  }

  history_menu.add(
    AjaxItem::new(ctx.t("Revert to live")?, ctx.url(Route::PageRevert, &[page.id])?)
      .question(ctx.t("Are you sure you want to revert to live?")?)
      .disabled(!page.is_dirty()),
  );
  history_menu.add(ModalItem::new(ctx.t("View history")?, ctx.url(Route::PageHistory, &[page.id])?));
  Ok(())
}
