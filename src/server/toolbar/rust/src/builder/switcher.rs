/* src/server/toolbar/rust/src/builder/switcher.rs */

use crate::context::RenderContext;
use crate::errors::ToolbarError;
use crate::node::{Button, ButtonList, MODE_SWITCHER_IDENTIFIER, Side};
use crate::toolbar::Toolbar;

pub const MODE_SWITCHER_CLASS: &str = "cms_toolbar-item-cms-mode-switcher";

/// Content/Structure toggle. Exactly one of the two buttons is active.
pub(super) fn add_mode_switcher(toolbar: &mut Toolbar, ctx: &RenderContext<'_>) -> Result<(), ToolbarError> {
  if !(ctx.edit_mode && ctx.can_change) {
    return Ok(());
  }
  let build = ctx.build_mode;
  let content = Button::new(ctx.t("Content")?, "?edit").active(!build).disabled(build);
  let structure = Button::new(ctx.t("Structure")?, "?build").active(build).disabled(!build);

  let mut switcher = ButtonList::new(MODE_SWITCHER_IDENTIFIER, Side::Right);
  switcher.extra_classes.insert(MODE_SWITCHER_CLASS.to_string());
  switcher.add_button(content).add_button(structure);
  toolbar.add_button_list(switcher);
  Ok(())
}
