/* src/server/toolbar/rust/src/builder/page.rs */

use crate::context::RenderContext;
use crate::errors::ToolbarError;
use crate::model::Page;
use crate::node::{
  AjaxItem, LinkItem, Menu, ModalItem, PAGE_MENU_FIRST_BREAK, PAGE_MENU_IDENTIFIER,
  PAGE_MENU_SECOND_BREAK, PAGE_MENU_THIRD_BREAK, REFRESH_PAGE, TEMPLATE_MENU_BREAK,
  TEMPLATES_MENU_IDENTIFIER,
};
use crate::routes::{Route, with_query};
use crate::toolbar::Toolbar;

/// Menu for the current page. The caller has already checked change permission.
pub(super) fn add_page_menu(
  toolbar: &mut Toolbar,
  ctx: &RenderContext<'_>,
  page: &Page,
) -> Result<(), ToolbarError> {
  let not_edit_mode = !ctx.edit_mode;
  let menu = toolbar.get_or_create_menu(PAGE_MENU_IDENTIFIER, ctx.t("Page")?);

  menu.add(LinkItem::new(ctx.t("Edit Page")?, "?edit").disabled(ctx.edit_mode));
  menu.add(
    ModalItem::new(ctx.t("Page info")?, ctx.url(Route::PageChange, &[page.id])?)
      .disabled(not_edit_mode)
      .close_on_url_change()
      .on_close(REFRESH_PAGE),
  );
  if ctx.build_mode || ctx.edit_mode {
    add_templates_menu(menu, ctx, page)?;
  }

  let nav_title = if page.in_navigation { "Hide in navigation" } else { "Display in navigation" };
  menu.add(
    AjaxItem::new(ctx.t(nav_title)?, ctx.url(Route::PageChangeInNavigation, &[page.id])?)
      .disabled(not_edit_mode),
  );
  menu.add_break(PAGE_MENU_FIRST_BREAK);

  menu.add(
    ModalItem::new(ctx.t("Move page")?, ctx.url(Route::PageChangelist, &[])?).disabled(not_edit_mode),
  );
  add_create_page_items(menu, ctx, page)?;
  menu.add_break(PAGE_MENU_SECOND_BREAK);

  let permissions = ctx.services.permissions;
  let advanced_disabled = !permissions.can_change_advanced_settings(ctx.user(), page) || not_edit_mode;
  menu.add(
    ModalItem::new(ctx.t("Advanced settings")?, ctx.url(Route::PageAdvanced, &[page.id])?)
      .close_on_url_change()
      .disabled(advanced_disabled),
  );
  if ctx.permissions_active {
    let permission_disabled = not_edit_mode || !permissions.can_change_permissions(ctx.user(), page);
    menu.add(
      ModalItem::new(ctx.t("Permissions")?, ctx.url(Route::PagePermissions, &[page.id])?)
        .close_on_url_change()
        .disabled(permission_disabled),
    );
  }
  menu.add_break(PAGE_MENU_THIRD_BREAK);

  let publish_title = if page.published { "Unpublish page" } else { "Publish page" };
  menu.add(
    AjaxItem::new(ctx.t(publish_title)?, ctx.url(Route::PageChangeStatus, &[page.id])?)
      .disabled(not_edit_mode),
  );
  menu.add(
    ModalItem::new(ctx.t("Delete page")?, ctx.url(Route::PageDelete, &[page.id])?)
      .close_on_url_change()
      .on_close("/")
      .disabled(not_edit_mode),
  );
  Ok(())
}

/// One ajax item per configured template. The inheritance choice is set off
/// from the concrete templates by a break.
fn add_templates_menu(menu: &mut Menu, ctx: &RenderContext<'_>, page: &Page) -> Result<(), ToolbarError> {
  let templates_menu = menu.get_or_create_menu(TEMPLATES_MENU_IDENTIFIER, ctx.t("Templates")?);
  let action = ctx.url(Route::PageChangeTemplate, &[page.id])?;
  for template in &ctx.settings.templates {
    if template.is_inheritance() {
      templates_menu.add_break(TEMPLATE_MENU_BREAK);
    }
    templates_menu.add(
      AjaxItem::new(ctx.t(&template.name)?, action.clone())
        .data("template", template.path.clone())
        .active(page.template == template.path),
    );
  }
  Ok(())
}

fn add_create_page_items(menu: &mut Menu, ctx: &RenderContext<'_>, page: &Page) -> Result<(), ToolbarError> {
  let not_edit_mode = !ctx.edit_mode;
  let add_url = ctx.url(Route::PageAdd, &[])?;

  let child_url =
    with_query(&add_url, &[("position", "last-child".to_string()), ("target", page.id.to_string())]);
  menu.add(
    ModalItem::new(ctx.t("Add child page")?, child_url).close_on_url_change().disabled(not_edit_mode),
  );

  let mut sibling_data = vec![("position", "last-child".to_string())];
  if let Some(parent_id) = page.parent_id {
    sibling_data.push(("target", parent_id.to_string()));
  }
  menu.add(
    ModalItem::new(ctx.t("Add sibling page")?, with_query(&add_url, &sibling_data))
      .close_on_url_change()
      .disabled(not_edit_mode),
  );
  Ok(())
}
