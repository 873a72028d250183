/* src/server/toolbar/rust/src/builder/admin.rs */

use crate::context::RenderContext;
use crate::errors::ToolbarError;
use crate::model::Site;
use crate::node::{
  ADMIN_MENU_IDENTIFIER, ADMIN_SITES_BREAK, ADMINISTRATION_BREAK, AjaxItem, LinkItem,
  MANAGE_PAGES_BREAK, Menu, PAGES_MENU_IDENTIFIER, SITES_MENU_IDENTIFIER, SideFrameItem,
  USER_SETTINGS_BREAK,
};
use crate::routes::Route;
use crate::toolbar::Toolbar;

/// The site-wide admin menu: pages, users, sites, administration, logout.
pub(super) fn add_admin_menu(toolbar: &mut Toolbar, ctx: &RenderContext<'_>) -> Result<(), ToolbarError> {
  let admin_menu = toolbar.get_or_create_menu(ADMIN_MENU_IDENTIFIER, ctx.t("Site")?);

  if ctx.can_change {
    let pages_menu = admin_menu.get_or_create_menu(PAGES_MENU_IDENTIFIER, ctx.t("Pages")?);
    pages_menu.add(SideFrameItem::new(ctx.t("Manage pages")?, ctx.url(Route::PageChangelist, &[])?));
    pages_menu.add_break(MANAGE_PAGES_BREAK);
    pages_menu.add(SideFrameItem::new(ctx.t("Add new page")?, ctx.url(Route::PageAdd, &[])?));
  }

  if ctx.services.permissions.can_change_users(ctx.user()) && !ctx.settings.user_model_swapped {
    admin_menu.add(SideFrameItem::new(ctx.t("Users")?, ctx.url(Route::UserChangelist, &[])?));
  }

  add_sites_menu(admin_menu, ctx)?;

  admin_menu.add(SideFrameItem::new(ctx.t("Administration")?, ctx.url(Route::AdminIndex, &[])?));
  admin_menu.add_break(ADMINISTRATION_BREAK);
  admin_menu.add(SideFrameItem::new(ctx.t("User settings")?, ctx.url(Route::UserSettings, &[])?));
  admin_menu.add_break(USER_SETTINGS_BREAK);
  admin_menu.add(AjaxItem::new(ctx.t("Logout")?, ctx.url(Route::Logout, &[])?).active(true));
  Ok(())
}

/// Sites the user can switch between. Under per-page permissions the list is
/// already filtered by the permission checker.
fn visible_sites(ctx: &RenderContext<'_>) -> Vec<Site> {
  if ctx.permissions_active {
    ctx.services.permissions.visible_sites_for(ctx.user())
  } else {
    ctx.services.sites.all_sites()
  }
}

fn add_sites_menu(admin_menu: &mut Menu, ctx: &RenderContext<'_>) -> Result<(), ToolbarError> {
  let sites = visible_sites(ctx);
  if sites.len() <= 1 {
    return Ok(());
  }
  let sites_menu = admin_menu.get_or_create_menu(SITES_MENU_IDENTIFIER, ctx.t("Sites")?);
  sites_menu.add(SideFrameItem::new(ctx.t("Admin Sites")?, ctx.url(Route::SiteChangelist, &[])?));
  sites_menu.add_break(ADMIN_SITES_BREAK);
  let current = ctx.site();
  for site in sites {
    let url = format!("{}://{}", ctx.settings.site_scheme, site.domain);
    sites_menu.add(LinkItem::new(site.name, url).active(site.id == current.id));
  }
  Ok(())
}
