/* src/server/toolbar/rust/src/builder/tests/admin.rs */

use super::*;
use crate::node::{ADMIN_MENU_IDENTIFIER, PAGES_MENU_IDENTIFIER, SITES_MENU_IDENTIFIER};

#[test]
fn admin_menu_outline() {
  let toolbar = Fixture::new().toolbar();
  let admin = menu(&toolbar, ADMIN_MENU_IDENTIFIER);
  assert_eq!(admin.label, "Site");
  assert_eq!(
    outline(admin),
    vec!["Pages", "Users", "Administration", "|", "User settings", "|", "Logout"]
  );
}

#[test]
fn pages_submenu_links_to_page_admin() {
  let toolbar = Fixture::new().toolbar();
  let pages = menu(&toolbar, ADMIN_MENU_IDENTIFIER).menu(PAGES_MENU_IDENTIFIER).unwrap();
  assert_eq!(outline(pages), vec!["Manage pages", "|", "Add new page"]);
  let urls: Vec<_> = pages
    .items()
    .iter()
    .filter_map(|n| match n {
      MenuNode::SideFrame(item) => Some(item.url.as_str()),
      _ => None,
    })
    .collect();
  assert_eq!(urls, vec!["/admin/cms/page/", "/admin/cms/page/add/"]);
}

#[test]
fn logout_is_always_active() {
  let mut fixture = Fixture::new();
  fixture.permissions = FakePermissions::deny_all();
  let toolbar = fixture.toolbar();
  let Some(MenuNode::Ajax(logout)) = menu(&toolbar, ADMIN_MENU_IDENTIFIER).item("Logout") else {
    panic!("logout item missing");
  };
  assert!(logout.active);
  assert_eq!(logout.action, "/admin/logout/");
}

#[test]
fn pages_submenu_requires_page_change_permission() {
  let mut fixture = Fixture::new();
  fixture.permissions.change = false;
  let toolbar = fixture.toolbar();
  assert!(menu(&toolbar, ADMIN_MENU_IDENTIFIER).menu(PAGES_MENU_IDENTIFIER).is_none());
}

#[test]
fn pages_submenu_absent_without_current_page() {
  let mut fixture = Fixture::new();
  fixture.page = None;
  let toolbar = fixture.toolbar();
  assert_eq!(
    outline(menu(&toolbar, ADMIN_MENU_IDENTIFIER)),
    vec!["Users", "Administration", "|", "User settings", "|", "Logout"]
  );
}

#[test]
fn users_entry_needs_permission() {
  let mut fixture = Fixture::new();
  fixture.permissions.change_users = false;
  let toolbar = fixture.toolbar();
  assert!(menu(&toolbar, ADMIN_MENU_IDENTIFIER).item("Users").is_none());
}

#[test]
fn users_entry_hidden_for_swapped_user_model() {
  let mut fixture = Fixture::new();
  fixture.settings.user_model_swapped = true;
  let toolbar = fixture.toolbar();
  assert!(menu(&toolbar, ADMIN_MENU_IDENTIFIER).item("Users").is_none());
}

#[test]
fn single_site_has_no_sites_menu() {
  let toolbar = Fixture::new().toolbar();
  assert!(menu(&toolbar, ADMIN_MENU_IDENTIFIER).menu(SITES_MENU_IDENTIFIER).is_none());
}

#[test]
fn sites_menu_lists_every_site_without_page_permissions() {
  let mut fixture = Fixture::new();
  fixture.sites = FakeSites(vec![main_site(), second_site()]);
  let toolbar = fixture.toolbar();
  let sites = menu(&toolbar, ADMIN_MENU_IDENTIFIER).menu(SITES_MENU_IDENTIFIER).unwrap();
  assert_eq!(outline(sites), vec!["Admin Sites", "|", "example.com", "second"]);

  let links: Vec<_> = sites
    .items()
    .iter()
    .filter_map(|n| match n {
      MenuNode::Link(link) => Some((link.url.as_str(), link.active)),
      _ => None,
    })
    .collect();
  assert_eq!(links, vec![("http://example.com", true), ("http://second.example.com", false)]);
}

#[test]
fn sites_menu_sits_before_administration() {
  let mut fixture = Fixture::new();
  fixture.sites = FakeSites(vec![main_site(), second_site()]);
  let toolbar = fixture.toolbar();
  assert_eq!(
    outline(menu(&toolbar, ADMIN_MENU_IDENTIFIER)),
    vec!["Pages", "Users", "Sites", "Administration", "|", "User settings", "|", "Logout"]
  );
}

#[test]
fn restricted_user_sees_no_sites_menu() {
  let mut fixture = Fixture::new();
  fixture.permissions.enabled = true;
  fixture.permissions.visible_sites = vec![main_site()];
  fixture.sites = FakeSites(vec![main_site(), second_site()]);
  let toolbar = fixture.toolbar();
  assert!(menu(&toolbar, ADMIN_MENU_IDENTIFIER).menu(SITES_MENU_IDENTIFIER).is_none());
}

#[test]
fn permission_filtered_sites_are_used_when_enabled() {
  let mut fixture = Fixture::new();
  fixture.permissions.enabled = true;
  fixture.permissions.visible_sites = vec![main_site(), second_site()];
  fixture.sites = FakeSites(vec![main_site()]);
  let toolbar = fixture.toolbar();
  assert!(menu(&toolbar, ADMIN_MENU_IDENTIFIER).menu(SITES_MENU_IDENTIFIER).is_some());
}

#[test]
fn site_links_use_configured_scheme() {
  let mut fixture = Fixture::new();
  fixture.settings.site_scheme = "https".into();
  fixture.sites = FakeSites(vec![main_site(), second_site()]);
  let toolbar = fixture.toolbar();
  let sites = menu(&toolbar, ADMIN_MENU_IDENTIFIER).menu(SITES_MENU_IDENTIFIER).unwrap();
  assert!(matches!(sites.item("second"), Some(MenuNode::Link(l)) if l.url == "https://second.example.com"));
}

#[test]
fn requesting_admin_menu_again_reuses_it() {
  let mut toolbar = Fixture::new().toolbar();
  let before = toolbar.items().len();
  let admin = toolbar.get_or_create_menu(ADMIN_MENU_IDENTIFIER, "Other");
  assert_eq!(admin.label, "Site");
  admin.get_or_create_menu(PAGES_MENU_IDENTIFIER, "Pages");
  assert_eq!(toolbar.items().len(), before);
  let pages_count = menu(&toolbar, ADMIN_MENU_IDENTIFIER)
    .items()
    .iter()
    .filter(|n| matches!(n, MenuNode::Submenu(m) if m.identifier == PAGES_MENU_IDENTIFIER))
    .count();
  assert_eq!(pages_count, 1);
}
