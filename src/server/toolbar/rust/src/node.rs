/* src/server/toolbar/rust/src/node.rs */

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Serialize, Serializer};

// Identifiers for lookup
pub const ADMIN_MENU_IDENTIFIER: &str = "admin-menu";
pub const PAGES_MENU_IDENTIFIER: &str = "pages";
pub const SITES_MENU_IDENTIFIER: &str = "sites";
pub const PAGE_MENU_IDENTIFIER: &str = "page";
pub const TEMPLATES_MENU_IDENTIFIER: &str = "templates";
pub const HISTORY_MENU_IDENTIFIER: &str = "history";
pub const LANGUAGE_MENU_IDENTIFIER: &str = "language";
pub const MODE_SWITCHER_IDENTIFIER: &str = "Mode Switcher";

pub const TEMPLATE_MENU_BREAK: &str = "Template Menu Break";
pub const PAGE_MENU_FIRST_BREAK: &str = "Page Menu First Break";
pub const PAGE_MENU_SECOND_BREAK: &str = "Page Menu Second Break";
pub const PAGE_MENU_THIRD_BREAK: &str = "Page Menu Third Break";
pub const HISTORY_MENU_BREAK: &str = "History Menu Break";
pub const MANAGE_PAGES_BREAK: &str = "Manage Pages Break";
pub const ADMIN_SITES_BREAK: &str = "Admin Sites Break";
pub const ADMINISTRATION_BREAK: &str = "Administration Break";
pub const USER_SETTINGS_BREAK: &str = "User Settings Break";

/// Modal on-close action asking the client to reload the current page.
pub const REFRESH_PAGE: &str = "REFRESH_PAGE";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
  #[default]
  Left,
  Right,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkItem {
  pub label: String,
  pub url: String,
  pub active: bool,
  pub disabled: bool,
}

impl LinkItem {
  pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
    Self { label: label.into(), url: url.into(), active: false, disabled: false }
  }

  pub fn active(mut self, active: bool) -> Self {
    self.active = active;
    self
  }

  pub fn disabled(mut self, disabled: bool) -> Self {
    self.disabled = disabled;
    self
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AjaxItem {
  pub label: String,
  pub action: String,
  pub data: BTreeMap<String, String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub question: Option<String>,
  pub active: bool,
  pub disabled: bool,
}

impl AjaxItem {
  pub fn new(label: impl Into<String>, action: impl Into<String>) -> Self {
    Self {
      label: label.into(),
      action: action.into(),
      data: BTreeMap::new(),
      question: None,
      active: false,
      disabled: false,
    }
  }

  pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
    self.data.insert(key.into(), value.into());
    self
  }

  pub fn question(mut self, question: impl Into<String>) -> Self {
    self.question = Some(question.into());
    self
  }

  pub fn active(mut self, active: bool) -> Self {
    self.active = active;
    self
  }

  pub fn disabled(mut self, disabled: bool) -> Self {
    self.disabled = disabled;
    self
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModalItem {
  pub label: String,
  pub url: String,
  pub disabled: bool,
  /// Close the dialog when the framed document navigates elsewhere.
  pub close_on_url_change: bool,
  /// `REFRESH_PAGE` or a URL the client redirects to after closing.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub on_close: Option<String>,
}

impl ModalItem {
  pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
    Self {
      label: label.into(),
      url: url.into(),
      disabled: false,
      close_on_url_change: false,
      on_close: None,
    }
  }

  pub fn disabled(mut self, disabled: bool) -> Self {
    self.disabled = disabled;
    self
  }

  pub fn close_on_url_change(mut self) -> Self {
    self.close_on_url_change = true;
    self
  }

  pub fn on_close(mut self, action: impl Into<String>) -> Self {
    self.on_close = Some(action.into());
    self
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SideFrameItem {
  pub label: String,
  pub url: String,
}

impl SideFrameItem {
  pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
    Self { label: label.into(), url: url.into() }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakItem {
  pub identifier: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Button {
  pub label: String,
  pub url: String,
  pub extra_classes: BTreeSet<String>,
  pub active: bool,
  pub disabled: bool,
  pub side: Side,
}

impl Button {
  pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
    Self {
      label: label.into(),
      url: url.into(),
      extra_classes: BTreeSet::new(),
      active: false,
      disabled: false,
      side: Side::Left,
    }
  }

  pub fn class(mut self, class: impl Into<String>) -> Self {
    self.extra_classes.insert(class.into());
    self
  }

  pub fn active(mut self, active: bool) -> Self {
    self.active = active;
    self
  }

  pub fn disabled(mut self, disabled: bool) -> Self {
    self.disabled = disabled;
    self
  }

  pub fn side(mut self, side: Side) -> Self {
    self.side = side;
    self
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonList {
  pub identifier: String,
  pub extra_classes: BTreeSet<String>,
  pub side: Side,
  pub buttons: Vec<Button>,
}

impl ButtonList {
  pub fn new(identifier: impl Into<String>, side: Side) -> Self {
    Self { identifier: identifier.into(), extra_classes: BTreeSet::new(), side, buttons: Vec::new() }
  }

  pub fn class(mut self, class: impl Into<String>) -> Self {
    self.extra_classes.insert(class.into());
    self
  }

  /// Buttons inherit the list's side.
  pub fn add_button(&mut self, button: Button) -> &mut Self {
    self.buttons.push(button.side(self.side));
    self
  }
}

/// One entry of the toolbar tree, tagged by `kind` for the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuNode {
  Link(LinkItem),
  Ajax(AjaxItem),
  Modal(ModalItem),
  SideFrame(SideFrameItem),
  Submenu(Menu),
  Break(BreakItem),
  Button(Button),
  ButtonList(ButtonList),
}

impl MenuNode {
  pub fn label(&self) -> Option<&str> {
    match self {
      Self::Link(item) => Some(&item.label),
      Self::Ajax(item) => Some(&item.label),
      Self::Modal(item) => Some(&item.label),
      Self::SideFrame(item) => Some(&item.label),
      Self::Submenu(menu) => Some(&menu.label),
      Self::Button(button) => Some(&button.label),
      Self::Break(_) | Self::ButtonList(_) => None,
    }
  }

  pub fn is_break(&self) -> bool {
    matches!(self, Self::Break(_))
  }

  /// Number of nodes in this subtree, itself included.
  pub fn count(&self) -> usize {
    match self {
      Self::Submenu(menu) => 1 + menu.children.count(),
      Self::ButtonList(list) => 1 + list.buttons.len(),
      _ => 1,
    }
  }
}

macro_rules! impl_from_item {
  ($item:ty, $variant:ident) => {
    impl From<$item> for MenuNode {
      fn from(item: $item) -> Self {
        MenuNode::$variant(item)
      }
    }
  };
}

impl_from_item!(LinkItem, Link);
impl_from_item!(AjaxItem, Ajax);
impl_from_item!(ModalItem, Modal);
impl_from_item!(SideFrameItem, SideFrame);
impl_from_item!(Button, Button);
impl_from_item!(ButtonList, ButtonList);

/// Ordered children with get-or-create lookup of nested menus by identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeList {
  nodes: Vec<MenuNode>,
  menus: HashMap<String, usize>,
}

impl NodeList {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn push(&mut self, node: impl Into<MenuNode>) {
    self.nodes.push(node.into());
  }

  pub fn add_break(&mut self, identifier: impl Into<String>) {
    self.nodes.push(MenuNode::Break(BreakItem { identifier: identifier.into() }));
  }

  /// Return the menu registered under `identifier`, creating it at the end
  /// of the list on first request. The label of an existing menu is kept.
  pub fn get_or_create_menu(&mut self, identifier: &str, label: impl Into<String>) -> &mut Menu {
    let idx = match self.menu_index(identifier) {
      Some(idx) => idx,
      None => {
        let idx = self.nodes.len();
        self.nodes.push(MenuNode::Submenu(Menu::new(identifier, label)));
        self.menus.insert(identifier.to_string(), idx);
        idx
      }
    };
    match &mut self.nodes[idx] {
      MenuNode::Submenu(menu) => menu,
      _ => unreachable!("menu_index only returns submenu positions"),
    }
  }

  /// Position of the submenu registered under `identifier`. An entry that no
  /// longer points at that submenu counts as unregistered.
  fn menu_index(&self, identifier: &str) -> Option<usize> {
    let idx = *self.menus.get(identifier)?;
    match self.nodes.get(idx)? {
      MenuNode::Submenu(menu) if menu.identifier == identifier => Some(idx),
      _ => None,
    }
  }

  pub fn menu(&self, identifier: &str) -> Option<&Menu> {
    match self.nodes.get(self.menu_index(identifier)?)? {
      MenuNode::Submenu(menu) => Some(menu),
      _ => None,
    }
  }

  pub fn nodes(&self) -> &[MenuNode] {
    &self.nodes
  }

  pub fn len(&self) -> usize {
    self.nodes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }

  pub fn position_of_break(&self, identifier: &str) -> Option<usize> {
    self
      .nodes
      .iter()
      .position(|n| matches!(n, MenuNode::Break(b) if b.identifier == identifier))
  }

  pub fn find_by_label(&self, label: &str) -> Option<&MenuNode> {
    self.nodes.iter().find(|n| n.label() == Some(label))
  }

  pub fn count(&self) -> usize {
    self.nodes.iter().map(MenuNode::count).sum()
  }
}

impl Serialize for NodeList {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    self.nodes.serialize(serializer)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Menu {
  pub identifier: String,
  pub label: String,
  pub children: NodeList,
}

impl Menu {
  pub fn new(identifier: impl Into<String>, label: impl Into<String>) -> Self {
    Self { identifier: identifier.into(), label: label.into(), children: NodeList::new() }
  }

  pub fn get_or_create_menu(&mut self, identifier: &str, label: impl Into<String>) -> &mut Menu {
    self.children.get_or_create_menu(identifier, label)
  }

  pub fn add(&mut self, node: impl Into<MenuNode>) {
    self.children.push(node);
  }

  pub fn add_break(&mut self, identifier: impl Into<String>) {
    self.children.add_break(identifier);
  }

  pub fn menu(&self, identifier: &str) -> Option<&Menu> {
    self.children.menu(identifier)
  }

  pub fn items(&self) -> &[MenuNode] {
    self.children.nodes()
  }

  pub fn item(&self, label: &str) -> Option<&MenuNode> {
    self.children.find_by_label(label)
  }
}
