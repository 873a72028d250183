/* src/server/toolbar/rust/src/toolbar.rs */

use serde::Serialize;

use crate::errors::ToolbarError;
use crate::node::{Button, ButtonList, Menu, MenuNode, NodeList};

/// Root of the toolbar tree for one request. Built once, then handed to the
/// renderer untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Toolbar {
  items: NodeList,
}

impl Toolbar {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn get_or_create_menu(&mut self, identifier: &str, label: impl Into<String>) -> &mut Menu {
    self.items.get_or_create_menu(identifier, label)
  }

  pub fn add_button(&mut self, button: Button) {
    self.items.push(button);
  }

  pub fn add_button_list(&mut self, list: ButtonList) {
    self.items.push(list);
  }

  pub fn menu(&self, identifier: &str) -> Option<&Menu> {
    self.items.menu(identifier)
  }

  pub fn items(&self) -> &[MenuNode] {
    self.items.nodes()
  }

  pub fn buttons(&self) -> impl Iterator<Item = &Button> {
    self.items.nodes().iter().filter_map(|n| match n {
      MenuNode::Button(b) => Some(b),
      _ => None,
    })
  }

  pub fn button_list(&self, identifier: &str) -> Option<&ButtonList> {
    self.items.nodes().iter().find_map(|n| match n {
      MenuNode::ButtonList(list) if list.identifier == identifier => Some(list),
      _ => None,
    })
  }

  /// Total node count, nested nodes included.
  pub fn node_count(&self) -> usize {
    self.items.count()
  }
}

/// Serialize the tree for the rendering layer.
pub fn render_json(toolbar: &Toolbar) -> Result<String, ToolbarError> {
  Ok(serde_json::to_string(toolbar)?)
}
