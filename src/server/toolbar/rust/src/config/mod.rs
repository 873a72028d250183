/* src/server/toolbar/rust/src/config/mod.rs */

mod loader;
mod types;


pub use loader::load_toolbar_settings;
pub use types::ToolbarSettings;
