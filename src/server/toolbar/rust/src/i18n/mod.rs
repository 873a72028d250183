/* src/server/toolbar/rust/src/i18n/mod.rs */

mod catalog;
mod changer;
mod resolve;

pub use catalog::MessageCatalog;
pub use changer::default_language_url;
pub use resolve::{ChainLanguageResolver, LANGUAGE_COOKIE};
