/* src/server/toolbar/rust/src/builder/language.rs */

use tracing::debug;

use crate::context::RenderContext;
use crate::errors::ToolbarError;
use crate::i18n::default_language_url;
use crate::model::Language;
use crate::node::{LANGUAGE_MENU_IDENTIFIER, LinkItem};
use crate::toolbar::Toolbar;

/// Language switcher for the current site, built regardless of permissions.
pub(super) fn add_language_menu(toolbar: &mut Toolbar, ctx: &RenderContext<'_>) -> Result<(), ToolbarError> {
  let languages = ctx.services.languages.languages_for(ctx.site());
  let current = current_language(ctx, &languages)?;
  let language_menu = toolbar.get_or_create_menu(LANGUAGE_MENU_IDENTIFIER, ctx.t("Language")?);

  for language in &languages {
    let url = match ctx.request.language_changer {
      Some(changer) => changer(language.code.as_str()),
      None => default_language_url(ctx.request.path, &languages, &language.code),
    };
    let active = current.as_deref() == Some(language.code.as_str());
    language_menu.add(LinkItem::new(language.name.clone(), url).active(active));
  }
  Ok(())
}

/// The request language, if it is one of the site's languages. Resolution
/// failures of the language kind mean "nothing active"; others propagate.
fn current_language(ctx: &RenderContext<'_>, languages: &[Language]) -> Result<Option<String>, ToolbarError> {
  let resolved = ctx.services.language_resolver.resolve_request_language(ctx.request).and_then(|code| {
    if languages.iter().any(|l| l.code == code) { Ok(code) } else { Err(ToolbarError::UnknownLanguage(code)) }
  });
  match resolved {
    Ok(code) => Ok(Some(code)),
    Err(err) if err.is_language_error() => {
      debug!(%err, "request language unresolved, no active language");
      Ok(None)
    }
    Err(err) => Err(err),
  }
}
