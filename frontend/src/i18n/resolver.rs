use log::{debug, info};
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlDocument, UrlSearchParams};

use super::strings::Lang;
use crate::config::{LANG_COOKIE, LANG_COOKIE_MAX_AGE};

/// Picks the display language: a valid query value beats a valid cookie,
/// anything unrecognized falls through, and `en` is the last resort.
pub fn resolve_language(query: Option<&str>, cookie: Option<&str>) -> Lang {
    query
        .and_then(|q| q.parse().ok())
        .or_else(|| cookie.and_then(|c| c.parse().ok()))
        .unwrap_or_default()
}

/// Raw value of the first `name=value` pair in a `document.cookie` string.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.trim_start().split_once('=')?;
        if key != name || value.is_empty() {
            return None;
        }
        Some(value.to_string())
    })
}

pub fn lang_cookie(lang: Lang) -> String {
    format!(
        "{}={}; path=/; max-age={}",
        LANG_COOKIE, lang, LANG_COOKIE_MAX_AGE
    )
}

fn html_document() -> Option<HtmlDocument> {
    window()?.document()?.dyn_into::<HtmlDocument>().ok()
}

fn query_lang() -> Option<String> {
    let search = window()?.location().search().ok()?;
    UrlSearchParams::new_with_str(&search).ok()?.get("lang")
}

fn cookie_lang() -> Option<String> {
    let cookies = html_document()?.cookie().ok()?;
    cookie_value(&cookies, LANG_COOKIE)
}

/// Reads `?lang=` and the `lang` cookie from the current page. Without a
/// browser environment this is always `en`.
pub fn resolve_initial_language() -> Lang {
    let query = query_lang();
    let cookie = cookie_lang();
    let lang = resolve_language(query.as_deref(), cookie.as_deref());
    info!(
        "Initial language {} (query: {:?}, cookie: {:?})",
        lang, query, cookie
    );
    lang
}

/// Stores the selection for future visits. Disabled cookies just mean the
/// choice doesn't survive the page view.
pub fn persist_language(lang: Lang) {
    let written = html_document()
        .ok_or(())
        .and_then(|doc| doc.set_cookie(&lang_cookie(lang)).map_err(|_| ()));
    if written.is_err() {
        debug!("Could not persist language cookie for {}", lang);
    }
}

/// Keeps `<html lang>` in sync with the active language.
pub fn apply_document_language(lang: Lang) {
    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("lang", lang.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::strings::strings;

    #[test]
    fn query_wins_over_cookie() {
        assert_eq!(resolve_language(Some("it"), Some("en")), Lang::It);
        assert_eq!(resolve_language(Some("en"), Some("it")), Lang::En);
        assert_eq!(resolve_language(Some("it"), Some("garbage")), Lang::It);
    }

    #[test]
    fn invalid_query_falls_back_to_cookie() {
        assert_eq!(resolve_language(None, Some("it")), Lang::It);
        assert_eq!(resolve_language(Some("de"), Some("it")), Lang::It);
        assert_eq!(resolve_language(Some(""), Some("it")), Lang::It);
    }

    #[test]
    fn invalid_cookie_falls_back_to_english() {
        assert_eq!(resolve_language(None, None), Lang::En);
        assert_eq!(resolve_language(None, Some("IT")), Lang::En);
        assert_eq!(resolve_language(Some("xx"), Some("yy")), Lang::En);
    }

    #[test]
    fn finds_lang_among_other_cookies() {
        assert_eq!(cookie_value("lang=it", "lang").as_deref(), Some("it"));
        assert_eq!(
            cookie_value("theme=dark; lang=en; sid=42", "lang").as_deref(),
            Some("en")
        );
        assert_eq!(cookie_value("xlang=it; lang=en", "lang").as_deref(), Some("en"));
        assert_eq!(cookie_value("lang=it; lang=en", "lang").as_deref(), Some("it"));
        assert_eq!(cookie_value("theme=dark", "lang"), None);
        assert_eq!(cookie_value("", "lang"), None);
        assert_eq!(cookie_value("lang=", "lang"), None);
    }

    #[test]
    fn cookie_value_is_not_percent_decoded() {
        assert_eq!(cookie_value("lang=%69t", "lang").as_deref(), Some("%69t"));
        let cookie = cookie_value("lang=%69t", "lang");
        assert_eq!(resolve_language(None, cookie.as_deref()), Lang::En);
    }

    #[test]
    fn cookie_string_has_site_scope_and_one_year_expiry() {
        assert_eq!(lang_cookie(Lang::It), "lang=it; path=/; max-age=31536000");
        assert_eq!(lang_cookie(Lang::En), "lang=en; path=/; max-age=31536000");
    }

    #[test]
    fn italian_query_renders_italian_contact_title() {
        let lang = resolve_language(Some("it"), None);
        assert_eq!(strings(lang).contact.title, "Contattami");
    }

    #[test]
    fn no_sources_render_english_contact_title() {
        let lang = resolve_language(None, None);
        assert_eq!(strings(lang).contact.title, "Get in touch");
    }
}
