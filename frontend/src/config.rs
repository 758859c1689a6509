pub const LANG_COOKIE: &str = "lang";
pub const LANG_COOKIE_MAX_AGE: u32 = 31_536_000; // one year

const DEFAULT_FORM_ENDPOINT: &str = "https://formspree.io/f/your-id";

/// Raw discography count override, baked in at build time.
pub fn discog_count_override() -> Option<&'static str> {
    option_env!("AINZFX_DISCOG_COUNT")
}

pub fn form_endpoint() -> &'static str {
    match option_env!("AINZFX_FORM_ENDPOINT") {
        Some(url) if !url.trim().is_empty() => url,
        _ => DEFAULT_FORM_ENDPOINT,
    }
}
