use log::debug;
use serde_json::Value;
use thiserror::Error;

use super::strings::{strings, Lang, Strings};

/// Leaf strings every language must provide, as JSON pointers into [`Strings`].
pub const REQUIRED_KEYS: &[&str] = &[
    "/nav/home",
    "/nav/discog",
    "/nav/graphics",
    "/nav/photo",
    "/nav/writing",
    "/nav/contact",
    "/hero/title",
    "/hero/subtitle",
    "/contact/title",
    "/contact/name",
    "/contact/email",
    "/contact/message",
    "/contact/send",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingKey {
    pub lang: Lang,
    pub key: &'static str,
}

impl MissingKey {
    /// Dotted form, e.g. `it.contact.title`.
    pub fn path(&self) -> String {
        format!("{}{}", self.lang, self.key.replace('/', "."))
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("i18n check failed: {}", join_paths(.missing))]
pub struct TranslationReport {
    pub missing: Vec<MissingKey>,
}

fn join_paths(missing: &[MissingKey]) -> String {
    missing.iter().map(MissingKey::path).collect::<Vec<_>>().join(", ")
}

fn missing_keys(lang: Lang, table: &Strings) -> Vec<MissingKey> {
    let value = match serde_json::to_value(table) {
        Ok(value) => value,
        Err(err) => {
            debug!("Could not serialize {} strings for validation: {}", lang, err);
            Value::Null
        }
    };
    missing_in_value(lang, &value)
}

fn missing_in_value(lang: Lang, value: &Value) -> Vec<MissingKey> {
    REQUIRED_KEYS
        .iter()
        .copied()
        .filter(|key| !matches!(value.pointer(key), Some(Value::String(s)) if !s.trim().is_empty()))
        .map(|key| MissingKey { lang, key })
        .collect()
}

/// Checks every supported language and collects all gaps instead of stopping
/// at the first one.
pub fn validate_table() -> Result<(), TranslationReport> {
    let missing: Vec<MissingKey> = Lang::ALL
        .iter()
        .flat_map(|&lang| missing_keys(lang, strings(lang)))
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(TranslationReport { missing })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::strings::*;

    #[test]
    fn shipped_table_is_complete() {
        assert_eq!(validate_table(), Ok(()));
    }

    #[test]
    fn every_leaf_is_non_empty() {
        for lang in Lang::ALL {
            let value = serde_json::to_value(strings(lang)).unwrap();
            for (section, fields) in value.as_object().unwrap() {
                for (field, leaf) in fields.as_object().unwrap() {
                    let text = leaf.as_str().unwrap();
                    assert!(!text.is_empty(), "{lang}.{section}.{field} is empty");
                }
            }
        }
    }

    #[test]
    fn languages_share_key_shape() {
        fn shape(value: &Value) -> Vec<String> {
            let mut keys = Vec::new();
            for (section, fields) in value.as_object().unwrap() {
                for field in fields.as_object().unwrap().keys() {
                    keys.push(format!("{section}.{field}"));
                }
            }
            keys.sort();
            keys
        }
        let en = serde_json::to_value(strings(Lang::En)).unwrap();
        let it = serde_json::to_value(strings(Lang::It)).unwrap();
        assert_eq!(shape(&en), shape(&it));
    }

    #[test]
    fn unserializable_table_reports_every_required_key() {
        let missing = missing_in_value(Lang::En, &Value::Null);
        assert_eq!(missing.len(), REQUIRED_KEYS.len());
        assert_eq!(missing[0].path(), "en.nav.home");
    }

    #[test]
    fn reports_every_empty_required_key() {
        let broken = Strings {
            nav: NavStrings {
                home: "",
                discog: "Discography",
                graphics: "Graphics",
                photo: "Photography",
                writing: "Writing",
                contact: "Contact",
                lang: "EN",
            },
            hero: HeroStrings {
                title: "Title",
                subtitle: "  ",
                cta1: "",
                cta2: "",
            },
            discog: DiscogStrings { title: "" },
            graphics: SectionCopy { title: "", body: "" },
            photo: SectionCopy { title: "", body: "" },
            writing: SectionCopy { title: "", body: "" },
            contact: ContactStrings {
                title: "Get in touch",
                name: "Name",
                email: "Email",
                message: "Message",
                send: "",
            },
        };

        let missing = missing_keys(Lang::It, &broken);
        let paths: Vec<String> = missing.iter().map(MissingKey::path).collect();
        // cta and section copy are optional, so only the required gaps show up
        assert_eq!(paths, vec!["it.nav.home", "it.hero.subtitle", "it.contact.send"]);

        let report = TranslationReport { missing };
        assert_eq!(
            report.to_string(),
            "i18n check failed: it.nav.home, it.hero.subtitle, it.contact.send"
        );
    }
}
