use yew::prelude::*;

use crate::components::section::Section;
use crate::config;
use crate::i18n::strings::{strings, ContactStrings, Lang};
use crate::links::{LinkBar, SOCIAL};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    MultiLine { rows: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactField {
    pub name: &'static str,
    pub kind: FieldKind,
    pub placeholder: &'static str,
    pub required: bool,
}

impl ContactField {
    pub fn label(&self, t: &ContactStrings) -> &'static str {
        match self.name {
            "name" => t.name,
            "email" => t.email,
            _ => t.message,
        }
    }
}

/// Fields posted to the relay, in form order.
pub const CONTACT_FIELDS: [ContactField; 3] = [
    ContactField {
        name: "name",
        kind: FieldKind::Text,
        placeholder: "Your name",
        required: true,
    },
    ContactField {
        name: "email",
        kind: FieldKind::Email,
        placeholder: "you@example.com",
        required: true,
    },
    ContactField {
        name: "message",
        kind: FieldKind::MultiLine { rows: 6 },
        placeholder: "How can I help?",
        required: true,
    },
];

fn render_field(field: &ContactField, t: &ContactStrings) -> Html {
    let input_id = format!("contact-{}", field.name);
    let control = match field.kind {
        FieldKind::MultiLine { rows } => html! {
            <textarea
                id={input_id.clone()}
                name={field.name}
                rows={rows.to_string()}
                placeholder={field.placeholder}
                required={field.required}
                class="form-input"
            />
        },
        FieldKind::Text | FieldKind::Email => html! {
            <input
                id={input_id.clone()}
                type={if field.kind == FieldKind::Email { "email" } else { "text" }}
                name={field.name}
                placeholder={field.placeholder}
                required={field.required}
                class="form-input"
            />
        },
    };
    html! {
        <div class="form-field" key={field.name}>
            <label for={input_id} class="form-label">
                { format!("{} *", field.label(t)) }
            </label>
            { control }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub lang: Lang,
    #[prop_or_default]
    pub shown: bool,
}

/// Plain HTML form; the browser posts it straight to the relay and
/// navigates to whatever the relay answers with.
#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let t = strings(props.lang);
    html! {
        <Section id="contact" title={t.contact.title} shown={props.shown}>
            <div class="contact-grid">
                <LinkBar links={SOCIAL} />
                <form class="contact-form" action={config::form_endpoint()} method="POST">
                    { for CONTACT_FIELDS.iter().map(|field| render_field(field, &t.contact)) }
                    <button class="pill-button" type="submit">{t.contact.send}</button>
                </form>
            </div>
            <style>
                {r#"
                .contact-grid {
                    display: grid;
                    gap: 2rem;
                    align-items: start;
                }
                .contact-form > * + * {
                    margin-top: 1rem;
                }
                .form-label {
                    display: block;
                    margin-bottom: 0.5rem;
                }
                .form-input {
                    width: 100%;
                    box-sizing: border-box;
                    background: transparent;
                    color: inherit;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 6px;
                    padding: 0.5rem 0.75rem;
                    outline: none;
                    font: inherit;
                }
                .form-input:focus {
                    border-color: rgba(255, 255, 255, 0.4);
                }
                @media (min-width: 768px) {
                    .contact-grid {
                        grid-template-columns: repeat(2, minmax(0, 1fr));
                    }
                }
                "#}
            </style>
        </Section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_fields_are_required() {
        let names: Vec<_> = CONTACT_FIELDS.iter().map(|f| f.name).collect();
        assert_eq!(names, ["name", "email", "message"]);
        assert!(CONTACT_FIELDS.iter().all(|f| f.required));
    }

    #[test]
    fn email_field_is_email_shaped_and_message_is_multiline() {
        assert_eq!(CONTACT_FIELDS[1].kind, FieldKind::Email);
        assert_eq!(CONTACT_FIELDS[2].kind, FieldKind::MultiLine { rows: 6 });
    }

    #[test]
    fn labels_follow_language() {
        let it = &strings(Lang::It).contact;
        let labels: Vec<_> = CONTACT_FIELDS.iter().map(|f| f.label(it)).collect();
        assert_eq!(labels, ["Nome", "Email", "Messaggio"]);
        let en = &strings(Lang::En).contact;
        assert_eq!(CONTACT_FIELDS[0].label(en), "Name");
    }

    #[test]
    fn form_posts_to_a_remote_relay() {
        assert!(config::form_endpoint().starts_with("https://"));
    }
}
