use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::i18n::strings::{strings, Lang};

const SCROLLED_AFTER_PX: f64 = 8.0;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub lang: Lang,
    pub on_toggle_lang: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let t = strings(props.lang);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let is_scrolled = is_scrolled.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(scroll_y) = win.scroll_y() {
                                    is_scrolled.set(scroll_y > SCROLLED_AFTER_PX);
                                }
                            }
                        }
                    });
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                    // Initial check, the page may load mid-scroll
                    if let Ok(scroll_y) = window.scroll_y() {
                        is_scrolled.set(scroll_y > SCROLLED_AFTER_PX);
                    }
                    Box::new(move || {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    let toggle_lang = {
        let on_toggle_lang = props.on_toggle_lang.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_lang.emit(());
        })
    };

    html! {
        <header class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="container nav-content">
                <a href="#home" class="nav-logo">{"Ainz FX"}</a>
                <nav class="nav-right">
                    <a class="nav-link" href="#home">{t.nav.home}</a>
                    <a class="nav-link" href="#discog">{t.nav.discog}</a>
                    <a class="nav-link" href="#graphics">{t.nav.graphics}</a>
                    <a class="nav-link" href="#photo">{t.nav.photo}</a>
                    <a class="nav-link" href="#writing">{t.nav.writing}</a>
                    <a class="nav-link" href="#contact">{t.nav.contact}</a>
                    <button
                        class="lang-toggle"
                        onclick={toggle_lang}
                        aria-label="Switch language"
                        title="Switch language"
                    >
                        {t.nav.lang}
                    </button>
                </nav>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: transparent;
                    transition: background 0.3s ease, backdrop-filter 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(0, 0, 0, 0.4);
                    backdrop-filter: blur(8px);
                }
                .nav-content {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding-top: 0.75rem;
                    padding-bottom: 0.75rem;
                }
                .nav-logo {
                    font-size: 0.875rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    color: #a3a3a3;
                    text-decoration: none;
                }
                .nav-right {
                    display: none;
                    gap: 1.5rem;
                    align-items: center;
                }
                .nav-link {
                    font-size: 0.875rem;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    color: inherit;
                    text-decoration: none;
                    transition: opacity 0.2s ease;
                }
                .nav-link:hover {
                    opacity: 0.8;
                }
                .lang-toggle {
                    margin-left: 1rem;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 6px;
                    padding: 0.25rem 0.5rem;
                    background: transparent;
                    color: inherit;
                    cursor: pointer;
                }
                .lang-toggle:hover {
                    background: rgba(255, 255, 255, 0.1);
                }
                @media (min-width: 768px) {
                    .nav-right {
                        display: flex;
                    }
                }
                "#}
            </style>
        </header>
    }
}
