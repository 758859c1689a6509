use chrono::Datelike;
use log::{error, info};
use yew::prelude::*;

use crate::components::navbar::Navbar;
use crate::i18n::resolver::{apply_document_language, persist_language, resolve_initial_language};
use crate::i18n::strings::{strings, Lang};
use crate::i18n::validate::validate_table;
use crate::pages::contact::ContactForm;
use crate::pages::discography::DiscographyGrid;
use crate::pages::showcase::{Graphics, Photo, Writing};
use crate::reveal::{use_reveal, REVEAL_CLASS};

const HERO_VIDEO: &str = "/video/intro.mp4";
const HERO_IMAGE: &str = "/discography/1.jpg";

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub lang: Lang,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let t = strings(props.lang);
    html! {
        <section id="home" class="page-section hero-wrap">
            <video
                class="hero-video"
                src={HERO_VIDEO}
                poster={HERO_IMAGE}
                autoplay={true}
                muted={true}
                loop={true}
                playsinline={true}
            />
            <div class="hero-overlay"></div>
            <div class="container hero-content">
                <div class="hero-text">
                    <h1 class="hero-title">{t.hero.title}</h1>
                    <p class="hero-subtitle">{t.hero.subtitle}</p>
                    <div class="hero-cta-group">
                        <a class="pill-button" href="#discog">{t.hero.cta1}</a>
                        <a class="pill-button" href="#graphics">{t.hero.cta2}</a>
                    </div>
                </div>
                <div class="hero-image">
                    <img src={HERO_IMAGE} alt="hero" />
                    <div class="hero-image-shade"></div>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    #[prop_or_default]
    pub shown: bool,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = chrono::Local::now().year();
    html! {
        <footer id="footer" class={classes!("page-section", REVEAL_CLASS, props.shown.then(|| "show"))}>
            <div class="container footer-content">
                <span>{format!("© {} Ainz FX", year)}</span>
                <span>{"Built for speed"}</span>
            </div>
        </footer>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let lang = use_state(resolve_initial_language);
    let reveal = use_reveal();

    // Translation gaps are reported, never fatal
    use_effect_with_deps(
        move |_| {
            if let Err(report) = validate_table() {
                error!("{}", report);
            }
            || ()
        },
        (),
    );

    // Persist every change, including the initial resolution
    use_effect_with_deps(
        move |lang| {
            info!("Display language {}", lang);
            persist_language(*lang);
            apply_document_language(*lang);
            || ()
        },
        *lang,
    );

    let toggle_lang = {
        let lang = lang.clone();
        Callback::from(move |_: ()| lang.set((*lang).toggle()))
    };

    html! {
        <main class="one-page">
            <Navbar lang={*lang} on_toggle_lang={toggle_lang} />
            <Hero lang={*lang} />
            <DiscographyGrid lang={*lang} shown={reveal.is_shown("discog")} />
            <Graphics lang={*lang} shown={reveal.is_shown("graphics")} />
            <Photo lang={*lang} shown={reveal.is_shown("photo")} />
            <Writing lang={*lang} shown={reveal.is_shown("writing")} />
            <ContactForm lang={*lang} shown={reveal.is_shown("contact")} />
            <Footer shown={reveal.is_shown("footer")} />
            <style>
                {r#"
                html {
                    scroll-behavior: smooth;
                }
                body {
                    margin: 0;
                    background: #0a0a0a;
                    color: #fafafa;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }
                .one-page {
                    min-height: 100vh;
                    background: #0a0a0a;
                    color: #fafafa;
                }
                .container {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding-left: 1rem;
                    padding-right: 1rem;
                }
                .page-section {
                    padding: 4rem 0;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                }
                .reveal {
                    opacity: 0;
                    transform: translateY(16px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }
                .reveal.show {
                    opacity: 1;
                    transform: none;
                }
                .section-title {
                    font-size: 1.5rem;
                    font-weight: 600;
                    letter-spacing: -0.02em;
                    margin: 0 0 0.75rem;
                }
                .section-subtitle {
                    font-size: 1rem;
                    line-height: 1.6;
                    color: #d4d4d4;
                    max-width: 48rem;
                    margin: 0 0 2rem;
                }
                .pill-button {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    border-radius: 9999px;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    padding: 0.5rem 1rem;
                    color: inherit;
                    background: transparent;
                    text-decoration: none;
                    font: inherit;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }
                .pill-button:hover {
                    background: rgba(255, 255, 255, 0.1);
                }
                .pill-button.compact {
                    padding: 0.5rem 0.75rem;
                }
                .pill-button .icon {
                    width: 1rem;
                    height: 1rem;
                }
                .link-bar {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    gap: 0.75rem;
                }
                .portfolio-link {
                    margin-bottom: 1.5rem;
                }
                .tile-grid {
                    display: grid;
                    gap: 1rem;
                }
                .tile {
                    height: 10rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 8px;
                    color: #a3a3a3;
                }
                .hero-wrap {
                    position: relative;
                    overflow: hidden;
                    padding-top: 7rem;
                }
                .hero-video {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0.45;
                }
                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(180deg, rgba(0, 0, 0, 0.2), rgba(0, 0, 0, 0.6));
                }
                .hero-content {
                    position: relative;
                    z-index: 10;
                    display: grid;
                    gap: 2rem;
                    align-items: center;
                }
                .hero-title {
                    font-size: 1.875rem;
                    font-weight: 600;
                    letter-spacing: -0.02em;
                    margin: 0 0 1rem;
                }
                .hero-subtitle {
                    font-size: 1rem;
                    line-height: 1.6;
                    color: #d4d4d4;
                    max-width: 42rem;
                    margin: 0 0 1.5rem;
                }
                .hero-cta-group {
                    display: flex;
                    gap: 0.75rem;
                }
                .hero-image {
                    position: relative;
                    aspect-ratio: 4 / 5;
                    border-radius: 16px;
                    overflow: hidden;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                }
                .hero-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .hero-image-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.6), transparent);
                }
                .footer-content {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    font-size: 0.875rem;
                    color: #a3a3a3;
                }
                @media (min-width: 768px) {
                    .page-section {
                        padding: 6rem 0;
                    }
                    .hero-wrap {
                        padding-top: 7rem;
                    }
                    .section-title {
                        font-size: 1.875rem;
                    }
                    .hero-title {
                        font-size: 3rem;
                    }
                    .hero-content {
                        grid-template-columns: 7fr 5fr;
                    }
                    .tile-grid {
                        grid-template-columns: repeat(3, minmax(0, 1fr));
                    }
                }
                "#}
            </style>
        </main>
    }
}
