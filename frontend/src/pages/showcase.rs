use yew::prelude::*;

use crate::components::section::{Section, TileGrid};
use crate::i18n::strings::{strings, Lang};
use crate::links::{LinkButton, PHOTO_PORTFOLIO};

const GRAPHICS_TILES: &[&str] = &["Brand / Logo", "Covers / Social Kits", "Motion Stingers"];
const PHOTO_TILES: &[&str] = &["Editorial", "Product", "Live"];
const WRITING_TILES: &[&str] = &["Fiction", "Lyrics", "Copy"];

#[derive(Properties, PartialEq)]
pub struct ShowcaseProps {
    pub lang: Lang,
    #[prop_or_default]
    pub shown: bool,
}

#[function_component(Graphics)]
pub fn graphics(props: &ShowcaseProps) -> Html {
    let t = strings(props.lang);
    html! {
        <Section id="graphics" title={t.graphics.title} subtitle={t.graphics.body} shown={props.shown}>
            <TileGrid tiles={GRAPHICS_TILES} />
        </Section>
    }
}

#[function_component(Photo)]
pub fn photo(props: &ShowcaseProps) -> Html {
    let t = strings(props.lang);
    html! {
        <Section id="photo" title={t.photo.title} subtitle={t.photo.body} shown={props.shown}>
            <div class="portfolio-link">
                <LinkButton link={PHOTO_PORTFOLIO} />
            </div>
            <TileGrid tiles={PHOTO_TILES} />
        </Section>
    }
}

#[function_component(Writing)]
pub fn writing(props: &ShowcaseProps) -> Html {
    let t = strings(props.lang);
    html! {
        <Section id="writing" title={t.writing.title} subtitle={t.writing.body} shown={props.shown}>
            <TileGrid tiles={WRITING_TILES} />
        </Section>
    }
}
