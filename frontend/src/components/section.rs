use yew::prelude::*;

use crate::reveal::REVEAL_CLASS;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    /// Set once the section has scrolled into view.
    #[prop_or_default]
    pub shown: bool,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    html! {
        <section
            id={props.id.clone()}
            class={classes!("page-section", REVEAL_CLASS, props.shown.then(|| "show"))}
        >
            <div class="container">
                {
                    match props.title.as_ref().filter(|t| !t.is_empty()) {
                        Some(title) => html! { <h2 class="section-title">{title.clone()}</h2> },
                        None => html! {},
                    }
                }
                {
                    match props.subtitle.as_ref().filter(|s| !s.is_empty()) {
                        Some(subtitle) => html! { <p class="section-subtitle">{subtitle.clone()}</p> },
                        None => html! {},
                    }
                }
                { for props.children.iter() }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct TileGridProps {
    pub tiles: &'static [&'static str],
}

/// Row of three placeholder tiles used by the showcase sections.
#[function_component(TileGrid)]
pub fn tile_grid(props: &TileGridProps) -> Html {
    html! {
        <div class="tile-grid">
            { for props.tiles.iter().map(|tile| html! {
                <div key={*tile} class="tile">{*tile}</div>
            }) }
        </div>
    }
}
