use yew::prelude::*;

use crate::components::section::Section;
use crate::config;
use crate::discography::{covers, resolve_count};
use crate::i18n::strings::{strings, Lang};
use crate::links::{LinkBar, STREAMING};

#[derive(Properties, PartialEq)]
pub struct DiscographyGridProps {
    pub lang: Lang,
    #[prop_or_default]
    pub shown: bool,
    /// Fallback cover count when no build-time override is set.
    #[prop_or_default]
    pub count: Option<i64>,
}

#[function_component(DiscographyGrid)]
pub fn discography_grid(props: &DiscographyGridProps) -> Html {
    let t = strings(props.lang);
    let total = resolve_count(config::discog_count_override(), props.count);
    let cover_list = use_memo(|total| covers(*total), total);

    html! {
        <Section id="discog" title={t.discog.title} shown={props.shown}>
            <LinkBar links={STREAMING} class={classes!("sticky-bar")} />
            <div class="cover-grid">
                { for cover_list.iter().map(|cover| html! {
                    <img
                        key={cover.src.clone()}
                        src={cover.src.clone()}
                        alt={cover.alt.clone()}
                        class="cover"
                        loading="lazy"
                        decoding="async"
                    />
                }) }
            </div>
            <style>
                {r#"
                .sticky-bar {
                    position: sticky;
                    top: 5rem;
                    z-index: 10;
                    margin-bottom: 1.5rem;
                    padding: 0.5rem;
                    background: rgba(10, 10, 10, 0.7);
                    backdrop-filter: blur(8px);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 6px;
                }
                .cover-grid {
                    display: grid;
                    grid-template-columns: repeat(2, minmax(0, 1fr));
                    gap: 1rem;
                }
                .cover {
                    width: 100%;
                    aspect-ratio: 1 / 1;
                    object-fit: cover;
                    border-radius: 8px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                }
                @media (min-width: 640px) {
                    .cover-grid {
                        grid-template-columns: repeat(3, minmax(0, 1fr));
                    }
                }
                @media (min-width: 768px) {
                    .cover-grid {
                        grid-template-columns: repeat(4, minmax(0, 1fr));
                    }
                }
                "#}
            </style>
        </Section>
    }
}
