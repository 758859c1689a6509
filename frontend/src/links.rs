use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Spotify,
    AmazonMusic,
    YouTube,
    Instagram,
    TikTok,
    Telegram,
    Threads,
    Facebook,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExternalLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Option<Icon>,
}

pub const STREAMING: &[ExternalLink] = &[
    ExternalLink {
        label: "Spotify",
        href: "https://open.spotify.com/artist/6yIxoCzbUHZAwHnyVdfzjK?si=-9bTbKhqS4K0WkLZR806bA",
        icon: Some(Icon::Spotify),
    },
    ExternalLink {
        label: "Amazon Music",
        href: "https://music.amazon.it/artists/B0FGKQTC1M/ainzcreative85?marketplaceId=APJ6JRA9NG5V4&musicTerritory=IT&ref=dm_sh_2K5GJvt5pb0dv4r2EDxtlBnrZ",
        icon: Some(Icon::AmazonMusic),
    },
    ExternalLink {
        label: "YouTube",
        href: "https://youtube.com/channel/UCNLsA9dc5i2N6tys6ZTSZzA?si=9LN1A5GOZh__mQYD",
        icon: Some(Icon::YouTube),
    },
];

pub const SOCIAL: &[ExternalLink] = &[
    ExternalLink {
        label: "Instagram",
        href: "https://www.instagram.com/ainz_fx_cristiano_manzi?igsh=MXM0YW02YXh0NnNoeQ==",
        icon: Some(Icon::Instagram),
    },
    ExternalLink {
        label: "TikTok",
        href: "https://www.tiktok.com/@ainz_fx_cristiano_manzi?_r=1&_t=ZN-91JKC9eh8KM",
        icon: Some(Icon::TikTok),
    },
    ExternalLink {
        label: "Telegram",
        href: "https://t.me/CristianoManziPH",
        icon: Some(Icon::Telegram),
    },
    ExternalLink {
        label: "Threads",
        href: "https://www.threads.com/@ainz_fx_cristiano_manzi",
        icon: Some(Icon::Threads),
    },
    ExternalLink {
        label: "Facebook",
        href: "https://www.facebook.com/share/19tpG2uBzr/",
        icon: Some(Icon::Facebook),
    },
];

pub const PHOTO_PORTFOLIO: ExternalLink = ExternalLink {
    label: "Photography Portfolio",
    href: "https://overlord85.wixsite.com/cris-manzi-ph-advert",
    icon: None,
};

fn icon_svg(icon: Icon) -> Html {
    match icon {
        Icon::Spotify => html! {
            <svg class="icon" width="18" height="18" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg" fill="currentColor">
                <path d="M12 2a10 10 0 1 0 .001 20.001A10 10 0 0 0 12 2zm4.49 14.13a.75.75 0 0 1-1.03.25c-2.82-1.72-6.38-2.11-10.56-1.17a.75.75 0 1 1-.32-1.46c4.56-1 8.47-.56 11.6 1.33.36.22.48.69.25 1.05zm1.42-3.06a.94.94 0 0 1-1.29.31c-3.23-1.98-8.15-2.56-11.97-1.42a.94.94 0 1 1-.54-1.8c4.27-1.29 9.7-.64 13.38 1.57.44.27.58.86.31 1.34zm.14-3.22c-3.7-2.2-9.83-2.4-13.3-1.33a1.12 1.12 0 1 1-.65-2.15c4.02-1.22 10.93-.97 15.22 1.6a1.12 1.12 0 0 1-1.27 1.88z"/>
            </svg>
        },
        Icon::AmazonMusic => html! {
            <svg class="icon" width="18" height="18" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg" fill="currentColor">
                <path d="M20.8 16.8c-3.4 2.4-7.6 3.3-12.5 2.6-.7-.1-1.2.4-1.3 1.1-.1.7.4 1.2 1.1 1.3 5.4.8 10.1-.3 13.9-3 .6-.4.7-1.2.3-1.8-.4-.6-1.2-.7-1.8-.2z"/>
                <path d="M6.6 17.4c-1.4-.4-2.8-1-4.2-1.7-.6-.3-1.3 0-1.6.6-.3.6 0 1.3.6 1.6 1.5.8 3.1 1.5 4.7 1.9.7.2 1.3-.3 1.5-1 .1-.7-.4-1.3-1-1.4z"/>
            </svg>
        },
        Icon::YouTube => html! {
            <svg class="icon" width="18" height="18" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg" fill="currentColor">
                <path d="M23.5 7.1s-.2-1.7-.9-2.5c-.8-.9-1.7-.9-2.1-1C17.7 3.2 12 3.2 12 3.2h0s-5.7 0-8.5.4c-.4 0-1.3.1-2.1 1-.7.8-.9 2.5-.9 2.5S0 9.2 0 11.2v1.6c0 2 .2 4.1.2 4.1s.2 1.7.9 2.5c.8.9 1.8.9 2.2 1 1.6.2 8.4.4 8.4.4s5.7 0 8.5-.4c.4-.1 1.3-.1 2.1-1 .7-.8.9-2.5.9-2.5s.2-2.1.2-4.1v-1.6c0-2-.2-4.1-.2-4.1zM9.6 14.6V7.9l6.3 3.4-6.3 3.3z"/>
            </svg>
        },
        Icon::Instagram => html! {
            <svg class="icon" width="18" height="18" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                <rect x="3" y="3" width="18" height="18" rx="5" stroke="currentColor" stroke-width="1.5"/>
                <circle cx="12" cy="12" r="4" stroke="currentColor" stroke-width="1.5"/>
                <circle cx="17" cy="7" r="1.5" fill="currentColor"/>
            </svg>
        },
        Icon::TikTok => html! {
            <svg class="icon" width="18" height="18" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg" fill="currentColor">
                <path d="M9 7v8.5a3.5 3.5 0 1 1-2-3.16V7h2zm6-.5a5 5 0 0 0 3 1v2a7 7 0 0 1-3-1v6.5a3.5 3.5 0 1 1-2-3.16V6.5h2z"/>
            </svg>
        },
        Icon::Telegram => html! {
            <svg class="icon" width="18" height="18" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg" fill="currentColor">
                <path d="M21 4L3 11l6 2 1 6 3-4 5 3 3-14z"/>
            </svg>
        },
        Icon::Threads => html! {
            <svg class="icon" width="18" height="18" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg" fill="none" stroke="currentColor" stroke-width="1.5">
                <circle cx="12" cy="12" r="9"/>
                <path d="M15.5 12c-1-3-6-3-6 0 0 3 4 3 4 0h-2"/>
            </svg>
        },
        Icon::Facebook => html! {
            <svg class="icon" width="18" height="18" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg" fill="currentColor">
                <path d="M14 9h3V6h-3a4 4 0 0 0-4 4v2H7v3h3v5h3v-5h3l1-3h-4v-2a1 1 0 0 1 1-1z"/>
            </svg>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct LinkButtonProps {
    pub link: ExternalLink,
    #[prop_or_default]
    pub compact: bool,
}

/// Outbound link styled as a pill button, opening in a new tab.
#[function_component(LinkButton)]
pub fn link_button(props: &LinkButtonProps) -> Html {
    let link = props.link;
    html! {
        <a
            href={link.href}
            target="_blank"
            rel="noreferrer"
            class={classes!("pill-button", props.compact.then(|| "compact"))}
            aria-label={link.label}
        >
            { link.icon.map(icon_svg).unwrap_or_else(|| html! {}) }
            <span>{ link.label }</span>
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct LinkBarProps {
    pub links: &'static [ExternalLink],
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(LinkBar)]
pub fn link_bar(props: &LinkBarProps) -> Html {
    html! {
        <div class={classes!("link-bar", props.class.clone())}>
            { for props.links.iter().map(|link| html! {
                <LinkButton key={link.label} link={*link} compact={true} />
            }) }
        </div>
    }
}
