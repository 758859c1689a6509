use std::fmt;
use std::str::FromStr;

use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Lang {
    #[default]
    En,
    It,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::En, Lang::It];

    pub fn as_str(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::It => "it",
        }
    }

    /// Flips between the two supported languages.
    pub fn toggle(self) -> Lang {
        match self {
            Lang::En => Lang::It,
            Lang::It => Lang::En,
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownLang;

impl FromStr for Lang {
    type Err = UnknownLang;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Lang::En),
            "it" => Ok(Lang::It),
            _ => Err(UnknownLang),
        }
    }
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Strings {
    pub nav: NavStrings,
    pub hero: HeroStrings,
    pub discog: DiscogStrings,
    pub graphics: SectionCopy,
    pub photo: SectionCopy,
    pub writing: SectionCopy,
    pub contact: ContactStrings,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct NavStrings {
    pub home: &'static str,
    pub discog: &'static str,
    pub graphics: &'static str,
    pub photo: &'static str,
    pub writing: &'static str,
    pub contact: &'static str,
    /// Label shown on the language toggle.
    pub lang: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct HeroStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cta1: &'static str,
    pub cta2: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct DiscogStrings {
    pub title: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct SectionCopy {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ContactStrings {
    pub title: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub message: &'static str,
    pub send: &'static str,
}

static EN: Strings = Strings {
    nav: NavStrings {
        home: "Home",
        discog: "Discography",
        graphics: "Graphics & Advertising",
        photo: "Photography",
        writing: "Writing",
        contact: "Contact",
        lang: "EN",
    },
    hero: HeroStrings {
        title: "We create effects that transform reality",
        subtitle: "Professional FX, extreme creativity, unique visual experiences",
        cta1: "Discography",
        cta2: "Graphics & Advertising",
    },
    discog: DiscogStrings { title: "Discography" },
    graphics: SectionCopy {
        title: "Graphics & Advertising",
        body: "Brand identities, campaign visuals, album covers, social kits, motion stingers and more.",
    },
    photo: SectionCopy {
        title: "Photography",
        body: "Editorial, product and live performances. Color-accurate pipelines and fast delivery.",
    },
    writing: SectionCopy {
        title: "Writing",
        body: "Fiction, lyrics, copy and long-form content crafted for clarity, pace and emotional punch.",
    },
    contact: ContactStrings {
        title: "Get in touch",
        name: "Name",
        email: "Email",
        message: "Message",
        send: "Submit",
    },
};

static IT: Strings = Strings {
    nav: NavStrings {
        home: "Home",
        discog: "Discografia",
        graphics: "Grafica e Pubblicità",
        photo: "Fotografia",
        writing: "Scrittura",
        contact: "Contatti",
        lang: "IT",
    },
    hero: HeroStrings {
        title: "Creiamo effetti che trasformano la realtà",
        subtitle: "FX professionali, creatività estrema, esperienze visive uniche",
        cta1: "Discografia",
        cta2: "Grafica e Pubblicità",
    },
    discog: DiscogStrings { title: "Discografia" },
    graphics: SectionCopy {
        title: "Grafica e Pubblicità",
        body: "Identità di brand, visual per campagne, copertine, kit social, motion stingers e altro.",
    },
    photo: SectionCopy {
        title: "Fotografia",
        body: "Editoriale, prodotto e live. Workflow colore accurato e consegna rapida.",
    },
    writing: SectionCopy {
        title: "Scrittura",
        body: "Narrativa, testi, copy e long\u{2011}form con chiarezza, ritmo ed impatto emotivo.",
    },
    contact: ContactStrings {
        title: "Contattami",
        name: "Nome",
        email: "Email",
        message: "Messaggio",
        send: "Invia",
    },
};

pub fn strings(lang: Lang) -> &'static Strings {
    match lang {
        Lang::En => &EN,
        Lang::It => &IT,
    }
}
