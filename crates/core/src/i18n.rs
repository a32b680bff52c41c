use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::content::{self, Content};
use crate::error::Error;

/// The two supported page languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Fa,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Fa, Language::En];

    /// BCP 47 tag written to the document's `lang` attribute.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Fa => "fa",
            Self::En => "en",
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Self::Fa => Direction::Rtl,
            Self::En => Direction::Ltr,
        }
    }

    pub fn other(self) -> Language {
        match self {
            Self::Fa => Self::En,
            Self::En => Self::Fa,
        }
    }

    pub fn content(self) -> &'static Content {
        content::for_language(self)
    }

    /// Label of the toggle button, naming the language it switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Fa => "English",
            Self::En => "فارسی",
        }
    }

    /// Compact toggle label used by the narrow-screen top bar.
    pub fn toggle_short_label(self) -> &'static str {
        match self {
            Self::Fa => "EN",
            Self::En => "FA",
        }
    }

    pub fn view_link_label(self) -> &'static str {
        match self {
            Self::Fa => "مشاهده",
            Self::En => "View",
        }
    }

    /// Font family class applied to localized text.
    pub fn font_class(self) -> &'static str {
        match self {
            Self::Fa => "font-fa",
            Self::En => "font-en",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fa" => Ok(Self::Fa),
            "en" => Ok(Self::En),
            _ => Err(Error::UnknownLanguage(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    /// Value of the document's `dir` attribute.
    pub fn attr(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }

    pub fn is_rtl(self) -> bool {
        self == Self::Rtl
    }
}

/// Document-level attributes derived from the active language.
///
/// Hosts apply both fields together with the content switch, so a reader of
/// the document never observes new text with the old direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DocumentAttrs {
    pub lang: &'static str,
    pub dir: &'static str,
}

impl From<Language> for DocumentAttrs {
    fn from(language: Language) -> Self {
        Self {
            lang: language.tag(),
            dir: language.direction().attr(),
        }
    }
}

/// Two-state language toggle owned by the top-level view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LanguageState {
    language: Language,
}

impl LanguageState {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn content(&self) -> &'static Content {
        self.language.content()
    }

    pub fn attrs(&self) -> DocumentAttrs {
        self.language.into()
    }

    /// Flip the language and return the attributes the host must apply.
    pub fn toggle(&mut self) -> DocumentAttrs {
        self.language = self.language.other();
        log::info!("language switched to {}", self.language);
        self.attrs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persian_is_default_and_rtl() {
        let state = LanguageState::default();
        assert_eq!(state.language(), Language::Fa);
        assert_eq!(state.attrs(), DocumentAttrs { lang: "fa", dir: "rtl" });
    }

    #[test]
    fn toggle_flips_direction_and_content() {
        let mut state = LanguageState::default();
        let attrs = state.toggle();
        assert_eq!(attrs, DocumentAttrs { lang: "en", dir: "ltr" });
        assert_eq!(state.content().nav.home, "Home");
    }

    #[test]
    fn double_toggle_round_trips() {
        let mut state = LanguageState::new(Language::En);
        let before = (state.attrs(), state.content().hero.title);
        state.toggle();
        state.toggle();
        assert_eq!((state.attrs(), state.content().hero.title), before);
    }

    #[test]
    fn parse_tags() {
        assert_eq!("fa".parse::<Language>().ok(), Some(Language::Fa));
        assert_eq!(" EN ".parse::<Language>().ok(), Some(Language::En));
        assert!(matches!("de".parse::<Language>(), Err(Error::UnknownLanguage(_))));
    }

    #[test]
    fn toggle_label_names_the_other_language() {
        assert_eq!(Language::Fa.toggle_label(), "English");
        assert_eq!(Language::En.toggle_short_label(), "FA");
    }
}
