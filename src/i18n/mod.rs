// Locale handling for the bilingual (FR/EN) content surface.

pub mod translations;

use serde::{Deserialize, Serialize};

/// Supported display locales. French is the primary locale of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Fr,
    En,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Fr => "fr",
            Locale::En => "en",
        }
    }

    /// Both locales, in canonical path order (fr first).
    pub const ALL: [Locale; 2] = [Locale::Fr, Locale::En];
}

impl std::str::FromStr for Locale {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fr" => Ok(Locale::Fr),
            "en" => Ok(Locale::En),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Borrowed view over a translatable field stored as `{field}`,
/// `{field}_fr`, `{field}_en` columns.
///
/// Resolution is a pure per-field lookup: the suffixed variant for the
/// requested locale wins, the unsuffixed legacy value is the fallback, and
/// a fully absent field resolves to `None` (callers omit the content
/// region, they do not error).
#[derive(Debug, Clone, Copy)]
pub struct Localized<'a, T: ?Sized> {
    pub base: Option<&'a T>,
    pub fr: Option<&'a T>,
    pub en: Option<&'a T>,
}

impl<'a, T: ?Sized> Localized<'a, T> {
    pub fn new(base: Option<&'a T>, fr: Option<&'a T>, en: Option<&'a T>) -> Self {
        Self { base, fr, en }
    }

    pub fn resolve(&self, locale: Locale) -> Option<&'a T> {
        match locale {
            Locale::Fr => self.fr.or(self.base),
            Locale::En => self.en.or(self.base),
        }
    }
}

/// Convenience for the common `Option<String>` triple.
pub fn localized_str<'a>(
    base: &'a Option<String>,
    fr: &'a Option<String>,
    en: &'a Option<String>,
) -> Localized<'a, str> {
    Localized::new(base.as_deref(), fr.as_deref(), en.as_deref())
}

/// Same shape for list-valued fields (key takeaways, key factors).
pub fn localized_list<'a>(
    base: &'a Option<Vec<String>>,
    fr: &'a Option<Vec<String>>,
    en: &'a Option<Vec<String>>,
) -> Localized<'a, [String]> {
    Localized::new(base.as_deref(), fr.as_deref(), en.as_deref())
}
