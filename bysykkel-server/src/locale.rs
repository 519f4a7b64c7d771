//! User-facing text in the two supported languages.

use std::fmt;

/// Language of the rendered board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    /// Norwegian Bokmål
    Nb,
}

/// Every string the board shows to a visitor.
#[derive(Debug)]
pub struct Messages {
    pub bikes_available: &'static str,
    pub docks_available: &'static str,
    pub last_updated: &'static str,
    pub unavailable: &'static str,
    pub stations_not_found: &'static str,
}

static EN: Messages = Messages {
    bikes_available: "Bikes available",
    docks_available: "Docks available",
    last_updated: "Last updated",
    unavailable: "Could not retrieve station data. Please try again later.",
    stations_not_found: "Could not find the stations.",
};

static NB: Messages = Messages {
    bikes_available: "Ledige sykler",
    docks_available: "Ledige låser",
    last_updated: "Sist oppdatert",
    unavailable: "Kunne ikke hente stasjonsdata. Prøv igjen senere.",
    stations_not_found: "Fant ikke stasjonene.",
};

impl Locale {
    /// Parse a language tag such as `en`, `nb`, `nb-NO` or `no`.
    ///
    /// Matching is case-insensitive and ignores the region subtag.
    pub fn parse(tag: &str) -> Option<Self> {
        let primary = tag.trim().split(['-', '_']).next()?.to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Locale::En),
            "nb" | "no" => Some(Locale::Nb),
            _ => None,
        }
    }

    /// BCP 47 code, for the `lang` attribute.
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Nb => "nb",
        }
    }

    pub fn messages(self) -> &'static Messages {
        match self {
            Locale::En => &EN,
            Locale::Nb => &NB,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_tags() {
        assert_eq!(Locale::parse("en"), Some(Locale::En));
        assert_eq!(Locale::parse("EN-gb"), Some(Locale::En));
        assert_eq!(Locale::parse("nb"), Some(Locale::Nb));
        assert_eq!(Locale::parse("nb_NO"), Some(Locale::Nb));
        assert_eq!(Locale::parse(" no "), Some(Locale::Nb));
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(Locale::parse("de"), None);
        assert_eq!(Locale::parse(""), None);
        assert_eq!(Locale::parse("nn"), None);
    }

    #[test]
    fn default_is_english() {
        assert_eq!(Locale::default(), Locale::En);
        assert_eq!(Locale::default().messages().bikes_available, "Bikes available");
    }

    #[test]
    fn norwegian_messages() {
        let messages = Locale::Nb.messages();
        assert_eq!(messages.docks_available, "Ledige låser");
        assert_eq!(messages.last_updated, "Sist oppdatert");
    }

    #[test]
    fn code_roundtrips_through_parse() {
        for locale in [Locale::En, Locale::Nb] {
            assert_eq!(Locale::parse(locale.code()), Some(locale));
        }
    }
}
