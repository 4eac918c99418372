//! Minor arcana suites and their elements.

use serde::{Deserialize, Serialize};

/// One of the four minor arcana suites.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suite {
    Wands,
    Cups,
    Swords,
    Pentacles,
}

/// Classical element associated with a suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Water,
    Air,
    Earth,
}

impl Suite {
    /// All suites in canonical deck order.
    pub const ALL: [Suite; 4] = [Suite::Wands, Suite::Cups, Suite::Swords, Suite::Pentacles];

    /// Element for this suite.
    #[must_use]
    pub const fn element(self) -> Element {
        match self {
            Suite::Wands => Element::Fire,
            Suite::Cups => Element::Water,
            Suite::Swords => Element::Air,
            Suite::Pentacles => Element::Earth,
        }
    }

    /// Capitalized display name ("Wands").
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suite::Wands => "Wands",
            Suite::Cups => "Cups",
            Suite::Swords => "Swords",
            Suite::Pentacles => "Pentacles",
        }
    }

    /// Parse a capitalized display name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|suite| suite.name() == name)
    }

    /// Single-letter prefix of this suite's image assets.
    #[must_use]
    pub const fn image_prefix(self) -> char {
        match self {
            Suite::Wands => 'w',
            Suite::Cups => 'c',
            Suite::Swords => 's',
            Suite::Pentacles => 'p',
        }
    }
}

impl std::fmt::Display for Suite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Element::Fire => "fire",
            Element::Water => "water",
            Element::Air => "air",
            Element::Earth => "earth",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elements() {
        assert_eq!(Suite::Wands.element(), Element::Fire);
        assert_eq!(Suite::Cups.element(), Element::Water);
        assert_eq!(Suite::Swords.element(), Element::Air);
        assert_eq!(Suite::Pentacles.element(), Element::Earth);
        assert_eq!(Element::Earth.to_string(), "earth");
    }

    #[test]
    fn test_name_round_trip() {
        for suite in Suite::ALL {
            assert_eq!(Suite::from_name(suite.name()), Some(suite));
        }
        assert_eq!(Suite::from_name("wands"), None);
        assert_eq!(Suite::from_name("Coins"), None);
    }

    #[test]
    fn test_image_prefixes() {
        let prefixes: String = Suite::ALL.iter().map(|s| s.image_prefix()).collect();
        assert_eq!(prefixes, "wcsp");
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Suite::Pentacles).unwrap(), "\"pentacles\"");
    }
}
