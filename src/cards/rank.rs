//! Minor arcana ranks.
//!
//! ## Rank values
//!
//! Every rank has exactly one numeric value in `1..=14`:
//! ace is 1, the pips are their number, then page 11, knight 12,
//! queen 13, king 14. Group sizes and image filenames both use it.
//!
//! ## Court ranks
//!
//! `CourtRank` is the subset a single PC picks from directly. Ace counts
//! as a court rank here.

use serde::{Deserialize, Serialize};

/// Rank of a minor arcana card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    Ace = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Page = 11,
    Knight = 12,
    Queen = 13,
    King = 14,
}

impl Rank {
    /// All ranks in canonical deck order.
    pub const ALL: [Rank; 14] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Page,
        Rank::Knight,
        Rank::Queen,
        Rank::King,
    ];

    /// Numeric value in `1..=14`.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Look up a rank by numeric value.
    #[must_use]
    pub fn from_value(value: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|rank| rank.value() == value)
    }

    /// Capitalized word form ("Four", "Knight").
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Rank::Ace => "Ace",
            Rank::Two => "Two",
            Rank::Three => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Page => "Page",
            Rank::Knight => "Knight",
            Rank::Queen => "Queen",
            Rank::King => "King",
        }
    }

    /// Parse a capitalized word form.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rank| rank.name() == name)
    }

    /// Numbered ranks two through ten.
    #[must_use]
    pub const fn is_pip(self) -> bool {
        matches!(self.value(), 2..=10)
    }

    /// Court ranks, ace included.
    #[must_use]
    pub const fn is_court(self) -> bool {
        !self.is_pip()
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Rank a single PC chooses directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourtRank {
    Ace,
    Page,
    Knight,
    Queen,
    King,
}

impl CourtRank {
    pub const ALL: [CourtRank; 5] = [
        CourtRank::Ace,
        CourtRank::Page,
        CourtRank::Knight,
        CourtRank::Queen,
        CourtRank::King,
    ];
}

impl From<CourtRank> for Rank {
    fn from(court: CourtRank) -> Rank {
        match court {
            CourtRank::Ace => Rank::Ace,
            CourtRank::Page => Rank::Page,
            CourtRank::Knight => Rank::Knight,
            CourtRank::Queen => Rank::Queen,
            CourtRank::King => Rank::King,
        }
    }
}

impl TryFrom<Rank> for CourtRank {
    type Error = Rank;

    fn try_from(rank: Rank) -> Result<Self, Self::Error> {
        match rank {
            Rank::Ace => Ok(CourtRank::Ace),
            Rank::Page => Ok(CourtRank::Page),
            Rank::Knight => Ok(CourtRank::Knight),
            Rank::Queen => Ok(CourtRank::Queen),
            Rank::King => Ok(CourtRank::King),
            other => Err(other),
        }
    }
}
