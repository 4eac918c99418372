//! Card values and orientation.
//!
//! A `Card` is an immutable value. Orientation is assigned once at draw
//! time; re-orienting builds a new value via `with_orientation`.
//!
//! ## Identity
//!
//! Two cards with the same suite/rank (or arcana) are the same card even
//! when their orientations differ. Derived equality compares orientation
//! too, so use `is_same_card` (or compare `upright()` values) when only
//! identity matters.

use serde::{Deserialize, Serialize};

use super::arcana::MajorArcana;
use super::rank::Rank;
use super::suite::Suite;

/// Upright or reversed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Upright,
    Reversed,
}

impl Orientation {
    #[must_use]
    pub const fn is_reversed(self) -> bool {
        matches!(self, Orientation::Reversed)
    }
}

/// A tarot card: suited minor arcana or unsuited major arcana.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Card {
    Minor {
        suite: Suite,
        rank: Rank,
        orientation: Orientation,
    },
    Major {
        arcana: MajorArcana,
        orientation: Orientation,
    },
}

impl Card {
    /// Upright minor arcana card.
    #[must_use]
    pub const fn minor(suite: Suite, rank: Rank) -> Self {
        Card::Minor {
            suite,
            rank,
            orientation: Orientation::Upright,
        }
    }

    /// Upright major arcana card.
    #[must_use]
    pub const fn major(arcana: MajorArcana) -> Self {
        Card::Major {
            arcana,
            orientation: Orientation::Upright,
        }
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        match *self {
            Card::Minor { orientation, .. } | Card::Major { orientation, .. } => orientation,
        }
    }

    /// Same card with a different orientation.
    #[must_use]
    pub const fn with_orientation(self, orientation: Orientation) -> Self {
        match self {
            Card::Minor { suite, rank, .. } => Card::Minor {
                suite,
                rank,
                orientation,
            },
            Card::Major { arcana, .. } => Card::Major {
                arcana,
                orientation,
            },
        }
    }

    /// Same card, upright.
    #[must_use]
    pub const fn upright(self) -> Self {
        self.with_orientation(Orientation::Upright)
    }

    /// Identity comparison ignoring orientation.
    #[must_use]
    pub fn is_same_card(&self, other: &Card) -> bool {
        self.upright() == other.upright()
    }

    #[must_use]
    pub const fn is_major(&self) -> bool {
        matches!(self, Card::Major { .. })
    }

    /// Suite of a minor card, `None` for majors.
    #[must_use]
    pub fn suite(&self) -> Option<Suite> {
        match *self {
            Card::Minor { suite, .. } => Some(suite),
            Card::Major { .. } => None,
        }
    }

    /// Rank of a minor card, `None` for majors.
    #[must_use]
    pub fn rank(&self) -> Option<Rank> {
        match *self {
            Card::Minor { rank, .. } => Some(rank),
            Card::Major { .. } => None,
        }
    }

    /// Arcana of a major card, `None` for minors.
    #[must_use]
    pub fn arcana(&self) -> Option<MajorArcana> {
        match *self {
            Card::Minor { .. } => None,
            Card::Major { arcana, .. } => Some(arcana),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&super::naming::format_card_name(self))
    }
}
