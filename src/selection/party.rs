//! Party size and the pure card-selection rules.
//!
//! ## Group path
//!
//! Suite from temperament, rank from headcount: 2..=9 map to their pip,
//! anything from 10 up saturates at ten. Group cards are always upright.
//!
//! ## Single-PC path
//!
//! Suite from temperament, rank chosen directly from the court ranks.

use serde::{Deserialize, Serialize};

use super::error::SelectionError;
use super::temperament::{PersonalityAxis, Temperament};
use crate::cards::{Card, CourtRank, Rank, Suite};

/// Largest headcount with its own rank; bigger groups use the ten.
pub const MAX_COUNTED_GROUP: u32 = 10;

/// How many PCs the card represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartySize {
    Single,
    Group(u32),
}

impl PartySize {
    /// Party size from a headcount. Zero is rejected.
    pub fn from_count(count: u32) -> Result<Self, SelectionError> {
        match count {
            0 => Err(SelectionError::InvalidPartySize(count.to_string())),
            1 => Ok(PartySize::Single),
            n => Ok(PartySize::Group(n)),
        }
    }

    /// Parse a size answer: `"1"`..`"9"`, `"10+"`, or any larger count.
    pub fn parse(text: &str) -> Result<Self, SelectionError> {
        let trimmed = text.trim();
        let digits = trimmed.strip_suffix('+').unwrap_or(trimmed);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SelectionError::InvalidPartySize(text.to_string()));
        }
        let count: u32 = digits
            .parse()
            .map_err(|_| SelectionError::InvalidPartySize(text.to_string()))?;
        Self::from_count(count)
    }

    /// Headcount (1 for a single PC).
    #[must_use]
    pub const fn count(self) -> u32 {
        match self {
            PartySize::Single => 1,
            PartySize::Group(n) => n,
        }
    }

    #[must_use]
    pub const fn is_single(self) -> bool {
        matches!(self, PartySize::Single)
    }
}

/// Answers describing a PC group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupCharacteristics {
    pub size: u32,
    pub temperament: Temperament,
}

impl GroupCharacteristics {
    #[must_use]
    pub const fn new(size: u32, temperament: Temperament) -> Self {
        Self { size, temperament }
    }

    #[must_use]
    pub const fn personality_axis(&self) -> PersonalityAxis {
        self.temperament.axis()
    }
}

/// Suite for a temperament.
#[must_use]
pub const fn determine_suite(temperament: Temperament) -> Suite {
    temperament.suite()
}

/// Rank for a group headcount.
pub fn rank_from_size(size: u32) -> Result<Rank, SelectionError> {
    if size < 2 {
        return Err(SelectionError::InvalidGroupSize(size));
    }
    let value = size.min(MAX_COUNTED_GROUP) as u8;
    Rank::from_value(value).ok_or(SelectionError::InvalidGroupSize(size))
}

/// The card representing a group of two or more PCs.
pub fn select_group_card(characteristics: &GroupCharacteristics) -> Result<Card, SelectionError> {
    let rank = rank_from_size(characteristics.size)?;
    Ok(Card::minor(determine_suite(characteristics.temperament), rank))
}

/// The card representing a single PC.
#[must_use]
pub fn select_single_card(temperament: Temperament, court: CourtRank) -> Card {
    Card::minor(determine_suite(temperament), court.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Orientation;
    use crate::selection::temperament::{EmotionalType, RationalType};

    #[test]
    fn test_rank_from_size() {
        assert_eq!(rank_from_size(2), Ok(Rank::Two));
        assert_eq!(rank_from_size(9), Ok(Rank::Nine));
        assert_eq!(rank_from_size(10), Ok(Rank::Ten));
        assert_eq!(rank_from_size(250), Ok(Rank::Ten));
        assert_eq!(rank_from_size(u32::MAX), Ok(Rank::Ten));
    }

    #[test]
    fn test_rank_from_size_rejects_small() {
        assert_eq!(rank_from_size(1), Err(SelectionError::InvalidGroupSize(1)));
        assert_eq!(rank_from_size(0), Err(SelectionError::InvalidGroupSize(0)));
    }

    #[test]
    fn test_group_card_is_upright() {
        let characteristics = GroupCharacteristics::new(6, EmotionalType::Cool.into());
        let card = select_group_card(&characteristics).unwrap();

        assert_eq!(card, Card::minor(Suite::Cups, Rank::Six));
        assert_eq!(card.orientation(), Orientation::Upright);
        assert_eq!(characteristics.personality_axis(), PersonalityAxis::Emotional);
    }

    #[test]
    fn test_single_card() {
        let card = select_single_card(RationalType::Visionary.into(), CourtRank::Knight);
        assert_eq!(card, Card::minor(Suite::Swords, Rank::Knight));
    }

    #[test]
    fn test_parse() {
        assert_eq!(PartySize::parse("1"), Ok(PartySize::Single));
        assert_eq!(PartySize::parse("4"), Ok(PartySize::Group(4)));
        assert_eq!(PartySize::parse("10+"), Ok(PartySize::Group(10)));
        assert_eq!(PartySize::parse(" 12 "), Ok(PartySize::Group(12)));
        for bad in ["", "+", "0", "-3", "four", "1.5", "99999999999"] {
            assert_eq!(
                PartySize::parse(bad),
                Err(SelectionError::InvalidPartySize(bad.to_string())),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn test_count() {
        assert_eq!(PartySize::Single.count(), 1);
        assert_eq!(PartySize::Group(7).count(), 7);
        assert!(PartySize::Single.is_single());
        assert!(!PartySize::Group(2).is_single());
    }
}
