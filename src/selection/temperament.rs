//! Personality answers and the suite they select.
//!
//! | axis      | subtype   | suite     |
//! |-----------|-----------|-----------|
//! | emotional | hot       | wands     |
//! | emotional | cool      | cups      |
//! | rational  | pragmatic | pentacles |
//! | rational  | visionary | swords    |

use serde::{Deserialize, Serialize};

use crate::cards::Suite;

/// Does the group lead with the heart or the head?
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonalityAxis {
    Emotional,
    Rational,
}

/// Passionate and bold, or caring and loyal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionalType {
    Hot,
    Cool,
}

/// Practical and grounded, or strategic and sharp.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RationalType {
    Pragmatic,
    Visionary,
}

/// An axis together with its subtype.
///
/// The subtype can only ever belong to its own axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "axis", content = "type", rename_all = "lowercase")]
pub enum Temperament {
    Emotional(EmotionalType),
    Rational(RationalType),
}

impl Temperament {
    #[must_use]
    pub const fn axis(self) -> PersonalityAxis {
        match self {
            Temperament::Emotional(_) => PersonalityAxis::Emotional,
            Temperament::Rational(_) => PersonalityAxis::Rational,
        }
    }

    /// Suite this temperament maps to.
    #[must_use]
    pub const fn suite(self) -> Suite {
        match self {
            Temperament::Emotional(EmotionalType::Hot) => Suite::Wands,
            Temperament::Emotional(EmotionalType::Cool) => Suite::Cups,
            Temperament::Rational(RationalType::Pragmatic) => Suite::Pentacles,
            Temperament::Rational(RationalType::Visionary) => Suite::Swords,
        }
    }
}

impl From<EmotionalType> for Temperament {
    fn from(kind: EmotionalType) -> Self {
        Temperament::Emotional(kind)
    }
}

impl From<RationalType> for Temperament {
    fn from(kind: RationalType) -> Self {
        Temperament::Rational(kind)
    }
}
