//! The 22 major arcana, in their canonical sequence.

use serde::{Deserialize, Serialize};

/// Major arcana archetype.
///
/// Discriminants follow the traditional numbering: The Fool is 0,
/// The World is 21.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MajorArcana {
    TheFool,
    TheMagician,
    TheHighPriestess,
    TheEmpress,
    TheEmperor,
    TheHierophant,
    TheLovers,
    TheChariot,
    Strength,
    TheHermit,
    WheelOfFortune,
    Justice,
    TheHangedMan,
    Death,
    Temperance,
    TheDevil,
    TheTower,
    TheStar,
    TheMoon,
    TheSun,
    Judgement,
    TheWorld,
}

impl MajorArcana {
    /// All arcana in canonical order.
    pub const ALL: [MajorArcana; 22] = [
        MajorArcana::TheFool,
        MajorArcana::TheMagician,
        MajorArcana::TheHighPriestess,
        MajorArcana::TheEmpress,
        MajorArcana::TheEmperor,
        MajorArcana::TheHierophant,
        MajorArcana::TheLovers,
        MajorArcana::TheChariot,
        MajorArcana::Strength,
        MajorArcana::TheHermit,
        MajorArcana::WheelOfFortune,
        MajorArcana::Justice,
        MajorArcana::TheHangedMan,
        MajorArcana::Death,
        MajorArcana::Temperance,
        MajorArcana::TheDevil,
        MajorArcana::TheTower,
        MajorArcana::TheStar,
        MajorArcana::TheMoon,
        MajorArcana::TheSun,
        MajorArcana::Judgement,
        MajorArcana::TheWorld,
    ];

    /// Position in the canonical sequence (0..=21).
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Snake-case identifier, e.g. `wheel_of_fortune`.
    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            MajorArcana::TheFool => "the_fool",
            MajorArcana::TheMagician => "the_magician",
            MajorArcana::TheHighPriestess => "the_high_priestess",
            MajorArcana::TheEmpress => "the_empress",
            MajorArcana::TheEmperor => "the_emperor",
            MajorArcana::TheHierophant => "the_hierophant",
            MajorArcana::TheLovers => "the_lovers",
            MajorArcana::TheChariot => "the_chariot",
            MajorArcana::Strength => "strength",
            MajorArcana::TheHermit => "the_hermit",
            MajorArcana::WheelOfFortune => "wheel_of_fortune",
            MajorArcana::Justice => "justice",
            MajorArcana::TheHangedMan => "the_hanged_man",
            MajorArcana::Death => "death",
            MajorArcana::Temperance => "temperance",
            MajorArcana::TheDevil => "the_devil",
            MajorArcana::TheTower => "the_tower",
            MajorArcana::TheStar => "the_star",
            MajorArcana::TheMoon => "the_moon",
            MajorArcana::TheSun => "the_sun",
            MajorArcana::Judgement => "judgement",
            MajorArcana::TheWorld => "the_world",
        }
    }

    /// Look up an arcana by its snake-case identifier.
    #[must_use]
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|arcana| arcana.identifier() == identifier)
    }
}
