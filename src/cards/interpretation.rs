//! Keyword interpretations used to seed encounter improvisation.
//!
//! Majors carry their own keyword table. Minors combine the rank's theme
//! with the domain of the suite's element, so the 56 suited cards share
//! 14 + 4 short tables.

use serde::Serialize;

use super::arcana::MajorArcana;
use super::card::{Card, Orientation};
use super::rank::Rank;
use super::suite::Element;

/// Upright and reversed keywords for a card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Interpretation {
    pub upright: Vec<&'static str>,
    pub reversed: Vec<&'static str>,
}

impl Interpretation {
    /// Keywords for the given orientation.
    #[must_use]
    pub fn for_orientation(&self, orientation: Orientation) -> &[&'static str] {
        match orientation {
            Orientation::Upright => &self.upright,
            Orientation::Reversed => &self.reversed,
        }
    }
}

/// Full interpretation of a card, independent of its orientation.
#[must_use]
pub fn interpretation(card: &Card) -> Interpretation {
    match *card {
        Card::Major { arcana, .. } => {
            let (upright, reversed) = major_keywords(arcana);
            Interpretation {
                upright: upright.to_vec(),
                reversed: reversed.to_vec(),
            }
        }
        Card::Minor { suite, rank, .. } => {
            let (upright, reversed) = rank_keywords(rank);
            let domain = element_domain(suite.element());
            Interpretation {
                upright: upright.into_iter().chain([domain]).collect(),
                reversed: reversed.into_iter().chain([domain]).collect(),
            }
        }
    }
}

/// Keywords for the card as drawn.
#[must_use]
pub fn keywords(card: &Card) -> Vec<&'static str> {
    interpretation(card).for_orientation(card.orientation()).to_vec()
}

fn element_domain(element: Element) -> &'static str {
    match element {
        Element::Fire => "ambition",
        Element::Water => "feeling",
        Element::Air => "intellect",
        Element::Earth => "material",
    }
}

fn rank_keywords(rank: Rank) -> ([&'static str; 2], [&'static str; 2]) {
    match rank {
        Rank::Ace => (["spark", "opportunity"], ["delay", "missed chance"]),
        Rank::Two => (["choice", "partnership"], ["indecision", "imbalance"]),
        Rank::Three => (["growth", "collaboration"], ["friction", "overreach"]),
        Rank::Four => (["stability", "rest"], ["stagnation", "restlessness"]),
        Rank::Five => (["conflict", "loss"], ["recovery", "truce"]),
        Rank::Six => (["harmony", "progress"], ["nostalgia", "setback"]),
        Rank::Seven => (["challenge", "perseverance"], ["doubt", "giving ground"]),
        Rank::Eight => (["momentum", "dedication"], ["haste", "entrapment"]),
        Rank::Nine => (["resilience", "near completion"], ["exhaustion", "anxiety"]),
        Rank::Ten => (["culmination", "burden"], ["release", "collapse"]),
        Rank::Page => (["curiosity", "message"], ["immaturity", "bad news"]),
        Rank::Knight => (["pursuit", "action"], ["recklessness", "stalling"]),
        Rank::Queen => (["nurture", "mastery within"], ["insecurity", "smothering"]),
        Rank::King => (["authority", "command"], ["tyranny", "rigidity"]),
    }
}

fn major_keywords(arcana: MajorArcana) -> ([&'static str; 3], [&'static str; 3]) {
    match arcana {
        MajorArcana::TheFool => (["beginnings", "spontaneity", "leap of faith"], ["recklessness", "naivety", "hesitation"]),
        MajorArcana::TheMagician => (["willpower", "skill", "manifestation"], ["manipulation", "trickery", "untapped talent"]),
        MajorArcana::TheHighPriestess => (["intuition", "secrets", "mystery"], ["hidden agendas", "withdrawal", "confusion"]),
        MajorArcana::TheEmpress => (["abundance", "nurture", "fertility"], ["dependence", "neglect", "creative block"]),
        MajorArcana::TheEmperor => (["authority", "structure", "protection"], ["domination", "rigidity", "lost control"]),
        MajorArcana::TheHierophant => (["tradition", "institutions", "guidance"], ["rebellion", "dogma", "subversion"]),
        MajorArcana::TheLovers => (["union", "values", "choice"], ["disharmony", "temptation", "misalignment"]),
        MajorArcana::TheChariot => (["determination", "victory", "drive"], ["aggression", "lack of direction", "defeat"]),
        MajorArcana::Strength => (["courage", "compassion", "patience"], ["self-doubt", "weakness", "raw emotion"]),
        MajorArcana::TheHermit => (["solitude", "introspection", "wisdom"], ["isolation", "loneliness", "withdrawal"]),
        MajorArcana::WheelOfFortune => (["fate", "turning point", "cycles"], ["bad luck", "resistance", "broken cycle"]),
        MajorArcana::Justice => (["fairness", "truth", "law"], ["injustice", "dishonesty", "evasion"]),
        MajorArcana::TheHangedMan => (["surrender", "new perspective", "pause"], ["stalling", "martyrdom", "indecision"]),
        MajorArcana::Death => (["ending", "transformation", "transition"], ["resisting change", "decay", "limbo"]),
        MajorArcana::Temperance => (["balance", "moderation", "purpose"], ["excess", "imbalance", "discord"]),
        MajorArcana::TheDevil => (["bondage", "temptation", "shadow"], ["release", "detachment", "reclaiming power"]),
        MajorArcana::TheTower => (["upheaval", "revelation", "sudden change"], ["averted disaster", "fear of change", "delayed collapse"]),
        MajorArcana::TheStar => (["hope", "renewal", "serenity"], ["despair", "disconnection", "lost faith"]),
        MajorArcana::TheMoon => (["illusion", "fear", "the unconscious"], ["clarity", "released fear", "exposed deception"]),
        MajorArcana::TheSun => (["joy", "success", "vitality"], ["dimmed spirits", "overconfidence", "delay"]),
        MajorArcana::Judgement => (["reckoning", "awakening", "calling"], ["self-doubt", "refusal", "harsh judgement"]),
        MajorArcana::TheWorld => (["completion", "integration", "journey's end"], ["unfinished business", "shortcuts", "emptiness"]),
    }
}
