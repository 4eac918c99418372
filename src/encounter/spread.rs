//! Four-card encounter spreads.
//!
//! Columns, left to right: PC, reaction, NPC, context. Cards come off the
//! deck in a fixed order: NPC first, then context, then reaction. The PC
//! card is supplied by the caller and never taken from the deck.

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::Card;
use crate::core::DeckRng;
use crate::deck::Deck;

/// Cards a spread takes from the deck.
pub const SPREAD_DRAW_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpreadError {
    #[error("need at least 3 cards for an encounter spread, deck has {available}")]
    InsufficientDeckSize { available: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EncounterSpread {
    /// The PC(s).
    pub pc_card: Card,
    /// How the NPC reacts to the PCs.
    pub reaction_card: Card,
    /// The encountered NPC.
    pub npc_card: Card,
    /// Background for the NPC.
    pub context_card: Card,
}

impl EncounterSpread {
    /// Arrange three drawn cards (in draw order) around the PC card.
    #[must_use]
    pub const fn from_draw(pc_card: Card, drawn: [Card; SPREAD_DRAW_COUNT]) -> Self {
        let [npc_card, context_card, reaction_card] = drawn;
        Self {
            pc_card,
            reaction_card,
            npc_card,
            context_card,
        }
    }

    /// Cards in column order: PC, reaction, NPC, context.
    #[must_use]
    pub const fn columns(&self) -> [Card; 4] {
        [self.pc_card, self.reaction_card, self.npc_card, self.context_card]
    }

    /// The deck cards in the order they were drawn.
    #[must_use]
    pub const fn draw_order(&self) -> [Card; SPREAD_DRAW_COUNT] {
        [self.npc_card, self.context_card, self.reaction_card]
    }
}

/// Build a spread from the top three cards of `deck`, as they lie.
///
/// Returns the spread and the deck without those three cards. Fails with
/// `InsufficientDeckSize` on a short deck; the input is never modified.
pub fn create_encounter_spread(
    pc_card: Card,
    deck: &Deck,
) -> Result<(EncounterSpread, Deck), SpreadError> {
    let (top, remaining) = deck
        .take_top(SPREAD_DRAW_COUNT)
        .map_err(|_| SpreadError::InsufficientDeckSize {
            available: deck.len(),
        })?;
    let drawn: [Card; SPREAD_DRAW_COUNT] = top
        .try_into()
        .map_err(|_| SpreadError::InsufficientDeckSize {
            available: deck.len(),
        })?;

    debug!("composed spread for {}, {} cards remain", pc_card, remaining.len());
    Ok((EncounterSpread::from_draw(pc_card, drawn), remaining))
}

/// Draw three cards with fresh orientations and compose a spread.
pub fn deal_spread(
    pc_card: Card,
    deck: &Deck,
    rng: &mut DeckRng,
    reversal_chance: f64,
) -> Result<(EncounterSpread, Deck), SpreadError> {
    let draw = deck
        .draw_with_reversal_chance(SPREAD_DRAW_COUNT, rng, reversal_chance)
        .map_err(|_| SpreadError::InsufficientDeckSize {
            available: deck.len(),
        })?;
    let drawn = [draw.drawn[0], draw.drawn[1], draw.drawn[2]];

    debug!("dealt spread for {}, {} cards remain", pc_card, draw.remaining.len());
    Ok((EncounterSpread::from_draw(pc_card, drawn), draw.remaining))
}
