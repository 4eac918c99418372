//! A single selection-and-dealing session.
//!
//! `EncounterSession` owns the pieces a caller would otherwise thread by
//! hand: the RNG, the current deck value, and the PC selector. Each deal
//! replaces the session deck with the remainder returned by the draw.
//!
//! ```
//! use tarot_encounters::core::SessionConfig;
//! use tarot_encounters::encounter::EncounterSession;
//! use tarot_encounters::selection::{PartySize, PersonalityAxis, RationalType, SelectionEvent};
//!
//! let mut session = EncounterSession::new(SessionConfig::new().with_seed(42));
//! session.apply(SelectionEvent::Size(PartySize::Group(5))).unwrap();
//! session.apply(SelectionEvent::Axis(PersonalityAxis::Rational)).unwrap();
//! session.apply(SelectionEvent::Rational(RationalType::Visionary)).unwrap();
//!
//! let spread = session.deal().unwrap();
//! assert_eq!(spread.pc_card.to_string(), "Five of Swords");
//! assert_eq!(session.remaining(), 75);
//! ```

use log::{debug, warn};
use thiserror::Error;

use super::spread::{deal_spread, EncounterSpread, SpreadError, SPREAD_DRAW_COUNT};
use crate::cards::{card_image_path, format_card_name, Card, NamingError};
use crate::core::{DeckRng, DeckRngState, SessionConfig};
use crate::deck::{Deck, DeckError, DrawnCards};
use crate::selection::{PcSelector, SelectionError, SelectionEvent};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("selection error: {0}")]
    Selection(#[from] SelectionError),
    #[error("deck error: {0}")]
    Deck(#[from] DeckError),
    #[error("spread error: {0}")]
    Spread(#[from] SpreadError),
    #[error("naming error: {0}")]
    Naming(#[from] NamingError),
}

#[derive(Clone, Debug)]
pub struct EncounterSession {
    config: SessionConfig,
    rng: DeckRng,
    deck: Deck,
    selector: PcSelector,
}

impl EncounterSession {
    /// Start a session with a freshly shuffled full deck.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => DeckRng::new(seed),
            None => DeckRng::from_entropy(),
        };
        let deck = Deck::full().shuffled(&mut rng);
        debug!("session started with seed {}", rng.seed());

        Self {
            config,
            rng,
            deck,
            selector: PcSelector::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn selector(&self) -> &PcSelector {
        &self.selector
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Cards left in the session deck.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.deck.len()
    }

    /// RNG checkpoint, for replaying a session.
    #[must_use]
    pub fn rng_state(&self) -> DeckRngState {
        self.rng.state()
    }

    /// Feed a selection answer; returns the PC card if now resolvable.
    pub fn apply(&mut self, event: SelectionEvent) -> Result<Option<Card>, SessionError> {
        Ok(self.selector.apply(event)?)
    }

    /// The current PC card, if resolvable.
    #[must_use]
    pub fn pc_card(&self) -> Option<Card> {
        self.selector.card()
    }

    /// Shuffle the cards still in the deck.
    pub fn shuffle(&mut self) {
        self.deck = self.deck.shuffled(&mut self.rng);
    }

    /// Replace the deck with a freshly shuffled full deck.
    pub fn reset_deck(&mut self) {
        self.deck = Deck::full().shuffled(&mut self.rng);
    }

    /// Draw loose cards from the session deck.
    pub fn draw(&mut self, count: usize) -> Result<DrawnCards, SessionError> {
        let draw = self
            .deck
            .draw_with_reversal_chance(count, &mut self.rng, self.config.reversal_chance)?;
        self.deck = draw.remaining;
        Ok(draw.drawn)
    }

    /// Deal an encounter spread for the selected PC card.
    ///
    /// With `auto_reshuffle` a short deck is replaced by a fresh one first;
    /// otherwise the short deck is reported and left as is.
    pub fn deal(&mut self) -> Result<EncounterSpread, SessionError> {
        let pc_card = self.selector.resolve()?;

        if self.deck.len() < SPREAD_DRAW_COUNT && self.config.auto_reshuffle {
            warn!(
                "deck down to {} cards, reshuffling a full deck",
                self.deck.len()
            );
            self.reset_deck();
        }

        let (spread, remaining) = deal_spread(
            pc_card,
            &self.deck,
            &mut self.rng,
            self.config.reversal_chance,
        )?;
        self.deck = remaining;
        Ok(spread)
    }

    /// Image path for a card under the configured asset base.
    pub fn image_path(&self, card: &Card) -> Result<String, SessionError> {
        Ok(card_image_path(&self.config.image_base, &format_card_name(card))?)
    }
}
