//! Deck values: construction, shuffling, and drawing.
//!
//! A `Deck` is an ordered value backed by `im::Vector`, so every operation
//! returns a new deck in O(1)-clone time and never touches its input.
//! Index 0 is the top of the deck; draws take from the front.
//!
//! ## Usage
//!
//! ```
//! use tarot_encounters::core::DeckRng;
//! use tarot_encounters::deck::Deck;
//!
//! let mut rng = DeckRng::new(42);
//! let deck = Deck::full().shuffled(&mut rng);
//!
//! let draw = deck.draw(3, &mut rng).unwrap();
//! assert_eq!(draw.drawn.len(), 3);
//! assert_eq!(draw.remaining.len(), 75);
//! assert_eq!(deck.len(), 78);
//! ```

use im::Vector;
use log::debug;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::cards::{Card, MajorArcana, Orientation, Rank, Suite};
use crate::core::{DeckRng, DEFAULT_REVERSAL_CHANCE};

/// Number of cards in a full tarot deck.
pub const FULL_DECK_SIZE: usize = 78;

/// Cards drawn in one batch. Inline up to a four-card spread.
pub type DrawnCards = SmallVec<[Card; 4]>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("cannot draw {requested} cards from a deck of {available}")]
    InsufficientCards { requested: usize, available: usize },
}

/// Ordered sequence of cards, top first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

/// Result of a draw: the drawn cards in draw order, and what is left.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Draw {
    pub drawn: DrawnCards,
    pub remaining: Deck,
}

impl Deck {
    /// The full 78-card deck, all upright, in canonical order:
    /// suite by suite (ace to king), then the majors from The Fool to The World.
    #[must_use]
    pub fn full() -> Self {
        let minors = Suite::ALL
            .into_iter()
            .flat_map(|suite| Rank::ALL.into_iter().map(move |rank| Card::minor(suite, rank)));
        let majors = MajorArcana::ALL.into_iter().map(Card::major);

        let deck: Deck = minors.chain(majors).collect();
        debug!("built full deck of {} cards", deck.len());
        deck
    }

    /// Build a deck from cards, first card on top.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        cards.into_iter().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Top card, if any.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Iterate cards from the top down.
    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }

    /// Does the deck hold this card, in any orientation?
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.iter().any(|c| c.is_same_card(card))
    }

    /// Whether every card identity appears at most once.
    #[must_use]
    pub fn has_duplicates(&self) -> bool {
        let mut seen = FxHashSet::default();
        !self.cards.iter().all(|card| seen.insert(card.upright()))
    }

    /// Exactly the 78 distinct tarot cards, orientation ignored.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.len() == FULL_DECK_SIZE && !self.has_duplicates()
    }

    /// A uniformly shuffled copy of this deck (Fisher-Yates).
    ///
    /// Walks from the last index down to 1, swapping each position with a
    /// uniformly chosen index at or below it.
    #[must_use]
    pub fn shuffled(&self, rng: &mut DeckRng) -> Deck {
        let mut cards: Vec<Card> = self.cards.iter().copied().collect();
        for i in (1..cards.len()).rev() {
            let j = rng.gen_index(i);
            cards.swap(i, j);
        }
        debug!("shuffled deck of {} cards", cards.len());
        Deck::from_cards(cards)
    }

    /// Draw `count` cards from the top with 50/50 orientations.
    pub fn draw(&self, count: usize, rng: &mut DeckRng) -> Result<Draw, DeckError> {
        self.draw_with_reversal_chance(count, rng, DEFAULT_REVERSAL_CHANCE)
    }

    /// Draw `count` cards from the top, each reversed with the given probability.
    ///
    /// Fails without consuming any randomness when the deck is too small.
    pub fn draw_with_reversal_chance(
        &self,
        count: usize,
        rng: &mut DeckRng,
        reversal_chance: f64,
    ) -> Result<Draw, DeckError> {
        if count > self.len() {
            return Err(DeckError::InsufficientCards {
                requested: count,
                available: self.len(),
            });
        }

        let (top, rest) = self.cards.clone().split_at(count);
        let drawn: DrawnCards = top
            .iter()
            .map(|&card| orient(card, rng, reversal_chance))
            .collect();

        debug!("drew {} cards, {} remain", drawn.len(), rest.len());
        Ok(Draw {
            drawn,
            remaining: Deck { cards: rest },
        })
    }

    /// Drop the top `count` cards without orienting them.
    pub fn take_top(&self, count: usize) -> Result<(Vec<Card>, Deck), DeckError> {
        if count > self.len() {
            return Err(DeckError::InsufficientCards {
                requested: count,
                available: self.len(),
            });
        }
        let (top, rest) = self.cards.clone().split_at(count);
        Ok((top.into_iter().collect(), Deck { cards: rest }))
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

/// The full 78-card deck in canonical order.
#[must_use]
pub fn create_full_deck() -> Deck {
    Deck::full()
}

/// Give a card a fresh 50/50 orientation.
///
/// Depends only on the random source, never on the card itself.
#[must_use]
pub fn assign_orientation(card: Card, rng: &mut DeckRng) -> Card {
    orient(card, rng, DEFAULT_REVERSAL_CHANCE)
}

fn orient(card: Card, rng: &mut DeckRng, reversal_chance: f64) -> Card {
    let orientation = if rng.gen_bool(reversal_chance) {
        Orientation::Reversed
    } else {
        Orientation::Upright
    };
    card.with_orientation(orientation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_deck_shape() {
        let deck = Deck::full();

        assert_eq!(deck.len(), FULL_DECK_SIZE);
        assert!(deck.is_complete());
        assert!(deck.iter().all(|c| c.orientation() == Orientation::Upright));
        assert_eq!(deck.iter().filter(|c| c.is_major()).count(), 22);
    }

    #[test]
    fn test_full_deck_canonical_order() {
        let cards: Vec<_> = Deck::full().iter().copied().collect();

        assert_eq!(cards[0], Card::minor(Suite::Wands, Rank::Ace));
        assert_eq!(cards[13], Card::minor(Suite::Wands, Rank::King));
        assert_eq!(cards[14], Card::minor(Suite::Cups, Rank::Ace));
        assert_eq!(cards[55], Card::minor(Suite::Pentacles, Rank::King));
        assert_eq!(cards[56], Card::major(MajorArcana::TheFool));
        assert_eq!(cards[77], Card::major(MajorArcana::TheWorld));
    }

    #[test]
    fn test_full_deck_is_idempotent() {
        assert_eq!(create_full_deck(), create_full_deck());
    }

    #[test]
    fn test_shuffle_preserves_cards_and_input() {
        let mut rng = DeckRng::new(42);
        let deck = Deck::full();
        let shuffled = deck.shuffled(&mut rng);

        assert_eq!(deck, Deck::full());
        assert_ne!(shuffled, deck);
        assert!(shuffled.is_complete());
    }

    #[test]
    fn test_shuffle_is_seed_deterministic() {
        let a = Deck::full().shuffled(&mut DeckRng::new(9));
        let b = Deck::full().shuffled(&mut DeckRng::new(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_small_decks() {
        let mut rng = DeckRng::new(1);
        assert!(Deck::default().shuffled(&mut rng).is_empty());

        let one = Deck::from_cards([Card::major(MajorArcana::Death)]);
        assert_eq!(one.shuffled(&mut rng), one);
    }

    #[test]
    fn test_draw_takes_from_top() {
        let mut rng = DeckRng::new(42);
        let deck = Deck::full();
        let draw = deck.draw(2, &mut rng).unwrap();

        assert!(draw.drawn[0].is_same_card(&Card::minor(Suite::Wands, Rank::Ace)));
        assert!(draw.drawn[1].is_same_card(&Card::minor(Suite::Wands, Rank::Two)));
        assert_eq!(draw.remaining.len(), 76);
        assert_eq!(draw.remaining.top(), Some(&Card::minor(Suite::Wands, Rank::Three)));
        assert_eq!(deck.len(), 78);
    }

    #[test]
    fn test_draw_zero_and_all() {
        let mut rng = DeckRng::new(42);
        let deck = Deck::full();

        let none = deck.draw(0, &mut rng).unwrap();
        assert!(none.drawn.is_empty());
        assert_eq!(none.remaining, deck);

        let all = deck.draw(78, &mut rng).unwrap();
        assert_eq!(all.drawn.len(), 78);
        assert!(all.remaining.is_empty());
    }

    #[test]
    fn test_draw_insufficient_cards() {
        let mut rng = DeckRng::new(42);
        let deck = Deck::from_cards([Card::major(MajorArcana::TheSun)]);
        let before = rng.state();

        assert_eq!(
            deck.draw(2, &mut rng),
            Err(DeckError::InsufficientCards {
                requested: 2,
                available: 1,
            })
        );
        assert_eq!(deck.len(), 1);
        assert_eq!(rng.state(), before);
    }

    #[test]
    fn test_orientation_extremes() {
        let mut rng = DeckRng::new(5);
        let deck = Deck::full();

        let upright = deck.draw_with_reversal_chance(10, &mut rng, 0.0).unwrap();
        assert!(upright.drawn.iter().all(|c| !c.orientation().is_reversed()));

        let reversed = deck.draw_with_reversal_chance(10, &mut rng, 1.0).unwrap();
        assert!(reversed.drawn.iter().all(|c| c.orientation().is_reversed()));
    }

    #[test]
    fn test_assign_orientation_mixes() {
        let mut rng = DeckRng::new(77);
        let card = Card::minor(Suite::Cups, Rank::Six);

        let reversed = (0..200)
            .map(|_| assign_orientation(card, &mut rng))
            .filter(|c| c.orientation().is_reversed())
            .count();

        assert!(reversed > 60 && reversed < 140, "reversed {reversed} of 200");
    }

    #[test]
    fn test_take_top_keeps_orientation() {
        let reversed = Card::major(MajorArcana::TheMoon).with_orientation(Orientation::Reversed);
        let deck = Deck::from_cards([reversed, Card::major(MajorArcana::TheSun)]);

        let (top, rest) = deck.take_top(1).unwrap();
        assert_eq!(top, vec![reversed]);
        assert_eq!(rest.len(), 1);
        assert!(deck.take_top(3).is_err());
    }

    #[test]
    fn test_duplicates_detected() {
        let card = Card::minor(Suite::Swords, Rank::Two);
        let deck = Deck::from_cards([card, card.with_orientation(Orientation::Reversed)]);
        assert!(deck.has_duplicates());
        assert!(!Deck::full().has_duplicates());
    }

    #[test]
    fn test_deck_serde() {
        let deck = Deck::full().shuffled(&mut DeckRng::new(3));
        let json = serde_json::to_string(&deck).unwrap();
        let restored: Deck = serde_json::from_str(&json).unwrap();
        assert_eq!(deck, restored);
    }
}
