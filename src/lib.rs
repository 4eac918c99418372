//! # tarot-encounters
//!
//! A tarot rules engine for improvising tabletop RPG encounters.
//!
//! ## Design Principles
//!
//! 1. **Values, not handles**: Cards are immutable and decks are persistent
//!    values. Shuffling and drawing return new decks; old snapshots never change.
//!
//! 2. **Explicit randomness**: Every random draw comes from a `DeckRng` the
//!    caller owns, so sessions are reproducible from a seed.
//!
//! 3. **No stale selection state**: PC selection is one tagged state value,
//!    rebuilt on each answer.
//!
//! ## Modules
//!
//! - `core`: RNG and session configuration
//! - `cards`: Suites, ranks, arcana, card values, naming and interpretation
//! - `deck`: The 78-card deck: construction, shuffle, draw
//! - `selection`: Mapping PC group answers to a representative card
//! - `encounter`: Encounter spreads and the session that deals them

pub mod cards;
pub mod core;
pub mod deck;
pub mod encounter;
pub mod selection;

// Re-export commonly used types
pub use crate::core::{DeckRng, DeckRngState, SessionConfig};

pub use crate::cards::{
    card_image_filename, format_card_name, Card, CourtRank, Element, MajorArcana, NamingError,
    Orientation, Rank, Suite,
};

pub use crate::deck::{create_full_deck, Deck, DeckError, Draw};

pub use crate::selection::{
    EmotionalType, GroupCharacteristics, PartySize, PcSelector, PersonalityAxis, RationalType,
    SelectionError, SelectionEvent, SelectionState, Temperament,
};

pub use crate::encounter::{
    create_encounter_spread, EncounterSession, EncounterSpread, SessionError, SpreadError,
};
