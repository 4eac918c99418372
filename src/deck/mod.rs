//! Deck engine: the 78-card deck as an immutable, threadable value.
//!
//! Construct with `Deck::full()`, then thread the returned values through
//! `shuffled` and `draw`. Old snapshots stay valid and unchanged.

pub mod engine;

pub use engine::{assign_orientation, create_full_deck, Deck, DeckError, Draw, DrawnCards, FULL_DECK_SIZE};
