//! Core engine plumbing: randomness and session configuration.
//!
//! Nothing here knows about tarot; the card, deck, and selection modules
//! build on these pieces.

pub mod config;
pub mod rng;

pub use config::{SessionConfig, DEFAULT_REVERSAL_CHANCE};
pub use rng::{DeckRng, DeckRngState};
