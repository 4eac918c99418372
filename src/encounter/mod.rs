//! Encounter spreads and the session that deals them.
//!
//! - `spread`: composing a PC card and three deck cards into a spread
//! - `session`: RNG, deck, and selector bundled for a single caller

pub mod session;
pub mod spread;

pub use session::{EncounterSession, SessionError};
pub use spread::{
    create_encounter_spread, deal_spread, EncounterSpread, SpreadError, SPREAD_DRAW_COUNT,
};
