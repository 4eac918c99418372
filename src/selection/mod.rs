//! PC card selection.
//!
//! Turns answers about the player characters (headcount, personality) into
//! the single minor arcana card that represents them.
//!
//! - `temperament`: personality axis, subtypes, and their suites
//! - `party`: party size and the pure selection rules
//! - `selector`: the incremental state machine a caller drives

pub mod error;
pub mod party;
pub mod selector;
pub mod temperament;

pub use error::SelectionError;
pub use party::{
    determine_suite, rank_from_size, select_group_card, select_single_card, GroupCharacteristics,
    PartySize, MAX_COUNTED_GROUP,
};
pub use selector::{PcSelector, SelectionEvent, SelectionState};
pub use temperament::{EmotionalType, PersonalityAxis, RationalType, Temperament};
