//! Card vocabulary: suites, ranks, arcana, and card values.
//!
//! ## Key Types
//!
//! - `Suite` / `Element`: the four suites and their elements
//! - `Rank` / `CourtRank`: minor arcana ranks and their numeric values
//! - `MajorArcana`: the 22 archetypes
//! - `Card` / `Orientation`: a card value, oriented at draw time
//!
//! ## Display
//!
//! `naming` turns cards into display text and image filenames;
//! `interpretation` gives keyword readings for improvisation.

pub mod arcana;
pub mod card;
pub mod interpretation;
pub mod naming;
pub mod rank;
pub mod suite;

pub use arcana::MajorArcana;
pub use card::{Card, Orientation};
pub use interpretation::{interpretation, keywords, Interpretation};
pub use naming::{card_image_filename, card_image_path, format_card_name, pip_label, NamingError};
pub use rank::{CourtRank, Rank};
pub use suite::{Element, Suite};
