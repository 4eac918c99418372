//! Display names and image asset resolution.
//!
//! ## Naming conventions
//!
//! - `format_card_name`: words everywhere ("Four of Wands", "The Hanged Man").
//! - `pip_label`: digits for ranks one to ten ("4 of Wands"), words for
//!   page/knight/queen/king. This is the label the group selection surface shows.
//!
//! ## Image resolution
//!
//! `card_image_filename` parses a display name back into an asset filename
//! `<prefix><value>.jpg`. It accepts both conventions above, so every minor
//! card's name round-trips. Major arcana have no image assets in this mapping
//! and always fail with `NamingError::InvalidCardName`.

use thiserror::Error;

use super::card::Card;
use super::rank::Rank;
use super::suite::Suite;

/// Image asset file extension.
pub const IMAGE_EXTENSION: &str = "jpg";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamingError {
    #[error("invalid card name: {0}")]
    InvalidCardName(String),
}

/// Word-form display name of a card, ignoring orientation.
#[must_use]
pub fn format_card_name(card: &Card) -> String {
    match *card {
        Card::Major { arcana, .. } => arcana
            .identifier()
            .split('_')
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" "),
        Card::Minor { suite, rank, .. } => format!("{} of {}", rank.name(), suite.name()),
    }
}

/// Numeric label for a minor card ("4 of Wands", "Ace of Cups").
///
/// Majors render exactly as `format_card_name`.
#[must_use]
pub fn pip_label(card: &Card) -> String {
    match *card {
        Card::Minor { suite, rank, .. } if rank.is_pip() => {
            format!("{} of {}", rank.value(), suite.name())
        }
        _ => format_card_name(card),
    }
}

/// Resolve a display name into its image filename, e.g. `"Page of Swords"`
/// becomes `"s11.jpg"`.
pub fn card_image_filename(display_name: &str) -> Result<String, NamingError> {
    let invalid = || NamingError::InvalidCardName(display_name.to_string());

    let (rank_part, suite_part) = display_name.split_once(" of ").ok_or_else(invalid)?;
    let suite = Suite::from_name(suite_part).ok_or_else(invalid)?;
    let rank = parse_rank(rank_part).ok_or_else(invalid)?;

    Ok(format!(
        "{}{}.{}",
        suite.image_prefix(),
        rank.value(),
        IMAGE_EXTENSION
    ))
}

/// Join a resolved filename onto an asset base path.
///
/// An empty base yields the bare filename.
pub fn card_image_path(base: &str, display_name: &str) -> Result<String, NamingError> {
    let filename = card_image_filename(display_name)?;
    if base.is_empty() {
        return Ok(filename);
    }
    Ok(format!("{}/{}", base.trim_end_matches('/'), filename))
}

/// Digits `1..=10` (no sign, no leading zero) or a capitalized rank word.
fn parse_rank(text: &str) -> Option<Rank> {
    let is_numeral = !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit());
    if !is_numeral {
        return Rank::from_name(text);
    }
    if text.starts_with('0') {
        return None;
    }
    let value: u8 = text.parse().ok()?;
    if (1..=10).contains(&value) {
        Rank::from_value(value)
    } else {
        None
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
