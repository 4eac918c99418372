use thiserror::Error;

use super::temperament::PersonalityAxis;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("group size must be at least 2, got {0}")]
    InvalidGroupSize(u32),
    #[error("invalid party size: {0:?}")]
    InvalidPartySize(String),
    #[error("party size has not been chosen")]
    SizeRequired,
    #[error("personality axis has not been chosen")]
    AxisRequired,
    #[error("personality subtype has not been chosen")]
    SubtypeRequired,
    #[error("subtype does not belong to the {axis:?} axis")]
    SubtypeMismatch { axis: PersonalityAxis },
    #[error("court rank only applies to a single PC")]
    CourtRankOnGroupPath,
    #[error("selection is incomplete")]
    Unresolved,
}
