//! PC card selection state machine.
//!
//! The caller feeds answers one at a time as `SelectionEvent`s. Every event
//! rebuilds the whole `SelectionState` value, so there is no separate
//! subtype or rank field that could be left behind when an earlier answer
//! changes.
//!
//! ## States
//!
//! ```text
//! Start -> SizeChosen -> AxisChosen -> SubtypeChosen -> RankChosen
//! ```
//!
//! A group party resolves at `SubtypeChosen` (rank comes from headcount);
//! a single PC needs `RankChosen`. Resolvability is derived from the
//! current state on every call.
//!
//! ## Transition rules
//!
//! - A new axis drops the subtype and court rank. Re-selecting the current
//!   axis changes nothing.
//! - A new subtype drops the court rank.
//! - A new size keeps the temperament; leaving the single-PC path drops
//!   the court rank.
//! - Rejected events leave the state untouched.
//!
//! ```
//! use tarot_encounters::selection::{EmotionalType, PartySize, PcSelector, PersonalityAxis, RationalType};
//!
//! let mut selector = PcSelector::new();
//! selector.choose_size(PartySize::Group(4)).unwrap();
//! selector.choose_axis(PersonalityAxis::Emotional).unwrap();
//! selector.choose_emotional(EmotionalType::Hot).unwrap();
//! assert_eq!(selector.card().unwrap().to_string(), "Four of Wands");
//!
//! selector.choose_axis(PersonalityAxis::Rational).unwrap();
//! assert!(!selector.is_resolvable());
//! selector.choose_rational(RationalType::Visionary).unwrap();
//! assert_eq!(selector.card().unwrap().to_string(), "Four of Swords");
//! ```

use log::trace;
use serde::{Deserialize, Serialize};

use super::error::SelectionError;
use super::party::{select_group_card, select_single_card, GroupCharacteristics, PartySize};
use super::temperament::{EmotionalType, PersonalityAxis, RationalType, Temperament};
use crate::cards::{Card, CourtRank};

/// One answer from the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionEvent {
    Size(PartySize),
    Axis(PersonalityAxis),
    Emotional(EmotionalType),
    Rational(RationalType),
    Court(CourtRank),
    Reset,
}

/// Everything answered so far, as one tagged value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionState {
    #[default]
    Start,
    SizeChosen {
        party: PartySize,
    },
    AxisChosen {
        party: PartySize,
        axis: PersonalityAxis,
    },
    SubtypeChosen {
        party: PartySize,
        temperament: Temperament,
    },
    /// Single-PC path only.
    RankChosen {
        temperament: Temperament,
        court: CourtRank,
    },
}

impl SelectionState {
    /// Chosen party size, if any.
    #[must_use]
    pub fn party(&self) -> Option<PartySize> {
        match *self {
            SelectionState::Start => None,
            SelectionState::SizeChosen { party }
            | SelectionState::AxisChosen { party, .. }
            | SelectionState::SubtypeChosen { party, .. } => Some(party),
            SelectionState::RankChosen { .. } => Some(PartySize::Single),
        }
    }

    /// Chosen personality axis, if any.
    #[must_use]
    pub fn axis(&self) -> Option<PersonalityAxis> {
        match *self {
            SelectionState::Start | SelectionState::SizeChosen { .. } => None,
            SelectionState::AxisChosen { axis, .. } => Some(axis),
            SelectionState::SubtypeChosen { temperament, .. }
            | SelectionState::RankChosen { temperament, .. } => Some(temperament.axis()),
        }
    }

    /// Chosen temperament (axis plus subtype), if any.
    #[must_use]
    pub fn temperament(&self) -> Option<Temperament> {
        match *self {
            SelectionState::SubtypeChosen { temperament, .. }
            | SelectionState::RankChosen { temperament, .. } => Some(temperament),
            _ => None,
        }
    }

    /// Chosen court rank, if any.
    #[must_use]
    pub fn court(&self) -> Option<CourtRank> {
        match *self {
            SelectionState::RankChosen { court, .. } => Some(court),
            _ => None,
        }
    }

    /// The PC card, if every question on the active path is answered.
    pub fn resolve(&self) -> Result<Card, SelectionError> {
        match *self {
            SelectionState::Start => Err(SelectionError::SizeRequired),
            SelectionState::SizeChosen { .. } => Err(SelectionError::AxisRequired),
            SelectionState::AxisChosen { .. } => Err(SelectionError::SubtypeRequired),
            SelectionState::SubtypeChosen {
                party: PartySize::Single,
                ..
            } => Err(SelectionError::Unresolved),
            SelectionState::SubtypeChosen {
                party: PartySize::Group(size),
                temperament,
            } => select_group_card(&GroupCharacteristics::new(size, temperament)),
            SelectionState::RankChosen { temperament, court } => {
                Ok(select_single_card(temperament, court))
            }
        }
    }

    /// Apply one event, producing the next state.
    pub fn next(self, event: SelectionEvent) -> Result<SelectionState, SelectionError> {
        match event {
            SelectionEvent::Reset => Ok(SelectionState::Start),
            SelectionEvent::Size(party) => self.with_size(party),
            SelectionEvent::Axis(axis) => self.with_axis(axis),
            SelectionEvent::Emotional(kind) => self.with_temperament(kind.into()),
            SelectionEvent::Rational(kind) => self.with_temperament(kind.into()),
            SelectionEvent::Court(court) => self.with_court(court),
        }
    }

    fn with_size(self, party: PartySize) -> Result<SelectionState, SelectionError> {
        if let PartySize::Group(size) = party {
            if size < 2 {
                return Err(SelectionError::InvalidGroupSize(size));
            }
        }

        Ok(match self {
            SelectionState::Start | SelectionState::SizeChosen { .. } => {
                SelectionState::SizeChosen { party }
            }
            SelectionState::AxisChosen { axis, .. } => SelectionState::AxisChosen { party, axis },
            SelectionState::SubtypeChosen { temperament, .. } => {
                SelectionState::SubtypeChosen { party, temperament }
            }
            SelectionState::RankChosen { temperament, court } => match party {
                PartySize::Single => SelectionState::RankChosen { temperament, court },
                PartySize::Group(_) => SelectionState::SubtypeChosen { party, temperament },
            },
        })
    }

    fn with_axis(self, axis: PersonalityAxis) -> Result<SelectionState, SelectionError> {
        let party = self.party().ok_or(SelectionError::SizeRequired)?;
        if self.axis() == Some(axis) {
            return Ok(self);
        }
        Ok(SelectionState::AxisChosen { party, axis })
    }

    fn with_temperament(self, temperament: Temperament) -> Result<SelectionState, SelectionError> {
        let party = self.party().ok_or(SelectionError::SizeRequired)?;
        let axis = self.axis().ok_or(SelectionError::AxisRequired)?;
        if temperament.axis() != axis {
            return Err(SelectionError::SubtypeMismatch { axis });
        }
        if self.temperament() == Some(temperament) {
            return Ok(self);
        }
        Ok(SelectionState::SubtypeChosen { party, temperament })
    }

    fn with_court(self, court: CourtRank) -> Result<SelectionState, SelectionError> {
        let party = self.party().ok_or(SelectionError::SizeRequired)?;
        if !party.is_single() {
            return Err(SelectionError::CourtRankOnGroupPath);
        }
        self.axis().ok_or(SelectionError::AxisRequired)?;
        let temperament = self.temperament().ok_or(SelectionError::SubtypeRequired)?;
        Ok(SelectionState::RankChosen { temperament, court })
    }
}

/// Drives a `SelectionState` from caller input.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PcSelector {
    state: SelectionState,
}

impl PcSelector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Apply an event and return the card now resolvable, if any.
    ///
    /// On error the state is unchanged.
    pub fn apply(&mut self, event: SelectionEvent) -> Result<Option<Card>, SelectionError> {
        let next = self.state.next(event)?;
        trace!("selection {:?} --{:?}--> {:?}", self.state, event, next);
        self.state = next;
        Ok(self.card())
    }

    pub fn choose_size(&mut self, party: PartySize) -> Result<Option<Card>, SelectionError> {
        self.apply(SelectionEvent::Size(party))
    }

    pub fn choose_axis(&mut self, axis: PersonalityAxis) -> Result<Option<Card>, SelectionError> {
        self.apply(SelectionEvent::Axis(axis))
    }

    pub fn choose_emotional(&mut self, kind: EmotionalType) -> Result<Option<Card>, SelectionError> {
        self.apply(SelectionEvent::Emotional(kind))
    }

    pub fn choose_rational(&mut self, kind: RationalType) -> Result<Option<Card>, SelectionError> {
        self.apply(SelectionEvent::Rational(kind))
    }

    pub fn choose_court(&mut self, court: CourtRank) -> Result<Option<Card>, SelectionError> {
        self.apply(SelectionEvent::Court(court))
    }

    pub fn reset(&mut self) {
        self.state = SelectionState::Start;
    }

    /// Is a card currently resolvable?
    #[must_use]
    pub fn is_resolvable(&self) -> bool {
        self.state.resolve().is_ok()
    }

    /// The PC card, if resolvable.
    #[must_use]
    pub fn card(&self) -> Option<Card> {
        self.state.resolve().ok()
    }

    /// The PC card, or why it is not resolvable yet.
    pub fn resolve(&self) -> Result<Card, SelectionError> {
        self.state.resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suite};

    fn group(size: u32, events: &[SelectionEvent]) -> PcSelector {
        let mut selector = PcSelector::new();
        selector.choose_size(PartySize::Group(size)).unwrap();
        for &event in events {
            selector.apply(event).unwrap();
        }
        selector
    }

    #[test]
    fn test_group_path_resolves_at_subtype() {
        let mut selector = PcSelector::new();

        assert_eq!(selector.choose_size(PartySize::Group(4)), Ok(None));
        assert_eq!(selector.choose_axis(PersonalityAxis::Emotional), Ok(None));
        assert_eq!(
            selector.choose_emotional(EmotionalType::Hot),
            Ok(Some(Card::minor(Suite::Wands, Rank::Four)))
        );
    }

    #[test]
    fn test_single_path_requires_court() {
        let mut selector = PcSelector::new();
        selector.choose_size(PartySize::Single).unwrap();
        selector.choose_axis(PersonalityAxis::Rational).unwrap();
        selector.choose_rational(RationalType::Pragmatic).unwrap();

        assert!(!selector.is_resolvable());
        assert_eq!(selector.resolve(), Err(SelectionError::Unresolved));

        let card = selector.choose_court(CourtRank::Queen).unwrap();
        assert_eq!(card, Some(Card::minor(Suite::Pentacles, Rank::Queen)));
    }

    #[test]
    fn test_axis_switch_clears_subtype() {
        let mut selector = group(
            4,
            &[
                SelectionEvent::Axis(PersonalityAxis::Emotional),
                SelectionEvent::Emotional(EmotionalType::Hot),
            ],
        );
        assert!(selector.is_resolvable());

        selector.choose_axis(PersonalityAxis::Rational).unwrap();
        assert!(!selector.is_resolvable());
        assert_eq!(selector.state().temperament(), None);
        assert_eq!(
            *selector.state(),
            SelectionState::AxisChosen {
                party: PartySize::Group(4),
                axis: PersonalityAxis::Rational,
            }
        );
    }

    #[test]
    fn test_axis_switch_clears_court() {
        let mut selector = PcSelector::new();
        selector.choose_size(PartySize::Single).unwrap();
        selector.choose_axis(PersonalityAxis::Emotional).unwrap();
        selector.choose_emotional(EmotionalType::Hot).unwrap();
        selector.choose_court(CourtRank::Ace).unwrap();

        selector.choose_axis(PersonalityAxis::Rational).unwrap();
        assert_eq!(selector.state().court(), None);
        assert_eq!(selector.state().temperament(), None);

        selector.choose_axis(PersonalityAxis::Emotional).unwrap();
        assert_eq!(selector.state().temperament(), None);
        assert!(!selector.is_resolvable());
    }

    #[test]
    fn test_same_axis_is_noop() {
        let mut selector = group(
            5,
            &[
                SelectionEvent::Axis(PersonalityAxis::Rational),
                SelectionEvent::Rational(RationalType::Pragmatic),
            ],
        );
        let card = selector.choose_axis(PersonalityAxis::Rational).unwrap();
        assert_eq!(card, Some(Card::minor(Suite::Pentacles, Rank::Five)));
    }

    #[test]
    fn test_subtype_switch_clears_court() {
        let mut selector = PcSelector::new();
        selector.choose_size(PartySize::Single).unwrap();
        selector.choose_axis(PersonalityAxis::Emotional).unwrap();
        selector.choose_emotional(EmotionalType::Hot).unwrap();
        selector.choose_court(CourtRank::Ace).unwrap();

        let card = selector.choose_emotional(EmotionalType::Hot).unwrap();
        assert_eq!(card, Some(Card::minor(Suite::Wands, Rank::Ace)));
        assert_eq!(selector.choose_emotional(EmotionalType::Cool).unwrap(), None);
        assert_eq!(selector.state().court(), None);
    }

    #[test]
    fn test_size_change_keeps_temperament() {
        let mut selector = group(
            3,
            &[
                SelectionEvent::Axis(PersonalityAxis::Emotional),
                SelectionEvent::Emotional(EmotionalType::Cool),
            ],
        );
        let card = selector.choose_size(PartySize::Group(7)).unwrap();
        assert_eq!(card, Some(Card::minor(Suite::Cups, Rank::Seven)));

        assert_eq!(selector.choose_size(PartySize::Single).unwrap(), None);
        let card = selector.choose_court(CourtRank::King).unwrap();
        assert_eq!(card, Some(Card::minor(Suite::Cups, Rank::King)));

        let card = selector.choose_size(PartySize::Group(2)).unwrap();
        assert_eq!(card, Some(Card::minor(Suite::Cups, Rank::Two)));
        assert_eq!(selector.state().court(), None);
    }

    #[test]
    fn test_out_of_order_events_rejected() {
        let mut selector = PcSelector::new();

        assert_eq!(
            selector.choose_axis(PersonalityAxis::Emotional),
            Err(SelectionError::SizeRequired)
        );
        selector.choose_size(PartySize::Single).unwrap();
        assert_eq!(
            selector.choose_emotional(EmotionalType::Hot),
            Err(SelectionError::AxisRequired)
        );
        assert_eq!(selector.choose_court(CourtRank::Page), Err(SelectionError::AxisRequired));

        selector.choose_axis(PersonalityAxis::Emotional).unwrap();
        assert_eq!(selector.choose_court(CourtRank::Page), Err(SelectionError::SubtypeRequired));
        assert_eq!(
            selector.choose_rational(RationalType::Visionary),
            Err(SelectionError::SubtypeMismatch {
                axis: PersonalityAxis::Emotional,
            })
        );
        assert_eq!(
            *selector.state(),
            SelectionState::AxisChosen {
                party: PartySize::Single,
                axis: PersonalityAxis::Emotional,
            }
        );
    }

    #[test]
    fn test_court_rejected_on_group_path() {
        let mut selector = group(
            4,
            &[
                SelectionEvent::Axis(PersonalityAxis::Emotional),
                SelectionEvent::Emotional(EmotionalType::Hot),
            ],
        );
        let before = *selector.state();

        assert_eq!(selector.choose_court(CourtRank::King), Err(SelectionError::CourtRankOnGroupPath));
        assert_eq!(*selector.state(), before);
    }

    #[test]
    fn test_invalid_group_size_rejected() {
        let mut selector = PcSelector::new();
        assert_eq!(
            selector.choose_size(PartySize::Group(1)),
            Err(SelectionError::InvalidGroupSize(1))
        );
        assert_eq!(*selector.state(), SelectionState::Start);
    }

    #[test]
    fn test_reset() {
        let mut selector = group(4, &[SelectionEvent::Axis(PersonalityAxis::Rational)]);
        assert_eq!(selector.apply(SelectionEvent::Reset), Ok(None));
        assert_eq!(*selector.state(), SelectionState::Start);

        let mut selector = group(4, &[]);
        selector.reset();
        assert_eq!(selector.resolve(), Err(SelectionError::SizeRequired));
    }

    #[test]
    fn test_state_serde() {
        let state = SelectionState::RankChosen {
            temperament: Temperament::Emotional(EmotionalType::Cool),
            court: CourtRank::Page,
        };
        let json = serde_json::to_string(&state).unwrap();
        let restored: SelectionState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, restored);
    }
}
