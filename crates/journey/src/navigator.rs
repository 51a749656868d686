use content::{LocationRecord, sort_by_order};
use serde::Serialize;

use crate::error::JourneyError;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Previous,
    Next,
}

/// Cursor over a non-empty sequence.
///
/// Invariant: `index < len` and `len > 0`. Fields are private so every
/// transition goes through the clamping functions below.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct NavigatorState {
    index: usize,
    len: usize,
}

impl NavigatorState {
    pub fn new(len: usize) -> Result<Self, JourneyError> {
        if len == 0 {
            return Err(JourneyError::EmptyInput);
        }
        Ok(Self { index: 0, len })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.len
    }
}

/// Step one position; unchanged at either end.
pub fn advance(state: NavigatorState, direction: Direction) -> NavigatorState {
    let index = match direction {
        Direction::Previous => state.index.saturating_sub(1),
        Direction::Next => (state.index + 1).min(state.len - 1),
    };
    NavigatorState { index, ..state }
}

/// Direct selection, clamped to the last position.
pub fn jump_to(state: NavigatorState, index: usize) -> NavigatorState {
    NavigatorState {
        index: index.min(state.len - 1),
        ..state
    }
}

/// Records `0..=index` that have a place on the globe.
pub fn visible_records(state: NavigatorState, records: &[LocationRecord]) -> Vec<&LocationRecord> {
    records
        .iter()
        .take(state.index + 1)
        .filter(|r| !r.is_global())
        .collect()
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressDot {
    Visited,
    Current,
    Upcoming,
}

/// One dot per position.
pub fn progress(state: NavigatorState) -> Vec<ProgressDot> {
    (0..state.len)
        .map(|i| match i.cmp(&state.index) {
            std::cmp::Ordering::Less => ProgressDot::Visited,
            std::cmp::Ordering::Equal => ProgressDot::Current,
            std::cmp::Ordering::Greater => ProgressDot::Upcoming,
        })
        .collect()
}

/// Sort by `order` and place the cursor on the first record.
pub fn initialize(mut records: Vec<LocationRecord>) -> Result<Navigator, JourneyError> {
    let state = NavigatorState::new(records.len())?;
    sort_by_order(&mut records);
    Ok(Navigator { records, state })
}

/// Sorted records plus the cursor over them.
#[derive(Debug, Clone)]
pub struct Navigator {
    records: Vec<LocationRecord>,
    state: NavigatorState,
}

impl Navigator {
    pub fn records(&self) -> &[LocationRecord] {
        &self.records
    }

    pub fn state(&self) -> NavigatorState {
        self.state
    }

    pub fn current(&self) -> &LocationRecord {
        &self.records[self.state.index]
    }

    pub fn visible(&self) -> Vec<&LocationRecord> {
        visible_records(self.state, &self.records)
    }

    pub fn can_go_previous(&self) -> bool {
        !self.state.is_first()
    }

    pub fn can_go_next(&self) -> bool {
        !self.state.is_last()
    }

    pub fn progress(&self) -> Vec<ProgressDot> {
        progress(self.state)
    }

    /// Returns whether the cursor moved.
    pub fn advance(&mut self, direction: Direction) -> bool {
        self.set(advance(self.state, direction))
    }

    /// Returns whether the cursor moved.
    pub fn jump_to(&mut self, index: usize) -> bool {
        self.set(jump_to(self.state, index))
    }

    fn set(&mut self, next: NavigatorState) -> bool {
        let moved = next != self.state;
        self.state = next;
        moved
    }
}

#[cfg(test)]
mod tests {
    use content::LocationRecord;
    use foundation::LatLng;
    use pretty_assertions::assert_eq;

    use super::*;

    fn record(id: &str, order: i32, position: LatLng) -> LocationRecord {
        LocationRecord {
            id: id.to_string(),
            title: id.to_string(),
            location: id.to_string(),
            description: String::new(),
            year: "2020".to_string(),
            icon: String::new(),
            coordinates: position,
            color: "#3B82F6".to_string(),
            order,
        }
    }

    fn six_with_sentinel() -> Vec<LocationRecord> {
        vec![
            record("1", 1, LatLng::new(19.7515, 75.7139)),
            record("2", 2, LatLng::new(31.9686, -99.9018)),
            record("3", 3, LatLng::new(45.4215, -75.6972)),
            record("4", 4, LatLng::new(51.5074, -0.1278)),
            record("5", 5, LatLng::new(25.2048, 55.2708)),
            record("6", 6, LatLng::ORIGIN),
        ]
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(initialize(Vec::new()).unwrap_err(), JourneyError::EmptyInput);
        assert_eq!(NavigatorState::new(0), Err(JourneyError::EmptyInput));
    }

    #[test]
    fn initialize_sorts_by_order() {
        let mut records = six_with_sentinel();
        records.reverse();
        let nav = initialize(records).unwrap();
        let ids: Vec<&str> = nav.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);
        assert_eq!(nav.state().index(), 0);
        assert_eq!(nav.current().id, "1");
    }

    #[test]
    fn advance_is_idempotent_at_boundaries() {
        for len in 1..6 {
            let first = NavigatorState::new(len).unwrap();
            assert_eq!(advance(first, Direction::Previous), first);

            let last = jump_to(first, len - 1);
            assert!(last.is_last());
            assert_eq!(advance(last, Direction::Next), last);
        }
    }

    #[test]
    fn advance_steps_by_one() {
        let s = NavigatorState::new(3).unwrap();
        let s = advance(s, Direction::Next);
        assert_eq!(s.index(), 1);
        let s = advance(s, Direction::Next);
        assert_eq!(s.index(), 2);
        let s = advance(s, Direction::Previous);
        assert_eq!(s.index(), 1);
    }

    #[test]
    fn jump_to_clamps() {
        let s = NavigatorState::new(4).unwrap();
        assert_eq!(jump_to(s, 2).index(), 2);
        assert_eq!(jump_to(s, 40).index(), 3);
    }

    #[test]
    fn visible_records_never_exceed_cursor_and_grow_monotonically() {
        let records = six_with_sentinel();
        let mut state = NavigatorState::new(records.len()).unwrap();
        let mut previous = 0;
        for i in 0..records.len() {
            state = jump_to(state, i);
            let visible = visible_records(state, &records).len();
            assert!(visible <= i + 1);
            assert!(visible >= previous);
            previous = visible;
        }
    }

    #[test]
    fn sentinel_is_navigable_but_not_visible() {
        let records = six_with_sentinel();
        let state = jump_to(NavigatorState::new(records.len()).unwrap(), 5);
        let ids: Vec<&str> = visible_records(state, &records)
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn progress_marks_visited_current_upcoming() {
        let state = jump_to(NavigatorState::new(4).unwrap(), 1);
        assert_eq!(
            progress(state),
            vec![
                ProgressDot::Visited,
                ProgressDot::Current,
                ProgressDot::Upcoming,
                ProgressDot::Upcoming
            ]
        );
    }

    #[test]
    fn navigator_reports_moves_and_button_state() {
        let mut nav = initialize(six_with_sentinel()).unwrap();
        assert!(!nav.can_go_previous());
        assert!(!nav.advance(Direction::Previous));
        assert!(nav.advance(Direction::Next));
        assert!(!nav.jump_to(1));
        assert!(nav.jump_to(5));
        assert!(!nav.can_go_next());
        assert!(nav.current().is_global());
    }
}
