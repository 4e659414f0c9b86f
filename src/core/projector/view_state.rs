// Pure projection of a page's view state.
//
// Purpose
// - Derive the visible sequence (and, on the swipe page, the card under the cursor) from the
//   snapshot, the category filter and the cursor.
//
// Boundaries
// - No input or output, no hidden counters: the same arguments always give the same ViewState.

use crate::core::projector::filter::{self, CategoryFilter};
use crate::core::spot::model::Spot;

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState<'a> {
    pub filter: CategoryFilter,
    pub visible: Vec<&'a Spot>,
    pub cursor: Option<usize>,
}

/// Where the swipe cursor stands in the filtered sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwipePosition<'a> {
    /// The filtered sequence has no spots at all.
    Empty,
    /// The sequence had spots and the cursor moved past the last one.
    Exhausted { total: usize },
    Current {
        index: usize,
        total: usize,
        spot: &'a Spot,
    },
}

pub fn project<'a>(
    snapshot: &'a [Spot],
    filter: &CategoryFilter,
    cursor: Option<usize>,
) -> ViewState<'a> {
    ViewState {
        filter: filter.clone(),
        visible: filter::visible(snapshot, filter),
        cursor,
    }
}

impl<'a> ViewState<'a> {
    /// `None` for pages without a cursor.
    pub fn position(&self) -> Option<SwipePosition<'a>> {
        let index = self.cursor?;
        let total = self.visible.len();
        Some(match self.visible.get(index) {
            _ if total == 0 => SwipePosition::Empty,
            Some(&spot) => SwipePosition::Current { index, total, spot },
            None => SwipePosition::Exhausted { total },
        })
    }
}

/// Swipe cursor. Advances one step per action and only goes back to zero
/// through `reset`, which the page calls on an explicit filter change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwipeCursor(usize);

impl SwipeCursor {
    pub fn index(self) -> usize {
        self.0
    }

    pub fn advance(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    pub fn reset(&mut self) {
        self.0 = 0;
    }
}

#[cfg(test)]
mod view_state_tests {
    use super::*;
    use crate::core::spot::category::Category;
    use crate::test_support::fixtures::spots::make_spot;
    use rstest::{fixture, rstest};

    #[fixture]
    fn snapshot() -> Vec<Spot> {
        vec![
            make_spot("spot-1", Some("Makanan"), false),
            make_spot("spot-2", Some("Kafe"), false),
            make_spot("spot-3", Some("Makanan"), false),
        ]
    }

    #[rstest]
    fn it_should_be_idempotent(snapshot: Vec<Spot>) {
        let filter = CategoryFilter::Only(Category::Makanan);
        let first = project(&snapshot, &filter, Some(1));
        let second = project(&snapshot, &filter, Some(1));
        assert_eq!(first, second);
        assert_eq!(first.position(), second.position());
    }

    #[rstest]
    fn it_should_point_at_the_spot_under_the_cursor(snapshot: Vec<Spot>) {
        let state = project(&snapshot, &CategoryFilter::Only(Category::Makanan), Some(1));
        match state.position() {
            Some(SwipePosition::Current { index, total, spot }) => {
                assert_eq!(index, 1);
                assert_eq!(total, 2);
                assert_eq!(spot.id, "spot-3");
            }
            other => panic!("expected Current, got {other:?}"),
        }
    }

    #[rstest]
    fn it_should_report_exhausted_past_the_end(snapshot: Vec<Spot>) {
        let state = project(&snapshot, &CategoryFilter::Only(Category::Makanan), Some(2));
        assert_eq!(state.position(), Some(SwipePosition::Exhausted { total: 2 }));
    }

    #[rstest]
    fn it_should_report_empty_when_nothing_matches(snapshot: Vec<Spot>) {
        let state = project(&snapshot, &CategoryFilter::Only(Category::Hiburan), Some(0));
        assert_eq!(state.position(), Some(SwipePosition::Empty));
        let state = project(&snapshot, &CategoryFilter::Only(Category::Hiburan), Some(3));
        assert_eq!(state.position(), Some(SwipePosition::Empty));
    }

    #[rstest]
    fn it_should_have_no_position_without_a_cursor(snapshot: Vec<Spot>) {
        assert_eq!(project(&snapshot, &CategoryFilter::All, None).position(), None);
    }

    #[rstest]
    fn it_should_only_move_forward_until_reset() {
        let mut cursor = SwipeCursor::default();
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.index(), 2);
        cursor.reset();
        assert_eq!(cursor.index(), 0);
    }
}
