// Local-only swipe interactions.
//
// Purpose
// - Record one user action on one spot, and derive the like/bookmark counters from the full log.
//
// Boundaries
// - Never sent to the document store. Persistence lives in application::swipe_log.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeAction {
    Like,
    Bookmark,
    Skip,
}

impl SwipeAction {
    /// Keyboard bindings of the swipe page.
    pub fn from_key(key: &str) -> Option<SwipeAction> {
        match key {
            "ArrowLeft" => Some(SwipeAction::Skip),
            "ArrowRight" => Some(SwipeAction::Like),
            "ArrowUp" => Some(SwipeAction::Bookmark),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwipeRecord {
    pub spot_id: String,
    pub action: SwipeAction,
    /// Epoch milliseconds.
    pub timestamp: i64,
}

impl SwipeRecord {
    pub fn new(spot_id: impl Into<String>, action: SwipeAction, timestamp: i64) -> Self {
        Self {
            spot_id: spot_id.into(),
            action,
            timestamp,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwipeStats {
    pub like_count: usize,
    pub bookmark_count: usize,
}

impl SwipeStats {
    /// Counts every record, duplicates included. Category filters do not apply.
    pub fn tally<'a>(records: impl IntoIterator<Item = &'a SwipeRecord>) -> SwipeStats {
        records
            .into_iter()
            .fold(SwipeStats::default(), |mut stats, record| {
                match record.action {
                    SwipeAction::Like => stats.like_count += 1,
                    SwipeAction::Bookmark => stats.bookmark_count += 1,
                    SwipeAction::Skip => {}
                }
                stats
            })
    }
}

#[cfg(test)]
mod swipe_tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn it_should_tally_likes_and_bookmarks_including_duplicates() {
        let records = vec![
            SwipeRecord::new("spot-1", SwipeAction::Like, 1),
            SwipeRecord::new("spot-1", SwipeAction::Like, 2),
            SwipeRecord::new("spot-2", SwipeAction::Bookmark, 3),
            SwipeRecord::new("spot-3", SwipeAction::Skip, 4),
        ];
        assert_eq!(
            SwipeStats::tally(&records),
            SwipeStats {
                like_count: 2,
                bookmark_count: 1
            }
        );
    }

    #[rstest]
    fn it_should_start_from_zero() {
        assert_eq!(SwipeStats::tally(&Vec::<SwipeRecord>::new()), SwipeStats::default());
    }

    #[rstest]
    #[case("ArrowLeft", Some(SwipeAction::Skip))]
    #[case("ArrowRight", Some(SwipeAction::Like))]
    #[case("ArrowUp", Some(SwipeAction::Bookmark))]
    #[case("ArrowDown", None)]
    fn it_should_map_keys_to_actions(#[case] key: &str, #[case] expected: Option<SwipeAction>) {
        assert_eq!(SwipeAction::from_key(key), expected);
    }

    #[rstest]
    fn it_should_use_the_stored_layout() {
        let record = SwipeRecord::new("spot-1", SwipeAction::Bookmark, 1_700_000_000_000);
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({ "spotId": "spot-1", "action": "bookmark", "timestamp": 1_700_000_000_000i64 })
        );
    }
}
