// Swipe page: one card at a time from the filtered snapshot, with like, bookmark and skip.
//
// Responsibilities
// - Record every action in the swipe log, then move the cursor one step.
// - The cursor goes back to the start only on an explicit filter change.
// - A failed subscription keeps the last snapshot but disables every action.

use crate::application::swipe_log::SwipeLog;
use crate::application::sync::collection_sync::CollectionSync;
use crate::core::messages;
use crate::core::ports::{DocumentCollection, KeyValueStore};
use crate::core::projector::card::SpotCard;
use crate::core::projector::filter::{CategoryFilter, UnknownFilter};
use crate::core::projector::view_state::{SwipeCursor, SwipePosition, project};
use crate::core::swipe::SwipeAction;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwipeBody {
    Loading,
    /// The collection itself has no spots.
    EmptyCollection,
    /// Spots exist but none match the filter.
    EmptyCategory,
    Exhausted,
    Failed,
    Card(SpotCard),
}

impl SwipeBody {
    /// Text shown in place of a card.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            SwipeBody::Loading => Some(messages::LOADING_SWIPE),
            SwipeBody::EmptyCollection => Some(messages::NO_SPOTS_YET),
            SwipeBody::EmptyCategory => Some(messages::NO_SPOTS_FOR_CATEGORY),
            SwipeBody::Exhausted => Some(messages::ALL_SPOTS_SEEN),
            SwipeBody::Failed => Some(messages::LOAD_SWIPE_FAILED),
            SwipeBody::Card(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwipeView {
    pub filter: CategoryFilter,
    pub body: SwipeBody,
    pub indicator: String,
    pub stats_text: String,
    pub controls_enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toast {
    pub action: SwipeAction,
    pub icon: &'static str,
    pub message: &'static str,
}

impl Toast {
    pub fn for_action(action: SwipeAction) -> Self {
        let (icon, message) = match action {
            SwipeAction::Like => ("ri-heart-3-fill", messages::TOAST_LIKE),
            SwipeAction::Bookmark => ("ri-bookmark-line", messages::TOAST_BOOKMARK),
            SwipeAction::Skip => ("ri-close-line", messages::TOAST_SKIP),
        };
        Self {
            action,
            icon,
            message,
        }
    }
}

pub struct SwipePage<C: DocumentCollection, S: KeyValueStore> {
    sync: CollectionSync<C>,
    log: SwipeLog<S>,
    filter: CategoryFilter,
    cursor: SwipeCursor,
    fallback_image_url: String,
}

impl<C: DocumentCollection, S: KeyValueStore> SwipePage<C, S> {
    pub fn new(
        collection: Arc<C>,
        collection_name: impl Into<String>,
        log: SwipeLog<S>,
        fallback_image_url: impl Into<String>,
    ) -> Self {
        Self {
            sync: CollectionSync::new(collection, collection_name),
            log,
            filter: CategoryFilter::All,
            cursor: SwipeCursor::default(),
            fallback_image_url: fallback_image_url.into(),
        }
    }

    pub async fn start(&mut self) {
        self.sync.start().await;
    }

    pub fn stop(&mut self) {
        self.sync.stop();
    }

    pub fn pump(&mut self) -> usize {
        self.sync.pump()
    }

    pub async fn next(&mut self) -> bool {
        self.sync.next().await
    }

    pub fn sync(&self) -> &CollectionSync<C> {
        &self.sync
    }

    pub fn log(&self) -> &SwipeLog<S> {
        &self.log
    }

    pub fn cursor(&self) -> usize {
        self.cursor.index()
    }

    pub fn select_category(&mut self, filter: CategoryFilter) {
        self.filter = filter;
        self.cursor.reset();
    }

    pub fn select_chip(&mut self, raw: &str) -> Result<(), UnknownFilter> {
        let filter = raw.parse()?;
        self.select_category(filter);
        Ok(())
    }

    pub fn reset_category(&mut self) {
        self.select_category(CategoryFilter::All);
    }

    /// Applies a swipe action to the current card. `None` when there is no card to act on.
    pub fn act(&mut self, action: SwipeAction) -> Option<Toast> {
        if self.sync.is_failed() {
            return None;
        }
        let spot_id = match self.position() {
            SwipePosition::Current { spot, .. } => spot.id.clone(),
            _ => return None,
        };

        if let Err(err) = self.log.record(&spot_id, action) {
            tracing::error!(spot_id = %spot_id, ?action, error = %err, "could not persist swipe");
        }
        self.cursor.advance();
        Some(Toast::for_action(action))
    }

    /// Arrow keys act on the current card; every other key is ignored.
    pub fn handle_key(&mut self, key: &str) -> Option<Toast> {
        SwipeAction::from_key(key).and_then(|action| self.act(action))
    }

    pub fn view(&self) -> SwipeView {
        let stats = self.log.stats();
        let stats_text = messages::swipe_stats(stats.like_count, stats.bookmark_count);
        let position = self.position();

        let (total, index) = match position {
            SwipePosition::Empty => (0, 0),
            SwipePosition::Exhausted { total } => (total, total),
            SwipePosition::Current { index, total, .. } => (total, index + 1),
        };
        let indicator = messages::swipe_indicator(index, total);

        let body = match position {
            _ if self.sync.is_failed() => SwipeBody::Failed,
            _ if !self.sync.is_loaded() => SwipeBody::Loading,
            SwipePosition::Empty if self.sync.spots().is_empty() => SwipeBody::EmptyCollection,
            SwipePosition::Empty => SwipeBody::EmptyCategory,
            SwipePosition::Exhausted { .. } => SwipeBody::Exhausted,
            SwipePosition::Current { spot, .. } => {
                SwipeBody::Card(SpotCard::new(spot, &self.fallback_image_url))
            }
        };

        SwipeView {
            filter: self.filter.clone(),
            controls_enabled: matches!(body, SwipeBody::Card(_)),
            body,
            indicator,
            stats_text,
        }
    }

    fn position(&self) -> SwipePosition<'_> {
        project(self.sync.spots(), &self.filter, Some(self.cursor.index()))
            .position()
            .unwrap_or(SwipePosition::Empty)
    }
}
