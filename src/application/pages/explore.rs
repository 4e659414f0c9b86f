// Explore page: featured picks, the full list under a category filter, and a detail view.
//
// Responsibilities
// - Show loading placeholders until the first snapshot arrives.
// - Recompute both sections from the current snapshot and filter on every view.
// - The detail view keeps the spot it was opened with, even if a later push removes it.

use crate::application::sync::collection_sync::CollectionSync;
use crate::core::messages;
use crate::core::ports::DocumentCollection;
use crate::core::projector::card::{SpotCard, SpotDetail};
use crate::core::projector::filter::{self, CategoryFilter, UnknownFilter};
use crate::core::spot::model::Spot;
use std::sync::Arc;

/// What one section of the page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    Placeholder(&'static str),
    Cards(Vec<SpotCard>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExploreView {
    pub filter: CategoryFilter,
    pub featured: Section,
    pub list: Section,
    pub count_text: String,
    pub show_empty_state: bool,
    pub detail: Option<SpotDetail>,
}

pub struct ExplorePage<C: DocumentCollection> {
    sync: CollectionSync<C>,
    filter: CategoryFilter,
    detail: Option<Spot>,
    fallback_image_url: String,
}

impl<C: DocumentCollection> ExplorePage<C> {
    pub fn new(
        collection: Arc<C>,
        collection_name: impl Into<String>,
        fallback_image_url: impl Into<String>,
    ) -> Self {
        Self {
            sync: CollectionSync::new(collection, collection_name),
            filter: CategoryFilter::All,
            detail: None,
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

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn select_category(&mut self, filter: CategoryFilter) {
        self.filter = filter;
    }

    /// Chip click with its `data-category` value.
    pub fn select_chip(&mut self, raw: &str) -> Result<(), UnknownFilter> {
        self.filter = raw.parse()?;
        Ok(())
    }

    /// Opens the detail view for a spot of the current snapshot. `false` if the id is unknown.
    pub fn open_detail(&mut self, id: &str) -> bool {
        match self.sync.find(id) {
            Some(spot) => {
                self.detail = Some(spot.clone());
                true
            }
            None => false,
        }
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    /// Escape closes the detail view when it is open.
    pub fn handle_key(&mut self, key: &str) {
        if key == "Escape" {
            self.close_detail();
        }
    }

    pub fn view(&self) -> ExploreView {
        let detail = self
            .detail
            .as_ref()
            .map(|spot| SpotDetail::new(spot, &self.fallback_image_url));

        if !self.sync.is_loaded() {
            let (featured, list) = match self.sync.is_failed() {
                true => (messages::LOAD_FEATURED_FAILED, messages::LOAD_SPOTS_FAILED),
                false => (messages::LOADING_FEATURED, messages::LOADING_SPOTS),
            };
            return ExploreView {
                filter: self.filter.clone(),
                featured: Section::Placeholder(featured),
                list: Section::Placeholder(list),
                count_text: list.to_string(),
                show_empty_state: false,
                detail,
            };
        }

        let spots = self.sync.spots();
        let featured = filter::featured(spots, &self.filter);
        let visible = filter::visible(spots, &self.filter);

        let featured = match (self.sync.is_failed(), featured.is_empty()) {
            (true, _) => Section::Placeholder(messages::LOAD_FEATURED_FAILED),
            (false, true) => Section::Placeholder(messages::NO_FEATURED_FOR_CATEGORY),
            (false, false) => Section::Cards(self.cards(&featured)),
        };
        let category = match &self.filter {
            CategoryFilter::All => None,
            CategoryFilter::Only(category) => Some(category.as_str()),
        };
        let count_text = match self.sync.is_failed() {
            true => messages::LOAD_SPOTS_FAILED.to_string(),
            false => messages::showing_spots(visible.len(), category),
        };

        // The list keeps the last good snapshot after a failure.
        ExploreView {
            filter: self.filter.clone(),
            featured,
            count_text,
            show_empty_state: visible.is_empty(),
            list: Section::Cards(self.cards(&visible)),
            detail,
        }
    }

    fn cards(&self, spots: &[&Spot]) -> Vec<SpotCard> {
        spots
            .iter()
            .map(|spot| SpotCard::new(spot, &self.fallback_image_url))
            .collect()
    }
}
