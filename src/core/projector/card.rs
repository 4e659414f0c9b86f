// Display-ready records handed to renderers.
//
// Purpose
// - Resolve every optional Spot field to its documented default in one place, so the explore
//   grid, the swipe card, the admin table and the detail view all show the same thing.

use crate::core::projector::format::format_distance;
use crate::core::spot::category::category_icon;
use crate::core::spot::model::Spot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotCard {
    pub id: String,
    pub name: String,
    pub alt_text: String,
    pub category_label: String,
    pub category_icon: &'static str,
    pub distance: String,
    pub short_description: String,
    pub location_text: String,
    pub image_url: String,
    pub is_featured: bool,
}

impl SpotCard {
    pub fn new(spot: &Spot, fallback_image_url: &str) -> Self {
        Self {
            id: spot.id.clone(),
            name: spot.display_name().to_string(),
            alt_text: spot.alt_text().to_string(),
            category_label: spot.category_label().to_string(),
            category_icon: category_icon(spot.category.as_ref()),
            distance: format_distance(spot.distance),
            short_description: spot.short_description().to_string(),
            location_text: spot.location_text().to_string(),
            image_url: spot.image_url_or(fallback_image_url).to_string(),
            is_featured: spot.is_featured,
        }
    }
}

/// Content of the detail modal on the explore page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotDetail {
    pub card: SpotCard,
    /// Distance phrased relative to campus, e.g. `750 m dari kampus`.
    pub distance_from_campus: String,
    /// Location line; `-` when missing.
    pub location: String,
    pub full_description: String,
}

impl SpotDetail {
    pub fn new(spot: &Spot, fallback_image_url: &str) -> Self {
        let card = SpotCard::new(spot, fallback_image_url);
        let location = match spot.location_text() {
            "" => "-".to_string(),
            text => text.to_string(),
        };
        Self {
            distance_from_campus: format!("{} dari kampus", card.distance),
            location,
            full_description: spot.full_description().to_string(),
            card,
        }
    }
}

#[cfg(test)]
mod spot_card_tests {
    use super::*;
    use crate::core::ports::Document;
    use crate::test_support::fixtures::documents::SpotDocumentBuilder;
    use rstest::rstest;

    #[rstest]
    fn it_should_resolve_display_fields() {
        let spot = Spot::from_document(SpotDocumentBuilder::new().distance(1500).build());
        let card = SpotCard::new(&spot, "fallback.jpg");
        assert_eq!(card.name, "Warung Bu Sri");
        assert_eq!(card.category_label, "Makanan");
        assert_eq!(card.category_icon, "ri-restaurant-2-line");
        assert_eq!(card.distance, "1.5 km");
        assert_ne!(card.image_url, "fallback.jpg");
    }

    #[rstest]
    fn it_should_use_the_defaults_for_an_empty_document() {
        let spot = Spot::from_document(Document {
            id: "spot-x".to_string(),
            data: Default::default(),
        });
        let card = SpotCard::new(&spot, "fallback.jpg");
        assert_eq!(card.id, "spot-x");
        assert_eq!(card.name, "-");
        assert_eq!(card.alt_text, "");
        assert_eq!(card.category_label, "-");
        assert_eq!(card.category_icon, "ri-map-pin-line");
        assert_eq!(card.distance, "-");
        assert_eq!(card.image_url, "fallback.jpg");

        let detail = SpotDetail::new(&spot, "fallback.jpg");
        assert_eq!(detail.distance_from_campus, "- dari kampus");
        assert_eq!(detail.location, "-");
        assert_eq!(detail.full_description, "");
    }
}
