// Admin form input and its validation.
//
// Purpose
// - Turn raw form values into a write payload, or reject them before any remote call.
//
// Responsibilities
// - Required: name, category, distance (a non-negative number), image URL.
// - Blank full description is written as null.
// - Never perform input or output.

use crate::core::ports::Fields;
use crate::core::spot::category::Category;
use crate::core::spot::model::Spot;
use serde::Serialize;
use thiserror::Error;

/// Raw values as typed into the admin form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpotForm {
    pub name: String,
    pub category: String,
    pub distance: String,
    pub short_description: String,
    pub full_description: String,
    pub image_url: String,
    pub location_text: String,
    pub is_featured: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Name,
    Category,
    Distance,
    ImageUrl,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Nama, kategori, jarak, dan URL gambar wajib diisi.")]
pub struct FormError {
    pub missing: Vec<RequiredField>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotDraft {
    pub name: String,
    pub category: Category,
    pub distance: u32,
    pub short_description: String,
    pub full_description: Option<String>,
    pub image_url: String,
    pub location_text: String,
    pub is_featured: bool,
}

impl SpotForm {
    /// Prefill for edit mode.
    pub fn from_spot(spot: &Spot) -> Self {
        Self {
            name: spot.name.clone().unwrap_or_default(),
            category: spot
                .category
                .as_ref()
                .map(|c| c.as_str().to_string())
                .unwrap_or_default(),
            distance: spot.distance.map(|d| d.to_string()).unwrap_or_default(),
            short_description: spot.short_description().to_string(),
            full_description: spot.full_description().to_string(),
            image_url: spot.image_url.clone().unwrap_or_default(),
            location_text: spot.location_text().to_string(),
            is_featured: spot.is_featured,
        }
    }

    pub fn validate(&self) -> Result<SpotDraft, FormError> {
        let name = self.name.trim();
        let image_url = self.image_url.trim();
        let distance = parse_distance(&self.distance);

        let mut missing = Vec::new();
        if name.is_empty() {
            missing.push(RequiredField::Name);
        }
        if self.category.is_empty() {
            missing.push(RequiredField::Category);
        }
        if distance.is_none() {
            missing.push(RequiredField::Distance);
        }
        if image_url.is_empty() {
            missing.push(RequiredField::ImageUrl);
        }

        match distance {
            Some(distance) if missing.is_empty() => {
                let full_description = self.full_description.trim();
                Ok(SpotDraft {
                    name: name.to_string(),
                    category: Category::from(self.category.as_str()),
                    distance,
                    short_description: self.short_description.trim().to_string(),
                    full_description: (!full_description.is_empty())
                        .then(|| full_description.to_string()),
                    image_url: image_url.to_string(),
                    location_text: self.location_text.trim().to_string(),
                    is_featured: self.is_featured,
                })
            }
            _ => Err(FormError { missing }),
        }
    }
}

fn parse_distance(raw: &str) -> Option<u32> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|meters| meters.is_finite() && *meters >= 0.0)
        .map(|meters| meters.round().min(u32::MAX as f64) as u32)
}

impl SpotDraft {
    /// Document fields for create and update. Timestamps are left to the store.
    pub fn to_fields(&self) -> Fields {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(fields)) => fields,
            // A struct of strings, numbers and bools always serializes to an object.
            _ => Fields::new(),
        }
    }
}

#[cfg(test)]
mod spot_draft_tests {
    use super::*;
    use crate::test_support::fixtures::forms::SpotFormBuilder;
    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn valid_form() -> SpotForm {
        SpotFormBuilder::new().build()
    }

    #[rstest]
    fn it_should_accept_a_complete_form(valid_form: SpotForm) {
        let draft = valid_form.validate().expect("form should be valid");
        assert_eq!(draft.name, "Kopi Kenangan Kampus");
        assert_eq!(draft.category, Category::Kafe);
        assert_eq!(draft.distance, 1200);
        assert_eq!(draft.full_description, None);
    }

    #[rstest]
    fn it_should_report_every_missing_required_field() {
        let result = SpotForm::default().validate();
        assert_eq!(
            result,
            Err(FormError {
                missing: vec![
                    RequiredField::Name,
                    RequiredField::Category,
                    RequiredField::Distance,
                    RequiredField::ImageUrl,
                ]
            })
        );
    }

    #[rstest]
    #[case("abc")]
    #[case("-10")]
    #[case("NaN")]
    #[case("   ")]
    fn it_should_reject_a_distance_that_is_not_a_number(#[case] distance: &str) {
        let form = SpotFormBuilder::new().distance(distance).build();
        let err = form.validate().unwrap_err();
        assert_eq!(err.missing, vec![RequiredField::Distance]);
    }

    #[rstest]
    fn it_should_trim_inputs_and_round_distance() {
        let form = SpotFormBuilder::new()
            .name("  Perpus Pusat ")
            .distance(" 249.6 ")
            .full_description("  Buka 24 jam  ")
            .build();
        let draft = form.validate().unwrap();
        assert_eq!(draft.name, "Perpus Pusat");
        assert_eq!(draft.distance, 250);
        assert_eq!(draft.full_description.as_deref(), Some("Buka 24 jam"));
    }

    #[rstest]
    fn it_should_write_camel_case_fields_without_timestamps(valid_form: SpotForm) {
        let fields = valid_form.validate().unwrap().to_fields();
        assert_eq!(fields.get("name"), Some(&json!("Kopi Kenangan Kampus")));
        assert_eq!(fields.get("category"), Some(&json!("Kafe")));
        assert_eq!(fields.get("distance"), Some(&json!(1200)));
        assert_eq!(fields.get("fullDescription"), Some(&json!(null)));
        assert_eq!(fields.get("isFeatured"), Some(&json!(false)));
        assert!(!fields.contains_key("createdAt"));
        assert!(!fields.contains_key("updatedAt"));
    }

    #[rstest]
    fn it_should_prefill_from_an_existing_spot() {
        let spot = Spot {
            id: "spot-9".to_string(),
            name: Some("Taman Baca".to_string()),
            category: Some(Category::Belajar),
            distance: Some(80),
            is_featured: true,
            ..Spot::default()
        };
        let form = SpotForm::from_spot(&spot);
        assert_eq!(form.name, "Taman Baca");
        assert_eq!(form.category, "Belajar");
        assert_eq!(form.distance, "80");
        assert!(form.is_featured);
        assert_eq!(form.image_url, "");
    }
}
