// Builder for admin form input, seeded from a JSON fixture.

use crate::core::spot::draft::SpotForm;
use serde::Deserialize;
use std::fs;

// JSON -> DTO (the form as typed)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotFormDto {
    pub name: String,
    pub category: String,
    pub distance: String,
    pub short_description: String,
    pub full_description: String,
    pub image_url: String,
    pub location_text: String,
    pub is_featured: bool,
}

pub struct SpotFormBuilder {
    inner: SpotForm,
}

impl Default for SpotFormBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl SpotFormBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/test_support/fixtures/json/spot_form.json").unwrap();
        let dto: SpotFormDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: SpotForm {
                name: dto.name,
                category: dto.category,
                distance: dto.distance,
                short_description: dto.short_description,
                full_description: dto.full_description,
                image_url: dto.image_url,
                location_text: dto.location_text,
                is_featured: dto.is_featured,
            },
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn category(mut self, v: impl Into<String>) -> Self {
        self.inner.category = v.into();
        self
    }

    pub fn distance(mut self, v: impl Into<String>) -> Self {
        self.inner.distance = v.into();
        self
    }

    pub fn full_description(mut self, v: impl Into<String>) -> Self {
        self.inner.full_description = v.into();
        self
    }

    pub fn image_url(mut self, v: impl Into<String>) -> Self {
        self.inner.image_url = v.into();
        self
    }

    pub fn is_featured(mut self, v: bool) -> Self {
        self.inner.is_featured = v;
        self
    }

    pub fn build(self) -> SpotForm {
        self.inner
    }
}
