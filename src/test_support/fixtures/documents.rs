// Builder for remote spot documents, seeded from a JSON fixture.

use crate::core::ports::{Document, Fields};
use serde::Deserialize;
use serde_json::Value;
use std::fs;

#[derive(Debug, Clone, Deserialize)]
pub struct SpotDocumentDto {
    pub id: String,
    pub data: Fields,
}

pub struct SpotDocumentBuilder {
    inner: Document,
}

impl Default for SpotDocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl SpotDocumentBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/test_support/fixtures/json/spot_document.json").unwrap();
        let dto: SpotDocumentDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: Document {
                id: dto.id,
                data: dto.data,
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn name(self, v: &str) -> Self {
        self.field("name", Value::from(v))
    }

    pub fn category(self, v: &str) -> Self {
        self.field("category", Value::from(v))
    }

    pub fn distance(self, v: u32) -> Self {
        self.field("distance", Value::from(v))
    }

    pub fn featured(self, v: bool) -> Self {
        self.field("isFeatured", Value::from(v))
    }

    pub fn created_at(self, v: i64) -> Self {
        self.field("createdAt", Value::from(v))
    }

    pub fn field(mut self, key: &str, v: Value) -> Self {
        self.inner.data.insert(key.to_string(), v);
        self
    }

    pub fn without(mut self, key: &str) -> Self {
        self.inner.data.remove(key);
        self
    }

    pub fn build(self) -> Document {
        self.inner
    }
}
