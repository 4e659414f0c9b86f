// Spot as the pages see it after decoding a remote document.
//
// Purpose
// - Give every optional field one documented default that every renderer uses.
//
// Responsibilities
// - Decode leniently: a field with the wrong JSON type counts as missing, a document never fails to decode.
// - Timestamps are epoch milliseconds assigned by the document store.

use crate::core::ports::Document;
use crate::core::spot::category::Category;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub const FALLBACK_IMAGE_URL: &str =
    "https://images.pexels.com/photos/3808904/pexels-photo-3808904.jpeg?auto=compress&cs=tinysrgb&w=1200";

const MISSING: &str = "-";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spot {
    #[serde(skip)]
    pub id: String,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub category: Option<Category>,
    #[serde(default, deserialize_with = "lenient_distance")]
    pub distance: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub short_description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub full_description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub location_text: Option<String>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub is_featured: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub created_at: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub updated_at: Option<i64>,
}

impl Spot {
    pub fn from_document(document: Document) -> Spot {
        let Document { id, data } = document;
        let mut spot = match serde_json::from_value::<Spot>(Value::Object(data)) {
            Ok(spot) => spot,
            Err(err) => {
                tracing::warn!(%id, error = %err, "undecodable spot document, using defaults");
                Spot::default()
            }
        };
        spot.id = id;
        spot
    }

    pub fn display_name(&self) -> &str {
        non_blank(self.name.as_deref()).unwrap_or(MISSING)
    }

    /// Image alt text: the name, or empty.
    pub fn alt_text(&self) -> &str {
        non_blank(self.name.as_deref()).unwrap_or("")
    }

    pub fn category_label(&self) -> &str {
        self.category
            .as_ref()
            .map(Category::as_str)
            .and_then(|label| non_blank(Some(label)))
            .unwrap_or(MISSING)
    }

    pub fn short_description(&self) -> &str {
        self.short_description.as_deref().unwrap_or("")
    }

    pub fn full_description(&self) -> &str {
        self.full_description.as_deref().unwrap_or("")
    }

    pub fn location_text(&self) -> &str {
        self.location_text.as_deref().unwrap_or("")
    }

    pub fn image_url_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        non_blank(self.image_url.as_deref()).unwrap_or(fallback)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let flag: Option<bool> = lenient(deserializer)?;
    Ok(flag.unwrap_or(false))
}

// Numbers only. Distances are whole meters, so a fractional value is rounded here,
// before formatting: 999.6 becomes 1000 and shows as `1.0 km`, not `999.6 m`.
// Negatives and NaN count as missing.
fn lenient_distance<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .as_f64()
        .filter(|meters| meters.is_finite() && *meters >= 0.0)
        .map(|meters| meters.round().min(u32::MAX as f64) as u32))
}
