use serde::{Deserialize, Serialize};
use std::fmt;

/// Spot category as stored remotely. Matching is exact and case-sensitive;
/// anything outside the fixed set is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Makanan,
    Kafe,
    Belajar,
    Hiburan,
    Other(String),
}

impl Category {
    pub const KNOWN: [Category; 4] = [
        Category::Makanan,
        Category::Kafe,
        Category::Belajar,
        Category::Hiburan,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Category::Makanan => "Makanan",
            Category::Kafe => "Kafe",
            Category::Belajar => "Belajar",
            Category::Hiburan => "Hiburan",
            Category::Other(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Other(_))
    }

    /// Remix icon class for the category chip.
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Makanan => "ri-restaurant-2-line",
            Category::Kafe => "ri-cup-line",
            Category::Belajar => "ri-book-open-line",
            Category::Hiburan => "ri-gamepad-line",
            Category::Other(_) => FALLBACK_ICON,
        }
    }
}

pub const FALLBACK_ICON: &str = "ri-map-pin-line";

/// Icon for an optional category; missing and unrecognized share the fallback.
pub fn category_icon(category: Option<&Category>) -> &'static str {
    category.map_or(FALLBACK_ICON, Category::icon)
}

impl From<String> for Category {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Makanan" => Category::Makanan,
            "Kafe" => Category::Kafe,
            "Belajar" => Category::Belajar,
            "Hiburan" => Category::Hiburan,
            _ => Category::Other(raw),
        }
    }
}

impl From<&str> for Category {
    fn from(raw: &str) -> Self {
        Category::from(raw.to_string())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod category_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Makanan", Category::Makanan)]
    #[case("Kafe", Category::Kafe)]
    #[case("Belajar", Category::Belajar)]
    #[case("Hiburan", Category::Hiburan)]
    fn it_should_parse_the_known_categories(#[case] raw: &str, #[case] expected: Category) {
        assert_eq!(Category::from(raw), expected);
        assert!(expected.is_known());
        assert_eq!(expected.as_str(), raw);
    }

    #[rstest]
    fn it_should_keep_unrecognized_values_verbatim() {
        let category = Category::from("makanan");
        assert_eq!(category, Category::Other("makanan".to_string()));
        assert!(!category.is_known());
        assert_eq!(category.to_string(), "makanan");
    }

    #[rstest]
    fn it_should_fall_back_to_the_map_pin_icon() {
        assert_eq!(category_icon(None), "ri-map-pin-line");
        assert_eq!(category_icon(Some(&Category::from("Olahraga"))), "ri-map-pin-line");
        assert_eq!(category_icon(Some(&Category::Kafe)), "ri-cup-line");
    }

    #[rstest]
    fn it_should_serialize_as_a_plain_string() {
        let json = serde_json::to_value(Category::Hiburan).unwrap();
        assert_eq!(json, serde_json::json!("Hiburan"));
        let back: Category = serde_json::from_value(serde_json::json!("Belajar")).unwrap();
        assert_eq!(back, Category::Belajar);
    }
}
