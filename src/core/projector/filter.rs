use crate::core::spot::category::Category;
use crate::core::spot::model::Spot;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown category filter: {0}")]
pub struct UnknownFilter(pub String);

impl CategoryFilter {
    /// Exact match. Spots without a category, or with an unrecognized one,
    /// only pass `All`.
    pub fn matches(&self, spot: &Spot) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => spot.category.as_ref() == Some(category),
        }
    }
}

/// Parses the `data-category` value of a chip: `All` or one of the fixed categories.
impl FromStr for CategoryFilter {
    type Err = UnknownFilter;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw == "All" {
            return Ok(CategoryFilter::All);
        }
        Category::KNOWN
            .into_iter()
            .find(|category| category.as_str() == raw)
            .map(CategoryFilter::Only)
            .ok_or_else(|| UnknownFilter(raw.to_string()))
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All"),
            CategoryFilter::Only(category) => f.write_str(category.as_str()),
        }
    }
}

/// Filtered subset in snapshot order.
pub fn visible<'a>(snapshot: &'a [Spot], filter: &CategoryFilter) -> Vec<&'a Spot> {
    snapshot.iter().filter(|spot| filter.matches(spot)).collect()
}

/// Featured spots under the same filter, in snapshot order.
pub fn featured<'a>(snapshot: &'a [Spot], filter: &CategoryFilter) -> Vec<&'a Spot> {
    snapshot
        .iter()
        .filter(|spot| spot.is_featured && filter.matches(spot))
        .collect()
}
