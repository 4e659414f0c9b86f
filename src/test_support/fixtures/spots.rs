use crate::core::spot::category::Category;
use crate::core::spot::model::Spot;

/// Minimal decoded spot for projector tests.
pub fn make_spot(id: &str, category: Option<&str>, is_featured: bool) -> Spot {
    Spot {
        id: id.to_string(),
        name: Some(format!("Spot {id}")),
        category: category.map(Category::from),
        distance: Some(500),
        is_featured,
        ..Spot::default()
    }
}
