// Spot domain components.
//
// Structure
// - category.rs: the fixed category set plus the unrecognized fallback
// - model.rs: the remote entity decoded leniently from a document
// - draft.rs: the admin form, its validation and the write payload

pub mod category;
pub mod draft;
pub mod model;
