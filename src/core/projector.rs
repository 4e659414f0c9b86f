// View-state projection shared by every page.
//
// Structure
// - filter.rs: category filter and the featured subset
// - format.rs: display derivations (distance)
// - view_state.rs: the pure (snapshot, filter, cursor) -> ViewState function
// - card.rs: display-ready records handed to renderers

pub mod card;
pub mod filter;
pub mod format;
pub mod view_state;
