// Composition support for the kampuspot binary.
//
// Responsibilities
// - Read config from the environment.
// - Install logging.
// - Render page views as text.

pub mod config;
pub mod logging;
pub mod text_renderer;
