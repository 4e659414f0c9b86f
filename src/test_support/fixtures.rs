// Shared test fixtures. Compiled only for tests via `src/lib.rs`.

pub mod collections;
pub mod documents;
pub mod forms;
pub mod spots;
