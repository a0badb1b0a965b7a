// Move-list ingestion, position resolution, and manifest export.
pub mod export;
pub mod resolve;
pub mod san;
pub mod tree;

// Re-exports for the common pipeline path
pub use resolve::{resolve, resolve_parallel, PositionMap};
pub use tree::MoveTree;
