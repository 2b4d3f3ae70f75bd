// mod.rs - Core logic module

pub mod minimize;
pub mod unique;
pub mod universe;

// Re-export main operations for convenience
pub use minimize::{minimize, minimize_all};
pub use unique::unique_sets;
pub use universe::{build_universes, substring_universe};
