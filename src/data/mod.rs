// mod.rs - Data structures module

pub mod record;

// Re-export main types for convenience
pub use record::{clean_sequence, SequenceCollection, SequenceRecord};
