// lib.rs - uniqsub library root

//! # uniqsub - Minimal unique substring finder for sequence collections
//!
//! This library identifies, for each sequence in a small collection, the
//! substrings that occur only in that sequence and nowhere else in the
//! collection, reduces each result to a minimal covering set, and renders
//! each minimal substring aligned to its first occurrence in the original
//! sequence.
//!
//! ## Pipeline
//!
//! 1. **Universe construction**: every distinct contiguous substring of each
//!    cleaned sequence
//! 2. **Uniqueness**: per record, subtract the union of all other universes
//! 3. **Minimization**: drop every member containing a shorter member
//! 4. **Rendering**: dot-padded alignment blocks, or a JSON report
//!
//! ## Basic Usage
//!
//! ```rust
//! use uniqsub::prelude::*;
//!
//! let records = vec![
//!     SequenceRecord::new(0, "seq1".to_string(), "AAA".to_string()),
//!     SequenceRecord::new(1, "seq2".to_string(), "AAT".to_string()),
//! ];
//!
//! let universes = build_universes(&records);
//! let uniques = unique_sets(&universes);
//! let minimals = minimize_all(&uniques);
//!
//! // "T" is the only minimal unique substring of seq2
//! assert!(minimals[1].contains("T"));
//! ```

// Re-export all main modules
pub mod cli;
pub mod core;
pub mod data;
pub mod output;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_args, Args, ValidationResult};
    pub use crate::core::{build_universes, minimize, minimize_all, substring_universe, unique_sets};
    pub use crate::data::{clean_sequence, SequenceCollection, SequenceRecord};
    pub use crate::output::{render_block, write_report};
}

// Re-export main types at the root level for convenience
pub use cli::{Args, ValidationResult};
pub use data::{SequenceCollection, SequenceRecord};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!(
        "uniqsub v{} - Minimal unique substring finder for sequence collections",
        VERSION
    )
}
