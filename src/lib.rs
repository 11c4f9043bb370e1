//! Algomatch - maps free-text questions onto a catalog of algorithms.
//!
//! The matcher scores every catalog entry against a keyword index using name
//! containment, keyword containment and a coarse fuzzy fallback, and detects
//! when a question asks to compare two algorithms.

pub mod types;
pub mod catalog;
pub mod builtin;
pub mod intent;
pub mod fuzzy;
pub mod scoring;
pub mod config;
pub mod matcher;
#[cfg(feature = "fuzzy")]
pub mod tokenizer;

pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::types::*;
    pub use crate::catalog::*;
    pub use crate::intent::*;
    pub use crate::fuzzy::*;
    pub use crate::scoring::*;
    pub use crate::config::*;
    pub use crate::matcher::*;
}
