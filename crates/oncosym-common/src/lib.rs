//! oncosym-common: Shared types, errors, and the sex-constraint filter used
//! across all Oncosym crates.

pub mod error;
pub mod sex;
pub mod taxonomy;
pub mod filter;

// Re-export commonly used types
pub use error::{OncosymError, Result};
pub use sex::Sex;
pub use taxonomy::{CancerProfile, SexGroup, SymptomTaxonomy};
pub use filter::{apply_sex_constraints, rank_descending};
