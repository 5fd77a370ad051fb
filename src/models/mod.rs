//! ViviLog data models
//!
//! This module defines the core data structures for animals and their
//! husbandry records (weight, shedding, feeding, breeding).

pub mod animal;
pub mod growth;
pub mod husbandry;

pub use animal::*;
pub use growth::*;
pub use husbandry::*;
