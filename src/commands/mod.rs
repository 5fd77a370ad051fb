//! Tauri IPC commands
//!
//! Exposes Rust functionality to the frontend via Tauri's IPC system.

mod analytics;
mod animal;
mod growth;
mod husbandry;
mod transfer;

pub use analytics::*;
pub use animal::*;
pub use growth::*;
pub use husbandry::*;
pub use transfer::*;
