//! Domain layer - entities
//!
//! This module contains the domain types of the wallet system.

pub mod entities;

// Re-export domain components
pub use entities::*;
