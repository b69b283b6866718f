//! Domain entities and value objects
//!
//! This module contains the core domain entities and value objects
//! that represent the business concepts in the wallet system.

pub mod token;

// Re-export entities
pub use token::*;
