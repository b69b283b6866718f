//! Infrastructure layer - platform-specific implementations
//!
//! This module contains the storage backends and environment configuration
//! the token registry runs on.

pub mod config;
pub mod platform;

// Re-export infrastructure components
pub use config::*;
pub use platform::*;
