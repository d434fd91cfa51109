//! Core data structures for fcm-gen.
//!
//! This module contains the merged model the generator builds up:
//! - Versions and interfaces of a HAL
//! - Entries, one per HAL package
//! - The registry of all entries for a run

pub mod entry;
pub mod interface;
pub mod registry;
pub mod version;

pub use entry::{HalEntry, HalFormat};
pub use interface::{HalInterface, DEFAULT_INSTANCE};
pub use registry::HalRegistry;
pub use version::HalVersion;
