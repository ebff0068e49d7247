//! Configuration module for budget-setup
//!
//! - Platform path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SetupPaths;
pub use settings::{FlashSettings, Settings};
