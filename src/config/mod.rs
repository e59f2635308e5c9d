//! Configuration module for fintrack
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::FinancePaths;
pub use settings::Settings;
