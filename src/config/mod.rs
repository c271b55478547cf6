//! Configuration module for tdbudget
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence (`conf.json`)

pub mod paths;
pub mod settings;

pub use paths::BudgetPaths;
pub use settings::Settings;
