//! # rakshak-core
//!
//! Core types, traits, configuration, and error handling for the Rakshak bot.

pub mod config;
pub mod error;
pub mod message;
pub mod report;
pub mod sanitize;
pub mod traits;

pub use config::shellexpand;
