//! # rakshak-detect
//!
//! The static scam-category table and the local keyword engine.
//!
//! The rulebook is read-only: parsed once from the bundled TOML at startup
//! and never mutated. The engine is a linear scan over it — deliberately
//! simple, it exists to answer even when every external service is down.

pub mod engine;
pub mod rules;
pub mod urls;

pub use engine::{is_emergency, scan, Detection};
pub use rules::{Rulebook, ScamRule};
