//! Shared test fixtures for Podium crates.
//!
//! This crate provides contests and configurations for testing.
//! It does NOT depend on `podium-solver` to avoid circular dependencies.
//!
//! - [`scenarios`] - small hand-built contests with known outcomes
//! - [`random`] - reproducible generated contests
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! podium-test = { workspace = true }
//! ```

pub mod random;
pub mod scenarios;

pub use random::{random_contest, ContestShape};
pub use scenarios::Scenario;
