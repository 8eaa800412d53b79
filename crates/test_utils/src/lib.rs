//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! inheritance engine test suite.
//!
//! # Modules
//!
//! - `fixtures`: Textbook inheritance cases with known answers
//! - `builders`: Builder patterns for test case construction
//! - `assertions`: Custom assertion helpers for calculation results
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
