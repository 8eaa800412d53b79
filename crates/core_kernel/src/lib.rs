//! Core Kernel - Foundational value types for the inheritance engine
//!
//! This crate provides the building blocks shared by the domain and interface crates:
//! - Money in Rupiah with precise decimal arithmetic
//! - Exact rational fractions for legal shares (1/2, 2/3, 3/13, ...)
//! - Strongly-typed identifiers
//! - Rupiah and percentage formatting in the `id-ID` style

pub mod money;
pub mod fraction;
pub mod format;
pub mod identifiers;
pub mod error;

pub use money::{Money, MoneyError};
pub use fraction::{Fraction, FractionError};
pub use format::{format_currency, format_percentage};
pub use identifiers::{HeirId, CaseId};
pub use error::CoreError;
