//! Inheritance Distribution Domain
//!
//! This crate computes how a deceased person's estate is divided among the
//! heirs under Indonesian inheritance law, either Islamic law (Faraid) or the
//! Civil Code (KUHPerdata).
//!
//! # Key Concepts
//!
//! - **Dzawil Furudh**: heirs with a fixed fractional share (1/2, 1/4, 1/8, 2/3, 1/3, 1/6)
//! - **Asabah**: residuary heirs who take what is left after the fixed shares
//! - **Aul**: proportional reduction when fixed shares exceed the estate
//! - **Radd**: return of a leftover to the fixed-share heirs (never the spouse)
//! - **Golongan I-IV**: the civil-law heir classes; only the highest present class inherits
//! - **Wasiat**: bequest to non-heirs, limited to 1/3 under Islamic law
//!
//! # Flow
//!
//! A caller assembles an [`InheritanceInput`], checks it with [`validate_input`],
//! then calls [`calculate_inheritance`]. The engine is a pure function of its
//! input and holds no state between calls.
//!
//! ```rust
//! use core_kernel::Money;
//! use domain_inheritance::{
//!     calculate_inheritance, DeceasedInfo, Gender, Heir, HeirRelation,
//!     InheritanceInput, LawSystem, MaritalStatus,
//! };
//!
//! let input = InheritanceInput::new(
//!     DeceasedInfo::new("Ahmad", Gender::Male, MaritalStatus::Married),
//!     LawSystem::Perdata,
//!     Money::from_rupiah(900_000_000),
//! )
//! .with_heir(Heir::new(HeirRelation::Spouse))
//! .with_heir(Heir::new(HeirRelation::Son))
//! .with_heir(Heir::new(HeirRelation::Daughter));
//!
//! let result = calculate_inheritance(&input);
//! assert_eq!(result.shares[0].amount, Money::from_rupiah(300_000_000));
//! ```

pub mod case;
pub mod deceased;
pub mod distribution;
pub mod eligibility;
pub mod engine;
pub mod error;
pub mod faraid;
pub mod heir;
pub mod perdata;
pub mod result;
pub mod validation;

pub use case::{InheritanceInput, LawSystem};
pub use deceased::{DeceasedInfo, Gender, MaritalStatus};
pub use eligibility::{available_heir_relations, relation_label, relation_label_with_gender};
pub use engine::{calculate_inheritance, try_calculate_inheritance};
pub use error::{InheritanceError, ValidationError};
pub use heir::{Heir, HeirRelation, MAX_GROUP_SIZE};
pub use result::{
    Deductions, Golongan, HeirShare, InheritanceResult, ShareBasis, Warning, WarningKind,
};
pub use validation::{validate_input, InheritanceValidator, ValidationReport};

pub use core_kernel::format_currency;
