//! Inheritance domain errors
//!
//! `Display` renders the Indonesian user-facing message; [`ValidationError::kind`]
//! is the stable code callers and tests match on.

use thiserror::Error;

use core_kernel::{CoreError, Money};

/// A user-correctable problem with an inheritance case
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Nama pewaris wajib diisi")]
    MissingDeceasedName,

    #[error("Minimal harus ada satu ahli waris")]
    NoHeirs,

    #[error("Total harta harus lebih dari 0")]
    NonPositiveEstate,

    #[error("{field} tidak boleh bernilai negatif")]
    NegativeAmount { field: &'static str },

    #[error("Wasiat melebihi sisa harta setelah utang dan biaya pemakaman")]
    WasiatExceedsEstate,

    #[error("Wasiat ({wasiat}) melebihi batas 1/3 harta ({cap})")]
    WasiatExceedsCap { wasiat: Money, cap: Money },

    #[error("Hanya boleh ada satu suami/istri")]
    DuplicateSpouse,

    #[error("Ahli waris {heir} sudah meninggal dan tidak dapat dimasukkan")]
    DeceasedHeir { heir: String },

    #[error("Jumlah {heir} harus antara 1 dan {max}, diberikan {count}")]
    InvalidHeirCount { heir: String, count: u32, max: u32 },

    #[error("ID ahli waris {heir} digunakan lebih dari sekali")]
    DuplicateHeirId { heir: String },
}

impl ValidationError {
    /// Stable identifier of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::MissingDeceasedName => "missing_deceased_name",
            ValidationError::NoHeirs => "no_heirs",
            ValidationError::NonPositiveEstate => "non_positive_estate",
            ValidationError::NegativeAmount { .. } => "negative_amount",
            ValidationError::WasiatExceedsEstate => "wasiat_exceeds_estate",
            ValidationError::WasiatExceedsCap { .. } => "wasiat_exceeds_cap",
            ValidationError::DuplicateSpouse => "duplicate_spouse",
            ValidationError::DeceasedHeir { .. } => "deceased_heir",
            ValidationError::InvalidHeirCount { .. } => "invalid_heir_count",
            ValidationError::DuplicateHeirId { .. } => "duplicate_heir_id",
        }
    }
}

/// Errors from the strict calculation entry point
#[derive(Debug, Error)]
pub enum InheritanceError {
    #[error("Input tidak valid: {}", format_errors(.0))]
    InvalidInput(Vec<ValidationError>),

    #[error("Calculation error: {0}")]
    Calculation(#[from] CoreError),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<core_kernel::FractionError> for InheritanceError {
    fn from(error: core_kernel::FractionError) -> Self {
        InheritanceError::Calculation(error.into())
    }
}

impl From<core_kernel::MoneyError> for InheritanceError {
    fn from(error: core_kernel::MoneyError) -> Self {
        InheritanceError::Calculation(error.into())
    }
}
