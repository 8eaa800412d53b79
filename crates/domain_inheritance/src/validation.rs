//! Inheritance case validation
//!
//! Validation collects every problem with a case so the caller can display
//! them all at once; it never stops at the first error.
//!
//! # Validation Rules
//!
//! - The deceased must have a non-blank name
//! - At least one heir must be listed
//! - The gross estate must be greater than zero
//! - Debts, funeral costs and wasiat cannot be negative
//! - The wasiat cannot exceed what remains after debts and funeral costs
//! - Under Islamic law the wasiat cannot exceed 1/3 of the estate after
//!   debts and funeral costs
//! - At most one spouse entry
//! - Every heir must be alive, with a head count between 1 and [`MAX_GROUP_SIZE`]
//! - Heir identifiers must be unique
//!
//! A spouse listed for a deceased who was not married is only a warning.

use std::collections::BTreeSet;

use crate::case::{InheritanceInput, LawSystem};
use crate::deceased::MaritalStatus;
use crate::eligibility::relation_label_with_gender;
use crate::error::ValidationError;
use crate::heir::{Heir, HeirRelation, MAX_GROUP_SIZE};
use crate::result::{Warning, WarningKind};

/// Result of case validation
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// Problems that prevent calculation
    pub errors: Vec<ValidationError>,
    /// Non-fatal observations carried into the result
    pub warnings: Vec<Warning>,
}

impl ValidationReport {
    /// Whether the case may be calculated
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Adds an error to the report
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Adds a warning to the report
    pub fn add_warning(&mut self, kind: WarningKind, message: impl Into<String>) {
        self.warnings.push(Warning::new(kind, message));
    }

    /// User-facing error messages
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Validator for inheritance cases
pub struct InheritanceValidator;

impl InheritanceValidator {
    /// Validates a case
    ///
    /// # Arguments
    ///
    /// * `input` - The case to validate
    ///
    /// # Returns
    ///
    /// A `ValidationReport` containing every error and warning found
    pub fn validate(input: &InheritanceInput) -> ValidationReport {
        let mut report = ValidationReport::default();

        Self::validate_deceased(input, &mut report);
        Self::validate_estate(input, &mut report);
        Self::validate_heirs(input, &mut report);

        tracing::debug!(
            case_id = %input.case_id,
            errors = report.errors.len(),
            warnings = report.warnings.len(),
            "Validated inheritance case"
        );

        report
    }

    fn validate_deceased(input: &InheritanceInput, report: &mut ValidationReport) {
        if input.deceased.name.trim().is_empty() {
            report.add_error(ValidationError::MissingDeceasedName);
        }
    }

    fn validate_estate(input: &InheritanceInput, report: &mut ValidationReport) {
        if !input.total_estate.is_positive() {
            report.add_error(ValidationError::NonPositiveEstate);
        }

        let deductions = [
            ("Utang", input.debts),
            ("Biaya pemakaman", input.funeral_costs),
            ("Wasiat", input.wasiat),
        ];
        let mut any_negative = false;
        for (field, amount) in deductions {
            if amount.is_negative() {
                report.add_error(ValidationError::NegativeAmount { field });
                any_negative = true;
            }
        }
        if any_negative || !input.wasiat.is_positive() {
            return;
        }

        // Debts alone exceeding the estate only floor the net estate at zero.
        let remaining = input.total_estate - input.debts - input.funeral_costs;
        if input.wasiat > remaining {
            report.add_error(ValidationError::WasiatExceedsEstate);
        } else if input.law_system == LawSystem::Islam && input.wasiat_exceeds_cap() {
            report.add_error(ValidationError::WasiatExceedsCap {
                wasiat: input.wasiat,
                cap: input.wasiat_cap(),
            });
        }
    }

    fn validate_heirs(input: &InheritanceInput, report: &mut ValidationReport) {
        if input.heirs.is_empty() {
            report.add_error(ValidationError::NoHeirs);
            return;
        }

        if input.count_relation(HeirRelation::Spouse) > 1 {
            report.add_error(ValidationError::DuplicateSpouse);
        }

        let mut seen = BTreeSet::new();
        for heir in &input.heirs {
            let display = display_name(input, heir);

            if !heir.is_alive {
                report.add_error(ValidationError::DeceasedHeir { heir: display.clone() });
            }
            if heir.count == 0 || heir.count > MAX_GROUP_SIZE {
                report.add_error(ValidationError::InvalidHeirCount {
                    heir: display.clone(),
                    count: heir.count,
                    max: MAX_GROUP_SIZE,
                });
            }
            if !seen.insert(*heir.id.as_uuid()) {
                report.add_error(ValidationError::DuplicateHeirId { heir: display });
            }
        }

        if input.has_spouse() && input.deceased.marital_status != MaritalStatus::Married {
            report.add_warning(
                WarningKind::MaritalStatusMismatch,
                "Status pewaris tidak menikah, tetapi suami/istri tercantum sebagai ahli waris",
            );
        }
    }
}

fn display_name(input: &InheritanceInput, heir: &Heir) -> String {
    let label = relation_label_with_gender(heir.relation, input.deceased.gender);
    match heir.name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => format!("{} ({})", name, label),
        _ => label.to_string(),
    }
}

/// Validates a case and returns one message per problem (empty = valid)
pub fn validate_input(input: &InheritanceInput) -> Vec<String> {
    InheritanceValidator::validate(input).messages()
}
