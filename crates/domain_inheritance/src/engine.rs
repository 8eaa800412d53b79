//! Calculation entry points
//!
//! Validates the case, dispatches on the law system, and turns the strategy's
//! fractions into percentages and Rupiah amounts.

use rust_decimal::Decimal;

use core_kernel::{format_percentage, Fraction, Money};
use crate::case::{InheritanceInput, LawSystem};
use crate::distribution::Distribution;
use crate::error::InheritanceError;
use crate::result::{Deductions, HeirShare, InheritanceResult, ShareBasis, Warning, WarningKind};
use crate::validation::InheritanceValidator;
use crate::{faraid, perdata};

/// Decimal places kept for share percentages
pub const PERCENTAGE_PRECISION: u32 = 4;

/// Calculates the distribution for a case
///
/// Never panics on bad input: an invalid case yields a result with zero
/// shares and one `InvalidInput` warning per validation error.
#[tracing::instrument(skip_all, fields(case_id = %input.case_id, law_system = ?input.law_system))]
pub fn calculate_inheritance(input: &InheritanceInput) -> InheritanceResult {
    match try_calculate_inheritance(input) {
        Ok(result) => result,
        Err(InheritanceError::InvalidInput(errors)) => {
            tracing::warn!(errors = errors.len(), "Calculation requested for invalid case");
            let warnings = errors
                .iter()
                .map(|e| Warning::new(WarningKind::InvalidInput, e.to_string()))
                .collect();
            degenerate_result(input, warnings)
        }
        Err(error) => {
            tracing::error!(%error, "Calculation failed");
            degenerate_result(
                input,
                vec![Warning::new(WarningKind::CalculationFailed, error.to_string())],
            )
        }
    }
}

/// Calculates the distribution, returning an error for an invalid case
pub fn try_calculate_inheritance(input: &InheritanceInput) -> Result<InheritanceResult, InheritanceError> {
    let report = InheritanceValidator::validate(input);
    if !report.is_valid() {
        return Err(InheritanceError::InvalidInput(report.errors));
    }

    let distribution = match input.law_system {
        LawSystem::Islam => faraid::distribute(input)?,
        LawSystem::Perdata => perdata::distribute(input)?,
    };

    let result = build_result(input, distribution, report.warnings)?;
    tracing::debug!(
        net_estate = %result.net_estate.amount(),
        shares = result.shares.len(),
        warnings = result.warnings.len(),
        "Calculated inheritance"
    );
    Ok(result)
}

fn deductions(input: &InheritanceInput) -> Deductions {
    Deductions {
        debts: input.debts,
        funeral_costs: input.funeral_costs,
        wasiat: input.wasiat,
    }
}

fn build_result(
    input: &InheritanceInput,
    distribution: Distribution,
    mut warnings: Vec<Warning>,
) -> Result<InheritanceResult, InheritanceError> {
    let net_estate = input.net_estate();
    let entries = distribution.entry_shares(&input.heirs)?;
    let fractions: Vec<Fraction> = entries.iter().map(|e| e.fraction).collect();
    let amounts = net_estate.allocate_by_fractions(&fractions)?;

    let mut shares = Vec::with_capacity(entries.len());
    for ((heir, entry), amount) in input.heirs.iter().zip(entries).zip(amounts) {
        let count = heir.effective_count();
        let percentage = entry.fraction.as_percentage(PERCENTAGE_PRECISION);
        let amount_per_person = amount.divide(Decimal::from(count))?;

        let explanation = if count > 1 && entry.fraction.is_positive() {
            let per_person = entry.fraction.split(i64::from(count))?;
            format!(
                "{}. Dibagi rata untuk {} orang: masing-masing {} ({}), ditampilkan sebagai gabungan {} ({})",
                entry.explanation,
                count,
                per_person,
                format_percentage(per_person.as_percentage(PERCENTAGE_PRECISION)),
                entry.fraction,
                format_percentage(percentage)
            )
        } else {
            entry.explanation
        };

        shares.push(HeirShare {
            heir: heir.clone(),
            fraction: entry.fraction,
            base_fraction: entry.base_fraction,
            percentage,
            amount,
            amount_per_person,
            basis: entry.basis,
            explanation,
        });
    }

    warnings.extend(distribution.warnings);
    if net_estate.is_zero() {
        warnings.push(Warning::new(
            WarningKind::EmptyEstate,
            "Harta bersih habis untuk utang dan biaya; tidak ada yang dapat dibagikan",
        ));
    }

    let deductions = deductions(input);
    let mut explanations = vec![format!(
        "Harta bersih = {} - {} (utang) - {} (biaya pemakaman) - {} (wasiat) = {}",
        input.total_estate, deductions.debts, deductions.funeral_costs, deductions.wasiat, net_estate
    )];
    explanations.extend(distribution.explanations);

    Ok(InheritanceResult {
        case_id: input.case_id,
        law_system: input.law_system,
        gross_estate: input.total_estate,
        deductions,
        net_estate,
        shares,
        warnings,
        explanations,
    })
}

fn degenerate_result(input: &InheritanceInput, warnings: Vec<Warning>) -> InheritanceResult {
    let shares = input
        .heirs
        .iter()
        .map(|heir| HeirShare {
            heir: heir.clone(),
            fraction: Fraction::ZERO,
            base_fraction: None,
            percentage: Decimal::ZERO,
            amount: Money::zero(),
            amount_per_person: Money::zero(),
            basis: ShareBasis::NotCalculated,
            explanation: "Perhitungan tidak dilakukan karena input tidak valid".to_string(),
        })
        .collect();

    InheritanceResult {
        case_id: input.case_id,
        law_system: input.law_system,
        gross_estate: input.total_estate,
        deductions: deductions(input),
        net_estate: input.net_estate(),
        shares,
        warnings,
        explanations: Vec::new(),
    }
}
