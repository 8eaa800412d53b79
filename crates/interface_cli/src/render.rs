//! Text and JSON rendering of calculation results

use std::fmt::Write as _;

use anyhow::Result;
use core_kernel::format_percentage;
use domain_inheritance::{
    relation_label_with_gender, Gender, HeirRelation, InheritanceInput, InheritanceResult,
    WarningKind,
};

use crate::config::OutputFormat;

/// Renders a result in the requested format
pub fn render_result(
    input: &InheritanceInput,
    result: &InheritanceResult,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(input, result)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
    }
}

/// Human-readable report
///
/// Lists every heir with share, percentage and amount, followed by the
/// warnings and the calculation steps.
pub fn render_text(input: &InheritanceInput, result: &InheritanceResult) -> String {
    let gender = input.deceased.gender;
    let mut out = String::new();

    let _ = writeln!(out, "Pewaris       : {}", input.deceased.name);
    let _ = writeln!(out, "Sistem hukum  : {}", result.law_system);
    let _ = writeln!(out, "Harta kotor   : {}", result.gross_estate);
    let _ = writeln!(out, "  Utang       : {}", result.deductions.debts);
    let _ = writeln!(out, "  Pemakaman   : {}", result.deductions.funeral_costs);
    let _ = writeln!(out, "  Wasiat      : {}", result.deductions.wasiat);
    let _ = writeln!(out, "Harta bersih  : {}", result.net_estate);
    out.push('\n');

    out.push_str("Pembagian:\n");
    for share in &result.shares {
        let count = share.heir.effective_count();
        let _ = writeln!(
            out,
            "- {}: {} ({}) = {}",
            heir_title(share.heir.relation, share.heir.name.as_deref(), count, gender),
            share.fraction,
            format_percentage(share.percentage),
            share.amount
        );
        if count > 1 {
            let _ = writeln!(out, "    per orang: {}", share.amount_per_person);
        }
        let _ = writeln!(out, "    {}", share.explanation);
    }
    let _ = writeln!(
        out,
        "Total: {} = {}",
        format_percentage(result.total_percentage()),
        result.total_allocated()
    );

    if !result.warnings.is_empty() {
        out.push_str("\nPeringatan:\n");
        for warning in &result.warnings {
            let _ = writeln!(out, "- [{}] {}", warning_code(warning.kind), warning);
        }
    }

    if !result.explanations.is_empty() {
        out.push_str("\nLangkah perhitungan:\n");
        for (i, step) in result.explanations.iter().enumerate() {
            let _ = writeln!(out, "{}. {}", i + 1, step);
        }
    }

    out
}

/// Addable relations, one per line with the gender-aware label
pub fn render_relations(relations: &[HeirRelation], gender: Gender) -> String {
    relations
        .iter()
        .map(|relation| {
            format!(
                "{:<24} {}\n",
                relation_code(*relation),
                relation_label_with_gender(*relation, gender)
            )
        })
        .collect()
}

fn heir_title(relation: HeirRelation, name: Option<&str>, count: u32, gender: Gender) -> String {
    let label = relation_label_with_gender(relation, gender);
    let mut title = match name.map(str::trim) {
        Some(name) if !name.is_empty() => format!("{} ({})", label, name),
        _ => label.to_string(),
    };
    if count > 1 {
        let _ = write!(title, " x{}", count);
    }
    title
}

/// The serialized name of a relation, as used in case files
pub fn relation_code(relation: HeirRelation) -> String {
    serde_json::to_value(relation)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_else(|| format!("{:?}", relation))
}

fn warning_code(kind: WarningKind) -> String {
    serde_json::to_value(kind)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_else(|| format!("{:?}", kind))
}
