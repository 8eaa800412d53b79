//! Calculation output: per-heir shares, warnings and the rule trace

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{CaseId, Fraction, HeirId, Money};
use crate::case::LawSystem;
use crate::heir::{Heir, HeirRelation};

/// Statutory heir class under KUHPerdata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Golongan {
    /// Spouse and descendants
    #[serde(rename = "I")]
    First,
    /// Parents and siblings
    #[serde(rename = "II")]
    Second,
    /// Grandparents
    #[serde(rename = "III")]
    Third,
    /// Further collateral relatives
    #[serde(rename = "IV")]
    Fourth,
}

impl fmt::Display for Golongan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let numeral = match self {
            Golongan::First => "I",
            Golongan::Second => "II",
            Golongan::Third => "III",
            Golongan::Fourth => "IV",
        };
        write!(f, "Golongan {}", numeral)
    }
}

/// Which rule produced a share
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "class", rename_all = "snake_case")]
pub enum ShareBasis {
    /// Fixed Qur'anic share (Dzawil Furudh), unadjusted
    FixedShare,
    /// Residue (Asabah)
    Residue,
    /// Fixed share plus residue (father or grandfather with only female descendants)
    FixedShareAndResidue,
    /// Fixed share reduced proportionally by Aul
    AulAdjusted,
    /// Fixed share increased proportionally by Radd
    RaddAdjusted,
    /// Equal division within a KUHPerdata class
    CivilClass(Golongan),
    /// Excluded by a nearer heir
    Blocked,
    /// No calculation was performed (invalid input)
    NotCalculated,
}

/// Kind of condition surfaced alongside a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// Fixed shares exceeded the estate and were scaled down
    Aul,
    /// Leftover returned to fixed-share heirs
    Radd,
    /// Part of the estate has no heir to receive it
    UnallocatedResidue,
    /// No heir in any class; estate passes to the state
    Escheat,
    /// The case failed validation; no distribution was made
    InvalidInput,
    /// Debts and costs consume the whole estate
    EmptyEstate,
    /// A spouse is listed although the deceased was not married
    MaritalStatusMismatch,
    /// The distribution could not be computed
    CalculationFailed,
}

/// A legal caveat or adjustment attached to a result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

impl Warning {
    pub fn new(kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Share allotted to one heir entry
///
/// For an entry with `count > 1` the fraction, percentage and amount are the
/// combined figures for the whole group; `amount_per_person` is the
/// individual breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeirShare {
    pub heir: Heir,
    /// Final share of the net estate
    pub fraction: Fraction,
    /// Fixed share before Aul or Radd, when one applied
    pub base_fraction: Option<Fraction>,
    /// Final share as a percentage (0-100, 4 decimal places)
    pub percentage: Decimal,
    /// Amount for the whole entry
    pub amount: Money,
    /// Amount for each person the entry represents
    pub amount_per_person: Money,
    pub basis: ShareBasis,
    pub explanation: String,
}

impl HeirShare {
    /// Whether the heir receives anything
    pub fn receives(&self) -> bool {
        self.fraction.is_positive()
    }
}

/// Deductions taken from the gross estate before distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deductions {
    pub debts: Money,
    pub funeral_costs: Money,
    pub wasiat: Money,
}

impl Deductions {
    pub fn total(&self) -> Money {
        self.debts + self.funeral_costs + self.wasiat
    }
}

/// Outcome of a calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InheritanceResult {
    pub case_id: CaseId,
    pub law_system: LawSystem,
    pub gross_estate: Money,
    pub deductions: Deductions,
    pub net_estate: Money,
    /// One entry per heir entry in the input, in input order
    pub shares: Vec<HeirShare>,
    pub warnings: Vec<Warning>,
    /// Step-by-step rule trace
    pub explanations: Vec<String>,
}

impl InheritanceResult {
    /// Sum of all share percentages
    pub fn total_percentage(&self) -> Decimal {
        self.shares.iter().map(|s| s.percentage).sum()
    }

    /// Sum of all share fractions
    pub fn total_fraction(&self) -> Fraction {
        self.shares.iter().map(|s| s.fraction).sum()
    }

    /// Sum of all allocated amounts
    pub fn total_allocated(&self) -> Money {
        self.shares.iter().map(|s| s.amount).sum()
    }

    /// Whether a warning of the given kind is present
    pub fn has_warning(&self, kind: WarningKind) -> bool {
        self.warnings.iter().any(|w| w.kind == kind)
    }

    /// Share of a specific heir entry
    pub fn share_for(&self, heir_id: HeirId) -> Option<&HeirShare> {
        self.shares.iter().find(|s| s.heir.id == heir_id)
    }

    /// Shares of every entry with the given relation
    pub fn shares_for(&self, relation: HeirRelation) -> impl Iterator<Item = &HeirShare> {
        self.shares.iter().filter(move |s| s.heir.relation == relation)
    }

    /// Combined fraction of every entry with the given relation
    pub fn fraction_for(&self, relation: HeirRelation) -> Fraction {
        self.shares_for(relation).map(|s| s.fraction).sum()
    }
}
