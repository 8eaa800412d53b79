//! The inheritance case submitted for calculation

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{CaseId, Money};
use crate::deceased::DeceasedInfo;
use crate::heir::{Heir, HeirRelation};

/// Legal system governing the distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LawSystem {
    /// Islamic law (Faraid)
    Islam,
    /// Indonesian Civil Code (KUHPerdata)
    Perdata,
}

impl fmt::Display for LawSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LawSystem::Islam => write!(f, "Hukum Islam (Faraid)"),
            LawSystem::Perdata => write!(f, "Hukum Perdata (KUHPerdata)"),
        }
    }
}

/// A complete, immutable snapshot of an inheritance case
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InheritanceInput {
    /// Case identifier, echoed in the result
    #[serde(default)]
    pub case_id: CaseId,
    /// The deceased
    pub deceased: DeceasedInfo,
    /// Heirs; order is irrelevant to the computation
    pub heirs: Vec<Heir>,
    /// Gross estate
    pub total_estate: Money,
    /// Outstanding debts
    #[serde(default = "Money::zero")]
    pub debts: Money,
    /// Funeral costs
    #[serde(default = "Money::zero")]
    pub funeral_costs: Money,
    /// Bequest to non-heirs
    #[serde(default = "Money::zero")]
    pub wasiat: Money,
    /// Governing legal system
    pub law_system: LawSystem,
}

impl InheritanceInput {
    pub fn new(deceased: DeceasedInfo, law_system: LawSystem, total_estate: Money) -> Self {
        Self {
            case_id: CaseId::new_v7(),
            deceased,
            heirs: Vec::new(),
            total_estate,
            debts: Money::zero(),
            funeral_costs: Money::zero(),
            wasiat: Money::zero(),
            law_system,
        }
    }

    /// Adds an heir
    pub fn with_heir(mut self, heir: Heir) -> Self {
        self.heirs.push(heir);
        self
    }

    pub fn with_debts(mut self, debts: Money) -> Self {
        self.debts = debts;
        self
    }

    pub fn with_funeral_costs(mut self, funeral_costs: Money) -> Self {
        self.funeral_costs = funeral_costs;
        self
    }

    pub fn with_wasiat(mut self, wasiat: Money) -> Self {
        self.wasiat = wasiat;
        self
    }

    /// Estate left after debts and funeral costs, before the bequest
    pub fn estate_before_wasiat(&self) -> Money {
        (self.total_estate - self.debts - self.funeral_costs).floor_at_zero()
    }

    /// Net estate = total − debts − funeral costs − wasiat, floored at zero
    pub fn net_estate(&self) -> Money {
        (self.total_estate - self.debts - self.funeral_costs - self.wasiat).floor_at_zero()
    }

    /// Maximum permissible wasiat under Islamic law: 1/3 of the estate after
    /// debts and funeral costs
    pub fn wasiat_cap(&self) -> Money {
        Money::new(self.estate_before_wasiat().amount() / Decimal::from(3))
    }

    /// Whether the wasiat exceeds one third of the estate after debts and funeral costs
    pub fn wasiat_exceeds_cap(&self) -> bool {
        self.wasiat.amount() * Decimal::from(3) > self.estate_before_wasiat().amount()
    }

    /// Number of heir entries with the given relation
    pub fn count_relation(&self, relation: HeirRelation) -> usize {
        self.heirs.iter().filter(|h| h.relation == relation).count()
    }

    /// Whether the case already contains a spouse
    pub fn has_spouse(&self) -> bool {
        self.count_relation(HeirRelation::Spouse) > 0
    }
}
