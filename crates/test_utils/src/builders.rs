//! Test Data Builders
//!
//! Provides builder patterns for constructing test cases with sensible defaults.
//! These builders allow tests to specify only the heirs and amounts that matter
//! while using defaults for everything else.

use core_kernel::Money;
use domain_inheritance::{
    DeceasedInfo, Gender, Heir, HeirRelation, InheritanceInput, LawSystem, MaritalStatus,
};

/// Default gross estate for test cases (Rp 120.000.000, divisible by 24)
pub const DEFAULT_ESTATE: i64 = 120_000_000;

/// Builder for constructing test inheritance cases
pub struct InheritanceInputBuilder {
    name: String,
    gender: Gender,
    marital_status: MaritalStatus,
    law_system: LawSystem,
    total_estate: Money,
    debts: Money,
    funeral_costs: Money,
    wasiat: Money,
    heirs: Vec<Heir>,
}

impl Default for InheritanceInputBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InheritanceInputBuilder {
    /// Creates a builder for a married male deceased under Islamic law
    pub fn new() -> Self {
        Self {
            name: "Ahmad".to_string(),
            gender: Gender::Male,
            marital_status: MaritalStatus::Married,
            law_system: LawSystem::Islam,
            total_estate: Money::from_rupiah(DEFAULT_ESTATE),
            debts: Money::zero(),
            funeral_costs: Money::zero(),
            wasiat: Money::zero(),
            heirs: Vec::new(),
        }
    }

    /// Starts a case under Islamic law
    pub fn islam() -> Self {
        Self::new()
    }

    /// Starts a case under the Civil Code
    pub fn perdata() -> Self {
        Self::new().with_law_system(LawSystem::Perdata)
    }

    /// Sets the deceased's name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Makes the deceased male
    pub fn male(mut self) -> Self {
        self.gender = Gender::Male;
        self
    }

    /// Makes the deceased female
    pub fn female(mut self) -> Self {
        self.gender = Gender::Female;
        self
    }

    /// Sets the marital status
    pub fn with_marital_status(mut self, status: MaritalStatus) -> Self {
        self.marital_status = status;
        self
    }

    /// Sets the law system
    pub fn with_law_system(mut self, law_system: LawSystem) -> Self {
        self.law_system = law_system;
        self
    }

    /// Sets the gross estate in whole Rupiah
    pub fn with_estate(mut self, rupiah: i64) -> Self {
        self.total_estate = Money::from_rupiah(rupiah);
        self
    }

    /// Sets the debts in whole Rupiah
    pub fn with_debts(mut self, rupiah: i64) -> Self {
        self.debts = Money::from_rupiah(rupiah);
        self
    }

    /// Sets the funeral costs in whole Rupiah
    pub fn with_funeral_costs(mut self, rupiah: i64) -> Self {
        self.funeral_costs = Money::from_rupiah(rupiah);
        self
    }

    /// Sets the wasiat in whole Rupiah
    pub fn with_wasiat(mut self, rupiah: i64) -> Self {
        self.wasiat = Money::from_rupiah(rupiah);
        self
    }

    /// Adds a single heir
    pub fn heir(self, relation: HeirRelation) -> Self {
        self.heirs_of(relation, 1)
    }

    /// Adds one entry representing `count` heirs of the same relation
    pub fn heirs_of(mut self, relation: HeirRelation, count: u32) -> Self {
        self.heirs.push(Heir::new(relation).with_count(count));
        self
    }

    /// Adds a fully specified heir
    pub fn with_heir(mut self, heir: Heir) -> Self {
        self.heirs.push(heir);
        self
    }

    /// Builds the case
    pub fn build(self) -> InheritanceInput {
        let mut input = InheritanceInput::new(
            DeceasedInfo::new(self.name, self.gender, self.marital_status),
            self.law_system,
            self.total_estate,
        )
        .with_debts(self.debts)
        .with_funeral_costs(self.funeral_costs)
        .with_wasiat(self.wasiat);
        input.heirs = self.heirs;
        input
    }
}
