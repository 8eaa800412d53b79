//! Pre-built Test Fixtures
//!
//! Textbook inheritance cases with well-known answers. Each fixture
//! documents the expected distribution so tests can assert against it.

use domain_inheritance::{HeirRelation, InheritanceInput, MaritalStatus};

use crate::builders::InheritanceInputBuilder;

/// Fixture for Faraid cases
pub struct FaraidFixtures;

impl FaraidFixtures {
    /// One son and one daughter: 2/3 and 1/3
    pub fn son_and_daughter() -> InheritanceInput {
        InheritanceInputBuilder::islam()
            .heir(HeirRelation::Son)
            .heir(HeirRelation::Daughter)
            .build()
    }

    /// Husband, mother and two daughters: Aul from 12 to 13
    ///
    /// Husband 3/13, mother 2/13, daughters 8/13.
    pub fn aul_husband_mother_two_daughters() -> InheritanceInput {
        InheritanceInputBuilder::islam()
            .female()
            .with_estate(130_000_000)
            .heir(HeirRelation::Spouse)
            .heir(HeirRelation::Mother)
            .heirs_of(HeirRelation::Daughter, 2)
            .build()
    }

    /// Wife and one daughter: Radd without the spouse
    ///
    /// Wife 1/8, daughter 7/8.
    pub fn radd_wife_and_daughter() -> InheritanceInput {
        InheritanceInputBuilder::islam()
            .with_estate(80_000_000)
            .heir(HeirRelation::Spouse)
            .heir(HeirRelation::Daughter)
            .build()
    }

    /// Wife, father and mother (Umariyyatain)
    ///
    /// Wife 1/4, mother 1/4 (1/3 of the remainder), father 1/2.
    pub fn umariyyatain_wife() -> InheritanceInput {
        InheritanceInputBuilder::islam()
            .heir(HeirRelation::Spouse)
            .heir(HeirRelation::Father)
            .heir(HeirRelation::Mother)
            .build()
    }

    /// Husband, father and mother (Umariyyatain)
    ///
    /// Husband 1/2, mother 1/6, father 1/3.
    pub fn umariyyatain_husband() -> InheritanceInput {
        InheritanceInputBuilder::islam()
            .female()
            .heir(HeirRelation::Spouse)
            .heir(HeirRelation::Father)
            .heir(HeirRelation::Mother)
            .build()
    }

    /// Only a wife: 1/4 with 3/4 left unallocated
    pub fn wife_only() -> InheritanceInput {
        InheritanceInputBuilder::islam().heir(HeirRelation::Spouse).build()
    }
}

/// Fixture for KUHPerdata cases
pub struct PerdataFixtures;

impl PerdataFixtures {
    /// Spouse, son and daughter with Rp 900.000.000: a third each
    pub fn spouse_and_two_children() -> InheritanceInput {
        InheritanceInputBuilder::perdata()
            .with_estate(900_000_000)
            .heir(HeirRelation::Spouse)
            .heir(HeirRelation::Son)
            .heir(HeirRelation::Daughter)
            .build()
    }

    /// Both parents and one full brother (Pasal 854): a third each
    pub fn parents_and_one_brother() -> InheritanceInput {
        InheritanceInputBuilder::perdata()
            .with_marital_status(MaritalStatus::Single)
            .heir(HeirRelation::Father)
            .heir(HeirRelation::Mother)
            .heir(HeirRelation::BrotherFull)
            .build()
    }

    /// Grandparents only (Golongan III)
    pub fn grandparents() -> InheritanceInput {
        InheritanceInputBuilder::perdata()
            .with_marital_status(MaritalStatus::Single)
            .heir(HeirRelation::Grandfather)
            .heir(HeirRelation::Grandmother)
            .build()
    }
}
