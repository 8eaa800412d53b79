//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random inheritance cases
//! that pass validation.

use core_kernel::Money;
use domain_inheritance::{
    DeceasedInfo, Gender, Heir, HeirRelation, InheritanceInput, LawSystem, MaritalStatus,
};
use proptest::prelude::*;

/// Strategy for generating a gender
pub fn gender_strategy() -> impl Strategy<Value = Gender> {
    prop_oneof![Just(Gender::Male), Just(Gender::Female)]
}

/// Strategy for generating a law system
pub fn law_system_strategy() -> impl Strategy<Value = LawSystem> {
    prop_oneof![Just(LawSystem::Islam), Just(LawSystem::Perdata)]
}

/// Strategy for generating any heir relation
pub fn relation_strategy() -> impl Strategy<Value = HeirRelation> {
    proptest::sample::select(HeirRelation::ALL.to_vec())
}

/// Strategy for generating gross estates in whole Rupiah
pub fn estate_strategy() -> impl Strategy<Value = i64> {
    1_000i64..10_000_000_000i64
}

/// Strategy for generating a non-empty set of living heirs
///
/// At most one spouse entry; every entry counts 1 to 5 people.
pub fn heirs_strategy() -> impl Strategy<Value = Vec<Heir>> {
    (
        any::<bool>(),
        proptest::collection::vec((relation_strategy(), 1u32..=5), 1..6),
    )
        .prop_map(|(with_spouse, entries)| {
            let mut heirs: Vec<Heir> = entries
                .into_iter()
                .filter(|(relation, _)| *relation != HeirRelation::Spouse)
                .map(|(relation, count)| Heir::new(relation).with_count(count))
                .collect();
            if with_spouse || heirs.is_empty() {
                heirs.push(Heir::new(HeirRelation::Spouse));
            }
            heirs
        })
}

/// Strategy for generating valid inheritance cases
///
/// Deductions stay under a tenth of the estate each, so the wasiat never
/// exceeds the 1/3 limit.
pub fn valid_input_strategy() -> impl Strategy<Value = InheritanceInput> {
    (
        gender_strategy(),
        law_system_strategy(),
        estate_strategy(),
        0u32..10,
        0u32..10,
        0u32..10,
        heirs_strategy(),
    )
        .prop_map(|(gender, law_system, estate, debts, funeral, wasiat, heirs)| {
            let percent = |p: u32| Money::from_rupiah(estate / 100 * i64::from(p));
            let mut input = InheritanceInput::new(
                DeceasedInfo::new("Pewaris", gender, MaritalStatus::Married),
                law_system,
                Money::from_rupiah(estate),
            )
            .with_debts(percent(debts))
            .with_funeral_costs(percent(funeral))
            .with_wasiat(percent(wasiat));
            input.heirs = heirs;
            input
        })
}
