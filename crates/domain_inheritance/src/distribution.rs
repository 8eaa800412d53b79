//! Types shared by the two distribution strategies
//!
//! A strategy works at the level of relation groups (all sons together, all
//! full sisters together). [`Distribution::entry_shares`] then splits each
//! group's share across the input entries by head count.

use std::collections::BTreeMap;

use core_kernel::Fraction;
use crate::deceased::Gender;
use crate::eligibility::relation_label_with_gender;
use crate::error::InheritanceError;
use crate::heir::{Heir, HeirRelation};
use crate::result::{ShareBasis, Warning, WarningKind};

/// Head counts per relation for one case
#[derive(Debug, Clone)]
pub struct Family {
    counts: BTreeMap<HeirRelation, i64>,
    deceased_gender: Gender,
}

impl Family {
    pub fn from_heirs(heirs: &[Heir], deceased_gender: Gender) -> Self {
        let mut counts = BTreeMap::new();
        for heir in heirs.iter().filter(|h| h.is_alive) {
            *counts.entry(heir.relation).or_insert(0) += i64::from(heir.effective_count());
        }
        Self { counts, deceased_gender }
    }

    /// Head count of a relation (singular relations count once)
    pub fn count(&self, relation: HeirRelation) -> i64 {
        let count = self.counts.get(&relation).copied().unwrap_or(0);
        if relation.is_pluralizable() {
            count
        } else {
            count.min(1)
        }
    }

    pub fn has(&self, relation: HeirRelation) -> bool {
        self.count(relation) > 0
    }

    /// Sum of head counts over several relations
    pub fn total(&self, relations: &[HeirRelation]) -> i64 {
        relations.iter().map(|r| self.count(*r)).sum()
    }

    /// Relations present in the case, in canonical order
    pub fn relations(&self) -> impl Iterator<Item = HeirRelation> + '_ {
        self.counts.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn deceased_gender(&self) -> Gender {
        self.deceased_gender
    }

    /// Gender-aware label for a relation
    pub fn label(&self, relation: HeirRelation) -> &'static str {
        relation_label_with_gender(relation, self.deceased_gender)
    }
}

/// Share decided for a whole relation group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupShare {
    pub fraction: Fraction,
    pub base_fraction: Option<Fraction>,
    pub basis: ShareBasis,
    pub explanation: String,
}

impl GroupShare {
    pub fn new(fraction: Fraction, basis: ShareBasis, explanation: impl Into<String>) -> Self {
        Self {
            fraction,
            base_fraction: None,
            basis,
            explanation: explanation.into(),
        }
    }

    pub fn blocked(explanation: impl Into<String>) -> Self {
        Self::new(Fraction::ZERO, ShareBasis::Blocked, explanation)
    }

    pub fn with_base(mut self, base: Fraction) -> Self {
        self.base_fraction = Some(base);
        self
    }
}

/// Share for a single input entry, before amounts are attached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryShare {
    pub fraction: Fraction,
    pub base_fraction: Option<Fraction>,
    pub basis: ShareBasis,
    pub explanation: String,
}

/// Output of a distribution strategy
#[derive(Debug, Clone, Default)]
pub struct Distribution {
    pub groups: BTreeMap<HeirRelation, GroupShare>,
    pub warnings: Vec<Warning>,
    pub explanations: Vec<String>,
}

impl Distribution {
    pub fn set(&mut self, relation: HeirRelation, share: GroupShare) {
        self.groups.insert(relation, share);
    }

    pub fn warn(&mut self, kind: WarningKind, message: impl Into<String>) {
        self.warnings.push(Warning::new(kind, message));
    }

    pub fn explain(&mut self, step: impl Into<String>) {
        self.explanations.push(step.into());
    }

    /// Combined fraction of every group
    pub fn total(&self) -> Fraction {
        self.groups.values().map(|g| g.fraction).sum()
    }

    /// Splits group shares across input entries by head count
    ///
    /// Returns one share per heir, in input order.
    pub fn entry_shares(&self, heirs: &[Heir]) -> Result<Vec<EntryShare>, InheritanceError> {
        let mut group_sizes: BTreeMap<HeirRelation, i64> = BTreeMap::new();
        for heir in heirs {
            *group_sizes.entry(heir.relation).or_insert(0) += i64::from(heir.effective_count());
        }

        heirs
            .iter()
            .map(|heir| {
                let size = group_sizes.get(&heir.relation).copied().unwrap_or(1).max(1);
                let weight = Fraction::new(i64::from(heir.effective_count()), size)?;

                Ok(match self.groups.get(&heir.relation) {
                    Some(group) => EntryShare {
                        fraction: group.fraction * weight,
                        base_fraction: group.base_fraction.map(|b| b * weight),
                        basis: group.basis,
                        explanation: group.explanation.clone(),
                    },
                    None => EntryShare {
                        fraction: Fraction::ZERO,
                        base_fraction: None,
                        basis: ShareBasis::Blocked,
                        explanation: "Tidak memperoleh bagian".to_string(),
                    },
                })
            })
            .collect()
    }
}

/// Splits `share` among groups in proportion to `weight × head count`
///
/// Used for the 2:1 male:female residue rule (weights 2 and 1) and for
/// per-capita division (weight 1 for everyone).
pub fn split_by_weight(
    share: Fraction,
    members: &[(HeirRelation, i64, i64)],
) -> Result<Vec<(HeirRelation, Fraction)>, InheritanceError> {
    let total_weight: i64 = members.iter().map(|(_, weight, count)| weight * count).sum();
    if total_weight == 0 {
        return Ok(members.iter().map(|(r, _, _)| (*r, Fraction::ZERO)).collect());
    }

    members
        .iter()
        .map(|(relation, weight, count)| {
            Ok((*relation, share * Fraction::new(weight * count, total_weight)?))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_counts_aggregate_entries() {
        let heirs = vec![
            Heir::new(HeirRelation::Son).with_count(2),
            Heir::new(HeirRelation::Son),
            Heir::new(HeirRelation::Father).with_count(5),
        ];
        let family = Family::from_heirs(&heirs, Gender::Male);
        assert_eq!(family.count(HeirRelation::Son), 3);
        assert_eq!(family.count(HeirRelation::Father), 1);
        assert_eq!(family.count(HeirRelation::Mother), 0);
    }

    #[test]
    fn test_split_by_weight_two_to_one() {
        let shares = split_by_weight(
            Fraction::ONE,
            &[(HeirRelation::Son, 2, 1), (HeirRelation::Daughter, 1, 2)],
        )
        .unwrap();
        assert_eq!(shares[0].1, Fraction::new(1, 2).unwrap());
        assert_eq!(shares[1].1, Fraction::new(1, 2).unwrap());
    }

    #[test]
    fn test_entry_shares_split_group_by_count() {
        let heirs = vec![
            Heir::new(HeirRelation::Son).with_count(3),
            Heir::new(HeirRelation::Son),
        ];
        let mut distribution = Distribution::default();
        distribution.set(
            HeirRelation::Son,
            GroupShare::new(Fraction::ONE, ShareBasis::Residue, "Asabah"),
        );

        let entries = distribution.entry_shares(&heirs).unwrap();
        assert_eq!(entries[0].fraction, Fraction::new(3, 4).unwrap());
        assert_eq!(entries[1].fraction, Fraction::new(1, 4).unwrap());
    }
}
