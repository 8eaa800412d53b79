//! KUHPerdata (Indonesian Civil Code) distribution strategy
//!
//! Heirs fall into four classes (golongan). Only the highest non-empty class
//! inherits; everyone in a lower class receives nothing. Within a class the
//! estate is divided per capita with no gender differential.

use core_kernel::Fraction;
use crate::case::{InheritanceInput, LawSystem};
use crate::distribution::{split_by_weight, Distribution, Family, GroupShare};
use crate::error::InheritanceError;
use crate::heir::HeirRelation;
use crate::result::{Golongan, ShareBasis, WarningKind};

/// Statutory class of a relation
pub fn golongan(relation: HeirRelation) -> Golongan {
    match relation {
        HeirRelation::Spouse
        | HeirRelation::Son
        | HeirRelation::Daughter
        | HeirRelation::SonOfSon
        | HeirRelation::DaughterOfSon => Golongan::First,
        HeirRelation::Father
        | HeirRelation::Mother
        | HeirRelation::BrotherFull
        | HeirRelation::SisterFull
        | HeirRelation::BrotherPaternal
        | HeirRelation::SisterPaternal
        | HeirRelation::BrotherMaternal
        | HeirRelation::SisterMaternal
        | HeirRelation::SonOfBrotherFull
        | HeirRelation::SonOfBrotherPaternal => Golongan::Second,
        HeirRelation::Grandfather | HeirRelation::Grandmother => Golongan::Third,
        HeirRelation::UnclePaternal | HeirRelation::SonOfUncle => Golongan::Fourth,
    }
}

const CHILDREN: [HeirRelation; 2] = [HeirRelation::Son, HeirRelation::Daughter];
const GRANDCHILDREN: [HeirRelation; 2] = [HeirRelation::SonOfSon, HeirRelation::DaughterOfSon];
const PARENTS: [HeirRelation; 2] = [HeirRelation::Father, HeirRelation::Mother];
const SIBLINGS: [HeirRelation; 6] = [
    HeirRelation::BrotherFull,
    HeirRelation::SisterFull,
    HeirRelation::BrotherPaternal,
    HeirRelation::SisterPaternal,
    HeirRelation::BrotherMaternal,
    HeirRelation::SisterMaternal,
];
const FULL_SIBLINGS: [HeirRelation; 3] = [
    HeirRelation::BrotherFull,
    HeirRelation::SisterFull,
    HeirRelation::SonOfBrotherFull,
];
const PATERNAL_HALF_SIBLINGS: [HeirRelation; 3] = [
    HeirRelation::BrotherPaternal,
    HeirRelation::SisterPaternal,
    HeirRelation::SonOfBrotherPaternal,
];
const MATERNAL_HALF_SIBLINGS: [HeirRelation; 2] =
    [HeirRelation::BrotherMaternal, HeirRelation::SisterMaternal];
const NEPHEWS: [HeirRelation; 2] =
    [HeirRelation::SonOfBrotherFull, HeirRelation::SonOfBrotherPaternal];

/// Computes KUHPerdata shares for a validated case
#[tracing::instrument(skip_all, fields(case_id = %input.case_id))]
pub fn distribute(input: &InheritanceInput) -> Result<Distribution, InheritanceError> {
    let family = Family::from_heirs(&input.heirs, input.deceased.gender);
    let mut distribution = Distribution::default();
    distribution.explain(format!("Sistem hukum: {}", LawSystem::Perdata));

    let Some(class) = family.relations().map(golongan).min() else {
        distribution.warn(
            WarningKind::Escheat,
            "Tidak ada ahli waris dalam Golongan I sampai IV; harta jatuh kepada negara",
        );
        return Ok(distribution);
    };

    tracing::debug!(class = %class, "Selected inheriting class");
    distribution.explain(format!(
        "{} adalah golongan tertinggi yang memiliki ahli waris; golongan di bawahnya tertutup",
        class
    ));

    for relation in family.relations().filter(|r| golongan(*r) > class) {
        distribution.set(
            relation,
            GroupShare::blocked(format!(
                "{} ({}) tertutup oleh ahli waris {}",
                family.label(relation),
                golongan(relation),
                class
            )),
        );
    }

    match class {
        Golongan::First => first_class(&family, &mut distribution)?,
        Golongan::Second => second_class(&family, &mut distribution)?,
        Golongan::Third => per_capita(
            &family,
            &mut distribution,
            Golongan::Third,
            &[HeirRelation::Grandfather, HeirRelation::Grandmother],
        )?,
        Golongan::Fourth => {
            if family.has(HeirRelation::UnclePaternal) {
                block_further_degree(
                    &family,
                    &mut distribution,
                    HeirRelation::SonOfUncle,
                    HeirRelation::UnclePaternal,
                );
                per_capita(&family, &mut distribution, Golongan::Fourth, &[HeirRelation::UnclePaternal])?;
            } else {
                per_capita(&family, &mut distribution, Golongan::Fourth, &[HeirRelation::SonOfUncle])?;
            }
        }
    }

    Ok(distribution)
}

/// Spouse and descendants: the spouse counts as one child
fn first_class(family: &Family, distribution: &mut Distribution) -> Result<(), InheritanceError> {
    let descendants: &[HeirRelation] = if family.total(&CHILDREN) > 0 {
        let nearer = if family.has(HeirRelation::Son) {
            HeirRelation::Son
        } else {
            HeirRelation::Daughter
        };
        for grandchild in GRANDCHILDREN {
            block_further_degree(family, distribution, grandchild, nearer);
        }
        &CHILDREN
    } else {
        if family.total(&GRANDCHILDREN) > 0 {
            distribution.explain("Cucu mewaris karena penggantian tempat (tidak ada anak yang hidup)");
        }
        &GRANDCHILDREN
    };

    let mut members: Vec<HeirRelation> = Vec::new();
    if family.has(HeirRelation::Spouse) {
        members.push(HeirRelation::Spouse);
    }
    members.extend(descendants.iter().copied());

    if family.has(HeirRelation::Spouse) && family.total(descendants) > 0 {
        distribution.explain(format!(
            "{} dipersamakan dengan satu orang anak",
            family.label(HeirRelation::Spouse)
        ));
    }

    per_capita(family, distribution, Golongan::First, &members)
}

/// Parents and siblings
fn second_class(family: &Family, distribution: &mut Distribution) -> Result<(), InheritanceError> {
    let parents = family.total(&PARENTS);
    let real_siblings = family.total(&SIBLINGS);

    if let Some(nearer) = SIBLINGS.into_iter().find(|r| family.has(*r)) {
        for nephew in NEPHEWS {
            block_further_degree(family, distribution, nephew, nearer);
        }
    } else if NEPHEWS.into_iter().any(|r| family.has(r)) {
        distribution.explain(
            "Keponakan mewaris karena penggantian tempat (tidak ada saudara yang hidup); \
             setiap kelompok keponakan menggantikan satu saudara",
        );
    }

    // Nephews count per represented sibling, not per head
    let siblings = if real_siblings > 0 {
        real_siblings
    } else {
        NEPHEWS.into_iter().filter(|r| family.has(*r)).count() as i64
    };

    let (parent_share, rule) = match (parents, siblings) {
        (0, _) => (Fraction::ZERO, "tidak ada orang tua"),
        (p, 0) => (Fraction::new(1, p)?, "orang tua berbagi rata karena tidak ada saudara"),
        (2, 1) => (Fraction::new(1, 3)?, "Pasal 854: masing-masing orang tua 1/3 bersama satu saudara"),
        (2, _) => (Fraction::new(1, 4)?, "Pasal 854: masing-masing orang tua 1/4 bersama dua saudara atau lebih"),
        (_, 1) => (Fraction::new(1, 2)?, "Pasal 855: orang tua tunggal 1/2 bersama satu saudara"),
        (_, 2) => (Fraction::new(1, 3)?, "Pasal 855: orang tua tunggal 1/3 bersama dua saudara"),
        (_, _) => (Fraction::new(1, 4)?, "Pasal 855: orang tua tunggal 1/4 bersama tiga saudara atau lebih"),
    };
    distribution.explain(format!("Bagian orang tua: {}", rule));

    for parent in PARENTS.into_iter().filter(|r| family.has(*r)) {
        distribution.set(
            parent,
            GroupShare::new(
                parent_share,
                ShareBasis::CivilClass(Golongan::Second),
                format!("{} mendapat {} ({})", family.label(parent), parent_share, rule),
            ),
        );
    }

    if siblings > 0 {
        let sibling_portion = Fraction::ONE - parent_share.times(parents);
        distribution.explain(format!("Bagian seluruh saudara: {}", sibling_portion));
        siblings_portion(family, distribution, sibling_portion)?;
    }

    Ok(())
}

/// Divides the siblings' portion (Pasal 857)
///
/// Whole-blood siblings share equally. When half-blood siblings are present
/// the portion is halved between the paternal line (whole-blood and paternal
/// half-blood) and the maternal line (whole-blood and maternal half-blood);
/// whole-blood siblings take from both halves.
fn siblings_portion(
    family: &Family,
    distribution: &mut Distribution,
    portion: Fraction,
) -> Result<(), InheritanceError> {
    let present = |relations: &[HeirRelation]| -> Vec<(HeirRelation, i64, i64)> {
        relations
            .iter()
            .filter(|r| family.has(**r) && !is_blocked(distribution, **r))
            .map(|r| (*r, 1, branch_count(family, *r)))
            .collect()
    };
    let full = present(&FULL_SIBLINGS);
    let paternal = present(&PATERNAL_HALF_SIBLINGS);
    let maternal = present(&MATERNAL_HALF_SIBLINGS);

    let mut shares: Vec<(HeirRelation, Fraction)> = Vec::new();
    if paternal.is_empty() && maternal.is_empty() {
        shares = split_by_weight(portion, &full)?;
        distribution.explain("Saudara kandung berbagi rata");
    } else {
        distribution.explain("Ada saudara tiri: bagian saudara dibelah dua untuk garis ayah dan garis ibu (Pasal 857)");
        let paternal_line: Vec<_> = full.iter().chain(paternal.iter()).copied().collect();
        let maternal_line: Vec<_> = full.iter().chain(maternal.iter()).copied().collect();
        let (paternal_half, maternal_half) = match (paternal_line.is_empty(), maternal_line.is_empty()) {
            (true, _) => (Fraction::ZERO, portion),
            (_, true) => (portion, Fraction::ZERO),
            _ => (portion * Fraction::new(1, 2)?, portion * Fraction::new(1, 2)?),
        };
        for (relation, share) in split_by_weight(paternal_half, &paternal_line)?
            .into_iter()
            .chain(split_by_weight(maternal_half, &maternal_line)?)
        {
            match shares.iter_mut().find(|(r, _)| *r == relation) {
                Some((_, existing)) => *existing = *existing + share,
                None => shares.push((relation, share)),
            }
        }
    }

    for (relation, share) in shares {
        distribution.set(
            relation,
            GroupShare::new(
                share,
                ShareBasis::CivilClass(Golongan::Second),
                format!(
                    "{} mendapat {} dari bagian saudara ({})",
                    family.label(relation),
                    share,
                    Golongan::Second
                ),
            ),
        );
    }
    Ok(())
}

/// Equal per-capita division among the given relations
fn per_capita(
    family: &Family,
    distribution: &mut Distribution,
    class: Golongan,
    relations: &[HeirRelation],
) -> Result<(), InheritanceError> {
    let members: Vec<(HeirRelation, i64, i64)> = relations
        .iter()
        .filter(|r| family.has(**r) && !is_blocked(distribution, **r))
        .map(|r| (*r, 1, family.count(*r)))
        .collect();
    let heads: i64 = members.iter().map(|(_, _, count)| count).sum();
    distribution.explain(format!(
        "Harta dibagi rata untuk {} orang ahli waris {}",
        heads, class
    ));

    for (relation, share) in split_by_weight(Fraction::ONE, &members)? {
        let count = family.count(relation);
        let per_head = share.split(count)?;
        distribution.set(
            relation,
            GroupShare::new(
                share,
                ShareBasis::CivilClass(class),
                format!(
                    "{} mendapat {} per orang dari pembagian rata {} ({} bagian)",
                    family.label(relation),
                    per_head,
                    class,
                    heads
                ),
            ),
        );
    }
    Ok(())
}

fn block_further_degree(
    family: &Family,
    distribution: &mut Distribution,
    relation: HeirRelation,
    nearer: HeirRelation,
) {
    if family.has(relation) {
        distribution.set(
            relation,
            GroupShare::blocked(format!(
                "{} tertutup oleh {} yang derajatnya lebih dekat",
                family.label(relation),
                family.label(nearer)
            )),
        );
    }
}

/// Head count of a sibling group; a nephew group stands in for one sibling
fn branch_count(family: &Family, relation: HeirRelation) -> i64 {
    if NEPHEWS.contains(&relation) {
        1
    } else {
        family.count(relation)
    }
}

fn is_blocked(distribution: &Distribution, relation: HeirRelation) -> bool {
    distribution
        .groups
        .get(&relation)
        .is_some_and(|g| g.basis == ShareBasis::Blocked)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_relation_has_a_class() {
        for relation in HeirRelation::ALL {
            let _ = golongan(relation);
        }
        assert_eq!(golongan(HeirRelation::Spouse), Golongan::First);
        assert_eq!(golongan(HeirRelation::SonOfBrotherFull), Golongan::Second);
        assert_eq!(golongan(HeirRelation::Grandmother), Golongan::Third);
        assert_eq!(golongan(HeirRelation::SonOfUncle), Golongan::Fourth);
    }

    #[test]
    fn test_class_ordering_reflects_priority() {
        assert!(Golongan::First < Golongan::Second);
        assert!(Golongan::Third < Golongan::Fourth);
    }
}
