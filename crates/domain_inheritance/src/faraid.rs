//! Faraid (Islamic law) distribution strategy
//!
//! # Algorithm
//!
//! 1. Decide, per relation present, whether it is blocked (mahjub), takes a
//!    fixed share (Dzawil Furudh), takes residue (Asabah), or both.
//! 2. Sum the fixed shares. Above one, every fixed share is scaled down (Aul).
//! 3. Otherwise the residue goes to the nearest residuary group, males taking
//!    twice the share of females.
//! 4. With residue left and no residuary heir, the residue is returned to the
//!    fixed-share heirs other than the spouse (Radd). With only a spouse, the
//!    residue is reported as unallocated.
//!
//! Siblings are excluded by the paternal grandfather (Hanafi position).

use std::collections::BTreeMap;

use core_kernel::Fraction;
use crate::case::{InheritanceInput, LawSystem};
use crate::deceased::Gender;
use crate::distribution::{split_by_weight, Distribution, Family, GroupShare};
use crate::error::InheritanceError;
use crate::heir::HeirRelation;
use crate::result::{ShareBasis, WarningKind};

/// Residuary (Asabah) groups in order of priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Agnate {
    Sons,
    Grandsons,
    Father,
    Grandfather,
    FullBrothers,
    FullSistersWithDaughters,
    PaternalBrothers,
    PaternalSistersWithDaughters,
    FullNephews,
    PaternalNephews,
    Uncles,
    Cousins,
}

impl Agnate {
    const ORDER: [Agnate; 12] = [
        Agnate::Sons,
        Agnate::Grandsons,
        Agnate::Father,
        Agnate::Grandfather,
        Agnate::FullBrothers,
        Agnate::FullSistersWithDaughters,
        Agnate::PaternalBrothers,
        Agnate::PaternalSistersWithDaughters,
        Agnate::FullNephews,
        Agnate::PaternalNephews,
        Agnate::Uncles,
        Agnate::Cousins,
    ];

    /// The relation that heads the group, named when it blocks others
    fn head(self) -> HeirRelation {
        match self {
            Agnate::Sons => HeirRelation::Son,
            Agnate::Grandsons => HeirRelation::SonOfSon,
            Agnate::Father => HeirRelation::Father,
            Agnate::Grandfather => HeirRelation::Grandfather,
            Agnate::FullBrothers => HeirRelation::BrotherFull,
            Agnate::FullSistersWithDaughters => HeirRelation::SisterFull,
            Agnate::PaternalBrothers => HeirRelation::BrotherPaternal,
            Agnate::PaternalSistersWithDaughters => HeirRelation::SisterPaternal,
            Agnate::FullNephews => HeirRelation::SonOfBrotherFull,
            Agnate::PaternalNephews => HeirRelation::SonOfBrotherPaternal,
            Agnate::Uncles => HeirRelation::UnclePaternal,
            Agnate::Cousins => HeirRelation::SonOfUncle,
        }
    }

    fn is_active(self, family: &Family, female_descendants: bool) -> bool {
        match self {
            Agnate::FullSistersWithDaughters | Agnate::PaternalSistersWithDaughters => {
                female_descendants && family.has(self.head())
            }
            _ => family.has(self.head()),
        }
    }
}

/// Outcome of the blocking and fixed-share rules for one relation
#[derive(Debug, Clone)]
enum Decision {
    Fixed { share: Fraction, reason: String },
    FixedAndResidue { share: Fraction, reason: String },
    Residuary { reason: String },
    Blocked { by: HeirRelation },
}

/// Facts about the family the share rules depend on
struct Context<'a> {
    family: &'a Family,
    any_descendants: bool,
    male_descendants: bool,
    female_descendants: bool,
    first_agnate: Option<Agnate>,
    spouse_share: Fraction,
}

impl<'a> Context<'a> {
    fn new(family: &'a Family) -> Result<Self, InheritanceError> {
        let male_descendants = family.has(HeirRelation::Son) || family.has(HeirRelation::SonOfSon);
        let female_descendants =
            family.has(HeirRelation::Daughter) || family.has(HeirRelation::DaughterOfSon);
        let any_descendants = male_descendants || female_descendants;

        let first_agnate = Agnate::ORDER
            .iter()
            .copied()
            .find(|agnate| agnate.is_active(family, female_descendants));

        let spouse_share = if family.has(HeirRelation::Spouse) {
            spouse_fraction(family.deceased_gender(), any_descendants)?
        } else {
            Fraction::ZERO
        };

        Ok(Self {
            family,
            any_descendants,
            male_descendants,
            female_descendants,
            first_agnate,
            spouse_share,
        })
    }

    /// The residuary group that excludes an agnate of the given priority, if any
    fn agnatic_blocker(&self, own: Agnate) -> Option<HeirRelation> {
        self.first_agnate
            .filter(|first| *first < own)
            .map(Agnate::head)
    }

    fn siblings(&self) -> i64 {
        self.family.total(&[
            HeirRelation::BrotherFull,
            HeirRelation::SisterFull,
            HeirRelation::BrotherPaternal,
            HeirRelation::SisterPaternal,
            HeirRelation::BrotherMaternal,
            HeirRelation::SisterMaternal,
        ])
    }

    /// Spouse and father alongside the mother with no descendants (Umariyyatain)
    ///
    /// Every other relative is either excluded by the father or, as two or
    /// more siblings, has already reduced the mother to 1/6.
    fn is_umariyyatain(&self) -> bool {
        self.family.has(HeirRelation::Spouse)
            && self.family.has(HeirRelation::Father)
            && !self.any_descendants
    }

    fn label(&self, relation: HeirRelation) -> &'static str {
        self.family.label(relation)
    }
}

fn frac(numerator: i64, denominator: i64) -> Result<Fraction, InheritanceError> {
    Ok(Fraction::new(numerator, denominator)?)
}

fn spouse_fraction(deceased_gender: Gender, descendants: bool) -> Result<Fraction, InheritanceError> {
    match (deceased_gender, descendants) {
        // husband
        (Gender::Female, true) => frac(1, 4),
        (Gender::Female, false) => frac(1, 2),
        // wife or wives, shared
        (Gender::Male, true) => frac(1, 8),
        (Gender::Male, false) => frac(1, 4),
    }
}

/// 1/2 for one female heir of a category, 2/3 shared for two or more
fn half_or_two_thirds(count: i64) -> Result<Fraction, InheritanceError> {
    if count == 1 {
        frac(1, 2)
    } else {
        frac(2, 3)
    }
}

fn decide(relation: HeirRelation, ctx: &Context<'_>) -> Result<Decision, InheritanceError> {
    let family = ctx.family;
    let count = family.count(relation);

    let decision = match relation {
        HeirRelation::Spouse => Decision::Fixed {
            share: ctx.spouse_share,
            reason: if ctx.any_descendants {
                "karena pewaris meninggalkan keturunan".to_string()
            } else {
                "karena pewaris tidak meninggalkan keturunan".to_string()
            },
        },

        HeirRelation::Son => Decision::Residuary {
            reason: if family.has(HeirRelation::Daughter) {
                "sebagai Asabah bersama anak perempuan (2:1)".to_string()
            } else {
                "sebagai Asabah".to_string()
            },
        },

        HeirRelation::Daughter => {
            if family.has(HeirRelation::Son) {
                Decision::Residuary {
                    reason: "sebagai Asabah bil ghair bersama anak laki-laki (2:1)".to_string(),
                }
            } else {
                Decision::Fixed {
                    share: half_or_two_thirds(count)?,
                    reason: if count == 1 {
                        "sebagai anak perempuan tunggal tanpa anak laki-laki".to_string()
                    } else {
                        "dibagi rata karena lebih dari satu anak perempuan tanpa anak laki-laki"
                            .to_string()
                    },
                }
            }
        }

        HeirRelation::SonOfSon => {
            if family.has(HeirRelation::Son) {
                Decision::Blocked { by: HeirRelation::Son }
            } else {
                Decision::Residuary {
                    reason: "sebagai Asabah menggantikan anak laki-laki".to_string(),
                }
            }
        }

        HeirRelation::DaughterOfSon => {
            let daughters = family.count(HeirRelation::Daughter);
            if family.has(HeirRelation::Son) {
                Decision::Blocked { by: HeirRelation::Son }
            } else if family.has(HeirRelation::SonOfSon) {
                Decision::Residuary {
                    reason: "sebagai Asabah bil ghair bersama cucu laki-laki (2:1)".to_string(),
                }
            } else if daughters >= 2 {
                Decision::Blocked { by: HeirRelation::Daughter }
            } else if daughters == 1 {
                Decision::Fixed {
                    share: frac(1, 6)?,
                    reason: "sebagai pelengkap 2/3 bersama satu anak perempuan".to_string(),
                }
            } else {
                Decision::Fixed {
                    share: half_or_two_thirds(count)?,
                    reason: "karena tidak ada anak".to_string(),
                }
            }
        }

        HeirRelation::Father => paternal_ancestor(ctx)?,

        HeirRelation::Grandfather => {
            if family.has(HeirRelation::Father) {
                Decision::Blocked { by: HeirRelation::Father }
            } else {
                paternal_ancestor(ctx)?
            }
        }

        HeirRelation::Mother => {
            if ctx.any_descendants {
                Decision::Fixed {
                    share: frac(1, 6)?,
                    reason: "karena pewaris meninggalkan keturunan".to_string(),
                }
            } else if ctx.siblings() >= 2 {
                Decision::Fixed {
                    share: frac(1, 6)?,
                    reason: "karena pewaris memiliki dua saudara atau lebih".to_string(),
                }
            } else if ctx.is_umariyyatain() {
                Decision::Fixed {
                    share: (Fraction::ONE - ctx.spouse_share) * frac(1, 3)?,
                    reason: format!(
                        "yaitu 1/3 dari sisa setelah bagian {} (Umariyyatain)",
                        ctx.label(HeirRelation::Spouse)
                    ),
                }
            } else {
                Decision::Fixed {
                    share: frac(1, 3)?,
                    reason: "karena tidak ada keturunan dan saudara kurang dari dua".to_string(),
                }
            }
        }

        HeirRelation::Grandmother => {
            if family.has(HeirRelation::Mother) {
                Decision::Blocked { by: HeirRelation::Mother }
            } else {
                Decision::Fixed {
                    share: frac(1, 6)?,
                    reason: "karena tidak ada ibu".to_string(),
                }
            }
        }

        HeirRelation::BrotherFull => match ctx.agnatic_blocker(Agnate::FullBrothers) {
            Some(by) => Decision::Blocked { by },
            None => Decision::Residuary {
                reason: "sebagai Asabah".to_string(),
            },
        },

        HeirRelation::SisterFull => {
            if let Some(by) = ctx.agnatic_blocker(Agnate::FullBrothers) {
                Decision::Blocked { by }
            } else if family.has(HeirRelation::BrotherFull) {
                Decision::Residuary {
                    reason: "sebagai Asabah bil ghair bersama saudara laki-laki kandung (2:1)"
                        .to_string(),
                }
            } else if ctx.female_descendants {
                Decision::Residuary {
                    reason: "sebagai Asabah ma'al ghair bersama keturunan perempuan".to_string(),
                }
            } else {
                Decision::Fixed {
                    share: half_or_two_thirds(count)?,
                    reason: "karena tidak ada keturunan, ayah, maupun saudara laki-laki kandung"
                        .to_string(),
                }
            }
        }

        HeirRelation::BrotherPaternal => match ctx.agnatic_blocker(Agnate::PaternalBrothers) {
            Some(by) => Decision::Blocked { by },
            None => Decision::Residuary {
                reason: "sebagai Asabah".to_string(),
            },
        },

        HeirRelation::SisterPaternal => {
            let full_sisters = family.count(HeirRelation::SisterFull);
            if let Some(by) = ctx.agnatic_blocker(Agnate::PaternalBrothers) {
                Decision::Blocked { by }
            } else if family.has(HeirRelation::BrotherPaternal) {
                Decision::Residuary {
                    reason: "sebagai Asabah bil ghair bersama saudara laki-laki seayah (2:1)"
                        .to_string(),
                }
            } else if ctx.female_descendants {
                Decision::Residuary {
                    reason: "sebagai Asabah ma'al ghair bersama keturunan perempuan".to_string(),
                }
            } else if full_sisters >= 2 {
                Decision::Blocked { by: HeirRelation::SisterFull }
            } else if full_sisters == 1 {
                Decision::Fixed {
                    share: frac(1, 6)?,
                    reason: "sebagai pelengkap 2/3 bersama satu saudara perempuan kandung"
                        .to_string(),
                }
            } else {
                Decision::Fixed {
                    share: half_or_two_thirds(count)?,
                    reason: "karena tidak ada saudara kandung".to_string(),
                }
            }
        }

        HeirRelation::BrotherMaternal | HeirRelation::SisterMaternal => {
            maternal_sibling(relation, ctx)?
        }

        HeirRelation::SonOfBrotherFull => agnate_only(ctx, Agnate::FullNephews),
        HeirRelation::SonOfBrotherPaternal => agnate_only(ctx, Agnate::PaternalNephews),
        HeirRelation::UnclePaternal => agnate_only(ctx, Agnate::Uncles),
        HeirRelation::SonOfUncle => agnate_only(ctx, Agnate::Cousins),
    };

    Ok(decision)
}

/// Father, or grandfather in the father's absence
fn paternal_ancestor(ctx: &Context<'_>) -> Result<Decision, InheritanceError> {
    Ok(if ctx.male_descendants {
        Decision::Fixed {
            share: frac(1, 6)?,
            reason: "karena pewaris meninggalkan keturunan laki-laki".to_string(),
        }
    } else if ctx.female_descendants {
        Decision::FixedAndResidue {
            share: frac(1, 6)?,
            reason: "ditambah sisa harta karena keturunan pewaris hanya perempuan".to_string(),
        }
    } else {
        Decision::Residuary {
            reason: "sebagai Asabah karena pewaris tidak meninggalkan keturunan".to_string(),
        }
    })
}

fn maternal_sibling(relation: HeirRelation, ctx: &Context<'_>) -> Result<Decision, InheritanceError> {
    let family = ctx.family;
    let descendant = [
        HeirRelation::Son,
        HeirRelation::Daughter,
        HeirRelation::SonOfSon,
        HeirRelation::DaughterOfSon,
    ]
    .into_iter()
    .find(|r| family.has(*r));

    let blocker = descendant
        .or_else(|| family.has(HeirRelation::Father).then_some(HeirRelation::Father))
        .or_else(|| family.has(HeirRelation::Grandfather).then_some(HeirRelation::Grandfather));
    if let Some(by) = blocker {
        return Ok(Decision::Blocked { by });
    }

    let maternal = family.total(&[HeirRelation::BrotherMaternal, HeirRelation::SisterMaternal]);
    Ok(if maternal == 1 {
        Decision::Fixed {
            share: frac(1, 6)?,
            reason: "sebagai satu-satunya saudara seibu".to_string(),
        }
    } else {
        Decision::Fixed {
            share: frac(1, 3)? * frac(family.count(relation), maternal)?,
            reason: format!(
                "bagian dari 1/3 yang dibagi rata untuk {} saudara seibu tanpa membedakan gender",
                maternal
            ),
        }
    })
}

fn agnate_only(ctx: &Context<'_>, own: Agnate) -> Decision {
    match ctx.agnatic_blocker(own) {
        Some(by) => Decision::Blocked { by },
        None => Decision::Residuary {
            reason: "sebagai Asabah karena tidak ada ahli waris laki-laki yang lebih dekat"
                .to_string(),
        },
    }
}

/// Scales fixed shares down so they sum to exactly one (Aul)
///
/// Each share is divided by the total of all shares: with a husband (1/4),
/// a mother (1/6) and two daughters (2/3) the total is 13/12 and the shares
/// become 3/13, 2/13 and 8/13.
pub fn apply_aul(shares: &[(HeirRelation, Fraction)]) -> Vec<(HeirRelation, Fraction)> {
    let total: Fraction = shares.iter().map(|(_, share)| *share).sum();
    if total <= Fraction::ONE {
        return shares.to_vec();
    }
    shares
        .iter()
        .map(|(relation, share)| (*relation, *share / total))
        .collect()
}

/// Returns the leftover to the fixed-share heirs (Radd)
///
/// The spouse keeps the fixed share and takes no part in the return. What
/// remains after the spouse is divided among every other fixed-share heir in
/// proportion to their fixed shares. A wife (1/8) with one daughter (1/2)
/// ends at 1/8 and 7/8; a mother (1/6) with one daughter (1/2) at 1/4 and 3/4.
///
/// When only the spouse holds a fixed share, the shares are returned unchanged.
pub fn apply_radd(shares: &[(HeirRelation, Fraction)]) -> Vec<(HeirRelation, Fraction)> {
    let spouse: Fraction = shares
        .iter()
        .filter(|(relation, _)| *relation == HeirRelation::Spouse)
        .map(|(_, share)| *share)
        .sum();
    let eligible: Fraction = shares
        .iter()
        .filter(|(relation, _)| *relation != HeirRelation::Spouse)
        .map(|(_, share)| *share)
        .sum();

    if !eligible.is_positive() {
        return shares.to_vec();
    }

    let pool = Fraction::ONE - spouse;
    shares
        .iter()
        .map(|(relation, share)| {
            if *relation == HeirRelation::Spouse {
                (*relation, *share)
            } else {
                (*relation, *share / eligible * pool)
            }
        })
        .collect()
}

/// Computes Faraid shares for a validated case
#[tracing::instrument(skip_all, fields(case_id = %input.case_id))]
pub fn distribute(input: &InheritanceInput) -> Result<Distribution, InheritanceError> {
    let family = Family::from_heirs(&input.heirs, input.deceased.gender);
    let mut distribution = Distribution::default();
    distribution.explain(format!("Sistem hukum: {}", LawSystem::Islam));

    if family.is_empty() {
        distribution.warn(
            WarningKind::UnallocatedResidue,
            "Tidak ada ahli waris; seluruh harta diserahkan ke Baitul Mal",
        );
        return Ok(distribution);
    }

    let ctx = Context::new(&family)?;
    let decisions: BTreeMap<HeirRelation, Decision> = family
        .relations()
        .map(|relation| Ok((relation, decide(relation, &ctx)?)))
        .collect::<Result<_, InheritanceError>>()?;

    // Fixed shares (Dzawil Furudh)
    let fixed: Vec<(HeirRelation, Fraction)> = decisions
        .iter()
        .filter_map(|(relation, decision)| match decision {
            Decision::Fixed { share, .. } | Decision::FixedAndResidue { share, .. } => {
                Some((*relation, *share))
            }
            _ => None,
        })
        .collect();
    let fixed_total: Fraction = fixed.iter().map(|(_, share)| *share).sum();
    distribution.explain(format!(
        "Jumlah bagian tetap (Dzawil Furudh): {}",
        fixed_total
    ));

    let residuaries: Vec<(HeirRelation, i64, i64)> = decisions
        .iter()
        .filter(|(_, decision)| {
            matches!(decision, Decision::Residuary { .. } | Decision::FixedAndResidue { .. })
        })
        .map(|(relation, _)| {
            let weight = match relation.gender(family.deceased_gender()) {
                Gender::Male => 2,
                Gender::Female => 1,
            };
            (*relation, weight, family.count(*relation))
        })
        .collect();

    let mut adjustment = Adjustment::None;
    let mut final_fixed: BTreeMap<HeirRelation, Fraction> = fixed.iter().copied().collect();
    let mut residue_shares: BTreeMap<HeirRelation, Fraction> = BTreeMap::new();

    if fixed_total > Fraction::ONE {
        adjustment = Adjustment::Aul;
        final_fixed = apply_aul(&fixed).into_iter().collect();
        tracing::debug!(fixed_total = %fixed_total, "Applied Aul");
        distribution.warn(
            WarningKind::Aul,
            format!(
                "Aul: jumlah bagian tetap {} melebihi harta; asal masalah naik dari {} menjadi {} \
                 dan setiap bagian tetap dikurangi secara proporsional",
                fixed_total,
                fixed_total.denominator(),
                fixed_total.numerator()
            ),
        );
        distribution.explain("Tidak ada sisa harta untuk Asabah karena terjadi Aul");
    } else {
        let residue = Fraction::ONE - fixed_total;
        distribution.explain(format!("Sisa harta setelah bagian tetap: {}", residue));

        if !residuaries.is_empty() {
            residue_shares = split_by_weight(residue, &residuaries)?.into_iter().collect();
            let names: Vec<&str> = residuaries.iter().map(|(r, _, _)| ctx.label(*r)).collect();
            distribution.explain(format!(
                "Sisa {} diberikan kepada Asabah: {}",
                residue,
                names.join(", ")
            ));
        } else if residue.is_positive() {
            let eligible = fixed.iter().any(|(relation, _)| *relation != HeirRelation::Spouse);
            if eligible {
                adjustment = Adjustment::Radd;
                final_fixed = apply_radd(&fixed).into_iter().collect();
                tracing::debug!(residue = %residue, "Applied Radd");
                distribution.warn(
                    WarningKind::Radd,
                    format!(
                        "Radd: sisa {} dikembalikan kepada ahli waris Dzawil Furudh selain \
                         suami/istri secara proporsional",
                        residue
                    ),
                );
            } else {
                tracing::debug!(residue = %residue, "Residue left unallocated");
                distribution.warn(
                    WarningKind::UnallocatedResidue,
                    format!(
                        "Sisa {} tidak memiliki ahli waris Asabah maupun ahli waris yang berhak \
                         atas Radd; sisa tersebut diserahkan ke Baitul Mal",
                        residue
                    ),
                );
            }
        }
    }

    for (relation, decision) in &decisions {
        let label = ctx.label(*relation);
        let share = match decision {
            Decision::Blocked { by } => GroupShare::blocked(format!(
                "{} terhalang (mahjub) oleh {}",
                label,
                ctx.label(*by)
            )),
            Decision::Fixed { share, reason } => {
                let adjusted = final_fixed.get(relation).copied().unwrap_or(*share);
                let basis = adjustment.basis_for(*relation);
                GroupShare::new(
                    adjusted,
                    basis,
                    format!(
                        "{} mendapat bagian tetap {} {}{}",
                        label,
                        share,
                        reason,
                        adjustment.note(basis, adjusted)
                    ),
                )
                .with_base(*share)
            }
            Decision::FixedAndResidue { share, reason } => {
                let adjusted = final_fixed.get(relation).copied().unwrap_or(*share);
                let residue = residue_shares.get(relation).copied().unwrap_or(Fraction::ZERO);
                let basis = if residue.is_positive() {
                    ShareBasis::FixedShareAndResidue
                } else {
                    adjustment.basis_for(*relation)
                };
                GroupShare::new(
                    adjusted + residue,
                    basis,
                    format!(
                        "{} mendapat bagian tetap {} {} (sisa {}){}",
                        label,
                        share,
                        reason,
                        residue,
                        adjustment.note(basis, adjusted)
                    ),
                )
                .with_base(*share)
            }
            Decision::Residuary { reason } => {
                let residue = residue_shares.get(relation).copied().unwrap_or(Fraction::ZERO);
                let suffix = if residue.is_positive() {
                    String::new()
                } else {
                    "; tidak ada sisa harta yang diterima".to_string()
                };
                GroupShare::new(
                    residue,
                    ShareBasis::Residue,
                    format!("{} menerima {} {}{}", label, residue, reason, suffix),
                )
            }
        };
        distribution.set(*relation, share);
    }

    Ok(distribution)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Adjustment {
    None,
    Aul,
    Radd,
}

impl Adjustment {
    fn basis_for(self, relation: HeirRelation) -> ShareBasis {
        match self {
            Adjustment::None => ShareBasis::FixedShare,
            Adjustment::Aul => ShareBasis::AulAdjusted,
            Adjustment::Radd if relation == HeirRelation::Spouse => ShareBasis::FixedShare,
            Adjustment::Radd => ShareBasis::RaddAdjusted,
        }
    }

    fn note(self, basis: ShareBasis, adjusted: Fraction) -> String {
        match basis {
            ShareBasis::AulAdjusted => format!(", disesuaikan karena Aul menjadi {}", adjusted),
            ShareBasis::RaddAdjusted => format!(", ditambah Radd menjadi {}", adjusted),
            _ if self == Adjustment::Radd => ", tidak ikut menerima Radd".to_string(),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn f(n: i64, d: i64) -> Fraction {
        Fraction::new(n, d).unwrap()
    }

    #[test]
    fn test_apply_aul_textbook_case() {
        let shares = vec![
            (HeirRelation::Spouse, f(1, 4)),
            (HeirRelation::Mother, f(1, 6)),
            (HeirRelation::Daughter, f(2, 3)),
        ];
        let adjusted = apply_aul(&shares);
        assert_eq!(adjusted[0].1, f(3, 13));
        assert_eq!(adjusted[1].1, f(2, 13));
        assert_eq!(adjusted[2].1, f(8, 13));
    }

    #[test]
    fn test_apply_aul_leaves_undersubscribed_shares() {
        let shares = vec![(HeirRelation::Mother, f(1, 6))];
        assert_eq!(apply_aul(&shares), shares);
    }

    #[test]
    fn test_apply_radd_excludes_spouse() {
        let shares = vec![(HeirRelation::Spouse, f(1, 8)), (HeirRelation::Daughter, f(1, 2))];
        let adjusted = apply_radd(&shares);
        assert_eq!(adjusted[0].1, f(1, 8));
        assert_eq!(adjusted[1].1, f(7, 8));
    }

    #[test]
    fn test_apply_radd_proportional_between_mother_and_daughter() {
        let shares = vec![(HeirRelation::Daughter, f(1, 2)), (HeirRelation::Mother, f(1, 6))];
        let adjusted = apply_radd(&shares);
        assert_eq!(adjusted[0].1, f(3, 4));
        assert_eq!(adjusted[1].1, f(1, 4));
    }

    #[test]
    fn test_apply_radd_spouse_only_unchanged() {
        let shares = vec![(HeirRelation::Spouse, f(1, 2))];
        assert_eq!(apply_radd(&shares), shares);
    }

    #[test]
    fn test_agnate_order_matches_priority() {
        assert!(Agnate::Sons < Agnate::Father);
        assert!(Agnate::Grandfather < Agnate::FullBrothers);
        assert!(Agnate::FullSistersWithDaughters < Agnate::PaternalBrothers);
    }
}
