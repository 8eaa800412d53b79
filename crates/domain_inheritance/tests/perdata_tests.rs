//! KUHPerdata Distribution Tests
//!
//! Covers class priority, the spouse-as-child rule, Pasal 854/855/857 and
//! representation by grandchildren and nephews.

use core_kernel::{format_percentage, Fraction, Money};
use domain_inheritance::{
    calculate_inheritance, Golongan, HeirRelation, InheritanceResult, ShareBasis,
};
use proptest::prelude::*;
use rust_decimal_macros::dec;
use test_utils::{
    assert_amounts_consistent, assert_blocked, assert_fractions_sum_to_one,
    assert_percentages_sum_to_100, assert_share_amount, assert_share_fraction,
    estate_strategy, InheritanceInputBuilder, PerdataFixtures,
};

fn calculate(builder: InheritanceInputBuilder) -> InheritanceResult {
    let result = calculate_inheritance(&builder.build());
    assert_amounts_consistent(&result);
    assert_fractions_sum_to_one(&result);
    result
}

mod first_class {
    use super::*;

    #[test]
    fn test_spouse_counts_as_one_child() {
        let result = calculate_inheritance(&PerdataFixtures::spouse_and_two_children());

        for share in &result.shares {
            assert_eq!(share.fraction.to_string(), "1/3");
            assert_eq!(share.percentage, dec!(33.3333));
            assert_eq!(format_percentage(share.percentage), "33,33%");
            assert_eq!(share.amount, Money::from_rupiah(300_000_000));
            assert_eq!(share.basis, ShareBasis::CivilClass(Golongan::First));
        }
        assert_percentages_sum_to_100(&result);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_children_share_equally_regardless_of_gender() {
        let result = calculate(
            InheritanceInputBuilder::perdata()
                .heirs_of(HeirRelation::Son, 3)
                .heir(HeirRelation::Daughter),
        );

        assert_share_fraction(&result, HeirRelation::Son, 3, 4);
        assert_share_fraction(&result, HeirRelation::Daughter, 1, 4);
        let sons = result.shares_for(HeirRelation::Son).next().unwrap();
        assert_eq!(sons.amount_per_person, Money::from_rupiah(30_000_000));
    }

    #[test]
    fn test_spouse_alone_excludes_parents() {
        let result = calculate(
            InheritanceInputBuilder::perdata()
                .heir(HeirRelation::Spouse)
                .heir(HeirRelation::Father)
                .heir(HeirRelation::Mother),
        );

        assert_share_fraction(&result, HeirRelation::Spouse, 1, 1);
        assert_blocked(&result, HeirRelation::Father);
        assert_blocked(&result, HeirRelation::Mother);
    }

    #[test]
    fn test_children_exclude_lower_classes() {
        let result = calculate(
            InheritanceInputBuilder::perdata()
                .heir(HeirRelation::Son)
                .heir(HeirRelation::Father)
                .heir(HeirRelation::BrotherFull)
                .heir(HeirRelation::Grandmother)
                .heir(HeirRelation::UnclePaternal),
        );

        assert_share_fraction(&result, HeirRelation::Son, 1, 1);
        for relation in [
            HeirRelation::Father,
            HeirRelation::BrotherFull,
            HeirRelation::Grandmother,
            HeirRelation::UnclePaternal,
        ] {
            assert_blocked(&result, relation);
            let share = result.shares_for(relation).next().unwrap();
            assert_eq!(share.basis, ShareBasis::Blocked);
            assert!(share.explanation.contains("Golongan I"));
        }
    }

    #[test]
    fn test_grandchildren_blocked_by_children() {
        let result = calculate(
            InheritanceInputBuilder::perdata()
                .heir(HeirRelation::Daughter)
                .heir(HeirRelation::SonOfSon),
        );

        assert_share_fraction(&result, HeirRelation::Daughter, 1, 1);
        assert_blocked(&result, HeirRelation::SonOfSon);
        let grandson = result.shares_for(HeirRelation::SonOfSon).next().unwrap();
        assert!(grandson.explanation.contains("Anak Perempuan"));
    }

    #[test]
    fn test_grandchildren_represent_absent_children() {
        let result = calculate(
            InheritanceInputBuilder::perdata()
                .heir(HeirRelation::Spouse)
                .heir(HeirRelation::SonOfSon)
                .heirs_of(HeirRelation::DaughterOfSon, 2),
        );

        assert_share_fraction(&result, HeirRelation::Spouse, 1, 4);
        assert_share_fraction(&result, HeirRelation::SonOfSon, 1, 4);
        assert_share_fraction(&result, HeirRelation::DaughterOfSon, 1, 2);
        assert!(result
            .explanations
            .iter()
            .any(|e| e.contains("penggantian tempat")));
    }
}

mod second_class {
    use super::*;

    #[test]
    fn test_parents_with_one_sibling_pasal_854() {
        let result = calculate_inheritance(&PerdataFixtures::parents_and_one_brother());

        assert_share_fraction(&result, HeirRelation::Father, 1, 3);
        assert_share_fraction(&result, HeirRelation::Mother, 1, 3);
        assert_share_fraction(&result, HeirRelation::BrotherFull, 1, 3);
        assert_share_amount(&result, HeirRelation::BrotherFull, 40_000_000);
        assert_percentages_sum_to_100(&result);
    }

    #[test]
    fn test_parents_with_two_siblings_pasal_854() {
        let result = calculate(
            InheritanceInputBuilder::perdata()
                .heir(HeirRelation::Father)
                .heir(HeirRelation::Mother)
                .heir(HeirRelation::BrotherFull)
                .heir(HeirRelation::SisterFull),
        );

        assert_share_fraction(&result, HeirRelation::Father, 1, 4);
        assert_share_fraction(&result, HeirRelation::Mother, 1, 4);
        assert_share_fraction(&result, HeirRelation::BrotherFull, 1, 4);
        assert_share_fraction(&result, HeirRelation::SisterFull, 1, 4);
    }

    #[test]
    fn test_single_parent_pasal_855() {
        let one = calculate(
            InheritanceInputBuilder::perdata()
                .heir(HeirRelation::Mother)
                .heir(HeirRelation::SisterFull),
        );
        assert_share_fraction(&one, HeirRelation::Mother, 1, 2);
        assert_share_fraction(&one, HeirRelation::SisterFull, 1, 2);

        let two = calculate(
            InheritanceInputBuilder::perdata()
                .heir(HeirRelation::Father)
                .heirs_of(HeirRelation::BrotherFull, 2),
        );
        assert_share_fraction(&two, HeirRelation::Father, 1, 3);
        assert_share_fraction(&two, HeirRelation::BrotherFull, 2, 3);

        let many = calculate(
            InheritanceInputBuilder::perdata()
                .heir(HeirRelation::Mother)
                .heirs_of(HeirRelation::BrotherFull, 3),
        );
        assert_share_fraction(&many, HeirRelation::Mother, 1, 4);
        assert_share_fraction(&many, HeirRelation::BrotherFull, 3, 4);
    }

    #[test]
    fn test_parents_without_siblings_share_equally() {
        let result = calculate(
            InheritanceInputBuilder::perdata()
                .heir(HeirRelation::Father)
                .heir(HeirRelation::Mother),
        );

        assert_share_fraction(&result, HeirRelation::Father, 1, 2);
        assert_share_fraction(&result, HeirRelation::Mother, 1, 2);
    }

    #[test]
    fn test_half_siblings_split_by_line_pasal_857() {
        let result = calculate(
            InheritanceInputBuilder::perdata()
                .heir(HeirRelation::BrotherFull)
                .heir(HeirRelation::SisterPaternal)
                .heir(HeirRelation::BrotherMaternal),
        );

        // Whole-blood brother takes from both halves
        assert_share_fraction(&result, HeirRelation::BrotherFull, 1, 2);
        assert_share_fraction(&result, HeirRelation::SisterPaternal, 1, 4);
        assert_share_fraction(&result, HeirRelation::BrotherMaternal, 1, 4);
    }

    #[test]
    fn test_half_siblings_with_parent() {
        let result = calculate(
            InheritanceInputBuilder::perdata()
                .heir(HeirRelation::Mother)
                .heir(HeirRelation::BrotherPaternal)
                .heir(HeirRelation::SisterMaternal),
        );

        // Mother 1/3 with two siblings; the remaining 2/3 halves by line
        assert_share_fraction(&result, HeirRelation::Mother, 1, 3);
        assert_share_fraction(&result, HeirRelation::BrotherPaternal, 1, 3);
        assert_share_fraction(&result, HeirRelation::SisterMaternal, 1, 3);
    }

    #[test]
    fn test_paternal_half_siblings_alone_take_whole_portion() {
        let result = calculate(
            InheritanceInputBuilder::perdata()
                .heirs_of(HeirRelation::BrotherPaternal, 2),
        );

        assert_share_fraction(&result, HeirRelation::BrotherPaternal, 1, 1);
    }

    #[test]
    fn test_nephews_blocked_by_siblings() {
        let result = calculate(
            InheritanceInputBuilder::perdata()
                .heir(HeirRelation::SisterFull)
                .heir(HeirRelation::SonOfBrotherFull),
        );

        assert_share_fraction(&result, HeirRelation::SisterFull, 1, 1);
        assert_blocked(&result, HeirRelation::SonOfBrotherFull);
    }

    #[test]
    fn test_nephews_represent_absent_siblings() {
        let result = calculate(
            InheritanceInputBuilder::perdata()
                .heir(HeirRelation::Mother)
                .heir(HeirRelation::SonOfBrotherFull),
        );

        assert_share_fraction(&result, HeirRelation::Mother, 1, 2);
        assert_share_fraction(&result, HeirRelation::SonOfBrotherFull, 1, 2);
    }

    #[test]
    fn test_nephews_of_one_brother_count_as_one_sibling() {
        let result = calculate(
            InheritanceInputBuilder::perdata()
                .heir(HeirRelation::Father)
                .heirs_of(HeirRelation::SonOfBrotherFull, 3),
        );

        // Pasal 855 with one represented sibling, not three
        assert_share_fraction(&result, HeirRelation::Father, 1, 2);
        assert_share_fraction(&result, HeirRelation::SonOfBrotherFull, 1, 2);
        let nephews = result.shares_for(HeirRelation::SonOfBrotherFull).next().unwrap();
        assert_eq!(nephews.amount_per_person, Money::from_rupiah(20_000_000));
    }

    #[test]
    fn test_nephew_groups_split_by_line_per_branch() {
        let result = calculate(
            InheritanceInputBuilder::perdata()
                .heir(HeirRelation::Mother)
                .heirs_of(HeirRelation::SonOfBrotherFull, 3)
                .heirs_of(HeirRelation::SonOfBrotherPaternal, 2),
        );

        // Two represented siblings: mother 1/3, the rest halved by line
        assert_share_fraction(&result, HeirRelation::Mother, 1, 3);
        assert_share_fraction(&result, HeirRelation::SonOfBrotherFull, 1, 2);
        assert_share_fraction(&result, HeirRelation::SonOfBrotherPaternal, 1, 6);
    }

    #[test]
    fn test_parents_exclude_grandparents() {
        let result = calculate(
            InheritanceInputBuilder::perdata()
                .heir(HeirRelation::Mother)
                .heir(HeirRelation::Grandfather),
        );

        assert_share_fraction(&result, HeirRelation::Mother, 1, 1);
        assert_blocked(&result, HeirRelation::Grandfather);
    }
}

mod further_classes {
    use super::*;

    #[test]
    fn test_grandparents_per_capita() {
        let result = calculate_inheritance(&PerdataFixtures::grandparents());

        assert_share_fraction(&result, HeirRelation::Grandfather, 1, 2);
        assert_share_fraction(&result, HeirRelation::Grandmother, 1, 2);
        assert_share_amount(&result, HeirRelation::Grandmother, 60_000_000);
        let share = result.shares_for(HeirRelation::Grandfather).next().unwrap();
        assert_eq!(share.basis, ShareBasis::CivilClass(Golongan::Third));
    }

    #[test]
    fn test_grandparents_exclude_uncles() {
        let result = calculate(
            InheritanceInputBuilder::perdata()
                .heir(HeirRelation::Grandmother)
                .heir(HeirRelation::UnclePaternal),
        );

        assert_share_fraction(&result, HeirRelation::Grandmother, 1, 1);
        assert_blocked(&result, HeirRelation::UnclePaternal);
    }

    #[test]
    fn test_uncles_exclude_cousins() {
        let result = calculate(
            InheritanceInputBuilder::perdata()
                .heirs_of(HeirRelation::UnclePaternal, 2)
                .heir(HeirRelation::SonOfUncle),
        );

        assert_share_fraction(&result, HeirRelation::UnclePaternal, 1, 1);
        assert_blocked(&result, HeirRelation::SonOfUncle);
        let share = result.shares_for(HeirRelation::UnclePaternal).next().unwrap();
        assert_eq!(share.basis, ShareBasis::CivilClass(Golongan::Fourth));
        assert_eq!(share.amount_per_person, Money::from_rupiah(60_000_000));
    }

    #[test]
    fn test_cousins_inherit_without_uncles() {
        let result = calculate(
            InheritanceInputBuilder::perdata().heirs_of(HeirRelation::SonOfUncle, 4),
        );

        assert_share_fraction(&result, HeirRelation::SonOfUncle, 1, 1);
    }
}

proptest! {
    #[test]
    fn prop_children_and_spouse_share_equally(
        sons in 0u32..=20,
        daughters in 0u32..=20,
        with_spouse in any::<bool>(),
        estate in estate_strategy()
    ) {
        prop_assume!(sons + daughters > 0);

        let mut builder = InheritanceInputBuilder::perdata().with_estate(estate);
        if sons > 0 {
            builder = builder.heirs_of(HeirRelation::Son, sons);
        }
        if daughters > 0 {
            builder = builder.heirs_of(HeirRelation::Daughter, daughters);
        }
        if with_spouse {
            builder = builder.heir(HeirRelation::Spouse);
        }
        let result = calculate_inheritance(&builder.build());

        let heads = i64::from(sons + daughters + u32::from(with_spouse));
        for share in &result.shares {
            let count = i64::from(share.heir.effective_count());
            prop_assert_eq!(share.fraction, Fraction::new(count, heads).unwrap());
        }

        let per_person: Vec<_> = result.shares.iter().map(|s| s.amount_per_person.amount()).collect();
        let max = per_person.iter().max().unwrap();
        let min = per_person.iter().min().unwrap();
        prop_assert!(*max - *min <= dec!(0.05), "per-person amounts range from {} to {}", min, max);
        prop_assert_eq!(result.total_allocated(), result.net_estate);
    }
}
