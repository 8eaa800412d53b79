//! Heir eligibility and labelling tests

use domain_inheritance::{
    available_heir_relations, relation_label, relation_label_with_gender, DeceasedInfo, Gender,
    Heir, HeirRelation, MaritalStatus,
};

fn deceased(gender: Gender) -> DeceasedInfo {
    DeceasedInfo::new("Pewaris", gender, MaritalStatus::Married)
}

mod available_relations {
    use super::*;

    #[test]
    fn test_spouse_offered_until_added() {
        let before = available_heir_relations(&deceased(Gender::Female), &[]);
        assert!(before.contains(&HeirRelation::Spouse));

        let heirs = vec![Heir::new(HeirRelation::Spouse)];
        let after = available_heir_relations(&deceased(Gender::Female), &heirs);
        assert!(!after.contains(&HeirRelation::Spouse));
    }

    #[test]
    fn test_order_is_stable() {
        let heirs = vec![Heir::new(HeirRelation::Spouse)];
        let relations = available_heir_relations(&deceased(Gender::Male), &heirs);
        assert_eq!(relations.first(), Some(&HeirRelation::Son));
        assert_eq!(relations.last(), Some(&HeirRelation::SonOfUncle));
    }

    #[test]
    fn test_same_for_both_genders() {
        let male = available_heir_relations(&deceased(Gender::Male), &[]);
        let female = available_heir_relations(&deceased(Gender::Female), &[]);
        assert_eq!(male, female);
    }
}

mod labels {
    use super::*;

    #[test]
    fn test_spouse_label_by_deceased_gender() {
        assert_eq!(relation_label_with_gender(HeirRelation::Spouse, Gender::Male), "Istri");
        assert_eq!(relation_label_with_gender(HeirRelation::Spouse, Gender::Female), "Suami");
        assert_eq!(relation_label(HeirRelation::Spouse), "Suami/Istri");
    }

    #[test]
    fn test_other_labels_ignore_gender() {
        for relation in HeirRelation::ALL.into_iter().filter(|r| *r != HeirRelation::Spouse) {
            assert_eq!(
                relation_label_with_gender(relation, Gender::Male),
                relation_label_with_gender(relation, Gender::Female)
            );
        }
        assert_eq!(relation_label(HeirRelation::SisterPaternal), "Saudara Perempuan Seayah");
    }

    #[test]
    fn test_every_label_is_distinct() {
        let mut labels: Vec<_> = HeirRelation::ALL.iter().map(|r| relation_label(*r)).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), HeirRelation::ALL.len());
    }
}

mod relations {
    use super::*;

    #[test]
    fn test_relation_gender() {
        assert_eq!(HeirRelation::Spouse.gender(Gender::Male), Gender::Female);
        assert_eq!(HeirRelation::Spouse.gender(Gender::Female), Gender::Male);
        assert_eq!(HeirRelation::SisterMaternal.gender(Gender::Male), Gender::Female);
        assert_eq!(HeirRelation::SonOfUncle.gender(Gender::Female), Gender::Male);
    }

    #[test]
    fn test_singular_relations_count_once() {
        let father = Heir::new(HeirRelation::Father).with_count(3);
        assert_eq!(father.effective_count(), 1);
        let sons = Heir::new(HeirRelation::Son).with_count(3);
        assert_eq!(sons.effective_count(), 3);
    }

    #[test]
    fn test_relation_serializes_snake_case() {
        let json = serde_json::to_string(&HeirRelation::SonOfBrotherPaternal).unwrap();
        assert_eq!(json, "\"son_of_brother_paternal\"");
    }
}
