//! Heirs and the closed set of kinship relations the engine understands
//!
//! Both distribution strategies match exhaustively on [`HeirRelation`], so a
//! new relation only compiles once the Faraid and KUHPerdata tables handle it.

use serde::{Deserialize, Serialize};

use core_kernel::HeirId;
use crate::deceased::Gender;

/// Upper bound for the head count of a single heir entry
pub const MAX_GROUP_SIZE: u32 = 100;

/// Kinship relation of an heir to the deceased
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeirRelation {
    /// Husband or wife of the deceased
    Spouse,
    Son,
    Daughter,
    /// Son's son
    SonOfSon,
    /// Son's daughter
    DaughterOfSon,
    Father,
    Mother,
    /// Father's father
    Grandfather,
    Grandmother,
    /// Brother sharing both parents
    BrotherFull,
    SisterFull,
    /// Brother sharing only the father
    BrotherPaternal,
    SisterPaternal,
    /// Brother sharing only the mother
    BrotherMaternal,
    SisterMaternal,
    /// Son of a full brother
    SonOfBrotherFull,
    /// Son of a paternal brother
    SonOfBrotherPaternal,
    /// Father's brother
    UnclePaternal,
    /// Son of the father's brother
    SonOfUncle,
}

impl HeirRelation {
    /// Every relation, in the order they are offered to the user
    pub const ALL: [HeirRelation; 19] = [
        HeirRelation::Spouse,
        HeirRelation::Son,
        HeirRelation::Daughter,
        HeirRelation::SonOfSon,
        HeirRelation::DaughterOfSon,
        HeirRelation::Father,
        HeirRelation::Mother,
        HeirRelation::Grandfather,
        HeirRelation::Grandmother,
        HeirRelation::BrotherFull,
        HeirRelation::SisterFull,
        HeirRelation::BrotherPaternal,
        HeirRelation::SisterPaternal,
        HeirRelation::BrotherMaternal,
        HeirRelation::SisterMaternal,
        HeirRelation::SonOfBrotherFull,
        HeirRelation::SonOfBrotherPaternal,
        HeirRelation::UnclePaternal,
        HeirRelation::SonOfUncle,
    ];

    /// Returns the gender implied by the relation
    ///
    /// A spouse is always of the opposite gender to the deceased.
    pub fn gender(&self, deceased_gender: Gender) -> Gender {
        match self {
            HeirRelation::Spouse => deceased_gender.opposite(),
            HeirRelation::Son
            | HeirRelation::SonOfSon
            | HeirRelation::Father
            | HeirRelation::Grandfather
            | HeirRelation::BrotherFull
            | HeirRelation::BrotherPaternal
            | HeirRelation::BrotherMaternal
            | HeirRelation::SonOfBrotherFull
            | HeirRelation::SonOfBrotherPaternal
            | HeirRelation::UnclePaternal
            | HeirRelation::SonOfUncle => Gender::Male,
            HeirRelation::Daughter
            | HeirRelation::DaughterOfSon
            | HeirRelation::Mother
            | HeirRelation::Grandmother
            | HeirRelation::SisterFull
            | HeirRelation::SisterPaternal
            | HeirRelation::SisterMaternal => Gender::Female,
        }
    }

    /// Whether one entry of this relation may stand for several people
    pub fn is_pluralizable(&self) -> bool {
        !matches!(
            self,
            HeirRelation::Spouse
                | HeirRelation::Father
                | HeirRelation::Mother
                | HeirRelation::Grandfather
        )
    }

    /// Whether the relation is a sibling of any kind
    pub fn is_sibling(&self) -> bool {
        matches!(
            self,
            HeirRelation::BrotherFull
                | HeirRelation::SisterFull
                | HeirRelation::BrotherPaternal
                | HeirRelation::SisterPaternal
                | HeirRelation::BrotherMaternal
                | HeirRelation::SisterMaternal
        )
    }

    /// Whether the relation is a descendant of the deceased
    pub fn is_descendant(&self) -> bool {
        matches!(
            self,
            HeirRelation::Son
                | HeirRelation::Daughter
                | HeirRelation::SonOfSon
                | HeirRelation::DaughterOfSon
        )
    }
}

/// A living heir (or group of heirs sharing one relation)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Heir {
    /// Unique identifier, generated at creation
    #[serde(default)]
    pub id: HeirId,
    /// Relation to the deceased
    pub relation: HeirRelation,
    /// Optional display label
    #[serde(default)]
    pub name: Option<String>,
    /// Must be true; deceased heirs are never part of a case
    #[serde(default = "default_alive")]
    pub is_alive: bool,
    /// Number of people this entry represents
    #[serde(default = "default_count")]
    pub count: u32,
}

fn default_alive() -> bool {
    true
}

fn default_count() -> u32 {
    1
}

impl Heir {
    /// Creates a single living heir with a fresh identifier
    pub fn new(relation: HeirRelation) -> Self {
        Self {
            id: HeirId::new_v7(),
            relation,
            name: None,
            is_alive: true,
            count: 1,
        }
    }

    /// Sets the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the head count
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Marks the heir as deceased
    pub fn deceased(mut self) -> Self {
        self.is_alive = false;
        self
    }

    /// Head count used by the distribution math
    ///
    /// Singular relations (spouse, father, mother, grandfather) always count as one.
    pub fn effective_count(&self) -> u32 {
        if self.relation.is_pluralizable() {
            self.count
        } else {
            1
        }
    }

    /// Returns the gender implied by the relation
    pub fn gender(&self, deceased_gender: Gender) -> Gender {
        self.relation.gender(deceased_gender)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spouse_gender_is_opposite_of_deceased() {
        assert_eq!(HeirRelation::Spouse.gender(Gender::Male), Gender::Female);
        assert_eq!(HeirRelation::Spouse.gender(Gender::Female), Gender::Male);
    }

    #[test]
    fn test_effective_count_ignores_count_for_singular_relations() {
        assert_eq!(Heir::new(HeirRelation::Father).with_count(3).effective_count(), 1);
        assert_eq!(Heir::new(HeirRelation::Son).with_count(3).effective_count(), 3);
    }

    #[test]
    fn test_all_contains_each_relation_once() {
        let mut relations = HeirRelation::ALL.to_vec();
        relations.sort();
        relations.dedup();
        assert_eq!(relations.len(), HeirRelation::ALL.len());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let heir: Heir = serde_json::from_str(r#"{"relation":"son_of_son"}"#).unwrap();
        assert_eq!(heir.relation, HeirRelation::SonOfSon);
        assert!(heir.is_alive);
        assert_eq!(heir.count, 1);
    }
}
