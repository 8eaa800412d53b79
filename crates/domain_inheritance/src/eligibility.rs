//! Heir eligibility and relation labels
//!
//! Every blood relation is always offered; only the single-spouse cap is
//! enforced here. Legal exclusion (hajb, class blocking) happens in the
//! distribution strategies.

use crate::deceased::{DeceasedInfo, Gender};
use crate::heir::{Heir, HeirRelation};

/// Relations that can still be added to a case, in display order
///
/// # Arguments
///
/// * `deceased` - The deceased; kept in the signature so attribute-based
///   exclusions have a single home
/// * `heirs` - Heirs already in the case
pub fn available_heir_relations(deceased: &DeceasedInfo, heirs: &[Heir]) -> Vec<HeirRelation> {
    let has_spouse = heirs.iter().any(|h| h.relation == HeirRelation::Spouse);

    let available: Vec<HeirRelation> = HeirRelation::ALL
        .iter()
        .copied()
        .filter(|relation| !(*relation == HeirRelation::Spouse && has_spouse))
        .collect();

    tracing::trace!(
        deceased_gender = ?deceased.gender,
        existing = heirs.len(),
        available = available.len(),
        "Resolved addable heir relations"
    );

    available
}

/// Indonesian label for a relation
pub fn relation_label(relation: HeirRelation) -> &'static str {
    match relation {
        HeirRelation::Spouse => "Suami/Istri",
        HeirRelation::Son => "Anak Laki-laki",
        HeirRelation::Daughter => "Anak Perempuan",
        HeirRelation::SonOfSon => "Cucu Laki-laki (dari Anak Laki-laki)",
        HeirRelation::DaughterOfSon => "Cucu Perempuan (dari Anak Laki-laki)",
        HeirRelation::Father => "Ayah",
        HeirRelation::Mother => "Ibu",
        HeirRelation::Grandfather => "Kakek",
        HeirRelation::Grandmother => "Nenek",
        HeirRelation::BrotherFull => "Saudara Laki-laki Kandung",
        HeirRelation::SisterFull => "Saudara Perempuan Kandung",
        HeirRelation::BrotherPaternal => "Saudara Laki-laki Seayah",
        HeirRelation::SisterPaternal => "Saudara Perempuan Seayah",
        HeirRelation::BrotherMaternal => "Saudara Laki-laki Seibu",
        HeirRelation::SisterMaternal => "Saudara Perempuan Seibu",
        HeirRelation::SonOfBrotherFull => "Keponakan Laki-laki (dari Saudara Kandung)",
        HeirRelation::SonOfBrotherPaternal => "Keponakan Laki-laki (dari Saudara Seayah)",
        HeirRelation::UnclePaternal => "Paman (Saudara Ayah)",
        HeirRelation::SonOfUncle => "Sepupu Laki-laki (Anak Paman)",
    }
}

/// Label resolved against the deceased's gender: the spouse becomes
/// "Istri" for a male deceased and "Suami" for a female deceased
pub fn relation_label_with_gender(relation: HeirRelation, deceased_gender: Gender) -> &'static str {
    match (relation, deceased_gender) {
        (HeirRelation::Spouse, Gender::Male) => "Istri",
        (HeirRelation::Spouse, Gender::Female) => "Suami",
        (other, _) => relation_label(other),
    }
}
