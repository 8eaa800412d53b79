//! The deceased (pewaris) whose estate is being distributed

use serde::{Deserialize, Serialize};

/// Biological gender, used for spouse labelling and the 2:1 residue rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Returns the opposite gender (the gender of a spouse)
    pub fn opposite(&self) -> Gender {
        match self {
            Gender::Male => Gender::Female,
            Gender::Female => Gender::Male,
        }
    }
}

/// Marital status of the deceased at the time of death
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    Married,
    Widowed,
    Divorced,
    Single,
}

/// Attributes of the deceased
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeceasedInfo {
    /// Name of the deceased
    pub name: String,
    /// Gender of the deceased
    pub gender: Gender,
    /// Marital status at death
    pub marital_status: MaritalStatus,
}

impl DeceasedInfo {
    pub fn new(name: impl Into<String>, gender: Gender, marital_status: MaritalStatus) -> Self {
        Self {
            name: name.into(),
            gender,
            marital_status,
        }
    }
}
