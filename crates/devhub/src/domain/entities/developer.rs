//! Developer - Registered developer record
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Developer - a single registry record
///
/// `id` is assigned by the repository when the record is created and never
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Developer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
}

/// Fields required to register a new Developer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDeveloper {
    pub name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
}

/// Partial update for a Developer
///
/// `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

impl Developer {
    /// Build a Developer from creation fields and an assigned id
    pub fn new(id: impl Into<String>, fields: NewDeveloper) -> Self {
        Self {
            id: id.into(),
            name: fields.name,
            email: fields.email,
            date_of_birth: fields.date_of_birth,
        }
    }

    /// Apply the supplied fields, keeping everything else (including `id`)
    pub fn apply(self, changes: &DeveloperChanges) -> Self {
        Self {
            id: self.id,
            name: changes.name.clone().unwrap_or(self.name),
            email: changes.email.clone().unwrap_or(self.email),
            date_of_birth: changes.date_of_birth.unwrap_or(self.date_of_birth),
        }
    }
}

impl DeveloperChanges {
    /// True when no field is supplied
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.date_of_birth.is_none()
    }
}
