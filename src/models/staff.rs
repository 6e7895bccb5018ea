//! Staff model.
//!
//! Staff members are the people who perform homecare visits. The roster
//! is fixed at startup; a member's name is their stable identity and is
//! what scheduled visits refer back to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A member of the homecare roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    /// Unique, stable name.
    pub name: String,
    /// Clinical role.
    pub role: StaffRole,
}

/// Clinical role of a staff member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StaffRole {
    /// Consultant-level specialist.
    Specialist,
    /// General practitioner.
    #[serde(rename = "GP")]
    Gp,
    /// Nurse.
    Nurse,
}

impl StaffMember {
    /// Creates a staff member.
    pub fn new(name: impl Into<String>, role: StaffRole) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }

    /// Creates a specialist.
    pub fn specialist(name: impl Into<String>) -> Self {
        Self::new(name, StaffRole::Specialist)
    }

    /// Creates a general practitioner.
    pub fn gp(name: impl Into<String>) -> Self {
        Self::new(name, StaffRole::Gp)
    }

    /// Creates a nurse.
    pub fn nurse(name: impl Into<String>) -> Self {
        Self::new(name, StaffRole::Nurse)
    }
}

impl StaffRole {
    /// Display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            StaffRole::Specialist => "Specialist",
            StaffRole::Gp => "GP",
            StaffRole::Nurse => "Nurse",
        }
    }
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The standard four-person roster.
pub fn default_roster() -> Vec<StaffMember> {
    vec![
        StaffMember::specialist("Dr. Ahmed"),
        StaffMember::specialist("Dr. Sara"),
        StaffMember::gp("Dr. Omar"),
        StaffMember::nurse("Nurse Fatima"),
    ]
}
