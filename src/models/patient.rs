//! Patient model.
//!
//! A patient is a unit of work to be scheduled: one visit of a given
//! type per planned day. Patients are created by the caller and are
//! read-only to the scheduler.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A patient needing homecare visits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    /// Patient name.
    pub name: String,
    /// Caller-assigned patient identifier.
    pub id: String,
    /// Free-text diagnosis.
    pub diagnosis: String,
    /// Visit category. Missing values read as follow-up.
    #[serde(default)]
    pub visit_type: VisitType,
}

/// Category of homecare visit. Determines visit duration.
///
/// Serialized as its lowercase label (`"initial"`, `"follow-up"`, ...).
/// Labels are matched case-insensitively; labels outside the known set are
/// kept as `Custom`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VisitType {
    /// First assessment visit.
    Initial,
    /// Routine follow-up.
    #[default]
    FollowUp,
    /// Urgent visit requested by the caller.
    Urgent,
    /// Emergency visit. Only produced by emergency insertion.
    Emergency,
    /// Any other label. Build it with [`VisitType::custom`] or by parsing,
    /// so a label naming a known type resolves to that type.
    Custom(String),
}

impl Patient {
    /// Creates a patient.
    pub fn new(
        name: impl Into<String>,
        id: impl Into<String>,
        diagnosis: impl Into<String>,
        visit_type: VisitType,
    ) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            diagnosis: diagnosis.into(),
            visit_type,
        }
    }

    /// Creates the synthetic patient used for an emergency insertion.
    pub fn emergency(
        name: impl Into<String>,
        id: impl Into<String>,
        diagnosis: impl Into<String>,
    ) -> Self {
        Self::new(name, id, diagnosis, VisitType::Emergency)
    }
}

impl VisitType {
    /// Visit type for a free-form label.
    ///
    /// Known labels in any case map to their variant; anything else becomes
    /// `Custom` with the trimmed label.
    pub fn custom(label: impl AsRef<str>) -> Self {
        match label.as_ref().parse() {
            Ok(v) => v,
            Err(never) => match never {},
        }
    }

    /// Canonical label.
    pub fn as_str(&self) -> &str {
        match self {
            VisitType::Initial => "initial",
            VisitType::FollowUp => "follow-up",
            VisitType::Urgent => "urgent",
            VisitType::Emergency => "emergency",
            VisitType::Custom(label) => label,
        }
    }

    /// Whether this type is reserved for internal emergency insertion.
    pub fn is_reserved(&self) -> bool {
        matches!(self, VisitType::Emergency)
    }
}

impl FromStr for VisitType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "initial" => VisitType::Initial,
            "follow-up" | "followup" | "follow_up" => VisitType::FollowUp,
            "urgent" => VisitType::Urgent,
            "emergency" => VisitType::Emergency,
            _ => VisitType::Custom(s.trim().to_string()),
        })
    }
}

impl From<String> for VisitType {
    fn from(value: String) -> Self {
        VisitType::custom(value)
    }
}

impl From<VisitType> for String {
    fn from(value: VisitType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for VisitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
