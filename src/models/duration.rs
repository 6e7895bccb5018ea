//! Visit duration table.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Minute, VisitType};

/// Duration used for visit types missing from the table.
pub const DEFAULT_VISIT_MINUTES: Minute = 30;

/// Fixed mapping from visit type to duration in minutes.
///
/// Serialized as a JSON object keyed by visit label, e.g.
/// `{"initial": 60, "follow-up": 30}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisitDurations {
    minutes: HashMap<VisitType, Minute>,
}

impl VisitDurations {
    /// Creates an empty table. Every lookup falls back to 30 minutes.
    pub fn empty() -> Self {
        Self {
            minutes: HashMap::new(),
        }
    }

    /// Sets the duration for a visit type.
    pub fn with(mut self, visit_type: VisitType, minutes: Minute) -> Self {
        self.minutes.insert(visit_type, minutes);
        self
    }

    /// Duration for a visit type, defaulting to 30 minutes.
    pub fn duration_for(&self, visit_type: &VisitType) -> Minute {
        self.minutes
            .get(visit_type)
            .copied()
            .unwrap_or(DEFAULT_VISIT_MINUTES)
    }

    /// Iterates over configured entries.
    pub fn iter(&self) -> impl Iterator<Item = (&VisitType, Minute)> {
        self.minutes.iter().map(|(k, v)| (k, *v))
    }
}

impl Default for VisitDurations {
    fn default() -> Self {
        Self::empty()
            .with(VisitType::Initial, 60)
            .with(VisitType::FollowUp, 30)
            .with(VisitType::Urgent, 60)
            .with(VisitType::Emergency, 90)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_durations() {
        let d = VisitDurations::default();
        assert_eq!(d.duration_for(&VisitType::Initial), 60);
        assert_eq!(d.duration_for(&VisitType::FollowUp), 30);
        assert_eq!(d.duration_for(&VisitType::Urgent), 60);
        assert_eq!(d.duration_for(&VisitType::Emergency), 90);
    }

    #[test]
    fn test_unknown_type_defaults_to_thirty() {
        let d = VisitDurations::default();
        assert_eq!(d.duration_for(&VisitType::Custom("dressing".into())), 30);
        assert_eq!(VisitDurations::empty().duration_for(&VisitType::Urgent), 30);
    }

    #[test]
    fn test_durations_from_json() {
        let d: VisitDurations =
            serde_json::from_str(r#"{"initial": 45, "dressing": 20}"#).unwrap();
        assert_eq!(d.duration_for(&VisitType::Initial), 45);
        assert_eq!(d.duration_for(&VisitType::Custom("dressing".into())), 20);
        assert_eq!(d.duration_for(&VisitType::Urgent), 30);
    }
}
