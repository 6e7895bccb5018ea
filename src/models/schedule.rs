//! Schedule (solution) model.
//!
//! A schedule is the ordered, append-only list of visits placed so far.
//! Each visit copies the patient details it was created from, so later
//! changes to a patient record never rewrite history.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::calendar::{format_minutes, hhmm, Minute, MinuteRange};
use super::{Patient, StaffMember, StaffRole, VisitType};

/// A complete schedule of homecare visits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    visits: Vec<ScheduledVisit>,
}

/// A visit placed on a staff member's day.
///
/// Records that `assigned_staff` sees the patient on `date`
/// during `[start_minute, end_minute)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledVisit {
    /// Sequence identifier, e.g. `V0001`.
    pub visit_id: String,
    /// Calendar date of the visit.
    pub date: NaiveDate,
    /// Patient name at assignment time.
    pub patient_name: String,
    /// Patient identifier at assignment time.
    pub patient_id: String,
    /// Diagnosis at assignment time.
    pub diagnosis: String,
    /// Visit category.
    pub visit_type: VisitType,
    /// Name of the assigned staff member.
    pub assigned_staff: String,
    /// Role of the assigned staff member.
    pub staff_role: StaffRole,
    /// Start time (minutes since midnight). Serialized as `start_time`, `HH:MM`.
    #[serde(rename = "start_time", with = "hhmm")]
    pub start_minute: Minute,
    /// End time (minutes since midnight, exclusive). Serialized as `end_time`, `HH:MM`.
    #[serde(rename = "end_time", with = "hhmm")]
    pub end_minute: Minute,
}

impl ScheduledVisit {
    /// Creates a visit from the patient and staff it binds.
    pub fn new(
        visit_id: impl Into<String>,
        date: NaiveDate,
        patient: &Patient,
        staff: &StaffMember,
        slot: MinuteRange,
    ) -> Self {
        Self {
            visit_id: visit_id.into(),
            date,
            patient_name: patient.name.clone(),
            patient_id: patient.id.clone(),
            diagnosis: patient.diagnosis.clone(),
            visit_type: patient.visit_type.clone(),
            assigned_staff: staff.name.clone(),
            staff_role: staff.role,
            start_minute: slot.start,
            end_minute: slot.end,
        }
    }

    /// Occupied interval.
    #[inline]
    pub fn range(&self) -> MinuteRange {
        MinuteRange::new(self.start_minute, self.end_minute)
    }

    /// Visit length in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> Minute {
        self.range().duration()
    }

    /// Start time as `HH:MM`.
    pub fn start_time(&self) -> String {
        format_minutes(self.start_minute)
    }

    /// End time as `HH:MM`.
    pub fn end_time(&self) -> String {
        format_minutes(self.end_minute)
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a visit.
    pub fn push(&mut self, visit: ScheduledVisit) {
        self.visits.push(visit);
    }

    /// All visits in insertion order.
    pub fn visits(&self) -> &[ScheduledVisit] {
        &self.visits
    }

    /// Iterates over visits in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, ScheduledVisit> {
        self.visits.iter()
    }

    /// Number of visits.
    pub fn len(&self) -> usize {
        self.visits.len()
    }

    /// Whether the schedule has no visits.
    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    /// Visits held by one staff member on one date.
    pub fn visits_for_staff_on<'a>(
        &'a self,
        staff_name: &'a str,
        date: NaiveDate,
    ) -> impl Iterator<Item = &'a ScheduledVisit> + 'a {
        self.visits
            .iter()
            .filter(move |v| v.assigned_staff == staff_name && v.date == date)
    }

    /// Visits on a date, across all staff.
    pub fn visits_on(&self, date: NaiveDate) -> Vec<&ScheduledVisit> {
        self.visits.iter().filter(|v| v.date == date).collect()
    }

    /// Visits for one patient id.
    pub fn visits_for_patient(&self, patient_id: &str) -> Vec<&ScheduledVisit> {
        self.visits
            .iter()
            .filter(|v| v.patient_id == patient_id)
            .collect()
    }

    /// Finds a visit by id.
    pub fn find(&self, visit_id: &str) -> Option<&ScheduledVisit> {
        self.visits.iter().find(|v| v.visit_id == visit_id)
    }

    /// Number of visits assigned to a staff member across all dates.
    pub fn workload(&self, staff_name: &str) -> usize {
        self.visits
            .iter()
            .filter(|v| v.assigned_staff == staff_name)
            .count()
    }

    /// Visit count per staff member (only staff with visits appear).
    pub fn workloads(&self) -> HashMap<&str, usize> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for v in &self.visits {
            *counts.entry(v.assigned_staff.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Busy minutes per staff member across all dates.
    pub fn busy_minutes(&self) -> HashMap<&str, Minute> {
        let mut busy: HashMap<&str, Minute> = HashMap::new();
        for v in &self.visits {
            *busy.entry(v.assigned_staff.as_str()).or_insert(0) += v.duration_minutes();
        }
        busy
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a ScheduledVisit;
    type IntoIter = std::slice::Iter<'a, ScheduledVisit>;

    fn into_iter(self) -> Self::IntoIter {
        self.visits.iter()
    }
}

impl FromIterator<ScheduledVisit> for Schedule {
    fn from_iter<I: IntoIterator<Item = ScheduledVisit>>(iter: I) -> Self {
        Self {
            visits: iter.into_iter().collect(),
        }
    }
}
