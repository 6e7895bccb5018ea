//! Input validation and schedule auditing.
//!
//! Checks structural integrity of the configuration and patient list
//! before scheduling. Detects:
//! - Empty or duplicate roster entries
//! - Durations that are zero or cannot fit in the working window
//! - Degenerate working windows and slot steps
//! - Duplicate or blank patient records, and the reserved emergency type
//!
//! [`audit_schedule`] checks a finished schedule against the invariants
//! the allocator is meant to uphold (no double-booking, grid alignment,
//! durations matching the table, visits inside the window).

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::SchedulerConfig;
use crate::models::{Patient, Schedule, ScheduledVisit, SlotGrid};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same identity.
    DuplicateId,
    /// The roster has no staff.
    EmptyRoster,
    /// A visit type maps to zero minutes.
    ZeroDuration,
    /// A visit type is longer than the working window.
    DurationExceedsWindow,
    /// The working window is empty or inverted.
    InvalidWorkingWindow,
    /// The slot step is zero.
    ZeroSlotStep,
    /// The planning horizon is zero days.
    ZeroHorizon,
    /// A required text field is blank.
    MissingField,
    /// A caller supplied the reserved emergency visit type.
    ReservedVisitType,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a scheduler configuration.
///
/// Checks:
/// 1. Roster is not empty
/// 2. No duplicate staff names
/// 3. Working window is non-empty and within one day
/// 4. Slot step and horizon are positive
/// 5. Every configured duration is positive and fits in the window
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_config(config: &SchedulerConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if config.roster.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyRoster,
            "Roster is empty",
        ));
    }

    let mut names = HashSet::new();
    for staff in &config.roster {
        if staff.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingField,
                "Staff member has a blank name",
            ));
        } else if !names.insert(staff.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate staff name: {}", staff.name),
            ));
        }
    }

    let window = config.working_window;
    if window.start >= window.end || window.end > crate::models::calendar::MINUTES_PER_DAY {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidWorkingWindow,
            format!(
                "Working window {}-{} is empty or crosses midnight",
                crate::models::calendar::format_minutes(window.start),
                crate::models::calendar::format_minutes(window.end)
            ),
        ));
    }

    if config.slot_minutes == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroSlotStep,
            "Slot step must be positive",
        ));
    }

    if config.horizon_days == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroHorizon,
            "Planning horizon must be at least one day",
        ));
    }

    let mut durations: Vec<_> = config.durations.iter().collect();
    durations.sort_by(|a, b| a.0.as_str().cmp(b.0.as_str()));
    for (visit_type, minutes) in durations {
        if minutes == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroDuration,
                format!("Visit type '{visit_type}' has zero duration"),
            ));
        } else if minutes > window.len_minutes() {
            errors.push(ValidationError::new(
                ValidationErrorKind::DurationExceedsWindow,
                format!(
                    "Visit type '{visit_type}' lasts {minutes} min, longer than the {} min working window",
                    window.len_minutes()
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a single patient record entered by a collaborator.
pub fn validate_patient(patient: &Patient) -> ValidationResult {
    let mut errors = Vec::new();
    check_patient(patient, &mut errors);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a patient about to join `existing`.
///
/// Checks the record as [`validate_patient`] does, plus that its id is not
/// already taken.
pub fn validate_new_patient(existing: &[Patient], patient: &Patient) -> ValidationResult {
    let mut errors = Vec::new();
    check_patient(patient, &mut errors);
    check_unique_id(existing, patient, &mut errors);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a patient list.
///
/// Checks every record as [`validate_patient`] does, plus duplicate ids.
pub fn validate_patients(patients: &[Patient]) -> ValidationResult {
    let mut errors = Vec::new();

    for (i, patient) in patients.iter().enumerate() {
        check_patient(patient, &mut errors);
        check_unique_id(&patients[..i], patient, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_unique_id(existing: &[Patient], patient: &Patient, errors: &mut Vec<ValidationError>) {
    if !patient.id.trim().is_empty() && existing.iter().any(|p| p.id == patient.id) {
        errors.push(ValidationError::new(
            ValidationErrorKind::DuplicateId,
            format!("Duplicate patient ID: {}", patient.id),
        ));
    }
}

fn check_patient(patient: &Patient, errors: &mut Vec<ValidationError>) {
    for (field, value) in [
        ("name", &patient.name),
        ("id", &patient.id),
        ("diagnosis", &patient.diagnosis),
    ] {
        if value.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingField,
                format!("Patient '{}' has a blank {field}", patient.name),
            ));
        }
    }

    if patient.visit_type.is_reserved() {
        errors.push(ValidationError::new(
            ValidationErrorKind::ReservedVisitType,
            format!(
                "Patient '{}' uses the emergency visit type, which is reserved for emergency insertion",
                patient.name
            ),
        ));
    }
}

// ======================== Schedule audit ========================

/// A broken invariant found in a schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Offending visit id.
    pub visit_id: String,
    /// Human-readable description.
    pub message: String,
}

/// Classification of schedule violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationType {
    /// Two visits overlap for the same staff member and date.
    DoubleBooking,
    /// Start time is off the slot grid.
    MisalignedStart,
    /// Visit length differs from the duration table.
    DurationMismatch,
    /// Visit falls partly or fully outside the working window.
    OutsideWorkingWindow,
    /// Assigned staff member is not on the roster.
    UnknownStaff,
}

/// Audits a schedule against the allocator's invariants.
///
/// Returns every violation found; an empty vector means the schedule is
/// conflict-free, grid-aligned and duration-correct.
pub fn audit_schedule(schedule: &Schedule, config: &SchedulerConfig) -> Vec<Violation> {
    let mut violations = Vec::new();
    let grid: SlotGrid = config.slot_grid();
    let roster: HashSet<&str> = config.roster.iter().map(|s| s.name.as_str()).collect();

    for visit in schedule {
        if !roster.contains(visit.assigned_staff.as_str()) {
            violations.push(violation(
                ViolationType::UnknownStaff,
                visit,
                format!("Staff '{}' is not on the roster", visit.assigned_staff),
            ));
        }

        if !grid.is_aligned(visit.start_minute) {
            violations.push(violation(
                ViolationType::MisalignedStart,
                visit,
                format!("Start {} is off the {}-minute grid", visit.start_time(), grid.step),
            ));
        }

        let expected = config.durations.duration_for(&visit.visit_type);
        if visit.duration_minutes() != expected {
            violations.push(violation(
                ViolationType::DurationMismatch,
                visit,
                format!(
                    "{} visit lasts {} min, expected {expected}",
                    visit.visit_type,
                    visit.duration_minutes()
                ),
            ));
        }

        if !config.working_window.contains(&visit.range()) {
            violations.push(violation(
                ViolationType::OutsideWorkingWindow,
                visit,
                format!(
                    "{}-{} is outside the working window",
                    visit.start_time(),
                    visit.end_time()
                ),
            ));
        }
    }

    // Sweep each (staff, date) day in start order
    let mut days: HashMap<(&str, NaiveDate), Vec<&ScheduledVisit>> = HashMap::new();
    for visit in schedule {
        days.entry((visit.assigned_staff.as_str(), visit.date))
            .or_default()
            .push(visit);
    }

    let mut keys: Vec<_> = days.keys().copied().collect();
    keys.sort();
    for key in keys {
        let mut visits = days.remove(&key).unwrap_or_default();
        visits.sort_by_key(|v| (v.start_minute, v.end_minute));

        let mut latest: Option<&ScheduledVisit> = None;
        for visit in visits {
            if let Some(prev) = latest {
                if visit.range().overlaps(&prev.range()) {
                    violations.push(violation(
                        ViolationType::DoubleBooking,
                        visit,
                        format!(
                            "{} overlaps {} for {} on {}",
                            visit.visit_id, prev.visit_id, visit.assigned_staff, visit.date
                        ),
                    ));
                }
                if visit.end_minute > prev.end_minute {
                    latest = Some(visit);
                }
            } else {
                latest = Some(visit);
            }
        }
    }

    violations
}

fn violation(kind: ViolationType, visit: &ScheduledVisit, message: String) -> Violation {
    Violation {
        violation_type: kind,
        visit_id: visit.visit_id.clone(),
        message,
    }
}
