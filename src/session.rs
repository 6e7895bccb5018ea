//! Operator session.
//!
//! Owns the patient list and the current schedule for one interactive
//! operator, in place of a global store. Generating replaces the schedule;
//! emergency insertion appends to it. Not meant for concurrent writers.

use chrono::NaiveDate;
use rand::Rng;
use tracing::debug;

use crate::error::ScheduleError;
use crate::models::{Patient, Schedule, ScheduledVisit};
use crate::scheduler::{today, HomecareScheduler, ScheduleKpi};
use crate::validation::validate_new_patient;

/// Patient list and schedule for one operator.
#[derive(Debug, Clone, Default)]
pub struct Session {
    scheduler: HomecareScheduler,
    patients: Vec<Patient>,
    schedule: Schedule,
}

impl Session {
    /// Creates an empty session around a scheduler.
    pub fn new(scheduler: HomecareScheduler) -> Self {
        Self {
            scheduler,
            patients: Vec::new(),
            schedule: Schedule::new(),
        }
    }

    /// Adds a patient after validating it.
    ///
    /// Rejects blank fields, ids already in the session and the reserved
    /// emergency visit type.
    pub fn add_patient(&mut self, patient: Patient) -> Result<(), ScheduleError> {
        validate_new_patient(&self.patients, &patient).map_err(ScheduleError::InvalidPatient)?;
        debug!("Added patient {} ({})", patient.name, patient.id);
        self.patients.push(patient);
        Ok(())
    }

    /// Patients entered so far.
    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    /// Current schedule.
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// The scheduler in use.
    pub fn scheduler(&self) -> &HomecareScheduler {
        &self.scheduler
    }

    /// Replaces the schedule with a fresh weekly plan.
    ///
    /// Fails with [`ScheduleError::NoPatients`] when no patient was added.
    pub fn generate_schedule(&mut self, start_date: Option<NaiveDate>) -> Result<&Schedule, ScheduleError> {
        if self.patients.is_empty() {
            return Err(ScheduleError::NoPatients);
        }
        self.schedule = self
            .scheduler
            .generate_weekly_schedule(&self.patients, start_date);
        Ok(&self.schedule)
    }

    /// Inserts an emergency into the current schedule.
    ///
    /// `day` defaults to today. Returns `None` when nobody is free that day.
    pub fn insert_emergency<R: Rng + ?Sized>(
        &mut self,
        name: &str,
        id: &str,
        diagnosis: &str,
        day: Option<NaiveDate>,
        rng: &mut R,
    ) -> Option<ScheduledVisit> {
        let day = day.unwrap_or_else(today);
        self.scheduler
            .insert_emergency(&mut self.schedule, name, id, diagnosis, day, rng)
    }

    /// KPIs for the current schedule against the current patient list.
    pub fn kpi(&self) -> ScheduleKpi {
        ScheduleKpi::calculate(&self.schedule, self.patients.len(), self.scheduler.config())
    }
}
