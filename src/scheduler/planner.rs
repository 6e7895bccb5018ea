//! Weekly planner.
//!
//! # Algorithm
//!
//! 1. Days are the outer loop, patients (in input order) the inner loop.
//! 2. For each (day, patient), rank staff by workload against the schedule
//!    built so far.
//! 3. Try each candidate with the slot allocator; the first free slot wins.
//! 4. Append the visit immediately so later iterations see it.
//!
//! A patient with no free candidate that day gets no visit that day. There
//! is no retry on a later day and no rebalancing of earlier assignments.
//!
//! # Complexity
//! O(d * p * c * g * v) where d=days, p=patients, c=staff, g=grid probes,
//! v=visits already placed.

use chrono::{Days, Local, NaiveDate};
use tracing::{debug, info};

use super::allocator::book_first_available;
use crate::config::SchedulerConfig;
use crate::models::{Patient, Schedule};
use crate::ranking::rank_candidates;

/// Greedy homecare visit scheduler.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use homecare_schedule::config::SchedulerConfig;
/// use homecare_schedule::models::{Patient, VisitType};
/// use homecare_schedule::scheduler::HomecareScheduler;
///
/// let patients = vec![
///     Patient::new("Mona", "P1", "COPD", VisitType::Initial),
///     Patient::new("Ali", "P2", "post-op wound", VisitType::FollowUp),
/// ];
/// let monday = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
///
/// let scheduler = HomecareScheduler::new(SchedulerConfig::default());
/// let schedule = scheduler.generate_weekly_schedule(&patients, Some(monday));
/// assert_eq!(schedule.len(), 14);
/// assert_eq!(schedule.visits()[0].visit_id, "V0001");
/// ```
#[derive(Debug, Clone, Default)]
pub struct HomecareScheduler {
    config: SchedulerConfig,
}

impl HomecareScheduler {
    /// Creates a scheduler over the given configuration.
    pub fn new(config: SchedulerConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Plans visits for every patient across the horizon.
    ///
    /// `start_date` defaults to today (local time). Returns a fresh
    /// schedule with at most one visit per patient per day.
    pub fn generate_weekly_schedule(
        &self,
        patients: &[Patient],
        start_date: Option<NaiveDate>,
    ) -> Schedule {
        let start = start_date.unwrap_or_else(today);
        let mut schedule = Schedule::new();
        self.plan_into(&mut schedule, patients, start);
        schedule
    }

    /// Plans the horizon starting at `start` on top of an existing schedule.
    ///
    /// Earlier visits count toward workload and block their slots.
    /// Returns the number of visits added.
    pub fn plan_into(&self, schedule: &mut Schedule, patients: &[Patient], start: NaiveDate) -> usize {
        let grid = self.config.slot_grid();
        let before = schedule.len();
        let mut dropped = 0usize;

        info!(
            "Planning {} patients over {} days from {}",
            patients.len(),
            self.config.horizon_days,
            start
        );

        for offset in 0..self.config.horizon_days {
            let Some(day) = start.checked_add_days(Days::new(u64::from(offset))) else {
                break;
            };

            for patient in patients {
                let duration = self.config.durations.duration_for(&patient.visit_type);
                let candidates = rank_candidates(&self.config.roster, schedule);

                if book_first_available(schedule, patient, day, duration, &candidates, &grid).is_none() {
                    dropped += 1;
                    debug!(
                        "No {} min slot for patient {} ({}) on {}",
                        duration, patient.name, patient.id, day
                    );
                }
            }
        }

        let added = schedule.len() - before;
        info!("Planned {} visits, {} patient-days left unscheduled", added, dropped);
        added
    }
}

/// Today's date in local time.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
