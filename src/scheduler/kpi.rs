//! Schedule quality metrics (KPIs).
//!
//! Computes workload and coverage indicators from a completed schedule.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Requested visits | patients x horizon days |
//! | Coverage rate | planned / requested (emergencies excluded) |
//! | Visits by staff | visit count per roster member |
//! | Busy minutes by staff | summed visit minutes per roster member |
//! | Avg utilization | mean of busy / (window x horizon) over the roster |
//! | Workload spread | max - min visit count over the roster |

use std::collections::HashMap;

use crate::config::SchedulerConfig;
use crate::models::{Minute, Schedule, VisitType};

/// Schedule performance indicators.
#[derive(Debug, Clone)]
pub struct ScheduleKpi {
    /// Visits in the schedule, emergencies included.
    pub total_visits: usize,
    /// Visits produced by weekly planning.
    pub planned_visits: usize,
    /// Visits inserted as emergencies.
    pub emergency_visits: usize,
    /// Patient-days requested (patients x horizon).
    pub requested_visits: usize,
    /// Requested patient-days left without a visit.
    pub unscheduled_visits: usize,
    /// Fraction of requested patient-days that got a visit (0.0..1.0).
    pub coverage_rate: f64,
    /// Visit count per roster member (zero entries included).
    pub visits_by_staff: HashMap<String, usize>,
    /// Busy minutes per roster member (zero entries included).
    pub busy_minutes_by_staff: HashMap<String, Minute>,
    /// Average roster utilization over the horizon (0.0..1.0).
    pub avg_utilization: f64,
    /// Difference between the most and least loaded roster members.
    pub workload_spread: usize,
}

impl ScheduleKpi {
    /// Computes KPIs for a planned schedule.
    ///
    /// # Arguments
    /// * `schedule` - The schedule produced by weekly planning, possibly
    ///   with emergencies appended. Emergencies count toward workload and
    ///   utilization but never toward coverage.
    /// * `patient_count` - Number of patients that were planned.
    /// * `config` - Roster, window and horizon used for planning.
    pub fn calculate(schedule: &Schedule, patient_count: usize, config: &SchedulerConfig) -> Self {
        let total_visits = schedule.len();
        let emergency_visits = schedule
            .iter()
            .filter(|v| v.visit_type == VisitType::Emergency)
            .count();
        let planned_visits = total_visits - emergency_visits;
        let requested_visits = patient_count * config.horizon_days as usize;

        let counts = schedule.workloads();
        let busy = schedule.busy_minutes();

        let mut visits_by_staff = HashMap::new();
        let mut busy_minutes_by_staff = HashMap::new();
        for staff in &config.roster {
            let name = staff.name.as_str();
            visits_by_staff.insert(staff.name.clone(), counts.get(name).copied().unwrap_or(0));
            busy_minutes_by_staff.insert(staff.name.clone(), busy.get(name).copied().unwrap_or(0));
        }

        let capacity = u64::from(config.working_window.len_minutes()) * u64::from(config.horizon_days);
        let avg_utilization = if capacity == 0 || busy_minutes_by_staff.is_empty() {
            0.0
        } else {
            let sum: f64 = busy_minutes_by_staff
                .values()
                .map(|&b| b as f64 / capacity as f64)
                .sum();
            sum / busy_minutes_by_staff.len() as f64
        };

        let coverage_rate = if requested_visits == 0 {
            1.0
        } else {
            (planned_visits as f64 / requested_visits as f64).min(1.0)
        };

        let workload_spread = match (visits_by_staff.values().max(), visits_by_staff.values().min()) {
            (Some(max), Some(min)) => max - min,
            _ => 0,
        };

        Self {
            total_visits,
            planned_visits,
            emergency_visits,
            requested_visits,
            unscheduled_visits: requested_visits.saturating_sub(planned_visits),
            coverage_rate,
            visits_by_staff,
            busy_minutes_by_staff,
            avg_utilization,
            workload_spread,
        }
    }

    /// Whether every requested patient-day got a visit.
    pub fn is_fully_covered(&self) -> bool {
        self.unscheduled_visits == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Patient, StaffMember, VisitType};
    use crate::scheduler::HomecareScheduler;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()
    }

    #[test]
    fn test_kpi_full_coverage() {
        let scheduler = HomecareScheduler::default();
        let patients: Vec<Patient> = (0..4)
            .map(|i| Patient::new(format!("P{i}"), format!("P{i}"), "CKD", VisitType::Initial))
            .collect();
        let schedule = scheduler.generate_weekly_schedule(&patients, Some(monday()));

        let kpi = ScheduleKpi::calculate(&schedule, patients.len(), scheduler.config());
        assert_eq!(kpi.total_visits, 28);
        assert_eq!(kpi.requested_visits, 28);
        assert!(kpi.is_fully_covered());
        assert!((kpi.coverage_rate - 1.0).abs() < 1e-10);
        assert_eq!(kpi.workload_spread, 0);
        assert_eq!(kpi.visits_by_staff["Nurse Fatima"], 7);
        assert_eq!(kpi.busy_minutes_by_staff["Dr. Ahmed"], 7 * 60);
        // 60 of 600 minutes per day
        assert!((kpi.avg_utilization - 0.1).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_partial_coverage() {
        let config = SchedulerConfig::default()
            .with_roster(vec![StaffMember::nurse("Nurse Fatima")])
            .with_horizon_days(1);
        let scheduler = HomecareScheduler::new(config);
        let patients: Vec<Patient> = (0..12)
            .map(|i| Patient::new(format!("P{i}"), format!("P{i}"), "CKD", VisitType::Initial))
            .collect();
        let schedule = scheduler.generate_weekly_schedule(&patients, Some(monday()));

        let kpi = ScheduleKpi::calculate(&schedule, patients.len(), scheduler.config());
        assert_eq!(kpi.total_visits, 10);
        assert_eq!(kpi.unscheduled_visits, 2);
        assert!(!kpi.is_fully_covered());
        assert!((kpi.avg_utilization - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_emergencies_do_not_fill_coverage() {
        let config = SchedulerConfig::default()
            .with_roster(vec![StaffMember::nurse("Nurse Fatima")])
            .with_horizon_days(1);
        let scheduler = HomecareScheduler::new(config);
        let patients: Vec<Patient> = (0..12)
            .map(|i| Patient::new(format!("P{i}"), format!("P{i}"), "CKD", VisitType::Initial))
            .collect();
        let mut schedule = scheduler.generate_weekly_schedule(&patients, Some(monday()));

        let tuesday = monday().succ_opt().unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for i in 0..2 {
            scheduler
                .insert_emergency(&mut schedule, "Hassan", &format!("E{i}"), "chest pain", tuesday, &mut rng)
                .unwrap();
        }

        let kpi = ScheduleKpi::calculate(&schedule, patients.len(), scheduler.config());
        assert_eq!(kpi.total_visits, 12);
        assert_eq!(kpi.planned_visits, 10);
        assert_eq!(kpi.emergency_visits, 2);
        assert_eq!(kpi.unscheduled_visits, 2);
        assert!(!kpi.is_fully_covered());
        assert!((kpi.coverage_rate - 10.0 / 12.0).abs() < 1e-10);
        assert_eq!(kpi.busy_minutes_by_staff["Nurse Fatima"], 600 + 2 * 90);
    }

    #[test]
    fn test_kpi_idle_staff_counted() {
        let config = SchedulerConfig::default();
        let kpi = ScheduleKpi::calculate(&Schedule::new(), 0, &config);
        assert_eq!(kpi.visits_by_staff.len(), 4);
        assert!(kpi.visits_by_staff.values().all(|&c| c == 0));
        assert!((kpi.coverage_rate - 1.0).abs() < 1e-10);
        assert!((kpi.avg_utilization - 0.0).abs() < 1e-10);
    }
}
