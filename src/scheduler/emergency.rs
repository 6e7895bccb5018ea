//! Emergency insertion.
//!
//! Places a single 90-minute emergency visit into an existing schedule,
//! today only. Staff are tried in shuffled order rather than by workload.

use chrono::NaiveDate;
use rand::Rng;
use tracing::{info, warn};

use super::allocator::book_first_available;
use super::planner::{today, HomecareScheduler};
use crate::models::{Patient, Schedule, ScheduledVisit};
use crate::ranking::rank_emergency_candidates;

impl HomecareScheduler {
    /// Inserts an emergency visit on `day` into `schedule`.
    ///
    /// Returns the appended visit, or `None` when every staff member is
    /// fully booked that day. There is no fallback to a later day.
    pub fn insert_emergency<R: Rng + ?Sized>(
        &self,
        schedule: &mut Schedule,
        name: &str,
        id: &str,
        diagnosis: &str,
        day: NaiveDate,
        rng: &mut R,
    ) -> Option<ScheduledVisit> {
        let patient = Patient::emergency(name, id, diagnosis);
        let config = self.config();
        let duration = config.durations.duration_for(&patient.visit_type);
        let candidates = rank_emergency_candidates(&config.roster, rng);

        let placed = book_first_available(
            schedule,
            &patient,
            day,
            duration,
            &candidates,
            &config.slot_grid(),
        );

        match &placed {
            Some(visit) => info!(
                "Emergency {} for {} scheduled with {} at {} on {}",
                visit.visit_id,
                visit.patient_name,
                visit.assigned_staff,
                visit.start_time(),
                visit.date
            ),
            None => warn!("No staff free for emergency patient {} ({}) on {}", name, id, day),
        }
        placed
    }

    /// Inserts an emergency visit for today using the thread-local RNG.
    pub fn insert_emergency_today(
        &self,
        schedule: &mut Schedule,
        name: &str,
        id: &str,
        diagnosis: &str,
    ) -> Option<ScheduledVisit> {
        self.insert_emergency(schedule, name, id, diagnosis, today(), &mut rand::rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SchedulerConfig;
    use crate::models::{MinuteRange, StaffMember, VisitType};
    use crate::validation::audit_schedule;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn today_fixed() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 5).unwrap()
    }

    fn fully_booked(scheduler: &HomecareScheduler, day: NaiveDate) -> Schedule {
        let filler = Patient::new("Filler", "F0", "routine", VisitType::custom("block"));
        let mut s = Schedule::new();
        for (i, staff) in scheduler.config().roster.iter().enumerate() {
            s.push(ScheduledVisit::new(
                format!("V{:04}", i + 1),
                day,
                &filler,
                staff,
                MinuteRange::new(480, 1080),
            ));
        }
        s
    }

    #[test]
    fn test_inserts_ninety_minute_visit_today() {
        let scheduler = HomecareScheduler::default();
        let mut schedule = Schedule::new();
        let mut rng = StdRng::seed_from_u64(3);

        let visit = scheduler
            .insert_emergency(&mut schedule, "Hassan", "E1", "chest pain", today_fixed(), &mut rng)
            .unwrap();

        assert_eq!(visit.visit_type, VisitType::Emergency);
        assert_eq!(visit.date, today_fixed());
        assert_eq!(visit.start_time(), "08:00");
        assert_eq!(visit.end_time(), "09:30");
        assert_eq!(visit.visit_id, "V0001");
        assert_eq!(schedule.len(), 1);
    }

    #[test]
    fn test_fully_booked_today_returns_none_even_if_tomorrow_free() {
        let scheduler = HomecareScheduler::default();
        let mut schedule = fully_booked(&scheduler, today_fixed());
        let before = schedule.clone();
        let mut rng = StdRng::seed_from_u64(11);

        let result =
            scheduler.insert_emergency(&mut schedule, "Hassan", "E1", "stroke", today_fixed(), &mut rng);
        assert!(result.is_none());
        assert_eq!(schedule, before);

        let tomorrow = today_fixed().succ_opt().unwrap();
        let result =
            scheduler.insert_emergency(&mut schedule, "Hassan", "E1", "stroke", tomorrow, &mut rng);
        assert_eq!(result.unwrap().date, tomorrow);
    }

    #[test]
    fn test_finds_the_one_staff_with_room() {
        let scheduler = HomecareScheduler::default();
        // Everyone is booked solid except Dr. Omar, who is free from 15:00
        let mut schedule: Schedule = fully_booked(&scheduler, today_fixed())
            .iter()
            .filter(|v| v.assigned_staff != "Dr. Omar")
            .cloned()
            .collect();
        schedule.push(ScheduledVisit::new(
            "V0009",
            today_fixed(),
            &Patient::new("Filler", "F0", "routine", VisitType::custom("block")),
            &StaffMember::gp("Dr. Omar"),
            MinuteRange::new(480, 900),
        ));

        for seed in 0..8 {
            let mut s = schedule.clone();
            let mut rng = StdRng::seed_from_u64(seed);
            let visit = scheduler
                .insert_emergency(&mut s, "Hassan", "E1", "sepsis", today_fixed(), &mut rng)
                .unwrap();
            assert_eq!(visit.assigned_staff, "Dr. Omar");
            assert_eq!(visit.start_time(), "15:00");
            assert_eq!(visit.visit_id, "V0010");
        }
    }

    #[test]
    fn test_insert_emergency_today_uses_local_date() {
        let scheduler = HomecareScheduler::default();
        let mut schedule = Schedule::new();

        let visit = scheduler
            .insert_emergency_today(&mut schedule, "Hassan", "E1", "chest pain")
            .unwrap();
        assert_eq!(visit.date, today());
        assert_eq!(visit.duration_minutes(), 90);
        assert_eq!(visit.start_time(), "08:00");
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let scheduler = HomecareScheduler::default();
        let pick = |seed: u64| {
            let mut s = Schedule::new();
            scheduler
                .insert_emergency(&mut s, "Hassan", "E1", "fall", today_fixed(), &mut StdRng::seed_from_u64(seed))
                .map(|v| v.assigned_staff)
        };
        assert_eq!(pick(99), pick(99));
    }

    #[test]
    fn test_emergency_respects_existing_plan() {
        let scheduler = HomecareScheduler::new(SchedulerConfig::default());
        let patients: Vec<Patient> = (0..6)
            .map(|i| Patient::new(format!("P{i}"), format!("P{i}"), "CHF", VisitType::Initial))
            .collect();
        let mut schedule = scheduler.generate_weekly_schedule(&patients, Some(today_fixed()));
        let planned = schedule.len();

        let mut rng = StdRng::seed_from_u64(5);
        let visit = scheduler
            .insert_emergency(&mut schedule, "Hassan", "E1", "chest pain", today_fixed(), &mut rng)
            .unwrap();

        assert_eq!(schedule.len(), planned + 1);
        assert_eq!(visit.visit_id, format!("V{:04}", planned + 1));
        assert!(audit_schedule(&schedule, scheduler.config()).is_empty());
    }
}
