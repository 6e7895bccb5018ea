//! Slot allocator.
//!
//! # Algorithm
//!
//! 1. Start at the first grid-aligned minute at or after the working start.
//! 2. Step by the slot size up to `working_end - duration` inclusive.
//! 3. Return the first start whose `[start, start + duration)` is free.
//!
//! The grid keeps visit starts on predictable boundaries and bounds the
//! search to `window / step` probes per staff member per day (20 for
//! 08:00-18:00 in 30-minute steps).

use chrono::NaiveDate;
use tracing::trace;

use super::availability::is_available;
use super::visit_id::{format_visit_id, next_visit_id};
use crate::models::{Minute, MinuteRange, Patient, Schedule, ScheduledVisit, SlotGrid, StaffMember};

/// Earliest free slot of `duration` minutes for `staff` on `day`.
///
/// Returns `None` when no aligned start fits, including when the duration
/// is zero or longer than the working window.
pub fn find_next_available_slot(
    schedule: &Schedule,
    staff: &StaffMember,
    day: NaiveDate,
    duration: Minute,
    grid: &SlotGrid,
) -> Option<MinuteRange> {
    grid.candidate_starts(duration)
        .find(|&start| is_available(schedule, &staff.name, day, start, start + duration))
        .map(|start| MinuteRange::new(start, start + duration))
}

/// Tries `candidates` in order and books the first one with room.
///
/// On success a visit with the next sequence id is appended to `schedule`
/// and a copy is returned. At most one visit is placed per call.
pub(crate) fn book_first_available(
    schedule: &mut Schedule,
    patient: &Patient,
    day: NaiveDate,
    duration: Minute,
    candidates: &[&StaffMember],
    grid: &SlotGrid,
) -> Option<ScheduledVisit> {
    for staff in candidates {
        let Some(slot) = find_next_available_slot(schedule, staff, day, duration, grid) else {
            trace!("{} has no {} min slot on {}", staff.name, duration, day);
            continue;
        };

        let visit_id = format_visit_id(next_visit_id(schedule));
        let visit = ScheduledVisit::new(visit_id, day, patient, staff, slot);
        schedule.push(visit.clone());
        return Some(visit);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{VisitType, WorkingWindow};

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()
    }

    fn patient() -> Patient {
        Patient::new("Mona", "P1", "COPD", VisitType::FollowUp)
    }

    fn book(schedule: &mut Schedule, staff: &StaffMember, start: Minute, end: Minute) {
        let id = format_visit_id(next_visit_id(schedule));
        schedule.push(ScheduledVisit::new(id, day(), &patient(), staff, MinuteRange::new(start, end)));
    }

    #[test]
    fn test_empty_day_starts_at_opening() {
        let staff = StaffMember::nurse("Nurse Fatima");
        let slot = find_next_available_slot(&Schedule::new(), &staff, day(), 60, &SlotGrid::default());
        assert_eq!(slot, Some(MinuteRange::new(480, 540)));
    }

    #[test]
    fn test_skips_busy_slots() {
        let staff = StaffMember::nurse("Nurse Fatima");
        let mut s = Schedule::new();
        book(&mut s, &staff, 480, 540);
        book(&mut s, &staff, 570, 600);

        // 09:00-09:30 is the only gap before 10:00
        let slot = find_next_available_slot(&s, &staff, day(), 30, &SlotGrid::default());
        assert_eq!(slot, Some(MinuteRange::new(540, 570)));

        // A 60-minute visit does not fit that gap
        let slot = find_next_available_slot(&s, &staff, day(), 60, &SlotGrid::default());
        assert_eq!(slot, Some(MinuteRange::new(600, 660)));
    }

    #[test]
    fn test_latest_start_is_end_minus_duration() {
        let staff = StaffMember::nurse("Nurse Fatima");
        let mut s = Schedule::new();
        book(&mut s, &staff, 480, 990); // busy until 16:30

        let slot = find_next_available_slot(&s, &staff, day(), 90, &SlotGrid::default());
        assert_eq!(slot, Some(MinuteRange::new(990, 1080)));

        book(&mut s, &staff, 990, 1020);
        assert_eq!(find_next_available_slot(&s, &staff, day(), 90, &SlotGrid::default()), None);
        assert_eq!(
            find_next_available_slot(&s, &staff, day(), 60, &SlotGrid::default()),
            Some(MinuteRange::new(1020, 1080))
        );
    }

    #[test]
    fn test_full_day_has_no_slot() {
        let staff = StaffMember::nurse("Nurse Fatima");
        let mut s = Schedule::new();
        book(&mut s, &staff, 480, 1080);
        assert_eq!(find_next_available_slot(&s, &staff, day(), 30, &SlotGrid::default()), None);
    }

    #[test]
    fn test_oversized_or_zero_duration() {
        let staff = StaffMember::nurse("Nurse Fatima");
        let grid = SlotGrid::new(WorkingWindow::new(480, 600), 30);
        assert_eq!(find_next_available_slot(&Schedule::new(), &staff, day(), 150, &grid), None);
        assert_eq!(find_next_available_slot(&Schedule::new(), &staff, day(), 0, &grid), None);
    }

    #[test]
    fn test_book_first_available_falls_through_candidates() {
        let ahmed = StaffMember::specialist("Dr. Ahmed");
        let sara = StaffMember::specialist("Dr. Sara");
        let mut s = Schedule::new();
        book(&mut s, &ahmed, 480, 1080);

        let visit = book_first_available(
            &mut s,
            &patient(),
            day(),
            30,
            &[&ahmed, &sara],
            &SlotGrid::default(),
        )
        .unwrap();
        assert_eq!(visit.assigned_staff, "Dr. Sara");
        assert_eq!(visit.visit_id, "V0002");
        assert_eq!(s.len(), 2);
        assert_eq!(s.find("V0002"), Some(&visit));
    }

    #[test]
    fn test_book_first_available_none_leaves_schedule_untouched() {
        let ahmed = StaffMember::specialist("Dr. Ahmed");
        let mut s = Schedule::new();
        book(&mut s, &ahmed, 480, 1080);

        let before = s.clone();
        let result =
            book_first_available(&mut s, &patient(), day(), 30, &[&ahmed], &SlotGrid::default());
        assert!(result.is_none());
        assert_eq!(s, before);
    }
}
