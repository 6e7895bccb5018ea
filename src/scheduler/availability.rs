//! Availability index.
//!
//! Answers "is this staff member free on this date between two minutes?"
//! by scanning the visits already placed for that (staff, date) pair.
//! Linear in the schedule size, which is fine at homecare scale.

use chrono::NaiveDate;

use crate::models::{Minute, MinuteRange, Schedule};

/// Whether `staff_name` has no visit on `date` overlapping `[start, end)`.
///
/// Pure query. A staff member with no visits that day is available.
/// An empty query (`start >= end`) overlaps nothing and is reported
/// available; the duration table never produces one.
pub fn is_available(
    schedule: &Schedule,
    staff_name: &str,
    date: NaiveDate,
    start: Minute,
    end: Minute,
) -> bool {
    let query = MinuteRange::new(start, end);
    !schedule
        .visits_for_staff_on(staff_name, date)
        .any(|visit| visit.range().overlaps(&query))
}
