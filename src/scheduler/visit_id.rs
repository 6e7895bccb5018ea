//! Visit id generation.
//!
//! Ids are `V` followed by a zero-padded sequence number. The next number
//! is derived from the schedule itself, so it is only safe for a single
//! writer appending in sequence.

use crate::models::Schedule;

/// Next visit sequence number for `schedule`.
///
/// Takes the digits of every existing id, parses them, and returns the
/// maximum plus one. Ids without digits are ignored. Returns 1 for an
/// empty schedule or when nothing parses.
pub fn next_visit_id(schedule: &Schedule) -> u32 {
    schedule
        .iter()
        .filter_map(|v| parse_sequence(&v.visit_id))
        .max()
        .map_or(1, |max| max.saturating_add(1))
}

/// Renders a sequence number as `V0001`.
pub fn format_visit_id(sequence: u32) -> String {
    format!("V{sequence:04}")
}

fn parse_sequence(visit_id: &str) -> Option<u32> {
    let digits: String = visit_id.chars().filter(char::is_ascii_digit).collect();
    digits.parse().ok()
}
