//! Workload tally used by candidate ranking.

use std::collections::HashMap;

use crate::models::Schedule;

/// Visit counts per staff member, taken from a schedule snapshot.
///
/// Counts span every date in the schedule, not just the day being
/// planned.
#[derive(Debug, Clone, Default)]
pub struct WorkloadTally {
    counts: HashMap<String, usize>,
}

impl WorkloadTally {
    /// Tallies the visits in `schedule`.
    pub fn from_schedule(schedule: &Schedule) -> Self {
        let counts = schedule
            .workloads()
            .into_iter()
            .map(|(name, count)| (name.to_string(), count))
            .collect();
        Self { counts }
    }

    /// Visit count for a staff member (0 if absent).
    pub fn count(&self, staff_name: &str) -> usize {
        self.counts.get(staff_name).copied().unwrap_or(0)
    }
}
