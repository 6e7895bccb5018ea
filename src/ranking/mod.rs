//! Staff candidate ranking.
//!
//! Decides the order in which staff are tried for a visit. The first
//! candidate with a free slot gets the visit, so the order is the whole
//! fairness policy.
//!
//! # Policies
//!
//! - **Workload**: ascending visit count across the whole schedule so far,
//!   stable so ties keep roster order. Used for weekly planning.
//! - **Shuffled**: uniform random permutation of the roster. Used for
//!   emergencies so no staff member is systematically favored.
//!
//! Neither policy looks at the patient: roles are not matched against
//! diagnoses.

mod workload;

pub use workload::WorkloadTally;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Schedule, StaffMember};

/// Orders the roster by ascending workload in `schedule`.
///
/// Stable: staff with equal counts keep their roster order.
pub fn rank_candidates<'a>(roster: &'a [StaffMember], schedule: &Schedule) -> Vec<&'a StaffMember> {
    let tally = WorkloadTally::from_schedule(schedule);
    let mut candidates: Vec<&StaffMember> = roster.iter().collect();
    candidates.sort_by_key(|s| tally.count(&s.name));
    candidates
}

/// Shuffles the roster with the given random source.
pub fn rank_emergency_candidates<'a, R: Rng + ?Sized>(
    roster: &'a [StaffMember],
    rng: &mut R,
) -> Vec<&'a StaffMember> {
    let mut candidates: Vec<&StaffMember> = roster.iter().collect();
    candidates.shuffle(rng);
    candidates
}
