//! Slot allocation, weekly planning and emergency insertion.
//!
//! # Algorithm
//!
//! `HomecareScheduler` is a greedy, grid-aligned, earliest-slot heuristic.
//! It never looks ahead and never moves a visit once placed, so results
//! depend on patient order and on the schedule built so far.
//!
//! # Components
//!
//! - `is_available`: overlap query for one (staff, date, interval)
//! - `find_next_available_slot`: earliest free grid slot for one staff day
//! - `next_visit_id`: sequence number for the next visit
//! - `HomecareScheduler::generate_weekly_schedule`: days x patients planning
//! - `HomecareScheduler::insert_emergency`: one shuffled-order insertion today
//! - `ScheduleKpi`: workload and coverage metrics

mod allocator;
mod availability;
mod emergency;
mod kpi;
mod planner;
mod visit_id;

pub use allocator::find_next_available_slot;
pub use availability::is_available;
pub use kpi::ScheduleKpi;
pub use planner::{today, HomecareScheduler};
pub use visit_id::{format_visit_id, next_visit_id};
