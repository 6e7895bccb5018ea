//! Homecare visit scheduling.
//!
//! Assigns homecare visits to staff across a week without double-booking,
//! and inserts emergencies into an existing schedule.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `StaffMember`, `Patient`, `VisitType`,
//!   `VisitDurations`, `ScheduledVisit`, `Schedule`, `SlotGrid`
//! - **`scheduler`**: Availability index, slot allocator, weekly planner,
//!   emergency inserter, visit ids, KPIs
//! - **`ranking`**: Staff candidate ordering (workload or shuffled)
//! - **`config`**: Roster, duration table, working window, slot step, horizon
//! - **`validation`**: Input checks and schedule auditing
//! - **`session`**: Patient list and schedule for one operator
//!
//! # Architecture
//!
//! Everything is synchronous and in-memory. The schedule is an explicit
//! value owned by the caller (or by a [`session::Session`]); core
//! operations take it by reference and either append to it or build a new
//! one. Logging goes through `tracing`; no subscriber is installed here.

pub mod config;
pub mod error;
pub mod models;
pub mod ranking;
pub mod scheduler;
pub mod session;
pub mod validation;

pub use config::SchedulerConfig;
pub use error::ScheduleError;
pub use scheduler::HomecareScheduler;
pub use session::Session;
