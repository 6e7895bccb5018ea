//! Homecare scheduling domain models.
//!
//! Provides the core data types for describing who can visit, who needs a
//! visit, how long each visit takes, and the resulting schedule.
//!
//! # Domain Mappings
//!
//! | homecare-schedule | Generic scheduling |
//! |-------------------|--------------------|
//! | StaffMember | Resource |
//! | Patient | Task |
//! | VisitDurations | Processing times |
//! | ScheduledVisit | Assignment |
//! | Schedule | Solution |

pub mod calendar;
mod duration;
mod patient;
mod schedule;
mod staff;

pub use calendar::{Minute, MinuteRange, SlotGrid, WorkingWindow};
pub use duration::{VisitDurations, DEFAULT_VISIT_MINUTES};
pub use patient::{Patient, VisitType};
pub use schedule::{Schedule, ScheduledVisit};
pub use staff::{default_roster, StaffMember, StaffRole};
