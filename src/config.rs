//! Scheduler configuration.
//!
//! Holds the fixed inputs the scheduler consumes from its surroundings:
//! the staff roster, the visit duration table, the daily working window,
//! the slot step and the planning horizon. `Default` gives the standard
//! homecare setup (four staff, 08:00-18:00, 30-minute slots, 7 days).
//!
//! A JSON file can override any subset of fields:
//!
//! ```json
//! {
//!   "roster": [{ "name": "Nurse Fatima", "role": "Nurse" }],
//!   "durations": { "initial": 60, "follow-up": 30 },
//!   "working_window": { "start": "08:00", "end": "18:00" },
//!   "slot_minutes": 30,
//!   "horizon_days": 7
//! }
//! ```

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ScheduleError;
use crate::models::{default_roster, Minute, SlotGrid, StaffMember, VisitDurations, WorkingWindow};
use crate::validation::{validate_config, ValidationResult};

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV_VAR: &str = "HOMECARE_SCHEDULER_CONFIG";

/// Configuration consumed by the scheduler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Staff roster, in tie-break order.
    pub roster: Vec<StaffMember>,
    /// Visit duration table.
    pub durations: VisitDurations,
    /// Daily working window.
    pub working_window: WorkingWindow,
    /// Step between candidate start times (minutes).
    pub slot_minutes: Minute,
    /// Number of consecutive days planned by weekly generation.
    pub horizon_days: u32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            roster: default_roster(),
            durations: VisitDurations::default(),
            working_window: WorkingWindow::default(),
            slot_minutes: 30,
            horizon_days: 7,
        }
    }
}

impl SchedulerConfig {
    /// Sets the roster.
    pub fn with_roster(mut self, roster: Vec<StaffMember>) -> Self {
        self.roster = roster;
        self
    }

    /// Sets the duration table.
    pub fn with_durations(mut self, durations: VisitDurations) -> Self {
        self.durations = durations;
        self
    }

    /// Sets the working window.
    pub fn with_working_window(mut self, window: WorkingWindow) -> Self {
        self.working_window = window;
        self
    }

    /// Sets the slot step.
    pub fn with_slot_minutes(mut self, minutes: Minute) -> Self {
        self.slot_minutes = minutes;
        self
    }

    /// Sets the planning horizon.
    pub fn with_horizon_days(mut self, days: u32) -> Self {
        self.horizon_days = days;
        self
    }

    /// Slot grid derived from the window and step.
    pub fn slot_grid(&self) -> SlotGrid {
        SlotGrid::new(self.working_window, self.slot_minutes)
    }

    /// Runs every configuration check.
    pub fn validate(&self) -> ValidationResult {
        validate_config(self)
    }

    /// Parses and validates a JSON config. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ScheduleError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate().map_err(ScheduleError::InvalidConfig)?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ScheduleError> {
        let path = path.as_ref();
        debug!("Loading scheduler config from {}", path.display());
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Loads the file named by `HOMECARE_SCHEDULER_CONFIG`.
    ///
    /// Falls back to the default config, with a warning, when the variable
    /// is unset or the file cannot be loaded.
    pub fn from_env() -> Self {
        match env::var(CONFIG_ENV_VAR) {
            Ok(path) => Self::from_json_file(&path).unwrap_or_else(|e| {
                warn!("Could not load {} ({}), using defaults: {}", CONFIG_ENV_VAR, path, e);
                Self::default()
            }),
            Err(_) => {
                debug!("{} not set, using default scheduler config", CONFIG_ENV_VAR);
                Self::default()
            }
        }
    }
}
