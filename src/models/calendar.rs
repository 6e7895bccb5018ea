//! Working window and slot grid models.
//!
//! Defines the daily span during which visits may be placed and the
//! fixed grid that candidate start times are drawn from.
//!
//! # Time Model
//! Times of day are minutes since midnight (`0..1440`). Calendar dates
//! are carried separately as `chrono::NaiveDate`, so an interval never
//! crosses midnight.

use serde::{Deserialize, Serialize};

/// Minutes since midnight.
pub type Minute = u32;

/// Minutes in one day.
pub const MINUTES_PER_DAY: Minute = 24 * 60;

/// A time-of-day interval [start, end).
///
/// Half-open interval: includes start, excludes end.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MinuteRange {
    /// Interval start (inclusive).
    pub start: Minute,
    /// Interval end (exclusive).
    pub end: Minute,
}

impl MinuteRange {
    /// Creates a new interval.
    pub fn new(start: Minute, end: Minute) -> Self {
        Self { start, end }
    }

    /// Length of the interval in minutes (0 for empty or inverted ranges).
    #[inline]
    pub fn duration(&self) -> Minute {
        self.end.saturating_sub(self.start)
    }

    /// Whether the interval is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Whether two intervals overlap.
    ///
    /// An empty interval overlaps nothing.
    pub fn overlaps(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        !(self.end <= other.start || self.start >= other.end)
    }
}

/// The daily span during which visits may be scheduled.
///
/// Serialized as `"HH:MM"` strings so config files stay readable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkingWindow {
    /// First minute of the working day.
    #[serde(with = "hhmm")]
    pub start: Minute,
    /// End of the working day (exclusive).
    #[serde(with = "hhmm")]
    pub end: Minute,
}

impl WorkingWindow {
    /// Creates a new working window.
    pub fn new(start: Minute, end: Minute) -> Self {
        Self { start, end }
    }

    /// Window length in minutes.
    #[inline]
    pub fn len_minutes(&self) -> Minute {
        self.end.saturating_sub(self.start)
    }

    /// Whether an interval lies entirely inside the window.
    pub fn contains(&self, range: &MinuteRange) -> bool {
        range.start >= self.start && range.end <= self.end
    }
}

impl Default for WorkingWindow {
    /// 08:00 to 18:00.
    fn default() -> Self {
        Self::new(8 * 60, 18 * 60)
    }
}

/// Fixed grid of candidate start times inside a working window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotGrid {
    /// Daily working window.
    pub window: WorkingWindow,
    /// Step between candidate starts (minutes).
    pub step: Minute,
}

impl SlotGrid {
    /// Creates a grid over `window` stepping by `step` minutes.
    pub fn new(window: WorkingWindow, step: Minute) -> Self {
        Self { window, step }
    }

    /// First grid-aligned minute at or after the window start.
    pub fn first_start(&self) -> Minute {
        round_up_to_slot(self.window.start, self.step)
    }

    /// Candidate starts for a visit of `duration` minutes.
    ///
    /// Yields every aligned start up to `window.end - duration` inclusive.
    /// Empty when the duration is zero, the step is zero, or the visit
    /// cannot fit in the window at all.
    pub fn candidate_starts(&self, duration: Minute) -> impl Iterator<Item = Minute> {
        let latest = self.window.end.checked_sub(duration);
        let step = self.step;
        let first = self.first_start();
        let valid = duration > 0 && step > 0 && latest.is_some_and(|l| first <= l);
        let latest = latest.unwrap_or(0);

        std::iter::successors(valid.then_some(first), move |&s| {
            s.checked_add(step).filter(|next| *next <= latest)
        })
    }

    /// Whether `minute` sits on the grid.
    pub fn is_aligned(&self, minute: Minute) -> bool {
        self.step > 0 && minute >= self.first_start() && (minute - self.first_start()) % self.step == 0
    }
}

impl Default for SlotGrid {
    /// 08:00 to 18:00 in 30-minute steps.
    fn default() -> Self {
        Self::new(WorkingWindow::default(), 30)
    }
}

/// Rounds `minute` up to the next multiple of `step`.
///
/// A zero step leaves the value untouched.
pub fn round_up_to_slot(minute: Minute, step: Minute) -> Minute {
    if step == 0 {
        return minute;
    }
    minute.div_ceil(step) * step
}

/// Parses `"HH:MM"` into minutes since midnight.
pub fn parse_minutes(text: &str) -> Option<Minute> {
    let (h, m) = text.trim().split_once(':')?;
    let hours: Minute = h.parse().ok()?;
    let minutes: Minute = m.parse().ok()?;
    if hours > 24 || minutes >= 60 || (hours == 24 && minutes != 0) {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// Formats minutes since midnight as `"HH:MM"`.
pub fn format_minutes(minute: Minute) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

/// Serde adapter for `"HH:MM"` fields.
pub(crate) mod hhmm {
    use super::{format_minutes, parse_minutes, Minute};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(minute: &Minute, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_minutes(*minute))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Minute, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse_minutes(&text)
            .ok_or_else(|| de::Error::custom(format!("invalid time of day '{text}', expected HH:MM")))
    }
}
