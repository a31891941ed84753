//! Minute-of-day time ranges with strict half-open overlap semantics.
//!
//! A [`TimeRange`] covers `[start, end)` in minutes counted from midnight.
//! The end is exclusive so that back-to-back ranges (one ending exactly when
//! the next starts) do not overlap. A slot that runs until the end of the day
//! is built with an inclusive end (see [`TimeRange::from_start_end`]) so it
//! also covers the final minute.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// An immutable interval over minute-of-day integers, `start` inclusive and
/// `end` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTimeRange", into = "RawTimeRange")]
pub struct TimeRange {
    start: i64,
    end: i64,
}

/// Wire shape for [`TimeRange`]. Deserialization routes through the
/// validating constructor so malformed ranges are rejected at the boundary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawTimeRange {
    start: i64,
    end: i64,
}

impl TryFrom<RawTimeRange> for TimeRange {
    type Error = ScheduleError;

    fn try_from(raw: RawTimeRange) -> Result<Self> {
        TimeRange::new(raw.start, raw.end)
    }
}

impl From<TimeRange> for RawTimeRange {
    fn from(range: TimeRange) -> Self {
        RawTimeRange {
            start: range.start,
            end: range.end,
        }
    }
}

impl TimeRange {
    /// First minute of the day.
    pub const START_OF_DAY: i64 = 0;

    /// Last valid minute of the day (23:59).
    pub const END_OF_DAY: i64 = 24 * 60 - 1;

    /// The full day, `[0, 1440)`.
    pub const WHOLE_DAY: TimeRange = TimeRange {
        start: Self::START_OF_DAY,
        end: Self::END_OF_DAY + 1,
    };

    /// Create a half-open range `[start, end)`.
    ///
    /// `start == end` is allowed and denotes an empty range.
    ///
    /// # Errors
    /// Returns [`ScheduleError::InvalidRange`] if either bound is negative or
    /// `end < start`.
    pub fn new(start: i64, end: i64) -> Result<Self> {
        if start < 0 || end < start {
            return Err(ScheduleError::InvalidRange { start, end });
        }
        Ok(TimeRange { start, end })
    }

    /// Create a range from explicit bounds. With `inclusive` set, the range
    /// also covers the `end` minute itself, as slots that run until the last
    /// minute of the day must.
    pub fn from_start_end(start: i64, end: i64, inclusive: bool) -> Result<Self> {
        Self::new(start, if inclusive { end + 1 } else { end })
    }

    /// Create a range covering `duration` minutes from `start`.
    pub fn from_start_duration(start: i64, duration: i64) -> Result<Self> {
        Self::new(start, start + duration)
    }

    /// Build a range whose bounds are already known to be ordered and
    /// non-negative (sweep internals emit only such bounds).
    pub(crate) fn new_unchecked(start: i64, end: i64) -> Self {
        debug_assert!(0 <= start && start <= end);
        TimeRange { start, end }
    }

    /// Inclusive start minute.
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Exclusive end minute.
    pub fn end(&self) -> i64 {
        self.end
    }

    /// Length in minutes.
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// True when the range covers no minutes at all.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// True iff `minute` falls inside the range (`start <= minute < end`).
    pub fn contains(&self, minute: i64) -> bool {
        self.start <= minute && minute < self.end
    }

    /// Strict half-open intersection test: `[a, b)` and `[c, d)` overlap iff
    /// `a < d && c < b`. Symmetric; touching at a boundary is not an overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl PartialOrd for TimeRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Ordered by start ascending; equal starts fall back to the shorter range
/// first. The sweep relies only on the start ordering.
impl Ord for TimeRange {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.start, self.end).cmp(&(other.start, other.end))
    }
}
