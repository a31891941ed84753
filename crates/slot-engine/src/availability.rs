//! Merged busy/free view of a single day.
//!
//! Collapses a request's blocking events into non-overlapping busy blocks and
//! pairs them with every free gap, regardless of whether the gap could hold
//! the meeting. Busy and free blocks together cover the whole day exactly
//! once, which makes this view suitable for rendering availability bars or
//! cross-checking the slot sweep.

use serde::{Deserialize, Serialize};

use crate::conflict;
use crate::event::{Event, MeetingRequest};
use crate::timerange::TimeRange;

/// Busy and free blocks of one day, both sorted by start time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAvailability {
    /// Merged ranges blocked by the requested attendees' events.
    pub busy: Vec<TimeRange>,
    /// Every gap between busy blocks, down to zero minutes of slack.
    pub free: Vec<TimeRange>,
}

/// Merge the request's blocking events into non-overlapping busy blocks and
/// compute the gaps between them.
///
/// Events are clipped to the day before merging; overlapping or touching
/// blocks coalesce. Zero-length events occupy no time and are dropped.
pub fn day_availability(events: &[Event], request: &MeetingRequest) -> DayAvailability {
    let busy = merge_busy_blocks(events, request);
    let day_end = TimeRange::END_OF_DAY + 1;

    let mut free = Vec::new();
    let mut cursor = TimeRange::START_OF_DAY;
    for block in &busy {
        if cursor < block.start() {
            free.push(TimeRange::new_unchecked(cursor, block.start()));
        }
        cursor = cursor.max(block.end());
    }
    if cursor < day_end {
        free.push(TimeRange::new_unchecked(cursor, day_end));
    }

    DayAvailability { busy, free }
}

/// Blocking ranges clipped to the day, sorted, and merged.
fn merge_busy_blocks(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    let day_end = TimeRange::END_OF_DAY + 1;
    let clipped = conflict::conflicting_ranges(events, request.attendees())
        .into_iter()
        .filter(|range| !range.is_empty())
        .map(|range| TimeRange::new_unchecked(range.start(), range.end().min(day_end)));

    let mut merged: Vec<TimeRange> = Vec::new();
    for range in clipped {
        if let Some(last) = merged.last_mut() {
            if range.start() <= last.end() {
                // Overlapping or touching: extend the current block.
                *last = TimeRange::new_unchecked(last.start(), last.end().max(range.end()));
                continue;
            }
        }
        merged.push(range);
    }
    merged
}
