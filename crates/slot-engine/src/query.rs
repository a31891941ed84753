//! The gap sweep that produces schedulable slots.
//!
//! Filters the day's events down to those that block the request, sorts their
//! ranges by start time, then walks the day left to right tracking the latest
//! occupied minute. Every gap at least as long as the requested duration
//! becomes a slot.

use crate::conflict;
use crate::event::{Event, MeetingRequest};
use crate::timerange::TimeRange;

/// Compute every time range in which the requested meeting fits without any
/// requested attendee being double-booked.
///
/// Returned slots are sorted by start time, mutually non-overlapping, and
/// each at least `request.duration_minutes()` long. A gap exactly equal to
/// the duration counts. The call never fails: an empty event list yields the
/// whole day, and a duration longer than the day yields no slots at all.
pub fn find_available_slots(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    let conflicts = conflict::conflicting_ranges(events, request.attendees());
    let duration = i64::from(request.duration_minutes());

    let mut slots = Vec::new();
    let mut current = TimeRange::START_OF_DAY;

    for next in &conflicts {
        if current >= TimeRange::END_OF_DAY {
            // The rest of the day is already occupied.
            break;
        }
        if next.start() - current >= duration {
            slots.push(TimeRange::new_unchecked(current, next.start()));
        }
        // Overlapping and nested conflicts never move the frontier backwards.
        current = current.max(next.end());
    }

    // Whatever is left after the last conflict, up to and including the final
    // minute of the day.
    if TimeRange::END_OF_DAY - current >= duration {
        slots.push(TimeRange::new_unchecked(current, TimeRange::END_OF_DAY + 1));
    }

    slots
}

/// The earliest schedulable slot, if the day has one.
pub fn find_first_available_slot(events: &[Event], request: &MeetingRequest) -> Option<TimeRange> {
    find_available_slots(events, request).into_iter().next()
}
