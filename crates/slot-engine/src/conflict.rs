//! Attendee-based conflict detection.
//!
//! An event blocks a meeting request when it occurs during the day and at
//! least one requested attendee is on its attendee list. Pairwise
//! double-bookings among those events can additionally be reported, which is
//! useful when explaining why a day has no room left.

use std::collections::HashSet;

use crate::event::{Event, MeetingRequest};
use crate::timerange::TimeRange;

/// True iff at least one of `attendees` is on the event's attendee list.
///
/// Probes the larger set with members of the smaller one, bounding the check
/// at `O(min(|event|, |requested|))` hash lookups.
pub(crate) fn shares_attendee(event: &Event, attendees: &HashSet<String>) -> bool {
    let event_attendees = event.attendees();
    if event_attendees.len() <= attendees.len() {
        event_attendees.iter().any(|a| attendees.contains(a))
    } else {
        attendees.iter().any(|a| event_attendees.contains(a))
    }
}

/// True iff the event starts before the day ends and would clash with a
/// meeting between `attendees`.
pub(crate) fn is_conflicting(event: &Event, attendees: &HashSet<String>) -> bool {
    event.when().start() <= TimeRange::END_OF_DAY && shares_attendee(event, attendees)
}

/// The time ranges of every event blocking `attendees`, sorted by start.
pub(crate) fn conflicting_ranges(events: &[Event], attendees: &HashSet<String>) -> Vec<TimeRange> {
    let mut ranges: Vec<TimeRange> = events
        .iter()
        .filter(|event| is_conflicting(event, attendees))
        .map(|event| event.when())
        .collect();
    ranges.sort();
    ranges
}

/// A double-booking between two events that both block the same request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub first: Event,
    pub second: Event,
    pub overlap_minutes: i64,
}

/// Find every pair of events that block the request and overlap each other.
///
/// Two events overlap when `a.start < b.end && b.start < a.end`; adjacent
/// events (one ending exactly when the other starts) are not conflicts. The
/// reported overlap is `min(ends) - max(starts)`.
pub fn find_attendee_conflicts(events: &[Event], request: &MeetingRequest) -> Vec<Conflict> {
    let blocking: Vec<&Event> = events
        .iter()
        .filter(|event| is_conflicting(event, request.attendees()))
        .collect();

    let mut conflicts = Vec::new();
    for (i, a) in blocking.iter().enumerate() {
        for b in &blocking[i + 1..] {
            if a.when().overlaps(&b.when()) {
                let overlap_start = a.when().start().max(b.when().start());
                let overlap_end = a.when().end().min(b.when().end());
                conflicts.push(Conflict {
                    first: (*a).clone(),
                    second: (*b).clone(),
                    overlap_minutes: overlap_end - overlap_start,
                });
            }
        }
    }
    conflicts
}
