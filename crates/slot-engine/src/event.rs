//! Calendar events and meeting requests.
//!
//! Plain immutable containers with value equality. An [`Event`] records who
//! is busy and when; a [`MeetingRequest`] names who must attend a prospective
//! meeting and for how long. Neither performs validation beyond what
//! [`TimeRange`] already enforces.

use std::collections::HashSet;

use crate::timerange::TimeRange;

/// A calendar event: a time range plus the set of people attending it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    title: String,
    when: TimeRange,
    attendees: HashSet<String>,
}

impl Event {
    /// Build an event. Duplicate attendee identifiers collapse into the set;
    /// an empty attendee list is tolerated (such an event can never conflict
    /// with any request).
    pub fn new<T, I, A>(title: T, when: TimeRange, attendees: I) -> Self
    where
        T: Into<String>,
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Event {
            title: title.into(),
            when,
            attendees: attendees.into_iter().map(Into::into).collect(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn when(&self) -> TimeRange {
        self.when
    }

    pub fn attendees(&self) -> &HashSet<String> {
        &self.attendees
    }
}

/// A request to schedule a meeting: who has to be there and how many minutes
/// are needed. The duration may exceed a whole day; every query then comes
/// back empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingRequest {
    attendees: HashSet<String>,
    duration_minutes: u32,
}

impl MeetingRequest {
    pub fn new<I, A>(attendees: I, duration_minutes: u32) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        MeetingRequest {
            attendees: attendees.into_iter().map(Into::into).collect(),
            duration_minutes,
        }
    }

    pub fn attendees(&self) -> &HashSet<String> {
        &self.attendees
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }
}
