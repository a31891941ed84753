//! # slot-engine
//!
//! Deterministic single-day meeting-slot search for shared calendars.
//!
//! Given one day's worth of events and a meeting request (who must attend,
//! for how long), the engine computes every window of the day in which the
//! meeting fits without clashing with any attendee's existing events. The
//! whole computation is pure: no I/O, no shared state, the same inputs always
//! produce the same slots in the same order.
//!
//! ## Quick start
//!
//! ```rust
//! use slot_engine::{find_available_slots, Event, MeetingRequest, TimeRange};
//!
//! // Alice has a standup from 09:00 to 09:30.
//! let events = vec![Event::new(
//!     "Standup",
//!     TimeRange::new(540, 570).unwrap(),
//!     ["alice", "bob"],
//! )];
//!
//! // She needs an hour with us sometime today.
//! let request = MeetingRequest::new(["alice"], 60);
//!
//! let slots = find_available_slots(&events, &request);
//! assert_eq!(slots[0], TimeRange::new(0, 540).unwrap());
//! ```
//!
//! ## Modules
//!
//! - [`timerange`] — minute-of-day intervals with strict overlap semantics
//! - [`event`] — calendar events and meeting requests
//! - [`conflict`] — attendee-based conflict filtering and double-booking report
//! - [`query`] — the gap sweep that produces schedulable slots
//! - [`availability`] — merged busy/free view of one day
//! - [`error`] — error types

pub mod availability;
pub mod conflict;
pub mod error;
pub mod event;
pub mod query;
pub mod timerange;

pub use availability::{day_availability, DayAvailability};
pub use conflict::{find_attendee_conflicts, Conflict};
pub use error::ScheduleError;
pub use event::{Event, MeetingRequest};
pub use query::{find_available_slots, find_first_available_slot};
pub use timerange::TimeRange;
