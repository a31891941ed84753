//! Tests for the slot sweep.
//!
//! Each scenario builds one day of events, asks for a meeting, and checks the
//! exact set of returned slots.

use slot_engine::{
    find_available_slots, find_first_available_slot, Event, MeetingRequest, TimeRange,
};

/// Helper to build an event from a half-open minute range.
fn event(title: &str, start: i64, end: i64, attendees: &[&str]) -> Event {
    Event::new(
        title,
        TimeRange::new(start, end).unwrap(),
        attendees.iter().copied(),
    )
}

fn range(start: i64, end: i64) -> TimeRange {
    TimeRange::new(start, end).unwrap()
}

fn request(attendees: &[&str], duration: u32) -> MeetingRequest {
    MeetingRequest::new(attendees.iter().copied(), duration)
}

#[test]
fn empty_calendar_yields_the_whole_day() {
    let slots = find_available_slots(&[], &request(&["alice"], 60));
    assert_eq!(slots, vec![TimeRange::WHOLE_DAY]);
}

#[test]
fn fully_booked_attendee_yields_nothing() {
    let events = vec![event("all day", 0, 1440, &["alice"])];
    let slots = find_available_slots(&events, &request(&["alice"], 30));
    assert!(slots.is_empty());
}

#[test]
fn gaps_between_events_become_slots() {
    // [60, 90) and [120, 150) are taken; every other gap fits a half-hour
    // meeting, including the run to the end of the day.
    let events = vec![
        event("standup", 60, 90, &["alice"]),
        event("review", 120, 150, &["bob"]),
    ];
    let slots = find_available_slots(&events, &request(&["alice", "bob"], 30));
    assert_eq!(slots, vec![range(0, 60), range(90, 120), range(150, 1440)]);
}

#[test]
fn overlapping_events_merge_into_one_busy_block() {
    let events = vec![
        event("a", 60, 120, &["alice"]),
        event("b", 90, 150, &["alice"]),
    ];
    let slots = find_available_slots(&events, &request(&["alice"], 30));
    assert_eq!(slots, vec![range(0, 60), range(150, 1440)]);
}

#[test]
fn nested_events_do_not_shrink_the_frontier() {
    let events = vec![
        event("outer", 100, 400, &["alice"]),
        event("inner", 150, 200, &["alice"]),
    ];
    let slots = find_available_slots(&events, &request(&["alice"], 60));
    assert_eq!(slots, vec![range(0, 100), range(400, 1440)]);
}

#[test]
fn duration_longer_than_the_day_yields_nothing() {
    assert!(find_available_slots(&[], &request(&["alice"], 1500)).is_empty());

    let events = vec![event("standup", 60, 90, &["alice"])];
    assert!(find_available_slots(&events, &request(&["alice"], 1500)).is_empty());
}

#[test]
fn disjoint_attendees_are_ignored() {
    let events = vec![event("other team", 0, 1440, &["carol", "dave"])];
    let slots = find_available_slots(&events, &request(&["alice"], 60));
    assert_eq!(slots, vec![TimeRange::WHOLE_DAY]);
}

#[test]
fn events_with_no_attendees_never_conflict() {
    let events = vec![event("room hold", 0, 1440, &[])];
    let slots = find_available_slots(&events, &request(&["alice"], 60));
    assert_eq!(slots, vec![TimeRange::WHOLE_DAY]);
}

#[test]
fn one_shared_attendee_is_enough_to_conflict() {
    let events = vec![event("sync", 300, 360, &["carol", "alice"])];
    let slots = find_available_slots(&events, &request(&["alice", "bob"], 60));
    assert_eq!(slots, vec![range(0, 300), range(360, 1440)]);
}

#[test]
fn gap_exactly_equal_to_duration_is_schedulable() {
    let events = vec![
        event("a", 60, 90, &["alice"]),
        event("b", 120, 1440, &["alice"]),
    ];
    let slots = find_available_slots(&events, &request(&["alice"], 30));
    assert_eq!(slots, vec![range(0, 60), range(90, 120)]);
}

#[test]
fn gap_one_minute_short_is_skipped() {
    let events = vec![
        event("a", 0, 91, &["alice"]),
        event("b", 120, 1440, &["alice"]),
    ];
    let slots = find_available_slots(&events, &request(&["alice"], 30));
    assert!(slots.is_empty());
}

#[test]
fn events_starting_after_the_day_are_ignored() {
    let events = vec![event("phantom", 2000, 2100, &["alice"])];
    let slots = find_available_slots(&events, &request(&["alice"], 60));
    assert_eq!(slots, vec![TimeRange::WHOLE_DAY]);
}

#[test]
fn event_at_the_last_minute_still_conflicts() {
    let events = vec![event("late call", 1439, 1440, &["alice"])];
    let slots = find_available_slots(&events, &request(&["alice"], 60));
    assert_eq!(slots, vec![range(0, 1439)]);
}

#[test]
fn events_after_the_day_is_full_change_nothing() {
    let base = vec![event("all day", 0, 1440, &["alice"])];
    let extended = vec![
        event("all day", 0, 1440, &["alice"]),
        event("evening", 1200, 1300, &["alice"]),
    ];
    let req = request(&["alice"], 15);
    assert_eq!(
        find_available_slots(&base, &req),
        find_available_slots(&extended, &req)
    );
}

#[test]
fn identical_inputs_give_identical_output() {
    let events = vec![
        event("a", 100, 200, &["alice"]),
        event("b", 150, 300, &["bob"]),
    ];
    let req = request(&["alice", "bob"], 25);
    assert_eq!(
        find_available_slots(&events, &req),
        find_available_slots(&events, &req)
    );
}

#[test]
fn events_compare_by_value() {
    let a = event("standup", 60, 90, &["alice", "bob"]);
    let b = event("standup", 60, 90, &["bob", "alice", "alice"]);
    assert_eq!(a, b);
}

#[test]
fn first_slot_is_the_earliest() {
    let events = vec![event("standup", 60, 90, &["alice"])];
    let first = find_first_available_slot(&events, &request(&["alice"], 30));
    assert_eq!(first, Some(range(0, 60)));
}

#[test]
fn first_slot_skips_short_gaps() {
    let events = vec![
        event("a", 20, 90, &["alice"]),
        event("b", 120, 200, &["alice"]),
    ];
    let first = find_first_available_slot(&events, &request(&["alice"], 45));
    assert_eq!(first, Some(range(200, 1440)));
}

#[test]
fn no_first_slot_when_day_is_full() {
    let events = vec![event("all day", 0, 1440, &["alice"])];
    assert_eq!(
        find_first_available_slot(&events, &request(&["alice"], 10)),
        None
    );
}
