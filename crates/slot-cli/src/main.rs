//! `slots` CLI — find meeting slots in one day of calendar events.
//!
//! ## Usage
//!
//! ```sh
//! # Every slot that fits the request (stdin → stdout)
//! slots find < day.json
//!
//! # From a file, only the earliest slot
//! slots find -i day.json --first
//!
//! # Machine-readable output
//! slots find -i day.json --json
//!
//! # Busy/free breakdown with a double-booking report
//! slots report -i day.json
//! ```
//!
//! The input document is JSON with wall-clock `HH:MM` times:
//!
//! ```json
//! {
//!   "events": [
//!     { "title": "Standup", "start": "09:00", "end": "09:30",
//!       "attendees": ["alice", "bob"] }
//!   ],
//!   "request": { "attendees": ["alice"], "duration_minutes": 60 }
//! }
//! ```

use std::io::{self, Read};

use anyhow::{Context, Result};
use chrono::{NaiveTime, Timelike};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use slot_engine::{
    day_availability, find_attendee_conflicts, find_available_slots, find_first_available_slot,
    Conflict, DayAvailability, Event, MeetingRequest, TimeRange,
};

#[derive(Parser)]
#[command(name = "slots", version, about = "Single-day meeting-slot finder")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find every time range that can hold the requested meeting
    Find {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Print slots as a JSON array instead of text
        #[arg(long)]
        json: bool,
        /// Print only the earliest slot
        #[arg(long)]
        first: bool,
    },
    /// Show merged busy blocks, free gaps, and double-bookings
    Report {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Print the busy/free breakdown as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// One day of calendar data plus the meeting being scheduled.
#[derive(Deserialize)]
struct DayDocument {
    #[serde(default)]
    events: Vec<EventInput>,
    request: RequestInput,
}

/// Wire form of an event; times are wall-clock `HH:MM` strings.
#[derive(Deserialize)]
struct EventInput {
    #[serde(default)]
    title: String,
    start: String,
    end: String,
    #[serde(default)]
    attendees: Vec<String>,
}

#[derive(Deserialize)]
struct RequestInput {
    attendees: Vec<String>,
    duration_minutes: u32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Find {
            input,
            output,
            json,
            first,
        } => {
            let (events, request) = load_document(input.as_deref())?;
            let slots = if first {
                find_first_available_slot(&events, &request)
                    .into_iter()
                    .collect()
            } else {
                find_available_slots(&events, &request)
            };
            let rendered = if json {
                to_pretty_json(&slots)?
            } else {
                render_slots(&slots, request.duration_minutes())
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Report {
            input,
            output,
            json,
        } => {
            let (events, request) = load_document(input.as_deref())?;
            let availability = day_availability(&events, &request);
            let rendered = if json {
                to_pretty_json(&availability)?
            } else {
                let conflicts = find_attendee_conflicts(&events, &request);
                render_report(&availability, &conflicts)
            };
            write_output(output.as_deref(), &rendered)?;
        }
    }

    Ok(())
}

/// Read, parse, and convert the input document into domain values.
fn load_document(path: Option<&str>) -> Result<(Vec<Event>, MeetingRequest)> {
    let raw = read_input(path)?;
    let doc: DayDocument =
        serde_json::from_str(&raw).context("failed to parse input document")?;

    let events = doc
        .events
        .iter()
        .map(build_event)
        .collect::<Result<Vec<_>>>()?;
    let request = MeetingRequest::new(
        doc.request.attendees.iter().map(String::as_str),
        doc.request.duration_minutes,
    );
    Ok((events, request))
}

fn build_event(input: &EventInput) -> Result<Event> {
    let start = parse_minute(&input.start)?;
    let end = parse_minute(&input.end)?;
    let when = TimeRange::new(start, end)
        .with_context(|| format!("event '{}' has end before start", input.title))?;
    Ok(Event::new(
        input.title.as_str(),
        when,
        input.attendees.iter().map(String::as_str),
    ))
}

/// Parse `HH:MM` into a minute-of-day offset.
fn parse_minute(raw: &str) -> Result<i64> {
    let time = NaiveTime::parse_from_str(raw, "%H:%M")
        .with_context(|| format!("invalid wall-clock time '{raw}', expected HH:MM"))?;
    Ok(i64::from(time.hour()) * 60 + i64::from(time.minute()))
}

/// Minute-of-day back to wall clock. A range reaching the end of the day
/// renders as 24:00, which chrono cannot represent, so this stays manual.
fn fmt_minute(minute: i64) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

fn fmt_range(range: &TimeRange) -> String {
    format!(
        "{}-{}  ({} min)",
        fmt_minute(range.start()),
        fmt_minute(range.end()),
        range.duration()
    )
}

fn render_slots(slots: &[TimeRange], duration_minutes: u32) -> String {
    if slots.is_empty() {
        return format!("no slot fits a {duration_minutes} min meeting\n");
    }
    let mut out = String::new();
    for slot in slots {
        out.push_str(&fmt_range(slot));
        out.push('\n');
    }
    out
}

fn render_report(availability: &DayAvailability, conflicts: &[Conflict]) -> String {
    let mut out = String::new();

    out.push_str("busy:\n");
    if availability.busy.is_empty() {
        out.push_str("  (none)\n");
    }
    for block in &availability.busy {
        out.push_str(&format!("  {}\n", fmt_range(block)));
    }

    out.push_str("free:\n");
    if availability.free.is_empty() {
        out.push_str("  (none)\n");
    }
    for block in &availability.free {
        out.push_str(&format!("  {}\n", fmt_range(block)));
    }

    if !conflicts.is_empty() {
        out.push_str("double-booked:\n");
        for conflict in conflicts {
            out.push_str(&format!(
                "  '{}' overlaps '{}' for {} min\n",
                conflict.first.title(),
                conflict.second.title(),
                conflict.overlap_minutes
            ));
        }
    }

    out
}

fn to_pretty_json<T: serde::Serialize>(value: &T) -> Result<String> {
    let mut rendered = serde_json::to_string_pretty(value)?;
    rendered.push('\n');
    Ok(rendered)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("failed to read file: {path}"))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("failed to write file: {path}"))?;
        }
        None => {
            print!("{content}");
        }
    }
    Ok(())
}
