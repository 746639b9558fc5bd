//! # ics
//!
//! Serializes [`FlightRecord`]s into iCalendar text: one `VEVENT` per flight,
//! wrapped in a single `VCALENDAR` envelope.
//!
//! Event times are written as local times in `Asia/Tokyo` (fixed UTC+9),
//! `DTSTAMP` in UTC.

mod escape;

pub use escape::{escape_text, unescape_text};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::sanitize::truncate_chars;
use crate::save::write_output;
use crate::types::errors::SaveError;
use crate::types::flight::FlightRecord;

/// Suggested file name for the combined calendar.
pub const CALENDAR_FILE_NAME: &str = "jal_flights_all.ics";
pub const CALENDAR_MEDIA_TYPE: &str = "text/calendar";
/// `TZID` written on `DTSTART`/`DTEND`.
pub const CIVIL_TZID: &str = "Asia/Tokyo";
/// Longest airport code placed in a summary.
pub const MAX_CODE_LEN: usize = 8;
pub const PRODID: &str = "-//JAL Flight Parser//JP";
/// Right-hand side of every generated `UID`.
pub const UID_DOMAIN: &str = "jal-parser";

const LOCAL_FORMAT: &str = "%Y%m%dT%H%M%S";
const UTC_FORMAT: &str = "%Y%m%dT%H%M%SZ";

// Per-event values that do not come from the flight itself.
struct EventStamp {
    uid: String,
    dtstamp: DateTime<Utc>,
}

impl EventStamp {
    fn fresh() -> Self {
        EventStamp {
            uid: format!("{}@{}", Uuid::new_v4(), UID_DOMAIN),
            dtstamp: Utc::now(),
        }
    }
}

/// Serializes one flight as a self-contained `VEVENT` block.
///
/// Every call generates a new `UID` and stamps the current UTC time.
pub fn to_event(flight: &FlightRecord) -> String {
    let mut out: String = String::new();
    write_event(&mut out, flight, &EventStamp::fresh());
    out
}

/// Serializes flights into one `VCALENDAR` document.
///
/// Events are independent of each other and appear in input order.
///
/// # Example
/// ```
/// use jal_ics::{ics, parse::parse_flights, samples};
///
/// let flights = parse_flights(samples::EMAIL);
/// let doc = ics::to_calendar(&flights);
/// assert!(doc.starts_with("BEGIN:VCALENDAR\n"));
/// assert_eq!(doc.matches("BEGIN:VEVENT").count(), 3);
/// ```
pub fn to_calendar(flights: &[FlightRecord]) -> String {
    let mut out: String = String::new();
    out.push_str("BEGIN:VCALENDAR\n");
    out.push_str(&format!("PRODID:{}\n", PRODID));
    out.push_str("VERSION:2.0\n");
    out.push_str("CALSCALE:GREGORIAN\n");
    out.push_str("METHOD:PUBLISH\n");
    for flight in flights {
        write_event(&mut out, flight, &EventStamp::fresh());
    }
    out.push_str("END:VCALENDAR\n");
    out
}

/// Serializes flights into one calendar and writes it to `path`.
///
/// Ensures the destination has a `.ics` extension and creates intermediate
/// directories when needed.
pub fn save_to_file(path: &str, flights: &[FlightRecord]) -> Result<(), SaveError> {
    write_output(path, "ics", to_calendar(flights).as_bytes())
}

fn write_event(out: &mut String, flight: &FlightRecord, stamp: &EventStamp) {
    let dep_code: String = flight.dep_code();
    let arr_code: String = flight.arr_code();

    let summary: String = escape_text(&format!(
        "{} {}->{}",
        flight.flight_code(),
        truncate_chars(&dep_code, MAX_CODE_LEN),
        truncate_chars(&arr_code, MAX_CODE_LEN)
    ));
    let location: String = escape_text(&format!("{} -> {}", flight.dep_label(), flight.arr_label()));
    let description: String = escape_text(&description(flight, &dep_code, &arr_code));

    out.push_str("BEGIN:VEVENT\n");
    out.push_str(&format!("UID:{}\n", stamp.uid));
    out.push_str(&format!("DTSTAMP:{}\n", stamp.dtstamp.format(UTC_FORMAT)));
    out.push_str(&format!(
        "DTSTART;TZID={}:{}\n",
        CIVIL_TZID,
        flight.departure().format(LOCAL_FORMAT)
    ));
    out.push_str(&format!(
        "DTEND;TZID={}:{}\n",
        CIVIL_TZID,
        flight.arrival().format(LOCAL_FORMAT)
    ));
    out.push_str(&format!("SUMMARY:{}\n", summary));
    out.push_str(&format!("LOCATION:{}\n", location));
    out.push_str(&format!("DESCRIPTION:{}\n", description));
    out.push_str("END:VEVENT\n");
}

fn description(flight: &FlightRecord, dep_code: &str, arr_code: &str) -> String {
    let mut lines: Vec<String> = vec![
        format!("Flight: {}", flight.flight_code()),
        format!("From: {} ({}) {}", flight.dep_label(), dep_code, flight.dep_time()),
        format!("To: {} ({}) {}", flight.arr_label(), arr_code, flight.arr_time()),
    ];
    if flight.seat_class().is_some() || flight.seat_no().is_some() {
        let seat: String = format!(
            "Seat: {} {}",
            flight.seat_class().unwrap_or_default(),
            flight.seat_no().unwrap_or_default()
        );
        lines.push(seat.trim().to_string());
    }
    lines.join("\n")
}
