//! Flight segment records produced by the itinerary parsers.
//!
//! The model is split in two:
//! - [`FlightFields`] is a mutable draft filled in while scanning text.
//! - [`FlightRecord`] is the validated, immutable result. It can only be
//!   obtained through `FlightRecord::try_from(fields)`.
//!
//! Instants and airport codes are derived on read and never stored.
use chrono::{DateTime, Datelike, Days, FixedOffset, NaiveDate, NaiveTime};

use crate::airport;
use crate::sanitize::trim_field;
use crate::types::clock_time::ClockTime;
use crate::types::errors::RecordError;

/// Offset of the civil timezone every flight time is read in (UTC+9, no DST).
pub const CIVIL_OFFSET_SECS: i32 = 9 * 3600;

/// The civil timezone as a chrono offset.
pub const CIVIL_OFFSET: FixedOffset = match FixedOffset::east_opt(CIVIL_OFFSET_SECS) {
    Some(offset) => offset,
    None => panic!("civil offset out of range"),
};

/// Draft of one flight segment, as extracted from text.
///
/// All values are raw: nothing is trimmed or validated until the draft is
/// converted into a [`FlightRecord`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlightFields {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// Numeric part of the flight number, without the `JAL` prefix.
    pub flight_no: String,
    pub dep_label: String,
    /// `H:MM` or `HH:MM`.
    pub dep_time: String,
    pub arr_label: String,
    /// `H:MM` or `HH:MM`.
    pub arr_time: String,
    pub seat_class: Option<String>,
    pub seat_no: Option<String>,
}

/// One validated one-way flight segment.
///
/// Invariants upheld by construction:
/// - both times are valid `H:MM`/`HH:MM` readings;
/// - the date exists in the proleptic Gregorian calendar;
/// - every free-text field went through [`trim_field`] and the label and
///   flight number fields are non-empty;
/// - optional seat fields are `None` rather than empty.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightRecord {
    date: NaiveDate,
    flight_no: String,
    dep_label: String,
    dep_time: ClockTime,
    arr_label: String,
    arr_time: ClockTime,
    seat_class: Option<String>,
    seat_no: Option<String>,
}

fn required(field: &'static str, value: &str) -> Result<String, RecordError> {
    let trimmed: String = trim_field(value);
    if trimmed.is_empty() {
        return Err(RecordError::MissingField { field });
    }
    Ok(trimmed)
}

fn optional(value: Option<&str>) -> Option<String> {
    value.map(trim_field).filter(|v| !v.is_empty())
}

fn clock(field: &'static str, value: &str) -> Result<ClockTime, RecordError> {
    ClockTime::parse(value).ok_or_else(|| RecordError::InvalidTime {
        field,
        value: value.to_string(),
    })
}

impl TryFrom<FlightFields> for FlightRecord {
    type Error = RecordError;

    fn try_from(fields: FlightFields) -> Result<Self, Self::Error> {
        let dep_label: String = required("dep_label", &fields.dep_label)?;
        let arr_label: String = required("arr_label", &fields.arr_label)?;
        let flight_no: String = required("flight_no", &fields.flight_no)?;
        let dep_time: ClockTime = clock("dep_time", &fields.dep_time)?;
        let arr_time: ClockTime = clock("arr_time", &fields.arr_time)?;
        let date: NaiveDate = NaiveDate::from_ymd_opt(fields.year, fields.month, fields.day)
            .ok_or(RecordError::InvalidDate {
                year: fields.year,
                month: fields.month,
                day: fields.day,
            })?;

        // the arrival may spill into a day chrono cannot represent
        if civil_instants(date, dep_time.value(), arr_time.value()).is_none() {
            return Err(RecordError::InvalidDate {
                year: fields.year,
                month: fields.month,
                day: fields.day,
            });
        }

        Ok(FlightRecord {
            date,
            flight_no,
            dep_label,
            dep_time,
            arr_label,
            arr_time,
            seat_class: optional(fields.seat_class.as_deref()),
            seat_no: optional(fields.seat_no.as_deref()),
        })
    }
}

impl FlightRecord {
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Flight number without carrier prefix, e.g. `"511"`.
    pub fn flight_no(&self) -> &str {
        &self.flight_no
    }

    /// Flight number with carrier prefix, e.g. `"JAL511"`.
    pub fn flight_code(&self) -> String {
        format!("JAL{}", self.flight_no)
    }

    pub fn dep_label(&self) -> &str {
        &self.dep_label
    }

    pub fn dep_time(&self) -> &str {
        self.dep_time.as_str()
    }

    pub fn arr_label(&self) -> &str {
        &self.arr_label
    }

    pub fn arr_time(&self) -> &str {
        self.arr_time.as_str()
    }

    pub fn seat_class(&self) -> Option<&str> {
        self.seat_class.as_deref()
    }

    pub fn seat_no(&self) -> Option<&str> {
        self.seat_no.as_deref()
    }

    /// Departure instant in the civil timezone.
    pub fn departure(&self) -> DateTime<FixedOffset> {
        self.instants().0
    }

    /// Arrival instant in the civil timezone.
    ///
    /// Same calendar date as departure, moved to the next day when the arrival
    /// clock reading is strictly earlier than the departure one. Only single
    /// overnight legs are handled.
    pub fn arrival(&self) -> DateTime<FixedOffset> {
        self.instants().1
    }

    fn instants(&self) -> (DateTime<FixedOffset>, DateTime<FixedOffset>) {
        civil_instants(self.date, self.dep_time.value(), self.arr_time.value())
            .expect("instants are checked when the record is built")
    }

    /// Short code for the departure label, see [`airport::resolve`].
    pub fn dep_code(&self) -> String {
        airport::resolve(&self.dep_label)
    }

    /// Short code for the arrival label, see [`airport::resolve`].
    pub fn arr_code(&self) -> String {
        airport::resolve(&self.arr_label)
    }
}

// Departure and arrival in the civil timezone. An arrival clock reading
// earlier than the departure one lands on the next day.
fn civil_instants(
    date: NaiveDate,
    dep: NaiveTime,
    arr: NaiveTime,
) -> Option<(DateTime<FixedOffset>, DateTime<FixedOffset>)> {
    let arr_date: NaiveDate = if arr < dep {
        date.checked_add_days(Days::new(1))?
    } else {
        date
    };
    let departure = date.and_time(dep).and_local_timezone(CIVIL_OFFSET).single()?;
    let arrival = arr_date.and_time(arr).and_local_timezone(CIVIL_OFFSET).single()?;
    Some((departure, arrival))
}
