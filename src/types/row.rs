use serde::Serialize;

use crate::types::flight::FlightRecord;

/// Flat, display-ready view of a [`FlightRecord`].
///
/// Serializes with the column names used by table front-ends:
/// `Date, Flight, From, Dep, To, Arr, SeatClass, SeatNo`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FlightRow {
    /// `YYYY-MM-DD`
    pub date: String,
    /// `JAL<number>`
    pub flight: String,
    /// `<label> (<code>)`
    pub from: String,
    pub dep: String,
    /// `<label> (<code>)`
    pub to: String,
    pub arr: String,
    /// Empty when absent.
    pub seat_class: String,
    /// Empty when absent.
    pub seat_no: String,
}

impl From<&FlightRecord> for FlightRow {
    fn from(flight: &FlightRecord) -> Self {
        FlightRow {
            date: flight.date().format("%Y-%m-%d").to_string(),
            flight: flight.flight_code(),
            from: format!("{} ({})", flight.dep_label(), flight.dep_code()),
            dep: flight.dep_time().to_string(),
            to: format!("{} ({})", flight.arr_label(), flight.arr_code()),
            arr: flight.arr_time().to_string(),
            seat_class: flight.seat_class().unwrap_or_default().to_string(),
            seat_no: flight.seat_no().unwrap_or_default().to_string(),
        }
    }
}

/// One row per flight, in input order.
pub fn rows(flights: &[FlightRecord]) -> Vec<FlightRow> {
    flights.iter().map(FlightRow::from).collect()
}
