//! # email
//!
//! Scanner for the confirmation-email layout: a header line with date and
//! flight number, a route line right after it and an optional seat line right
//! after the route.
//! Use [`parse`] to turn a document into [`FlightRecord`]s.

pub(crate) mod line;

use log::{debug, trace};

use crate::sanitize::content_lines;
use crate::types::flight::{FlightFields, FlightRecord};

/// Extracts every flight written in the email layout.
///
/// The text is scanned **line by line** (blank lines dropped, each line
/// trimmed). Surrounding noise is ignored: only lines carrying all header
/// markers (`JAL`, `便`, `年`, `月`, `日`) start a block.
///
/// A block becomes a [`FlightRecord`] when:
/// - the header regex yields a date and a flight number;
/// - the next line is a route line with both departure and arrival segments;
/// - both times pass the time-validity check and the date exists.
///
/// The seat line is optional; when present it must be the line right after
/// the route line and start with `座席`.
///
/// # Behavior & Invariants
/// - Malformed blocks are dropped silently (logged at `debug`) and scanning
///   resumes at the next line.
/// - Output order follows input order.
///
/// # Complexity
/// - Time: O(N) over the number of lines.
pub fn parse(text: &str) -> Vec<FlightRecord> {
    let lines: Vec<String> = content_lines(text);
    let mut flights: Vec<FlightRecord> = Vec::new();

    for (idx, current) in lines.iter().enumerate() {
        if !line::is_header_candidate(current) {
            continue;
        }

        let Some(header) = line::header(current) else {
            debug!("email: line {} has header markers but no date/flight", idx);
            continue;
        };

        let Some(route) = lines.get(idx + 1).and_then(|l| line::route(l)) else {
            debug!("email: JAL{} at line {} has no usable route line", header.flight_no, idx);
            continue;
        };

        let seat: line::Seat = lines
            .get(idx + 2)
            .and_then(|l| line::seat(l))
            .unwrap_or_default();

        let fields: FlightFields = FlightFields {
            year: header.year,
            month: header.month,
            day: header.day,
            flight_no: header.flight_no,
            dep_label: route.departure.label,
            dep_time: route.departure.time,
            arr_label: route.arrival.label,
            arr_time: route.arrival.time,
            seat_class: seat.class,
            seat_no: seat.number,
        };

        match FlightRecord::try_from(fields) {
            Ok(flight) => {
                trace!("email: JAL{} accepted at line {}", flight.flight_no(), idx);
                flights.push(flight);
            }
            Err(e) => debug!("email: block at line {} dropped: {}", idx, e),
        }
    }

    flights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples;

    #[test]
    fn parses_single_block_with_seat() {
        let text = "2025年9月20日（土）　JAL511便\n東京(羽田)10:30発        札幌(新千歳)12:05着\n座席：クラス J 座席番号：15H";
        let flights = parse(text);
        assert_eq!(flights.len(), 1);
        let f = &flights[0];
        assert_eq!((f.year(), f.month(), f.day()), (2025, 9, 20));
        assert_eq!(f.flight_no(), "511");
        assert_eq!(f.dep_label(), "東京(羽田)");
        assert_eq!(f.dep_time(), "10:30");
        assert_eq!(f.arr_label(), "札幌(新千歳)");
        assert_eq!(f.arr_time(), "12:05");
        assert_eq!(f.seat_class(), Some("J"));
        assert_eq!(f.seat_no(), Some("15H"));
    }

    #[test]
    fn parses_full_width_header() {
        let flights = parse("２０２５年９月２０日 JAL５１１便\n東京(羽田)10:30発  札幌(新千歳)12:05着");
        assert_eq!(flights.len(), 1);
        let f = &flights[0];
        assert_eq!((f.year(), f.month(), f.day()), (2025, 9, 20));
        assert_eq!(f.flight_code(), "JAL511");
        assert_eq!(f.departure().to_rfc3339(), "2025-09-20T10:30:00+09:00");
    }

    #[test]
    fn parses_bundled_sample_in_order() {
        let flights = parse(samples::EMAIL);
        let numbers: Vec<&str> = flights.iter().map(|f| f.flight_no()).collect();
        assert_eq!(numbers, vec!["511", "528", "999"]);
        assert_eq!(flights[1].seat_no(), Some("8D"));
        assert_eq!(flights[2].seat_class(), None);
        assert_eq!(flights[2].seat_no(), None);
        assert_eq!(flights[2].arr_code(), "AAA");
    }

    #[test]
    fn ignores_noise_between_blocks() {
        let text = "ご予約ありがとうございます。\n\n\
                    2025年9月20日（土） JAL511便\n\
                    東京(羽田)10:30発        札幌(新千歳)12:05着\n\
                    お問い合わせ：0570-025-071\n\
                    2025年9月23日（火） JAL528便\n\
                    札幌(新千歳)21:15発\t東京(羽田)22:55着\n";
        let flights = parse(text);
        assert_eq!(flights.len(), 2);
        assert_eq!(flights[0].seat_class(), None);
        assert_eq!(flights[1].flight_no(), "528");
    }

    #[test]
    fn seat_line_must_follow_route_directly() {
        let text = "2025年9月20日 JAL511便\n東京(羽田)10:30発  札幌(新千歳)12:05着\nメモ\n座席：クラス J 座席番号：15H";
        let flights = parse(text);
        assert_eq!(flights.len(), 1);
        assert_eq!(flights[0].seat_no(), None);
    }

    #[test]
    fn invalid_time_drops_block_and_scanning_continues() {
        let text = "2025年9月20日 JAL511便\n東京(羽田)25:30発  札幌(新千歳)12:05着\n\
                    2025年9月21日 JAL513便\n東京(羽田)11:30発  札幌(新千歳)13:05着";
        let flights = parse(text);
        assert_eq!(flights.len(), 1);
        assert_eq!(flights[0].flight_no(), "513");
    }

    #[test]
    fn impossible_date_drops_block() {
        let text = "2025年2月30日 JAL511便\n東京(羽田)10:30発  札幌(新千歳)12:05着";
        assert!(parse(text).is_empty());
    }

    #[test]
    fn header_at_end_of_text_yields_nothing() {
        assert!(parse("2025年9月20日 JAL511便").is_empty());
    }

    #[test]
    fn homepage_layout_is_not_recognized() {
        assert!(parse(samples::HOMEPAGE).is_empty());
    }
}
