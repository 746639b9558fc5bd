//! # homepage
//!
//! Scanner for the itinerary as copied from the carrier's booking pages: one
//! item per line, a date header followed by time, class and flight-number
//! lines in a loosely fixed order.

pub(crate) mod block;

pub use block::LOOKAHEAD_LINES;

use log::{debug, trace};

use crate::sanitize::content_lines;
use crate::types::flight::FlightRecord;

/// Extracts every flight written in the homepage layout.
///
/// An explicit cursor walks the trimmed, non-empty lines. At each date header
/// (`YYYY年M月D日…` at line start) a bounded window of
/// [`LOOKAHEAD_LINES`] lines is scanned for departure, arrival, class and
/// flight number (see the rules on the window scan).
///
/// Cursor moves:
/// - block accepted: jump to the last line the window consumed, so a date
///   header that stopped the window is examined next;
/// - block rejected: advance one line only.
///
/// Seat numbers are never filled by this layout.
///
/// # Complexity
/// - Time: O(N · LOOKAHEAD_LINES) over the number of lines.
pub fn parse(text: &str) -> Vec<FlightRecord> {
    let lines: Vec<String> = content_lines(text);
    let mut flights: Vec<FlightRecord> = Vec::new();
    let mut cursor: usize = 0;

    while cursor < lines.len() {
        let Some(header) = block::date_header(&lines[cursor]) else {
            cursor += 1;
            continue;
        };

        let scan: block::BlockScan = block::scan(&lines, cursor, header);
        let accepted: Option<FlightRecord> = match scan.fields.map(FlightRecord::try_from) {
            Some(Ok(flight)) => Some(flight),
            Some(Err(e)) => {
                debug!("homepage: block at line {} dropped: {}", cursor, e);
                None
            }
            None => {
                debug!("homepage: block at line {} is incomplete", cursor);
                None
            }
        };

        match accepted {
            Some(flight) => {
                let next: usize = scan.end.saturating_sub(1).max(cursor + 1);
                trace!("homepage: JAL{} accepted, cursor {} -> {}", flight.flight_no(), cursor, next);
                flights.push(flight);
                cursor = next;
            }
            None => cursor += 1,
        }
    }

    flights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples;

    #[test]
    fn parses_single_block() {
        let text = "2026年2月10日（火）\n11:55東京 (羽田)\n14:50 沖縄 (那覇)\nクラス： クラス J\n便名：JAL915";
        let flights = parse(text);
        assert_eq!(flights.len(), 1);
        let f = &flights[0];
        assert_eq!((f.year(), f.month(), f.day()), (2026, 2, 10));
        assert_eq!(f.flight_no(), "915");
        assert_eq!(f.dep_time(), "11:55");
        assert_eq!(f.dep_label(), "東京 (羽田)");
        assert_eq!(f.arr_time(), "14:50");
        assert_eq!(f.arr_label(), "沖縄 (那覇)");
        assert_eq!(f.seat_class(), Some("クラス J"));
        assert_eq!(f.seat_no(), None);
    }

    #[test]
    fn parses_bundled_sample() {
        let flights = parse(samples::HOMEPAGE);
        assert_eq!(flights.len(), 2);
        assert_eq!(flights[0].flight_no(), "915");
        assert_eq!(flights[1].flight_no(), "916");
        assert_eq!(flights[1].dep_time(), "18:20");
        assert_eq!(flights[1].arr_time(), "20:30");
        assert_eq!(flights[1].dep_code(), "OKA");
        assert_eq!(flights[1].arr_code(), "HND");
    }

    #[test]
    fn back_to_back_blocks_are_both_found() {
        // second header sits right where the first window stops
        let text = "2026年2月10日（火）\n11:55東京 (羽田)\n14:50 沖縄 (那覇)\n便名：JAL915\n\
                    2026年2月13日（金）\n18:20沖縄 (那覇)\n20:30 東京 (羽田)\n便名：JAL916";
        let numbers: Vec<String> = parse(text).iter().map(|f| f.flight_no().to_string()).collect();
        assert_eq!(numbers, vec!["915", "916"]);
    }

    #[test]
    fn incomplete_block_does_not_hide_the_next_one() {
        let text = "2026年2月10日（火）\n11:55東京 (羽田)\n\
                    2026年2月13日（金）\n18:20沖縄 (那覇)\n20:30 東京 (羽田)\n便名：JAL916";
        let flights = parse(text);
        assert_eq!(flights.len(), 1);
        assert_eq!(flights[0].flight_no(), "916");
    }

    #[test]
    fn invalid_time_is_rejected() {
        let text = "2026年2月10日（火）\n11:75東京 (羽田)\n14:50 沖縄 (那覇)\n便名：JAL915";
        assert!(parse(text).is_empty());
    }

    #[test]
    fn overnight_block_keeps_raw_times() {
        let text = "2026年3月1日（日）\n23:40東京 (羽田)\n1:05 沖縄 (那覇)\n便名：JAL999";
        let flights = parse(text);
        assert_eq!(flights.len(), 1);
        assert_eq!(flights[0].arr_time(), "1:05");
        assert_eq!(
            flights[0].arrival().date_naive(),
            flights[0].date().succ_opt().unwrap()
        );
    }

    #[test]
    fn email_layout_is_not_recognized() {
        // date header present, but no time-leading lines or flight-number marker
        assert!(parse(samples::EMAIL).is_empty());
    }
}
