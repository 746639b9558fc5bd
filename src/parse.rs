//! # parse
//!
//! Entry points turning raw itinerary text into [`FlightRecord`]s.
//!
//! The two layouts are tried in a fixed order: email first, homepage second.
//! The first parser that yields at least one record wins; results are never
//! merged across layouts.

use log::debug;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufReader, Read};

use crate::sanitize::{MAX_UPLOAD_BYTES, decode_input, sanitize_text};
use crate::types::errors::InputError;
use crate::types::flight::FlightRecord;
use crate::{email, homepage};

/// Itinerary layouts the dispatcher knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItineraryFormat {
    /// Confirmation email: header, route and seat lines.
    Email,
    /// Booking pages: date header followed by one item per line.
    Homepage,
}

/// Flights found in a document, with the layout that produced them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Itinerary {
    /// `None` when no layout produced a flight.
    pub format: Option<ItineraryFormat>,
    pub flights: Vec<FlightRecord>,
}

type FormatParser = fn(&str) -> Vec<FlightRecord>;

// Tried in order, first non-empty result wins.
const PARSERS: &[(ItineraryFormat, FormatParser)] = &[
    (ItineraryFormat::Email, email::parse),
    (ItineraryFormat::Homepage, homepage::parse),
];

/// Sanitizes `raw` and runs the layout parsers in order.
///
/// # Example
/// ```
/// use jal_ics::parse::{parse_itinerary, ItineraryFormat};
///
/// let text = "2026年2月10日（火）\n11:55東京 (羽田)\n14:50 沖縄 (那覇)\n便名：JAL915";
/// let itinerary = parse_itinerary(text);
/// assert_eq!(itinerary.format, Some(ItineraryFormat::Homepage));
/// assert_eq!(itinerary.flights[0].flight_no(), "915");
/// ```
pub fn parse_itinerary(raw: &str) -> Itinerary {
    let text: String = sanitize_text(raw);

    for (format, parser) in PARSERS {
        let flights: Vec<FlightRecord> = parser(&text);
        if !flights.is_empty() {
            debug!("{:?} layout produced {} flight(s)", format, flights.len());
            return Itinerary {
                format: Some(*format),
                flights,
            };
        }
        debug!("{:?} layout produced nothing", format);
    }

    Itinerary::default()
}

/// Sanitizes `raw` and returns the flights of the first layout that matches.
///
/// An empty vector means nothing recognizable was found; this is not an error.
pub fn parse_flights(raw: &str) -> Vec<FlightRecord> {
    parse_itinerary(raw).flights
}

/// Loads a `.txt` itinerary, decoded as UTF-8 and sanitized.
///
/// # Errors
/// - [`InputError::InvalidExtension`] if `path` does not end with `.txt`.
/// - [`InputError::TooLarge`] if the file exceeds [`MAX_UPLOAD_BYTES`].
/// - [`InputError::OpenFile`] / [`InputError::Read`] on I/O failures.
///
/// Invalid UTF-8 sequences are dropped, not reported.
pub fn read_input_file(path: &str) -> Result<String, InputError> {
    if !path.to_ascii_lowercase().ends_with(".txt") {
        return Err(InputError::InvalidExtension {
            path: path.to_string(),
        });
    }

    let size: u64 = fs::metadata(path)
        .map_err(|source| InputError::OpenFile {
            path: path.to_string(),
            source,
        })?
        .len();
    if size > MAX_UPLOAD_BYTES as u64 {
        return Err(InputError::TooLarge {
            path: path.to_string(),
            size,
            limit: MAX_UPLOAD_BYTES,
        });
    }

    let file: File = File::open(path).map_err(|source| InputError::OpenFile {
        path: path.to_string(),
        source,
    })?;
    let mut reader: BufReader<File> = BufReader::new(file);

    let mut bytes: Vec<u8> = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|source| InputError::Read {
            path: path.to_string(),
            source,
        })?;

    Ok(sanitize_text(&decode_input(&bytes)))
}

/// Loads a `.txt` itinerary and parses it, see [`read_input_file`] and [`parse_flights`].
pub fn parse_from_file(path: &str) -> Result<Vec<FlightRecord>, InputError> {
    let text: String = read_input_file(path)?;
    Ok(parse_flights(&text))
}
