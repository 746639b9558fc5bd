//! # jal_ics
//!
//! Rust utilities for turning pasted **JAL itinerary** text into calendar files.
//!
//! ## Highlights
//! - **Two layouts**: confirmation emails ([`email`]) and booking-page copies
//!   ([`homepage`]), tried in that order by [`parse::parse_flights`].
//! - **Validated records**: every [`FlightRecord`] has checked clock times and
//!   a real calendar date; fields are trimmed and length-capped.
//! - **Bounded work**: input is capped at the [`sanitize`] boundary and the
//!   homepage window is fixed, so parsing is linear in the input size.
//! - **Calendar export**: one `VEVENT` per flight at UTC+9 with overnight
//!   arrivals moved to the next day ([`ics`]), plus a zip of per-flight
//!   calendars ([`archive`]).
//! - **Table rows**: [`FlightRow`] serializes with display column names.
//!
//! ```
//! use jal_ics::{ics, parse::parse_flights, rows};
//!
//! let text = "2025年9月20日（土） JAL511便\n東京(羽田)10:30発        札幌(新千歳)12:05着";
//! let flights = parse_flights(text);
//! assert_eq!(rows(&flights)[0].from, "東京(羽田) (HND)");
//! assert!(ics::to_calendar(&flights).contains("SUMMARY:JAL511 HND->CTS"));
//! ```

pub mod airport;
#[cfg(feature = "archive")]
pub mod archive;
pub mod email;
pub mod homepage;
#[cfg(feature = "ics")]
pub mod ics;
pub mod parse;
pub mod samples;
pub mod sanitize;
#[cfg(feature = "ics")]
mod save;
#[doc(hidden)]
pub mod types;

// Top-level re-exports (appear under Crate Items → Structs)
#[doc(inline)]
pub use crate::types::{
    clock_time::{ClockTime, is_valid_time},
    errors::{InputError, RecordError, SaveError},
    flight::{FlightFields, FlightRecord},
    row::{FlightRow, rows},
};

#[cfg(feature = "archive")]
#[doc(inline)]
pub use crate::types::errors::ArchiveError;

pub use crate::parse::{Itinerary, ItineraryFormat, parse_flights, parse_itinerary};
