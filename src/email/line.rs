use regex::Regex;
use std::sync::LazyLock;

use crate::sanitize::fold_digits;

// Example block:
// 2025年9月20日（土） JAL511便
// 東京(羽田)10:30発        札幌(新千歳)12:05着
// 座席：クラス J 座席番号：15H
//
// Dates, flight numbers and times may be written with full-width digits.

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9０-９]{4})年([0-9０-９]{1,2})月([0-9０-９]{1,2})日.*?JAL([0-9０-９]+)便")
        .expect("valid email header regex")
});
static ROUTE_SPLIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}|\t+").expect("valid route split regex"));
static DEPARTURE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+?)([0-9０-９]{1,2}:[0-9０-９]{2})発").expect("valid departure regex")
});
static ARRIVAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+?)([0-9０-９]{1,2}:[0-9０-９]{2})着").expect("valid arrival regex")
});
static SEAT_CLASS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"クラス\s*([A-Zぁ-んァ-ヶ一-龠A-Za-z]+)").expect("valid seat class regex")
});
static SEAT_NO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"座席番号：?([0-9A-Z]{1,4})").expect("valid seat number regex"));

const HEADER_MARKERS: [&str; 5] = ["JAL", "便", "年", "月", "日"];
const DEPARTURE_MARKER: char = '発';
const ARRIVAL_MARKER: char = '着';
const SEAT_PREFIX: &str = "座席";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Header {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// ASCII digits only, leading zeros removed.
    pub flight_no: String,
}

/// One side of a route line: station label and clock reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Leg {
    pub label: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Route {
    pub departure: Leg,
    pub arrival: Leg,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Seat {
    pub class: Option<String>,
    pub number: Option<String>,
}

/// A header candidate carries every literal marker, wherever it sits in the line.
pub(crate) fn is_header_candidate(line: &str) -> bool {
    HEADER_MARKERS.iter().all(|marker| line.contains(marker))
}

pub(crate) fn header(line: &str) -> Option<Header> {
    let caps = HEADER_RE.captures(line)?;
    Some(Header {
        year: fold_digits(&caps[1]).parse().ok()?,
        month: fold_digits(&caps[2]).parse().ok()?,
        day: fold_digits(&caps[3]).parse().ok()?,
        flight_no: strip_leading_zeros(&fold_digits(&caps[4])),
    })
}

fn strip_leading_zeros(digits: &str) -> String {
    let trimmed: &str = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Parses `<label><time>発  <label><time>着`.
///
/// The two segments are separated by a run of two or more whitespace
/// characters or by tabs. A line that does not split keeps a single part and
/// therefore never yields a route.
pub(crate) fn route(line: &str) -> Option<Route> {
    if !line.contains(DEPARTURE_MARKER) || !line.contains(ARRIVAL_MARKER) {
        return None;
    }

    let mut parts: Vec<&str> = ROUTE_SPLIT_RE
        .split(line)
        .filter(|part| !part.is_empty())
        .collect();
    if parts.len() < 2 {
        parts = vec![line];
    }
    if parts.len() < 2 {
        return None;
    }

    Some(Route {
        departure: leg(parts[0], &DEPARTURE_RE)?,
        arrival: leg(parts[1], &ARRIVAL_RE)?,
    })
}

fn leg(segment: &str, re: &Regex) -> Option<Leg> {
    let caps = re.captures(segment.trim())?;
    let label: &str = caps[1].trim();
    if label.is_empty() {
        return None;
    }
    Some(Leg {
        label: label.to_string(),
        time: fold_digits(&caps[2]),
    })
}

/// Parses the optional seat line. Class and number are independent.
pub(crate) fn seat(line: &str) -> Option<Seat> {
    if !line.starts_with(SEAT_PREFIX) {
        return None;
    }
    Some(Seat {
        class: SEAT_CLASS_RE
            .captures(line)
            .map(|caps| caps[1].trim().to_string()),
        number: SEAT_NO_RE
            .captures(line)
            .map(|caps| caps[1].trim().to_string()),
    })
}
