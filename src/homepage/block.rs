use regex::Regex;
use std::sync::LazyLock;

use crate::sanitize::fold_digits;
use crate::types::flight::FlightFields;

// Example block (one item per line):
// 2026年2月10日（火）
// 運賃：
// ビジネスフレックス
// 11:55東京 (羽田)
// 14:50 沖縄 (那覇)
// クラス： クラス J
// 便名：JAL915
//
// Digits in dates, times and flight numbers may be full-width.

/// Lines examined after a date header, counting the header itself.
pub const LOOKAHEAD_LINES: usize = 15;

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9０-９]{4})年([0-9０-９]{1,2})月([0-9０-９]{1,2})日")
        .expect("valid date header regex")
});
static TIME_LEAD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9０-９]{1,2}:[0-9０-９]{2}").expect("valid time lead regex")
});
static DEPARTURE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9０-９]{1,2}:[0-9０-９]{2})(.+)").expect("valid departure regex")
});
static ARRIVAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9０-９]{1,2}:[0-9０-９]{2})\s*(.+)").expect("valid arrival regex")
});
static CLASS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"クラス[：:]\s*(.+)").expect("valid class regex"));
static FLIGHT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"便名[：:]\s*JAL([0-9０-９]+)").expect("valid flight regex"));

const CLASS_MARKERS: [&str; 2] = ["クラス：", "クラス:"];
const FLIGHT_MARKERS: [&str; 2] = ["便名：", "便名:"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DateHeader {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// Outcome of scanning the window after one date header.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BlockScan {
    /// Complete draft, or `None` when a required field was never seen.
    pub fields: Option<FlightFields>,
    /// Index of the line the scan stopped at: either a nested date header or
    /// one past the last line of the window.
    pub end: usize,
}

pub(crate) fn date_header(line: &str) -> Option<DateHeader> {
    let caps = DATE_RE.captures(line)?;
    Some(DateHeader {
        year: fold_digits(&caps[1]).parse().ok()?,
        month: fold_digits(&caps[2]).parse().ok()?,
        day: fold_digits(&caps[3]).parse().ok()?,
    })
}

fn time_and_label(line: &str, re: &Regex) -> Option<(String, String)> {
    let caps = re.captures(line)?;
    let label: &str = caps[2].trim();
    if label.is_empty() {
        return None;
    }
    Some((fold_digits(&caps[1]), label.to_string()))
}

fn marked_capture(line: &str, markers: &[&str], re: &Regex) -> Option<String> {
    if !markers.iter().any(|marker| line.contains(marker)) {
        return None;
    }
    re.captures(line).map(|caps| caps[1].trim().to_string())
}

#[derive(Default)]
struct Draft {
    departure: Option<(String, String)>,
    arrival: Option<(String, String)>,
    seat_class: Option<String>,
    flight_no: Option<String>,
}

/// Scans the lookahead window of the date header at `start`.
///
/// Within the window:
/// - the first time-leading line is claimed as departure, the next one as arrival;
/// - class and flight-number lines are picked up wherever they appear;
/// - a later class or flight-number line overrides an earlier one;
/// - a date header after the first window line stops the scan.
///
/// The window covers lines `start + 1 .. start + LOOKAHEAD_LINES`.
pub(crate) fn scan(lines: &[String], start: usize, header: DateHeader) -> BlockScan {
    let limit: usize = lines.len().min(start + LOOKAHEAD_LINES);
    let mut draft: Draft = Draft::default();
    let mut j: usize = start + 1;

    while j < limit {
        let current: &str = &lines[j];
        let leads_with_time: bool = TIME_LEAD_RE.is_match(current);

        if draft.departure.is_none()
            && leads_with_time
            && let Some(dep) = time_and_label(current, &DEPARTURE_RE)
        {
            draft.departure = Some(dep);
            j += 1;
            continue;
        }

        if draft.departure.is_some()
            && draft.arrival.is_none()
            && leads_with_time
            && let Some(arr) = time_and_label(current, &ARRIVAL_RE)
        {
            draft.arrival = Some(arr);
        }

        if let Some(class) = marked_capture(current, &CLASS_MARKERS, &CLASS_RE) {
            draft.seat_class = Some(class);
        }

        if let Some(number) = marked_capture(current, &FLIGHT_MARKERS, &FLIGHT_RE) {
            draft.flight_no = Some(fold_digits(&number));
        }

        // nested date header: this block cannot extend past it
        if j > start + 1 && DATE_RE.is_match(current) {
            break;
        }

        j += 1;
    }

    BlockScan {
        fields: complete(draft, header),
        end: j,
    }
}

fn complete(draft: Draft, header: DateHeader) -> Option<FlightFields> {
    let (dep_time, dep_label) = draft.departure?;
    let (arr_time, arr_label) = draft.arrival?;
    let flight_no: String = draft.flight_no?;
    Some(FlightFields {
        year: header.year,
        month: header.month,
        day: header.day,
        flight_no,
        dep_label,
        dep_time,
        arr_label,
        arr_time,
        seat_class: draft.seat_class,
        seat_no: None,
    })
}
