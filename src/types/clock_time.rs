use chrono::NaiveTime;
use regex::Regex;
use std::sync::LazyLock;

static CLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{1,2}):([0-9]{2})$").expect("valid clock regex"));

/// A wall-clock reading as printed in an itinerary.
///
/// `ClockTime` keeps both the raw textual representation (`text`, e.g. `"9:05"`
/// or `"10:30"`) and the parsed value as a `NaiveTime`. The reading is
/// **naive**: it carries no date and no offset until combined with a flight date.
///
/// Only `H:MM` and `HH:MM` with hour in `0..=23` and minute in `0..=59` are
/// accepted. Seconds, `24:00`, single-digit minutes and full-width digits are
/// rejected; the layout scanners fold full-width digits to ASCII before a
/// reading gets here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockTime {
    text: String,
    value: NaiveTime,
}

impl ClockTime {
    /// Parses `H:MM` / `HH:MM`. Returns `None` for anything else.
    pub fn parse(text: &str) -> Option<Self> {
        let caps = CLOCK_RE.captures(text)?;
        let hour: u32 = caps[1].parse().ok()?;
        let minute: u32 = caps[2].parse().ok()?;
        let value: NaiveTime = NaiveTime::from_hms_opt(hour, minute, 0)?;
        Some(ClockTime {
            text: text.to_string(),
            value,
        })
    }

    /// The time exactly as it appeared in the source text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> NaiveTime {
        self.value
    }
}

/// Time-validity check shared by both parsers.
pub fn is_valid_time(text: &str) -> bool {
    ClockTime::parse(text).is_some()
}
