// Text escaping for iCalendar property values.
//
// Values are field-trimmed first, then escaped, so the length cap applies to
// the visible text and cannot be dodged by escape inflation.

use crate::sanitize::trim_field;

/// Trims `value` as a field, then escapes `\`, newline, `;` and `,`.
pub fn escape_text(value: &str) -> String {
    let trimmed: String = trim_field(value);
    let mut escaped: String = String::with_capacity(trimmed.len());
    for ch in trimmed.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            ';' => escaped.push_str("\\;"),
            ',' => escaped.push_str("\\,"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Reverses [`escape_text`]. Unknown escapes are kept as written.
pub fn unescape_text(value: &str) -> String {
    let mut out: String = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') | Some('N') => out.push('\n'),
            Some('\\') => out.push('\\'),
            Some(';') => out.push(';'),
            Some(',') => out.push(','),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sanitize::MAX_FIELD_LEN;

    #[test]
    fn escapes_the_four_special_characters() {
        assert_eq!(escape_text("a\\b\nc;d,e"), "a\\\\b\\nc\\;d\\,e");
    }

    #[test]
    fn round_trip_restores_field_content() {
        for original in [
            "東京(羽田) -> 札幌(新千歳)",
            "Flight: JAL511\nFrom: A, B; C\\D",
            "\\n is not a newline",
            ",;,;\\\\",
        ] {
            assert_eq!(unescape_text(&escape_text(original)), original);
        }
    }

    #[test]
    fn truncates_before_escaping() {
        let raw: String = ",".repeat(MAX_FIELD_LEN + 100);
        let escaped = escape_text(&raw);
        assert_eq!(escaped.len(), MAX_FIELD_LEN * 2);
        assert_eq!(unescape_text(&escaped).chars().count(), MAX_FIELD_LEN);
    }

    #[test]
    fn unknown_escape_is_kept() {
        assert_eq!(unescape_text("a\\tb\\"), "a\\tb\\");
    }
}
