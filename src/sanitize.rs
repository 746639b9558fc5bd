//! # sanitize
//!
//! Document-level and field-level cleanup applied before any parsing and before
//! any value is embedded into calendar output.
//!
//! Two tiers:
//! - [`sanitize_text`] caps the whole document (characters, then lines).
//! - [`trim_field`] caps a single extracted value.
//!
//! Both strip the same set of ASCII control characters; `\t` and `\n` are kept,
//! `\r` is removed separately by the document tier.

use encoding_rs::{DecoderResult, UTF_8};
use log::warn;

/// Maximum number of characters kept from a document.
pub const MAX_INPUT_CHARS: usize = 20_000;
/// Maximum number of lines kept from a document (after the character cap).
pub const MAX_LINES: usize = 2_000;
/// Maximum number of characters kept from a single extracted field.
pub const MAX_FIELD_LEN: usize = 200;
/// Maximum number of bytes accepted from an uploaded file.
pub const MAX_UPLOAD_BYTES: usize = 200_000;

const FULL_WIDTH_SPACE: char = '\u{3000}';

// 0x00-0x08, 0x0B, 0x0C, 0x0E-0x1F, 0x7F
fn is_stripped_control(ch: char) -> bool {
    matches!(ch, '\u{00}'..='\u{08}' | '\u{0B}' | '\u{0C}' | '\u{0E}'..='\u{1F}' | '\u{7F}')
}

fn strip_control_chars(text: &str) -> String {
    text.chars().filter(|ch| !is_stripped_control(*ch)).collect()
}

/// Returns the longest prefix of `text` holding at most `max` characters.
pub(crate) fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Cleans a raw document so it is safe for line scanning and later embedding.
///
/// Rules, in order:
/// 1. strip ASCII control characters except `\t`, `\n` and `\r`;
/// 2. replace the full-width space `U+3000` with an ASCII space;
/// 3. remove carriage returns;
/// 4. keep at most [`MAX_INPUT_CHARS`] characters;
/// 5. keep at most [`MAX_LINES`] lines.
///
/// Oversized input is truncated, never rejected. The function is idempotent:
/// `sanitize_text(&sanitize_text(x)) == sanitize_text(x)`.
///
/// # Example
/// ```
/// use jal_ics::sanitize::sanitize_text;
///
/// let clean = sanitize_text("2025年9月20日\u{3000}JAL511便\r\n");
/// assert_eq!(clean, "2025年9月20日 JAL511便\n");
/// ```
pub fn sanitize_text(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let mut text: String = strip_control_chars(raw)
        .replace(FULL_WIDTH_SPACE, " ")
        .replace('\r', "");

    let kept: usize = truncate_chars(&text, MAX_INPUT_CHARS).len();
    if kept < text.len() {
        warn!("input truncated to {} characters", MAX_INPUT_CHARS);
        text.truncate(kept);
    }

    let line_count: usize = text.split('\n').count();
    if line_count > MAX_LINES {
        warn!("input truncated from {} to {} lines", line_count, MAX_LINES);
        text = text.split('\n').take(MAX_LINES).collect::<Vec<_>>().join("\n");
    }

    text
}

/// Cleans one extracted value: control characters removed, surrounding
/// whitespace trimmed, then capped at [`MAX_FIELD_LEN`] characters.
pub fn trim_field(value: &str) -> String {
    let stripped: String = strip_control_chars(value);
    truncate_chars(stripped.trim(), MAX_FIELD_LEN).to_string()
}

/// Decodes uploaded bytes as UTF-8.
///
/// At most [`MAX_UPLOAD_BYTES`] bytes are considered. Malformed sequences,
/// including a character cut in half by the byte cap, are dropped rather than
/// replaced with `U+FFFD`.
pub fn decode_input(bytes: &[u8]) -> String {
    let capped: &[u8] = if bytes.len() > MAX_UPLOAD_BYTES {
        warn!("upload truncated to {} bytes", MAX_UPLOAD_BYTES);
        &bytes[..MAX_UPLOAD_BYTES]
    } else {
        bytes
    };

    let mut decoder = UTF_8.new_decoder_without_bom_handling();
    let mut out: String = String::with_capacity(capped.len());
    let mut src: &[u8] = capped;

    loop {
        let (result, read) = decoder.decode_to_string_without_replacement(src, &mut out, true);
        src = &src[read..];
        match result {
            DecoderResult::InputEmpty => break,
            DecoderResult::Malformed(_, _) => continue, // skip the bad sequence
            DecoderResult::OutputFull => {
                let needed: usize = decoder
                    .max_utf8_buffer_length_without_replacement(src.len())
                    .unwrap_or(src.len());
                out.reserve(needed.max(4));
            }
        }
    }

    out
}

/// Splits a sanitized document into trimmed, non-empty lines.
///
/// Applies the same width-form and carriage-return normalization as
/// [`sanitize_text`] so callers handing in unsanitized text still scan
/// consistently.
pub(crate) fn content_lines(text: &str) -> Vec<String> {
    text.replace(FULL_WIDTH_SPACE, " ")
        .replace('\r', "")
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Maps full-width digits (`０`..`９`) to ASCII, leaving everything else as is.
///
/// Applied to digit groups captured by the layout patterns, which accept both
/// widths, before any numeric parsing or time validation.
pub(crate) fn fold_digits(text: &str) -> String {
    text.chars()
        .map(|ch| match ch {
            '０'..='９' => char::from(b'0' + (ch as u32 - '０' as u32) as u8),
            _ => ch,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_controls_but_keeps_tabs_and_newlines() {
        let raw = "a\u{0}b\u{7}c\td\ne\u{1B}f\u{7F}";
        assert_eq!(sanitize_text(raw), "abc\td\nef");
    }

    #[test]
    fn replaces_full_width_space_and_drops_carriage_returns() {
        assert_eq!(sanitize_text("東京\u{3000}羽田\r\n次"), "東京 羽田\n次");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(sanitize_text(""), "");
    }

    #[test]
    fn caps_characters_not_bytes() {
        let raw: String = "羽".repeat(MAX_INPUT_CHARS + 10);
        let clean = sanitize_text(&raw);
        assert_eq!(clean.chars().count(), MAX_INPUT_CHARS);
    }

    #[test]
    fn caps_line_count() {
        let raw: String = vec!["x"; MAX_LINES + 5].join("\n");
        let clean = sanitize_text(&raw);
        assert_eq!(clean.split('\n').count(), MAX_LINES);
        assert!(!clean.ends_with('\n'));
    }

    #[test]
    fn sanitizing_twice_changes_nothing() {
        let long: String = "行\r\n\u{3000}\u{1}".repeat(7_000);
        let inputs = [
            "2025年9月20日（土）\u{3000}JAL511便\r\n東京(羽田)10:30発",
            "\u{0}\u{0}",
            long.as_str(),
        ];
        for raw in inputs {
            let once = sanitize_text(raw);
            assert_eq!(sanitize_text(&once), once);
        }
    }

    #[test]
    fn trim_field_strips_and_caps() {
        assert_eq!(trim_field("  J\u{8} "), "J");
        let long: String = "あ".repeat(MAX_FIELD_LEN * 2);
        assert_eq!(trim_field(&long).chars().count(), MAX_FIELD_LEN);
    }

    #[test]
    fn trim_field_keeps_inner_newlines() {
        assert_eq!(trim_field("a\nb"), "a\nb");
    }

    #[test]
    fn decode_drops_invalid_sequences() {
        let mut bytes: Vec<u8> = "JAL".as_bytes().to_vec();
        bytes.extend_from_slice(&[0xFF, 0xFE]);
        bytes.extend_from_slice("511便".as_bytes());
        assert_eq!(decode_input(&bytes), "JAL511便");
    }

    #[test]
    fn decode_caps_bytes_and_drops_split_char() {
        let mut bytes: Vec<u8> = vec![b'a'; MAX_UPLOAD_BYTES - 1];
        bytes.extend_from_slice("便".as_bytes()); // 3 bytes, only the first fits
        let decoded = decode_input(&bytes);
        assert_eq!(decoded.len(), MAX_UPLOAD_BYTES - 1);
        assert!(decoded.chars().all(|c| c == 'a'));
    }

    #[test]
    fn content_lines_skip_blank_lines() {
        let lines = content_lines("  a \r\n\n\u{3000}\n b\u{3000}c ");
        assert_eq!(lines, vec!["a".to_string(), "b c".to_string()]);
    }

    #[test]
    fn fold_digits_maps_only_full_width_digits() {
        assert_eq!(fold_digits("２０２６年２月１０日"), "2026年2月10日");
        assert_eq!(fold_digits("JAL９１５ 12:05"), "JAL915 12:05");
        assert_eq!(fold_digits("第２ターミナル（Ａ）"), "第2ターミナル（Ａ）");
    }
}
