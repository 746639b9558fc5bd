//! # airport
//!
//! Maps a free-text station label (`東京(羽田)`, `Narita Airport`, ...) to a short
//! code for display and calendar summaries. Resolution never fails: when no rule
//! matches, the label itself is returned.

use regex::Regex;
use std::sync::LazyLock;

// Known labels, exact match only. Both parenthesis widths plus the spaced
// form used by the homepage layout.
const AIRPORT_CODES: &[(&str, &str)] = &[
    ("東京(羽田)", "HND"),
    ("東京（羽田）", "HND"),
    ("東京 (羽田)", "HND"),
    ("羽田", "HND"),
    ("札幌(新千歳)", "CTS"),
    ("札幌（新千歳）", "CTS"),
    ("札幌 (新千歳)", "CTS"),
    ("新千歳", "CTS"),
    ("大阪(伊丹)", "ITM"),
    ("大阪（伊丹）", "ITM"),
    ("大阪 (伊丹)", "ITM"),
    ("伊丹", "ITM"),
    ("福岡", "FUK"),
    ("那覇", "OKA"),
    ("沖縄(那覇)", "OKA"),
    ("沖縄（那覇）", "OKA"),
    ("沖縄 (那覇)", "OKA"),
    ("名古屋(中部)", "NGO"),
    ("名古屋（中部）", "NGO"),
    ("名古屋 (中部)", "NGO"),
    ("中部", "NGO"),
];

static PAREN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[（(]([^（）()]+)[)）]").expect("valid parenthesis regex"));
static CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-Z]{3})\b").expect("valid code regex"));

type Rule = fn(&str) -> Option<String>;

// First match wins.
const RULES: &[Rule] = &[from_table, from_parenthesized, from_token, from_letters];

/// Resolves `label` to a short (ideally three-letter) code.
///
/// Rules, first match wins:
/// 1. exact lookup in the known-airport table;
/// 2. a standalone three-letter uppercase token inside the first parenthesized segment;
/// 3. a standalone three-letter uppercase token anywhere in the label;
/// 4. the first three ASCII letters of the label, uppercased;
/// 5. otherwise the label unchanged.
///
/// # Example
/// ```
/// use jal_ics::airport::resolve;
///
/// assert_eq!(resolve("東京（羽田）"), "HND");
/// assert_eq!(resolve("Narita Airport"), "NAR");
/// assert_eq!(resolve("宮古"), "宮古");
/// ```
pub fn resolve(label: &str) -> String {
    RULES
        .iter()
        .find_map(|rule| rule(label))
        .unwrap_or_else(|| label.to_string())
}

fn from_table(label: &str) -> Option<String> {
    AIRPORT_CODES
        .iter()
        .find(|(known, _)| *known == label)
        .map(|(_, code)| code.to_string())
}

fn from_parenthesized(label: &str) -> Option<String> {
    let inside = PAREN_RE.captures(label)?.get(1)?.as_str();
    from_token(inside)
}

fn from_token(text: &str) -> Option<String> {
    CODE_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

fn from_letters(label: &str) -> Option<String> {
    let letters: String = label
        .chars()
        .filter(char::is_ascii_alphabetic)
        .take(3)
        .collect();
    if letters.len() < 3 {
        return None;
    }
    Some(letters.to_ascii_uppercase())
}
