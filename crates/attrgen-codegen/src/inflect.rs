//! Rails-style inflections used for C identifiers and display labels.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static ACRONYM_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").expect("valid regex"));
static CASE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z\d])([A-Z])").expect("valid regex"));
static TRAILING_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_id$").expect("valid regex"));
static WORD_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b('?\w)").expect("valid regex"));

/// Domain acronyms restored after title-casing, applied in order.
pub const ACRONYM_FIXES: &[(&str, &str)] = &[
    ("Lwm2 M", "LwM2M"),
    ("Dhcp", "DHCP"),
    ("Ipv4", "IPv4"),
    ("Ipv6", "IPv6"),
    ("2 D", "2D"),
    ("3 D", "3D"),
];

/// `ledMode` -> `led_mode`, `HTTPServer` -> `http_server`.
pub fn underscore(word: &str) -> String {
    let word = ACRONYM_BOUNDARY.replace_all(word, "${1}_${2}");
    let word = CASE_BOUNDARY.replace_all(&word, "${1}_${2}");
    word.replace('-', "_").to_lowercase()
}

/// `NETWORK_INIT` -> `Network Init`.
pub fn titleize(word: &str) -> String {
    let titled = title_case(&humanize(&underscore(word)));
    WORD_START
        .replace_all(&titled, |caps: &Captures<'_>| capitalize(&caps[1]))
        .into_owned()
}

/// Restore canonical casing of known acronyms in generated text.
pub fn apply_acronym_fixes(text: &str) -> String {
    ACRONYM_FIXES
        .iter()
        .fold(text.to_string(), |acc, &(from, to)| acc.replace(from, to))
}

fn humanize(word: &str) -> String {
    let word = TRAILING_ID.replace(word, "").replace('_', " ");
    let mut chars = word.chars().map(|c| c.to_ascii_lowercase());
    match chars.next() {
        Some(first) if first.is_alphanumeric() => first.to_uppercase().chain(chars).collect(),
        Some(first) => std::iter::once(first).chain(chars).collect(),
        None => String::new(),
    }
}

/// Uppercase a cased character that follows an uncased one, lowercase
/// every other cased character.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_cased = false;
    for c in text.chars() {
        if c.is_uppercase() || c.is_lowercase() {
            if previous_cased {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            previous_cased = true;
        } else {
            out.push(c);
            previous_cased = false;
        }
    }
    out
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
