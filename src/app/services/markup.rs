//! Shared helpers for reading RFEN markup fragments
//!
//! Centralizes element text/attribute access and the lenient numeric
//! coercion every parser uses. Nothing here returns an error: missing or
//! malformed content degrades to the caller-chosen default.

use scraper::{ElementRef, Selector};

/// Build a selector from a static CSS pattern.
///
/// Selector patterns are compile-time constants; a malformed one is a
/// programming error, not a runtime condition.
pub fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static CSS selector")
}

/// Collect the text of an element, whitespace-normalized
pub fn text_of(element: ElementRef) -> String {
    normalize_ws(&element.text().collect::<String>())
}

/// Text of the first match under `scope`, `None` when absent
pub fn first_text(scope: ElementRef, selector: &Selector) -> Option<String> {
    scope.select(selector).next().map(text_of)
}

/// Attribute of the first match under `scope`, `None` when absent
pub fn first_attr(scope: ElementRef, selector: &Selector, attr: &str) -> Option<String> {
    scope
        .select(selector)
        .next()
        .and_then(|element| element.value().attr(attr))
        .map(|value| value.trim().to_string())
}

/// Parse `text` as an integer only when it is purely numeric
/// (an optional leading sign followed by ASCII digits)
pub fn parse_int_opt(text: &str) -> Option<i32> {
    let trimmed = text.trim();
    let digits = trimmed.strip_prefix('-').unwrap_or(trimmed);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}

/// Lenient integer coercion: malformed or missing text becomes `default`
pub fn parse_int_or_default(text: &str, default: i32) -> i32 {
    parse_int_opt(text).unwrap_or(default)
}

/// Collapse whitespace runs to single spaces and trim the ends
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}
