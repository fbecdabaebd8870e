//! Raw text to skill list.
//!
//! Input is decoded in two stages: a strict JSON-array decode, then a
//! plain-text split on newlines, commas, and semicolons. The first stage only
//! wins when the whole trimmed input is a JSON array; any other outcome
//! (malformed JSON, a scalar, an object) falls through to plain text.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use tracing::debug;

use crate::normalize::trim_skill;

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\n,;]+").expect("separator pattern compiles"));

// `\s` plus the byte-order mark, matching `normalize::is_skill_space`.
static LEADING_BULLET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\s\x{FEFF}]*[-*•][\s\x{FEFF}]*").expect("bullet pattern compiles")
});

/// Parse one raw text blob into trimmed, non-empty skill strings.
///
/// Order and duplicates are preserved; see [`crate::dedupe`] for the unique
/// view. Never fails: unparseable JSON is plain text.
pub fn parse_skills(input: &str) -> Vec<String> {
    let trimmed = trim_skill(input);
    if trimmed.is_empty() {
        return Vec::new();
    }

    match decode_json_array(trimmed) {
        Some(items) => items,
        None => split_plain_text(trimmed),
    }
}

/// Strict stage: `Some` only when the text is a well-formed JSON array.
fn decode_json_array(text: &str) -> Option<Vec<String>> {
    let value = match serde_json::from_str::<Value>(text) {
        Ok(value) => value,
        Err(err) => {
            // Plain-text input is the common case; don't shout about it.
            if text.starts_with('[') {
                debug!(%err, "input looks like JSON but did not decode; using plain text");
            }
            return None;
        }
    };

    let Value::Array(items) = value else {
        debug!("JSON input is not an array; using plain text");
        return None;
    };

    Some(
        items
            .iter()
            .map(display_string)
            .map(|entry| trim_skill(&entry).to_string())
            .filter(|entry| !entry.is_empty())
            .collect(),
    )
}

/// Fallback stage: split on separator runs and strip one leading bullet.
fn split_plain_text(text: &str) -> Vec<String> {
    SEPARATORS
        .split(text)
        .map(|fragment| LEADING_BULLET.replace(fragment, ""))
        .map(|fragment| trim_skill(&fragment).to_string())
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

/// String form of a JSON array element, as a browser's `String(x)` would give.
///
/// `null` becomes the empty string (and is then discarded by the caller).
fn display_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => display_number(number),
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(display_string)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// JSON numbers are doubles in the browser, so every number goes through its
/// `f64` value: shortest round-trip digits, plain notation for decimal
/// exponents in `-7..21`, exponent notation (`1e+21`, `1e-7`) outside it.
fn display_number(number: &serde_json::Number) -> String {
    let Some(float) = number.as_f64() else {
        return number.to_string();
    };
    if float == 0.0 {
        return "0".to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. `1.2345e3`.
    let scientific = format!("{:e}", float.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return float.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return float.to_string();
    };
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let k = digits.len() as i32;
    let n = exponent + 1;

    let body = if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{int_part}.{frac_part}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let (lead, rest) = digits.split_at(1);
        let sign = if n - 1 >= 0 { "+" } else { "-" };
        let fraction = if rest.is_empty() {
            String::new()
        } else {
            format!(".{rest}")
        };
        format!("{lead}{fraction}e{sign}{}", (n - 1).abs())
    };

    if float.is_sign_negative() {
        format!("-{body}")
    } else {
        body
    }
}
