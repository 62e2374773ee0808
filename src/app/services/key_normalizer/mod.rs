//! Mapping key normalization for the store key alphabet
//!
//! Realtime Database paths reject keys containing `.` `#` `$` `/` `[` `]`.
//! Every mapping key in the export document is rewritten: forbidden
//! characters become underscores, runs of underscores and whitespace
//! collapse to a single underscore, and edge underscores are trimmed.
//! Values are never touched, only keys, and the rewrite is idempotent.

use serde_json::{Map, Value};

use crate::constants::FORBIDDEN_KEY_CHARS;

/// Rewrite every mapping key in `value` to fit the store key alphabet.
///
/// Objects get their keys sanitized and their values recursed; arrays
/// recurse element-wise with order preserved; leaves pass through
/// unchanged. Two keys may sanitize to the same key, in which case usual
/// object semantics apply and the later entry wins.
pub fn normalize_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut normalized = Map::new();
            for (key, inner) in map {
                normalized.insert(sanitize_key(&key), normalize_keys(inner));
            }
            Value::Object(normalized)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_keys).collect()),
        other => other,
    }
}

/// Sanitize one mapping key: replace, collapse, trim
pub fn sanitize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut last_underscore = false;
    for ch in key.chars() {
        if FORBIDDEN_KEY_CHARS.contains(&ch) || ch.is_whitespace() || ch == '_' {
            if !last_underscore {
                out.push('_');
                last_underscore = true;
            }
        } else {
            out.push(ch);
            last_underscore = false;
        }
    }
    out.trim_matches('_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_forbidden_chars_become_underscores() {
        assert_eq!(sanitize_key("Team A.B/C"), "Team_A_B_C");
        assert_eq!(sanitize_key("C.n. Sabadell"), "C_n_Sabadell");
        assert_eq!(sanitize_key("a#b$c[d]e"), "a_b_c_d_e");
    }

    #[test]
    fn test_runs_collapse_and_edges_trim() {
        assert_eq!(sanitize_key("..foo.."), "foo");
        assert_eq!(sanitize_key("a.. b"), "a_b");
        assert_eq!(sanitize_key("  a  "), "a");
        assert_eq!(sanitize_key("a__b"), "a_b");
    }

    #[test]
    fn test_clean_keys_pass_through() {
        assert_eq!(sanitize_key("generatedAt"), "generatedAt");
        assert_eq!(sanitize_key("pastFixtures"), "pastFixtures");
    }

    #[test]
    fn test_normalize_keys_rewrites_nested_maps_only() {
        let document = json!({
            "C.n. Sabadell": {
                "display.name": "Piscina Can Llong",
                "city": "Sabadell"
            },
            "rows": [{"a.b": 1}, {"ok": "keep. this / text"}]
        });

        let normalized = normalize_keys(document);
        assert_eq!(
            normalized["C_n_Sabadell"]["display_name"],
            json!("Piscina Can Llong")
        );
        assert_eq!(normalized["rows"][0]["a_b"], json!(1));
        // Leaf values are never rewritten
        assert_eq!(normalized["rows"][1]["ok"], json!("keep. this / text"));
    }

    #[test]
    fn test_normalize_keys_is_idempotent() {
        let document = json!({
            "Team A.B/C": {"x.y": [1, 2, {"p#q": null}]},
            "plain": true
        });

        let once = normalize_keys(document);
        let twice = normalize_keys(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_array_order_is_preserved() {
        let value = normalize_keys(json!(["b", "a", {"k.1": 1}, 3]));
        assert_eq!(value[0], json!("b"));
        assert_eq!(value[1], json!("a"));
        assert_eq!(value[2]["k_1"], json!(1));
        assert_eq!(value[3], json!(3));
    }
}
