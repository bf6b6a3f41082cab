use serde_json::Value;

/// Best-effort recovery of a JSON value from a model reply that may wrap it
/// in prose or code fences.
///
/// Tries a strict parse of the whole text first. On failure, retries on the
/// span from the first `{` to the last `}` inclusive. The span is greedy: a
/// reply containing two unrelated objects yields the whole stretch between
/// them, which only parses if that stretch happens to be valid JSON. This is
/// intentional and relied upon downstream; do not narrow the span.
///
/// Nothing is fabricated here. Callers decide what a parse failure means.
pub fn extract_json(text: &str) -> Result<Value, serde_json::Error> {
    match serde_json::from_str(text) {
        Ok(value) => Ok(value),
        Err(err) => {
            if let (Some(start), Some(end)) = (text.find('{'), text.rfind('}')) {
                if end > start {
                    return serde_json::from_str(&text[start..=end]);
                }
            }
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn well_formed_input_is_returned_unchanged() {
        let value = extract_json(r#"{"a": 1, "b": [true, null]}"#).unwrap();
        assert_eq!(value, json!({"a": 1, "b": [true, null]}));
    }

    #[test]
    fn non_object_json_still_parses_strictly() {
        let value = extract_json("[1, 2, 3]").unwrap();
        assert_eq!(value, json!([1, 2, 3]));
    }

    #[test]
    fn recovers_object_surrounded_by_noise() {
        let value = extract_json(r#"noise {"a":1} trailing"#).unwrap();
        assert_eq!(value, json!({"a": 1}));
    }

    #[test]
    fn recovers_object_inside_code_fence() {
        let text = "```json\n{\"summary\": \"ok\", \"items\": []}\n```";
        let value = extract_json(text).unwrap();
        assert_eq!(value, json!({"summary": "ok", "items": []}));
    }

    #[test]
    fn nested_braces_survive_recovery() {
        let text = r#"Here you go: {"outer": {"inner": 2}} hope it helps"#;
        let value = extract_json(text).unwrap();
        assert_eq!(value, json!({"outer": {"inner": 2}}));
    }

    #[test]
    fn no_braces_fails() {
        assert!(extract_json("no braces here").is_err());
    }

    #[test]
    fn empty_input_fails() {
        assert!(extract_json("").is_err());
    }

    #[test]
    fn greedy_span_over_two_fragments_is_not_disambiguated() {
        // First `{` starts invalid JSON; the first-to-last span covers both
        // fragments and is itself invalid, so extraction fails rather than
        // falling back to the second, valid fragment.
        assert!(extract_json(r#"{bad json} middle {"a":1}"#).is_err());
        assert!(extract_json(r#"{"a":1} {"b":2}"#).is_err());
    }

    #[test]
    fn lone_brace_pair_in_wrong_order_fails() {
        assert!(extract_json(r#"} backwards {"#).is_err());
    }
}
