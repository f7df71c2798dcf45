//! URL-encoded form flattening.
//!
//! Nested JSON is flattened into bracketed keys, so a filter such as
//! `{"created_at": {"gte": "2020-01-01"}, "flags": [true, false]}` becomes
//! `created_at[gte]=2020-01-01&flags[0]=1&flags[1]=0`.
//!
//! Booleans encode as `1`/`0`. `null` values and empty arrays or objects
//! produce no pair.

use serde_json::Value;

/// Flattens a JSON object into ordered `(key, value)` pairs.
///
/// Returns `None` when `value` is not an object.
///
/// # Example
///
/// ```rust
/// use shasta::clients::form_pairs;
/// use serde_json::json;
///
/// let pairs = form_pairs(&json!({"created_at": {"gte": "2020-01-01"}})).unwrap();
/// assert_eq!(pairs, vec![("created_at[gte]".to_string(), "2020-01-01".to_string())]);
/// ```
#[must_use]
pub fn form_pairs(value: &Value) -> Option<Vec<(String, String)>> {
    let Value::Object(map) = value else {
        return None;
    };
    let mut pairs = Vec::new();
    for (key, nested) in map {
        flatten_into(key.clone(), nested, &mut pairs);
    }
    Some(pairs)
}

fn flatten_into(key: String, value: &Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::Bool(b) => pairs.push((key, if *b { "1" } else { "0" }.to_string())),
        Value::Number(n) => pairs.push((key, n.to_string())),
        Value::String(s) => pairs.push((key, s.clone())),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten_into(format!("{key}[{index}]"), item, pairs);
            }
        }
        Value::Object(map) => {
            for (child, item) in map {
                flatten_into(format!("{key}[{child}]"), item, pairs);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pair(key: &str, value: &str) -> (String, String) {
        (key.to_string(), value.to_string())
    }

    #[test]
    fn test_scalars_encode_flat() {
        let pairs = form_pairs(&json!({
            "customer_id": "cus_1",
            "limit": 50,
            "active": true,
            "deleted": false,
            "skipped": null
        }))
        .unwrap();

        assert_eq!(
            pairs,
            vec![
                pair("active", "1"),
                pair("customer_id", "cus_1"),
                pair("deleted", "0"),
                pair("limit", "50"),
            ]
        );
    }

    #[test]
    fn test_nested_values_use_brackets() {
        let pairs = form_pairs(&json!({
            "created_at": {"gte": "2020-01-01", "lt": "2021-01-01"},
            "flags": [true, false],
            "tags": [{"name": "vip"}]
        }))
        .unwrap();

        assert_eq!(
            pairs,
            vec![
                pair("created_at[gte]", "2020-01-01"),
                pair("created_at[lt]", "2021-01-01"),
                pair("flags[0]", "1"),
                pair("flags[1]", "0"),
                pair("tags[0][name]", "vip"),
            ]
        );
    }

    #[test]
    fn test_non_object_is_rejected() {
        assert!(form_pairs(&json!(["a", "b"])).is_none());
        assert!(form_pairs(&json!("email=a@b.co")).is_none());
        assert_eq!(form_pairs(&json!({})), Some(Vec::new()));
    }
}
