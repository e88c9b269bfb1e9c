//! Decoding of `application/x-www-form-urlencoded` bodies with bracket nesting.
//!
//! HTML forms name their inputs `campground[title]`, `campground[price]`, ... so the
//! flat key/value pairs are folded into nested JSON objects before schema validation.
//! Every value stays a string; the schema converts numeric fields.

use serde_json::{Map, Value};

/// Decodes a urlencoded body into a JSON object, nesting bracketed keys.
///
/// `a[b][c]=1` becomes `{"a": {"b": {"c": "1"}}}`. A repeated key keeps its last value.
/// A key that is both a scalar and a parent (`a=1&a[b]=2`) keeps the later shape.
pub fn parse_nested(body: &[u8]) -> Value {
    let mut root = Map::new();

    for (key, value) in url::form_urlencoded::parse(body) {
        let path = split_key(&key);
        insert(&mut root, &path, value.into_owned());
    }

    Value::Object(root)
}

/// Splits `a[b][c]` into `["a", "b", "c"]`. Keys without well-formed brackets are
/// returned whole.
fn split_key(key: &str) -> Vec<String> {
    let Some(open) = key.find('[') else {
        return vec![key.to_string()];
    };

    let (head, mut rest) = key.split_at(open);
    if head.is_empty() {
        return vec![key.to_string()];
    }

    let mut path = vec![head.to_string()];
    while let Some(stripped) = rest.strip_prefix('[') {
        let Some(close) = stripped.find(']') else {
            return vec![key.to_string()];
        };
        path.push(stripped[..close].to_string());
        rest = &stripped[close + 1..];
    }

    if !rest.is_empty() {
        return vec![key.to_string()];
    }

    path
}

fn insert(map: &mut Map<String, Value>, path: &[String], value: String) {
    match path {
        [] => {}
        [last] => {
            map.insert(last.clone(), Value::String(value));
        }
        [head, rest @ ..] => {
            let entry = map
                .entry(head.clone())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            if let Value::Object(inner) = entry {
                insert(inner, rest, value);
            }
        }
    }
}
