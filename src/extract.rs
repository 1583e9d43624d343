//! Safe traversal of loosely-typed JSON trees
//!
//! Jellyfin metadata is deeply nested and unevenly populated, so field access
//! goes through a total lookup that yields a default instead of failing on
//! missing keys, wrong shapes, or short arrays.

use serde_json::Value;

/// One step of a traversal path
#[derive(Debug, Clone, Copy)]
pub enum Step<'a> {
    /// Object key
    Key(&'a str),
    /// Array index
    Index(usize),
}

/// Walk `path` through `root`, returning `None` as soon as a step does not
/// apply (absent key, out-of-range index, or a non-container value).
pub fn safe_get<'a>(root: &'a Value, path: &[Step]) -> Option<&'a Value> {
    let mut current = root;
    for step in path {
        current = match step {
            Step::Key(key) => current.as_object()?.get(*key)?,
            Step::Index(index) => current.as_array()?.get(*index)?,
        };
    }
    Some(current)
}

/// Integer at `path`, or `default` when absent or not a number
pub fn i64_at(root: &Value, path: &[Step], default: i64) -> i64 {
    safe_get(root, path)
        .and_then(Value::as_i64)
        .unwrap_or(default)
}

/// String at `path`, or `default` when absent or not a string
pub fn str_at<'a>(root: &'a Value, path: &[Step], default: &'a str) -> &'a str {
    safe_get(root, path)
        .and_then(Value::as_str)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn walks_nested_objects_and_arrays() {
        let value = json!({"MediaSources": [{"MediaStreams": [{"Width": 1920}]}]});
        let path = [
            Step::Key("MediaSources"),
            Step::Index(0),
            Step::Key("MediaStreams"),
            Step::Index(0),
            Step::Key("Width"),
        ];
        assert_eq!(i64_at(&value, &path, 0), 1920);
    }

    #[test]
    fn missing_key_yields_default() {
        let value = json!({"a": {"b": 1}});
        assert_eq!(i64_at(&value, &[Step::Key("a"), Step::Key("c")], 7), 7);
    }

    #[test]
    fn out_of_range_index_yields_default() {
        let value = json!({"a": [1, 2]});
        assert_eq!(i64_at(&value, &[Step::Key("a"), Step::Index(5)], -1), -1);
    }

    #[test]
    fn wrong_shape_yields_default() {
        // Indexing an object, keying into a scalar, keying into an array
        let value = json!({"a": {"b": "text"}});
        assert!(safe_get(&value, &[Step::Index(0)]).is_none());
        assert!(safe_get(&value, &[Step::Key("a"), Step::Key("b"), Step::Key("c")]).is_none());
        assert!(safe_get(&json!([1, 2]), &[Step::Key("a")]).is_none());
    }

    #[test]
    fn type_mismatch_at_leaf_yields_default() {
        let value = json!({"Width": "1920"});
        assert_eq!(i64_at(&value, &[Step::Key("Width")], 0), 0);
        assert_eq!(str_at(&json!({"Name": 3}), &[Step::Key("Name")], "x"), "x");
    }

    #[test]
    fn empty_path_returns_root() {
        let value = json!(42);
        assert_eq!(safe_get(&value, &[]), Some(&value));
    }
}
