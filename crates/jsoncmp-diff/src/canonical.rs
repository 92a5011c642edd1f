//! Canonical ordering of array elements.
//!
//! Arrays are compared as multisets by sorting each side on the compact
//! JSON rendering of its elements. The ordering is purely textual: numbers
//! are not compared by value, so `10` sorts before `2`. Diff output depends
//! on this ordering and it must stay textual.

use serde_json::Value;

/// The text an element is sorted by.
///
/// Object keys render in sorted order as long as `serde_json` is built
/// without `preserve_order`.
pub fn canonical_key(value: &Value) -> String {
    value.to_string()
}

/// Return the elements of an array sorted by their canonical key.
///
/// The sort is stable and keeps duplicates.
pub fn canonicalize_array(elements: &[Value]) -> Vec<&Value> {
    let mut sorted: Vec<&Value> = elements.iter().collect();
    sorted.sort_by_cached_key(|value| canonical_key(value));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn canonical(value: Value) -> Vec<Value> {
        match value {
            Value::Array(items) => canonicalize_array(&items).into_iter().cloned().collect(),
            other => panic!("expected array, got {other}"),
        }
    }

    #[test]
    fn order_insensitive() {
        assert_eq!(canonical(json!([3, 1, 2])), canonical(json!([2, 3, 1])));
    }

    #[test]
    fn numbers_sort_as_text() {
        assert_eq!(canonical(json!([2, 10])), vec![json!(10), json!(2)]);
        assert_eq!(canonical(json!([10, 2])), vec![json!(10), json!(2)]);
    }

    #[test]
    fn mixed_types_sort_by_rendering() {
        // '"' < '1' < '[' < 'n' < 't' < '{'
        let sorted = canonical(json!([{"a": 1}, true, null, [1], 1, "s"]));
        assert_eq!(
            sorted,
            vec![json!("s"), json!(1), json!([1]), json!(null), json!(true), json!({"a": 1})]
        );
    }

    #[test]
    fn keeps_duplicates() {
        let sorted = canonical(json!(["b", "a", "b", "a"]));
        assert_eq!(sorted, vec![json!("a"), json!("a"), json!("b"), json!("b")]);
    }

    #[test]
    fn objects_sort_by_key_order_independent_text() {
        let left = canonical(json!([{"b": 2, "a": 1}, {"a": 0}]));
        let right = canonical(json!([{"a": 0}, {"a": 1, "b": 2}]));
        assert_eq!(left, right);
    }

    #[test]
    fn empty_array() {
        assert!(canonicalize_array(&[]).is_empty());
    }

    #[test]
    fn idempotent() {
        let once = canonical(json!([5, "x", 40, null, {"k": [2, 1]}, 5]));
        let twice: Vec<Value> = canonicalize_array(&once).into_iter().cloned().collect();
        assert_eq!(once, twice);
    }
}
