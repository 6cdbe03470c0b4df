//! Integer filtering for heterogeneous sequences

use crate::core::Value;

/// Keep only the integer elements of `items`, in their original order
///
/// Floats, booleans, text, nulls, nested lists and opaque objects are all dropped.
///
/// # Examples
/// ```
/// use competition::core::Value;
/// use competition::ranking::filter_integers;
///
/// let items = vec![Value::from("xd"), Value::Integer(12), Value::Float(5.0), Value::Integer(5)];
/// assert_eq!(filter_integers(&items), vec![12, 5]);
/// ```
#[must_use]
pub fn filter_integers(items: &[Value]) -> Vec<i64> {
    items.iter().filter_map(Value::as_integer).collect()
}

/// Check that at least one element is an integer
#[inline]
#[must_use]
pub fn contains_integer(items: &[Value]) -> bool {
    items.iter().any(|item| item.as_integer().is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Value> {
        vec![
            Value::from("xd"),
            Value::Integer(12),
            Value::Integer(5),
            Value::Integer(34),
            Value::Integer(75),
            Value::Integer(8),
            Value::Null,
            Value::Integer(11),
        ]
    }

    #[test]
    fn keeps_integers_in_order() {
        assert_eq!(filter_integers(&sample()), vec![12, 5, 34, 75, 8, 11]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(filter_integers(&[]).is_empty());
        assert!(!contains_integer(&[]));
    }

    #[test]
    fn rejects_numeric_lookalikes() {
        let items = vec![
            Value::Boolean(true),
            Value::Float(3.0),
            Value::Text("4".into()),
            Value::List(vec![Value::Integer(1)]),
            Value::Other("big-int".into()),
        ];
        assert!(filter_integers(&items).is_empty());
        assert!(!contains_integer(&items));
    }

    #[test]
    fn keeps_duplicates() {
        let items = vec![Value::Integer(9), Value::Null, Value::Integer(9)];
        assert_eq!(filter_integers(&items), vec![9, 9]);
    }

    #[test]
    fn large_input_does_not_recurse() {
        let items: Vec<Value> = (0..200_000)
            .map(|i| {
                if i % 2 == 0 {
                    Value::Integer(i)
                } else {
                    Value::Null
                }
            })
            .collect();
        assert_eq!(filter_integers(&items).len(), 100_000);
    }
}
