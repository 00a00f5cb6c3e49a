//! Value filters.
//!
//! A filter takes ownership of a value and returns either the same value or a
//! replacement. Closures of the right shape are filters too.

pub mod null;

pub use null::NullFilter;

use serde_json::Value;

/// Contract shared by every value filter.
pub trait Filter {
    /// Returns the filtered form of `value`.
    fn filter(&self, value: Value) -> Value;

    /// Applies [`Filter::filter`] to each value in turn.
    fn filter_all<I>(&self, values: I) -> Vec<Value>
    where
        I: IntoIterator<Item = Value>,
        Self: Sized,
    {
        values.into_iter().map(|value| self.filter(value)).collect()
    }
}

impl<F> Filter for F
where
    F: Fn(Value) -> Value,
{
    fn filter(&self, value: Value) -> Value {
        self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn closures_are_filters() {
        let upper = |value: Value| match value {
            Value::String(s) => Value::String(s.to_uppercase()),
            other => other,
        };
        assert_eq!(upper.filter(json!("abc")), json!("ABC"));
        assert_eq!(upper.filter_all([json!("a"), json!(1)]), vec![json!("A"), json!(1)]);
    }
}
