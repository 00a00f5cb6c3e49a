//! Replaces "empty" values with null.

use log::{debug, trace};
use serde_json::Value;

use super::Filter;
use crate::config::NullFilterOptions;
use crate::errors::NullifyResult;
use crate::types::{EmptyKind, TypeSpec};

/// Returns null for values matching one of the configured [`EmptyKind`]s and passes
/// everything else through unchanged.
///
/// The default configuration treats every kind as empty:
///
/// ```
/// use nullify::{Filter, NullFilter};
/// use serde_json::{json, Value};
///
/// let filter = NullFilter::new();
/// assert_eq!(filter.filter(json!("0")), Value::Null);
/// assert_eq!(filter.filter(json!([])), Value::Null);
/// assert_eq!(filter.filter(json!("abc")), json!("abc"));
/// ```
///
/// Kind checks are exact: integer `0` only matches [`EmptyKind::INTEGER`] and `0.0`
/// only matches [`EmptyKind::FLOAT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NullFilter {
    kind: EmptyKind,
}

impl NullFilter {
    /// Creates a filter with every kind enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a filter from a single type input, exactly as [`NullFilter::set_type`].
    pub fn with_type(spec: impl Into<TypeSpec>) -> NullifyResult<Self> {
        let mut filter = Self::new();
        filter.set_type(spec)?;
        Ok(filter)
    }

    pub fn from_options(options: NullFilterOptions) -> NullifyResult<Self> {
        let mut filter = Self::new();
        filter.set_options(options)?;
        Ok(filter)
    }

    /// Creates a filter from an untyped initializer.
    ///
    /// A JSON object is read as an options mapping; any other value is a type input.
    pub fn from_value(value: Value) -> NullifyResult<Self> {
        match value {
            Value::Object(map) => Self::from_options(NullFilterOptions::from_map(map)?),
            other => Self::with_type(other),
        }
    }

    /// Replaces the configured kinds.
    ///
    /// Accepts a mask, a symbolic name, or a list mixing both (see [`TypeSpec`]).
    /// The resolved mask must lie in `0..=63`; on failure the current configuration
    /// is left untouched.
    pub fn set_type(&mut self, spec: impl Into<TypeSpec>) -> NullifyResult<&mut Self> {
        let kind = spec.into().resolve()?;
        if kind != self.kind {
            debug!("null filter type changed from {} to {}", self.kind, kind);
        }
        self.kind = kind;
        Ok(self)
    }

    pub fn get_type(&self) -> EmptyKind {
        self.kind
    }

    pub fn set_options(&mut self, options: NullFilterOptions) -> NullifyResult<&mut Self> {
        self.set_type(options.kind)
    }

    /// Current options, with `type` as the integer mask.
    pub fn options(&self) -> NullFilterOptions {
        NullFilterOptions::new(self.kind)
    }

    /// The enabled flag that `value` matches, if any.
    pub fn matched_kind(&self, value: &Value) -> Option<EmptyKind> {
        self.kind.iter().find(|flag| is_empty_as(value, *flag))
    }

    /// Whether [`Filter::filter`] would return null for `value`.
    pub fn is_empty(&self, value: &Value) -> bool {
        self.matched_kind(value).is_some()
    }
}

impl Filter for NullFilter {
    fn filter(&self, value: Value) -> Value {
        match self.matched_kind(&value) {
            Some(kind) => {
                trace!("replacing {kind} value {value} with null");
                Value::Null
            }
            None => value,
        }
    }
}

impl TryFrom<Value> for NullFilter {
    type Error = crate::errors::NullifyError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        NullFilter::from_value(value)
    }
}

/// Checks `value` against a single flag.
fn is_empty_as(value: &Value, flag: EmptyKind) -> bool {
    match value {
        Value::Number(number) if flag == EmptyKind::FLOAT => number.is_f64() && number.as_f64() == Some(0.0),
        Value::String(text) if flag == EmptyKind::ZERO_STRING => text == "0",
        Value::String(text) if flag == EmptyKind::STRING => text.is_empty(),
        Value::Array(items) if flag == EmptyKind::EMPTY_ARRAY => items.is_empty(),
        Value::Number(number) if flag == EmptyKind::INTEGER => number.as_i64() == Some(0),
        Value::Bool(truthy) if flag == EmptyKind::BOOLEAN => !truthy,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_flag_checks_are_kind_exact() {
        assert!(is_empty_as(&json!(0.0), EmptyKind::FLOAT));
        assert!(is_empty_as(&json!(-0.0), EmptyKind::FLOAT));
        assert!(!is_empty_as(&json!(0), EmptyKind::FLOAT));
        assert!(is_empty_as(&json!(0), EmptyKind::INTEGER));
        assert!(!is_empty_as(&json!(0.0), EmptyKind::INTEGER));
        assert!(!is_empty_as(&json!("0"), EmptyKind::INTEGER));
        assert!(!is_empty_as(&json!(""), EmptyKind::ZERO_STRING));
        assert!(!is_empty_as(&json!({}), EmptyKind::EMPTY_ARRAY));
        assert!(!is_empty_as(&json!(true), EmptyKind::BOOLEAN));
    }

    #[test]
    fn matched_kind_reports_flag() {
        let filter = NullFilter::new();
        assert_eq!(filter.matched_kind(&json!("0")), Some(EmptyKind::ZERO_STRING));
        assert_eq!(filter.matched_kind(&json!(false)), Some(EmptyKind::BOOLEAN));
        assert_eq!(filter.matched_kind(&json!("x")), None);
    }

    #[test]
    fn failed_set_keeps_previous_type() {
        let mut filter = NullFilter::with_type("string").unwrap();
        assert!(filter.set_type(99).is_err());
        assert_eq!(filter.get_type(), EmptyKind::STRING);
    }

    #[test]
    fn set_type_chains() {
        let mut filter = NullFilter::new();
        filter.set_type("zero").unwrap().set_type(EmptyKind::FLOAT).unwrap();
        assert_eq!(filter.get_type(), EmptyKind::FLOAT);
    }
}
