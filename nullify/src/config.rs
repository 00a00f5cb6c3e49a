//! Option mappings for constructing a [`NullFilter`](crate::NullFilter).
//!
//! Options arrive either programmatically or as JSON/TOML text supplied by the caller.
//! The only recognized key is `type`; any other key is rejected.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{NullifyError, NullifyResult};
use crate::types::{EmptyKind, TypeSpec};

/// Options accepted by a null filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NullFilterOptions {
    /// Kinds to treat as empty. Accepts a mask, a symbolic name, or a list of either.
    #[serde(rename = "type", default = "default_type")]
    pub kind: TypeSpec,
}

impl Default for NullFilterOptions {
    fn default() -> Self {
        Self { kind: default_type() }
    }
}

fn default_type() -> TypeSpec {
    TypeSpec::from(EmptyKind::ALL)
}

impl NullFilterOptions {
    /// Keys with a matching setter on the filter.
    pub const KEYS: &'static [&'static str] = &["type"];

    pub fn new(kind: impl Into<TypeSpec>) -> Self {
        Self { kind: kind.into() }
    }

    /// Builds options from a key/value mapping, rejecting unknown keys.
    pub fn from_map(map: Map<String, Value>) -> NullifyResult<Self> {
        if let Some(option) = map.keys().find(|key| !Self::KEYS.contains(&key.as_str())) {
            return Err(NullifyError::UnknownOption { option: option.clone() });
        }
        Ok(serde_json::from_value(Value::Object(map))?)
    }

    /// Parses options from a JSON object, e.g. `{"type": ["boolean", "integer"]}`.
    pub fn from_json_str(text: &str) -> NullifyResult<Self> {
        let map: Map<String, Value> = serde_json::from_str(text)?;
        Self::from_map(map)
    }

    /// Parses options from a TOML document, e.g. `type = "zero"`.
    pub fn from_toml_str(text: &str) -> NullifyResult<Self> {
        let map: Map<String, Value> = toml::from_str(text)?;
        Self::from_map(map)
    }

    pub fn to_json_string(&self) -> NullifyResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
