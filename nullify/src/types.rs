use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use log::debug;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::errors::{NullifyError, NullifyResult};

// ═══════════════════════════════════════════════════════════════════════════════
// EmptyKind - flag set of value kinds treated as "empty"
// ═══════════════════════════════════════════════════════════════════════════════

bitflags! {
    /// Set of "empty" value representations that a [`NullFilter`](crate::NullFilter)
    /// replaces with null.
    ///
    /// Flags are declared highest bit first, which is the order `iter` yields them in.
    ///
    /// ```
    /// use nullify::EmptyKind;
    ///
    /// let kinds = EmptyKind::BOOLEAN | EmptyKind::INTEGER;
    /// assert_eq!(kinds.bits(), 3);
    /// assert!(kinds.contains(EmptyKind::INTEGER));
    /// assert!(!kinds.contains(EmptyKind::STRING));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EmptyKind: u8 {
        /// Floating-point `0.0`.
        const FLOAT = 32;
        /// The string `"0"`.
        const ZERO_STRING = 16;
        /// The empty string `""`.
        const STRING = 8;
        /// An array with no elements.
        const EMPTY_ARRAY = 4;
        /// Integer `0`.
        const INTEGER = 2;
        /// Boolean `false`.
        const BOOLEAN = 1;
    }
}

impl EmptyKind {
    /// Every kind; the default.
    pub const ALL: EmptyKind = EmptyKind::all();

    /// Looks up a symbolic name (`"boolean"`, `"zero"`, `"all"`, ...). Matching is exact.
    pub fn from_name(name: &str) -> Option<Self> {
        KIND_NAMES
            .iter()
            .find(|(_, candidate)| *candidate == name)
            .map(|(kind, _)| *kind)
    }

    /// Symbolic name of this mask, if it is a single flag or [`EmptyKind::ALL`].
    pub fn name(self) -> Option<&'static str> {
        KIND_NAMES
            .iter()
            .find(|(kind, _)| *kind == self)
            .map(|(_, name)| *name)
    }
}

/// Symbolic names accepted when configuring a filter.
pub const KIND_NAMES: &[(EmptyKind, &str)] = &[
    (EmptyKind::BOOLEAN, "boolean"),
    (EmptyKind::INTEGER, "integer"),
    (EmptyKind::EMPTY_ARRAY, "array"),
    (EmptyKind::STRING, "string"),
    (EmptyKind::ZERO_STRING, "zero"),
    (EmptyKind::FLOAT, "float"),
    (EmptyKind::ALL, "all"),
];

impl Default for EmptyKind {
    fn default() -> Self {
        EmptyKind::ALL
    }
}

impl fmt::Display for EmptyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.name() {
            return f.write_str(name);
        }
        if self.is_empty() {
            return f.write_str("none");
        }
        for (index, flag) in self.iter().enumerate() {
            if index > 0 {
                f.write_str("|")?;
            }
            // Single flags always have a name.
            f.write_str(flag.name().unwrap_or_default())?;
        }
        Ok(())
    }
}

impl FromStr for EmptyKind {
    type Err = NullifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeSpec::from(s).resolve()
    }
}

// Serialized as the integer mask so options round-trip through JSON and TOML.
impl Serialize for EmptyKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.bits())
    }
}

// Accepts every form a type can be configured with: mask, name, or list of either.
impl<'de> Deserialize<'de> for EmptyKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        TypeSpec::deserialize(deserializer)?
            .resolve()
            .map_err(serde::de::Error::custom)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// TypeSpec - unresolved configuration input
// ═══════════════════════════════════════════════════════════════════════════════

/// A type as supplied by a caller, before it is resolved to an [`EmptyKind`].
///
/// - `Int` is used as the mask directly.
/// - `Name` is looked up in [`KIND_NAMES`].
/// - `List` sums its resolved entries. Entries that are neither integers nor known
///   names contribute `0`.
/// - `Other` holds any other value kind; it never resolves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeSpec {
    Int(i64),
    Name(String),
    List(Vec<TypeSpec>),
    Other(Value),
}

impl TypeSpec {
    /// Resolves to a mask, failing unless the result lies in `0..=63`.
    ///
    /// ```
    /// use nullify::{EmptyKind, TypeSpec};
    ///
    /// let spec = TypeSpec::from(vec![TypeSpec::from("boolean"), TypeSpec::from(2)]);
    /// assert_eq!(spec.resolve().unwrap(), EmptyKind::BOOLEAN | EmptyKind::INTEGER);
    /// assert!(TypeSpec::from(64).resolve().is_err());
    /// ```
    pub fn resolve(&self) -> NullifyResult<EmptyKind> {
        let detected = match self {
            TypeSpec::Int(bits) => *bits,
            TypeSpec::Name(name) => {
                return EmptyKind::from_name(name).ok_or_else(|| NullifyError::invalid_type(name.clone(), "string"));
            }
            TypeSpec::List(entries) => entries
                .iter()
                .map(TypeSpec::entry_bits)
                .fold(0i64, i64::saturating_add),
            TypeSpec::Other(value) => {
                return Err(NullifyError::invalid_type(value.to_string(), value_kind(value)));
            }
        };

        u8::try_from(detected)
            .ok()
            .and_then(EmptyKind::from_bits)
            .ok_or_else(|| NullifyError::invalid_type(detected.to_string(), "integer"))
    }

    /// Contribution of a single list entry to the summed mask.
    fn entry_bits(&self) -> i64 {
        match self {
            TypeSpec::Int(bits) => *bits,
            TypeSpec::Name(name) => match EmptyKind::from_name(name) {
                Some(kind) => i64::from(kind.bits()),
                None => {
                    debug!("ignoring unknown type name {name:?} in type list");
                    0
                }
            },
            other => {
                debug!("ignoring {} entry in type list", other.kind());
                0
            }
        }
    }

    /// Runtime kind of this input, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            TypeSpec::Int(_) => "integer",
            TypeSpec::Name(_) => "string",
            TypeSpec::List(_) => "list",
            TypeSpec::Other(value) => value_kind(value),
        }
    }
}

/// Name of a JSON value's runtime kind.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(number) if number.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

macro_rules! type_spec_from_int {
    ($($int:ty),*) => {
        $(
            impl From<$int> for TypeSpec {
                fn from(bits: $int) -> Self {
                    TypeSpec::Int(i64::from(bits))
                }
            }
        )*
    };
}

type_spec_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<EmptyKind> for TypeSpec {
    fn from(kind: EmptyKind) -> Self {
        TypeSpec::Int(i64::from(kind.bits()))
    }
}

impl From<&str> for TypeSpec {
    fn from(name: &str) -> Self {
        TypeSpec::Name(name.to_string())
    }
}

impl From<String> for TypeSpec {
    fn from(name: String) -> Self {
        TypeSpec::Name(name)
    }
}

impl<T: Into<TypeSpec>> From<Vec<T>> for TypeSpec {
    fn from(entries: Vec<T>) -> Self {
        TypeSpec::List(entries.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<TypeSpec>, const N: usize> From<[T; N]> for TypeSpec {
    fn from(entries: [T; N]) -> Self {
        TypeSpec::List(entries.into_iter().map(Into::into).collect())
    }
}

impl From<Value> for TypeSpec {
    fn from(value: Value) -> Self {
        match value {
            Value::Number(number) => match number.as_i64() {
                Some(bits) => TypeSpec::Int(bits),
                None => TypeSpec::Other(Value::Number(number)),
            },
            Value::String(name) => TypeSpec::Name(name),
            Value::Array(entries) => TypeSpec::List(entries.into_iter().map(TypeSpec::from).collect()),
            other => TypeSpec::Other(other),
        }
    }
}
