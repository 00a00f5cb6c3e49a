//! Nullify core library.
//!
//! Normalizes "empty" values to null. A [`NullFilter`] is configured with a set of
//! [`EmptyKind`]s (boolean `false`, integer `0`, empty array, empty string, the string
//! `"0"`, float `0.0`) and replaces any value matching one of them with
//! [`Value::Null`](serde_json::Value::Null).
//!
//! ```
//! use nullify::{Filter, NullFilter};
//! use serde_json::{json, Value};
//!
//! let mut filter = NullFilter::new();
//! filter.set_type(["boolean", "integer"])?;
//! assert_eq!(filter.filter(json!(0)), Value::Null);
//! assert_eq!(filter.filter(json!("")), json!(""));
//! # Ok::<(), nullify::NullifyError>(())
//! ```

pub mod config;
pub mod errors;
pub mod filters;
pub mod types;

pub use config::NullFilterOptions;
pub use errors::*;
pub use filters::{Filter, NullFilter};
pub use types::{EmptyKind, KIND_NAMES, TypeSpec};

// Re-export serde_json so callers build values against the same version
pub use serde_json;
