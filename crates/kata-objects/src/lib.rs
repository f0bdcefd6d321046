//! Object construction and JSON round-tripping.
//!
//! - [`Rectangle`] - a plain value type with a computed area
//! - [`to_json`] / [`from_json`] - serialize any value, and read JSON back
//!   into a concrete type so its methods are available again

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub mod shapes;

pub use shapes::{Circle, Rectangle};

/// Errors produced by the JSON helpers.
#[derive(Debug, Error)]
pub enum ObjectError {
    /// The value could not be serialized, or the text was not valid JSON
    /// for the requested type.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Returns the compact JSON representation of `value`.
///
/// ```
/// assert_eq!(kata_objects::to_json(&[1, 2, 3]).unwrap(), "[1,2,3]");
/// ```
///
/// # Errors
///
/// Returns [`ObjectError::Json`] if `value` cannot be represented as JSON,
/// e.g. a map with non-string keys.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ObjectError> {
    Ok(serde_json::to_string(value)?)
}

/// Reads `json` into a value of type `T`.
///
/// ```
/// use kata_objects::{Circle, from_json};
///
/// let circle: Circle = from_json(r#"{"radius":10}"#).unwrap();
/// assert_eq!(circle.radius, 10.0);
/// ```
///
/// # Errors
///
/// Returns [`ObjectError::Json`] if `json` is malformed or does not have
/// the shape of `T`.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, ObjectError> {
    Ok(serde_json::from_str(json)?)
}
