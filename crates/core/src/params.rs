//! Helpers for extracting typed operation parameters from a `serde_json::Value`.
//!
//! Operation parameters arrive as a JSON object (from the CLI's `--params`
//! flag or a recipe file). Unlike optional settings, a perturbation parameter
//! has no sensible default, so a missing or mistyped key is an error.

use crate::error::ColorError;
use serde_json::Value;

/// Extracts an `f64` from `params[name]`.
///
/// Accepts JSON integers as well as floats. Returns
/// `ColorError::ParamNotFound` if the key is missing or not a number.
pub fn require_f64(params: &Value, name: &str) -> Result<f64, ColorError> {
    params
        .get(name)
        .and_then(Value::as_f64)
        .ok_or_else(|| ColorError::ParamNotFound(name.to_string()))
}
