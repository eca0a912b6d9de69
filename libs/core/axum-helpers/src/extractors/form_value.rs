//! Lenient decoding for optional form-style JSON fields.
//!
//! Browser forms post every input as a string, so `"39.5"` must decode the
//! same as `39.5`, and a cleared input (`""`) the same as an omitted one.
//!
//! ```ignore
//! #[derive(Deserialize)]
//! struct UpdatePrice {
//!     #[serde(default, deserialize_with = "axum_helpers::extractors::form_value::optional")]
//!     price: Option<f64>,
//! }
//! ```

use serde::Deserialize;
use serde::de::{self, Deserializer};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Deserialize)]
#[serde(untagged)]
enum FormValue<T> {
    Typed(T),
    Text(String),
}

/// Decode `Option<T>` from either a native JSON value or its string form.
///
/// `null` and blank strings become `None`. Any other string goes through
/// `T::from_str`; a parse failure is a deserialization error. Pair with
/// `#[serde(default)]` so that a missing key is also `None`.
pub fn optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    match Option::<FormValue<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(FormValue::Typed(value)) => Ok(Some(value)),
        Some(FormValue::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            text.parse()
                .map(Some)
                .map_err(|e| de::Error::custom(format!("invalid value {text:?}: {e}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Form {
        #[serde(default, deserialize_with = "optional")]
        price: Option<f64>,
        #[serde(default, deserialize_with = "optional")]
        stock: Option<i64>,
    }

    fn decode(value: serde_json::Value) -> Result<Form, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn test_numbers_decode_directly() {
        let form = decode(json!({ "price": 39.5, "stock": 12 })).unwrap();
        assert_eq!(form.price, Some(39.5));
        assert_eq!(form.stock, Some(12));
    }

    #[test]
    fn test_integer_literal_decodes_as_float() {
        let form = decode(json!({ "price": 40 })).unwrap();
        assert_eq!(form.price, Some(40.0));
    }

    #[test]
    fn test_numeric_strings_are_parsed() {
        let form = decode(json!({ "price": "39.5", "stock": " 12 " })).unwrap();
        assert_eq!(form.price, Some(39.5));
        assert_eq!(form.stock, Some(12));
    }

    #[test]
    fn test_negative_string_keeps_its_sign() {
        let form = decode(json!({ "price": "-5" })).unwrap();
        assert_eq!(form.price, Some(-5.0));
    }

    #[test]
    fn test_missing_null_and_blank_are_none() {
        let form = decode(json!({ "price": null, "stock": "" })).unwrap();
        assert_eq!(form.price, None);
        assert_eq!(form.stock, None);

        let form = decode(json!({})).unwrap();
        assert_eq!(form.price, None);
    }

    #[test]
    fn test_non_numeric_string_is_rejected() {
        let err = decode(json!({ "stock": "a dozen" })).unwrap_err();
        assert!(err.to_string().contains("a dozen"));
    }
}
