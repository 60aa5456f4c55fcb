//! Field projections of the catalog entities.
//!
//! Every view type implements [`Serializer`]: its [`Serializer::FIELDS`] is
//! the exact, ordered list of keys found in its JSON object. Nested
//! collections are always present as arrays, empty when the parent has no
//! children.
//!
//! Write payloads are the `*Input` types. They carry only the flat,
//! writable fields; read-only keys such as `id` and the nested collections
//! are ignored when decoding. Decoding never stops at the first bad field:
//! missing, `null` and mistyped values are reported in the same
//! [`ValidationErrors`] as the checks on well-formed values.

mod activity;
mod r#box;
mod category;
mod image;
mod media;
mod payload;
pub(crate) mod price;
mod reason;
mod validation;

pub use activity::*;
pub use r#box::*;
pub use category::*;
pub use image::*;
pub use media::*;
pub use payload::*;
pub use reason::*;
pub use validation::*;

use crate::Result;
use serde::Serialize;
use serde_json::Value;

/// Identity fields shared by every product-like entity
pub const COMMON_FIELDS: [&str; 3] = ["id", "name", "slug"];

/// Fields shared by activities and boxes
pub const PRODUCT_FIELDS: [&str; 6] = [
    "id",
    "name",
    "slug",
    "description",
    "category",
    "purchase_available",
];

/// A read projection of one model
pub trait Serializer: Serialize {
    /// The keys of the JSON object, in order
    const FIELDS: &'static [&'static str];

    /// The field a single instance is addressed by
    const LOOKUP_FIELD: &'static str = "id";

    fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// A write payload for one model
pub trait Input: Sized {
    /// Read the writable fields; decode failures are recorded in `payload`
    fn read(payload: &mut Payload<'_>) -> Self;

    /// Check every field, collecting all failures
    fn validate(&self) -> Result<(), ValidationErrors>;

    /// Decode and validate a JSON object
    fn from_value(value: Value) -> Result<Self> {
        let mut payload = Payload::new(&value)?;
        let input = Self::read(&mut payload);
        let mut errors = payload.into_errors();
        if let Err(checks) = input.validate() {
            errors.merge_unreported(checks);
        }
        errors.into_result()?;
        Ok(input)
    }

    fn from_json(json: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }
}

/// Settings shared by all serializers of one request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SerializerContext {
    pub media: MediaStorage,
}

impl SerializerContext {
    pub fn new(media: MediaStorage) -> Self {
        Self { media }
    }
}

/// Serialize a slice of views as a JSON array
pub fn to_value_many<S>(items: &[S]) -> Result<Value>
where
    S: Serializer,
{
    Ok(serde_json::to_value(items)?)
}

/// The keys of a JSON object, in order; empty for any other value
#[doc(hidden)]
pub fn json_keys(value: &Value) -> Vec<&str> {
    value
        .as_object()
        .map(|object| object.keys().map(String::as_str).collect())
        .unwrap_or_default()
}

#[cfg(test)]
pub(crate) mod tests_util {
    use super::Serializer;

    pub use super::json_keys as keys;

    pub fn assert_fields<S: Serializer>(view: &S) {
        let value = view.to_value().unwrap();
        assert_eq!(keys(&value), S::FIELDS);
    }
}
