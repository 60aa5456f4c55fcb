use super::ValidationErrors;
use sea_orm::prelude::Decimal;
use serde_json::{Map, Number, Value};
use std::str::FromStr;

pub const REQUIRED: &str = "This field is required.";

pub const NOT_NULL: &str = "This field may not be null.";

pub const INVALID_STRING: &str = "Not a valid string.";

pub const INVALID_INTEGER: &str = "A valid integer is required.";

pub const INVALID_BOOLEAN: &str = "Must be a valid boolean.";

pub const INVALID_NUMBER: &str = "A valid number is required.";

/// Key used for errors that belong to the payload as a whole
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

const TRUE_VALUES: [&str; 6] = ["true", "True", "TRUE", "1", "yes", "on"];

const FALSE_VALUES: [&str; 6] = ["false", "False", "FALSE", "0", "no", "off"];

/// Field-by-field reader over a JSON object.
///
/// Every accessor records a missing, `null` or mistyped value against its
/// field and hands back a placeholder, so one pass over a payload reports
/// all of its decode failures together.
#[derive(Debug)]
pub struct Payload<'a> {
    object: &'a Map<String, Value>,
    errors: ValidationErrors,
}

impl<'a> Payload<'a> {
    /// Fails when the value is not a JSON object
    pub fn new(value: &'a Value) -> Result<Self, ValidationErrors> {
        match value {
            Value::Object(object) => Ok(Self {
                object,
                errors: ValidationErrors::new(),
            }),
            other => {
                let mut errors = ValidationErrors::new();
                errors.add(
                    NON_FIELD_ERRORS,
                    format!(
                        "Invalid data. Expected a dictionary, but got {}.",
                        type_name(other)
                    ),
                );
                Err(errors)
            }
        }
    }

    /// A required text field
    pub fn string(&mut self, field: &str) -> String {
        self.take(field, true, parse_string).unwrap_or_default()
    }

    /// An optional text field, empty when absent
    pub fn string_or_empty(&mut self, field: &str) -> String {
        self.take(field, false, parse_string).unwrap_or_default()
    }

    pub fn integer_or(&mut self, field: &str, default: i32) -> i32 {
        self.take(field, false, parse_integer).unwrap_or(default)
    }

    pub fn boolean_or(&mut self, field: &str, default: bool) -> bool {
        self.take(field, false, parse_boolean).unwrap_or(default)
    }

    /// A required decimal, given as a JSON string or number
    pub fn decimal(&mut self, field: &str) -> Decimal {
        self.take(field, true, parse_decimal).unwrap_or_default()
    }

    /// A nullable primary key reference; absent and `null` both mean none
    pub fn primary_key(&mut self, field: &str) -> Option<i32> {
        match self.object.get(field) {
            None | Some(Value::Null) => None,
            Some(value) => match parse_primary_key(value) {
                Ok(pk) => Some(pk),
                Err(message) => {
                    self.errors.add(field, message);
                    None
                }
            },
        }
    }

    /// The decode failures recorded so far
    pub fn into_errors(self) -> ValidationErrors {
        self.errors
    }

    fn take<T>(
        &mut self,
        field: &str,
        required: bool,
        parse: fn(&Value) -> Result<T, &'static str>,
    ) -> Option<T> {
        let message = match self.object.get(field) {
            None if required => REQUIRED,
            None => return None,
            Some(Value::Null) => NOT_NULL,
            Some(value) => match parse(value) {
                Ok(parsed) => return Some(parsed),
                Err(message) => message,
            },
        };
        self.errors.add(field, message);
        None
    }
}

fn parse_string(value: &Value) -> Result<String, &'static str> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(INVALID_STRING),
    }
}

fn parse_integer(value: &Value) -> Result<i32, &'static str> {
    match value {
        Value::Number(n) => integer_from_number(n),
        Value::String(s) => s.trim().parse().map_err(|_| INVALID_INTEGER),
        _ => Err(INVALID_INTEGER),
    }
}

fn integer_from_number(n: &Number) -> Result<i32, &'static str> {
    if let Some(i) = n.as_i64() {
        return i32::try_from(i).map_err(|_| INVALID_INTEGER);
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= f64::from(i32::MIN) && f <= f64::from(i32::MAX) => {
            Ok(f as i32)
        }
        _ => Err(INVALID_INTEGER),
    }
}

fn parse_boolean(value: &Value) -> Result<bool, &'static str> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::Number(n) => match n.as_i64() {
            Some(1) => Ok(true),
            Some(0) => Ok(false),
            _ => Err(INVALID_BOOLEAN),
        },
        Value::String(s) if TRUE_VALUES.contains(&s.as_str()) => Ok(true),
        Value::String(s) if FALSE_VALUES.contains(&s.as_str()) => Ok(false),
        _ => Err(INVALID_BOOLEAN),
    }
}

fn parse_decimal(value: &Value) -> Result<Decimal, &'static str> {
    let text = match value {
        Value::String(s) => s.trim().to_owned(),
        Value::Number(n) => n.to_string(),
        _ => return Err(INVALID_NUMBER),
    };
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|_| INVALID_NUMBER)
}

fn parse_primary_key(value: &Value) -> Result<i32, String> {
    let pk = match value {
        Value::Number(n) => n.as_i64().and_then(|i| i32::try_from(i).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    pk.ok_or_else(|| {
        format!(
            "Incorrect type. Expected pk value, received {}.",
            type_name(value)
        )
    })
}

/// The name a JSON value is reported under in error messages
fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "NoneType",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn missing_null_and_mistyped() {
        let value = json!({ "slug": null, "order": "abc", "flag": "maybe" });
        let mut payload = Payload::new(&value).unwrap();

        assert_eq!(payload.string("name"), "");
        assert_eq!(payload.string("slug"), "");
        assert_eq!(payload.integer_or("order", 0), 0);
        assert!(!payload.boolean_or("flag", false));
        assert_eq!(payload.string_or_empty("description"), "");

        assert_eq!(
            serde_json::to_value(payload.into_errors()).unwrap(),
            json!({
                "flag": [INVALID_BOOLEAN],
                "name": [REQUIRED],
                "order": [INVALID_INTEGER],
                "slug": [NOT_NULL],
            })
        );
    }

    #[test]
    fn lenient_scalars() {
        let value = json!({
            "order": "12",
            "whole": 3.0,
            "flag": "yes",
            "off": 0,
            "price": 49.9,
            "code": 42,
        });
        let mut payload = Payload::new(&value).unwrap();

        assert_eq!(payload.integer_or("order", 0), 12);
        assert_eq!(payload.integer_or("whole", 0), 3);
        assert!(payload.boolean_or("flag", false));
        assert!(!payload.boolean_or("off", true));
        assert_eq!(payload.decimal("price"), Decimal::new(499, 1));
        assert_eq!(payload.string("code"), "42");
        assert!(payload.into_errors().is_empty());
    }

    #[test]
    fn integer_out_of_range() {
        let value = json!({ "order": 3_000_000_000_i64, "half": 1.5 });
        let mut payload = Payload::new(&value).unwrap();
        payload.integer_or("order", 0);
        payload.integer_or("half", 0);
        let errors = payload.into_errors();
        assert_eq!(errors.fields().collect::<Vec<_>>(), ["half", "order"]);
    }

    #[test]
    fn primary_keys() {
        let value = json!({ "a": 4, "b": "5", "c": null, "d": true, "e": "x" });
        let mut payload = Payload::new(&value).unwrap();

        assert_eq!(payload.primary_key("a"), Some(4));
        assert_eq!(payload.primary_key("b"), Some(5));
        assert_eq!(payload.primary_key("c"), None);
        assert_eq!(payload.primary_key("missing"), None);
        assert_eq!(payload.primary_key("d"), None);
        assert_eq!(payload.primary_key("e"), None);

        let errors = payload.into_errors();
        assert_eq!(
            errors.get("d"),
            Some(&["Incorrect type. Expected pk value, received bool.".to_owned()][..])
        );
        assert_eq!(
            errors.get("e"),
            Some(&["Incorrect type. Expected pk value, received str.".to_owned()][..])
        );
    }

    #[test]
    fn not_an_object() {
        let errors = Payload::new(&json!([1, 2])).unwrap_err();
        assert_eq!(
            errors.get(NON_FIELD_ERRORS),
            Some(&["Invalid data. Expected a dictionary, but got list.".to_owned()][..])
        );
    }
}
