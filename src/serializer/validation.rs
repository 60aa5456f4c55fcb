use super::price::{DECIMAL_PLACES, MAX_DIGITS};
use sea_orm::prelude::Decimal;
use serde::Serialize;
use std::{collections::BTreeMap, fmt};

pub const NAME_MAX_LENGTH: usize = 255;

pub const SLUG_MAX_LENGTH: usize = 50;

pub const UPLOAD_MAX_LENGTH: usize = 100;

/// Field errors of a rejected payload, keyed by field name.
///
/// Serializes as `{"slug": ["This field may not be blank."]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_owned())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn merge(&mut self, other: ValidationErrors) {
        for (field, messages) in other.0 {
            self.0.entry(field).or_default().extend(messages);
        }
    }

    /// Merge only the fields that have no errors yet
    pub fn merge_unreported(&mut self, other: ValidationErrors) {
        for (field, messages) in other.0 {
            self.0.entry(field).or_insert(messages);
        }
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// A required text field: trimmed, non-blank, bounded in length
pub(crate) fn check_char_field(
    errors: &mut ValidationErrors,
    field: &str,
    value: &str,
    max_length: usize,
) {
    let value = value.trim();
    if value.is_empty() {
        errors.add(field, "This field may not be blank.");
    } else if value.chars().count() > max_length {
        errors.add(
            field,
            format!("Ensure this field has no more than {max_length} characters."),
        );
    }
}

pub(crate) fn check_slug(errors: &mut ValidationErrors, field: &str, value: &str) {
    check_char_field(errors, field, value, SLUG_MAX_LENGTH);
    let value = value.trim();
    if !value.is_empty() && !is_slug(value) {
        errors.add(
            field,
            "Enter a valid “slug” consisting of letters, numbers, underscores or hyphens.",
        );
    }
}

pub fn is_slug(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

pub(crate) fn check_order(errors: &mut ValidationErrors, field: &str, value: i32) {
    if value < 0 {
        errors.add(field, "Ensure this value is greater than or equal to 0.");
    }
}

/// Bounds on the total digits, the decimal places and the whole digits of
/// a price
pub(crate) fn check_price(errors: &mut ValidationErrors, field: &str, value: &Decimal) {
    let (digits, decimals) = precision(value);
    let whole_digits = digits.saturating_sub(decimals);
    let max_whole_digits = MAX_DIGITS - DECIMAL_PLACES;

    if digits > MAX_DIGITS {
        errors.add(
            field,
            format!("Ensure that there are no more than {MAX_DIGITS} digits in total."),
        );
    } else if decimals > DECIMAL_PLACES {
        errors.add(
            field,
            format!("Ensure that there are no more than {DECIMAL_PLACES} decimal places."),
        );
    } else if whole_digits > max_whole_digits {
        errors.add(
            field,
            format!(
                "Ensure that there are no more than {max_whole_digits} digits before the decimal point."
            ),
        );
    }
}

/// Total digits and decimal places as written, e.g. `12.50` is `(4, 2)`
/// and `0.005` is `(3, 3)`
fn precision(value: &Decimal) -> (u32, u32) {
    let mantissa = value.mantissa().unsigned_abs();
    let len = if mantissa == 0 {
        1
    } else {
        mantissa.ilog10() + 1
    };
    let scale = value.scale();
    if scale > len {
        (scale, scale)
    } else {
        (len, scale)
    }
}
