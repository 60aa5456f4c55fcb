//! `price` is rendered as a string with a fixed number of decimal places.

use sea_orm::prelude::Decimal;
use serde::Serializer;

pub const MAX_DIGITS: u32 = 10;

pub const DECIMAL_PLACES: u32 = 2;

pub fn to_string(value: &Decimal) -> String {
    let mut value = value.round_dp(DECIMAL_PLACES);
    value.rescale(DECIMAL_PLACES);
    value.to_string()
}

pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&to_string(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn pads_to_two_places() {
        assert_eq!(to_string(&Decimal::from(12)), "12.00");
        assert_eq!(to_string(&Decimal::from_str("12.5").unwrap()), "12.50");
        assert_eq!(to_string(&Decimal::from_str("0.99").unwrap()), "0.99");
    }

    #[test]
    fn rounds_extra_places() {
        assert_eq!(to_string(&Decimal::from_str("9.995").unwrap()), "10.00");
        assert_eq!(to_string(&Decimal::from_str("9.994").unwrap()), "9.99");
    }
}
