use num_bigint::BigUint;
use num_traits::{One, Zero};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Year,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
    Microsecond,
    Nanosecond,
}

impl Unit {
    pub fn long_name(self) -> &'static str {
        match self {
            Unit::Year => "year",
            Unit::Day => "day",
            Unit::Hour => "hour",
            Unit::Minute => "minute",
            Unit::Second => "second",
            Unit::Millisecond => "millisecond",
            Unit::Microsecond => "microsecond",
            Unit::Nanosecond => "nanosecond",
        }
    }

    pub fn short_name(self) -> &'static str {
        match self {
            Unit::Year => "y",
            Unit::Day => "d",
            Unit::Hour => "h",
            Unit::Minute => "m",
            Unit::Second => "s",
            Unit::Millisecond => "ms",
            Unit::Microsecond => "µs",
            Unit::Nanosecond => "ns",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Whole(BigUint),
    Real(f64),
}

impl Value {
    pub fn is_zero(&self) -> bool {
        match self {
            Value::Whole(value) => value.is_zero(),
            Value::Real(value) => *value == 0.0,
        }
    }

    pub fn is_one(&self) -> bool {
        match self {
            Value::Whole(value) => value.is_one(),
            Value::Real(value) => *value == 1.0,
        }
    }
}

/// A unit's magnitude together with the text it is rendered with.
///
/// The value drives zero suppression and pluralization while the text is what gets printed. They
/// are allowed to diverge: "1.0" with kept decimals is still exactly one, "0.40" is still non-zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Amount {
    pub value: Value,
    pub text: String,
}

impl Amount {
    pub fn whole<T: Into<BigUint>>(value: T) -> Amount {
        let value = value.into();
        Amount {
            text: value.to_string(),
            value: Value::Whole(value),
        }
    }

    pub fn real(value: f64, text: String) -> Amount {
        Amount {value: Value::Real(value), text}
    }
}
