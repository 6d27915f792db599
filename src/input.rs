use std::str::FromStr;

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::ToPrimitive;

use crate::errors::FormatError;

pub const MILLISECONDS_PER_SECOND: u64 = 1000;
pub const MILLISECONDS_PER_DAY: u64 = 24 * 60 * 60 * MILLISECONDS_PER_SECOND;

/// Duration to format, expressed in milliseconds.
#[derive(Debug, Clone, PartialEq)]
pub enum Milliseconds {
    Integer(i64),
    Real(f64),
    Big(BigInt),
}

impl From<i64> for Milliseconds {
    fn from(value: i64) -> Milliseconds {
        Milliseconds::Integer(value)
    }
}

impl From<i32> for Milliseconds {
    fn from(value: i32) -> Milliseconds {
        Milliseconds::Integer(value.into())
    }
}

impl From<u32> for Milliseconds {
    fn from(value: u32) -> Milliseconds {
        Milliseconds::Integer(value.into())
    }
}

impl From<u64> for Milliseconds {
    fn from(value: u64) -> Milliseconds {
        match i64::try_from(value) {
            Ok(value) => Milliseconds::Integer(value),
            Err(_) => Milliseconds::Big(value.into()),
        }
    }
}

impl From<f64> for Milliseconds {
    fn from(value: f64) -> Milliseconds {
        Milliseconds::Real(value)
    }
}

impl From<BigInt> for Milliseconds {
    fn from(value: BigInt) -> Milliseconds {
        Milliseconds::Big(value)
    }
}

impl From<BigUint> for Milliseconds {
    fn from(value: BigUint) -> Milliseconds {
        Milliseconds::Big(value.into())
    }
}

impl FromStr for Milliseconds {
    type Err = FormatError;

    fn from_str(string: &str) -> Result<Milliseconds, FormatError> {
        let string = string.trim();

        if let Ok(value) = string.parse::<i64>() {
            return Ok(Milliseconds::Integer(value));
        }

        if let Ok(value) = string.parse::<BigInt>() {
            return Ok(Milliseconds::Big(value));
        }

        string.parse::<f64>().map(Milliseconds::Real).map_err(|_| FormatError::InvalidInput(
            format!("{string:?} is not a number")))
    }
}

/// Absolute value of a validated input.
#[derive(Debug, Clone, PartialEq)]
pub enum Magnitude {
    Whole(BigUint),
    Real(f64),
    // Sub-millisecond remainder is kept exact (nanoseconds < 1_000_000)
    Precise {
        milliseconds: BigUint,
        nanoseconds: u32,
    },
}

impl Magnitude {
    pub fn is_below_one_second(&self) -> bool {
        match self {
            Magnitude::Whole(milliseconds) | Magnitude::Precise {milliseconds, ..} =>
                *milliseconds < BigUint::from(MILLISECONDS_PER_SECOND),
            Magnitude::Real(milliseconds) => *milliseconds < MILLISECONDS_PER_SECOND as f64,
        }
    }

    /// Seconds elapsed within the current minute (with fractional part), counted from the start of
    /// the current day.
    pub fn second_of_minute(&self) -> f64 {
        let (milliseconds, fraction) = match self {
            Magnitude::Whole(milliseconds) => (milliseconds_of_day(milliseconds), 0.0),
            Magnitude::Precise {milliseconds, nanoseconds} => (
                milliseconds_of_day(milliseconds), f64::from(*nanoseconds) / 1e6),
            Magnitude::Real(milliseconds) => (milliseconds % MILLISECONDS_PER_DAY as f64, 0.0),
        };

        (milliseconds + fraction) / MILLISECONDS_PER_SECOND as f64 % 60.0
    }
}

fn milliseconds_of_day(milliseconds: &BigUint) -> f64 {
    (milliseconds % MILLISECONDS_PER_DAY).to_f64().unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Validated {
    pub negative: bool,
    pub magnitude: Magnitude,
}

pub fn validate(value: &Milliseconds) -> Result<Validated, FormatError> {
    Ok(match value {
        Milliseconds::Integer(value) => Validated {
            negative: *value < 0,
            magnitude: Magnitude::Whole(value.unsigned_abs().into()),
        },

        Milliseconds::Real(value) => {
            if !value.is_finite() {
                return Err(FormatError::InvalidInput(format!(
                    "Expected a finite number or bigint, got {value}")));
            }

            Validated {
                negative: *value < 0.0,
                magnitude: Magnitude::Real(value.abs()),
            }
        },

        Milliseconds::Big(value) => Validated {
            negative: value.sign() == Sign::Minus,
            magnitude: Magnitude::Whole(value.magnitude().clone()),
        },
    })
}
