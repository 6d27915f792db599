use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{FromPrimitive, ToPrimitive};

use crate::input::{MILLISECONDS_PER_DAY, Magnitude};

/// Mixed-radix split of a duration: each field holds only what is left after the larger units
/// have taken their share.
#[derive(Debug, Clone, PartialEq)]
pub struct Decomposed {
    pub days: BigUint,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub milliseconds: u64,
    pub microseconds: u64,
    pub nanoseconds: u64,
}

pub fn decompose(magnitude: &Magnitude) -> Decomposed {
    match magnitude {
        Magnitude::Whole(milliseconds) => decompose_whole(milliseconds),

        Magnitude::Precise {milliseconds, nanoseconds} => {
            let nanoseconds = u64::from(*nanoseconds);
            Decomposed {
                microseconds: nanoseconds / 1000,
                nanoseconds: nanoseconds % 1000,
                ..decompose_whole(milliseconds)
            }
        },

        Magnitude::Real(milliseconds) => decompose_real(*milliseconds),
    }
}

fn decompose_whole(milliseconds: &BigUint) -> Decomposed {
    let (days, remainder) = milliseconds.div_rem(&BigUint::from(MILLISECONDS_PER_DAY));
    let remainder = remainder.to_u64().unwrap_or_default();

    Decomposed {
        days,
        hours: remainder / 3_600_000,
        minutes: remainder / 60_000 % 60,
        seconds: remainder / 1000 % 60,
        milliseconds: remainder % 1000,
        microseconds: 0,
        nanoseconds: 0,
    }
}

// Every unit is truncated independently, so fractional input only shows up in the sub-millisecond
// fields.
fn decompose_real(milliseconds: f64) -> Decomposed {
    let bucket = |value: f64, radix: f64| (value.trunc() % radix) as u64;

    Decomposed {
        days: BigUint::from_f64((milliseconds / MILLISECONDS_PER_DAY as f64).trunc()).unwrap_or_default(),
        hours: bucket(milliseconds / 3_600_000.0, 24.0),
        minutes: bucket(milliseconds / 60_000.0, 60.0),
        seconds: bucket(milliseconds / 1000.0, 60.0),
        milliseconds: bucket(milliseconds, 1000.0),
        microseconds: bucket(milliseconds * 1e3, 1000.0),
        nanoseconds: bucket(milliseconds * 1e6, 1000.0),
    }
}
