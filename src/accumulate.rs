use log::debug;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{Float, One};

use crate::decompose::{Decomposed, decompose};
use crate::input::Magnitude;
use crate::options::Options;
use crate::units::{Amount, Unit};

const DAYS_PER_YEAR: u32 = 365;

// Compensates binary floating point representation error, so 1000.9999999999999 is floored to 1001
// when it's 1.001 seconds with 3 decimal digits.
const SECOND_ROUNDING_EPSILON: f64 = 0.000_000_1;

// Fixed-point precision limit for the decimal digits options.
const MAX_DECIMAL_DIGITS: usize = 100;

/// Renders one unit and appends it to the tokens unless it's suppressed.
///
/// Zero units are dropped. The exception is colon notation: minutes are always shown there, and
/// any unit after the first shown one is kept to preserve the positional format.
pub fn add(mut tokens: Vec<String>, unit: Unit, amount: &Amount, options: &Options) -> Vec<String> {
    if amount.value.is_zero() && !(
        options.colon_notation && (unit == Unit::Minute || !tokens.is_empty())
    ) {
        return tokens;
    }

    let token = if options.colon_notation {
        let whole_digits = amount.text.split('.').next().map_or(0, str::len);
        let min_digits: usize = if tokens.is_empty() { 1 } else { 2 };
        "0".repeat(min_digits.saturating_sub(whole_digits)) + &amount.text
    } else if options.verbose {
        let suffix = if amount.value.is_one() { "" } else { "s" };
        format!("{} {}{}", amount.text, unit.long_name(), suffix)
    } else {
        format!("{}{}", amount.text, unit.short_name())
    };

    tokens.push(token);
    tokens
}

/// Renders all units of the duration from the largest to the smallest one.
pub fn accumulate(magnitude: &Magnitude, options: &Options) -> Vec<String> {
    let parts = decompose(magnitude);
    let (years, days) = parts.days.div_rem(&BigUint::from(DAYS_PER_YEAR));

    let mut units = vec![
        (Unit::Year, Amount::whole(years)),
        (Unit::Day, Amount::whole(days)),
        (Unit::Hour, Amount::whole(parts.hours)),
        (Unit::Minute, Amount::whole(parts.minutes)),
    ];

    if options.separate_milliseconds || options.format_sub_milliseconds || (
        !options.colon_notation && magnitude.is_below_one_second()
    ) {
        units.push((Unit::Second, Amount::whole(parts.seconds)));

        if options.format_sub_milliseconds {
            debug!("Rendering sub-millisecond units separately.");
            units.extend([
                (Unit::Millisecond, Amount::whole(parts.milliseconds)),
                (Unit::Microsecond, Amount::whole(parts.microseconds)),
                (Unit::Nanosecond, Amount::whole(parts.nanoseconds)),
            ]);
        } else {
            debug!("Rendering sub-second part as milliseconds.");
            units.push((Unit::Millisecond, sub_second_amount(&parts, options)));
        }
    } else {
        units.push((Unit::Second, seconds_amount(magnitude, options)));
    }

    units.iter().fold(Vec::new(), |tokens, (unit, amount)| add(tokens, *unit, amount, options))
}

fn sub_second_amount(parts: &Decomposed, options: &Options) -> Amount {
    let milliseconds = parts.milliseconds as f64
        + parts.microseconds as f64 / 1000.0
        + parts.nanoseconds as f64 / 1e6;

    match decimal_digits(options.milliseconds_decimal_digits, 0) {
        0 => {
            let rounded = (milliseconds + 0.5).floor();
            Amount::real(rounded, rounded.to_string())
        },
        digits => {
            let text = to_fixed(milliseconds, digits);
            let value = text.parse().unwrap_or(milliseconds);
            Amount::real(value, text)
        },
    }
}

fn seconds_amount(magnitude: &Magnitude, options: &Options) -> Amount {
    let seconds = magnitude.second_of_minute();
    let digits = decimal_digits(options.seconds_decimal_digits, 1);

    let factor: f64 = num_traits::pow(10.0, digits);
    let floored = (seconds * factor + SECOND_ROUNDING_EPSILON).floor() / factor;

    let mut text = to_fixed(floored, digits);
    if !options.keep_decimals_on_whole_seconds {
        text = strip_zero_fraction(text);
    }

    Amount::real(floored, text)
}

fn decimal_digits(digits: Option<usize>, default: usize) -> usize {
    digits.unwrap_or(default).min(MAX_DECIMAL_DIGITS)
}

/// Formats a non-negative number with the specified number of fraction digits, rounding half up on
/// its exact binary value (`0.125` -> `0.13`, but `1.005` -> `1.00` since it's stored as
/// `1.00499999999999989...`).
fn to_fixed(value: f64, digits: usize) -> String {
    let (mantissa, exponent, _) = value.integer_decode();
    let shift = usize::from(exponent.unsigned_abs());
    let scaled = BigUint::from(mantissa) * num_traits::pow(BigUint::from(10u32), digits);

    let rounded = if exponent >= 0 {
        scaled << shift
    } else {
        let denominator = BigUint::one() << shift;
        (scaled * 2u32 + &denominator) / (denominator * 2u32)
    };

    let mut text = format!("{rounded:0>width$}", width = digits + 1);
    if digits != 0 {
        text.insert(text.len() - digits, '.');
    }
    text
}

fn strip_zero_fraction(mut text: String) -> String {
    if let Some(point) = text.find('.') {
        if text[point + 1..].chars().all(|digit| digit == '0') {
            text.truncate(point);
        }
    }
    text
}
