use num_bigint::BigInt;
use pretty_assertions::assert_eq;
use rstest::rstest;

use pretty_ms::{FormatError, Options, format};

fn defaults() -> Options {
    Options::default()
}

#[rstest(milliseconds, options, expected,
    case(0,          defaults(),                                              "0ms"),
    case(0,          Options {verbose: true, ..defaults()},                   "0 milliseconds"),
    case(1000,       defaults(),                                              "1s"),
    case(1000,       Options {verbose: true, ..defaults()},                   "1 second"),
    case(95_000,     defaults(),                                              "1m 35s"),
    case(95_000,     Options {colon_notation: true, ..defaults()},            "1:35"),
    case(86_400_000, defaults(),                                              "1d"),
    case(1234,       Options {compact: true, ..defaults()},                   "1s"),
    case(3_723_400,  Options {unit_count: Some(2), ..defaults()},             "1h 2m"),
    case(3_723_400,  Options {unit_count: Some(0), ..defaults()},             "1h"),
    case(1001,       Options {seconds_decimal_digits: Some(3), ..defaults()}, "1.001s"),
    case(1000,       Options {seconds_decimal_digits: Some(0), ..defaults()}, "1s"),
    case(1000,       Options {keep_decimals_on_whole_seconds: true, ..defaults()}, "1.0s"),
    case(33_333,     Options {seconds_decimal_digits: Some(4), ..defaults()}, "33.3330s"),
    case(1234,       Options {separate_milliseconds: true, ..defaults()},     "1s 234ms"),
    case(2000,       Options {verbose: true, ..defaults()},                   "2 seconds"),
    case(60_000,     Options {verbose: true, minutes_decimal_digits: Some(3), ..defaults()}, "1 minute"),
    case(1543,       Options {compact: true, colon_notation: true, ..defaults()}, "0"),
    case(3_723_400,  Options {compact: true, colon_notation: true, ..defaults()}, "1"),
    case(61_000,     Options {seconds_decimal_digits: Some(400), ..defaults()}, "1m 1s"),
)]
fn properties(milliseconds: i64, options: Options, expected: &str) {
    assert_eq!(format(milliseconds, &options).unwrap(), expected);
}

#[rstest(milliseconds, options, expected,
    case(0.4,     defaults(),                                                     "0ms"),
    case(0.4,     Options {format_sub_milliseconds: true, ..defaults()},          "400µs"),
    case(0.4,     Options {milliseconds_decimal_digits: Some(2), ..defaults()},   "0.40ms"),
    case(1.5,     Options {verbose: true, milliseconds_decimal_digits: Some(1), ..defaults()}, "1.5 milliseconds"),
    case(95_000.0, Options {colon_notation: true, ..defaults()},                  "1:35"),
    case(0.125,   Options {milliseconds_decimal_digits: Some(2), ..defaults()},   "0.13ms"),
    case(1.25,    Options {milliseconds_decimal_digits: Some(1), ..defaults()},   "1.3ms"),
)]
fn real_input(milliseconds: f64, options: Options, expected: &str) {
    assert_eq!(format(milliseconds, &options).unwrap(), expected);
}

#[test]
fn big_input_matches_integer_input() {
    for milliseconds in [0i64, 999, 1000, 95_000, 86_400_000, 31_626_061_001] {
        for options in [
            defaults(),
            Options {verbose: true, ..defaults()},
            Options {colon_notation: true, ..defaults()},
            Options {format_sub_milliseconds: true, ..defaults()},
        ] {
            assert_eq!(
                format(BigInt::from(milliseconds), &options).unwrap(),
                format(milliseconds, &options).unwrap(),
            );
        }
    }
}

#[test]
fn never_empty() {
    for milliseconds in [0i64, 1, 999, 1000, 59_999, 60_000, 3_600_000, 86_400_000, 31_536_000_000] {
        for unit_count in [None, Some(0), Some(1), Some(5)] {
            for verbose in [false, true] {
                let options = Options {unit_count, verbose, ..defaults()};
                assert!(!format(milliseconds, &options).unwrap().is_empty());
            }
        }
    }
}

#[test]
fn idempotent() {
    let options = Options {colon_notation: true, seconds_decimal_digits: Some(2), ..defaults()};
    assert_eq!(format(123_456_789, &options).unwrap(), format(123_456_789, &options).unwrap());
}

#[test]
fn caller_options_are_not_modified() {
    let options = Options {colon_notation: true, compact: true, verbose: true, ..defaults()};
    let copy = options.clone();

    format(1000, &options).unwrap();
    assert_eq!(options, copy);
}

#[rstest(milliseconds, expected,
    case(1,  "1 millisecond"),
    case(2,  "2 milliseconds"),
    case(60_000, "1 minute"),
    case(120_000, "2 minutes"),
    case(86_400_000 + 3_600_000, "1 day 1 hour"),
)]
fn pluralization(milliseconds: i64, expected: &str) {
    assert_eq!(format(milliseconds, &Options {verbose: true, ..defaults()}).unwrap(), expected);
}

#[test]
fn invalid_input() {
    for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(matches!(format(value, &defaults()), Err(FormatError::InvalidInput(_))));
    }
}
