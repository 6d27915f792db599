use std::fmt;
use std::time::Duration;

use crate::accumulate::accumulate;
use crate::assemble::assemble;
use crate::errors::FormatError;
use crate::input::{Magnitude, Milliseconds, Validated, validate};
use crate::options::Options;

/// Formats a number of milliseconds as a human readable duration: `1d 2h 3m` or `1:02:03.4` with
/// colon notation.
///
/// Negative durations are formatted as their absolute value prefixed with `-`. The only possible
/// error is a non-finite real input.
pub fn format<T: Into<Milliseconds>>(milliseconds: T, options: &Options) -> Result<String, FormatError> {
    let input = validate(&milliseconds.into())?;
    Ok(render(&input, &options.normalize()))
}

/// Formats [`Duration`] with nanosecond precision.
pub fn format_duration(duration: Duration, options: &Options) -> String {
    let input = Validated {
        negative: false,
        magnitude: Magnitude::Precise {
            milliseconds: duration.as_millis().into(),
            nanoseconds: duration.subsec_nanos() % 1_000_000,
        },
    };
    render(&input, &options.normalize())
}

fn render(input: &Validated, options: &Options) -> String {
    let tokens = accumulate(&input.magnitude, options);
    let formatted = assemble(&tokens, options);

    if input.negative && !tokens.is_empty() {
        format!("-{formatted}")
    } else {
        formatted
    }
}

/// [`fmt::Display`] adapter for already validated input.
///
/// ```
/// use pretty_ms::{Options, PrettyMs};
///
/// let options = Options {verbose: true, ..Default::default()};
/// let duration = PrettyMs::new(95_000, &options).unwrap();
/// assert_eq!(format!("Elapsed: {duration}"), "Elapsed: 1 minute 35 seconds");
/// ```
#[derive(Debug, Clone)]
pub struct PrettyMs {
    input: Validated,
    options: Options,
}

impl PrettyMs {
    pub fn new<T: Into<Milliseconds>>(milliseconds: T, options: &Options) -> Result<PrettyMs, FormatError> {
        Ok(PrettyMs {
            input: validate(&milliseconds.into())?,
            options: options.normalize(),
        })
    }
}

impl fmt::Display for PrettyMs {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&render(&self.input, &self.options))
    }
}
