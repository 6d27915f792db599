use log::trace;
use serde::Deserialize;

/// Formatting options.
///
/// Every option is independent on input; [`Options::normalize`] resolves the interactions between
/// them before formatting.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct Options {
    /// Show only the largest unit, without any decimals.
    pub compact: bool,

    /// Maximum number of units to show (values below 1 are treated as 1).
    pub unit_count: Option<usize>,

    /// Digital watch like `5:01:02.4` output. Overrides `compact`, `format_sub_milliseconds`,
    /// `separate_milliseconds` and `verbose`.
    pub colon_notation: bool,

    /// Number of digits after the decimal point for seconds (1 by default).
    pub seconds_decimal_digits: Option<usize>,

    /// Accepted for compatibility, has no effect on the output.
    pub minutes_decimal_digits: Option<usize>,

    /// Number of digits after the decimal point for milliseconds (0 by default).
    pub milliseconds_decimal_digits: Option<usize>,

    /// Show milliseconds, microseconds and nanoseconds as separate units.
    pub format_sub_milliseconds: bool,

    /// Use full unit names: `5 hours 1 minute` instead of `5h 1m`.
    pub verbose: bool,

    /// Show milliseconds separately from seconds.
    pub separate_milliseconds: bool,

    /// Keep `.0` decimals on whole seconds: `1.0s` instead of `1s`.
    pub keep_decimals_on_whole_seconds: bool,
}

impl Options {
    /// Returns the canonical options: colon notation switches off everything that doesn't fit into
    /// it, then compact mode restricts the output to a single integer unit.
    ///
    /// Compact mode still limits the unit count to one under colon notation, but keeps the
    /// configured decimal digits there.
    pub fn normalize(&self) -> Options {
        if self.colon_notation {
            if self.compact || self.format_sub_milliseconds || self.separate_milliseconds || self.verbose {
                trace!("Colon notation overrides compact, sub-millisecond and verbose options.");
            }

            return Options {
                compact: false,
                unit_count: if self.compact { Some(1) } else { self.unit_count },
                format_sub_milliseconds: false,
                separate_milliseconds: false,
                verbose: false,
                ..self.clone()
            };
        }

        if self.compact {
            return Options {
                unit_count: Some(1),
                seconds_decimal_digits: Some(0),
                milliseconds_decimal_digits: Some(0),
                ..self.clone()
            };
        }

        self.clone()
    }
}
