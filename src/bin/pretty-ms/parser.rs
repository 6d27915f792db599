use clap::{ArgAction, ArgMatches, Command, value_parser};

use pretty_ms::cli;
use pretty_ms::config::DEFAULT_CONFIG_PATH;
use pretty_ms::core::GenericResult;
use pretty_ms::{Milliseconds, Options};

pub struct Parser {
    matches: ArgMatches,
}

pub struct GlobalOptions {
    pub log_level: log::Level,
    pub config_path: Option<String>,
}

impl Parser {
    pub fn new() -> Parser {
        Parser {matches: new_app().get_matches()}
    }

    #[cfg(test)]
    fn from_args(args: &[&str]) -> GenericResult<Parser> {
        let matches = new_app().try_get_matches_from(
            std::iter::once("pretty-ms").chain(args.iter().copied()))?;
        Ok(Parser {matches})
    }

    pub fn parse_global(&self) -> GenericResult<GlobalOptions> {
        let log_level = match self.matches.get_count("debug") {
            0 => log::Level::Info,
            1 => log::Level::Debug,
            2 => log::Level::Trace,
            _ => return Err("Invalid verbosity level".into()),
        };

        let config_path = self.matches.get_one::<String>("config").cloned();

        Ok(GlobalOptions {log_level, config_path})
    }

    /// Applies command line options on top of the configuration file ones.
    pub fn parse(&self, mut options: Options) -> GenericResult<(Options, Vec<Milliseconds>)> {
        let matches = &self.matches;

        for (name, option) in [
            ("compact", &mut options.compact),
            ("colon_notation", &mut options.colon_notation),
            ("format_sub_milliseconds", &mut options.format_sub_milliseconds),
            ("verbose", &mut options.verbose),
            ("separate_milliseconds", &mut options.separate_milliseconds),
            ("keep_decimals_on_whole_seconds", &mut options.keep_decimals_on_whole_seconds),
        ] {
            if matches.get_flag(name) {
                *option = true;
            }
        }

        for (name, option) in [
            ("unit_count", &mut options.unit_count),
            ("seconds_decimal_digits", &mut options.seconds_decimal_digits),
            ("minutes_decimal_digits", &mut options.minutes_decimal_digits),
            ("milliseconds_decimal_digits", &mut options.milliseconds_decimal_digits),
        ] {
            if let Some(&value) = matches.get_one::<usize>(name) {
                *option = Some(value);
            }
        }

        let values = matches.get_many::<String>("MILLISECONDS").into_iter().flatten()
            .map(|value| value.parse::<Milliseconds>())
            .collect::<Result<Vec<_>, _>>()?;

        Ok((options, values))
    }
}

fn new_app() -> Command {
    cli::new_app("pretty-ms", "Converts milliseconds to a human readable duration")
        .version(env!("CARGO_PKG_VERSION"))
        .arg_required_else_help(true)
        .args([
            cli::new_arg("config", format!("Configuration file path [default: {DEFAULT_CONFIG_PATH}]"))
                .long("config")
                .value_name("PATH"),

            cli::new_arg("debug", "Set logging verbosity level")
                .short('d').long("debug")
                .action(ArgAction::Count),

            cli::new_flag("compact", "Show only the largest unit without decimals")
                .short('c').long("compact"),

            cli::new_arg("unit_count", "Maximum number of units to show")
                .short('u').long("unit-count")
                .value_name("COUNT")
                .value_parser(value_parser!(usize)),

            cli::new_flag("colon_notation", "Digital watch like output: 5:01:02.4")
                .long("colon-notation"),

            cli::new_arg("seconds_decimal_digits", "Number of digits after the decimal point for seconds")
                .long("seconds-decimal-digits")
                .value_name("DIGITS")
                .value_parser(value_parser!(usize)),

            cli::new_arg("minutes_decimal_digits", "Number of digits after the decimal point for minutes (has no effect)")
                .long("minutes-decimal-digits")
                .value_name("DIGITS")
                .value_parser(value_parser!(usize)),

            cli::new_arg("milliseconds_decimal_digits", "Number of digits after the decimal point for milliseconds")
                .long("milliseconds-decimal-digits")
                .value_name("DIGITS")
                .value_parser(value_parser!(usize)),

            cli::new_flag("format_sub_milliseconds", "Show microseconds and nanoseconds")
                .long("format-sub-milliseconds"),

            cli::new_flag("verbose", "Use full unit names")
                .short('v').long("verbose"),

            cli::new_flag("separate_milliseconds", "Show milliseconds separately from seconds")
                .long("separate-milliseconds"),

            cli::new_flag("keep_decimals_on_whole_seconds", "Keep decimals on whole seconds: 1.0s instead of 1s")
                .long("keep-decimals-on-whole-seconds"),

            cli::new_arg("MILLISECONDS", "Durations to format")
                .num_args(1..)
                .required(true)
                .allow_negative_numbers(true),
        ])
}
