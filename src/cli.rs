use clap::builder::StyledStr;
use clap::{Arg, ArgAction, Command};
use indoc::indoc;

pub fn new_app(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        // Default template contains `{bin} {version}` for some reason
        .help_template(indoc!("
            {before-help}{about}

            {usage-heading}
                {usage}

            {all-args}{after-help}\
        "))
        .about(about)
        .disable_help_subcommand(true)
        .dont_collapse_args_in_usage(true)
}

pub fn new_arg(name: &'static str, help: impl Into<StyledStr>) -> Arg {
    Arg::new(name).help(help)
}

pub fn new_flag(name: &'static str, help: &'static str) -> Arg {
    new_arg(name, help).action(ArgAction::SetTrue)
}
